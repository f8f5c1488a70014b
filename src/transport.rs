//! Device transport.
//!
//! The panel accepts JSON commands on `http://<host>/post`. An animation is
//! uploaded as three control commands followed by one `Draw/SendHttpGif` per
//! frame, each carrying the frame index, the total count and the raw RGB
//! bytes in base64. The device starts playing once the last frame arrives.
//!
//! # Failure Handling
//!
//! Every command is retried a fixed number of times with a fixed backoff.
//! Running out of attempts is fatal for the whole upload; there is no resume
//! from a partial sequence.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use ureq::Agent;

use crate::config::{
    ANIMATION_ID, FRAME_MS, HTTP_CHANNEL_INDEX, POST_ATTEMPTS, POST_BACKOFF, REQUEST_TIMEOUT, SCREEN_WIDTH, SEND_PACING,
};
use crate::frame::Frame;

// =============================================================================
// Commands
// =============================================================================

/// One JSON envelope understood by the device.
#[derive(Serialize, Clone, PartialEq, Eq, Debug)]
#[serde(tag = "Command")]
pub enum Command {
    #[serde(rename = "Channel/SetIndex")]
    SelectChannel {
        #[serde(rename = "SelectIndex")]
        index: u8,
    },
    #[serde(rename = "Draw/ClearHttpText")]
    ClearText,
    #[serde(rename = "Draw/ResetHttpGifId")]
    ResetAnimation,
    #[serde(rename = "Draw/SendHttpGif")]
    SendFrame {
        #[serde(rename = "PicNum")]
        count: usize,
        #[serde(rename = "PicWidth")]
        width: u32,
        #[serde(rename = "PicOffset")]
        offset: usize,
        #[serde(rename = "PicID")]
        id: u32,
        #[serde(rename = "PicSpeed")]
        speed_ms: u32,
        #[serde(rename = "PicData")]
        data: String,
    },
}

impl Command {
    /// Device-side command name, used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectChannel { .. } => "Channel/SetIndex",
            Self::ClearText => "Draw/ClearHttpText",
            Self::ResetAnimation => "Draw/ResetHttpGifId",
            Self::SendFrame { .. } => "Draw/SendHttpGif",
        }
    }

    /// Frame upload command for position `offset` of a `count`-frame animation.
    pub fn send_frame(frame: &Frame, offset: usize, count: usize) -> Self {
        Self::SendFrame {
            count,
            width: SCREEN_WIDTH,
            offset,
            id: ANIMATION_ID,
            speed_ms: FRAME_MS,
            data: frame.to_base64(),
        }
    }
}

// =============================================================================
// Transports
// =============================================================================

/// Something that can deliver one command to the device.
pub trait Transport {
    fn post(&mut self, command: &Command) -> Result<()>;
}

/// Reply body; the device answers every command with an `error_code`.
#[derive(Deserialize, Debug)]
struct DeviceReply {
    #[serde(default)]
    error_code: i64,
}

/// Blocking HTTP transport to a device on the local network.
pub struct HttpTransport {
    agent: Agent,
    url: String,
}

impl HttpTransport {
    pub fn new(host: &str) -> Self {
        let agent: Agent = Agent::config_builder().timeout_global(Some(REQUEST_TIMEOUT)).build().into();
        Self {
            agent,
            url: format!("http://{host}/post"),
        }
    }

    pub fn url(&self) -> &str { &self.url }
}

impl Transport for HttpTransport {
    fn post(&mut self, command: &Command) -> Result<()> {
        let mut response = self
            .agent
            .post(&self.url)
            .send_json(command)
            .with_context(|| format!("POST {} failed", self.url))?;
        match response.body_mut().read_to_string() {
            Ok(body) => check_reply(command, &body),
            Err(e) => {
                debug!("Ignoring unreadable reply to {}: {e}", command.name());
                Ok(())
            }
        }
    }
}

/// Judge a reply that arrived with a success status.
///
/// Only an explicit non-zero `error_code` fails; empty or non-JSON bodies are
/// accepted since the status already reported success.
fn check_reply(command: &Command, body: &str) -> Result<()> {
    match serde_json::from_str::<DeviceReply>(body) {
        Ok(reply) if reply.error_code != 0 => {
            bail!("device rejected {} with error_code {}", command.name(), reply.error_code)
        }
        Ok(_) => Ok(()),
        Err(e) => {
            debug!("Reply to {} is not JSON ({e}), accepting", command.name());
            Ok(())
        }
    }
}

// =============================================================================
// Retry & Upload
// =============================================================================

/// Attempt bound and delays applied while uploading.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SendSettings {
    pub attempts: usize,
    /// Sleep after each failed attempt.
    pub backoff: Duration,
    /// Sleep after each frame upload.
    pub pacing: Duration,
}

impl SendSettings {
    pub const DEFAULT: Self = Self {
        attempts: POST_ATTEMPTS,
        backoff: POST_BACKOFF,
        pacing: SEND_PACING,
    };
}

impl Default for SendSettings {
    fn default() -> Self { Self::DEFAULT }
}

/// Post `command`, retrying up to `settings.attempts` times.
pub fn post_with_retry<T: Transport + ?Sized>(transport: &mut T, command: &Command, settings: &SendSettings) -> Result<()> {
    let mut last_error = None;
    for attempt in 1..=settings.attempts {
        match transport.post(command) {
            Ok(()) => return Ok(()),
            Err(e) => {
                warn!("{} attempt {attempt}/{} failed: {e:#}", command.name(), settings.attempts);
                last_error = Some(e);
                thread::sleep(settings.backoff);
            }
        }
    }
    let cause = last_error.unwrap_or_else(|| anyhow!("no attempts allowed"));
    Err(cause.context(format!("giving up on {} after {} attempts", command.name(), settings.attempts)))
}

/// Upload `frames` as one looping animation.
pub fn send_animation<T: Transport + ?Sized>(transport: &mut T, frames: &[Frame], settings: &SendSettings) -> Result<()> {
    let controls = [
        Command::SelectChannel {
            index: HTTP_CHANNEL_INDEX,
        },
        Command::ClearText,
        Command::ResetAnimation,
    ];
    for command in &controls {
        post_with_retry(transport, command, settings)?;
    }

    info!("Uploading {} frames", frames.len());
    for (offset, frame) in frames.iter().enumerate() {
        let command = Command::send_frame(frame, offset, frames.len());
        post_with_retry(transport, &command, settings).with_context(|| format!("frame {offset}"))?;
        debug!("Frame {}/{} sent", offset + 1, frames.len());
        thread::sleep(settings.pacing);
    }
    info!("Upload complete");
    Ok(())
}
