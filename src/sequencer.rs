//! Screen catalog and frame sequencing.
//!
//! The uploaded animation is the concatenation of every screen's frames in a
//! fixed order:
//!
//! | # | Title          | Layout                          |
//! |---|----------------|---------------------------------|
//! | 1 | PUBLICACIONES  | small 4-box (quartiles)         |
//! | 2 | DIRECCIONES    | wide 4-box (supervision)        |
//! | 3 | IP. PROYECTOS  | wide 4-box (project leadership) |
//! | 4 | CURSO DOCENTE  | two-box 18/39 gold/silver       |
//! | 5 | REGISTROS      | two-box 18/40 silver/bronze     |
//! | 6 | RESUMEN        | two-box 18/39 gold/silver       |
//! | 7 | PRO. OFICIALES | two-box 18/39 gold/silver       |
//! | 8 | CONTACTO       | scannable code                  |
//!
//! Within a screen, frame `i` uses grid phase `i % 2` and count-up index `i`
//! clamped to the screen's animation budget.

use log::debug;

use crate::counters::Counter;
use crate::frame::Frame;
use crate::qr::ModuleMatrix;
use crate::screens::{Layout, RenderContext, ScreenSpec, TwoBoxLayout};
use crate::stats::PanelStats;

pub const TITLE_PUBLICATIONS: &str = "PUBLICACIONES";
pub const TITLE_SUPERVISION: &str = "DIRECCIONES";
pub const TITLE_LEADERSHIP: &str = "IP. PROYECTOS";
pub const TITLE_TEACHING: &str = "CURSO DOCENTE";
pub const TITLE_REGISTRATIONS: &str = "REGISTROS";
pub const TITLE_SUMMARY: &str = "RESUMEN";
pub const TITLE_FUNDING: &str = "PRO. OFICIALES";
pub const TITLE_CONTACT: &str = "CONTACTO";

/// Build every screen in display order. `code` is the contact matrix.
pub fn catalog(ctx: &RenderContext, stats: &PanelStats, code: ModuleMatrix) -> Vec<ScreenSpec> {
    let rank = ctx.palette.rank;
    let two_box = |y_bottom, color_top, color_bottom| {
        Layout::TwoBox(TwoBoxLayout {
            y_top: 18,
            y_bottom,
            color_top,
            color_bottom,
        })
    };
    let screen = |title: &'static str, counters: &[Counter], layout: Layout| ScreenSpec {
        title,
        counters: counters.to_vec(),
        layout,
    };

    vec![
        screen(TITLE_PUBLICATIONS, &stats.quartiles, Layout::SmallFourBox),
        screen(TITLE_SUPERVISION, &stats.supervision, Layout::WideFourBox),
        screen(TITLE_LEADERSHIP, &stats.leadership, Layout::WideFourBox),
        screen(TITLE_TEACHING, &stats.teaching, two_box(39, rank.gold, rank.silver)),
        screen(TITLE_REGISTRATIONS, &stats.registrations, two_box(40, rank.silver, rank.bronze)),
        screen(TITLE_SUMMARY, &stats.summary, two_box(39, rank.gold, rank.silver)),
        screen(TITLE_FUNDING, &stats.funding, two_box(39, rank.gold, rank.silver)),
        ScreenSpec {
            title: TITLE_CONTACT,
            counters: Vec::new(),
            layout: Layout::Code(code),
        },
    ]
}

/// Number of frames `screen` contributes to the sequence.
pub fn frame_count(ctx: &RenderContext, screen: &ScreenSpec) -> usize {
    let base = ctx.timing.frames_per_screen();
    match screen.layout {
        Layout::TwoBox(_) => base + ctx.timing.extra_two_box_frames,
        _ => base,
    }
}

/// Render all frames of one screen.
pub fn render_screen(ctx: &RenderContext, screen: &ScreenSpec) -> Vec<Frame> {
    (0..frame_count(ctx, screen))
        .map(|i| screen.render(ctx, (i % 2) as i32, ctx.timing.clamp_frame(i)))
        .collect()
}

/// Render every screen and concatenate the frames in catalog order.
pub fn build_sequence(ctx: &RenderContext, screens: &[ScreenSpec]) -> Vec<Frame> {
    let mut frames = Vec::new();
    for screen in screens {
        let rendered = render_screen(ctx, screen);
        debug!("Screen '{}': {} frames", screen.title, rendered.len());
        frames.extend(rendered);
    }
    frames
}
