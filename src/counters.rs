//! Labeled counters and their display formatting.
//!
//! A [`Counter`] pairs a short label with the value it counts up to. How the
//! value is printed is fixed when the counter is built ([`CounterKind`]), so
//! the builders never compare label strings while rendering.
//!
//! Formatting uses `heapless::String` with `core::fmt::Write`; the longest
//! possible value (`i64::MAX` with separators) fits in [`ValueText`].

use core::fmt::Write;

use heapless::String;

/// Formatted value text. 19 digits + 6 separators + sign fits comfortably.
pub type ValueText = String<32>;

/// Label of the monetary counter on the official-funding screen.
pub const MONEY_LABEL: &str = "FINANCIACION";

/// How a counter's value is printed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CounterKind {
    /// Plain decimal, e.g. `2695566`.
    #[default]
    Plain,
    /// Thousands grouped with '.', e.g. `2.695.566`.
    Money,
}

impl CounterKind {
    /// Kind implied by a label (case-insensitive).
    pub fn for_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case(MONEY_LABEL) {
            Self::Money
        } else {
            Self::Plain
        }
    }

    /// Render `value` for display.
    pub fn format(self, value: i64) -> ValueText {
        match self {
            Self::Plain => {
                let mut s = ValueText::new();
                write!(s, "{value}").ok();
                s
            }
            Self::Money => format_thousands(value),
        }
    }
}

/// One labeled statistic on a screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Counter {
    pub label: &'static str,
    pub value: i64,
    pub kind: CounterKind,
}

impl Counter {
    /// Counter whose kind is derived from its label.
    pub fn new(label: &'static str, value: i64) -> Self {
        Self {
            label,
            value,
            kind: CounterKind::for_label(label),
        }
    }

    /// Same counter with a different target value.
    #[must_use]
    pub const fn with_value(self, value: i64) -> Self { Self { value, ..self } }

    /// Display text for an intermediate (animated) value.
    #[inline]
    pub fn format(&self, shown: i64) -> ValueText { self.kind.format(shown) }
}

/// Group decimal digits in thousands separated by '.'. Negatives clamp to 0.
pub fn format_thousands(n: i64) -> ValueText {
    let mut digits: String<20> = String::new();
    write!(digits, "{}", n.max(0)).ok();

    let len = digits.len();
    let mut out = ValueText::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.').ok();
        }
        out.push(c).ok();
    }
    out
}

/// Display text for `value` under `label`'s formatting rule.
pub fn format_value(label: &str, value: i64) -> ValueText { CounterKind::for_label(label).format(value) }
