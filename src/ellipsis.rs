use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::measure::{CellMeasurer, TextMeasurer};

/// Glyphs rendered between the visible prefix and tail.
pub const ELLIPSIS: &str = "...";

/// Character widths reserved for the ellipsis glyphs when a prefix is shown.
const ELLIPSIS_RESERVE: f64 = 3.0;

/// How a source string splits for display: a visible prefix, an elided
/// middle, and a visible tail. Concatenating the three fields always
/// reproduces the source text exactly, truncated or not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Truncation {
    pub prefix: String,
    pub hidden: String,
    pub tail: String,
    /// True iff the measured width exceeds the available width. Reported
    /// even when truncation is disabled, so callers can still surface a
    /// tooltip on overflow.
    pub overflow: bool,
}

impl Truncation {
    pub fn is_truncated(&self) -> bool {
        !self.hidden.is_empty()
    }

    /// The string actually shown: `prefix...tail` when truncated, the full
    /// text otherwise.
    pub fn display(&self) -> String {
        let glyphs = if self.is_truncated() { ELLIPSIS } else { "" };
        format!("{}{}{}", self.prefix, glyphs, self.tail)
    }

    /// The full source text, reassembled from the three segments.
    pub fn reconstruct(&self) -> String {
        format!("{}{}{}", self.prefix, self.hidden, self.tail)
    }

    /// Tooltip text to expose, present only while overflowing.
    pub fn tooltip<'t>(&self, title: &'t str) -> Option<&'t str> {
        if self.overflow && !title.is_empty() {
            Some(title)
        } else {
            None
        }
    }
}

/// Splits `text` so that its last `tail_len` characters stay visible when it
/// overflows `available_width`.
///
/// The fit estimate is a linear approximation: the average character width
/// is `measured_width / char_count`, and the number of characters that fit
/// is `available_width / average`. This is deliberately not a per-glyph
/// measurement; proportional and mixed-width text gets a best-effort split.
///
/// A `tail_len` of zero disables truncation entirely (the overflow flag is
/// still computed). All index arithmetic is clamped, so pathological widths
/// and tails longer than the text itself degrade instead of panicking.
pub fn truncate_with_tail(
    text: &str,
    tail_len: usize,
    measured_width: u16,
    available_width: u16,
) -> Truncation {
    let overflow = measured_width > available_width;
    let char_count = text.chars().count();

    if tail_len == 0 || !overflow || char_count == 0 {
        return Truncation {
            prefix: text.to_string(),
            hidden: String::new(),
            tail: String::new(),
            overflow,
        };
    }

    // overflow guarantees measured_width >= 1, so the average is non-zero.
    let average = f64::from(measured_width) / char_count as f64;
    let fitting = f64::from(available_width) / average;

    let tail_chars = tail_len.min(char_count);

    if tail_chars as f64 >= fitting {
        // Even the requested tail alone does not fit: hide the front and
        // show whatever suffix does fit. The literal tail count is not
        // honored here; ending near the true end wins.
        let middle = clamp_index(char_count as f64 - fitting, char_count);
        Truncation {
            prefix: String::new(),
            hidden: text.chars().take(middle).collect(),
            tail: text.chars().skip(middle).collect(),
            overflow,
        }
    } else {
        // The tail fits alongside some prefix; reserve room for the glyphs.
        let tail_start = char_count - tail_chars;
        let prefix_end = clamp_index(fitting - tail_chars as f64 - ELLIPSIS_RESERVE, tail_start);
        Truncation {
            prefix: text.chars().take(prefix_end).collect(),
            hidden: text
                .chars()
                .skip(prefix_end)
                .take(tail_start - prefix_end)
                .collect(),
            tail: text.chars().skip(tail_start).collect(),
            overflow,
        }
    }
}

/// Clamps a fractional character index to `[0, max]`, truncating toward
/// zero the way the fit estimate expects.
fn clamp_index(value: f64, max: usize) -> usize {
    if value.is_finite() && value > 0.0 {
        (value as usize).min(max)
    } else {
        0
    }
}

/// Single-line text widget that elides the middle of overflowing text while
/// keeping the last `tail_len` characters visible.
///
/// Callers that cache the measured width (see [`crate::measure::MeasuredText`])
/// can pass it in with [`TailEllipsis::measured_width`]; otherwise the
/// widget measures the text itself on render.
#[derive(Debug, Clone)]
pub struct TailEllipsis<'a> {
    text: &'a str,
    tail_len: usize,
    title: Option<&'a str>,
    style: Style,
    measured_width: Option<u16>,
}

impl<'a> TailEllipsis<'a> {
    pub fn new(text: &'a str, tail_len: usize) -> Self {
        Self {
            text,
            tail_len,
            title: None,
            style: Style::default(),
            measured_width: None,
        }
    }

    /// Tooltip text surfaced through [`TailEllipsis::tooltip`] while the
    /// text overflows.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn measured_width(mut self, width: u16) -> Self {
        self.measured_width = Some(width);
        self
    }

    /// The split this widget would render into `available_width` cells.
    pub fn truncation(&self, available_width: u16) -> Truncation {
        let measured = self
            .measured_width
            .unwrap_or_else(|| CellMeasurer.measure(self.text));
        truncate_with_tail(self.text, self.tail_len, measured, available_width)
    }

    /// The configured title, present only while the text would overflow
    /// `available_width`.
    pub fn tooltip(&self, available_width: u16) -> Option<&'a str> {
        let title = self.title?;
        self.truncation(available_width).tooltip(title)
    }
}

impl Widget for TailEllipsis<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let truncation = self.truncation(area.width);
        let truncated = truncation.is_truncated();
        let mut spans = Vec::with_capacity(3);
        if !truncation.prefix.is_empty() {
            spans.push(Span::styled(truncation.prefix, self.style));
        }
        if truncated {
            spans.push(Span::styled(
                ELLIPSIS,
                self.style.add_modifier(Modifier::DIM),
            ));
        }
        if !truncation.tail.is_empty() {
            spans.push(Span::styled(truncation.tail, self.style));
        }
        Line::from(spans).render(area, buf);
    }
}
