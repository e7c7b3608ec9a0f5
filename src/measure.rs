use unicode_width::UnicodeWidthStr;

/// Measures the display width a string would occupy, without rendering it.
///
/// The terminal analogue of an off-screen canvas measurement: implementations
/// report width in cells and must have no observable side effects.
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> u16;
}

/// Default measurer backed by the Unicode east-asian-width tables, which is
/// what the terminal itself uses to lay out cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasurer;

impl TextMeasurer for CellMeasurer {
    fn measure(&self, text: &str) -> u16 {
        u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX)
    }
}

/// Once-per-text width cache owned by a single component instance.
///
/// Only the container's available width changes on resize, not the text's
/// intrinsic width, so the measurement is reused across resize events. The
/// cache remembers which text it measured: asking for a different text
/// re-measures, so a stale width is unrepresentable.
#[derive(Debug, Default)]
pub struct MeasuredText {
    cached: Option<(String, u16)>,
}

impl MeasuredText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the width of `text`, measuring on first use and whenever the
    /// text differs from the one last measured.
    pub fn width(&mut self, text: &str, measurer: &impl TextMeasurer) -> u16 {
        match &self.cached {
            Some((measured, width)) if measured == text => *width,
            _ => {
                let width = measurer.measure(text);
                self.cached = Some((text.to_string(), width));
                width
            }
        }
    }

    /// Drops the cached width. Call when the measurement context (the
    /// font, in GUI terms) changes out from under the text.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// The most recently measured width, if any.
    pub fn cached_width(&self) -> Option<u16> {
        self.cached.as_ref().map(|(_, width)| *width)
    }
}
