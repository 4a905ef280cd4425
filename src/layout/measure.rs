//! Text measurement.

/// Measures the advance width of a string.
///
/// Widths are returned in points for the given font size; the engine converts
/// them to page units.
pub trait TextMeasure: Send + Sync {
    /// Width of `text` set at `font_size` points.
    fn text_width(&self, text: &str, font_size: f32, bold: bool) -> f32;
}

/// Advance widths of the standard Helvetica fonts, in 1/1000 em.
///
/// Covers printable ASCII; other characters fall back to a typical lowercase
/// advance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Helvetica;

// Printable ASCII from U+0020 through U+007E.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

impl Helvetica {
    fn advance(ch: char, bold: bool) -> u16 {
        let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
        match ch {
            ' '..='~' => table[ch as usize - 0x20],
            '•' => 350,
            '–' => 556,
            '—' => 1000,
            '\u{2018}' | '\u{2019}' => if bold { 278 } else { 222 },
            '\u{201C}' | '\u{201D}' => if bold { 500 } else { 333 },
            _ => 556,
        }
    }
}

impl TextMeasure for Helvetica {
    fn text_width(&self, text: &str, font_size: f32, bold: bool) -> f32 {
        let units: u32 = text.chars().map(|c| Self::advance(c, bold) as u32).sum();
        units as f32 * font_size / 1000.0
    }
}

/// Fixed advance per character, as a fraction of the font size.
#[derive(Debug, Clone, Copy)]
pub struct AverageAdvance {
    /// Advance of a regular character, in em
    pub regular: f32,
    /// Advance of a bold character, in em
    pub bold: f32,
}

impl AverageAdvance {
    /// Same advance for both weights.
    pub fn uniform(em: f32) -> Self {
        Self {
            regular: em,
            bold: em,
        }
    }
}

impl Default for AverageAdvance {
    fn default() -> Self {
        Self {
            regular: 0.5,
            bold: 0.55,
        }
    }
}

impl TextMeasure for AverageAdvance {
    fn text_width(&self, text: &str, font_size: f32, bold: bool) -> f32 {
        let em = if bold { self.bold } else { self.regular };
        text.chars().count() as f32 * em * font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helvetica_known_widths() {
        let m = Helvetica;
        // "Hi" = 722 + 222
        assert!((m.text_width("Hi", 10.0, false) - 9.44).abs() < 1e-4);
        // Bold "Hi" = 722 + 278
        assert!((m.text_width("Hi", 10.0, true) - 10.0).abs() < 1e-4);
        assert_eq!(m.text_width("", 12.0, false), 0.0);
    }

    #[test]
    fn test_helvetica_scales_with_size() {
        let m = Helvetica;
        let small = m.text_width("resume", 10.0, false);
        let large = m.text_width("resume", 20.0, false);
        assert!((large - 2.0 * small).abs() < 1e-4);
    }

    #[test]
    fn test_average_advance() {
        let m = AverageAdvance::uniform(0.5);
        assert_eq!(m.text_width("abcd", 10.0, false), 20.0);
        assert_eq!(m.text_width("abcd", 10.0, true), 20.0);
        assert!((AverageAdvance::default().text_width("ab", 10.0, true) - 11.0).abs() < 1e-4);
    }
}
