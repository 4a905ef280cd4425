//! Page-level output types.

use serde::{Deserialize, Serialize};

/// Length unit used for page geometry and run positions.
///
/// Font sizes are always in points regardless of the page unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Millimetres
    #[default]
    Mm,
    /// PostScript points (1/72 inch)
    Pt,
}

impl Unit {
    /// Size of one point expressed in this unit.
    pub fn per_point(self) -> f32 {
        match self {
            Unit::Mm => 25.4 / 72.0,
            Unit::Pt => 1.0,
        }
    }

    /// Convert a length in this unit to points.
    pub fn to_points(self, value: f32) -> f32 {
        value / self.per_point()
    }
}

/// A single laid-out page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Full page width, margins included
    pub width: f32,

    /// Full page height, margins included
    pub height: f32,

    /// Unit of `width`, `height` and run positions
    pub unit: Unit,

    /// Vertical space consumed below the top margin
    pub content_height: f32,

    /// Positioned text runs in emission order
    pub runs: Vec<TextRun>,
}

impl Page {
    /// Create an empty page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32, unit: Unit) -> Self {
        Self {
            number,
            width,
            height,
            unit,
            content_height: 0.0,
            runs: Vec::new(),
        }
    }

    /// Add a run to the page.
    pub fn push_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Check if the page holds no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Get page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Text of every run, in emission order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.runs.iter().map(|r| r.text.as_str())
    }

    /// Runs grouped into visual lines (runs sharing a `y`), left to right.
    pub fn lines(&self) -> Vec<Vec<&TextRun>> {
        let mut lines: Vec<Vec<&TextRun>> = Vec::new();
        for run in &self.runs {
            match lines.last_mut() {
                Some(line) if line[0].y == run.y => line.push(run),
                _ => lines.push(vec![run]),
            }
        }
        for line in &mut lines {
            line.sort_by(|a, b| a.x.total_cmp(&b.x));
        }
        lines
    }

    /// Plain text of the page, one visual line per text line.
    pub fn plain_text(&self) -> String {
        self.lines()
            .iter()
            .map(|line| {
                line.iter()
                    .map(|r| r.text.as_str())
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A positioned run of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Left edge, in page units from the left page edge
    pub x: f32,

    /// Top of the line slot, in page units from the top page edge
    pub y: f32,

    /// Font size in points
    pub font_size: f32,

    /// Bold weight
    pub bold: bool,
}

impl TextRun {
    /// Create a regular-weight run.
    pub fn new(text: impl Into<String>, x: f32, y: f32, font_size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
            bold: false,
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>, x: f32, y: f32, font_size: f32) -> Self {
        Self {
            bold: true,
            ..Self::new(text, x, y, font_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_conversion() {
        assert_eq!(Unit::Pt.to_points(12.0), 12.0);
        let a4_width = Unit::Mm.to_points(210.0);
        assert!((a4_width - 595.28).abs() < 0.01);
    }

    #[test]
    fn test_lines_group_by_y() {
        let mut page = Page::new(1, 210.0, 297.0, Unit::Mm);
        page.push_run(TextRun::bold("Engineer", 20.0, 30.0, 11.0));
        page.push_run(TextRun::new("2022 - Present", 160.0, 30.0, 11.0));
        page.push_run(TextRun::new("Acme", 20.0, 37.0, 10.0));

        let lines = page.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 2);
        assert_eq!(page.plain_text(), "Engineer  2022 - Present\nAcme");
    }

    #[test]
    fn test_serialized_run_field_names() {
        let run = TextRun::bold("x", 1.0, 2.0, 10.0);
        let json = serde_json::to_string(&run).unwrap();
        assert!(json.contains("\"fontSize\":10.0"));
        assert!(json.contains("\"bold\":true"));
    }
}
