//! Page geometry and font configuration.

use crate::error::{Error, Result};
use crate::model::Unit;

/// Named font roles used by the section renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    /// The candidate's name
    Title,
    /// Section headings ("EXPERIENCE", ...)
    Heading,
    /// Entry titles (position, institution, project name)
    Subheading,
    /// Everything else
    Body,
}

/// Size, weight and line height of one font role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    /// Font size in points
    pub size: f32,

    /// Bold weight
    pub bold: bool,

    /// Vertical advance per line, in page units
    pub line_height: f32,
}

impl FontSpec {
    /// Create a regular-weight font spec.
    pub fn regular(size: f32, line_height: f32) -> Self {
        Self {
            size,
            bold: false,
            line_height,
        }
    }

    /// Create a bold font spec.
    pub fn bold(size: f32, line_height: f32) -> Self {
        Self {
            size,
            bold: true,
            line_height,
        }
    }

    /// Same spec with a different weight.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

/// Page geometry, fonts and spacing for a layout run.
///
/// `usable_width` and `usable_height` are the page dimensions minus margins.
/// The full page is `usable + 2 * margin` in each direction.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Content area width
    pub usable_width: f32,

    /// Content area height
    pub usable_height: f32,

    /// Margin on every side
    pub margin: f32,

    /// Unit for all lengths except font sizes
    pub unit: Unit,

    /// Candidate name
    pub title: FontSpec,

    /// Section headings
    pub heading: FontSpec,

    /// Entry titles
    pub subheading: FontSpec,

    /// Body text
    pub body: FontSpec,

    /// Space inserted before each section heading
    pub section_gap: f32,

    /// Space inserted after each repeatable entry
    pub entry_gap: f32,

    /// Left indent of bullet lines
    pub bullet_indent: f32,

    /// Glyph prefixed to responsibility lines
    pub bullet: char,

    /// Move a heading to the next page when its first content line would not
    /// fit under it
    pub keep_heading_with_next: bool,
}

impl PageConfig {
    /// A4 in millimetres: 170 x 257 usable, 20 mm margins.
    pub fn a4() -> Self {
        Self {
            usable_width: 170.0,
            usable_height: 257.0,
            margin: 20.0,
            unit: Unit::Mm,
            title: FontSpec::bold(20.0, 10.0),
            heading: FontSpec::bold(12.0, 7.0),
            subheading: FontSpec::bold(11.0, 7.0),
            body: FontSpec::regular(10.0, 7.0),
            section_gap: 5.0,
            entry_gap: 3.0,
            bullet_indent: 5.0,
            bullet: '•',
            keep_heading_with_next: false,
        }
    }

    /// US Letter in points: 504 x 684 usable, 0.75 inch margins.
    pub fn letter() -> Self {
        Self {
            usable_width: 504.0,
            usable_height: 684.0,
            margin: 54.0,
            unit: Unit::Pt,
            title: FontSpec::bold(20.0, 28.0),
            heading: FontSpec::bold(12.0, 20.0),
            subheading: FontSpec::bold(11.0, 18.0),
            body: FontSpec::regular(10.0, 16.0),
            section_gap: 12.0,
            entry_gap: 8.0,
            bullet_indent: 14.0,
            bullet: '•',
            keep_heading_with_next: false,
        }
    }

    /// Create new config with A4 defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the usable area.
    pub fn with_usable_size(mut self, width: f32, height: f32) -> Self {
        self.usable_width = width;
        self.usable_height = height;
        self
    }

    /// Set the margin, keeping the usable area. The page grows or shrinks.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the margin, keeping the page size. The usable area absorbs the
    /// difference.
    pub fn with_page_margin(mut self, margin: f32) -> Self {
        let (width, height) = (self.page_width(), self.page_height());
        self.margin = margin;
        self.usable_width = width - 2.0 * margin;
        self.usable_height = height - 2.0 * margin;
        self
    }

    /// Set the unit. Existing lengths are not converted.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the spec for one font role.
    pub fn with_font(mut self, role: FontRole, spec: FontSpec) -> Self {
        match role {
            FontRole::Title => self.title = spec,
            FontRole::Heading => self.heading = spec,
            FontRole::Subheading => self.subheading = spec,
            FontRole::Body => self.body = spec,
        }
        self
    }

    /// Set section and entry gaps.
    pub fn with_gaps(mut self, section_gap: f32, entry_gap: f32) -> Self {
        self.section_gap = section_gap;
        self.entry_gap = entry_gap;
        self
    }

    /// Set bullet glyph and indent.
    pub fn with_bullet(mut self, bullet: char, indent: f32) -> Self {
        self.bullet = bullet;
        self.bullet_indent = indent;
        self
    }

    /// Enable or disable keeping headings with their first line.
    pub fn with_keep_heading_with_next(mut self, keep: bool) -> Self {
        self.keep_heading_with_next = keep;
        self
    }

    /// Font spec for a role.
    pub fn font(&self, role: FontRole) -> FontSpec {
        match role {
            FontRole::Title => self.title,
            FontRole::Heading => self.heading,
            FontRole::Subheading => self.subheading,
            FontRole::Body => self.body,
        }
    }

    /// Full page width.
    pub fn page_width(&self) -> f32 {
        self.usable_width + 2.0 * self.margin
    }

    /// Full page height.
    pub fn page_height(&self) -> f32 {
        self.usable_height + 2.0 * self.margin
    }

    /// Tallest line any role can emit.
    pub fn max_line_height(&self) -> f32 {
        [self.title, self.heading, self.subheading, self.body]
            .iter()
            .map(|f| f.line_height)
            .fold(0.0, f32::max)
    }

    /// Check that the geometry can place content at all.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("usable width", self.usable_width),
            ("usable height", self.usable_height),
        ];
        for (name, value) in lengths {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::Configuration(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        let spacing = [
            ("margin", self.margin),
            ("section gap", self.section_gap),
            ("entry gap", self.entry_gap),
            ("bullet indent", self.bullet_indent),
        ];
        for (name, value) in spacing {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Configuration(format!(
                    "{} must be zero or positive, got {}",
                    name, value
                )));
            }
        }

        for font in [self.title, self.heading, self.subheading, self.body] {
            if !font.size.is_finite() || font.size <= 0.0 {
                return Err(Error::Configuration(format!(
                    "font size must be positive, got {}",
                    font.size
                )));
            }
            if !font.line_height.is_finite() || font.line_height <= 0.0 {
                return Err(Error::Configuration(format!(
                    "line height must be positive, got {}",
                    font.line_height
                )));
            }
        }

        let line = self.max_line_height();
        if self.usable_height < line {
            return Err(Error::Configuration(format!(
                "usable height {} cannot hold a line of height {}",
                self.usable_height, line
            )));
        }

        Ok(())
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::a4()
    }
}
