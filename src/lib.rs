//! # resume-layout
//!
//! Page layout and pagination engine for resumes.
//!
//! This library takes a structured resume and flows it onto fixed-size
//! pages: each piece of text becomes a positioned run, long text wraps to the
//! usable width, and content spills onto new pages when the current one is
//! full. The pages can then be written as PDF, JSON, plain text, or previewed
//! as HTML.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resume_layout::{load_file, layout::PageConfig, render};
//!
//! fn main() -> resume_layout::Result<()> {
//!     // Load a resume
//!     let doc = load_file("resume.json")?;
//!
//!     // Lay it out on A4
//!     let pages = resume_layout::layout::render(&doc, &PageConfig::a4())?;
//!
//!     // Write a PDF
//!     let pdf = render::to_pdf(&pages, &render::ExportOptions::default())?;
//!     std::fs::write("resume.pdf", pdf)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Deterministic layout**: same input, same pages
//! - **Fixed section order**: header, summary, experience, education, skills,
//!   projects, certifications; empty sections are left out
//! - **Measured wrapping**: Helvetica metrics or a custom [`TextMeasure`]
//! - **Multiple output formats**: PDF, JSON, plain text, HTML preview
//! - **Parallel processing**: Uses Rayon for batch layout

pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{export_filename, export_filenames, DocumentExporter, ExporterRegistry};
pub use layout::{
    FontRole, FontSpec, LayoutEngine, LayoutResult, LayoutStats, PageConfig, TextMeasure,
};
pub use model::{
    CertificationEntry, EducationEntry, ExperienceEntry, Page, PersonalInfo, ProjectEntry,
    ResumeDocument, SkillsBlock, TextRun, Unit,
};
pub use render::{ExportOptions, JsonFormat};

use std::io::Read;
use std::path::Path;

/// Load a resume from a JSON file.
///
/// # Example
///
/// ```no_run
/// use resume_layout::load_file;
///
/// let doc = load_file("resume.json").unwrap();
/// println!("{}", doc.display_name());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<ResumeDocument> {
    let json = std::fs::read_to_string(path)?;
    ResumeDocument::from_json(&json)
}

/// Load a resume from a reader.
pub fn load_reader<R: Read>(reader: R) -> Result<ResumeDocument> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a resume file and lay it out.
///
/// # Example
///
/// ```no_run
/// use resume_layout::{render_file, PageConfig};
///
/// let pages = render_file("resume.json", &PageConfig::letter()).unwrap();
/// println!("Pages: {}", pages.len());
/// ```
pub fn render_file<P: AsRef<Path>>(path: P, config: &PageConfig) -> Result<Vec<Page>> {
    let doc = load_file(path)?;
    layout::render(&doc, config)
}

/// Lay out a resume on A4 and write it as PDF bytes.
///
/// # Example
///
/// ```no_run
/// use resume_layout::{load_file, to_pdf};
///
/// let doc = load_file("resume.json").unwrap();
/// std::fs::write("resume.pdf", to_pdf(&doc).unwrap()).unwrap();
/// ```
pub fn to_pdf(doc: &ResumeDocument) -> Result<Vec<u8>> {
    ResumeLayout::new().layout(doc)?.to_pdf()
}

/// Lay out a resume on A4 and write the pages as JSON.
pub fn to_json(doc: &ResumeDocument, format: JsonFormat) -> Result<String> {
    let pages = layout::render(doc, &PageConfig::a4())?;
    render::to_json(&pages, format)
}

/// Builder for laying out and exporting resumes.
///
/// # Example
///
/// ```no_run
/// use resume_layout::{load_file, ResumeLayout};
///
/// let doc = load_file("resume.json")?;
/// let pdf = ResumeLayout::new()
///     .letter()
///     .with_margin(36.0)
///     .with_title("Jane Doe")
///     .layout(&doc)?
///     .to_pdf()?;
/// # Ok::<(), resume_layout::Error>(())
/// ```
pub struct ResumeLayout {
    config: PageConfig,
    export_options: ExportOptions,
}

impl ResumeLayout {
    /// Create a builder for A4 pages.
    pub fn new() -> Self {
        Self {
            config: PageConfig::a4(),
            export_options: ExportOptions::default(),
        }
    }

    /// Use US Letter pages.
    pub fn letter(mut self) -> Self {
        self.config = PageConfig::letter();
        self
    }

    /// Use a custom page configuration.
    pub fn with_config(mut self, config: PageConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the margin, keeping the paper size.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.config = self.config.with_page_margin(margin);
        self
    }

    /// Keep section headings on the same page as their first line.
    pub fn keep_headings(mut self) -> Self {
        self.config = self.config.with_keep_heading_with_next(true);
        self
    }

    /// Set the PDF title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.export_options = self.export_options.with_title(title);
        self
    }

    /// Set export options.
    pub fn with_export_options(mut self, options: ExportOptions) -> Self {
        self.export_options = options;
        self
    }

    /// Lay out a resume and return a result wrapper.
    pub fn layout(self, doc: &ResumeDocument) -> Result<LaidOutResume> {
        let result = layout::render_with_stats(doc, &self.config)?;
        Ok(LaidOutResume {
            result,
            export_options: self.export_options,
        })
    }

    /// Load a resume file and lay it out.
    pub fn layout_file<P: AsRef<Path>>(self, path: P) -> Result<LaidOutResume> {
        let doc = load_file(path)?;
        self.layout(&doc)
    }
}

impl Default for ResumeLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of laying out a resume.
pub struct LaidOutResume {
    /// Pages and statistics
    pub result: LayoutResult,
    /// Export options to use
    export_options: ExportOptions,
}

impl LaidOutResume {
    /// The laid-out pages.
    pub fn pages(&self) -> &[Page] {
        &self.result.pages
    }

    /// Layout statistics.
    pub fn stats(&self) -> &LayoutStats {
        &self.result.stats
    }

    /// Write as PDF bytes.
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        render::to_pdf(&self.result.pages, &self.export_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.result.pages)
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Result<String> {
        render::to_json(&self.result.pages, self.export_options.json_format)
    }

    /// Save as PDF.
    pub fn save_pdf<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::save_pdf(&self.result.pages, &self.export_options, path)
    }
}
