//! Built-in exporters.

use crate::error::Result;
use crate::layout::{render, PageConfig};
use crate::model::ResumeDocument;
use crate::render::{to_html, to_json, to_pdf, to_text, ExportOptions};

use super::DocumentExporter;

/// PDF exporter using lopdf.
#[derive(Debug, Clone, Default)]
pub struct PdfExporter;

impl PdfExporter {
    /// Create a new PDF exporter.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExporter for PdfExporter {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn mime_type(&self) -> &'static str {
        "application/pdf"
    }

    fn export(
        &self,
        doc: &ResumeDocument,
        config: &PageConfig,
        options: &ExportOptions,
    ) -> Result<Vec<u8>> {
        let pages = render(doc, config)?;
        let mut options = options.clone();
        if options.title.is_none() {
            options.title = Some(doc.display_name().to_string());
        }
        to_pdf(&pages, &options)
    }
}

/// Exporter for the laid-out pages as JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonExporter;

impl JsonExporter {
    /// Create a new JSON exporter.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExporter for JsonExporter {
    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn name(&self) -> &str {
        "json"
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn export(
        &self,
        doc: &ResumeDocument,
        config: &PageConfig,
        options: &ExportOptions,
    ) -> Result<Vec<u8>> {
        let pages = render(doc, config)?;
        Ok(to_json(&pages, options.json_format)?.into_bytes())
    }
}

/// Plain text exporter.
#[derive(Debug, Clone, Default)]
pub struct TextExporter;

impl TextExporter {
    /// Create a new text exporter.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExporter for TextExporter {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn mime_type(&self) -> &'static str {
        "text/plain"
    }

    fn export(
        &self,
        doc: &ResumeDocument,
        config: &PageConfig,
        _options: &ExportOptions,
    ) -> Result<Vec<u8>> {
        let pages = render(doc, config)?;
        Ok(to_text(&pages)?.into_bytes())
    }
}

/// HTML preview exporter.
///
/// The preview does not paginate, but the configuration is still validated
/// so every exporter fails the same way on an unusable page.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter;

impl HtmlExporter {
    /// Create a new HTML exporter.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExporter for HtmlExporter {
    fn supported_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn name(&self) -> &str {
        "html"
    }

    fn mime_type(&self) -> &'static str {
        "text/html"
    }

    fn export(
        &self,
        doc: &ResumeDocument,
        config: &PageConfig,
        options: &ExportOptions,
    ) -> Result<Vec<u8>> {
        config.validate()?;
        Ok(to_html(doc, options)?.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PersonalInfo;

    fn doc() -> ResumeDocument {
        ResumeDocument::new().with_personal_info(PersonalInfo::named("Jane Doe"))
    }

    #[test]
    fn test_text_exporter() {
        let bytes = TextExporter::new()
            .export(&doc(), &PageConfig::a4(), &ExportOptions::default())
            .unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "Jane Doe");
    }

    #[test]
    fn test_json_exporter() {
        let bytes = JsonExporter::new()
            .export(&doc(), &PageConfig::a4(), &ExportOptions::default())
            .unwrap();
        let pages: Vec<crate::model::Page> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(pages.len(), 1);
    }

    #[test]
    fn test_html_exporter_validates_config() {
        let config = PageConfig::a4().with_usable_size(170.0, 1.0);
        let result = HtmlExporter::new().export(&doc(), &config, &ExportOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_supports_extension_case_insensitive() {
        assert!(TextExporter::new().supports_extension("TXT"));
        assert!(!PdfExporter::new().supports_extension("docx"));
    }
}
