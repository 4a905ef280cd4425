//! Export options and configuration.

use chrono::{DateTime, Utc};

/// Options for writing laid-out pages to an artifact.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Flate-compress PDF content streams
    pub compress: bool,

    /// Document title for the PDF info dictionary
    pub title: Option<String>,

    /// Document author for the PDF info dictionary
    pub author: Option<String>,

    /// Creation date; left out unless set so output is reproducible
    pub created: Option<DateTime<Utc>>,

    /// JSON output layout
    pub json_format: super::JsonFormat,

    /// Include a `<style>` block in the HTML preview
    pub inline_css: bool,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable stream compression.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the creation date.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Stamp the current time as the creation date.
    pub fn created_now(self) -> Self {
        self.with_created(Utc::now())
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: super::JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Enable or disable the inline stylesheet in HTML output.
    pub fn with_inline_css(mut self, inline: bool) -> Self {
        self.inline_css = inline;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            compress: true,
            title: None,
            author: None,
            created: None,
            json_format: super::JsonFormat::Pretty,
            inline_css: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::JsonFormat;

    #[test]
    fn test_export_options_builder() {
        let options = ExportOptions::new()
            .with_compression(false)
            .with_title("Jane Doe")
            .with_json_format(JsonFormat::Compact);

        assert!(!options.compress);
        assert_eq!(options.title.as_deref(), Some("Jane Doe"));
        assert_eq!(options.json_format, JsonFormat::Compact);
        assert!(options.created.is_none());
    }

    #[test]
    fn test_created_now_sets_date() {
        let options = ExportOptions::new().created_now();
        assert!(options.created.is_some());
    }
}
