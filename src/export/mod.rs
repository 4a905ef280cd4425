//! Exporter registry providing a plugin architecture for output formats.
//!
//! An exporter lays out a resume and writes it in one format. Exporters are
//! registered by extension, so the output path decides what gets written.
//!
//! # Example
//!
//! ```no_run
//! use resume_layout::export::ExporterRegistry;
//! use resume_layout::layout::PageConfig;
//! use resume_layout::model::ResumeDocument;
//! use resume_layout::render::ExportOptions;
//! use std::path::Path;
//!
//! fn main() -> resume_layout::Result<()> {
//!     let doc = ResumeDocument::from_json(&std::fs::read_to_string("resume.json")?)?;
//!     let registry = ExporterRegistry::with_defaults();
//!     registry.export_to_path(
//!         &doc,
//!         &PageConfig::a4(),
//!         &ExportOptions::default(),
//!         Path::new("Jane_Doe.pdf"),
//!     )?;
//!     Ok(())
//! }
//! ```

mod formats;

pub use formats::{HtmlExporter, JsonExporter, PdfExporter, TextExporter};

use crate::error::{Error, Result};
use crate::layout::PageConfig;
use crate::model::{non_blank, ResumeDocument};
use crate::render::ExportOptions;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Trait for resume exporters.
///
/// Implement this trait to add support for a new output format.
pub trait DocumentExporter: Send + Sync {
    /// Get the supported file extensions for this exporter.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["pdf"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this exporter.
    fn name(&self) -> &str;

    /// MIME type of the output.
    fn mime_type(&self) -> &'static str {
        "application/octet-stream"
    }

    /// Lay out and write a resume.
    fn export(
        &self,
        doc: &ResumeDocument,
        config: &PageConfig,
        options: &ExportOptions,
    ) -> Result<Vec<u8>>;

    /// Check if this exporter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for resume exporters.
///
/// The registry maps file extensions to exporters and provides
/// convenient methods for writing resumes.
pub struct ExporterRegistry {
    exporters: HashMap<String, Arc<dyn DocumentExporter>>,
    by_name: HashMap<String, Arc<dyn DocumentExporter>>,
}

impl ExporterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            exporters: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the built-in exporters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PdfExporter::new()));
        registry.register(Arc::new(JsonExporter::new()));
        registry.register(Arc::new(TextExporter::new()));
        registry.register(Arc::new(HtmlExporter::new()));
        registry
    }

    /// Register an exporter.
    ///
    /// The exporter will be registered for all its supported extensions,
    /// replacing any exporter previously registered for them.
    pub fn register(&mut self, exporter: Arc<dyn DocumentExporter>) {
        for ext in exporter.supported_extensions() {
            self.exporters.insert(ext.to_lowercase(), exporter.clone());
        }
        self.by_name.insert(exporter.name().to_lowercase(), exporter);
    }

    /// Get an exporter by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentExporter>> {
        self.exporters.get(&ext.to_lowercase()).cloned()
    }

    /// Get an exporter by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentExporter>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.exporters.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.exporters.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Export with the exporter registered for `ext`.
    pub fn export(
        &self,
        doc: &ResumeDocument,
        config: &PageConfig,
        options: &ExportOptions,
        ext: &str,
    ) -> Result<Vec<u8>> {
        let exporter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))?;

        exporter.export(doc, config, options)
    }

    /// Export to a file, choosing the format from the path's extension.
    pub fn export_to_path(
        &self,
        doc: &ResumeDocument,
        config: &PageConfig,
        options: &ExportOptions,
        path: &Path,
    ) -> Result<()> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::Other(format!("No extension on {}", path.display())))?;

        let bytes = self.export(doc, config, options, ext)?;
        std::fs::write(path, bytes)?;
        log::debug!("exported {} as {}", path.display(), ext);
        Ok(())
    }
}

impl Default for ExporterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Suggested file name for an exported resume.
///
/// Whitespace runs in the full name become `_`; a blank name gives `Resume`.
pub fn export_filename(doc: &ResumeDocument, ext: &str) -> String {
    format!("{}.{}", export_stem(doc), ext.trim_start_matches('.'))
}

/// File names for exporting several resumes into one directory.
///
/// Names follow [`export_filename`]; a name already taken, compared without
/// case, gets `_2`, `_3`, ... appended to its stem.
pub fn export_filenames(docs: &[ResumeDocument], ext: &str) -> Vec<String> {
    let ext = ext.trim_start_matches('.');
    let mut taken = HashSet::with_capacity(docs.len());

    docs.iter()
        .map(|doc| {
            let stem = export_stem(doc);
            let mut name = format!("{}.{}", stem, ext);
            let mut n = 2;
            while !taken.insert(name.to_lowercase()) {
                name = format!("{}_{}.{}", stem, n, ext);
                n += 1;
            }
            name
        })
        .collect()
}

fn export_stem(doc: &ResumeDocument) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));

    match non_blank(&doc.personal_info.full_name) {
        Some(name) => re.replace_all(name, "_").into_owned(),
        None => "Resume".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PersonalInfo;

    #[test]
    fn test_registry_with_defaults() {
        let registry = ExporterRegistry::with_defaults();
        assert!(registry.supports("pdf"));
        assert!(registry.supports("HTM"));
        assert!(registry.supports("text"));
        assert!(!registry.supports("docx"));
        assert_eq!(
            registry.supported_extensions(),
            vec!["htm", "html", "json", "pdf", "text", "txt"]
        );
    }

    #[test]
    fn test_registry_get_by_name() {
        let registry = ExporterRegistry::with_defaults();
        let exporter = registry.get_by_name("PDF");
        assert!(exporter.is_some());
        assert_eq!(exporter.unwrap().mime_type(), "application/pdf");
    }

    #[test]
    fn test_unknown_extension() {
        let registry = ExporterRegistry::with_defaults();
        let result = registry.export(
            &ResumeDocument::new(),
            &PageConfig::a4(),
            &ExportOptions::default(),
            "docx",
        );
        assert!(matches!(result, Err(Error::UnsupportedFormat(ext)) if ext == "docx"));
    }

    #[test]
    fn test_export_filename() {
        let doc = ResumeDocument::new().with_personal_info(PersonalInfo::named("Jane  Q\tDoe"));
        assert_eq!(export_filename(&doc, "pdf"), "Jane_Q_Doe.pdf");
        assert_eq!(export_filename(&ResumeDocument::new(), ".pdf"), "Resume.pdf");

        let blank = ResumeDocument::new().with_personal_info(PersonalInfo::named("   "));
        assert_eq!(export_filename(&blank, "html"), "Resume.html");
    }

    #[test]
    fn test_export_filenames_are_unique() {
        let docs = vec![
            ResumeDocument::new().with_personal_info(PersonalInfo::named("Jane Doe")),
            ResumeDocument::new().with_personal_info(PersonalInfo::named("Jane  Doe")),
            ResumeDocument::new(),
            ResumeDocument::new(),
            ResumeDocument::new().with_personal_info(PersonalInfo::named("jane doe")),
            ResumeDocument::new().with_personal_info(PersonalInfo::named("Jane Doe 2")),
        ];
        assert_eq!(
            export_filenames(&docs, "pdf"),
            vec![
                "Jane_Doe.pdf",
                "Jane_Doe_2.pdf",
                "Resume.pdf",
                "Resume_2.pdf",
                "jane_doe_3.pdf",
                "Jane_Doe_2_2.pdf",
            ]
        );
    }
}
