//! Layout engine: flows a resume into fixed-size pages.
//!
//! The engine walks [`Section::ORDER`], wraps text against a
//! [`TextMeasure`], and advances a [`Cursor`] down the page. Whenever the
//! next line would pass the bottom of the usable area, the page is closed and
//! the line is placed at the top of a new one.
//!
//! # Example
//!
//! ```
//! use resume_layout::layout::{render, PageConfig};
//! use resume_layout::model::{PersonalInfo, ResumeDocument};
//!
//! let doc = ResumeDocument::new().with_personal_info(PersonalInfo::named("Jane Doe"));
//! let pages = render(&doc, &PageConfig::a4())?;
//! assert_eq!(pages.len(), 1);
//! assert_eq!(pages[0].runs[0].text, "Jane Doe");
//! # Ok::<(), resume_layout::Error>(())
//! ```

mod composer;
mod config;
mod cursor;
mod measure;
mod result;
mod sections;
mod wrap;

pub use composer::PageComposer;
pub use config::{FontRole, FontSpec, PageConfig};
pub use cursor::Cursor;
pub use measure::{AverageAdvance, Helvetica, TextMeasure};
pub use result::{LayoutResult, LayoutStats};
pub use sections::{Renderable, Section};
pub use wrap::{normalize_whitespace, wrap_text};

use rayon::prelude::*;

use crate::error::Result;
use crate::model::{Page, ResumeDocument};

/// Lay out `doc` with Helvetica metrics.
///
/// Fails with [`Error::Configuration`](crate::Error::Configuration) before
/// producing any page if `config` cannot hold a single line.
pub fn render(doc: &ResumeDocument, config: &PageConfig) -> Result<Vec<Page>> {
    Ok(render_with_stats(doc, config)?.pages)
}

/// Lay out `doc` with Helvetica metrics, collecting statistics.
pub fn render_with_stats(doc: &ResumeDocument, config: &PageConfig) -> Result<LayoutResult> {
    config.validate()?;
    Ok(compose(doc, config, &Helvetica))
}

/// Lay out many documents in parallel with one shared configuration.
///
/// Results are in input order.
pub fn render_batch(docs: &[ResumeDocument], config: &PageConfig) -> Result<Vec<Vec<Page>>> {
    config.validate()?;
    Ok(docs
        .par_iter()
        .map(|doc| compose(doc, config, &Helvetica).pages)
        .collect())
}

fn compose(doc: &ResumeDocument, config: &PageConfig, measure: &dyn TextMeasure) -> LayoutResult {
    let mut composer = PageComposer::new(config, measure);
    for section in Section::ORDER {
        section.render(doc, &mut composer);
    }
    let (pages, stats) = composer.finish();
    log::debug!(
        "laid out {} page(s), {} run(s), {} entr(ies) skipped",
        pages.len(),
        stats.run_count,
        stats.entries_skipped
    );
    LayoutResult { pages, stats }
}

/// A validated configuration paired with a text measure.
///
/// Use this to lay out with custom font metrics, or to validate a
/// configuration once and reuse it.
pub struct LayoutEngine {
    config: PageConfig,
    measure: Box<dyn TextMeasure>,
}

impl LayoutEngine {
    /// Create an engine using Helvetica metrics.
    pub fn new(config: PageConfig) -> Result<Self> {
        Self::with_measure(config, Helvetica)
    }

    /// Create an engine using custom metrics.
    pub fn with_measure(config: PageConfig, measure: impl TextMeasure + 'static) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            measure: Box::new(measure),
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Lay out a document.
    pub fn render(&self, doc: &ResumeDocument) -> Vec<Page> {
        self.render_with_stats(doc).pages
    }

    /// Lay out a document, collecting statistics.
    pub fn render_with_stats(&self, doc: &ResumeDocument) -> LayoutResult {
        compose(doc, &self.config, self.measure.as_ref())
    }

    /// Lay out many documents in parallel.
    pub fn render_batch(&self, docs: &[ResumeDocument]) -> Vec<Vec<Page>> {
        docs.par_iter().map(|doc| self.render(doc)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{ExperienceEntry, PersonalInfo};

    #[test]
    fn test_render_empty_document_has_placeholder() {
        let pages = render(&ResumeDocument::new(), &PageConfig::a4()).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].runs.len(), 1);
        assert_eq!(pages[0].runs[0].text, "Your Name");
        assert!(pages[0].runs[0].bold);
        assert_eq!(pages[0].runs[0].font_size, 20.0);
    }

    #[test]
    fn test_render_rejects_short_page() {
        let config = PageConfig::a4().with_usable_size(170.0, 5.0);
        let result = render(&ResumeDocument::new(), &config);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_engine_validates_eagerly() {
        let config = PageConfig::letter().with_usable_size(504.0, 1.0);
        assert!(LayoutEngine::new(config).is_err());
    }

    #[test]
    fn test_engine_custom_measure() {
        let engine =
            LayoutEngine::with_measure(PageConfig::a4(), AverageAdvance::uniform(0.5)).unwrap();
        let mut doc = ResumeDocument::new().with_personal_info(PersonalInfo::named("A"));
        doc.add_experience(ExperienceEntry::new("Acme", "Dev").with_dates("2020", "2021"));
        let result = engine.render_with_stats(&doc);
        assert_eq!(result.page_count(), 1);
        assert_eq!(result.stats.entries_rendered, 1);
        assert_eq!(result.stats.section_count, 2);
    }

    #[test]
    fn test_batch_preserves_order() {
        let docs: Vec<_> = ["One", "Two", "Three"]
            .iter()
            .map(|n| ResumeDocument::new().with_personal_info(PersonalInfo::named(*n)))
            .collect();
        let pages = render_batch(&docs, &PageConfig::a4()).unwrap();
        let names: Vec<_> = pages.iter().map(|p| p[0].runs[0].text.as_str()).collect();
        assert_eq!(names, vec!["One", "Two", "Three"]);
    }
}
