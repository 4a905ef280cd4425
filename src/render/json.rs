//! JSON rendering of laid-out pages.

use crate::error::Result;
use crate::model::Page;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert pages to JSON.
pub fn to_json(pages: &[Page], format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(pages)?,
        JsonFormat::Compact => serde_json::to_string(pages)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TextRun, Unit};

    fn sample() -> Vec<Page> {
        let mut page = Page::new(1, 210.0, 297.0, Unit::Mm);
        page.push_run(TextRun::bold("Jane Doe", 20.0, 20.0, 20.0));
        vec![page]
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"text\": \"Jane Doe\""));
        assert!(json.contains("\"unit\": \"mm\""));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact_round_trip() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        let back: Vec<Page> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
