//! Plain text rendering of laid-out pages.

use crate::error::Result;
use crate::model::Page;

/// Convert pages to plain text, one visual line per text line.
///
/// Pages are separated by a form feed so the page structure survives.
pub fn to_text(pages: &[Page]) -> Result<String> {
    let output = pages
        .iter()
        .map(Page::plain_text)
        .collect::<Vec<_>>()
        .join("\n\u{c}\n");
    Ok(output.trim().to_string())
}
