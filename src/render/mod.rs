//! Rendering module for writing laid-out pages to output formats.

mod html;
mod json;
mod options;
mod pdf;
mod text;

pub use html::to_html;
pub use json::{to_json, JsonFormat};
pub use options::ExportOptions;
pub use pdf::{save_pdf, to_pdf};
pub use text::to_text;
