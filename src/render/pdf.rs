//! PDF writer for laid-out pages.
//!
//! Each [`Page`] becomes one PDF page whose media box is the page size in
//! points. Runs are drawn with the standard Helvetica and Helvetica-Bold
//! fonts using WinAnsiEncoding, so no font data is embedded.

use std::io::Write;
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

use crate::error::{Error, Result};
use crate::model::{Page, TextRun};

use super::ExportOptions;

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

/// Baseline offset below the top of a line slot, in em.
const ASCENT: f32 = 0.8;

const PRODUCER: &str = concat!("resume-layout ", env!("CARGO_PKG_VERSION"));

/// Write pages to PDF bytes.
pub fn to_pdf(pages: &[Page], options: &ExportOptions) -> Result<Vec<u8>> {
    if pages.is_empty() {
        return Err(Error::Render("no pages to write".to_string()));
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(font_dictionary("Helvetica"));
    let bold_id = doc.add_object(font_dictionary("Helvetica-Bold"));
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR_FONT => regular_id,
            BOLD_FONT => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content_id = doc.add_object(content_stream(page, options.compress)?);
        let (width, height) = media_box(page);
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width),
                Object::Real(height),
            ],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(info_dictionary(options));
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    log::debug!("wrote {} page(s) as {} PDF bytes", pages.len(), bytes.len());
    Ok(bytes)
}

/// Write pages to a PDF file.
pub fn save_pdf<P: AsRef<Path>>(pages: &[Page], options: &ExportOptions, path: P) -> Result<()> {
    let bytes = to_pdf(pages, options)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

fn font_dictionary(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn info_dictionary(options: &ExportOptions) -> Dictionary {
    let mut info = dictionary! {
        "Producer" => Object::string_literal(PRODUCER),
    };
    if let Some(title) = &options.title {
        info.set("Title", Object::string_literal(encode_win_ansi(title)));
    }
    if let Some(author) = &options.author {
        info.set("Author", Object::string_literal(encode_win_ansi(author)));
    }
    if let Some(created) = &options.created {
        let stamp = created.format("D:%Y%m%d%H%M%SZ").to_string();
        info.set("CreationDate", Object::string_literal(stamp));
    }
    info
}

fn media_box(page: &Page) -> (f32, f32) {
    let (width, height) = page.dimensions();
    (page.unit.to_points(width), page.unit.to_points(height))
}

fn content_stream(page: &Page, compress: bool) -> Result<Stream> {
    let (_, page_height) = media_box(page);
    let mut operations = Vec::with_capacity(page.runs.len() * 5);
    for run in &page.runs {
        operations.extend(text_operations(run, page, page_height));
    }

    let data = Content { operations }.encode()?;

    if !compress {
        return Ok(Stream::new(Dictionary::new(), data));
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&data)?;
    let compressed = encoder.finish()?;
    Ok(Stream::new(
        dictionary! { "Filter" => "FlateDecode" },
        compressed,
    ))
}

fn text_operations(run: &TextRun, page: &Page, page_height: f32) -> Vec<Operation> {
    let font = if run.bold { BOLD_FONT } else { REGULAR_FONT };
    let x = page.unit.to_points(run.x);
    let baseline = page.unit.to_points(run.y) + run.font_size * ASCENT;
    let y = page_height - baseline;

    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![font.into(), Object::Real(run.font_size)]),
        Operation::new("Td", vec![Object::Real(x), Object::Real(y)]),
        Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(&run.text))]),
        Operation::new("ET", vec![]),
    ]
}

/// Encode text for a WinAnsiEncoding simple font.
///
/// Characters outside the encoding are written as `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut unsupported = 0usize;
    for ch in text.chars() {
        match win_ansi_byte(ch) {
            Some(byte) => out.push(byte),
            None => {
                unsupported += 1;
                out.push(b'?');
            }
        }
    }
    if unsupported > 0 {
        log::warn!(
            "{} character(s) not representable in WinAnsiEncoding: {:?}",
            unsupported,
            text
        );
    }
    out
}

fn win_ansi_byte(ch: char) -> Option<u8> {
    let byte = match ch {
        ' '..='~' => ch as u8,
        '\u{a0}'..='\u{ff}' => ch as u32 as u8,
        '\u{20ac}' => 0x80,
        '\u{201a}' => 0x82,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{2122}' => 0x99,
        '\t' => b' ',
        _ => return None,
    };
    Some(byte)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Unit;
    use chrono::TimeZone;

    fn two_pages() -> Vec<Page> {
        let mut first = Page::new(1, 210.0, 297.0, Unit::Mm);
        first.push_run(TextRun::bold("Jane Doe", 20.0, 20.0, 20.0));
        first.push_run(TextRun::new("\u{2022} Shipped (things)", 25.0, 40.0, 10.0));
        let mut second = Page::new(2, 210.0, 297.0, Unit::Mm);
        second.push_run(TextRun::new("CERTIFICATIONS", 20.0, 20.0, 12.0));
        vec![first, second]
    }

    #[test]
    fn test_to_pdf_page_count() {
        let bytes = to_pdf(&two_pages(), &ExportOptions::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }

    #[test]
    fn test_uncompressed_content_is_readable() {
        let options = ExportOptions::default().with_compression(false);
        let bytes = to_pdf(&two_pages(), &options).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();

        let first = doc.get_pages()[&1];
        let content = Content::decode(&doc.get_page_content(first).unwrap()).unwrap();
        let shown: Vec<Vec<u8>> = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(Object::String(bytes, _)) => Some(bytes.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(shown[0], b"Jane Doe".to_vec());
        assert_eq!(shown[1][0], 0x95);
    }

    #[test]
    fn test_media_box_in_points() {
        let mut page = Page::new(1, 612.0, 792.0, Unit::Pt);
        page.push_run(TextRun::new("x", 54.0, 54.0, 10.0));
        assert_eq!(media_box(&page), (612.0, 792.0));

        let a4 = Page::new(1, 210.0, 297.0, Unit::Mm);
        let (w, h) = media_box(&a4);
        assert!((w - 595.28).abs() < 0.1);
        assert!((h - 841.89).abs() < 0.1);
    }

    #[test]
    fn test_output_is_stable_without_date() {
        let options = ExportOptions::default().with_title("Jane Doe");
        let a = to_pdf(&two_pages(), &options).unwrap();
        let b = to_pdf(&two_pages(), &options).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_info_dictionary() {
        let created = chrono::Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let options = ExportOptions::default()
            .with_title("Jane Doe")
            .with_author("Jane")
            .with_created(created);
        let info = info_dictionary(&options);
        assert_eq!(
            info.get(b"CreationDate").unwrap().as_str().unwrap(),
            b"D:20240301120000Z"
        );
        assert!(info.get(b"Title").is_ok());
        assert!(info_dictionary(&ExportOptions::default())
            .get(b"CreationDate")
            .is_err());
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Café – 5€"), b"Caf\xe9 \x96 5\x80".to_vec());
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
    }

    #[test]
    fn test_empty_pages_rejected() {
        assert!(matches!(
            to_pdf(&[], &ExportOptions::default()),
            Err(Error::Render(_))
        ));
    }
}
