//! HTML preview of a resume.
//!
//! The preview shows the resume model as styled markup rather than as
//! positioned runs. It follows the same section order, headings and
//! omission rules as the layout engine, so what the preview shows is what
//! the exported pages contain.

use crate::error::Result;
use crate::layout::{Renderable, Section};
use crate::model::{is_blank, non_blank, ResumeDocument};

use super::ExportOptions;

const STYLE: &str = "body{font-family:Helvetica,Arial,sans-serif;max-width:48rem;margin:2rem auto;color:#111827}\
h1{font-size:1.875rem;margin:0}\
h2{font-size:1.125rem;border-bottom:2px solid #d1d5db;padding-bottom:.25rem;margin:1.5rem 0 .75rem}\
h3{font-size:1rem;margin:0}\
.contact,.dates{font-size:.875rem;color:#4b5563}\
.links{font-size:.875rem;color:#2563eb}\
.entry{margin-bottom:.75rem}\
.row{display:flex;justify-content:space-between;align-items:baseline}\
.tech{font-style:italic;color:#4b5563}\
p{margin:.25rem 0;font-size:.875rem}\
ul{margin:.25rem 0;padding-left:1.25rem;font-size:.875rem}";

/// Render the resume as a standalone HTML page.
pub fn to_html(doc: &ResumeDocument, options: &ExportOptions) -> Result<String> {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(doc.display_name())));
    if options.inline_css {
        html.push_str(&format!("<style>{}</style>\n", STYLE));
    }
    html.push_str("</head>\n<body>\n");

    for section in Section::ORDER {
        if section.is_present(doc) {
            render_section(&mut html, doc, section);
        }
    }

    html.push_str("</body>\n</html>\n");
    Ok(html)
}

fn render_section(html: &mut String, doc: &ResumeDocument, section: Section) {
    if section == Section::Header {
        render_header(html, doc);
        return;
    }

    html.push_str("<section>\n");
    if let Some(heading) = section.heading() {
        html.push_str(&format!("<h2>{}</h2>\n", heading));
    }

    match section {
        Section::Header => {}
        Section::Summary => paragraph(html, "", &doc.personal_info.summary),
        Section::Experience => {
            for exp in doc.experience.iter().filter(|e| e.is_renderable()) {
                html.push_str("<div class=\"entry\">\n<div class=\"row\">");
                html.push_str(&format!(
                    "<h3>{}</h3>",
                    escape(non_blank(&exp.position).unwrap_or("Position"))
                ));
                if exp.has_dates() {
                    html.push_str(&format!(
                        "<span class=\"dates\">{}</span>",
                        escape(&exp.date_range())
                    ));
                }
                html.push_str("</div>\n");
                paragraph(html, "", &exp.employer_line());
                bullets(html, &exp.responsibilities);
                html.push_str("</div>\n");
            }
        }
        Section::Education => {
            for edu in doc.education.iter().filter(|e| e.is_renderable()) {
                html.push_str("<div class=\"entry\">\n<div class=\"row\">");
                html.push_str(&format!("<h3>{}</h3>", escape(edu.institution.trim())));
                if let Some(date) = non_blank(&edu.graduation_date) {
                    html.push_str(&format!("<span class=\"dates\">{}</span>", escape(date)));
                }
                html.push_str("</div>\n");
                if let Some(degree) = edu.degree_line() {
                    paragraph(html, "", &degree);
                }
                html.push_str("</div>\n");
            }
        }
        Section::Skills => {
            for (label, value) in doc.skills.categories() {
                html.push_str(&format!(
                    "<p><strong>{}:</strong> {}</p>\n",
                    label,
                    escape(value)
                ));
            }
        }
        Section::Projects => {
            for project in doc.projects.iter().filter(|p| p.is_renderable()) {
                html.push_str("<div class=\"entry\">\n");
                html.push_str(&format!("<h3>{}</h3>\n", escape(project.name.trim())));
                if let Some(tech) = non_blank(&project.technologies) {
                    paragraph(html, "tech", &format!("Technologies: {}", tech));
                }
                paragraph(html, "", &project.description);
                if let Some(link) = non_blank(&project.link) {
                    paragraph(html, "links", link);
                }
                html.push_str("</div>\n");
            }
        }
        Section::Certifications => {
            for cert in doc.certifications.iter().filter(|c| c.is_renderable()) {
                paragraph(html, "", &cert.display_line());
            }
        }
    }

    html.push_str("</section>\n");
}

fn render_header(html: &mut String, doc: &ResumeDocument) {
    let info = &doc.personal_info;
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(doc.display_name())));
    if let Some(contact) = info.contact_line() {
        paragraph(html, "contact", &contact);
    }
    if let Some(links) = info.links_line() {
        paragraph(html, "links", &links);
    }
    html.push_str("</header>\n");
}

fn paragraph(html: &mut String, class: &str, text: &str) {
    if is_blank(text) {
        return;
    }
    let body = text
        .trim()
        .lines()
        .map(escape)
        .collect::<Vec<_>>()
        .join("<br>");
    if class.is_empty() {
        html.push_str(&format!("<p>{}</p>\n", body));
    } else {
        html.push_str(&format!("<p class=\"{}\">{}</p>\n", class, body));
    }
}

fn bullets(html: &mut String, text: &str) {
    let items: Vec<&str> = text.lines().filter_map(non_blank).collect();
    if items.is_empty() {
        return;
    }
    html.push_str("<ul>\n");
    for item in items {
        html.push_str(&format!("<li>{}</li>\n", escape(item)));
    }
    html.push_str("</ul>\n");
}

/// Escape text for HTML element content and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CertificationEntry, ExperienceEntry, PersonalInfo};

    #[test]
    fn test_html_header_and_escape() {
        let doc = ResumeDocument::new().with_personal_info(PersonalInfo {
            full_name: "Ana <Dev>".into(),
            email: "ana@x.com".into(),
            ..Default::default()
        });
        let html = to_html(&doc, &ExportOptions::default()).unwrap();
        assert!(html.contains("<h1>Ana &lt;Dev&gt;</h1>"));
        assert!(html.contains("<p class=\"contact\">ana@x.com</p>"));
        assert!(html.contains("<style>"));
        assert!(!html.contains("<h2>"));
    }

    #[test]
    fn test_html_skips_non_qualifying_entries() {
        let mut doc = ResumeDocument::new();
        doc.add_experience(ExperienceEntry::new("", "Ghost Role"));
        doc.add_experience(
            ExperienceEntry::new("Acme", "Engineer")
                .with_dates("2022-01", "")
                .with_current(true)
                .with_responsibilities("Built things\nFixed things"),
        );
        doc.add_certification(CertificationEntry::new("", "Nobody"));

        let html = to_html(&doc, &ExportOptions::default().with_inline_css(false)).unwrap();
        assert!(!html.contains("Ghost Role"));
        assert!(html.contains("<h2>EXPERIENCE</h2>"));
        assert!(html.contains("2022-01 - Present"));
        assert!(html.contains("<li>Fixed things</li>"));
        assert!(!html.contains("CERTIFICATIONS"));
        assert!(!html.contains("<style>"));
    }
}
