//! Section renderers.
//!
//! A resume is laid out as a fixed sequence of [`Section`]s. Each section
//! decides whether it has anything to show and emits its lines through the
//! [`PageComposer`], which owns pagination. Adding a section means adding a
//! variant here; the composer does not change.

use crate::model::{
    is_blank, non_blank, CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry,
    ResumeDocument,
};

use super::composer::PageComposer;
use super::config::FontRole;

/// An entry in a repeatable section.
pub trait Renderable {
    /// Check if the entry's required field is filled in.
    fn is_renderable(&self) -> bool;
}

impl Renderable for ExperienceEntry {
    fn is_renderable(&self) -> bool {
        !is_blank(&self.company)
    }
}

impl Renderable for EducationEntry {
    fn is_renderable(&self) -> bool {
        !is_blank(&self.institution)
    }
}

impl Renderable for ProjectEntry {
    fn is_renderable(&self) -> bool {
        !is_blank(&self.name)
    }
}

impl Renderable for CertificationEntry {
    fn is_renderable(&self) -> bool {
        !is_blank(&self.name)
    }
}

/// A resume section, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
}

impl Section {
    /// Every section in the order it appears on the page.
    pub const ORDER: [Section; 7] = [
        Section::Header,
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Projects,
        Section::Certifications,
    ];

    /// Heading text, if the section has one.
    pub fn heading(self) -> Option<&'static str> {
        match self {
            Section::Header => None,
            Section::Summary => Some("PROFESSIONAL SUMMARY"),
            Section::Experience => Some("EXPERIENCE"),
            Section::Education => Some("EDUCATION"),
            Section::Skills => Some("SKILLS"),
            Section::Projects => Some("PROJECTS"),
            Section::Certifications => Some("CERTIFICATIONS"),
        }
    }

    /// Check if the section produces any output for `doc`.
    pub fn is_present(self, doc: &ResumeDocument) -> bool {
        match self {
            Section::Header => true,
            Section::Summary => !is_blank(&doc.personal_info.summary),
            Section::Experience => doc.experience.iter().any(Renderable::is_renderable),
            Section::Education => doc.education.iter().any(Renderable::is_renderable),
            Section::Skills => !doc.skills.is_empty(),
            Section::Projects => doc.projects.iter().any(Renderable::is_renderable),
            Section::Certifications => doc.certifications.iter().any(Renderable::is_renderable),
        }
    }

    /// Number of entries left out because their required field is blank.
    pub fn skipped_entries(self, doc: &ResumeDocument) -> usize {
        fn blank<T: Renderable>(entries: &[T]) -> usize {
            entries.iter().filter(|e| !e.is_renderable()).count()
        }
        match self {
            Section::Header | Section::Summary | Section::Skills => 0,
            Section::Experience => blank(&doc.experience),
            Section::Education => blank(&doc.education),
            Section::Projects => blank(&doc.projects),
            Section::Certifications => blank(&doc.certifications),
        }
    }

    /// Emit the section, or nothing if it is not present.
    ///
    /// Skipped entries are counted either way.
    pub fn render(self, doc: &ResumeDocument, out: &mut PageComposer<'_>) {
        out.stats.entries_skipped += self.skipped_entries(doc) as u32;
        if !self.is_present(doc) {
            return;
        }
        log::debug!("laying out {:?}", self);

        match self {
            Section::Header => render_header(doc, out),
            Section::Summary => {
                start_section(out, self, FontRole::Body);
                out.wrapped(FontRole::Body, &doc.personal_info.summary, 0.0, None);
            }
            Section::Experience => {
                render_entries(out, self, &doc.experience, FontRole::Subheading, render_experience)
            }
            Section::Education => {
                render_entries(out, self, &doc.education, FontRole::Subheading, render_education)
            }
            Section::Skills => {
                start_section(out, self, FontRole::Body);
                for (label, value) in doc.skills.categories() {
                    out.wrapped(FontRole::Body, &format!("{}: {}", label, value), 0.0, None);
                }
            }
            Section::Projects => {
                render_entries(out, self, &doc.projects, FontRole::Subheading, render_project)
            }
            Section::Certifications => render_entries(
                out,
                self,
                &doc.certifications,
                FontRole::Body,
                render_certification,
            ),
        }
        out.stats.section_count += 1;
    }
}

fn start_section(out: &mut PageComposer<'_>, section: Section, next: FontRole) {
    if let Some(heading) = section.heading() {
        out.heading(heading, next);
    }
}

/// Render the qualifying entries of a repeatable section under its heading.
///
/// Entries failing [`Renderable::is_renderable`] produce nothing.
fn render_entries<T, F>(
    out: &mut PageComposer<'_>,
    section: Section,
    entries: &[T],
    first_line: FontRole,
    mut render_entry: F,
) where
    T: Renderable,
    F: FnMut(&mut PageComposer<'_>, &T),
{
    start_section(out, section, first_line);
    for entry in entries.iter().filter(|e| e.is_renderable()) {
        render_entry(out, entry);
        out.stats.entries_rendered += 1;
    }
}

fn render_header(doc: &ResumeDocument, out: &mut PageComposer<'_>) {
    let info = &doc.personal_info;
    out.line(FontRole::Title, doc.display_name());
    if let Some(contact) = info.contact_line() {
        out.line(FontRole::Body, contact);
    }
    if let Some(links) = info.links_line() {
        out.line(FontRole::Body, links);
    }
}

fn render_experience(out: &mut PageComposer<'_>, exp: &ExperienceEntry) {
    let config = out.config();
    let title_font = config.subheading;
    let date_font = config.subheading.with_bold(false);
    let bullet = format!("{} ", config.bullet);
    let indent = config.bullet_indent;
    let entry_gap = config.entry_gap;

    let position = non_blank(&exp.position).unwrap_or("Position");
    let dates = exp.has_dates().then(|| exp.date_range());
    out.split_line(position, title_font, dates.as_deref().map(|d| (d, date_font)));
    out.wrapped(FontRole::Body, &exp.employer_line(), 0.0, None);
    out.wrapped(FontRole::Body, &exp.responsibilities, indent, Some(&bullet));
    out.gap(entry_gap);
}

fn render_education(out: &mut PageComposer<'_>, edu: &EducationEntry) {
    let config = out.config();
    let title_font = config.subheading;
    let date_font = config.subheading.with_bold(false);
    let entry_gap = config.entry_gap;

    let date = non_blank(&edu.graduation_date).map(|d| (d, date_font));
    out.split_line(edu.institution.trim(), title_font, date);
    if let Some(degree) = edu.degree_line() {
        out.wrapped(FontRole::Body, &degree, 0.0, None);
    }
    out.gap(entry_gap);
}

fn render_project(out: &mut PageComposer<'_>, project: &ProjectEntry) {
    let entry_gap = out.config().entry_gap;

    out.line(FontRole::Subheading, project.name.trim());
    if let Some(tech) = non_blank(&project.technologies) {
        out.wrapped(FontRole::Body, &format!("Technologies: {}", tech), 0.0, None);
    }
    out.wrapped(FontRole::Body, &project.description, 0.0, None);
    if let Some(link) = non_blank(&project.link) {
        out.wrapped(FontRole::Body, link, 0.0, None);
    }
    out.gap(entry_gap);
}

fn render_certification(out: &mut PageComposer<'_>, cert: &CertificationEntry) {
    out.wrapped(FontRole::Body, &cert.display_line(), 0.0, None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkillsBlock;

    #[test]
    fn test_order_starts_with_header() {
        assert_eq!(Section::ORDER[0], Section::Header);
        assert_eq!(Section::ORDER[6], Section::Certifications);
        assert!(Section::Header.heading().is_none());
    }

    #[test]
    fn test_is_renderable() {
        assert!(!ExperienceEntry::new("  ", "Engineer").is_renderable());
        assert!(ExperienceEntry::new("Acme", "").is_renderable());
        assert!(!EducationEntry::default().is_renderable());
        assert!(ProjectEntry::new("resume-layout").is_renderable());
        assert!(!CertificationEntry::new("", "AWS").is_renderable());
    }

    #[test]
    fn test_skipped_entries() {
        let mut doc = ResumeDocument::new();
        doc.add_experience(ExperienceEntry::new("", "Engineer"));
        doc.add_certification(CertificationEntry::new("CKA", "CNCF"));
        doc.add_certification(CertificationEntry::new(" ", "AWS"));
        assert_eq!(Section::Experience.skipped_entries(&doc), 1);
        assert_eq!(Section::Certifications.skipped_entries(&doc), 1);
        assert_eq!(Section::Header.skipped_entries(&doc), 0);
    }

    #[test]
    fn test_is_present() {
        let mut doc = ResumeDocument::new();
        assert!(Section::Header.is_present(&doc));
        assert!(!Section::Experience.is_present(&doc));

        doc.add_experience(ExperienceEntry::default());
        assert!(!Section::Experience.is_present(&doc));

        doc.add_experience(ExperienceEntry::new("Acme", "Engineer"));
        assert!(Section::Experience.is_present(&doc));

        doc.skills = SkillsBlock {
            tools: "Git".into(),
            ..Default::default()
        };
        assert!(Section::Skills.is_present(&doc));
    }
}
