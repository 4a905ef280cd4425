//! Resume form model.
//!
//! These types mirror the resume builder form: every field is free text that
//! may be left blank, and repeatable sections are plain vectors the form
//! appends to and removes from.

use serde::{Deserialize, Serialize};

/// Returns `true` when a form field carries no content.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns the trimmed value, or `None` if the field is blank.
pub(crate) fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// A resume as filled in through the builder form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    /// Name, contact details and summary
    pub personal_info: PersonalInfo,

    /// Work history, most relevant first
    pub experience: Vec<ExperienceEntry>,

    /// Degrees and schools
    pub education: Vec<EducationEntry>,

    /// Skill categories
    pub skills: SkillsBlock,

    /// Side projects and portfolio pieces
    pub projects: Vec<ProjectEntry>,

    /// Certifications and licenses
    pub certifications: Vec<CertificationEntry>,
}

impl ResumeDocument {
    /// Create an empty resume.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a resume from its JSON form representation.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set personal information.
    pub fn with_personal_info(mut self, info: PersonalInfo) -> Self {
        self.personal_info = info;
        self
    }

    /// Set the skills block.
    pub fn with_skills(mut self, skills: SkillsBlock) -> Self {
        self.skills = skills;
        self
    }

    /// Append an experience entry.
    pub fn add_experience(&mut self, entry: ExperienceEntry) {
        self.experience.push(entry);
    }

    /// Remove the experience entry at `index`, if present.
    pub fn remove_experience(&mut self, index: usize) -> Option<ExperienceEntry> {
        (index < self.experience.len()).then(|| self.experience.remove(index))
    }

    /// Append an education entry.
    pub fn add_education(&mut self, entry: EducationEntry) {
        self.education.push(entry);
    }

    /// Remove the education entry at `index`, if present.
    pub fn remove_education(&mut self, index: usize) -> Option<EducationEntry> {
        (index < self.education.len()).then(|| self.education.remove(index))
    }

    /// Append a project entry.
    pub fn add_project(&mut self, entry: ProjectEntry) {
        self.projects.push(entry);
    }

    /// Remove the project entry at `index`, if present.
    pub fn remove_project(&mut self, index: usize) -> Option<ProjectEntry> {
        (index < self.projects.len()).then(|| self.projects.remove(index))
    }

    /// Append a certification entry.
    pub fn add_certification(&mut self, entry: CertificationEntry) {
        self.certifications.push(entry);
    }

    /// Remove the certification entry at `index`, if present.
    pub fn remove_certification(&mut self, index: usize) -> Option<CertificationEntry> {
        (index < self.certifications.len()).then(|| self.certifications.remove(index))
    }

    /// Name shown at the top of the document.
    pub fn display_name(&self) -> &str {
        non_blank(&self.personal_info.full_name).unwrap_or("Your Name")
    }
}

/// Header and summary fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub portfolio: String,
    /// Free-text professional summary
    pub summary: String,
}

impl PersonalInfo {
    /// Create personal info with just a name.
    pub fn named(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Default::default()
        }
    }

    /// `email | phone | location`, skipping blank fields.
    pub fn contact_line(&self) -> Option<String> {
        join_present(&[
            self.email.as_str(),
            self.phone.as_str(),
            self.location.as_str(),
        ])
    }

    /// `linkedin | portfolio`, skipping blank fields.
    pub fn links_line(&self) -> Option<String> {
        join_present(&[self.linkedin.as_str(), self.portfolio.as_str()])
    }
}

fn join_present(fields: &[&str]) -> Option<String> {
    let present: Vec<&str> = fields.iter().filter_map(|f| non_blank(f)).collect();
    (!present.is_empty()).then(|| present.join(" | "))
}

/// One position in the work history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// Still employed here; `end_date` is ignored
    pub current: bool,
    /// One responsibility per line
    pub responsibilities: String,
}

impl ExperienceEntry {
    /// Create an entry for a position at a company.
    pub fn new(company: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
            ..Default::default()
        }
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set a closed date range.
    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = start.into();
        self.end_date = end.into();
        self
    }

    /// Mark the position as current.
    pub fn with_current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }

    /// Set the responsibilities text.
    pub fn with_responsibilities(mut self, text: impl Into<String>) -> Self {
        self.responsibilities = text.into();
        self
    }

    /// Check if there is anything to show in the date column.
    pub fn has_dates(&self) -> bool {
        self.current || !is_blank(&self.start_date) || !is_blank(&self.end_date)
    }

    /// Date range as shown next to the position.
    pub fn date_range(&self) -> String {
        if self.current {
            format!("{} - Present", self.start_date.trim())
        } else {
            format!("{} - {}", self.start_date.trim(), self.end_date.trim())
        }
    }

    /// `company, location`, or just the company.
    pub fn employer_line(&self) -> String {
        match non_blank(&self.location) {
            Some(location) => format!("{}, {}", self.company.trim(), location),
            None => self.company.trim().to_string(),
        }
    }
}

/// One degree or school.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub graduation_date: String,
    /// Blank when not reported
    pub gpa: String,
}

impl EducationEntry {
    /// Create an entry for an institution.
    pub fn new(institution: impl Into<String>, degree: impl Into<String>) -> Self {
        Self {
            institution: institution.into(),
            degree: degree.into(),
            ..Default::default()
        }
    }

    /// Set the field of study.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Set the graduation date.
    pub fn with_graduation_date(mut self, date: impl Into<String>) -> Self {
        self.graduation_date = date.into();
        self
    }

    /// Set the GPA.
    pub fn with_gpa(mut self, gpa: impl Into<String>) -> Self {
        self.gpa = gpa.into();
        self
    }

    /// `degree in field - GPA: gpa`, with absent parts dropped.
    ///
    /// Without a degree the field stands alone.
    pub fn degree_line(&self) -> Option<String> {
        let mut line = self.degree.trim().to_string();
        if let Some(field) = non_blank(&self.field) {
            if !line.is_empty() {
                line.push_str(" in ");
            }
            line.push_str(field);
        }
        if let Some(gpa) = non_blank(&self.gpa) {
            if !line.is_empty() {
                line.push_str(" - ");
            }
            line.push_str("GPA: ");
            line.push_str(gpa);
        }
        non_blank(&line).map(str::to_string)
    }
}

/// Skill categories. Blank categories are left out of the output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsBlock {
    pub technical: String,
    pub soft: String,
    pub languages: String,
    pub tools: String,
}

impl SkillsBlock {
    /// Non-blank categories as `(label, value)` in display order.
    pub fn categories(&self) -> Vec<(&'static str, &str)> {
        [
            ("Technical", self.technical.as_str()),
            ("Tools", self.tools.as_str()),
            ("Soft Skills", self.soft.as_str()),
            ("Languages", self.languages.as_str()),
        ]
        .into_iter()
        .filter_map(|(label, value)| non_blank(value).map(|v| (label, v)))
        .collect()
    }

    /// Check if every category is blank.
    pub fn is_empty(&self) -> bool {
        self.categories().is_empty()
    }
}

/// A project or portfolio piece.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub technologies: String,
    pub description: String,
    pub link: String,
}

impl ProjectEntry {
    /// Create a project with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the technologies used.
    pub fn with_technologies(mut self, technologies: impl Into<String>) -> Self {
        self.technologies = technologies.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }
}

/// A certification or license.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

impl CertificationEntry {
    /// Create a certification.
    pub fn new(name: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            issuer: issuer.into(),
            date: String::new(),
        }
    }

    /// Set the date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// `name - issuer (date)`; issuer falls back to "Issuer".
    pub fn display_line(&self) -> String {
        let issuer = non_blank(&self.issuer).unwrap_or("Issuer");
        match non_blank(&self.date) {
            Some(date) => format!("{} - {} ({})", self.name.trim(), issuer, date),
            None => format!("{} - {}", self.name.trim(), issuer),
        }
    }
}
