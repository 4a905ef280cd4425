//! Document model types.
//!
//! The resume side of the model is the form aggregate the caller fills in;
//! the page side is what the layout engine produces from it.

mod page;
mod resume;

pub use page::{Page, TextRun, Unit};
pub use resume::{
    CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry,
    ResumeDocument, SkillsBlock,
};

pub(crate) use resume::{is_blank, non_blank};
