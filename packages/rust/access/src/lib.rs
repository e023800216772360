//! Read side of Linkfolio: load the persisted portfolio document and derive
//! presentation views from it.
//!
//! The document is loaded at most once per process (see [`document`]) and is
//! immutable afterwards, so every view here is a pure read. Loading never
//! fails; a missing or corrupt file degrades to a placeholder document.

mod document;
mod views;

pub use document::{DEFAULT_DOCUMENT_PATH, document, fallback_document, load_document};
pub use views::{
    DEFAULT_TOP_SKILLS, SkillCategory, classify_skill, featured_positions, skills_by_category,
    top_skills, unique_certifications, unique_education,
};
