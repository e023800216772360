//! Core domain types for Linkfolio portfolio documents.
//!
//! Field names serialize in camelCase so the persisted JSON matches the
//! shape the presentation layer consumes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single raw row from an export CSV: column name to cell value.
///
/// Rows carry no schema beyond the header; missing columns simply have no
/// entry, and the mapper substitutes the documented defaults.
pub type RawRow = HashMap<String, String>;

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Identity and headline information, one per document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub summary: String,
    pub industry: String,
    pub location: String,
}

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A single role held at a company.
///
/// `end_date` is `"Present"` for ongoing roles (the export leaves the
/// column empty in that case).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub duration: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Skill
// ---------------------------------------------------------------------------

/// A named skill with its endorsement count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub endorsements: u32,
}

// ---------------------------------------------------------------------------
// Education
// ---------------------------------------------------------------------------

/// A school attended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
}

// ---------------------------------------------------------------------------
// Certification
// ---------------------------------------------------------------------------

/// A professional certification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    /// Omitted from the JSON entirely when the export has no credential ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// A recommendation received from a colleague.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub author: String,
    pub author_title: String,
    pub author_company: String,
    pub text: String,
    pub date: String,
    pub relationship: String,
}

// ---------------------------------------------------------------------------
// ProjectEntry
// ---------------------------------------------------------------------------

/// A listed project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    /// Omitted from the JSON entirely when the export has no URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// PortfolioDocument
// ---------------------------------------------------------------------------

/// The single assembled, persisted aggregate of all export categories.
///
/// Created once by the assembler, written to disk as pretty-printed JSON,
/// then read-only for the rest of the system's life. All sequences preserve
/// source row order except `skills`, which is sorted by descending
/// endorsement count at assembly time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    pub profile: Profile,
    pub positions: Vec<Position>,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub recommendations: Vec<Recommendation>,
    pub projects: Vec<ProjectEntry>,
}
