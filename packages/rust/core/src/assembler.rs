//! Document assembler.
//!
//! Reads each category's rows from an export directory, applies the record
//! mapper, sorts skills by descending endorsement count, and persists the
//! resulting document as pretty-printed JSON.

use std::path::Path;

use tracing::{debug, info, instrument};

use linkfolio_ingest::{Category, read_category};
use linkfolio_mapper::{
    map_certifications, map_education, map_positions, map_profile, map_projects,
    map_recommendations, map_skills,
};
use linkfolio_shared::{PortfolioDocument, PortfolioError, Result, Skill};

/// Assemble a portfolio document from an export directory.
///
/// Best-effort by design: a missing directory or missing category files
/// produce empty sequences and the default profile identity, never an
/// error. Skills are the one category with a derived invariant; they leave
/// here sorted by descending endorsements, ties in source row order.
#[instrument(skip_all, fields(source_dir = %source_dir.display()))]
pub fn assemble(source_dir: &Path) -> PortfolioDocument {
    let document = PortfolioDocument {
        profile: map_profile(&read_category(source_dir, Category::Profile)),
        positions: map_positions(&read_category(source_dir, Category::Positions)),
        skills: sorted_skills(map_skills(&read_category(source_dir, Category::Skills))),
        education: map_education(&read_category(source_dir, Category::Education)),
        certifications: map_certifications(&read_category(
            source_dir,
            Category::Certifications,
        )),
        recommendations: map_recommendations(&read_category(
            source_dir,
            Category::Recommendations,
        )),
        projects: map_projects(&read_category(source_dir, Category::Projects)),
    };

    info!(
        positions = document.positions.len(),
        skills = document.skills.len(),
        "document assembled"
    );

    document
}

/// Sort skills by descending endorsement count. `sort_by` is stable, so
/// ties keep their source row order.
fn sorted_skills(mut skills: Vec<Skill>) -> Vec<Skill> {
    skills.sort_by(|a, b| b.endorsements.cmp(&a.endorsements));
    skills
}

/// Write the document to `path` as pretty-printed JSON.
///
/// Parent directories are created as needed, and the write goes through a
/// temp file plus rename so a crash never leaves a truncated document.
/// This is the one fatal operation in the system.
pub fn write_document(path: &Path, document: &PortfolioDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(document)
        .map_err(|e| PortfolioError::serialize(e.to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PortfolioError::io(parent, e))?;
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| PortfolioError::serialize(format!("not a file path: {}", path.display())))?
        .to_string_lossy();
    let temp = path.with_file_name(format!(".{file_name}.tmp"));

    std::fs::write(&temp, json).map_err(|e| PortfolioError::io(&temp, e))?;
    std::fs::rename(&temp, path).map_err(|e| PortfolioError::io(path, e))?;

    debug!(path = %path.display(), "wrote portfolio document");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
