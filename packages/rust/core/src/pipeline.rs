//! End-to-end `process` pipeline: export directory, assemble, persist.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, instrument};

use linkfolio_shared::{PortfolioDocument, Result};

use crate::assembler;

/// Configuration for the `process` pipeline.
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    /// Directory holding the unpacked LinkedIn export CSVs.
    pub source_dir: PathBuf,
    /// Path the assembled document is written to.
    pub output_path: PathBuf,
}

/// Per-category record counts for the summary output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentCounts {
    pub positions: usize,
    pub skills: usize,
    pub education: usize,
    pub certifications: usize,
    pub recommendations: usize,
    pub projects: usize,
}

impl DocumentCounts {
    /// Tally the sequences of an assembled document.
    pub fn for_document(document: &PortfolioDocument) -> Self {
        Self {
            positions: document.positions.len(),
            skills: document.skills.len(),
            education: document.education.len(),
            certifications: document.certifications.len(),
            recommendations: document.recommendations.len(),
            projects: document.projects.len(),
        }
    }
}

/// Result of the `process` pipeline.
#[derive(Debug)]
pub struct ProcessResult {
    /// The assembled document.
    pub document: PortfolioDocument,
    /// Where the document was written.
    pub output_path: PathBuf,
    /// Per-category record counts.
    pub counts: DocumentCounts,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when the pipeline completes.
    fn done(&self, result: &ProcessResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _result: &ProcessResult) {}
}

/// Run the full `process` pipeline.
///
/// 1. Assemble the document from the export directory (best-effort)
/// 2. Write it to the output path (the only fatal step)
#[instrument(skip_all, fields(source_dir = %config.source_dir.display()))]
pub fn process(
    config: &ProcessConfig,
    progress: &dyn ProgressReporter,
) -> Result<ProcessResult> {
    let start = Instant::now();

    info!(
        source_dir = %config.source_dir.display(),
        output = %config.output_path.display(),
        "processing LinkedIn export"
    );

    progress.phase("Reading export files");
    let document = assembler::assemble(&config.source_dir);

    progress.phase("Writing portfolio document");
    assembler::write_document(&config.output_path, &document)?;

    let counts = DocumentCounts::for_document(&document);
    let result = ProcessResult {
        document,
        output_path: config.output_path.clone(),
        counts,
        elapsed: start.elapsed(),
    };

    info!(
        skills = counts.skills,
        positions = counts.positions,
        elapsed_ms = result.elapsed.as_millis() as u64,
        "processing complete"
    );

    progress.done(&result);
    Ok(result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::Path;

    #[test]
    fn process_fixture_export() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ProcessConfig {
            source_dir: PathBuf::from("../../../fixtures/csv"),
            output_path: tmp.path().join("public/data/linkedin-data.json"),
        };

        let result = process(&config, &SilentProgress).unwrap();

        assert!(result.output_path.exists());
        assert_eq!(result.counts.skills, result.document.skills.len());
        assert!(result.counts.positions > 0);
    }

    #[test]
    fn process_missing_source_still_writes() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ProcessConfig {
            source_dir: PathBuf::from("/nonexistent/export"),
            output_path: tmp.path().join("linkedin-data.json"),
        };

        let result = process(&config, &SilentProgress).unwrap();

        assert_eq!(result.counts.positions, 0);
        assert_eq!(result.counts.skills, 0);
        assert_eq!(result.document.profile.first_name, "Mark");
        assert!(result.output_path.exists());
    }

    #[test]
    fn process_unwritable_output_fails() {
        let config = ProcessConfig {
            source_dir: PathBuf::from("/nonexistent/export"),
            output_path: Path::new("/proc/linkfolio/out.json").to_path_buf(),
        };

        assert!(process(&config, &SilentProgress).is_err());
    }

    #[test]
    fn phases_reported_in_order() {
        use std::cell::RefCell;

        struct Recorder(RefCell<Vec<String>>);
        impl ProgressReporter for Recorder {
            fn phase(&self, name: &str) {
                self.0.borrow_mut().push(name.to_string());
            }
            fn done(&self, _result: &ProcessResult) {
                self.0.borrow_mut().push("done".into());
            }
        }

        let tmp = tempfile::tempdir().unwrap();
        let config = ProcessConfig {
            source_dir: PathBuf::from("/nonexistent/export"),
            output_path: tmp.path().join("out.json"),
        };

        let recorder = Recorder(RefCell::new(Vec::new()));
        process(&config, &recorder).unwrap();

        assert_eq!(
            recorder.0.into_inner(),
            [
                "Reading export files",
                "Writing portfolio document",
                "done"
            ]
        );
    }
}
