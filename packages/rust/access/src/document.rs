//! Persisted document loading with process-lifetime memoization.
//!
//! The presentation layer reads the document many times per render, so the
//! first successful load is cached for the life of the process and never
//! invalidated; refreshing the data means re-running the assembler and
//! restarting. A failed load returns a static fallback document WITHOUT
//! caching it, so a later call sees the file once it exists.

use std::path::Path;
use std::sync::{LazyLock, OnceLock};

use tracing::warn;

use linkfolio_shared::{PortfolioDocument, PortfolioError, Profile, Result};

/// Fixed path the assembler writes and the presentation side reads.
pub const DEFAULT_DOCUMENT_PATH: &str = "public/data/linkedin-data.json";

/// Cached document: set exactly once, on the first successful load.
static DOCUMENT: OnceLock<PortfolioDocument> = OnceLock::new();

/// Fallback returned while no document can be loaded.
static FALLBACK: LazyLock<PortfolioDocument> = LazyLock::new(fallback_document);

/// Get the portfolio document, loading it from [`DEFAULT_DOCUMENT_PATH`] on
/// first use.
///
/// Never fails: when the file is absent or corrupt this logs a warning and
/// returns the fallback document, leaving the cache unset so the next call
/// retries the load.
pub fn document() -> &'static PortfolioDocument {
    if let Some(document) = DOCUMENT.get() {
        return document;
    }

    match try_load(Path::new(DEFAULT_DOCUMENT_PATH)) {
        Ok(document) => DOCUMENT.get_or_init(|| document),
        Err(e) => {
            warn!(path = DEFAULT_DOCUMENT_PATH, error = %e, "portfolio document unavailable, serving fallback");
            &*FALLBACK
        }
    }
}

/// Load a document from an explicit path, without memoization.
///
/// Same degradation policy as [`document`]: any failure yields the fallback.
pub fn load_document(path: &Path) -> PortfolioDocument {
    match try_load(path) {
        Ok(document) => document,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "portfolio document unavailable, serving fallback");
            fallback_document()
        }
    }
}

fn try_load(path: &Path) -> Result<PortfolioDocument> {
    let json = std::fs::read_to_string(path).map_err(|e| PortfolioError::io(path, e))?;
    serde_json::from_str(&json).map_err(|e| PortfolioError::serialize(e.to_string()))
}

/// The document served when nothing has been assembled yet: a placeholder
/// identity and all-empty sequences, so the page always renders something.
pub fn fallback_document() -> PortfolioDocument {
    PortfolioDocument {
        profile: Profile {
            first_name: "Mark".into(),
            last_name: "Howell".into(),
            headline: "Cloud Operations Professional".into(),
            summary: String::new(),
            industry: String::new(),
            location: String::new(),
        },
        ..PortfolioDocument::default()
    }
}
