//! Document assembly pipeline for Linkfolio.
//!
//! [`assembler`] turns an export directory into a [`PortfolioDocument`] and
//! persists it; [`pipeline`] wraps that as the end-to-end `process` step
//! with progress reporting and timing.
//!
//! [`PortfolioDocument`]: linkfolio_shared::PortfolioDocument

pub mod assembler;
pub mod pipeline;

pub use assembler::{assemble, write_document};
pub use pipeline::{
    DocumentCounts, ProcessConfig, ProcessResult, ProgressReporter, SilentProgress, process,
};
