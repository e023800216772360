//! Shared types, error model, and configuration for Linkfolio.
//!
//! This crate is the foundation depended on by all other Linkfolio crates.
//! It provides:
//! - [`PortfolioError`], the unified error type
//! - Domain types ([`PortfolioDocument`], [`Profile`], [`Position`],
//!   [`Skill`], [`Education`], [`Certification`], [`Recommendation`],
//!   [`ProjectEntry`], [`RawRow`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, PathsConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from,
};
pub use error::{PortfolioError, Result};
pub use types::{
    Certification, Education, PortfolioDocument, Position, Profile, ProjectEntry, RawRow,
    Recommendation, Skill,
};
