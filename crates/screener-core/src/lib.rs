//! # screener-core
//!
//! Shared building blocks for the stock screener workspace:
//! - Sector classification and the solvency score family each sector maps to
//! - Canonical snapshot field names used in calculation failure reasons
//! - Decimal parsing and scaling helpers
//! - Configuration loaded from the environment
//! - The workspace error type

pub mod config;
pub mod decimal;
pub mod error;
pub mod fields;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{ScoreFamily, Sector};

/// Number of fractional digits every computed metric is scaled to
pub const METRIC_SCALE: u32 = 4;

/// Number of quarterly reports summed into a trailing-twelve-month figure
pub const TTM_QUARTERS: usize = 4;

/// Default root directory for cached provider payloads
pub const DEFAULT_DATA_DIR: &str = "./data";
