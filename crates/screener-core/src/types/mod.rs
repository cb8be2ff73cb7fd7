//! Common types used across screener-* crates

pub mod sector;

pub use sector::{ScoreFamily, Sector};
