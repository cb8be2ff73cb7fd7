//! # screener-models
//!
//! Serde models for the raw payloads of the two fundamental data providers:
//! - Alpha Vantage statements, company overview and global quote
//! - Yahoo Finance quoteSummary (earnings trend and recommendation trend)
//!
//! Models only deserialize; fetching and caching live outside this crate.

#![warn(clippy::all)]

pub mod alphavantage;
pub mod period;
pub mod yahoo;

pub use alphavantage::{
  BalanceSheet, BalanceSheetReport, CashFlow, CashFlowReport, CompanyOverview, GlobalQuote,
  IncomeStatement, IncomeStatementReport,
};
pub use period::{latest, most_recent, FiscalPeriod};
pub use yahoo::{QuoteSummaryResponse, QuoteSummaryResult, RecommendationTrendEntry};
