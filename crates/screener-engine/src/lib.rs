//! # screener-engine
//!
//! Financial metrics for screening listed companies.
//!
//! Provider payloads are reconciled into two canonical snapshots, guarded
//! calculators turn each snapshot into metric values, and reports collect the
//! values together with a reason for every metric that could not be computed.
//!
//! ```text
//! payloads -> reconcile -> snapshot -> calculators / solvency -> report + status
//! ```
//!
//! Everything here is synchronous and free of shared state. Separate reports
//! can be updated from separate threads.

pub mod calculators;
pub mod guard;
pub mod metric;
pub mod reconcile;
pub mod report;
pub mod result;
pub mod snapshot;
pub mod solvency;
pub mod stock;

pub use guard::{Guard, ValidationError};
pub use metric::{
  ForwardPeg, InterestCoverageRatio, MetricType, PriceSalesRatio, QuickRatio, SolvencyScore,
  UpsidePotential,
};
pub use reconcile::{financial_snapshot, market_snapshot, MarketSources};
pub use report::{MetricReport, MonthlyReport, QuarterlyReport, ReportError, ReportIntegrityStatus};
pub use result::{CalculationResult, ErrorKind};
pub use snapshot::{AnalystRatings, FinancialDataSnapshot, MarketDataSnapshot};
pub use solvency::solvency_score;
pub use stock::Stock;
