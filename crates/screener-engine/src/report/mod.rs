//! Report entities and the integrity state machine.
//!
//! A report is recomputed wholesale from one snapshot: every update discards
//! the previous values and errors before running the calculators again.

pub mod error;
pub mod monthly;
pub mod quarterly;
pub mod status;

pub use error::ReportError;
pub use monthly::MonthlyReport;
pub use quarterly::QuarterlyReport;
pub use status::ReportIntegrityStatus;

use chrono::{DateTime, NaiveDate, Utc};
use screener_core::Sector;
use tracing::debug;

use crate::metric::MetricType;
use crate::result::CalculationResult;

/// Behaviour shared by monthly and quarterly reports
pub trait MetricReport {
  /// Snapshot the report is computed from
  type Snapshot;

  /// An empty report for the period
  fn new(period: NaiveDate) -> Self;

  fn period(&self) -> NaiveDate;

  /// Replace every computed value, error and the status, stamping errors with `occurred_at`
  fn update_metrics_at(
    &mut self,
    snapshot: &Self::Snapshot,
    sector: Option<Sector>,
    occurred_at: DateTime<Utc>,
  );

  fn update_metrics(&mut self, snapshot: &Self::Snapshot, sector: Option<Sector>) {
    self.update_metrics_at(snapshot, sector, Utc::now());
  }

  fn errors(&self) -> &[ReportError];

  fn integrity_status(&self) -> ReportIntegrityStatus;
}

/// Turns calculation results into stored values plus error records
pub(crate) struct ErrorCollector {
  occurred_at: DateTime<Utc>,
  errors: Vec<ReportError>,
}

impl ErrorCollector {
  pub(crate) fn new(occurred_at: DateTime<Utc>) -> Self {
    Self { occurred_at, errors: Vec::new() }
  }

  /// The success value, or `None` after recording why there is none
  pub(crate) fn take<T>(&mut self, metric: MetricType, result: CalculationResult<T>) -> Option<T> {
    match result {
      CalculationResult::Success(value) => Some(value),
      CalculationResult::Failure { reason, kind } => {
        debug!("{} failed: {} ({})", metric, reason, kind);
        self.errors.push(ReportError::new(metric, reason, kind, self.occurred_at));
        None
      }
      CalculationResult::Skipped { reason } => {
        debug!("{} skipped: {}", metric, reason);
        self.errors.push(ReportError::not_applicable(metric, reason, self.occurred_at));
        None
      }
    }
  }

  pub(crate) fn into_errors(self) -> Vec<ReportError> {
    self.errors
  }
}
