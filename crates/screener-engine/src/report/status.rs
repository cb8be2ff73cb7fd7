//! Integrity status derivation.
//!
//! Quarterly reports are either ready or missing data. Monthly reports track
//! which provider delivered enough to compute its side of the metrics:
//!
//! | Alpha Vantage side | Yahoo side | status |
//! |---|---|---|
//! | complete | complete | `COMPLETE` |
//! | complete | incomplete | `AV_FETCHED_COMPLETED` |
//! | incomplete | complete | `YH_FETCHED_COMPLETED` |
//! | incomplete | incomplete | `MISSING_DATA` |

use serde::{Deserialize, Serialize};

use super::error::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportIntegrityStatus {
  /// Both providers contributed everything they are responsible for
  Complete,
  AvFetchedCompleted,
  YhFetchedCompleted,
  /// Reserved, never derived
  PricingDataCollected,
  /// Reserved, never derived
  FundamentalsCollected,
  ReadyForAnalysis,
  MissingData,
}

impl std::fmt::Display for ReportIntegrityStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ReportIntegrityStatus::Complete => write!(f, "COMPLETE"),
      ReportIntegrityStatus::AvFetchedCompleted => write!(f, "AV_FETCHED_COMPLETED"),
      ReportIntegrityStatus::YhFetchedCompleted => write!(f, "YH_FETCHED_COMPLETED"),
      ReportIntegrityStatus::PricingDataCollected => write!(f, "PRICING_DATA_COLLECTED"),
      ReportIntegrityStatus::FundamentalsCollected => write!(f, "FUNDAMENTALS_COLLECTED"),
      ReportIntegrityStatus::ReadyForAnalysis => write!(f, "READY_FOR_ANALYSIS"),
      ReportIntegrityStatus::MissingData => write!(f, "MISSING_DATA"),
    }
  }
}

/// Skipped metrics count as errors here, so a financial company never reaches `READY_FOR_ANALYSIS`
pub fn quarterly_status(errors: &[ReportError]) -> ReportIntegrityStatus {
  if errors.is_empty() {
    ReportIntegrityStatus::ReadyForAnalysis
  } else {
    ReportIntegrityStatus::MissingData
  }
}

pub fn monthly_status(av_complete: bool, yh_complete: bool) -> ReportIntegrityStatus {
  match (av_complete, yh_complete) {
    (true, true) => ReportIntegrityStatus::Complete,
    (true, false) => ReportIntegrityStatus::AvFetchedCompleted,
    (false, true) => ReportIntegrityStatus::YhFetchedCompleted,
    (false, false) => ReportIntegrityStatus::MissingData,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::metric::MetricType;
  use crate::result::ErrorKind;
  use chrono::Utc;

  #[test]
  fn test_quarterly_status() {
    assert_eq!(quarterly_status(&[]), ReportIntegrityStatus::ReadyForAnalysis);

    let skipped = ReportError::not_applicable(MetricType::SolvencyScore, "n/a", Utc::now());
    assert_eq!(quarterly_status(&[skipped]), ReportIntegrityStatus::MissingData);

    let failed = ReportError::new(
      MetricType::QuickRatio,
      "totalCurrentAssets",
      ErrorKind::MissingData,
      Utc::now(),
    );
    assert_eq!(quarterly_status(&[failed]), ReportIntegrityStatus::MissingData);
  }

  #[test]
  fn test_monthly_status_truth_table() {
    assert_eq!(monthly_status(true, true), ReportIntegrityStatus::Complete);
    assert_eq!(monthly_status(true, false), ReportIntegrityStatus::AvFetchedCompleted);
    assert_eq!(monthly_status(false, true), ReportIntegrityStatus::YhFetchedCompleted);
    assert_eq!(monthly_status(false, false), ReportIntegrityStatus::MissingData);
  }

  #[test]
  fn test_status_display_matches_serde() {
    let status = ReportIntegrityStatus::AvFetchedCompleted;
    assert_eq!(serde_json::to_string(&status).unwrap(), format!("\"{}\"", status));
    assert_eq!(ReportIntegrityStatus::ReadyForAnalysis.to_string(), "READY_FOR_ANALYSIS");
  }
}
