use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metric::MetricType;
use crate::result::ErrorKind;

/// Why one metric of a report has no value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportError {
  pub metric: MetricType,
  pub reason: String,
  pub error_kind: ErrorKind,
  pub occurred_at: DateTime<Utc>,
}

impl ReportError {
  pub fn new(
    metric: MetricType,
    reason: impl Into<String>,
    error_kind: ErrorKind,
    occurred_at: DateTime<Utc>,
  ) -> Self {
    Self { metric, reason: reason.into(), error_kind, occurred_at }
  }

  pub fn not_applicable(
    metric: MetricType,
    reason: impl Into<String>,
    occurred_at: DateTime<Utc>,
  ) -> Self {
    Self::new(metric, reason, ErrorKind::NotApplicable, occurred_at)
  }

  /// False for formulas skipped on purpose, true for unusable inputs
  pub fn is_data_defect(&self) -> bool {
    self.error_kind != ErrorKind::NotApplicable
  }
}

impl std::fmt::Display for ReportError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: {} ({})", self.metric, self.reason, self.error_kind)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  #[test]
  fn test_report_error_display() {
    let at = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
    let err =
      ReportError::new(MetricType::ForwardPeg, "forwardEpsGrowth", ErrorKind::DivisionByZero, at);
    assert_eq!(err.to_string(), "FORWARD_PEG: forwardEpsGrowth (DIVISION_BY_ZERO)");
    assert!(err.is_data_defect());
  }

  #[test]
  fn test_not_applicable_is_not_a_data_defect() {
    let err = ReportError::not_applicable(
      MetricType::SolvencyScore,
      "not applicable for sector FINANCE",
      Utc::now(),
    );
    assert_eq!(err.error_kind, ErrorKind::NotApplicable);
    assert!(!err.is_data_defect());
  }

  #[test]
  fn test_report_error_serializes_camel_case() {
    let at = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
    let err =
      ReportError::new(MetricType::QuickRatio, "totalCurrentAssets", ErrorKind::MissingData, at);
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["errorKind"], "MISSING_DATA");
    assert_eq!(json["metric"], "QUICK_RATIO");
    assert_eq!(json["occurredAt"], "2024-07-01T12:00:00Z");
  }
}
