//! Outcome of a single metric calculation.
//!
//! A calculation either produces a value, fails because its inputs are
//! unusable, or is skipped because the formula does not apply. Consumers must
//! handle all three; there is no panicking accessor.

use serde::{Deserialize, Serialize};

/// Why a metric could not be produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
  /// A required input is absent
  MissingData,
  /// A required denominator is present but zero
  DivisionByZero,
  /// The result cannot be represented
  InvalidRange,
  /// Reserved for formulas that reject negative inputs
  NegativeValue,
  /// The formula is intentionally not computed, not a data defect
  NotApplicable,
}

impl std::fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ErrorKind::MissingData => write!(f, "MISSING_DATA"),
      ErrorKind::DivisionByZero => write!(f, "DIVISION_BY_ZERO"),
      ErrorKind::InvalidRange => write!(f, "INVALID_RANGE"),
      ErrorKind::NegativeValue => write!(f, "NEGATIVE_VALUE"),
      ErrorKind::NotApplicable => write!(f, "NOT_APPLICABLE"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationResult<T> {
  Success(T),
  Failure { reason: String, kind: ErrorKind },
  /// Always [`ErrorKind::NotApplicable`]
  Skipped { reason: String },
}

impl<T> CalculationResult<T> {
  pub fn success(value: T) -> Self {
    CalculationResult::Success(value)
  }

  pub fn failure(kind: ErrorKind, reason: impl Into<String>) -> Self {
    CalculationResult::Failure { reason: reason.into(), kind }
  }

  pub fn skipped(reason: impl Into<String>) -> Self {
    CalculationResult::Skipped { reason: reason.into() }
  }

  /// Transform a success value; failures and skips pass through untouched
  pub fn map<U, F>(self, f: F) -> CalculationResult<U>
  where
    F: FnOnce(T) -> U,
  {
    match self {
      CalculationResult::Success(value) => CalculationResult::Success(f(value)),
      CalculationResult::Failure { reason, kind } => CalculationResult::Failure { reason, kind },
      CalculationResult::Skipped { reason } => CalculationResult::Skipped { reason },
    }
  }

  pub fn on_success<F>(self, action: F) -> Self
  where
    F: FnOnce(&T),
  {
    if let CalculationResult::Success(value) = &self {
      action(value);
    }
    self
  }

  pub fn on_failure<F>(self, action: F) -> Self
  where
    F: FnOnce(&str, ErrorKind),
  {
    if let CalculationResult::Failure { reason, kind } = &self {
      action(reason, *kind);
    }
    self
  }

  pub fn on_skipped<F>(self, action: F) -> Self
  where
    F: FnOnce(&str),
  {
    if let CalculationResult::Skipped { reason } = &self {
      action(reason);
    }
    self
  }

  pub fn is_success(&self) -> bool {
    matches!(self, CalculationResult::Success(_))
  }

  pub fn is_failure(&self) -> bool {
    matches!(self, CalculationResult::Failure { .. })
  }

  pub fn is_skipped(&self) -> bool {
    matches!(self, CalculationResult::Skipped { .. })
  }

  pub fn value(&self) -> Option<&T> {
    match self {
      CalculationResult::Success(value) => Some(value),
      _ => None,
    }
  }

  pub fn into_value(self) -> Option<T> {
    match self {
      CalculationResult::Success(value) => Some(value),
      _ => None,
    }
  }

  pub fn error_kind(&self) -> Option<ErrorKind> {
    match self {
      CalculationResult::Success(_) => None,
      CalculationResult::Failure { kind, .. } => Some(*kind),
      CalculationResult::Skipped { .. } => Some(ErrorKind::NotApplicable),
    }
  }

  pub fn reason(&self) -> Option<&str> {
    match self {
      CalculationResult::Success(_) => None,
      CalculationResult::Failure { reason, .. } | CalculationResult::Skipped { reason } => {
        Some(reason)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;

  fn all_variants() -> Vec<CalculationResult<i32>> {
    vec![
      CalculationResult::success(21),
      CalculationResult::failure(ErrorKind::DivisionByZero, "revenueTTM"),
      CalculationResult::skipped("not applicable for sector FINANCE"),
    ]
  }

  #[test]
  fn test_map_transforms_success() {
    let doubled = CalculationResult::success(21).map(|v| v * 2);
    assert_eq!(doubled, CalculationResult::success(42));
  }

  #[test]
  fn test_map_propagates_failure_and_skip() {
    let failure: CalculationResult<i32> =
      CalculationResult::failure(ErrorKind::MissingData, "marketCap");
    assert_eq!(
      failure.map(|v| v.to_string()),
      CalculationResult::failure(ErrorKind::MissingData, "marketCap")
    );

    let skipped: CalculationResult<i32> = CalculationResult::skipped("n/a");
    assert_eq!(skipped.map(|v| v + 1), CalculationResult::skipped("n/a"));
  }

  #[test]
  fn test_map_identity_law() {
    for result in all_variants() {
      assert_eq!(result.clone().map(|v| v), result);
    }
  }

  #[test]
  fn test_map_composition_law() {
    let f = |v: i32| v + 1;
    let g = |v: i32| v * 3;
    for result in all_variants() {
      assert_eq!(result.clone().map(f).map(g), result.map(|v| g(f(v))));
    }
  }

  #[test]
  fn test_callbacks_fire_only_on_matching_variant() {
    for result in all_variants() {
      let successes = Cell::new(0);
      let failures = Cell::new(0);
      let skips = Cell::new(0);

      let returned = result
        .clone()
        .on_success(|_| successes.set(successes.get() + 1))
        .on_failure(|_, _| failures.set(failures.get() + 1))
        .on_skipped(|_| skips.set(skips.get() + 1));

      assert_eq!(returned, result);
      assert_eq!(successes.get(), usize::from(result.is_success()));
      assert_eq!(failures.get(), usize::from(result.is_failure()));
      assert_eq!(skips.get(), usize::from(result.is_skipped()));
    }
  }

  #[test]
  fn test_on_failure_receives_reason_and_kind() {
    let mut seen = None;
    let _ = CalculationResult::<i32>::failure(ErrorKind::DivisionByZero, "forwardEpsGrowth")
      .on_failure(|reason, kind| seen = Some((reason.to_string(), kind)));
    assert_eq!(seen, Some(("forwardEpsGrowth".to_string(), ErrorKind::DivisionByZero)));
  }

  #[test]
  fn test_queries_are_exclusive() {
    for result in all_variants() {
      let flags = [result.is_success(), result.is_failure(), result.is_skipped()];
      assert_eq!(flags.iter().filter(|f| **f).count(), 1);
    }
  }

  #[test]
  fn test_accessors() {
    let success = CalculationResult::success(7);
    assert_eq!(success.value(), Some(&7));
    assert_eq!(success.error_kind(), None);
    assert_eq!(success.reason(), None);
    assert_eq!(success.into_value(), Some(7));

    let skipped: CalculationResult<i32> = CalculationResult::skipped("not applicable");
    assert_eq!(skipped.error_kind(), Some(ErrorKind::NotApplicable));
    assert_eq!(skipped.reason(), Some("not applicable"));
    assert_eq!(skipped.into_value(), None);
  }

  #[test]
  fn test_error_kind_display_and_serde() {
    assert_eq!(ErrorKind::DivisionByZero.to_string(), "DIVISION_BY_ZERO");
    assert_eq!(serde_json::to_string(&ErrorKind::NotApplicable).unwrap(), "\"NOT_APPLICABLE\"");
  }
}
