//! Fluent precondition checks run before a formula.
//!
//! Checks accumulate in call order and never short-circuit. [`Guard::validate`]
//! reports only the first recorded problem, so the failure names whichever
//! field was checked first, not whichever the formula would trip over first.

use rust_decimal::Decimal;
use tracing::trace;

use crate::result::{CalculationResult, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
  pub field: &'static str,
  pub kind: ErrorKind,
}

#[derive(Debug)]
pub struct Guard<'a, S> {
  snapshot: &'a S,
  errors: Vec<ValidationError>,
}

impl<'a, S> Guard<'a, S> {
  pub fn new(snapshot: &'a S) -> Self {
    Self { snapshot, errors: Vec::new() }
  }

  /// Record `MISSING_DATA` when the field is absent
  pub fn require<V, F>(mut self, field: &'static str, accessor: F) -> Self
  where
    F: FnOnce(&S) -> Option<V>,
  {
    if accessor(self.snapshot).is_none() {
      self.record(field, ErrorKind::MissingData);
    }
    self
  }

  /// Record `MISSING_DATA` when absent, `DIVISION_BY_ZERO` when zero
  pub fn ensure_non_zero<F>(mut self, field: &'static str, accessor: F) -> Self
  where
    F: FnOnce(&S) -> Option<Decimal>,
  {
    match accessor(self.snapshot) {
      None => self.record(field, ErrorKind::MissingData),
      Some(value) if value.is_zero() => self.record(field, ErrorKind::DivisionByZero),
      Some(_) => {}
    }
    self
  }

  /// Errors recorded so far, in check order
  pub fn errors(&self) -> &[ValidationError] {
    &self.errors
  }

  /// Run `computation` if every check passed.
  ///
  /// The computation returns `None` only when checked decimal arithmetic
  /// overflows, which becomes an `INVALID_RANGE` failure.
  pub fn validate<T, F>(self, computation: F) -> CalculationResult<T>
  where
    F: FnOnce(&S) -> Option<T>,
  {
    if let Some(first) = self.errors.first() {
      return CalculationResult::failure(first.kind, first.field);
    }

    match computation(self.snapshot) {
      Some(value) => CalculationResult::success(value),
      None => CalculationResult::failure(ErrorKind::InvalidRange, "result out of range"),
    }
  }

  fn record(&mut self, field: &'static str, kind: ErrorKind) {
    trace!("guard check failed: {} -> {}", field, kind);
    self.errors.push(ValidationError { field, kind });
  }
}
