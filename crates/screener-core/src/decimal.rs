//! Decimal helpers shared by the payload models and the calculators

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Values providers send in place of a number when it is unknown
const ABSENT_MARKERS: [&str; 5] = ["none", "null", "-", "n/a", "nan"];

/// Round half away from zero to [`crate::METRIC_SCALE`] fractional digits.
///
/// The result always carries exactly that many fractional digits, so `2`
/// becomes `2.0000`.
pub fn scale(value: Decimal) -> Decimal {
  let mut scaled =
    value.round_dp_with_strategy(crate::METRIC_SCALE, RoundingStrategy::MidpointAwayFromZero);
  scaled.rescale(crate::METRIC_SCALE);
  scaled
}

/// Parse a provider number, treating placeholders as absent.
///
/// Accepts plain (`"1234.5"`) and scientific (`"1.2345e3"`) notation.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
  let trimmed = raw.trim();
  if trimmed.is_empty() || ABSENT_MARKERS.iter().any(|m| trimmed.eq_ignore_ascii_case(m)) {
    return None;
  }

  Decimal::from_str(trimmed).ok().or_else(|| Decimal::from_scientific(trimmed).ok())
}
