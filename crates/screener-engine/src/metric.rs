//! Computed metric value objects

use rust_decimal::Decimal;
use screener_core::decimal;
use serde::{Deserialize, Serialize};

/// Metrics the engine computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricType {
  PriceSalesRatio,
  ForwardPeg,
  UpsidePotential,
  QuickRatio,
  InterestCoverageRatio,
  SolvencyScore,
}

impl std::fmt::Display for MetricType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MetricType::PriceSalesRatio => write!(f, "PRICE_SALES_RATIO"),
      MetricType::ForwardPeg => write!(f, "FORWARD_PEG"),
      MetricType::UpsidePotential => write!(f, "UPSIDE_POTENTIAL"),
      MetricType::QuickRatio => write!(f, "QUICK_RATIO"),
      MetricType::InterestCoverageRatio => write!(f, "INTEREST_COVERAGE_RATIO"),
      MetricType::SolvencyScore => write!(f, "SOLVENCY_SCORE"),
    }
  }
}

// Every metric is a decimal scaled to four places on construction.
macro_rules! metric_value {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct $name(Decimal);

    impl $name {
      pub fn new(value: Decimal) -> Self {
        Self(decimal::scale(value))
      }

      pub fn value(&self) -> Decimal {
        self.0
      }
    }

    impl std::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
      }
    }
  };
}

metric_value!(
  /// Market capitalisation over trailing twelve month revenue
  PriceSalesRatio
);
metric_value!(
  /// Forward P/E over expected EPS growth
  ForwardPeg
);
metric_value!(
  /// Distance from the current price to the analyst target, in percent
  UpsidePotential
);
metric_value!(
  /// Liquid current assets over current liabilities
  QuickRatio
);
metric_value!(
  /// EBIT over interest expense
  InterestCoverageRatio
);
metric_value!(
  /// Altman-style solvency score
  SolvencyScore
);

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_metric_values_are_scaled() {
    let ratio = PriceSalesRatio::new(dec!(2));
    assert_eq!(ratio.to_string(), "2.0000");
    assert_eq!(ratio.value().scale(), 4);

    let score = SolvencyScore::new(dec!(4.70405));
    assert_eq!(score.value(), dec!(4.7041));
  }

  #[test]
  fn test_metric_value_serializes_as_plain_decimal() {
    let json = serde_json::to_string(&QuickRatio::new(dec!(2.5))).unwrap();
    assert_eq!(json, "\"2.5000\"");
  }

  #[test]
  fn test_metric_type_display_matches_serde() {
    for metric in [
      MetricType::PriceSalesRatio,
      MetricType::ForwardPeg,
      MetricType::UpsidePotential,
      MetricType::QuickRatio,
      MetricType::InterestCoverageRatio,
      MetricType::SolvencyScore,
    ] {
      let json = serde_json::to_string(&metric).unwrap();
      assert_eq!(json, format!("\"{}\"", metric));
    }
  }
}
