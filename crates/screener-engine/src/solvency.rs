/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Sector dependent Altman-style solvency score.
//!
//! Manufacturing sectors use the five factor formula, which includes asset
//! turnover. Non-manufacturing sectors use the four factor Z'' formula. The
//! score is not meaningful for financial institutions and is skipped there.
//!
//! ```text
//! T1 = (currentAssets - currentLiabilities) / totalAssets
//! T2 = retainedEarnings / totalAssets
//! T3 = ebit / totalAssets
//! T4 = shareholderEquity / totalLiabilities
//! T5 = totalRevenue / totalAssets
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use screener_core::{fields, ScoreFamily, Sector};
use tracing::trace;

use crate::guard::Guard;
use crate::metric::SolvencyScore;
use crate::result::CalculationResult;
use crate::snapshot::FinancialDataSnapshot;

/// Coefficients for T1..T5
const MANUFACTURING_WEIGHTS: [Decimal; 5] = [dec!(1.2), dec!(1.4), dec!(3.3), dec!(0.6), dec!(1.0)];

/// Coefficients for T1..T4
const NON_MANUFACTURING_WEIGHTS: [Decimal; 4] = [dec!(6.56), dec!(3.26), dec!(6.72), dec!(1.05)];

/// Name used in the skip reason when no sector is known
const UNDEFINED_SECTOR: &str = "UNDEFINED";

pub fn solvency_score(
  snapshot: &FinancialDataSnapshot,
  sector: Option<Sector>,
) -> CalculationResult<SolvencyScore> {
  let family = sector.map(|s| s.score_family()).unwrap_or(ScoreFamily::NotApplicable);

  if family == ScoreFamily::NotApplicable {
    let name = sector.map(|s| s.to_string()).unwrap_or_else(|| UNDEFINED_SECTOR.to_string());
    trace!("solvency score skipped for sector {}", name);
    return CalculationResult::skipped(format!("not applicable for sector {}", name));
  }

  let guard = Guard::new(snapshot)
    .require(fields::TOTAL_CURRENT_ASSETS, |s| s.total_current_assets)
    .require(fields::TOTAL_CURRENT_LIABILITIES, |s| s.total_current_liabilities)
    .require(fields::RETAINED_EARNINGS, |s| s.retained_earnings)
    .require(fields::EBIT, |s| s.ebit)
    .require(fields::TOTAL_SHAREHOLDER_EQUITY, |s| s.total_shareholder_equity)
    .ensure_non_zero(fields::TOTAL_ASSETS, |s| s.total_assets)
    .ensure_non_zero(fields::TOTAL_LIABILITIES, |s| s.total_liabilities);

  let result = match family {
    ScoreFamily::Manufacturing => guard
      .require(fields::TOTAL_REVENUE, |s| s.total_revenue)
      .validate(|s| {
        let mut terms = shared_terms(s)?.to_vec();
        terms.push(s.total_revenue?.checked_div(s.total_assets?)?);
        weighted_sum(&MANUFACTURING_WEIGHTS, &terms)
      }),
    _ => guard.validate(|s| weighted_sum(&NON_MANUFACTURING_WEIGHTS, &shared_terms(s)?)),
  };

  result.map(SolvencyScore::new)
}

/// T1..T4, common to both formula families
fn shared_terms(s: &FinancialDataSnapshot) -> Option<[Decimal; 4]> {
  let total_assets = s.total_assets?;
  let working_capital = s.total_current_assets?.checked_sub(s.total_current_liabilities?)?;

  Some([
    working_capital.checked_div(total_assets)?,
    s.retained_earnings?.checked_div(total_assets)?,
    s.ebit?.checked_div(total_assets)?,
    s.total_shareholder_equity?.checked_div(s.total_liabilities?)?,
  ])
}

fn weighted_sum(weights: &[Decimal], terms: &[Decimal]) -> Option<Decimal> {
  weights
    .iter()
    .zip(terms)
    .try_fold(Decimal::ZERO, |acc, (weight, term)| acc.checked_add(weight.checked_mul(*term)?))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::result::ErrorKind;

  fn balance_sheet() -> FinancialDataSnapshot {
    FinancialDataSnapshot {
      total_current_assets: Some(dec!(500000)),
      total_current_liabilities: Some(dec!(200000)),
      total_assets: Some(dec!(1000000)),
      total_liabilities: Some(dec!(400000)),
      retained_earnings: Some(dec!(150000)),
      ebit: Some(dec!(100000)),
      total_shareholder_equity: Some(dec!(600000)),
      ..Default::default()
    }
  }

  fn score_string(result: CalculationResult<SolvencyScore>) -> String {
    match result {
      CalculationResult::Success(score) => score.to_string(),
      other => panic!("expected a score, got {:?}", other.reason()),
    }
  }

  #[test]
  fn test_non_manufacturing_score() {
    // 6.56*0.3 + 3.26*0.15 + 6.72*0.1 + 1.05*1.5
    let result = solvency_score(&balance_sheet(), Some(Sector::Technology));
    assert_eq!(score_string(result), "4.7040");
  }

  #[test]
  fn test_non_manufacturing_ignores_revenue() {
    let with_revenue =
      FinancialDataSnapshot { total_revenue: Some(dec!(900000)), ..balance_sheet() };
    assert_eq!(
      solvency_score(&with_revenue, Some(Sector::Healthcare)),
      solvency_score(&balance_sheet(), Some(Sector::Healthcare))
    );
  }

  #[test]
  fn test_manufacturing_score() {
    // 1.2*0.3 + 1.4*0.15 + 3.3*0.1 + 0.6*1.5 + 1.0*0.8
    let snapshot = FinancialDataSnapshot { total_revenue: Some(dec!(800000)), ..balance_sheet() };
    assert_eq!(score_string(solvency_score(&snapshot, Some(Sector::Energy))), "2.6000");
    assert_eq!(score_string(solvency_score(&snapshot, Some(Sector::Mining))), "2.6000");
    assert_eq!(score_string(solvency_score(&snapshot, Some(Sector::Utilities))), "2.6000");
  }

  #[test]
  fn test_manufacturing_requires_revenue() {
    assert_eq!(
      solvency_score(&balance_sheet(), Some(Sector::Energy)),
      CalculationResult::failure(ErrorKind::MissingData, "totalRevenue")
    );
  }

  #[test]
  fn test_zero_total_assets_reported_before_missing_revenue() {
    let snapshot = FinancialDataSnapshot { total_assets: Some(dec!(0)), ..balance_sheet() };
    assert_eq!(
      solvency_score(&snapshot, Some(Sector::Energy)),
      CalculationResult::failure(ErrorKind::DivisionByZero, "totalAssets")
    );
  }

  #[test]
  fn test_zero_total_liabilities() {
    let snapshot = FinancialDataSnapshot { total_liabilities: Some(dec!(0)), ..balance_sheet() };
    assert_eq!(
      solvency_score(&snapshot, Some(Sector::RealEstate)),
      CalculationResult::failure(ErrorKind::DivisionByZero, "totalLiabilities")
    );
  }

  #[test]
  fn test_missing_shared_fields() {
    let cases: [(FinancialDataSnapshot, &str); 5] = [
      (
        FinancialDataSnapshot { total_current_assets: None, ..balance_sheet() },
        "totalCurrentAssets",
      ),
      (
        FinancialDataSnapshot { total_current_liabilities: None, ..balance_sheet() },
        "totalCurrentLiabilities",
      ),
      (FinancialDataSnapshot { retained_earnings: None, ..balance_sheet() }, "retainedEarnings"),
      (FinancialDataSnapshot { ebit: None, ..balance_sheet() }, "ebit"),
      (
        FinancialDataSnapshot { total_shareholder_equity: None, ..balance_sheet() },
        "totalShareholderEquity",
      ),
    ];

    for (snapshot, field) in cases {
      assert_eq!(
        solvency_score(&snapshot, Some(Sector::ConsumerDiscretionary)),
        CalculationResult::failure(ErrorKind::MissingData, field)
      );
    }
  }

  #[test]
  fn test_not_applicable_sectors_are_skipped_regardless_of_inputs() {
    for snapshot in [balance_sheet(), FinancialDataSnapshot::default()] {
      assert_eq!(
        solvency_score(&snapshot, Some(Sector::Finance)),
        CalculationResult::skipped("not applicable for sector FINANCE")
      );
      assert_eq!(
        solvency_score(&snapshot, Some(Sector::Other)),
        CalculationResult::skipped("not applicable for sector OTHER")
      );
      assert_eq!(
        solvency_score(&snapshot, None),
        CalculationResult::skipped("not applicable for sector UNDEFINED")
      );
    }
  }

  #[test]
  fn test_negative_working_capital_lowers_score() {
    let snapshot = FinancialDataSnapshot {
      total_current_assets: Some(dec!(100000)),
      total_current_liabilities: Some(dec!(300000)),
      ..balance_sheet()
    };
    // 6.56*-0.2 + 0.489 + 0.672 + 1.575
    assert_eq!(score_string(solvency_score(&snapshot, Some(Sector::Technology))), "1.4240");
  }
}
