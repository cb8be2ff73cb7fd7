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

//! Guarded ratio calculators.
//!
//! Each calculator is a pure function of its snapshot. Negative results are
//! legitimate (a price above target, an operating loss) and are not clamped.

use rust_decimal::Decimal;
use screener_core::fields;

use crate::guard::Guard;
use crate::metric::{
  ForwardPeg, InterestCoverageRatio, PriceSalesRatio, QuickRatio, UpsidePotential,
};
use crate::result::CalculationResult;
use crate::snapshot::{FinancialDataSnapshot, MarketDataSnapshot};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// marketCap / revenueTTM
pub fn price_sales_ratio(snapshot: &MarketDataSnapshot) -> CalculationResult<PriceSalesRatio> {
  Guard::new(snapshot)
    .require(fields::MARKET_CAP, |s| s.market_cap)
    .ensure_non_zero(fields::REVENUE_TTM, |s| s.revenue_ttm)
    .validate(|s| s.market_cap?.checked_div(s.revenue_ttm?))
    .map(PriceSalesRatio::new)
}

/// forwardPeRatio / forwardEpsGrowth
pub fn forward_peg(snapshot: &MarketDataSnapshot) -> CalculationResult<ForwardPeg> {
  Guard::new(snapshot)
    .require(fields::FORWARD_PE_RATIO, |s| s.forward_pe_ratio)
    .ensure_non_zero(fields::FORWARD_EPS_GROWTH, |s| s.forward_eps_growth)
    .validate(|s| s.forward_pe_ratio?.checked_div(s.forward_eps_growth?))
    .map(ForwardPeg::new)
}

/// (targetPrice - currentPrice) / currentPrice * 100
pub fn upside_potential(snapshot: &MarketDataSnapshot) -> CalculationResult<UpsidePotential> {
  Guard::new(snapshot)
    .require(fields::TARGET_PRICE, |s| s.target_price)
    .ensure_non_zero(fields::CURRENT_PRICE, |s| s.current_price)
    .validate(|s| {
      let current = s.current_price?;
      s.target_price?.checked_sub(current)?.checked_div(current)?.checked_mul(HUNDRED)
    })
    .map(UpsidePotential::new)
}

/// (totalCurrentAssets - inventory) / totalCurrentLiabilities, absent inventory reads as zero
pub fn quick_ratio(snapshot: &FinancialDataSnapshot) -> CalculationResult<QuickRatio> {
  Guard::new(snapshot)
    .require(fields::TOTAL_CURRENT_ASSETS, |s| s.total_current_assets)
    .ensure_non_zero(fields::TOTAL_CURRENT_LIABILITIES, |s| s.total_current_liabilities)
    .validate(|s| {
      let inventory = s.inventory.unwrap_or(Decimal::ZERO);
      s.total_current_assets?.checked_sub(inventory)?.checked_div(s.total_current_liabilities?)
    })
    .map(QuickRatio::new)
}

/// ebit / interestExpense
pub fn interest_coverage_ratio(
  snapshot: &FinancialDataSnapshot,
) -> CalculationResult<InterestCoverageRatio> {
  Guard::new(snapshot)
    .require(fields::EBIT, |s| s.ebit)
    .ensure_non_zero(fields::INTEREST_EXPENSE, |s| s.interest_expense)
    .validate(|s| s.ebit?.checked_div(s.interest_expense?))
    .map(InterestCoverageRatio::new)
}
