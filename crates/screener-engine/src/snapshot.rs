//! Canonical inputs to the calculators.
//!
//! Every field is optional: absent means unknown and is never read as zero
//! unless a formula says so explicitly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Balance sheet, income and cash flow figures for one fiscal period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialDataSnapshot {
  pub fiscal_date_ending: Option<NaiveDate>,
  pub total_current_assets: Option<Decimal>,
  pub total_current_liabilities: Option<Decimal>,
  pub total_assets: Option<Decimal>,
  pub total_liabilities: Option<Decimal>,
  pub retained_earnings: Option<Decimal>,
  pub ebit: Option<Decimal>,
  pub interest_expense: Option<Decimal>,
  pub total_shareholder_equity: Option<Decimal>,
  pub inventory: Option<Decimal>,
  pub total_revenue: Option<Decimal>,
  pub total_debt: Option<Decimal>,
  pub net_income: Option<Decimal>,
  pub operating_cash_flow: Option<Decimal>,
}

/// Point-in-time market and consensus data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataSnapshot {
  pub current_price: Option<Decimal>,
  pub market_cap: Option<Decimal>,
  #[serde(rename = "revenueTTM")]
  pub revenue_ttm: Option<Decimal>,
  pub forward_pe_ratio: Option<Decimal>,
  pub target_price: Option<Decimal>,
  pub forward_eps_growth: Option<Decimal>,
  pub forward_revenue_growth: Option<Decimal>,
  pub analyst_ratings: Option<AnalystRatings>,
}

/// Analyst recommendation counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystRatings {
  pub strong_buy: u32,
  pub buy: u32,
  pub hold: u32,
  pub sell: u32,
  pub strong_sell: u32,
}

impl AnalystRatings {
  pub fn new(strong_buy: u32, buy: u32, hold: u32, sell: u32, strong_sell: u32) -> Self {
    Self { strong_buy, buy, hold, sell, strong_sell }
  }

  /// Number of analysts covering the stock, capped at `u32::MAX`
  pub fn total(&self) -> u32 {
    [self.buy, self.hold, self.sell, self.strong_sell]
      .into_iter()
      .fold(self.strong_buy, u32::saturating_add)
  }
}
