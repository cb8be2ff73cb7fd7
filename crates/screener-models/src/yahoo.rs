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

//! Yahoo Finance quoteSummary payloads
//!
//! Only the `earningsTrend` and `recommendationTrend` modules are modelled;
//! prices come from Alpha Vantage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Trend period holding next fiscal year estimates
pub const NEXT_YEAR_PERIOD: &str = "+1y";

/// Recommendation trend period for the current month
pub const CURRENT_MONTH_PERIOD: &str = "0m";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummaryResponse {
  #[serde(rename = "quoteSummary")]
  pub quote_summary: QuoteSummaryData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummaryData {
  #[serde(default)]
  pub result: Vec<QuoteSummaryResult>,
  #[serde(default)]
  pub error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummaryResult {
  #[serde(rename = "earningsTrend", default)]
  pub earnings_trend: Option<EarningsTrend>,
  #[serde(rename = "recommendationTrend", default)]
  pub recommendation_trend: Option<RecommendationTrend>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsTrend {
  #[serde(default)]
  pub trend: Vec<EarningsTrendEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsTrendEntry {
  pub period: String,
  /// Expected EPS growth for the period
  #[serde(default)]
  pub growth: Option<RawValue>,
  #[serde(rename = "revenueEstimate", default)]
  pub revenue_estimate: Option<RevenueEstimate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueEstimate {
  #[serde(default)]
  pub growth: Option<RawValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationTrend {
  #[serde(default)]
  pub trend: Vec<RecommendationTrendEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationTrendEntry {
  pub period: String,
  #[serde(default)]
  pub strong_buy: u32,
  #[serde(default)]
  pub buy: u32,
  #[serde(default)]
  pub hold: u32,
  #[serde(default)]
  pub sell: u32,
  #[serde(default)]
  pub strong_sell: u32,
}

/// Yahoo wraps numbers as `{"raw": 0.125, "fmt": "12.50%"}`; an empty object means unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawValue {
  #[serde(default)]
  pub raw: Option<serde_json::Number>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fmt: Option<String>,
}

impl RawValue {
  /// Exact decimal of the JSON number, without a detour through `f64`
  pub fn decimal(&self) -> Option<Decimal> {
    self.raw.as_ref().and_then(|n| screener_core::decimal::parse_decimal(&n.to_string()))
  }
}

fn decimal_of(value: &Option<RawValue>) -> Option<Decimal> {
  value.as_ref().and_then(RawValue::decimal)
}

impl QuoteSummaryResponse {
  /// The first result module set; Yahoo only ever returns one per symbol
  pub fn first(&self) -> Option<&QuoteSummaryResult> {
    self.quote_summary.result.first()
  }
}

impl QuoteSummaryResult {
  fn next_year_trend(&self) -> Option<&EarningsTrendEntry> {
    self.earnings_trend.as_ref()?.trend.iter().find(|t| t.period == NEXT_YEAR_PERIOD)
  }

  /// Analysts' EPS growth estimate for the next fiscal year
  pub fn forward_eps_growth(&self) -> Option<Decimal> {
    self.next_year_trend().and_then(|t| decimal_of(&t.growth))
  }

  /// Analysts' revenue growth estimate for the next fiscal year
  pub fn forward_revenue_growth(&self) -> Option<Decimal> {
    self.next_year_trend()?.revenue_estimate.as_ref().and_then(|r| decimal_of(&r.growth))
  }

  /// Current month's recommendation counts
  pub fn current_recommendations(&self) -> Option<&RecommendationTrendEntry> {
    self.recommendation_trend.as_ref()?.trend.iter().find(|t| t.period == CURRENT_MONTH_PERIOD)
  }
}
