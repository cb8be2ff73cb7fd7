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

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use screener_core::Sector;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::status::{monthly_status, ReportIntegrityStatus};
use super::{ErrorCollector, MetricReport, ReportError};
use crate::calculators::{forward_peg, price_sales_ratio, upside_potential};
use crate::metric::{ForwardPeg, MetricType, PriceSalesRatio, UpsidePotential};
use crate::snapshot::{AnalystRatings, MarketDataSnapshot};

/// Valuation metrics and analyst consensus for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
  id: Uuid,
  period: NaiveDate,
  price_sales_ratio: Option<PriceSalesRatio>,
  forward_peg: Option<ForwardPeg>,
  upside_potential: Option<UpsidePotential>,
  forward_eps_growth: Option<Decimal>,
  forward_revenue_growth: Option<Decimal>,
  analyst_ratings: Option<AnalystRatings>,
  target_price: Option<Decimal>,
  errors: Vec<ReportError>,
  integrity_status: ReportIntegrityStatus,
}

impl MonthlyReport {
  pub fn id(&self) -> Uuid {
    self.id
  }

  pub fn price_sales_ratio(&self) -> Option<PriceSalesRatio> {
    self.price_sales_ratio
  }

  pub fn forward_peg(&self) -> Option<ForwardPeg> {
    self.forward_peg
  }

  pub fn upside_potential(&self) -> Option<UpsidePotential> {
    self.upside_potential
  }

  pub fn forward_eps_growth(&self) -> Option<Decimal> {
    self.forward_eps_growth
  }

  pub fn forward_revenue_growth(&self) -> Option<Decimal> {
    self.forward_revenue_growth
  }

  pub fn analyst_ratings(&self) -> Option<AnalystRatings> {
    self.analyst_ratings
  }

  pub fn target_price(&self) -> Option<Decimal> {
    self.target_price
  }

  // Forward PEG needs both providers and does not count for either side.
  fn is_av_complete(&self) -> bool {
    self.price_sales_ratio.is_some() && self.upside_potential.is_some()
  }

  fn is_yh_complete(&self) -> bool {
    self.forward_eps_growth.is_some()
      && self.forward_revenue_growth.is_some()
      && self.analyst_ratings.is_some()
  }
}

impl MetricReport for MonthlyReport {
  type Snapshot = MarketDataSnapshot;

  fn new(period: NaiveDate) -> Self {
    Self {
      id: Uuid::new_v4(),
      period,
      price_sales_ratio: None,
      forward_peg: None,
      upside_potential: None,
      forward_eps_growth: None,
      forward_revenue_growth: None,
      analyst_ratings: None,
      target_price: None,
      errors: Vec::new(),
      integrity_status: ReportIntegrityStatus::MissingData,
    }
  }

  fn period(&self) -> NaiveDate {
    self.period
  }

  /// Sector has no bearing on market metrics
  fn update_metrics_at(
    &mut self,
    snapshot: &MarketDataSnapshot,
    _sector: Option<Sector>,
    occurred_at: DateTime<Utc>,
  ) {
    let mut collector = ErrorCollector::new(occurred_at);

    self.price_sales_ratio =
      collector.take(MetricType::PriceSalesRatio, price_sales_ratio(snapshot));
    self.forward_peg = collector.take(MetricType::ForwardPeg, forward_peg(snapshot));
    self.upside_potential = collector.take(MetricType::UpsidePotential, upside_potential(snapshot));

    self.forward_eps_growth = snapshot.forward_eps_growth;
    self.forward_revenue_growth = snapshot.forward_revenue_growth;
    self.analyst_ratings = snapshot.analyst_ratings;
    self.target_price = snapshot.target_price;

    self.errors = collector.into_errors();
    self.integrity_status = monthly_status(self.is_av_complete(), self.is_yh_complete());

    debug!(
      "monthly report {} updated: {} with {} error(s)",
      self.period,
      self.integrity_status,
      self.errors.len()
    );
  }

  fn errors(&self) -> &[ReportError] {
    &self.errors
  }

  fn integrity_status(&self) -> ReportIntegrityStatus {
    self.integrity_status
  }
}
