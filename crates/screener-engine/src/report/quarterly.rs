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
use screener_core::Sector;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::status::{quarterly_status, ReportIntegrityStatus};
use super::{ErrorCollector, MetricReport, ReportError};
use crate::calculators::{interest_coverage_ratio, quick_ratio};
use crate::metric::{InterestCoverageRatio, MetricType, QuickRatio, SolvencyScore};
use crate::snapshot::FinancialDataSnapshot;
use crate::solvency::solvency_score;

/// Balance sheet health metrics for one fiscal quarter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterlyReport {
  id: Uuid,
  period: NaiveDate,
  quick_ratio: Option<QuickRatio>,
  interest_coverage_ratio: Option<InterestCoverageRatio>,
  solvency_score: Option<SolvencyScore>,
  errors: Vec<ReportError>,
  integrity_status: ReportIntegrityStatus,
}

impl QuarterlyReport {
  pub fn id(&self) -> Uuid {
    self.id
  }

  pub fn quick_ratio(&self) -> Option<QuickRatio> {
    self.quick_ratio
  }

  pub fn interest_coverage_ratio(&self) -> Option<InterestCoverageRatio> {
    self.interest_coverage_ratio
  }

  pub fn solvency_score(&self) -> Option<SolvencyScore> {
    self.solvency_score
  }
}

impl MetricReport for QuarterlyReport {
  type Snapshot = FinancialDataSnapshot;

  fn new(period: NaiveDate) -> Self {
    Self {
      id: Uuid::new_v4(),
      period,
      quick_ratio: None,
      interest_coverage_ratio: None,
      solvency_score: None,
      errors: Vec::new(),
      integrity_status: ReportIntegrityStatus::MissingData,
    }
  }

  fn period(&self) -> NaiveDate {
    self.period
  }

  fn update_metrics_at(
    &mut self,
    snapshot: &FinancialDataSnapshot,
    sector: Option<Sector>,
    occurred_at: DateTime<Utc>,
  ) {
    let mut collector = ErrorCollector::new(occurred_at);

    self.quick_ratio = collector.take(MetricType::QuickRatio, quick_ratio(snapshot));
    self.interest_coverage_ratio =
      collector.take(MetricType::InterestCoverageRatio, interest_coverage_ratio(snapshot));
    self.solvency_score =
      collector.take(MetricType::SolvencyScore, solvency_score(snapshot, sector));

    self.errors = collector.into_errors();
    self.integrity_status = quarterly_status(&self.errors);

    debug!(
      "quarterly report {} updated: {} with {} error(s)",
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
