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

use chrono::NaiveDate;
use screener_core::Sector;
use serde::{Deserialize, Serialize};

use crate::report::{MetricReport, MonthlyReport, QuarterlyReport};
use crate::snapshot::{FinancialDataSnapshot, MarketDataSnapshot};

/// A listed company and the reports computed for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
  pub ticker: String,
  pub name: String,
  pub sector: Option<Sector>,
  monthly_reports: Vec<MonthlyReport>,
  quarterly_reports: Vec<QuarterlyReport>,
}

impl Stock {
  pub fn new(ticker: impl Into<String>, name: impl Into<String>, sector: Option<Sector>) -> Self {
    Self {
      ticker: ticker.into(),
      name: name.into(),
      sector,
      monthly_reports: Vec::new(),
      quarterly_reports: Vec::new(),
    }
  }

  /// Recompute the monthly report for `period`, creating it on first use
  pub fn record_monthly(
    &mut self,
    period: NaiveDate,
    snapshot: &MarketDataSnapshot,
  ) -> &MonthlyReport {
    let sector = self.sector;
    let report = find_or_create(&mut self.monthly_reports, period);
    report.update_metrics(snapshot, sector);
    report
  }

  /// Recompute the quarterly report for `period`, creating it on first use
  pub fn record_quarterly(
    &mut self,
    period: NaiveDate,
    snapshot: &FinancialDataSnapshot,
  ) -> &QuarterlyReport {
    let sector = self.sector;
    let report = find_or_create(&mut self.quarterly_reports, period);
    report.update_metrics(snapshot, sector);
    report
  }

  pub fn monthly_reports(&self) -> &[MonthlyReport] {
    &self.monthly_reports
  }

  pub fn quarterly_reports(&self) -> &[QuarterlyReport] {
    &self.quarterly_reports
  }

  pub fn latest_monthly(&self) -> Option<&MonthlyReport> {
    self.monthly_reports.iter().max_by_key(|r| r.period())
  }

  pub fn latest_quarterly(&self) -> Option<&QuarterlyReport> {
    self.quarterly_reports.iter().max_by_key(|r| r.period())
  }
}

fn find_or_create<R: MetricReport>(reports: &mut Vec<R>, period: NaiveDate) -> &mut R {
  let index = match reports.iter().position(|r| r.period() == period) {
    Some(index) => index,
    None => {
      reports.push(R::new(period));
      reports.len() - 1
    }
  };
  &mut reports[index]
}
