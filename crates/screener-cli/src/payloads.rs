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

//! Cached provider payloads for one ticker and their evaluation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use screener_core::Sector;
use screener_engine::{financial_snapshot, market_snapshot, MarketSources, Stock};
use screener_models::{
  BalanceSheet, CashFlow, CompanyOverview, GlobalQuote, IncomeStatement, QuoteSummaryResponse,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const BALANCE_SHEET_FILE: &str = "balance_sheet.json";
pub const INCOME_STATEMENT_FILE: &str = "income_statement.json";
pub const CASH_FLOW_FILE: &str = "cash_flow.json";
pub const OVERVIEW_FILE: &str = "overview.json";
pub const GLOBAL_QUOTE_FILE: &str = "global_quote.json";
pub const YAHOO_SUMMARY_FILE: &str = "yahoo_quote_summary.json";

/// Everything read from `<data_dir>/<TICKER>/`
#[derive(Debug)]
pub struct TickerPayloads {
  pub ticker: String,
  pub balance_sheet: BalanceSheet,
  pub income_statement: IncomeStatement,
  pub cash_flow: Option<CashFlow>,
  pub overview: CompanyOverview,
  pub quote: GlobalQuote,
  pub yahoo: Option<QuoteSummaryResponse>,
}

impl TickerPayloads {
  pub fn load(data_dir: &Path, ticker: &str) -> Result<Self> {
    let dir = ticker_dir(data_dir, ticker);
    debug!("Loading payloads from {}", dir.display());

    Ok(Self {
      ticker: ticker.to_string(),
      balance_sheet: read_json(&dir.join(BALANCE_SHEET_FILE))?,
      income_statement: read_json(&dir.join(INCOME_STATEMENT_FILE))?,
      cash_flow: read_optional_json(&dir.join(CASH_FLOW_FILE))?,
      overview: read_json(&dir.join(OVERVIEW_FILE))?,
      quote: read_json(&dir.join(GLOBAL_QUOTE_FILE))?,
      yahoo: read_optional_json(&dir.join(YAHOO_SUMMARY_FILE))?,
    })
  }

  /// Sector from the overview's `Sector` field
  pub fn overview_sector(&self) -> Option<Sector> {
    self.overview.sector.as_deref().and_then(Sector::from_str)
  }

  /// Reconcile both snapshots and record one quarterly and one monthly report.
  ///
  /// The quarterly report is keyed by the balance sheet's fiscal date when it
  /// has one, the monthly report by the first day of `as_of`'s month.
  pub fn evaluate(&self, sector: Option<Sector>, as_of: NaiveDate) -> Stock {
    let name = self.overview.name.clone().unwrap_or_else(|| self.ticker.clone());
    let mut stock = Stock::new(&self.ticker, name, sector);

    let financial =
      financial_snapshot(&self.balance_sheet, &self.income_statement, self.cash_flow.as_ref());
    let market = market_snapshot(MarketSources {
      overview: Some(&self.overview),
      quote: Some(&self.quote),
      income_statement: Some(&self.income_statement),
      yahoo: self.yahoo.as_ref().and_then(QuoteSummaryResponse::first),
    });

    let quarter = financial.fiscal_date_ending.unwrap_or(as_of);
    stock.record_quarterly(quarter, &financial);
    stock.record_monthly(month_start(as_of), &market);
    stock
  }
}

/// Sub-directories of `data_dir`, sorted, each naming a ticker
pub fn list_tickers(data_dir: &Path) -> Result<Vec<String>> {
  let entries = fs::read_dir(data_dir)
    .with_context(|| format!("Failed to read data directory {}", data_dir.display()))?;

  let mut tickers = Vec::new();
  for entry in entries {
    let entry = entry.with_context(|| format!("Failed to list {}", data_dir.display()))?;
    if entry.path().is_dir() {
      tickers.push(entry.file_name().to_string_lossy().into_owned());
    }
  }
  tickers.sort();
  Ok(tickers)
}

fn month_start(date: NaiveDate) -> NaiveDate {
  date.with_day(1).unwrap_or(date)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
  let raw =
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn read_optional_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
  if !path.exists() {
    warn!("Optional payload {} not found", path.display());
    return Ok(None);
  }
  read_json(path).map(Some)
}

/// Directory for one ticker under the data root
pub fn ticker_dir(data_dir: &Path, ticker: &str) -> PathBuf {
  data_dir.join(ticker)
}
