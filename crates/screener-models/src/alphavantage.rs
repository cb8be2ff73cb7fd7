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

//! Alpha Vantage fundamental payloads
//!
//! Alpha Vantage encodes every number as a string and reports unknown values
//! as `"None"`. Fields are kept as raw strings here; [`number`] turns them into
//! decimals at the point of use.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::FiscalPeriod;

/// Parse an optional Alpha Vantage numeric field
pub fn number(raw: &Option<String>) -> Option<Decimal> {
  raw.as_deref().and_then(screener_core::decimal::parse_decimal)
}

/// Company overview, trimmed to the fields the screener consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyOverview {
  #[serde(rename = "Symbol")]
  pub symbol: String,

  #[serde(rename = "Name", default)]
  pub name: Option<String>,

  #[serde(rename = "Sector", default)]
  pub sector: Option<String>,

  /// Industry classification
  #[serde(rename = "Industry", default)]
  pub industry: Option<String>,

  /// Latest quarter end date
  #[serde(rename = "LatestQuarter", default)]
  pub latest_quarter: Option<String>,

  #[serde(rename = "MarketCapitalization", default)]
  pub market_capitalization: Option<String>,

  #[serde(rename = "RevenueTTM", default)]
  pub revenue_ttm: Option<String>,

  #[serde(rename = "AnalystTargetPrice", default)]
  pub analyst_target_price: Option<String>,

  #[serde(rename = "ForwardPE", default)]
  pub forward_pe: Option<String>,

  #[serde(rename = "PEGRatio", default)]
  pub peg_ratio: Option<String>,
}

/// GLOBAL_QUOTE response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalQuote {
  #[serde(rename = "Global Quote")]
  pub global_quote: QuoteData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteData {
  #[serde(rename = "01. symbol", default)]
  pub symbol: Option<String>,

  /// Current price
  #[serde(rename = "05. price", default)]
  pub price: Option<String>,

  #[serde(rename = "07. latest trading day", default)]
  pub latest_trading_day: Option<String>,

  #[serde(rename = "08. previous close", default)]
  pub previous_close: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
  pub symbol: String,

  #[serde(rename = "annualReports", default)]
  pub annual_reports: Vec<BalanceSheetReport>,

  #[serde(rename = "quarterlyReports", default)]
  pub quarterly_reports: Vec<BalanceSheetReport>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetReport {
  #[serde(rename = "fiscalDateEnding")]
  pub fiscal_date_ending: String,

  #[serde(rename = "reportedCurrency", default)]
  pub reported_currency: Option<String>,

  #[serde(rename = "totalAssets", default)]
  pub total_assets: Option<String>,

  #[serde(rename = "totalCurrentAssets", default)]
  pub total_current_assets: Option<String>,

  #[serde(rename = "inventory", default)]
  pub inventory: Option<String>,

  #[serde(rename = "totalLiabilities", default)]
  pub total_liabilities: Option<String>,

  #[serde(rename = "totalCurrentLiabilities", default)]
  pub total_current_liabilities: Option<String>,

  #[serde(rename = "shortTermDebt", default)]
  pub short_term_debt: Option<String>,

  #[serde(rename = "longTermDebt", default)]
  pub long_term_debt: Option<String>,

  /// Provider-side sum of short and long term debt
  #[serde(rename = "shortLongTermDebtTotal", default)]
  pub short_long_term_debt_total: Option<String>,

  #[serde(rename = "totalShareholderEquity", default)]
  pub total_shareholder_equity: Option<String>,

  #[serde(rename = "retainedEarnings", default)]
  pub retained_earnings: Option<String>,

  #[serde(rename = "commonStock", default)]
  pub common_stock: Option<String>,

  /// Not part of every feed; absent is read as zero by the retained earnings fallback
  #[serde(rename = "additionalPaidInCapital", default)]
  pub additional_paid_in_capital: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatement {
  /// Stock symbol
  pub symbol: String,

  /// Annual reports
  #[serde(rename = "annualReports", default)]
  pub annual_reports: Vec<IncomeStatementReport>,

  /// Quarterly reports
  #[serde(rename = "quarterlyReports", default)]
  pub quarterly_reports: Vec<IncomeStatementReport>,
}

/// Individual income statement report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatementReport {
  /// Fiscal date ending
  #[serde(rename = "fiscalDateEnding")]
  pub fiscal_date_ending: String,

  #[serde(rename = "reportedCurrency", default)]
  pub reported_currency: Option<String>,

  #[serde(rename = "totalRevenue", default)]
  pub total_revenue: Option<String>,

  #[serde(rename = "interestExpense", default)]
  pub interest_expense: Option<String>,

  #[serde(rename = "incomeTaxExpense", default)]
  pub income_tax_expense: Option<String>,

  #[serde(rename = "ebit", default)]
  pub ebit: Option<String>,

  #[serde(rename = "netIncome", default)]
  pub net_income: Option<String>,
}

/// Cash flow statement data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
  pub symbol: String,

  #[serde(rename = "annualReports", default)]
  pub annual_reports: Vec<CashFlowReport>,

  #[serde(rename = "quarterlyReports", default)]
  pub quarterly_reports: Vec<CashFlowReport>,
}

/// Individual cash flow report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowReport {
  #[serde(rename = "fiscalDateEnding")]
  pub fiscal_date_ending: String,

  #[serde(rename = "operatingCashflow", default)]
  pub operating_cashflow: Option<String>,

  #[serde(rename = "netIncome", default)]
  pub net_income: Option<String>,
}

impl FiscalPeriod for BalanceSheetReport {
  fn fiscal_date(&self) -> Option<NaiveDate> {
    crate::period::parse_fiscal_date(&self.fiscal_date_ending)
  }
}

impl FiscalPeriod for IncomeStatementReport {
  fn fiscal_date(&self) -> Option<NaiveDate> {
    crate::period::parse_fiscal_date(&self.fiscal_date_ending)
  }
}

impl FiscalPeriod for CashFlowReport {
  fn fiscal_date(&self) -> Option<NaiveDate> {
    crate::period::parse_fiscal_date(&self.fiscal_date_ending)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn test_number_parses_present_values() {
    assert_eq!(number(&Some("391035000000".to_string())), Some(dec!(391035000000)));
    assert_eq!(number(&Some("-1250.75".to_string())), Some(dec!(-1250.75)));
  }

  #[test]
  fn test_number_treats_none_marker_as_absent() {
    assert_eq!(number(&Some("None".to_string())), None);
    assert_eq!(number(&None), None);
  }

  #[test]
  fn test_balance_sheet_report_missing_keys_default_to_none() {
    let json = r#"{
            "fiscalDateEnding": "2024-06-30",
            "totalAssets": "1000000",
            "inventory": "None"
        }"#;

    let report: BalanceSheetReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.fiscal_date_ending, "2024-06-30");
    assert_eq!(number(&report.total_assets), Some(dec!(1000000)));
    assert_eq!(number(&report.inventory), None);
    assert!(report.additional_paid_in_capital.is_none());
    assert_eq!(report.fiscal_date(), NaiveDate::from_ymd_opt(2024, 6, 30));
  }

  #[test]
  fn test_company_overview_deserialization() {
    let json = r#"{
            "Symbol": "AAPL",
            "AssetType": "Common Stock",
            "Name": "Apple Inc",
            "Sector": "TECHNOLOGY",
            "Industry": "ELECTRONIC COMPUTERS",
            "LatestQuarter": "2024-06-30",
            "MarketCapitalization": "3000000000000",
            "RevenueTTM": "385603000000",
            "AnalystTargetPrice": "195.5",
            "ForwardPE": "24.2",
            "PEGRatio": "2.1"
        }"#;

    let overview: CompanyOverview = serde_json::from_str(json).unwrap();
    assert_eq!(overview.symbol, "AAPL");
    assert_eq!(overview.sector.as_deref(), Some("TECHNOLOGY"));
    assert_eq!(number(&overview.forward_pe), Some(dec!(24.2)));
    assert_eq!(number(&overview.analyst_target_price), Some(dec!(195.5)));
  }

  #[test]
  fn test_global_quote_deserialization() {
    let json = r#"{
            "Global Quote": {
                "01. symbol": "IBM",
                "02. open": "170.0000",
                "05. price": "172.5000",
                "07. latest trading day": "2024-07-12",
                "08. previous close": "171.0000"
            }
        }"#;

    let quote: GlobalQuote = serde_json::from_str(json).unwrap();
    assert_eq!(number(&quote.global_quote.price), Some(dec!(172.5)));
  }
}
