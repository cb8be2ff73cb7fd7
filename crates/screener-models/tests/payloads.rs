use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use screener_models::alphavantage::number;
use screener_models::{
  latest, most_recent, BalanceSheet, CashFlow, CompanyOverview, GlobalQuote, IncomeStatement,
  QuoteSummaryResponse,
};

const BALANCE_SHEET: &str = include_str!("fixtures/ACME/balance_sheet.json");
const INCOME_STATEMENT: &str = include_str!("fixtures/ACME/income_statement.json");
const CASH_FLOW: &str = include_str!("fixtures/ACME/cash_flow.json");
const OVERVIEW: &str = include_str!("fixtures/ACME/overview.json");
const GLOBAL_QUOTE: &str = include_str!("fixtures/ACME/global_quote.json");
const YAHOO_SUMMARY: &str = include_str!("fixtures/ACME/yahoo_quote_summary.json");

#[test]
fn test_balance_sheet_latest_quarter() {
  let sheet: BalanceSheet = serde_json::from_str(BALANCE_SHEET).unwrap();
  assert_eq!(sheet.quarterly_reports.len(), 2);

  let report = latest(&sheet.quarterly_reports).unwrap();
  assert_eq!(report.fiscal_date_ending, "2024-06-30");
  assert_eq!(number(&report.total_current_assets), Some(dec!(500000)));
  assert_eq!(number(&report.inventory), None);
  assert_eq!(number(&report.retained_earnings), None);
  assert_eq!(number(&report.common_stock), Some(dec!(450000)));
}

#[test]
fn test_income_statement_recent_quarters() {
  let statement: IncomeStatement = serde_json::from_str(INCOME_STATEMENT).unwrap();
  let dates: Vec<&str> = most_recent(&statement.quarterly_reports, 4)
    .iter()
    .map(|r| r.fiscal_date_ending.as_str())
    .collect();

  assert_eq!(dates, vec!["2024-06-30", "2024-03-31", "2023-12-31", "2023-09-30"]);
}

#[test]
fn test_cash_flow_and_quote() {
  let cash_flow: CashFlow = serde_json::from_str(CASH_FLOW).unwrap();
  let report = latest(&cash_flow.quarterly_reports).unwrap();
  assert_eq!(number(&report.operating_cashflow), Some(dec!(85000)));

  let quote: GlobalQuote = serde_json::from_str(GLOBAL_QUOTE).unwrap();
  assert_eq!(number(&quote.global_quote.price), Some(dec!(120)));
}

#[test]
fn test_overview_fields() {
  let overview: CompanyOverview = serde_json::from_str(OVERVIEW).unwrap();
  assert_eq!(overview.name.as_deref(), Some("Acme Corporation"));
  assert_eq!(number(&overview.market_capitalization), Some(dec!(720000000)));
  assert_eq!(number(&overview.peg_ratio), None);
}

#[test]
fn test_yahoo_quote_summary() {
  let response: QuoteSummaryResponse = serde_json::from_str(YAHOO_SUMMARY).unwrap();
  let result = response.first().unwrap();

  assert_eq!(result.forward_eps_growth(), Some(dec!(0.125)));
  assert_eq!(result.forward_revenue_growth(), Some(dec!(0.08)));

  let ratings = result.current_recommendations().unwrap();
  assert_eq!((ratings.strong_buy, ratings.buy, ratings.hold, ratings.sell), (12, 20, 6, 1));
}
