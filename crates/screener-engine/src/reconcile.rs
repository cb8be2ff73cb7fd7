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

//! Builds canonical snapshots from raw provider payloads.
//!
//! Each fallback rule is a small pure function so it can be tested on its
//! own. Nothing here fails: a value that cannot be derived stays absent and
//! the calculators report it.

use rust_decimal::Decimal;
use screener_core::TTM_QUARTERS;
use screener_models::alphavantage::number;
use screener_models::period::{latest, most_recent, FiscalPeriod};
use screener_models::{
  BalanceSheet, CashFlow, CompanyOverview, GlobalQuote, IncomeStatement, QuoteSummaryResult,
};
use tracing::trace;

use crate::snapshot::{AnalystRatings, FinancialDataSnapshot, MarketDataSnapshot};

/// Provider aggregate when present, else short plus long term debt.
///
/// An absent term counts as zero, so a company reporting neither term has no debt.
pub fn total_debt(
  aggregate: Option<Decimal>,
  short_term: Option<Decimal>,
  long_term: Option<Decimal>,
) -> Option<Decimal> {
  if aggregate.is_some() {
    return aggregate;
  }

  trace!("total debt derived from short and long term debt");
  short_term.unwrap_or(Decimal::ZERO).checked_add(long_term.unwrap_or(Decimal::ZERO))
}

/// Reported figure when present, else equity - (common stock + paid-in capital).
///
/// Absent paid-in capital counts as zero; absent equity or common stock leaves the value unknown.
pub fn retained_earnings(
  reported: Option<Decimal>,
  shareholder_equity: Option<Decimal>,
  common_stock: Option<Decimal>,
  additional_paid_in_capital: Option<Decimal>,
) -> Option<Decimal> {
  if reported.is_some() {
    return reported;
  }

  trace!("retained earnings derived from equity components");
  let contributed =
    common_stock?.checked_add(additional_paid_in_capital.unwrap_or(Decimal::ZERO))?;
  shareholder_equity?.checked_sub(contributed)
}

/// Reported figure when present, else net income + interest + income tax.
///
/// Absent interest or tax counts as zero; absent net income leaves the value unknown.
pub fn ebit(
  reported: Option<Decimal>,
  net_income: Option<Decimal>,
  interest_expense: Option<Decimal>,
  income_tax_expense: Option<Decimal>,
) -> Option<Decimal> {
  if reported.is_some() {
    return reported;
  }

  trace!("ebit derived from net income");
  net_income?
    .checked_add(interest_expense.unwrap_or(Decimal::ZERO))?
    .checked_add(income_tax_expense.unwrap_or(Decimal::ZERO))
}

/// Sum of the quarterly revenues given, skipping unknown quarters.
///
/// Unknown when no quarter reports revenue at all.
pub fn revenue_ttm<I>(quarterly_revenues: I) -> Option<Decimal>
where
  I: IntoIterator<Item = Option<Decimal>>,
{
  quarterly_revenues
    .into_iter()
    .flatten()
    .try_fold(None, |acc: Option<Decimal>, revenue| match acc {
      None => Some(Some(revenue)),
      Some(sum) => sum.checked_add(revenue).map(Some),
    })
    .flatten()
}

/// Report for the same fiscal period as `anchor`, else the newest one
fn matching_period<'a, A, R>(anchor: Option<&A>, reports: &'a [R]) -> Option<&'a R>
where
  A: FiscalPeriod,
  R: FiscalPeriod,
{
  let anchor_date = anchor.and_then(FiscalPeriod::fiscal_date);
  anchor_date
    .and_then(|date| reports.iter().find(|r| r.fiscal_date() == Some(date)))
    .or_else(|| latest(reports))
}

/// Financial snapshot for the most recent quarter on the balance sheet.
///
/// Income statement and cash flow figures come from the same fiscal period
/// when it is available, otherwise from their own most recent quarter.
pub fn financial_snapshot(
  balance_sheet: &BalanceSheet,
  income_statement: &IncomeStatement,
  cash_flow: Option<&CashFlow>,
) -> FinancialDataSnapshot {
  let balance = latest(&balance_sheet.quarterly_reports);
  let income = matching_period(balance, &income_statement.quarterly_reports);
  let cash = cash_flow.and_then(|cf| matching_period(balance, &cf.quarterly_reports));

  let mut snapshot = FinancialDataSnapshot {
    fiscal_date_ending: balance.and_then(FiscalPeriod::fiscal_date),
    ..Default::default()
  };

  if let Some(b) = balance {
    snapshot.total_current_assets = number(&b.total_current_assets);
    snapshot.total_current_liabilities = number(&b.total_current_liabilities);
    snapshot.total_assets = number(&b.total_assets);
    snapshot.total_liabilities = number(&b.total_liabilities);
    snapshot.total_shareholder_equity = number(&b.total_shareholder_equity);
    snapshot.inventory = number(&b.inventory);
    snapshot.total_debt = total_debt(
      number(&b.short_long_term_debt_total),
      number(&b.short_term_debt),
      number(&b.long_term_debt),
    );
    snapshot.retained_earnings = retained_earnings(
      number(&b.retained_earnings),
      snapshot.total_shareholder_equity,
      number(&b.common_stock),
      number(&b.additional_paid_in_capital),
    );
  }

  if let Some(i) = income {
    snapshot.total_revenue = number(&i.total_revenue);
    snapshot.interest_expense = number(&i.interest_expense);
    snapshot.net_income = number(&i.net_income);
    snapshot.ebit = ebit(
      number(&i.ebit),
      snapshot.net_income,
      snapshot.interest_expense,
      number(&i.income_tax_expense),
    );
  }

  snapshot.operating_cash_flow = cash.and_then(|c| number(&c.operating_cashflow));
  snapshot
}

/// Payloads feeding a market snapshot; any of them may be missing
#[derive(Debug, Clone, Copy, Default)]
pub struct MarketSources<'a> {
  pub overview: Option<&'a CompanyOverview>,
  pub quote: Option<&'a GlobalQuote>,
  pub income_statement: Option<&'a IncomeStatement>,
  pub yahoo: Option<&'a QuoteSummaryResult>,
}

/// Yahoo quotes growth as a fraction (0.125); snapshots carry percent (12.5)
pub fn growth_percent(fraction: Decimal) -> Option<Decimal> {
  fraction.checked_mul(Decimal::ONE_HUNDRED)
}

/// Point-in-time market snapshot.
///
/// Prices, market cap, forward P/E and trailing revenue come from Alpha
/// Vantage; growth estimates and analyst ratings from Yahoo. Growth is in
/// percent, so forward PEG reads as P/E per point of growth.
pub fn market_snapshot(sources: MarketSources<'_>) -> MarketDataSnapshot {
  let revenue_ttm_value = sources.income_statement.and_then(|statement| {
    revenue_ttm(
      most_recent(&statement.quarterly_reports, TTM_QUARTERS)
        .into_iter()
        .map(|r| number(&r.total_revenue)),
    )
  });

  MarketDataSnapshot {
    current_price: sources.quote.and_then(|q| number(&q.global_quote.price)),
    market_cap: sources.overview.and_then(|o| number(&o.market_capitalization)),
    revenue_ttm: revenue_ttm_value,
    forward_pe_ratio: sources.overview.and_then(|o| number(&o.forward_pe)),
    target_price: sources.overview.and_then(|o| number(&o.analyst_target_price)),
    forward_eps_growth: sources
      .yahoo
      .and_then(QuoteSummaryResult::forward_eps_growth)
      .and_then(growth_percent),
    forward_revenue_growth: sources
      .yahoo
      .and_then(QuoteSummaryResult::forward_revenue_growth)
      .and_then(growth_percent),
    analyst_ratings: sources.yahoo.and_then(|y| y.current_recommendations()).map(|r| {
      AnalystRatings::new(r.strong_buy, r.buy, r.hold, r.sell, r.strong_sell)
    }),
  }
}
