//! Ordering of periodic statement reports by fiscal date

use chrono::NaiveDate;
use std::cmp::Reverse;

/// A report that belongs to a fiscal period
pub trait FiscalPeriod {
  /// End date of the fiscal period, `None` when the provider sent garbage
  fn fiscal_date(&self) -> Option<NaiveDate>;
}

/// Parse the `YYYY-MM-DD` dates both providers use
pub fn parse_fiscal_date(raw: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Up to `count` reports, newest first.
///
/// Payload order is not trusted. Reports with an unparseable date sort after
/// every dated report and otherwise keep their payload order.
pub fn most_recent<R: FiscalPeriod>(reports: &[R], count: usize) -> Vec<&R> {
  let mut ordered: Vec<&R> = reports.iter().collect();
  ordered.sort_by_key(|r| match r.fiscal_date() {
    Some(date) => (0, Reverse(date)),
    None => (1, Reverse(NaiveDate::MIN)),
  });
  ordered.truncate(count);
  ordered
}

/// The newest report, if any
pub fn latest<R: FiscalPeriod>(reports: &[R]) -> Option<&R> {
  most_recent(reports, 1).into_iter().next()
}
