pub mod batch;
pub mod evaluate;

use screener_core::{Config, Sector};

use crate::payloads::TickerPayloads;

/// Command-line sector, then the overview's sector, then the configured default
pub(crate) fn resolve_sector(
  flag: Option<Sector>,
  payloads: &TickerPayloads,
  config: &Config,
) -> Option<Sector> {
  flag.or_else(|| payloads.overview_sector()).or(config.default_sector)
}

/// clap value parser for `--sector`
pub(crate) fn parse_sector(raw: &str) -> Result<Sector, String> {
  Sector::from_str(raw).ok_or_else(|| format!("'{}' does not name a sector", raw))
}
