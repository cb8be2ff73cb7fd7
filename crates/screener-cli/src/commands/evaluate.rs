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

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Args;
use screener_core::{Config, Sector};
use screener_engine::{MetricReport, Stock};
use tracing::info;

use super::{parse_sector, resolve_sector};
use crate::payloads::TickerPayloads;

#[derive(Args, Clone, Debug)]
pub struct EvaluateArgs {
  /// Ticker whose cached payloads to evaluate
  ticker: String,

  /// Sector override (defaults to the overview's sector)
  #[arg(short, long, value_parser = parse_sector)]
  sector: Option<Sector>,

  /// Root directory of cached payloads
  #[arg(short, long)]
  data_dir: Option<PathBuf>,

  /// Evaluation date, YYYY-MM-DD (defaults to today)
  #[arg(short, long)]
  period: Option<NaiveDate>,
}

pub fn execute(args: EvaluateArgs, config: Config) -> Result<()> {
  let stock = evaluate(&args, &config)?;
  let json = serde_json::to_string_pretty(&stock).context("Failed to serialize report")?;
  println!("{}", json);
  Ok(())
}

fn evaluate(args: &EvaluateArgs, config: &Config) -> Result<Stock> {
  let data_dir = args.data_dir.as_ref().unwrap_or(&config.data_dir);
  let ticker = args.ticker.to_uppercase();

  let payloads = TickerPayloads::load(data_dir, &ticker)
    .with_context(|| format!("Cannot evaluate {}", ticker))?;
  let sector = resolve_sector(args.sector, &payloads, config);
  let as_of = args.period.unwrap_or_else(|| Utc::now().date_naive());

  let stock = payloads.evaluate(sector, as_of);

  if let Some(report) = stock.latest_quarterly() {
    info!("{} quarterly {}: {}", ticker, report.period(), report.integrity_status());
  }
  if let Some(report) = stock.latest_monthly() {
    info!("{} monthly {}: {}", ticker, report.period(), report.integrity_status());
  }

  Ok(stock)
}
