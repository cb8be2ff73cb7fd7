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

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Args;
use rayon::prelude::*;
use screener_core::Config;
use screener_engine::{MetricReport, Stock};
use tracing::{info, warn};

use super::resolve_sector;
use crate::payloads::{list_tickers, TickerPayloads};

#[derive(Args, Clone, Debug)]
pub struct BatchArgs {
  /// Root directory of cached payloads, one sub-directory per ticker
  #[arg(short, long)]
  data_dir: Option<PathBuf>,

  /// Worker threads (0 lets rayon decide)
  #[arg(short, long)]
  threads: Option<usize>,
}

pub fn execute(args: BatchArgs, config: Config) -> Result<()> {
  let data_dir = args.data_dir.clone().unwrap_or_else(|| config.data_dir.clone());
  let threads = args.threads.unwrap_or(config.threads);

  let tickers = list_tickers(&data_dir)?;
  if tickers.is_empty() {
    info!("No tickers found in {}", data_dir.display());
    return Ok(());
  }
  info!("Evaluating {} tickers from {}", tickers.len(), data_dir.display());

  let pool = rayon::ThreadPoolBuilder::new()
    .num_threads(threads)
    .build()
    .context("Failed to build worker pool")?;
  let as_of = Utc::now().date_naive();
  let lines = pool.install(|| evaluate_all(&data_dir, &tickers, &config, as_of));

  for line in lines {
    println!("{}", line);
  }
  Ok(())
}

/// One summary line per ticker, in ticker order
fn evaluate_all(
  data_dir: &Path,
  tickers: &[String],
  config: &Config,
  as_of: NaiveDate,
) -> Vec<String> {
  tickers
    .par_iter()
    .map(|ticker| match evaluate_one(data_dir, ticker, config, as_of) {
      Ok(stock) => summary(&stock),
      Err(e) => {
        warn!("Skipping {}: {:#}", ticker, e);
        format!("{:<8} error: {:#}", ticker, e)
      }
    })
    .collect()
}

fn evaluate_one(data_dir: &Path, ticker: &str, config: &Config, as_of: NaiveDate) -> Result<Stock> {
  let payloads = TickerPayloads::load(data_dir, ticker)?;
  let sector = resolve_sector(None, &payloads, config);
  Ok(payloads.evaluate(sector, as_of))
}

fn summary(stock: &Stock) -> String {
  let quarterly = stock.latest_quarterly();
  let monthly = stock.latest_monthly();

  let status = |s: Option<String>| s.unwrap_or_else(|| "-".to_string());
  let errors = quarterly.map_or(0, |r| r.errors().len()) + monthly.map_or(0, |r| r.errors().len());

  format!(
    "{:<8} quarterly={:<20} monthly={:<20} errors={}",
    stock.ticker,
    status(quarterly.map(|r| r.integrity_status().to_string())),
    status(monthly.map(|r| r.integrity_status().to_string())),
    errors
  )
}
