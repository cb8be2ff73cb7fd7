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

//! Configuration management for the screener

use crate::error::{Error, Result};
use crate::types::Sector;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Main configuration struct for the screener
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Root directory holding one sub-directory of cached payloads per ticker
  pub data_dir: PathBuf,

  /// Worker threads for batch evaluation (0 lets rayon decide)
  pub threads: usize,

  /// Sector used when neither the command line nor the overview supplies one
  pub default_sector: Option<Sector>,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Build a configuration from an arbitrary key lookup
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let data_dir = PathBuf::from(
      lookup("SCREENER_DATA_DIR").unwrap_or_else(|| crate::DEFAULT_DATA_DIR.to_string()),
    );

    let threads = lookup("SCREENER_THREADS")
      .unwrap_or_else(|| "0".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid SCREENER_THREADS".to_string()))?;

    let default_sector = match lookup("SCREENER_DEFAULT_SECTOR") {
      Some(raw) if !raw.trim().is_empty() => Some(
        Sector::from_str(&raw)
          .ok_or_else(|| Error::InvalidSector(raw.clone()))?,
      ),
      _ => None,
    };

    Ok(Config { data_dir, threads, default_sector })
  }
}

impl Default for Config {
  fn default() -> Self {
    Config { data_dir: PathBuf::from(crate::DEFAULT_DATA_DIR), threads: 0, default_sector: None }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn test_config_defaults() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.data_dir, PathBuf::from("./data"));
    assert_eq!(config.threads, 0);
    assert!(config.default_sector.is_none());
  }

  #[test]
  fn test_config_overrides() {
    let config = Config::from_lookup(lookup_from(&[
      ("SCREENER_DATA_DIR", "/var/cache/screener"),
      ("SCREENER_THREADS", "8"),
      ("SCREENER_DEFAULT_SECTOR", "technology"),
    ]))
    .unwrap();
    assert_eq!(config.data_dir, PathBuf::from("/var/cache/screener"));
    assert_eq!(config.threads, 8);
    assert_eq!(config.default_sector, Some(Sector::Technology));
  }

  #[test]
  fn test_config_invalid_threads() {
    let err = Config::from_lookup(lookup_from(&[("SCREENER_THREADS", "many")])).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
  }

  #[test]
  fn test_config_unclassifiable_sector() {
    let err = Config::from_lookup(lookup_from(&[("SCREENER_DEFAULT_SECTOR", "none")])).unwrap_err();
    assert_eq!(err, Error::InvalidSector("none".to_string()));

    let config = Config::from_lookup(lookup_from(&[("SCREENER_DEFAULT_SECTOR", "  ")])).unwrap();
    assert!(config.default_sector.is_none());
  }

  #[test]
  fn test_config_from_env() {
    env::set_var("SCREENER_THREADS", "2");
    let config = Config::from_env().unwrap();
    assert_eq!(config.threads, 2);
  }
}
