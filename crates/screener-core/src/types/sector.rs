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

//! Sector classification and the solvency score family each sector uses.

use serde::{Deserialize, Serialize};

/// Market sector classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sector {
  Energy,
  Mining,
  Utilities,
  Technology,
  Healthcare,
  ConsumerDiscretionary,
  RealEstate,
  Finance,
  Other,
}

/// Formula family of the Altman-style solvency score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreFamily {
  /// Five factor formula, includes asset turnover
  Manufacturing,
  /// Four factor Z'' formula without the revenue term
  NonManufacturing,
  /// Score is not meaningful for the sector
  NotApplicable,
}

impl std::fmt::Display for Sector {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Sector::Energy => write!(f, "ENERGY"),
      Sector::Mining => write!(f, "MINING"),
      Sector::Utilities => write!(f, "UTILITIES"),
      Sector::Technology => write!(f, "TECHNOLOGY"),
      Sector::Healthcare => write!(f, "HEALTHCARE"),
      Sector::ConsumerDiscretionary => write!(f, "CONSUMER_DISCRETIONARY"),
      Sector::RealEstate => write!(f, "REAL_ESTATE"),
      Sector::Finance => write!(f, "FINANCE"),
      Sector::Other => write!(f, "OTHER"),
    }
  }
}

impl Sector {
  /// Parse sector from string.
  ///
  /// Provider placeholders for "no value" (`None`, `-`, blank) yield `None`;
  /// any other unrecognised name classifies as [`Sector::Other`].
  pub fn from_str(s: &str) -> Option<Self> {
    match s.to_uppercase().replace([' ', '-', '_', '&'], "").as_str() {
      "" | "NONE" | "NULL" | "NA" => None,
      "ENERGY" | "ENERGYTRANSPORTATION" | "OIL" | "GAS" | "OILGAS" | "PETROLEUM" => {
        Some(Sector::Energy)
      }
      // AV files industrial manufacturers under MANUFACTURING
      "MINING" | "MATERIALS" | "BASICMATERIALS" | "METALSMINING" | "MANUFACTURING" => {
        Some(Sector::Mining)
      }
      "UTILITIES" | "UTILITY" | "POWER" | "ELECTRIC" => Some(Sector::Utilities),
      "TECHNOLOGY" | "TECH" | "IT" | "INFORMATIONTECHNOLOGY" => Some(Sector::Technology),
      "HEALTHCARE" | "HEALTH" | "MEDICAL" | "LIFESCIENCES" | "PHARMA" => Some(Sector::Healthcare),
      "CONSUMERDISCRETIONARY" | "CONSUMERCYCLICAL" | "TRADESERVICES" | "RETAIL" => {
        Some(Sector::ConsumerDiscretionary)
      }
      "REALESTATE" | "REALESTATECONSTRUCTION" | "PROPERTY" | "REIT" => Some(Sector::RealEstate),
      "FINANCE" | "FINANCIAL" | "FINANCIALSERVICES" | "FINANCIALS" | "BANKING" => {
        Some(Sector::Finance)
      }
      _ => Some(Sector::Other),
    }
  }

  /// Which solvency score formula applies to this sector
  pub fn score_family(&self) -> ScoreFamily {
    match self {
      Sector::Energy | Sector::Mining | Sector::Utilities => ScoreFamily::Manufacturing,
      Sector::Technology
      | Sector::Healthcare
      | Sector::ConsumerDiscretionary
      | Sector::RealEstate => ScoreFamily::NonManufacturing,
      Sector::Finance | Sector::Other => ScoreFamily::NotApplicable,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sector_parsing() {
    assert_eq!(Sector::from_str("Technology"), Some(Sector::Technology));
    assert_eq!(Sector::from_str("TECHNOLOGY"), Some(Sector::Technology));
    assert_eq!(Sector::from_str("Information Technology"), Some(Sector::Technology));
    assert_eq!(Sector::from_str("consumer_discretionary"), Some(Sector::ConsumerDiscretionary));
    assert_eq!(Sector::from_str("Consumer Cyclical"), Some(Sector::ConsumerDiscretionary));
    assert_eq!(Sector::from_str("Real Estate"), Some(Sector::RealEstate));
    assert_eq!(Sector::from_str("Financial Services"), Some(Sector::Finance));
    assert_eq!(Sector::from_str("Basic Materials"), Some(Sector::Mining));
    assert_eq!(Sector::from_str("LIFE SCIENCES"), Some(Sector::Healthcare));
    assert_eq!(Sector::from_str("UNKNOWN_SECTOR"), Some(Sector::Other));
  }

  #[test]
  fn test_alpha_vantage_overview_labels() {
    assert_eq!(Sector::from_str("ENERGY & TRANSPORTATION"), Some(Sector::Energy));
    assert_eq!(Sector::from_str("MANUFACTURING"), Some(Sector::Mining));
    assert_eq!(Sector::from_str("REAL ESTATE & CONSTRUCTION"), Some(Sector::RealEstate));
    assert_eq!(Sector::from_str("TRADE & SERVICES"), Some(Sector::ConsumerDiscretionary));
    assert_eq!(Sector::from_str("FINANCE"), Some(Sector::Finance));

    for label in ["ENERGY & TRANSPORTATION", "MANUFACTURING"] {
      let family = Sector::from_str(label).map(|s| s.score_family());
      assert_eq!(family, Some(ScoreFamily::Manufacturing), "{}", label);
    }
    assert_eq!(
      Sector::from_str("REAL ESTATE & CONSTRUCTION").map(|s| s.score_family()),
      Some(ScoreFamily::NonManufacturing)
    );
  }

  #[test]
  fn test_sector_parsing_placeholders() {
    assert_eq!(Sector::from_str("None"), None);
    assert_eq!(Sector::from_str("-"), None);
    assert_eq!(Sector::from_str("   "), None);
  }

  #[test]
  fn test_sector_display() {
    assert_eq!(format!("{}", Sector::Technology), "TECHNOLOGY");
    assert_eq!(format!("{}", Sector::ConsumerDiscretionary), "CONSUMER_DISCRETIONARY");
    assert_eq!(format!("{}", Sector::Finance), "FINANCE");
  }

  #[test]
  fn test_display_round_trips_through_parser() {
    for sector in [
      Sector::Energy,
      Sector::Mining,
      Sector::Utilities,
      Sector::Technology,
      Sector::Healthcare,
      Sector::ConsumerDiscretionary,
      Sector::RealEstate,
      Sector::Finance,
      Sector::Other,
    ] {
      assert_eq!(Sector::from_str(&sector.to_string()), Some(sector));
    }
  }

  #[test]
  fn test_score_family() {
    assert_eq!(Sector::Energy.score_family(), ScoreFamily::Manufacturing);
    assert_eq!(Sector::Mining.score_family(), ScoreFamily::Manufacturing);
    assert_eq!(Sector::Utilities.score_family(), ScoreFamily::Manufacturing);
    assert_eq!(Sector::Technology.score_family(), ScoreFamily::NonManufacturing);
    assert_eq!(Sector::Healthcare.score_family(), ScoreFamily::NonManufacturing);
    assert_eq!(Sector::ConsumerDiscretionary.score_family(), ScoreFamily::NonManufacturing);
    assert_eq!(Sector::RealEstate.score_family(), ScoreFamily::NonManufacturing);
    assert_eq!(Sector::Finance.score_family(), ScoreFamily::NotApplicable);
    assert_eq!(Sector::Other.score_family(), ScoreFamily::NotApplicable);
  }

  #[test]
  fn test_sector_serde_names() {
    let json = serde_json::to_string(&Sector::RealEstate).unwrap();
    assert_eq!(json, "\"REAL_ESTATE\"");
    let parsed: Sector = serde_json::from_str("\"CONSUMER_DISCRETIONARY\"").unwrap();
    assert_eq!(parsed, Sector::ConsumerDiscretionary);
  }
}
