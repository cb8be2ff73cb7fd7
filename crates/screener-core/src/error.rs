use thiserror::Error;

/// The main error type for screener-* crates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Sector name that could not be classified
  #[error("Invalid sector: {0}")]
  InvalidSector(String),
}

/// Result type alias for screener-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_display_config() {
    let err = Error::Config("Invalid SCREENER_THREADS".to_string());
    assert_eq!(err.to_string(), "Configuration error: Invalid SCREENER_THREADS");
  }

  #[test]
  fn test_error_display_invalid_sector() {
    let err = Error::InvalidSector("none".to_string());
    assert_eq!(err.to_string(), "Invalid sector: none");
  }
}
