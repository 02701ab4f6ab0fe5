//! Configuration for the sequence cleaner.
//!
//! The binary state record only carries the `mark_deletions` flag. This JSON
//! form also carries the accept pattern, for callers that want the whole
//! cleaner restored from one file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Serializable settings of a [`TokenSequenceCleaner`].
///
/// [`TokenSequenceCleaner`]: crate::analysis::token_filter::TokenSequenceCleaner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSequenceCleanerConfig {
    /// Record removed token text on the preceding kept token.
    pub mark_deletions: bool,
    /// Accept pattern source. `None` selects the alphabetic default.
    pub accept_pattern: Option<String>,
}

impl TokenSequenceCleanerConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Write this configuration to a file, replacing any existing one.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SieveError;

    #[test]
    fn test_config_default() {
        let config = TokenSequenceCleanerConfig::default();
        assert!(!config.mark_deletions);
        assert!(config.accept_pattern.is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config =
            TokenSequenceCleanerConfig::from_json_str(r#"{"mark_deletions": true}"#).unwrap();
        assert!(config.mark_deletions);
        assert!(config.accept_pattern.is_none());

        let config = TokenSequenceCleanerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, TokenSequenceCleanerConfig::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = TokenSequenceCleanerConfig {
            mark_deletions: true,
            accept_pattern: Some(r"\p{L}+".to_string()),
        };

        let json = config.to_json_string().unwrap();
        let back = TokenSequenceCleanerConfig::from_json_str(&json).unwrap();

        assert_eq!(back, config);
    }

    #[test]
    fn test_malformed_json() {
        let err = TokenSequenceCleanerConfig::from_json_str("{ mark_deletions").unwrap_err();
        assert!(matches!(err, SieveError::Json(_)));
    }
}
