//! Google Maps web service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Google Maps web services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    /// Base URL shared by the Directions and Places endpoints
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key with the Directions and Places APIs enabled
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Language of provider texts (e.g. "en")
    #[serde(default = "default_language")]
    pub language: String,

    /// Region bias as a ccTLD code (e.g. "in")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            language: default_language(),
            region: None,
        }
    }
}

impl MapsConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some("test-key".to_string()),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            return Err("api_key must be set".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MapsConfig::default();
        assert_eq!(config.base_url, "https://maps.googleapis.com");
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.language, "en");
        assert!(config.region.is_none());
    }

    #[test]
    fn test_validation_success() {
        assert!(MapsConfig::for_testing().validate().is_ok());
    }

    #[test]
    fn test_validation_missing_key() {
        assert!(MapsConfig::default().validate().is_err());

        let config = MapsConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = MapsConfig {
            timeout_secs: 0,
            ..MapsConfig::for_testing()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_api_key_never_serialized() {
        let json = serde_json::to_string(&MapsConfig::for_testing()).expect("serialize");
        assert!(!json.contains("test-key"));
        assert!(!json.contains("api_key"));
    }
}
