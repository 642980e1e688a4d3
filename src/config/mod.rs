#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::{ConfigProvider, DEFAULT_ENDPOINT};
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};

/// Effective settings after merging CLI flags, the config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    pub endpoint: String,
}

impl ProbeSettings {
    /// Precedence: explicit endpoint, then the file's `probe.endpoint`, then the default.
    pub fn resolve(endpoint: Option<&str>, file: Option<&TomlConfig>) -> Self {
        let endpoint = endpoint
            .or_else(|| file.and_then(TomlConfig::endpoint))
            .unwrap_or(DEFAULT_ENDPOINT);

        Self {
            endpoint: endpoint.to_string(),
        }
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

impl ConfigProvider for ProbeSettings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Validate for ProbeSettings {
    fn validate(&self) -> Result<()> {
        validate_url("probe.endpoint", &self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with(endpoint: &str) -> TomlConfig {
        TomlConfig::from_toml_str(&format!("[probe]\nendpoint = \"{}\"\n", endpoint)).unwrap()
    }

    #[test]
    fn test_default_targets_github() {
        let settings = ProbeSettings::default();
        assert_eq!(settings.endpoint(), "https://api.github.com");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_overrides_default() {
        let file = file_with("http://localhost:8080/");
        let settings = ProbeSettings::resolve(None, Some(&file));
        assert_eq!(settings.endpoint, "http://localhost:8080/");
    }

    #[test]
    fn test_flag_overrides_file() {
        let file = file_with("http://localhost:8080/");
        let settings = ProbeSettings::resolve(Some("https://example.com"), Some(&file));
        assert_eq!(settings.endpoint, "https://example.com");
    }

    #[test]
    fn test_file_without_endpoint_falls_back_to_default() {
        let file = TomlConfig::default();
        let settings = ProbeSettings::resolve(None, Some(&file));
        assert_eq!(settings.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_invalid_endpoint_fails_validation() {
        let settings = ProbeSettings::resolve(Some("ftp://example.com"), None);
        let err = settings.validate().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
