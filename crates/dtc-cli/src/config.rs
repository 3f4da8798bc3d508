//! Report configuration, loadable from TOML.

use serde::Deserialize;

/// Presentation settings for generated reports.
///
/// Everything has a default; a config file is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Attribution line printed under the header and on every exported page.
    #[serde(default = "default_attribution")]
    pub attribution: String,
    /// Content lines per exported page.
    #[serde(default = "default_lines_per_page")]
    pub lines_per_page: usize,
}

fn default_attribution() -> String {
    "Check Engine Vehicle Scanning - book a scan if you have no codes!".to_string()
}

fn default_lines_per_page() -> usize {
    48
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            attribution: default_attribution(),
            lines_per_page: default_lines_per_page(),
        }
    }
}

impl ReportConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty_config_uses_defaults() {
        let config: ReportConfig = toml::from_str("").unwrap();
        assert_eq!(config.lines_per_page, 48);
        assert!(config.attribution.contains("Check Engine"));
    }

    #[test]
    fn deserialize_full_config() {
        let toml = r#"
attribution = "Smith's Garage - Main St 42"
lines_per_page = 30
"#;
        let config: ReportConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.attribution, "Smith's Garage - Main St 42");
        assert_eq!(config.lines_per_page, 30);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(ReportConfig::from_file("/nonexistent/report.toml").is_err());
    }
}
