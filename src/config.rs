use crate::i18n::Lang;
use crate::wizard::DEFAULT_DURATION;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure loaded from outcomes.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub app: AppConfig,
    pub paths: PathsConfig,
    /// Warnings raised while loading, before any subscriber exists. The
    /// binary logs them once logging is initialised.
    #[serde(skip)]
    pub notices: Vec<String>,
}

/// Behavior of the wizard and CLI
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub lang: Lang,
    pub default_duration: String,
    pub log_level: String,
}

/// Where the phrase bank lives and where exports are written
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            lang: Lang::Es,
            default_duration: DEFAULT_DURATION.to_string(),
            log_level: "outcomes_builder=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses OUTCOMES_CONFIG environment variable or defaults to "outcomes.toml"
    pub fn load() -> anyhow::Result<Self> {
        // .env: OUTCOMES_ENV_FILE if set, else ./.env when present
        if let Ok(env_path) = std::env::var("OUTCOMES_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::dotenv();
        }

        let config_path =
            std::env::var("OUTCOMES_CONFIG").unwrap_or_else(|_| "outcomes.toml".to_string());
        Self::load_from(&config_path)
    }

    /// Read `config_path` (defaults when missing), then apply env overrides.
    pub fn load_from(config_path: &str) -> anyhow::Result<Self> {
        let mut config: Config = if let Ok(content) = std::fs::read_to_string(config_path) {
            Self::from_toml(&content)?
        } else {
            let mut config = Self::default();
            config
                .notices
                .push(format!("Config file {} not found, using defaults", config_path));
            config
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(lang) = std::env::var("OUTCOMES_LANG") {
            match Lang::parse(&lang) {
                Some(l) => self.app.lang = l,
                None => self
                    .notices
                    .push(format!("Ignoring unsupported OUTCOMES_LANG '{}'", lang)),
            }
        }
        if let Ok(dir) = std::env::var("OUTCOMES_DATA_DIR") {
            self.paths.data_dir = Some(PathBuf::from(dir));
            tracing::debug!("OUTCOMES_DATA_DIR env override applied");
        }
        if let Ok(dir) = std::env::var("OUTCOMES_EXPORT_DIR") {
            self.paths.export_dir = Some(PathBuf::from(dir));
            tracing::debug!("OUTCOMES_EXPORT_DIR env override applied");
        }
        if let Ok(level) = std::env::var("RUST_LOG") {
            self.app.log_level = level;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.app.default_duration.trim().is_empty() {
            anyhow::bail!("app.default_duration must not be empty");
        }
        Ok(())
    }

    /// Directory holding the persisted bank and the wizard log
    pub fn data_dir(&self) -> PathBuf {
        self.paths.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("outcomes-builder"))
                .unwrap_or_else(|| PathBuf::from("."))
        })
    }

    /// Directory exports are written to (current directory by default)
    pub fn export_dir(&self) -> PathBuf {
        self.paths
            .export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.app.lang, Lang::Es);
        assert_eq!(config.app.default_duration, "1 clase");
        assert_eq!(config.export_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            r#"
            [app]
            lang = "en"

            [paths]
            data_dir = "/tmp/outcomes"
            "#,
        )
        .unwrap();
        assert_eq!(config.app.lang, Lang::En);
        assert_eq!(config.app.log_level, "outcomes_builder=info");
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/outcomes"));
    }

    #[test]
    fn test_missing_file_is_reported_as_notice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = Config::load_from(path.to_str().unwrap()).unwrap();
        assert!(
            config
                .notices
                .iter()
                .any(|n| n.contains("absent.toml") && n.contains("not found"))
        );
    }

    #[test]
    fn test_present_file_has_no_missing_notice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outcomes.toml");
        std::fs::write(&path, "[app]\ndefault_duration = \"2 clases\"\n").unwrap();
        let config = Config::load_from(path.to_str().unwrap()).unwrap();
        assert!(!config.notices.iter().any(|n| n.contains("not found")));
    }

    #[test]
    fn test_blank_duration_rejected() {
        let config = Config::from_toml("[app]\ndefault_duration = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_lang_is_a_parse_error() {
        assert!(Config::from_toml("[app]\nlang = \"fr\"\n").is_err());
    }
}
