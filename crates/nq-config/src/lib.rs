//! Configuration management for nq.
//!
//! Parses `nq.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. [`load_dotenv`]
//! populates the process environment from a `.env` file.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `notion.api_key`
//! - `notion.page_id`
//! - `notion.base_url`
//! - `report.children[].page_id`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override Notion integration token.
    pub api_key: Option<String>,
    /// Override target page ID.
    pub page_id: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "nq.toml";

/// Default Notion REST API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// Default `Notion-Version` header value.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Environment variable holding the integration token.
pub const API_KEY_ENV: &str = "NOTION_API_KEY";

/// Environment variable holding the target page ID.
pub const PAGE_ID_ENV: &str = "NOTION_DATABASE_ID";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Notion connection configuration.
    pub notion: NotionConfig,
    /// Report and append configuration.
    pub report: ReportConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Notion connection configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// Integration token.
    pub api_key: Option<String>,
    /// ID of the page to report on.
    pub page_id: Option<String>,
    /// REST API base URL.
    pub base_url: String,
    /// Value of the `Notion-Version` header.
    pub version: String,
    /// Global request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            page_id: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            version: DEFAULT_NOTION_VERSION.to_owned(),
            timeout_secs: 30,
        }
    }
}

/// Report configuration: which child pages to inspect and where to append.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Child pages whose last non-empty block is reported, in order.
    pub children: Vec<ChildPageConfig>,
    /// Title of the child page that receives appended entries.
    pub append_to: String,
    /// Insert new blocks after the first existing child instead of at the end.
    pub add_at_top: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            children: vec![
                ChildPageConfig {
                    title: "2025".to_owned(),
                    page_id: "16d86b3a-74e3-80a7-9f5f-cf3b92b17235".to_owned(),
                },
                ChildPageConfig {
                    title: "March".to_owned(),
                    page_id: "1ac86b3a-74e3-8027-b030-dfe52b7f538f".to_owned(),
                },
            ],
            append_to: "March".to_owned(),
            add_at_top: true,
        }
    }
}

impl ReportConfig {
    /// Child page that receives appended entries.
    #[must_use]
    pub fn append_target(&self) -> Option<&ChildPageConfig> {
        self.children.iter().find(|c| c.title == self.append_to)
    }
}

/// A named child page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChildPageConfig {
    /// Display title used in report headers.
    pub title: String,
    /// Notion page ID.
    pub page_id: String,
}

/// Validated Notion credentials borrowed from [`Config`].
#[derive(Debug, Clone, Copy)]
pub struct NotionCredentials<'a> {
    /// Integration token.
    pub api_key: &'a str,
    /// ID of the page to report on.
    pub page_id: &'a str,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Required setting absent from file, flags and environment.
    #[error("{what} is not set. Please set {env} (or {field} in nq.toml).")]
    Missing {
        /// Human name of the setting.
        what: &'static str,
        /// Environment variable that provides it.
        env: &'static str,
        /// Config field path.
        field: &'static str,
    },
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`notion.api_key`").
        field: String,
        /// Error message (e.g., "${`NOTION_API_KEY`} not set").
        message: String,
    },
}

/// Load `.env` from the current directory or its parents.
///
/// Existing environment variables win. Returns the loaded file, if any.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Treat an absent or blank value as missing.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `nq.toml` in current directory and parents,
    /// falling back to defaults when none exists.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments (and
    /// their environment fallbacks) to take precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the loaded values are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(api_key) = &settings.api_key {
            self.notion.api_key = Some(api_key.clone());
        }
        if let Some(page_id) = &settings.page_id {
            self.notion.page_id = Some(page_id.clone());
        }
    }

    /// Get validated Notion credentials.
    ///
    /// Use this before issuing any request; a missing credential or page ID
    /// is a startup error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming the absent setting.
    pub fn require_notion(&self) -> Result<NotionCredentials<'_>, ConfigError> {
        let api_key =
            present(self.notion.api_key.as_deref()).ok_or(ConfigError::Missing {
                what: "Notion API key",
                env: API_KEY_ENV,
                field: "notion.api_key",
            })?;
        let page_id =
            present(self.notion.page_id.as_deref()).ok_or(ConfigError::Missing {
                what: "Notion page ID",
                env: PAGE_ID_ENV,
                field: "notion.page_id",
            })?;
        Ok(NotionCredentials { api_key, page_id })
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Credentials are not checked here; see [`Config::require_notion`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_notion()?;
        self.validate_report()?;
        Ok(())
    }

    fn validate_notion(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.notion.base_url, "notion.base_url")?;
        require_http_url(&self.notion.base_url, "notion.base_url")?;
        require_non_empty(&self.notion.version, "notion.version")?;
        if self.notion.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "notion.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_report(&self) -> Result<(), ConfigError> {
        for child in &self.report.children {
            require_non_empty(&child.title, "report.children.title")?;
            require_non_empty(&child.page_id, "report.children.page_id")?;
        }
        if self.report.append_target().is_none() {
            return Err(ConfigError::Validation(format!(
                "report.append_to \"{}\" does not name a configured child page",
                self.report.append_to
            )));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.notion.api_key, "notion.api_key")?;
        expand::expand_opt(&mut self.notion.page_id, "notion.page_id")?;
        self.notion.base_url = expand::expand_env(&self.notion.base_url, "notion.base_url")?;

        for child in &mut self.report.children {
            child.page_id = expand::expand_env(&child.page_id, "report.children.page_id")?;
        }

        Ok(())
    }
}
