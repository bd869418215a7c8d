use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

use crate::error::AppError;
use crate::source::{AlbumSource, ApiClient};

const DEFAULT_API_URL: &str = "https://music.juanfrausto.com/";
const DEFAULT_USER: &str = "Listener";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Remote,
    Static,
}

impl FromStr for SourceKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(SourceKind::Remote),
            "static" => Ok(SourceKind::Static),
            other => Err(AppError::Config(format!(
                "unknown album source '{}', expected 'remote' or 'static'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_url: String,
    pub source: SourceKind,
    pub user_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            source: SourceKind::default(),
            user_name: DEFAULT_USER.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, overlaid by the config file, overlaid by the environment.
    pub fn load() -> Result<Self> {
        // Load .env file if present (won't override existing env vars)
        let _ = dotenvy::dotenv();

        let config_path = Self::config_file_path()?;
        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config file")?
        } else {
            AppConfig::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.base_url()?;
        Ok(config)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(url) = non_empty("ALBUMDECK_API_URL") {
            self.api_url = url;
        }
        if let Some(source) = non_empty("ALBUMDECK_SOURCE") {
            self.source = source.parse()?;
        }
        if let Some(user) = non_empty("ALBUMDECK_USER") {
            self.user_name = user;
        }
        Ok(())
    }

    /// The API root, always ending in `/` so relative endpoint paths join under it.
    pub fn base_url(&self) -> Result<Url, AppError> {
        let mut raw = self.api_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw)
            .map_err(|e| AppError::Config(format!("invalid api_url '{}': {}", self.api_url, e)))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "api_url must be an http(s) URL, got '{}'",
                self.api_url
            )));
        }
        Ok(url)
    }

    pub fn album_source(&self) -> Result<AlbumSource, AppError> {
        match self.source {
            SourceKind::Static => Ok(AlbumSource::Static),
            SourceKind::Remote => Ok(AlbumSource::Remote(ApiClient::new(self.base_url()?)?)),
        }
    }

    pub fn config_dir() -> Result<PathBuf, AppError> {
        let dir = dirs::config_dir()
            .ok_or_else(|| AppError::Config("Could not determine config directory".into()))?
            .join("albumdeck");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    fn config_file_path() -> Result<PathBuf, AppError> {
        Ok(Self::config_dir()?.join("config.json"))
    }
}
