use crate::cart::pricing::PromoTable;
use crate::catalog::filter::SortKey;
use crate::learning::player::DEFAULT_COMPLETION_THRESHOLD;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".learnhub";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cart: CartConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token issued by the LearnHub backend at login
    pub token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CartConfig {
    #[serde(default)]
    pub promo_codes: PromoTable,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CatalogConfig {
    /// Applied to `courses list` when no `--sort` is given
    pub default_sort: Option<SortKey>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlayerConfig {
    #[serde(default = "default_completion_threshold")]
    pub completion_threshold_percent: u8,
}

fn default_completion_threshold() -> u8 {
    DEFAULT_COMPLETION_THRESHOLD
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            completion_threshold_percent: default_completion_threshold(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "learnhub=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!(
                "Invalid api.base_url '{}', expected an http:// or https:// URL",
                self.base_url
            );
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("api.timeout_secs must be greater than 0");
        }
        Ok(())
    }
}

impl CartConfig {
    pub fn validate(&self) -> Result<()> {
        for (code, percent) in self.promo_codes.iter() {
            if code.is_empty() {
                anyhow::bail!("Promo code must not be empty");
            }
            if percent == 0 || percent > 100 {
                anyhow::bail!(
                    "Promo code {} has discount {}%, expected 1-100",
                    code,
                    percent
                );
            }
        }
        Ok(())
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<()> {
        let t = self.completion_threshold_percent;
        if t == 0 || t > 100 {
            anyhow::bail!("player.completion_threshold_percent must be 1-100, got {}", t);
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.cart.validate()?;
        self.player.validate()?;
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let home = home::home_dir().context("Could not find home directory")?;
    Ok(home.join(CONFIG_DIR).join("config.toml"))
}

fn load_with<P: AsRef<Path>>(path: P, required: bool) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(
            File::from(path.as_ref())
                .format(FileFormat::Toml)
                .required(required),
        )
        .add_source(
            Environment::with_prefix("LEARNHUB")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;

    config.validate()?;
    Ok(config)
}

/// Load a TOML file, with `LEARNHUB_API__TOKEN`-style environment
/// variables layered on top. The file must exist.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    load_with(path, true)
}

/// Load `~/.learnhub/config.toml`. A missing file yields the defaults
/// (plus any environment overrides).
pub fn load() -> Result<Config> {
    let path = config_path()?;
    load_with(&path, false).with_context(|| format!("Failed to load {}", path.display()))
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
