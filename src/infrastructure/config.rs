use crate::domain::error::KelimeError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    #[serde(default = "default_max_query_chars")]
    pub max_query_chars: usize,
    #[serde(default = "default_true")]
    pub examples: bool,
    #[serde(default = "default_true")]
    pub enable_emoji: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
    pub http_proxy: Option<String>,
    #[serde(default)]
    pub logging: Logging,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Logging {
    #[serde(default = "default_true")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProvidersConfig {
    #[serde(default = "default_mymemory_url")]
    pub mymemory_url: String,
    #[serde(default = "default_tatoeba_url")]
    pub tatoeba_url: String,
    /// Sent to MyMemory as `de`, which raises the daily quota
    pub email: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            mymemory_url: default_mymemory_url(),
            tatoeba_url: default_tatoeba_url(),
            email: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            max_query_chars: default_max_query_chars(),
            examples: true,
            enable_emoji: true,
            theme: default_theme(),
            http_proxy: None,
            logging: Logging::default(),
            providers: ProvidersConfig::default(),
        }
    }
}

// Defaults
fn default_source_lang() -> String {
    "en".to_string()
}
fn default_target_lang() -> String {
    "tr".to_string()
}
fn default_max_query_chars() -> usize {
    100
}
fn default_true() -> bool {
    true
}
fn default_theme() -> String {
    "temp".to_string()
}
fn default_log_level() -> String {
    "WARN".to_string()
}
fn default_mymemory_url() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}
fn default_tatoeba_url() -> String {
    "https://tatoeba.org/eng/api_v0/search".to_string()
}
fn default_timeout_secs() -> u64 {
    15
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("kelime").join("config.toml"))
}

pub fn load_config() -> Result<Config, KelimeError> {
    match get_config_path() {
        Some(path) if path.exists() => match load_config_from(&path) {
            Ok(config) => Ok(config),
            Err(KelimeError::Toml(e)) => {
                eprintln!(
                    "Warning: Failed to parse config file: {}. Using defaults.",
                    e
                );
                Ok(Config::default())
            }
            Err(e) => Err(e),
        },
        _ => Ok(Config::default()),
    }
}

pub fn load_config_from(path: &Path) -> Result<Config, KelimeError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str::<Config>(&content)?)
}

pub fn generate_config_sample() -> Result<(), KelimeError> {
    let path = get_config_path()
        .ok_or_else(|| KelimeError::Config("Cannot determine config directory".to_string()))?;

    if path.exists() {
        eprintln!("Config file already exists at: {}", path.display());
        return Ok(());
    }

    write_config_sample(&path)?;
    println!("Generated config file at: {}", path.display());
    Ok(())
}

pub fn write_config_sample(path: &Path) -> Result<(), KelimeError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_content = toml::to_string_pretty(&Config::default())
        .map_err(|e| KelimeError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)
        .map_err(|e| KelimeError::Config(format!("Failed to write config file: {}", e)))?;
    Ok(())
}
