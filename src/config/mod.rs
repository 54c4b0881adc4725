use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Worksheet names inside the workbook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SheetNames {
    #[serde(default = "default_todos_sheet")]
    pub todos: String,
    #[serde(default = "default_errors_sheet")]
    pub errors: String,
    #[serde(default = "default_products_sheet")]
    pub products: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub sheets: SheetNames,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_within_days")]
    pub default_within_days: i64,
    #[serde(default = "default_shortlist")]
    pub shortlist_size: usize,
}

/// Top-level keys a complete configuration file carries.
pub const CONFIG_FIELDS: [&str; 6] = [
    "database",
    "password",
    "sheets",
    "cache_ttl_secs",
    "default_within_days",
    "shortlist_size",
];

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_todos_sheet() -> String {
    "todos".to_string()
}
fn default_errors_sheet() -> String {
    "feilvarer".to_string()
}
fn default_products_sheet() -> String {
    "products".to_string()
}
fn default_cache_ttl() -> u64 {
    20
}
fn default_within_days() -> i64 {
    30
}
fn default_shortlist() -> usize {
    30
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            todos: default_todos_sheet(),
            errors: default_errors_sheet(),
            products: default_products_sheet(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            password: String::new(),
            sheets: SheetNames::default(),
            cache_ttl_secs: default_cache_ttl(),
            default_within_days: default_within_days(),
            shortlist_size: default_shortlist(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.apotekhjelper`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".apotekhjelper")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("apotekhjelper.conf")
    }

    /// Return the default path of the SQLite workbook
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("apotekhjelper.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// YAML rendering with the shared secret masked.
    pub fn to_masked_yaml(&self) -> AppResult<String> {
        let mut shown = self.clone();
        if !shown.password.is_empty() {
            shown.password = "********".to_string();
        }
        Ok(serde_yaml::to_string(&shown)?)
    }

    /// Top-level fields absent from the config file on disk.
    pub fn missing_fields() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(&path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let map = value
            .as_mapping()
            .ok_or_else(|| AppError::Config("configuration root is not a mapping".into()))?;

        Ok(CONFIG_FIELDS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(serde_yaml::Value::from(*k)))
            .collect())
    }

    /// Create the config directory and write the configuration file.
    /// An existing file keeps its settings; `secret` replaces the password
    /// and `database` the workbook path when given.
    pub fn init_all(database: Option<String>, secret: Option<String>) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut cfg = Self::load()?;

        if let Some(name) = database {
            let p = expand_tilde(&name);
            let db = if p.is_absolute() { p } else { dir.join(p) };
            cfg.database = db.to_string_lossy().to_string();
        }
        if let Some(pw) = secret {
            cfg.password = pw;
        }

        let yaml = serde_yaml::to_string(&cfg)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(cfg)
    }
}
