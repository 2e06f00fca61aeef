//! TOML-based configuration for semplan.
//!
//! Supports a config file (semplan.toml) with environment variable expansion.
//!
//! Example configuration:
//! ```toml
//! [metadata]
//! path = "${SEMPLAN_METADATA_DIR}"
//! tables_file = "tables.yaml"
//! joins_file = "joins.yaml"
//!
//! [planner]
//! strict = false
//!
//! [output]
//! validate_sql = true
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::compile::CompileOptions;
use crate::metadata::{YamlMetadataProvider, DEFAULT_JOINS_FILE, DEFAULT_TABLES_FILE};

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("No metadata directory configured")]
    MissingMetadataPath,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Where the catalog documents live.
    pub metadata: MetadataSettings,

    /// Planner behaviour.
    pub planner: PlannerSettings,

    /// Output checks.
    pub output: OutputSettings,
}

/// Metadata directory configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MetadataSettings {
    /// Metadata directory (supports ${ENV_VAR} expansion).
    pub path: Option<String>,

    /// Table-definition document name inside the directory.
    pub tables_file: String,

    /// Join-graph document name inside the directory.
    pub joins_file: String,
}

impl Default for MetadataSettings {
    fn default() -> Self {
        Self {
            path: None,
            tables_file: DEFAULT_TABLES_FILE.to_string(),
            joins_file: DEFAULT_JOINS_FILE.to_string(),
        }
    }
}

impl MetadataSettings {
    /// Get the metadata directory with environment variables expanded.
    pub fn resolved_path(&self) -> Result<Option<PathBuf>, SettingsError> {
        self.path
            .as_deref()
            .map(|p| expand_env_vars(p).map(PathBuf::from))
            .transpose()
    }

    /// Build a YAML provider for `dir`, or for the configured path when
    /// `dir` is `None`.
    pub fn provider(&self, dir: Option<&Path>) -> Result<YamlMetadataProvider, SettingsError> {
        let base = match dir {
            Some(dir) => dir.to_path_buf(),
            None => self.resolved_path()?.ok_or(SettingsError::MissingMetadataPath)?,
        };

        Ok(YamlMetadataProvider::new(base)
            .with_tables_file(&self.tables_file)
            .with_joins_file(&self.joins_file))
    }
}

/// Planner configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlannerSettings {
    /// Reject dimensions without a join edge or string column.
    pub strict: bool,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Parse rendered SQL before returning it.
    pub validate_sql: bool,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `SEMPLAN_CONFIG`
    /// 2. `./semplan.toml`
    /// 3. `~/.config/semplan/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("SEMPLAN_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("semplan.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("semplan").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }

    /// Compile options implied by this configuration.
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions::default()
            .with_strict(self.planner.strict)
            .with_validate_sql(self.output.validate_sql)
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let mut var_name = String::new();
        if chars.peek() == Some(&'{') {
            chars.next();
            for ch in chars.by_ref() {
                if ch == '}' {
                    break;
                }
                var_name.push(ch);
            }
        } else {
            while let Some(&ch) = chars.peek() {
                if ch.is_alphanumeric() || ch == '_' {
                    var_name.push(ch);
                    chars.next();
                } else {
                    break;
                }
            }
            if var_name.is_empty() {
                // Just a lone $, keep it
                result.push('$');
                continue;
            }
        }

        let value = env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
        result.push_str(&value);
    }

    Ok(result)
}
