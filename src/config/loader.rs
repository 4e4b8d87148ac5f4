//! Configuration file loading with precedence handling.

use crate::export::{ExportOptions, ExportSchema, ExportSource, DEFAULT_FILE_NAME};
use crate::state::{PageSize, SearchScopeSetting, TableOptions};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "SELFCERT_CONFIG";
/// Environment variable overriding the page size.
pub const PAGE_SIZE_ENV_VAR: &str = "SELFCERT_PAGE_SIZE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or values.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/selfcert/config.toml`.
///
/// ```toml
/// page_size = 20            # or "all"
/// search_scope = "restricted"
/// report_no_results = true
/// export_schema = "extended"
/// export_source = "selection-only"
/// clear_selection_after_export = true
/// export_file_name = "Certifications.csv"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial rows per page.
    #[serde(default)]
    pub page_size: Option<PageSize>,

    /// Which fields search looks at.
    #[serde(default)]
    pub search_scope: Option<SearchScopeSetting>,

    /// Flag searches that match nothing.
    #[serde(default)]
    pub report_no_results: Option<bool>,

    /// Column layout of exported files.
    #[serde(default)]
    pub export_schema: Option<ExportSchema>,

    /// Whether export may fall back to the visible page.
    #[serde(default)]
    pub export_source: Option<ExportSource>,

    /// Clear the selection after a successful export.
    #[serde(default)]
    pub clear_selection_after_export: Option<bool>,

    /// File name of exported artifacts.
    #[serde(default)]
    pub export_file_name: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Initial rows per page.
    pub page_size: PageSize,
    /// Fields searched by the table.
    pub search_scope: SearchScopeSetting,
    /// Flag searches that match nothing.
    pub report_no_results: bool,
    /// Column layout of exported files.
    pub export_schema: ExportSchema,
    /// Fallback behavior when nothing is selected.
    pub export_source: ExportSource,
    /// Clear the selection after a successful export.
    pub clear_selection_after_export: bool,
    /// File name handed to the artifact sink.
    pub export_file_name: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            search_scope: SearchScopeSetting::All,
            report_no_results: true,
            export_schema: ExportSchema::Standard,
            export_source: ExportSource::SelectionOrVisible,
            clear_selection_after_export: false,
            export_file_name: DEFAULT_FILE_NAME.to_string(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Table behavior derived from this config.
    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            page_size: self.page_size,
            search_scope: self.search_scope.into(),
            report_no_results: self.report_no_results,
        }
    }

    /// Export behavior derived from this config.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            schema: self.export_schema,
            source: self.export_source,
            file_name: self.export_file_name.clone(),
            clear_selection_after: self.clear_selection_after_export,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/selfcert/selfcert.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("selfcert").join("selfcert.log")
    } else {
        PathBuf::from("selfcert.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/selfcert/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("selfcert").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SELFCERT_CONFIG` environment variable
/// 3. Default path `~/.config/selfcert/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        search_scope: config.search_scope.unwrap_or(defaults.search_scope),
        report_no_results: config.report_no_results.unwrap_or(defaults.report_no_results),
        export_schema: config.export_schema.unwrap_or(defaults.export_schema),
        export_source: config.export_source.unwrap_or(defaults.export_source),
        clear_selection_after_export: config
            .clear_selection_after_export
            .unwrap_or(defaults.clear_selection_after_export),
        export_file_name: config.export_file_name.unwrap_or(defaults.export_file_name),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `SELFCERT_PAGE_SIZE`: Override page size (a number or `all`)
///
/// Invalid values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(PAGE_SIZE_ENV_VAR) {
        match raw.parse::<PageSize>() {
            Ok(page_size) => config.page_size = page_size,
            Err(err) => warn!(error = %err, "Ignoring {PAGE_SIZE_ENV_VAR}"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    page_size_override: Option<PageSize>,
    search_scope_override: Option<SearchScopeSetting>,
    log_file_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(page_size) = page_size_override {
        config.page_size = page_size;
    }

    if let Some(scope) = search_scope_override {
        config.search_scope = scope;
    }

    if let Some(path) = log_file_override {
        config.log_file_path = path;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
