//! User configuration for the finance tracker
//!
//! Holds the currency, date format, category vocabulary, user name and data
//! file location. The effective configuration is built from the built-in
//! defaults merged with the on-disk `config.yaml`, field by field.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::paths::ConfigPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::transaction::is_renderable_pattern;

/// Built-in category vocabulary, in display order
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Rent",
    "Utilities",
    "Insurance",
    "Subscriptions",
    "Groceries",
    "Eating Out",
    "Coffee",
    "Public Transport",
    "Car Expenses",
    "Cycling",
    "Other Transport",
    "Work & Hobbies",
    "Activities & Socialising",
    "Drinking & Indulgences",
    "Shopping",
    "Gifts",
    "Self-Care & Health",
    "Holiday Saving",
    "Holiday Spending",
    "Other",
];

fn default_currency() -> String {
    "GBP".to_string()
}

fn default_date_format() -> String {
    // DD/MM/YYYY
    "%d/%m/%Y".to_string()
}

fn default_user_name() -> String {
    "User".to_string()
}

fn default_data_file() -> String {
    "transactions.json".to_string()
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

/// Configuration document
///
/// Every key is optional on disk: a missing key deserializes as empty and
/// is filled in by [`Config::merge`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Currency code or symbol shown next to amounts
    #[serde(default)]
    pub currency: String,

    /// chrono strftime pattern used to show and parse dates
    #[serde(default)]
    pub date_format: String,

    /// Category vocabulary; insertion order is display order
    #[serde(default)]
    pub categories: Vec<String>,

    /// Display name
    #[serde(default)]
    pub user_name: String,

    /// Transaction data file, relative to the config directory unless absolute
    #[serde(default)]
    pub data_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            date_format: default_date_format(),
            categories: default_categories(),
            user_name: default_user_name(),
            data_file: default_data_file(),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Currency: {}, Date Format: {}, Categories: [{}], Data File: {}",
            self.user_name,
            self.currency,
            self.date_format,
            self.categories.join(", "),
            self.data_file
        )
    }
}

impl Config {
    /// Resolve the effective configuration
    ///
    /// Creates the config directory and writes the defaults on first run.
    /// An existing file is never rewritten; its non-empty fields override the
    /// defaults.
    pub fn resolve(paths: &ConfigPaths) -> LedgerResult<Self> {
        paths.ensure_config_dir()?;

        let config_path = paths.config_file();
        let defaults = Config::default();

        if !config_path.exists() {
            tracing::info!(path = %config_path.display(), "Config file not found, writing defaults");
            defaults.save(paths)?;
            return Ok(defaults);
        }

        let loaded = Config::load(paths)?;
        let merged = defaults.merge(loaded);
        if !is_renderable_pattern(&merged.date_format) {
            tracing::warn!(
                date_format = %merged.date_format,
                "Date format cannot be rendered, dates will be shown as %Y-%m-%d"
            );
        }
        tracing::debug!(config = %merged, "Config resolved");
        Ok(merged)
    }

    /// Read and parse config.yaml without merging
    pub fn load(paths: &ConfigPaths) -> LedgerResult<Self> {
        let config_path = paths.config_file();
        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Self::parse(&contents).map_err(|e| {
            tracing::error!(path = %config_path.display(), error = %e, "Failed to parse config");
            LedgerError::Config(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })
    }

    /// Parse a YAML document; a blank document carries no overrides
    pub fn parse(contents: &str) -> LedgerResult<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::empty());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Write this configuration to config.yaml
    pub fn save(&self, paths: &ConfigPaths) -> LedgerResult<()> {
        paths.ensure_config_dir()?;

        let config_path = paths.config_file();
        let contents = serde_yaml::to_string(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, contents).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })
    }

    /// A configuration with every field empty
    fn empty() -> Self {
        Self {
            currency: String::new(),
            date_format: String::new(),
            categories: Vec::new(),
            user_name: String::new(),
            data_file: String::new(),
        }
    }

    /// Merge an override document into this configuration
    ///
    /// Scalars are replaced only when the override is non-blank. Categories
    /// are replaced as a whole, and only when the override has at least one
    /// usable name.
    pub fn merge(mut self, other: Config) -> Self {
        merge_scalar(&mut self.currency, other.currency, "currency");
        merge_scalar(&mut self.date_format, other.date_format, "date_format");
        merge_scalar(&mut self.user_name, other.user_name, "user_name");
        merge_scalar(&mut self.data_file, other.data_file, "data_file");

        let categories = normalize_categories(other.categories);
        if categories.is_empty() {
            tracing::debug!("Keeping default categories");
        } else {
            tracing::debug!(
                from_count = self.categories.len(),
                to_count = categories.len(),
                "Overriding categories"
            );
            self.categories = categories;
        }

        self
    }

    /// Check whether a category is part of the vocabulary
    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }
}

fn merge_scalar(target: &mut String, value: String, field: &'static str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    tracing::debug!(field, from = %target, to = %value, "Overriding config field");
    *target = value.to_string();
}

/// Trim names, drop blanks and keep the first occurrence of duplicates
fn normalize_categories(categories: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(categories.len());
    for name in categories {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        if result.iter().any(|existing| existing == name) {
            tracing::warn!(category = name, "Ignoring duplicate category");
            continue;
        }
        result.push(name.to_string());
    }
    result
}
