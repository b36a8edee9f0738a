// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the optional per-tree configuration file, looked up at the
/// input root.
pub const CONFIG_FILE: &str = "ltt.toml";

/// Settings read from `ltt.toml`.
#[derive(Deserialize, Debug, Default)]
pub struct FileConfig {
    /// Title used for the rendered artifacts.
    pub title: Option<String>,
    /// Whitelist glob patterns, extended by `--include`.
    #[serde(default)]
    pub include: Vec<String>,
    /// Blacklist glob patterns, extended by `--exclude`.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Extra deny-list substrings on top of the built-in ones.
    #[serde(default)]
    pub exclude_names: Vec<String>,
}

/// Immutable per-run settings, merged once from the config file and the
/// CLI flags. Components receive this (or pieces of it) at construction
/// instead of consulting globals.
#[derive(Debug)]
pub struct Options {
    pub title: Option<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub exclude_names: Vec<String>,
    pub generate_index: bool,
    pub silent: bool,
}

/// Loads `ltt.toml` from `dir`. A missing file yields the defaults; an
/// unreadable or invalid file is an error.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(dir: &Path) -> Result<FileConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config file: {}", path.display()))
}
