//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - Writes a template on request (`--init-config`), never implicitly.
//!
//! Notes:
//! - A missing file means defaults; a malformed file or unknown field is an error.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{default_config_path, path_has_symlink_ancestor};
use super::types::{Config, LogLevel};
use crate::platform::write_config_secure_new_0600;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "prefer_rename", default, deserialize_with = "de_bool_trimmed_opt")]
    prefer_rename: Option<bool>,
}

const TEMPLATE: &str = "<config>
  <!-- quiet | normal | info | debug -->
  <log_level>normal</log_level>
  <!-- optional: append logs to this file as well as stderr -->
  <log_file></log_file>
  <!-- try a same-volume rename before copy + remove when moving -->
  <prefer_rename>true</prefer_rename>
</config>
";

// Custom deserializer that trims surrounding whitespace for optional bools
fn de_bool_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Some(true)),
            "false" | "no" | "0" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean '{other}'"
            ))),
        },
    }
}

// Map XmlConfig -> Config, starting from defaults.
fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = parsed.log_level.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_level = trimmed
                .parse::<LogLevel>()
                .map_err(anyhow::Error::msg)?;
        }
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }
    if let Some(b) = parsed.prefer_rename {
        cfg.prefer_rename = b;
    }
    Ok(cfg)
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed).with_context(|| format!("invalid value in '{}'", path.display()))
}

/// Load the config from `default_config_path()`; defaults when the file is absent.
pub fn load_config() -> Result<Config> {
    let path = default_config_path()?;
    if !path.exists() {
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(Config::default());
    }
    debug!(path = %path.display(), "loading config");
    load_config_from_xml_path(&path)
}

/// Write the commented template to `path`. Refuses to overwrite an existing
/// file or to write through a symlinked ancestor.
pub fn create_template_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("config file already exists: {}", path.display());
    }
    if path_has_symlink_ancestor(path)
        .with_context(|| format!("inspect ancestors of '{}'", path.display()))?
    {
        bail!(
            "refusing to create config: an ancestor of {} is a symlink",
            path.display()
        );
    }
    write_config_secure_new_0600(path, TEMPLATE.as_bytes())
        .with_context(|| format!("write template config '{}'", path.display()))
}
