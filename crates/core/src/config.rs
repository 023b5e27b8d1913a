use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, TracesumError};
use crate::filter::SortOrder;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub focus_service: Option<String>,
    pub utc: bool,
    pub sort: SortOrder,
    pub min_duration: Option<Duration>,
    pub service_glob: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut cfg = Self::default();
        let config_path = config_file_path();
        if let Some(file_overrides) = load_file_overrides(&config_path)? {
            apply_overrides(&mut cfg, file_overrides, "config file")?;
        }
        let env_overrides = load_env_overrides();
        apply_overrides(&mut cfg, env_overrides, "environment")?;
        Ok(cfg)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigOverrides {
    focus_service: Option<String>,
    utc: Option<String>,
    sort: Option<String>,
    min_duration: Option<String>,
    service_glob: Option<String>,
}

fn config_file_path() -> PathBuf {
    if let Ok(path) = env::var("TRACESUM_CONFIG") {
        return PathBuf::from(path);
    }

    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let config_home = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(home).join(".config"));
    config_home.join("tracesum/config.toml")
}

fn load_file_overrides(path: &PathBuf) -> Result<Option<ConfigOverrides>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| TracesumError::Io(format!("failed reading {}: {e}", path.display())))?;
    let parsed = parse_file_overrides(&raw)
        .map_err(|e| TracesumError::Config(format!("failed parsing {}: {e}", path.display())))?;
    Ok(Some(parsed))
}

/// TOML accepts `utc = true` as well as the string forms used in the
/// environment.
fn parse_file_overrides(raw: &str) -> std::result::Result<ConfigOverrides, toml::de::Error> {
    let mut table: toml::Table = toml::from_str(raw)?;
    if let Some(toml::Value::Boolean(b)) = table.get("utc") {
        let b = *b;
        table.insert("utc".to_string(), toml::Value::String(b.to_string()));
    }
    toml::Value::Table(table).try_into()
}

fn load_env_overrides() -> ConfigOverrides {
    ConfigOverrides {
        focus_service: env::var("TRACESUM_SERVICE").ok(),
        utc: env::var("TRACESUM_UTC").ok(),
        sort: env::var("TRACESUM_SORT").ok(),
        min_duration: env::var("TRACESUM_MIN_DURATION").ok(),
        service_glob: env::var("TRACESUM_SERVICE_GLOB").ok(),
    }
}

fn apply_overrides(cfg: &mut Config, overrides: ConfigOverrides, source: &str) -> Result<()> {
    if let Some(v) = overrides.focus_service {
        cfg.focus_service = Some(v).filter(|s| !s.is_empty());
    }
    if let Some(v) = overrides.utc {
        cfg.utc = parse_bool(&v).ok_or_else(|| {
            TracesumError::Config(format!("bad utc in {source}: expected a boolean (value={v})"))
        })?;
    }
    if let Some(v) = overrides.sort {
        cfg.sort = SortOrder::from_str(&v)
            .map_err(|e| TracesumError::Config(format!("bad sort in {source}: {e}")))?;
    }
    if let Some(v) = overrides.min_duration {
        cfg.min_duration = Some(humantime::parse_duration(&v).map_err(|e| {
            TracesumError::Config(format!("bad min_duration in {source}: {e} (value={v})"))
        })?);
    }
    if let Some(v) = overrides.service_glob {
        cfg.service_glob = Some(v).filter(|s| !s.is_empty());
    }
    Ok(())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
