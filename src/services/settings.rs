use crate::domain::constants::DEFAULT_SETTINGS_PATH;
use crate::domain::models::Settings;
use anyhow::Context;
use std::path::{Path, PathBuf};

fn default_settings_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(DEFAULT_SETTINGS_PATH))
}

/// An explicit path must exist; the per-user default is optional.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<Settings> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_settings_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Settings::default()),
        },
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read settings {}", path.display()))?;
    let settings = parse_settings(&raw)
        .with_context(|| format!("invalid settings {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

pub fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    Ok(toml::from_str(raw)?)
}
