use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Route;
use crate::utils::expand_path;

/// Shipped defaults, also written out by `--init-config`.
pub const DEFAULT_CONFIG: &str = include_str!("../pydeck.toml");

/// Application configuration. The sidebar settings are never stored here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    pub tick_rate_ms: u64,
    pub sidebar_width: u16,
    pub start_route: Option<Route>,
    pub log_file: Option<String>,
}

impl Settings {
    /// Layers: shipped defaults, user config, `./pydeck.toml`, `extra`, then `PYDECK_*`.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(get_user_config_path()).required(false))
            .add_source(File::with_name("pydeck.toml").required(false));

        if let Some(path) = extra {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        builder
            .add_source(Environment::with_prefix("PYDECK"))
            .build()?
            .try_deserialize()
    }

    pub fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(raw) => expand_path(raw),
            None => default_log_path(),
        }
    }

    pub fn to_toml(&self) -> Result<String, anyhow::Error> {
        Ok(toml::to_string(self)?)
    }
}

pub fn get_user_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("pydeck");
    path.push("pydeck.toml");
    path
}

fn default_log_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
    path.push("pydeck");
    path.push("pydeck.log");
    path
}

/// Writes the shipped defaults to `path` unless a file is already there.
/// Returns whether a file was written.
pub fn write_default_config(path: &Path) -> Result<bool, anyhow::Error> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pydeck-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn shipped_defaults_parse() {
        let s: Settings = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(s.tick_rate_ms, 200);
        assert_eq!(s.sidebar_width, 42);
        assert_eq!(s.start_route, None);
        assert_eq!(s.log_file, None);
    }

    #[test]
    fn extra_file_overrides_defaults() {
        let dir = scratch_dir("override");
        let path = dir.join("custom.toml");
        fs::write(&path, "sidebar_width = 30\nstart_route = \"readme_generation\"\n").unwrap();

        let s = Settings::load(Some(&path)).unwrap();
        assert_eq!(s.sidebar_width, 30);
        assert_eq!(s.start_route, Some(Route::ReadmeGeneration));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn start_route_accepts_a_leading_slash() {
        let dir = scratch_dir("slash");
        let path = dir.join("custom.toml");
        fs::write(&path, "start_route = \"/dependency_management\"\n").unwrap();

        let s = Settings::load(Some(&path)).unwrap();
        assert_eq!(s.start_route, Some(Route::DependencyManagement));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn unknown_start_route_is_rejected() {
        let dir = scratch_dir("badroute");
        let path = dir.join("custom.toml");
        fs::write(&path, "start_route = \"/settings\"\n").unwrap();

        assert!(Settings::load(Some(&path)).is_err());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_extra_file_is_an_error() {
        let dir = scratch_dir("missing");
        assert!(Settings::load(Some(&dir.join("nope.toml"))).is_err());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn write_default_config_does_not_clobber() {
        let dir = scratch_dir("init");
        let path = dir.join("nested").join("pydeck.toml");
        assert!(write_default_config(&path).unwrap());
        fs::write(&path, "tick_rate_ms = 50\n").unwrap();
        assert!(!write_default_config(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "tick_rate_ms = 50\n");
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn explicit_log_file_is_used() {
        let s = Settings {
            tick_rate_ms: 200,
            sidebar_width: 42,
            start_route: None,
            log_file: Some("/var/tmp/pydeck.log".into()),
        };
        assert_eq!(s.log_path(), PathBuf::from("/var/tmp/pydeck.log"));
        assert!(s.to_toml().unwrap().contains("sidebar_width = 42"));
    }
}
