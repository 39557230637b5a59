use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::IconSet;
use crate::modules::header::Brand;
use crate::ui::layout::SidebarWidths;

pub mod dataset;

pub use dataset::{load_shell_inputs, DatasetFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    pub expanded_width: u16,
    pub collapsed_width: u16,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        let widths = SidebarWidths::default();
        Self {
            expanded_width: widths.expanded,
            collapsed_width: widths.collapsed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub brand_name: String,
    pub brand_mark: String,
    pub ascii_icons: bool,
    pub tick_rate_ms: u64,
    pub data_file: Option<String>,
    pub log_file: Option<String>,
    pub sidebar: SidebarConfig,
}

impl Default for Config {
    fn default() -> Self {
        let brand = Brand::default();
        Self {
            brand_name: brand.name,
            brand_mark: brand.mark,
            ascii_icons: false,
            tick_rate_ms: 250,
            data_file: None,
            log_file: None,
            sidebar: SidebarConfig::default(),
        }
    }
}

impl Config {
    pub fn brand(&self) -> Brand {
        let fallback = Brand::default();
        let name = non_empty(&self.brand_name).unwrap_or(fallback.name);
        let mark = non_empty(&self.brand_mark).unwrap_or(fallback.mark);
        Brand { name, mark }
    }

    pub fn icon_set(&self) -> IconSet {
        if self.ascii_icons {
            IconSet::Ascii
        } else {
            IconSet::Unicode
        }
    }

    pub fn sidebar_widths(&self) -> SidebarWidths {
        SidebarWidths::new(self.sidebar.expanded_width, self.sidebar.collapsed_width)
    }

    /// Poll interval of the event loop, never below 16ms.
    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms.max(16))
    }

    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_file.as_deref().and_then(expand_path)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.as_deref().and_then(expand_path)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn try_load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<Config>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Where the config came from; reported once logging is up.
#[derive(Debug)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
    Fallback(ConfigError),
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Path of the file that was read, or tried and rejected.
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            ConfigSource::Defaults => None,
            ConfigSource::File(path) => Some(path.as_path()),
            ConfigSource::Fallback(ConfigError::Read { path, .. })
            | ConfigSource::Fallback(ConfigError::Parse { path, .. }) => Some(path.as_path()),
        }
    }

    pub fn error(&self) -> Option<&ConfigError> {
        match &self.source {
            ConfigSource::Fallback(err) => Some(err),
            _ => None,
        }
    }

    pub fn report(&self) {
        match &self.source {
            ConfigSource::Defaults => tracing::info!("no config file, using defaults"),
            ConfigSource::File(path) => tracing::info!(path = %path.display(), "loaded config"),
            ConfigSource::Fallback(err) => tracing::warn!(error = %err, "using default config"),
        }
    }
}

/// Loads the config from `explicit` or the default location. A missing
/// default file gives the defaults; any other problem falls back to them
/// and is kept in the returned source.
pub fn load(explicit: Option<&Path>) -> LoadedConfig {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) if path.exists() => path,
            _ => {
                return LoadedConfig {
                    config: Config::default(),
                    source: ConfigSource::Defaults,
                }
            }
        },
    };
    match try_load_from(&path) {
        Ok(config) => LoadedConfig {
            config,
            source: ConfigSource::File(path),
        },
        Err(err) => LoadedConfig {
            config: Config::default(),
            source: ConfigSource::Fallback(err),
        },
    }
}

/// Default config location. `HOME` wins over `ProjectDirs` so the file sits
/// in `~/.config` on macOS too, next to the other terminal tools.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("BIZDASH_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("bizdash").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("bizdash").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "bizdash", "bizdash")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Directory for the default log file, resolved like [`config_path`].
pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("bizdash"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("bizdash"));
    }
    directories::ProjectDirs::from("io", "bizdash", "bizdash")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn default_log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("bizdash.log"))
}

pub fn expand_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(rest) = trimmed.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
            return Some(home.join(rest));
        }
    }

    let mut buf = PathBuf::from(trimmed);
    if buf.is_relative() {
        if let Ok(cwd) = std::env::current_dir() {
            buf = cwd.join(buf);
        }
    }
    Some(buf)
}
