//! Optional TOML file replacing the built-in navigation and records

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;
use crate::domain::{
    sample, DashboardData, MetricRecord, NavigationEntry, NavigationRegistry, ProgressRecord,
    QuickStatRecord, TransactionRecord,
};

/// Each table is optional. A missing table keeps the built-in section; an
/// empty array empties it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatasetFile {
    pub navigation: Option<Vec<NavigationEntry>>,
    pub metrics: Option<Vec<MetricRecord>>,
    pub progress: Option<Vec<ProgressRecord>>,
    pub quick_stats: Option<Vec<QuickStatRecord>>,
    pub transactions: Option<Vec<TransactionRecord>>,
}

impl DatasetFile {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn into_parts(self) -> (NavigationRegistry, DashboardData) {
        let registry = match self.navigation {
            Some(entries) => NavigationRegistry::new(entries),
            None => sample::navigation(),
        };
        let data = DashboardData {
            metrics: self.metrics.unwrap_or_else(sample::metrics),
            progress: self.progress.unwrap_or_else(sample::progress),
            quick_stats: self.quick_stats.unwrap_or_else(sample::quick_stats),
            transactions: self.transactions.unwrap_or_else(sample::transactions),
        };
        (registry, data)
    }
}

pub fn try_load_dataset(path: &Path) -> Result<DatasetFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    DatasetFile::parse(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Navigation and records for the shell. Without a path, or when the file
/// cannot be used, the built-in data is returned.
pub fn load_shell_inputs(path: Option<&Path>) -> (NavigationRegistry, DashboardData) {
    let Some(path) = path else {
        return DatasetFile::default().into_parts();
    };
    match try_load_dataset(path) {
        Ok(file) => {
            tracing::info!(path = %path.display(), "loaded dataset");
            file.into_parts()
        }
        Err(err) => {
            tracing::warn!(error = %err, "using built-in dataset");
            DatasetFile::default().into_parts()
        }
    }
}
