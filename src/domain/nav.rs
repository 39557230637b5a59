//! Navigation registry shown in the sidebar

use std::collections::BTreeSet;

use serde::Deserialize;

use super::icon::IconId;

/// A single sidebar link. `target` is carried through to hooks untouched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavigationEntry {
    pub label: String,
    #[serde(default = "default_target")]
    pub target: String,
    pub icon: IconId,
}

fn default_target() -> String {
    "#".to_string()
}

impl NavigationEntry {
    pub fn new(label: impl Into<String>, target: impl Into<String>, icon: IconId) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            icon,
        }
    }
}

/// Ordered, label-unique list of navigation entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationRegistry {
    entries: Vec<NavigationEntry>,
}

impl NavigationRegistry {
    /// Builds a registry in the given order. Entries whose label was already
    /// seen are dropped; the first occurrence wins.
    pub fn new(entries: impl IntoIterator<Item = NavigationEntry>) -> Self {
        let mut seen = BTreeSet::new();
        let mut kept = Vec::new();
        for entry in entries {
            if !seen.insert(entry.label.clone()) {
                tracing::warn!(
                    label = %entry.label,
                    "dropping navigation entry with duplicate label"
                );
                continue;
            }
            kept.push(entry);
        }
        Self { entries: kept }
    }

    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&NavigationEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.label == label)
    }
}
