//! Directory names pruned from discovery.

use std::collections::BTreeSet;
use std::path::Path;

/// Set of base names whose subtrees are never searched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipConfig {
    names: BTreeSet<String>,
}

impl SkipConfig {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    /// Check whether the path's base name is in the skip set
    pub fn should_skip(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.names.contains(name))
    }

    #[cfg(test)]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
