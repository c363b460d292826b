//! The ordered list of configured sources.

use crate::source::{Source, SourceId};
use std::collections::HashSet;

/// Error returned when a registry cannot be built from configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Duplicate source id: {0}")]
    DuplicateId(SourceId),

    #[error("Source at position {0} has an empty id")]
    EmptyId(usize),
}

/// Ordered, immutable list of available sources.
///
/// Built once at startup. Registry order is the order sources appear in the
/// channel bar and the order used to fill the initial slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    sources: Vec<Source>,
}

impl Registry {
    /// Build a registry, rejecting empty and duplicate identifiers.
    pub fn new(sources: Vec<Source>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(sources.len());
        for (position, source) in sources.iter().enumerate() {
            if source.id.is_empty() {
                return Err(RegistryError::EmptyId(position));
            }
            if !seen.insert(&source.id) {
                return Err(RegistryError::DuplicateId(source.id.clone()));
            }
        }
        Ok(Self { sources })
    }

    pub fn get(&self, id: &SourceId) -> Option<&Source> {
        self.sources.iter().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &SourceId) -> bool {
        self.get(id).is_some()
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Source> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Source;
    type IntoIter = std::slice::Iter<'a, Source>;

    fn into_iter(self) -> Self::IntoIter {
        self.sources.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(ids: &[&str]) -> Vec<Source> {
        ids.iter().map(|id| Source::new(*id, id.to_uppercase())).collect()
    }

    #[test]
    fn preserves_insertion_order() {
        let registry = Registry::new(sources(&["c", "a", "b"])).unwrap();
        let ids: Vec<&str> = registry.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut list = sources(&["a", "b"]);
        list.push(Source::new("a", "Another A"));
        assert_eq!(
            Registry::new(list),
            Err(RegistryError::DuplicateId(SourceId::new("a")))
        );
    }

    #[test]
    fn rejects_empty_ids() {
        assert_eq!(
            Registry::new(sources(&["a", " "])),
            Err(RegistryError::EmptyId(1))
        );
    }

    #[test]
    fn lookup_by_id() {
        let registry = Registry::new(sources(&["a", "b"])).unwrap();
        assert_eq!(registry.get(&SourceId::new("b")).unwrap().name, "B");
        assert!(!registry.contains(&SourceId::new("z")));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn empty_registry_is_allowed() {
        let registry = Registry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
    }
}
