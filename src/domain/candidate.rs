//! Discovery results: candidates grouped by language class.

use super::LanguageClass;
use std::path::{Path, PathBuf};

/// A file that looks like a program entry point for some language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub class: LanguageClass,
    pub path: PathBuf,
}

impl Candidate {
    pub fn new(class: LanguageClass, path: impl Into<PathBuf>) -> Self {
        Self {
            class,
            path: path.into(),
        }
    }
}

/// Candidates grouped by class.
///
/// Classes iterate in the order they were first discovered; paths within a
/// class keep walk order. Several classes and several paths per class are
/// both legitimate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    groups: Vec<(LanguageClass, Vec<PathBuf>)>,
}

impl CandidateSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path under its class
    pub fn push(&mut self, class: LanguageClass, path: PathBuf) {
        match self.groups.iter_mut().find(|(c, _)| *c == class) {
            Some((_, paths)) => paths.push(path),
            None => self.groups.push((class, vec![path])),
        }
    }

    /// Paths discovered for a class
    #[cfg(test)]
    pub fn get(&self, class: LanguageClass) -> Option<&[PathBuf]> {
        self.groups
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, paths)| paths.as_slice())
    }

    /// Classes in first-discovered order
    pub fn classes(&self) -> impl Iterator<Item = LanguageClass> + '_ {
        self.groups.iter().map(|(class, _)| *class)
    }

    /// Number of distinct classes
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of candidate paths across all classes
    pub fn candidate_count(&self) -> usize {
        self.groups.iter().map(|(_, paths)| paths.len()).sum()
    }

    /// The only candidate, when exactly one class holds exactly one path
    pub fn single(&self) -> Option<Candidate> {
        match self.groups.as_slice() {
            [(class, paths)] if paths.len() == 1 => Some(Candidate::new(*class, paths[0].clone())),
            _ => None,
        }
    }

    /// Flatten to (class, path) pairs: class order, then path order
    pub fn iter(&self) -> impl Iterator<Item = (LanguageClass, &Path)> + '_ {
        self.groups
            .iter()
            .flat_map(|(class, paths)| paths.iter().map(move |p| (*class, p.as_path())))
    }

    /// Keep only the classes accepted by `keep`
    pub fn retain_classes(&mut self, mut keep: impl FnMut(LanguageClass) -> bool) {
        self.groups.retain(|(class, _)| keep(*class));
    }
}
