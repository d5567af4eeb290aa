use std::collections::HashSet;

/// The set of leaf paths of one document.
///
/// Paths keep the order in which they were first inserted (document order
/// when produced by `flatten`), so missing-key lists come out in the order a
/// translator would read the reference file. Membership checks are hashed.
#[derive(Debug, Clone, Default)]
pub struct LeafPaths {
    ordered: Vec<String>,
    index: HashSet<String>,
}

impl LeafPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a path. Returns false if it was already present.
    pub fn insert(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if self.index.contains(&path) {
            return false;
        }
        self.index.insert(path.clone());
        self.ordered.push(path);
        true
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains(path)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Iterate paths in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Paths present in `self` but absent from `other`, in `self`'s order.
    pub fn difference<'a>(&'a self, other: &'a LeafPaths) -> impl Iterator<Item = &'a str> {
        self.iter().filter(move |path| !other.contains(path))
    }
}

impl PartialEq for LeafPaths {
    /// Set equality; insertion order is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for LeafPaths {}

impl<S: Into<String>> FromIterator<S> for LeafPaths {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut paths = LeafPaths::new();
        for path in iter {
            paths.insert(path);
        }
        paths
    }
}

impl<S: Into<String>> Extend<S> for LeafPaths {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for path in iter {
            self.insert(path);
        }
    }
}
