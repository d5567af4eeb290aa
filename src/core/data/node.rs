use std::fmt;

/// A node in a parsed locale document.
///
/// Locale files only ever produce two shapes: nested mappings and string
/// leaves. Sequences, anchors and other YAML constructs are not modelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An ordered set of `key: child` pairs.
    Mapping(Mapping),
    /// A string value, with wrapping quotes already removed.
    Scalar(String),
}

impl Node {
    /// Returns true if this node terminates a leaf path.
    ///
    /// Scalars are always leaves. A mapping is a leaf only when it has no
    /// children (`key: {}` or a `key:` that never gained nested lines).
    pub fn is_leaf(&self) -> bool {
        match self {
            Node::Mapping(mapping) => mapping.is_empty(),
            Node::Scalar(_) => true,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(mapping) => Some(mapping),
            Node::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Node::Scalar(value) => Some(value),
            Node::Mapping(_) => None,
        }
    }

    /// Look up a descendant by its key segments.
    ///
    /// Segments are matched exactly, so keys that themselves contain dots
    /// stay addressable: `["a.b"]` and `["a", "b"]` are different lookups.
    pub fn lookup(&self, segments: &[&str]) -> Option<&Node> {
        segments.iter().try_fold(self, |node, segment| {
            node.as_mapping().and_then(|mapping| mapping.get(segment))
        })
    }
}

impl From<Mapping> for Node {
    fn from(mapping: Mapping) -> Self {
        Node::Mapping(mapping)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(value.to_string())
    }
}

/// Ordered `key -> Node` pairs with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, Node)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from pairs whose keys are already unique.
    pub(crate) fn from_unique_entries(entries: Vec<(String, Node)>) -> Self {
        Self { entries }
    }

    /// Insert a child, replacing an existing one with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) {
        let key = key.into();
        let node = node.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = node,
            None => self.entries.push((key, node)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, node)| node)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Tear nested mappings down from a work list so that dropping a deep tree
// does not recurse once per level.
impl Drop for Mapping {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        collect_child_mappings(&mut self.entries, &mut pending);
        while let Some(mut mapping) = pending.pop() {
            collect_child_mappings(&mut mapping.entries, &mut pending);
        }
    }
}

fn collect_child_mappings(entries: &mut Vec<(String, Node)>, pending: &mut Vec<Mapping>) {
    for (_, node) in entries.drain(..) {
        if let Node::Mapping(mapping) = node {
            pending.push(mapping);
        }
    }
}

/// The value found at the end of a leaf path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafValue<'a> {
    Scalar(&'a str),
    EmptyMapping,
}

impl fmt::Display for LeafValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafValue::Scalar(value) => write!(f, "{:?}", value),
            LeafValue::EmptyMapping => write!(f, "{{}}"),
        }
    }
}
