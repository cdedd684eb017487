use std::fmt;

use crate::options::ResolvedOptions;

/// One step of a key path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// State threaded through one top-level diff.
///
/// The path is only used to match ignore patterns; it never shapes the
/// output, which mirrors the input's nesting instead.
#[derive(Clone, Debug)]
pub struct TraversalContext<'o> {
    pub depth: usize,
    pub path: Vec<PathSegment>,
    pub options: &'o ResolvedOptions,
}

impl<'o> TraversalContext<'o> {
    /// Context for the root of a traversal.
    pub fn root(options: &'o ResolvedOptions) -> Self {
        Self {
            depth: 0,
            path: Vec::new(),
            options,
        }
    }

    /// Descend one level: depth + 1, path extended by `segment`.
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        Self {
            depth: self.depth + 1,
            path,
            options: self.options,
        }
    }

    /// Returns `true` while another nested-object descent is allowed.
    pub fn has_depth_budget(&self) -> bool {
        self.depth < self.options.max_depth
    }

    /// The dotted path of `key` below the current position.
    pub fn dotted_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            return key.to_string();
        }
        let mut joined = self
            .path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");
        joined.push('.');
        joined.push_str(key);
        joined
    }

    /// Returns `true` if `key` below the current position is ignored.
    pub fn is_ignored(&self, key: &str) -> bool {
        !self.options.ignore.is_empty() && self.options.ignore.matches(&self.dotted_path(key))
    }
}
