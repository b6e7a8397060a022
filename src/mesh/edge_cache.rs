use std::collections::HashMap;

use super::VertexId;

/// An undirected edge between two vertices, used as a cache key.
///
/// The endpoints are stored in ascending key order, so `EdgeKey::new(a, b)`
/// and `EdgeKey::new(b, a)` compare and hash equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    lo: VertexId,
    hi: VertexId,
}

impl EdgeKey {
    /// Creates the canonical key for the edge `a`–`b`.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }
}

/// Maps each subdivided edge to the single midpoint vertex created for it.
///
/// Two triangles sharing an edge resolve to the same midpoint through this
/// cache, which keeps the refined mesh free of cracks.
#[derive(Debug, Default)]
pub struct EdgeMidpointCache {
    midpoints: HashMap<EdgeKey, VertexId>,
}

impl EdgeMidpointCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached midpoint of the edge `a`–`b`, in either direction.
    #[must_use]
    pub fn get(&self, a: VertexId, b: VertexId) -> Option<VertexId> {
        self.midpoints.get(&EdgeKey::new(a, b)).copied()
    }

    /// Records `midpoint` as the midpoint of the edge `a`–`b`.
    ///
    /// Returns the previously cached midpoint, if any.
    pub fn insert(&mut self, a: VertexId, b: VertexId, midpoint: VertexId) -> Option<VertexId> {
        self.midpoints.insert(EdgeKey::new(a, b), midpoint)
    }

    /// Number of cached edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    /// Returns `true` if no edge is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }

    /// Forgets every cached edge.
    pub fn clear(&mut self) {
        self.midpoints.clear();
    }
}
