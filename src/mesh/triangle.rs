use super::VertexId;

/// A triangle of the working set, referencing its corners by vertex ID.
///
/// The corner order is the winding order of the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub p1: VertexId,
    pub p2: VertexId,
    pub p3: VertexId,
}

impl Triangle {
    /// Creates a new triangle from three corner IDs.
    #[must_use]
    pub fn new(p1: VertexId, p2: VertexId, p3: VertexId) -> Self {
        Self { p1, p2, p3 }
    }

    /// Corner IDs in winding order.
    #[must_use]
    pub fn corners(&self) -> [VertexId; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// The three directed edges `(p1, p2)`, `(p2, p3)`, `(p3, p1)`.
    #[must_use]
    pub fn edges(&self) -> [(VertexId, VertexId); 3] {
        [(self.p1, self.p2), (self.p2, self.p3), (self.p3, self.p1)]
    }

    /// Returns `true` if all three corners are distinct vertices.
    #[must_use]
    pub fn has_distinct_corners(&self) -> bool {
        self.p1 != self.p2 && self.p2 != self.p3 && self.p3 != self.p1
    }
}
