use std::ops::Range;

use meridian_types::cartesian::Point3d;

/// Vertices generated for rendering, owned by the caller.
///
/// The block only grows: every primitive added to it appends its vertices at the end and records their range in the
/// list of [`primitives`](VertexBlock::primitives). The `origin` is not used by the tessellation itself. It is kept
/// with the vertices so that the renderer knows which point the generated vertices are relative to.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBlock<V> {
    vertices: Vec<V>,
    origin: Point3d,
    primitives: Vec<Range<usize>>,
}

impl<V> Default for VertexBlock<V> {
    fn default() -> Self {
        Self::new(Point3d::origin())
    }
}

impl<V> VertexBlock<V> {
    /// Creates an empty block.
    pub fn new(origin: Point3d) -> Self {
        Self {
            vertices: Vec::new(),
            origin,
            primitives: Vec::new(),
        }
    }

    /// Origin point of the block.
    pub fn origin(&self) -> Point3d {
        self.origin
    }

    /// Vertices of the block.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Ranges of vertices of every primitive added to the block, in the order they were added.
    pub fn primitives(&self) -> &[Range<usize>] {
        &self.primitives
    }

    /// Number of vertices in the block.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if no vertices were added to the block.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the vertices of the block, dropping the rest.
    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }

    /// Appends vertices of one primitive and returns their range. Nothing is recorded if the iterator is empty.
    pub(crate) fn append(&mut self, vertices: impl IntoIterator<Item = V>) -> Range<usize> {
        let start = self.vertices.len();
        self.vertices.extend(vertices);
        let end = self.vertices.len();

        if end > start {
            self.primitives.push(start..end);
        }

        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_records_primitives() {
        let mut block = VertexBlock::new(Point3d::new(1.0, 2.0, 3.0));
        assert_eq!(block.append([1, 2, 3]), 0..3);
        assert_eq!(block.append([]), 3..3);
        assert_eq!(block.append([4, 5, 6, 7, 8, 9]), 3..9);

        assert_eq!(block.len(), 9);
        assert_eq!(block.primitives(), &[0..3, 3..9]);
        assert_eq!(block.origin(), Point3d::new(1.0, 2.0, 3.0));
    }
}
