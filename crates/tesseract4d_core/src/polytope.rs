//! Polytope combinatorics
//!
//! A polytope is pure geometric data: an ordered vertex list plus edges and
//! faces expressed as indices into it. Indices are stable for the lifetime of
//! the polytope, and the polytope is never mutated after construction;
//! rotation produces transformed copies of the vertices instead.

use std::collections::HashSet;

use tesseract4d_math::Vec4;

use crate::PolytopeError;

/// An unordered pair of vertex indices, stored with `a < b`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    /// Create an edge; endpoint order does not matter
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }

    /// Endpoints, smaller index first
    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    /// The endpoint opposite `i`, if `i` is on this edge
    pub fn other(&self, i: usize) -> Option<usize> {
        if i == self.a {
            Some(self.b)
        } else if i == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// A closed loop of vertex indices in winding order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    indices: Vec<usize>,
}

impl Face {
    #[inline]
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Consecutive vertex pairs around the loop, including the closing side
    pub fn sides(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |k| (self.indices[k], self.indices[(k + 1) % n]))
    }

    /// Sorted vertex set (canonical form for duplicate detection)
    pub fn canonical(&self) -> Vec<usize> {
        let mut sorted = self.indices.clone();
        sorted.sort_unstable();
        sorted
    }
}

/// Read-only view of a 4D shape's structure
///
/// Shapes are pure geometry - they contain no rendering-specific data
/// like colors or orientation.
pub trait Shape4D: Send + Sync {
    /// Get the vertices of this shape
    fn vertices(&self) -> &[Vec4];

    /// Get the edges of this shape
    fn edges(&self) -> &[Edge];

    /// Get the faces of this shape
    fn faces(&self) -> &[Face];

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces().len()
    }
}

/// Immutable vertex/edge/face structure
#[derive(Clone, Debug)]
pub struct Polytope {
    vertices: Vec<Vec4>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
}

impl Polytope {
    /// Build a polytope after checking its structural invariants:
    /// every index in range, no self-loops, no duplicate edges, faces of at
    /// least three distinct vertices, and no two faces on the same vertex set.
    pub fn new(vertices: Vec<Vec4>, edges: Vec<Edge>, faces: Vec<Face>) -> Result<Self, PolytopeError> {
        let vertex_count = vertices.len();
        let check_index = |index: usize| {
            if index < vertex_count {
                Ok(())
            } else {
                Err(PolytopeError::IndexOutOfRange { index, vertex_count })
            }
        };

        let mut seen_edges = HashSet::with_capacity(edges.len());
        for edge in &edges {
            let (a, b) = edge.endpoints();
            check_index(a)?;
            check_index(b)?;
            if a == b {
                return Err(PolytopeError::SelfLoop(a));
            }
            if !seen_edges.insert(*edge) {
                return Err(PolytopeError::DuplicateEdge(a, b));
            }
        }

        let mut seen_faces = HashSet::with_capacity(faces.len());
        for (i, face) in faces.iter().enumerate() {
            for &index in face.indices() {
                check_index(index)?;
            }
            let canonical = face.canonical();
            let distinct = canonical.windows(2).all(|w| w[0] != w[1]);
            if face.len() < 3 || !distinct {
                return Err(PolytopeError::DegenerateFace(i));
            }
            if !seen_faces.insert(canonical) {
                return Err(PolytopeError::DuplicateFace(i));
            }
        }

        Ok(Self { vertices, edges, faces })
    }

    /// Largest distance from the origin to a vertex.
    ///
    /// Rotation about the origin preserves vertex norms, so no orientation can
    /// push a vertex's w beyond this value.
    pub fn circumradius(&self) -> f64 {
        self.vertices
            .iter()
            .map(|v| v.length())
            .fold(0.0, f64::max)
    }

    /// Whether the unordered pair is an edge
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        let edge = Edge::new(i, j);
        self.edges.contains(&edge)
    }

    /// Vertex positions of a face, in winding order
    pub fn face_vertices(&self, face: &Face) -> Vec<Vec4> {
        face.indices().iter().map(|&i| self.vertices[i]).collect()
    }
}

impl Shape4D for Polytope {
    fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn faces(&self) -> &[Face] {
        &self.faces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> (Vec<Vec4>, Vec<Edge>, Vec<Face>) {
        let vertices = vec![
            Vec4::new(-1.0, -1.0, 0.0, 0.0),
            Vec4::new(1.0, -1.0, 0.0, 0.0),
            Vec4::new(1.0, 1.0, 0.0, 0.0),
            Vec4::new(-1.0, 1.0, 0.0, 0.0),
        ];
        let edges = vec![Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 0)];
        let faces = vec![Face::new(vec![0, 1, 2, 3])];
        (vertices, edges, faces)
    }

    #[test]
    fn test_edge_is_unordered() {
        assert_eq!(Edge::new(3, 1), Edge::new(1, 3));
        assert_eq!(Edge::new(3, 1).endpoints(), (1, 3));
    }

    #[test]
    fn test_edge_other() {
        let e = Edge::new(4, 9);
        assert_eq!(e.other(4), Some(9));
        assert_eq!(e.other(9), Some(4));
        assert_eq!(e.other(5), None);
    }

    #[test]
    fn test_face_sides_close_the_loop() {
        let face = Face::new(vec![0, 1, 3, 2]);
        let sides: Vec<_> = face.sides().collect();
        assert_eq!(sides, vec![(0, 1), (1, 3), (3, 2), (2, 0)]);
    }

    #[test]
    fn test_face_canonical() {
        assert_eq!(Face::new(vec![3, 0, 2, 1]).canonical(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_valid_square() {
        let (v, e, f) = square();
        let p = Polytope::new(v, e, f).unwrap();
        assert_eq!(p.vertex_count(), 4);
        assert_eq!(p.edge_count(), 4);
        assert_eq!(p.face_count(), 1);
        assert!(p.has_edge(0, 3));
        assert!(!p.has_edge(0, 2));
        assert!((p.circumradius() - 2.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_edge_index_out_of_range() {
        let (v, mut e, f) = square();
        e.push(Edge::new(0, 7));
        assert_eq!(
            Polytope::new(v, e, f).unwrap_err(),
            PolytopeError::IndexOutOfRange { index: 7, vertex_count: 4 }
        );
    }

    #[test]
    fn test_self_loop_rejected() {
        let (v, mut e, f) = square();
        e.push(Edge::new(2, 2));
        assert_eq!(Polytope::new(v, e, f).unwrap_err(), PolytopeError::SelfLoop(2));
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let (v, mut e, f) = square();
        e.push(Edge::new(1, 0));
        assert_eq!(Polytope::new(v, e, f).unwrap_err(), PolytopeError::DuplicateEdge(0, 1));
    }

    #[test]
    fn test_small_face_rejected() {
        let (v, e, mut f) = square();
        f.push(Face::new(vec![0, 1]));
        assert_eq!(Polytope::new(v, e, f).unwrap_err(), PolytopeError::DegenerateFace(1));
    }

    #[test]
    fn test_repeated_vertex_in_face_rejected() {
        let (v, e, _) = square();
        let f = vec![Face::new(vec![0, 1, 1, 2])];
        assert_eq!(Polytope::new(v, e, f).unwrap_err(), PolytopeError::DegenerateFace(0));
    }

    #[test]
    fn test_duplicate_face_rejected() {
        let (v, e, mut f) = square();
        f.push(Face::new(vec![2, 3, 0, 1]));
        assert_eq!(Polytope::new(v, e, f).unwrap_err(), PolytopeError::DuplicateFace(1));
    }

    #[test]
    fn test_face_vertices_in_winding_order() {
        let (v, e, f) = square();
        let p = Polytope::new(v, e, f).unwrap();
        let loop_points = p.face_vertices(&p.faces()[0]);
        assert_eq!(loop_points[2], Vec4::new(1.0, 1.0, 0.0, 0.0));
    }
}
