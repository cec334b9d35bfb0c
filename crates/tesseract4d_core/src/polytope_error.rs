//! Polytope consistency errors
//!
//! Every variant means the combinatorial or geometric structure of a polytope
//! is malformed. Generation is deterministic, so outside of tests these only
//! surface from a bug in a builder.

use std::fmt;

/// Error type for polytope construction and validation
#[derive(Debug, Clone, PartialEq)]
pub enum PolytopeError {
    /// Vertex, edge or face count differs from what the shape requires
    CountMismatch {
        element: &'static str,
        expected: usize,
        actual: usize,
    },
    /// An edge or face refers to a vertex that does not exist
    IndexOutOfRange { index: usize, vertex_count: usize },
    /// An edge joins a vertex to itself
    SelfLoop(usize),
    /// The same unordered pair appears twice
    DuplicateEdge(usize, usize),
    /// A face with fewer than three vertices or a repeated vertex
    DegenerateFace(usize),
    /// Two faces share the same vertex set
    DuplicateFace(usize),
    /// A vertex, edge or face violates the shape's geometric invariant
    Geometry(String),
}

impl fmt::Display for PolytopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Malformed polytope: ")?;
        match self {
            PolytopeError::CountMismatch { element, expected, actual } => {
                write!(f, "expected {} {}, found {}", expected, element, actual)
            }
            PolytopeError::IndexOutOfRange { index, vertex_count } => {
                write!(f, "vertex index {} out of range (have {})", index, vertex_count)
            }
            PolytopeError::SelfLoop(i) => write!(f, "edge joins vertex {} to itself", i),
            PolytopeError::DuplicateEdge(a, b) => write!(f, "duplicate edge ({}, {})", a, b),
            PolytopeError::DegenerateFace(i) => write!(f, "face {} is degenerate", i),
            PolytopeError::DuplicateFace(i) => write!(f, "face {} duplicates an earlier face", i),
            PolytopeError::Geometry(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PolytopeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_mismatch_display() {
        let err = PolytopeError::CountMismatch { element: "edges", expected: 32, actual: 31 };
        assert_eq!(format!("{}", err), "Malformed polytope: expected 32 edges, found 31");
    }

    #[test]
    fn test_index_display() {
        let err = PolytopeError::IndexOutOfRange { index: 20, vertex_count: 16 };
        let msg = format!("{}", err);
        assert!(msg.contains("20"));
        assert!(msg.contains("16"));
    }

    #[test]
    fn test_geometry_display() {
        let err = PolytopeError::Geometry("edge (0, 3) has length 2.83".to_string());
        assert!(format!("{}", err).ends_with("edge (0, 3) has length 2.83"));
    }
}
