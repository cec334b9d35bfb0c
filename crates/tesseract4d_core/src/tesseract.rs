//! Tesseract (4D Hypercube) generation
//!
//! A tesseract has 16 vertices (all combinations of ±1 for x,y,z,w),
//! 32 edges, 24 faces (squares), and 8 cells (cubes).
//!
//! Vertex `i` has axis `k` at +1 when bit `k` of `i` is set and -1 otherwise,
//! so x is the fastest-changing coordinate. Edges and faces are derived from
//! the coordinates, not from the bit pattern, and then validated.

use tesseract4d_math::{Axis, Vec4};

use crate::{Edge, Face, Polytope, PolytopeError, Shape4D};

/// Tesseract vertex count
pub const TESSERACT_VERTICES: usize = 16;
/// Tesseract edge count
pub const TESSERACT_EDGES: usize = 32;
/// Tesseract square face count
pub const TESSERACT_FACES: usize = 24;

/// Length of every edge of the canonical tesseract
pub const EDGE_LENGTH: f64 = 2.0;

const GEOMETRY_TOLERANCE: f64 = 1e-9;

/// Generate the canonical tesseract with vertices at (±1, ±1, ±1, ±1).
///
/// The result is validated before it is returned; a failure here means the
/// generator itself is broken.
pub fn build_tesseract() -> Result<Polytope, PolytopeError> {
    let vertices = tesseract_vertices();
    let edges = tesseract_edges(&vertices);
    let faces = tesseract_faces(&vertices);

    let polytope = Polytope::new(vertices, edges, faces)?;
    validate_tesseract(&polytope)?;

    log::info!(
        "Built tesseract: {} vertices, {} edges, {} faces",
        polytope.vertex_count(),
        polytope.edge_count(),
        polytope.face_count()
    );
    Ok(polytope)
}

/// All 16 sign combinations, in binary counting order
fn tesseract_vertices() -> Vec<Vec4> {
    (0..TESSERACT_VERTICES)
        .map(|i| {
            let s = |axis: Axis| if i & (1 << axis.index()) != 0 { 1.0 } else { -1.0 };
            Vec4::new(s(Axis::X), s(Axis::Y), s(Axis::Z), s(Axis::W))
        })
        .collect()
}

/// Pairs whose coordinates differ by exactly 2 in total.
///
/// With every coordinate at ±1, a total absolute difference of 2 means
/// exactly one axis flips sign.
fn tesseract_edges(vertices: &[Vec4]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(TESSERACT_EDGES);
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            let diff = (vertices[i] - vertices[j]).abs().component_sum();
            if diff == EDGE_LENGTH {
                edges.push(Edge::new(i, j));
            }
        }
    }
    edges
}

/// One square per (axis pair, signs of the two remaining axes).
///
/// The four matching vertices are ordered by polar angle around their
/// centroid within the face's plane, which always yields a simple loop rather
/// than a bowtie.
fn tesseract_faces(vertices: &[Vec4]) -> Vec<Face> {
    let mut faces = Vec::with_capacity(TESSERACT_FACES);
    for (ai, &a) in Axis::ALL.iter().enumerate() {
        for &b in &Axis::ALL[ai + 1..] {
            let fixed: Vec<Axis> = Axis::ALL.into_iter().filter(|&k| k != a && k != b).collect();
            for sa in [-1.0, 1.0] {
                for sb in [-1.0, 1.0] {
                    let members: Vec<usize> = (0..vertices.len())
                        .filter(|&i| vertices[i].get(fixed[0]) == sa && vertices[i].get(fixed[1]) == sb)
                        .collect();
                    faces.push(Face::new(order_by_angle(vertices, members, a, b)));
                }
            }
        }
    }
    faces
}

/// Sort indices by ascending polar angle around their centroid in the (a, b) plane
fn order_by_angle(vertices: &[Vec4], mut members: Vec<usize>, a: Axis, b: Axis) -> Vec<usize> {
    let centroid = members
        .iter()
        .fold(Vec4::ZERO, |acc, &i| acc + vertices[i])
        / members.len() as f64;
    let angle = |i: usize| {
        let rel = vertices[i] - centroid;
        rel.get(b).atan2(rel.get(a))
    };
    members.sort_by(|&i, &j| angle(i).total_cmp(&angle(j)));
    members
}

/// Check the canonical tesseract's invariants.
///
/// - 16 vertices, 32 edges, 24 faces
/// - every coordinate is -1 or +1
/// - every edge joins vertices differing in exactly one axis, with length 2
/// - every face has 4 vertices, 4 sides of length 2 that are all edges, and
///   lies in a single plane
pub fn validate_tesseract(polytope: &Polytope) -> Result<(), PolytopeError> {
    expect_count("vertices", TESSERACT_VERTICES, polytope.vertex_count())?;
    expect_count("edges", TESSERACT_EDGES, polytope.edge_count())?;
    expect_count("faces", TESSERACT_FACES, polytope.face_count())?;

    let vertices = polytope.vertices();
    for (i, v) in vertices.iter().enumerate() {
        if v.to_array().iter().any(|c| c.abs() != 1.0) {
            return Err(PolytopeError::Geometry(format!(
                "vertex {} = {:?} is not a ±1 corner",
                i, v
            )));
        }
    }

    for edge in polytope.edges() {
        let (i, j) = edge.endpoints();
        let delta = vertices[i] - vertices[j];
        let differing = delta.to_array().iter().filter(|c| **c != 0.0).count();
        let length = delta.length();
        if differing != 1 || (length - EDGE_LENGTH).abs() > GEOMETRY_TOLERANCE {
            return Err(PolytopeError::Geometry(format!(
                "edge ({}, {}) differs in {} axes with length {}",
                i, j, differing, length
            )));
        }
    }

    for (f, face) in polytope.faces().iter().enumerate() {
        if face.len() != 4 {
            return Err(PolytopeError::Geometry(format!(
                "face {} has {} vertices, expected 4",
                f,
                face.len()
            )));
        }
        for (i, j) in face.sides() {
            let side = (vertices[i] - vertices[j]).length();
            if (side - EDGE_LENGTH).abs() > GEOMETRY_TOLERANCE || !polytope.has_edge(i, j) {
                return Err(PolytopeError::Geometry(format!(
                    "face {} side ({}, {}) has length {} or is not an edge",
                    f, i, j, side
                )));
            }
        }
        if !is_planar(&polytope.face_vertices(face)) {
            return Err(PolytopeError::Geometry(format!("face {} is not planar", f)));
        }
    }

    Ok(())
}

fn expect_count(element: &'static str, expected: usize, actual: usize) -> Result<(), PolytopeError> {
    if expected == actual {
        Ok(())
    } else {
        Err(PolytopeError::CountMismatch { element, expected, actual })
    }
}

/// Points are coplanar when the vectors from the first point span at most two
/// dimensions, i.e. the Gram determinant of the first three spanning vectors
/// vanishes. Only the first four points are examined.
fn is_planar(points: &[Vec4]) -> bool {
    if points.len() < 4 {
        return true;
    }
    let e = [points[1] - points[0], points[2] - points[0], points[3] - points[0]];
    let g = |i: usize, j: usize| e[i].dot(e[j]);
    let gram = g(0, 0) * (g(1, 1) * g(2, 2) - g(1, 2) * g(2, 1))
        - g(0, 1) * (g(1, 0) * g(2, 2) - g(1, 2) * g(2, 0))
        + g(0, 2) * (g(1, 0) * g(2, 1) - g(1, 1) * g(2, 0));
    gram.abs() <= GEOMETRY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn tesseract() -> Polytope {
        build_tesseract().expect("tesseract generation must succeed")
    }

    #[test]
    fn test_counts() {
        let t = tesseract();
        assert_eq!(t.vertex_count(), 16);
        assert_eq!(t.edge_count(), 32);
        assert_eq!(t.face_count(), 24);
    }

    #[test]
    fn test_vertex_order_is_binary_counting() {
        let t = tesseract();
        assert_eq!(t.vertices()[0], Vec4::new(-1.0, -1.0, -1.0, -1.0));
        assert_eq!(t.vertices()[1], Vec4::new(1.0, -1.0, -1.0, -1.0));
        assert_eq!(t.vertices()[8], Vec4::new(-1.0, -1.0, -1.0, 1.0));
        assert_eq!(t.vertices()[15], Vec4::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_all_coordinates_are_unit_signs() {
        for v in tesseract().vertices() {
            for c in v.to_array() {
                assert!(c == 1.0 || c == -1.0);
            }
        }
    }

    #[test]
    fn test_edges_flip_exactly_one_axis() {
        let t = tesseract();
        for edge in t.edges() {
            let (i, j) = edge.endpoints();
            assert_eq!((i ^ j).count_ones(), 1, "edge ({}, {})", i, j);
            assert_eq!((t.vertices()[i] - t.vertices()[j]).length(), 2.0);
        }
    }

    #[test]
    fn test_every_vertex_has_four_neighbours() {
        let t = tesseract();
        for v in 0..16 {
            let degree = t.edges().iter().filter(|e| e.other(v).is_some()).count();
            assert_eq!(degree, 4);
        }
    }

    #[test]
    fn test_no_duplicate_edges_or_faces() {
        let t = tesseract();
        let edges: HashSet<_> = t.edges().iter().copied().collect();
        assert_eq!(edges.len(), 32);
        let faces: HashSet<_> = t.faces().iter().map(Face::canonical).collect();
        assert_eq!(faces.len(), 24);
    }

    #[test]
    fn test_faces_are_planar_squares() {
        let t = tesseract();
        for face in t.faces() {
            assert_eq!(face.len(), 4);
            for (i, j) in face.sides() {
                assert_eq!((t.vertices()[i] - t.vertices()[j]).length(), 2.0);
            }
            assert!(is_planar(&t.face_vertices(face)));
        }
    }

    #[test]
    fn test_face_loops_are_not_bowties() {
        // Diagonals of a square of side 2 have length 2√2; a bowtie ordering
        // would put a diagonal on the perimeter.
        let t = tesseract();
        for face in t.faces() {
            let idx = face.indices();
            let d0 = (t.vertices()[idx[0]] - t.vertices()[idx[2]]).length();
            let d1 = (t.vertices()[idx[1]] - t.vertices()[idx[3]]).length();
            assert!((d0 - 8.0f64.sqrt()).abs() < 1e-12);
            assert!((d1 - 8.0f64.sqrt()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_first_face_order() {
        // xy-plane face with z = w = -1, sorted by angle from -π upward
        let t = tesseract();
        assert_eq!(t.faces()[0].indices(), &[0, 1, 3, 2]);
    }

    #[test]
    fn test_each_axis_pair_has_four_faces() {
        let t = tesseract();
        let mut per_plane = std::collections::HashMap::new();
        for face in t.faces() {
            let pts = t.face_vertices(face);
            let varying: Vec<usize> = (0..4)
                .filter(|&k| pts.iter().any(|p| p.to_array()[k] != pts[0].to_array()[k]))
                .collect();
            *per_plane.entry(varying).or_insert(0) += 1;
        }
        assert_eq!(per_plane.len(), 6);
        assert!(per_plane.values().all(|&n| n == 4));
    }

    #[test]
    fn test_circumradius() {
        assert_eq!(tesseract().circumradius(), 2.0);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = tesseract();
        let b = tesseract();
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.edges(), b.edges());
        assert_eq!(a.faces(), b.faces());
    }

    #[test]
    fn test_validation_catches_missing_edge() {
        let t = tesseract();
        let mut edges = t.edges().to_vec();
        edges.pop();
        let broken = Polytope::new(t.vertices().to_vec(), edges, t.faces().to_vec()).unwrap();
        assert_eq!(
            validate_tesseract(&broken),
            Err(PolytopeError::CountMismatch { element: "edges", expected: 32, actual: 31 })
        );
    }

    #[test]
    fn test_validation_catches_diagonal_edge() {
        let t = tesseract();
        let mut edges = t.edges().to_vec();
        edges[0] = Edge::new(0, 3);
        let broken = Polytope::new(t.vertices().to_vec(), edges, t.faces().to_vec()).unwrap();
        assert!(matches!(validate_tesseract(&broken), Err(PolytopeError::Geometry(_))));
    }

    #[test]
    fn test_validation_catches_bowtie_face() {
        let t = tesseract();
        let mut faces = t.faces().to_vec();
        faces[0] = Face::new(vec![0, 1, 2, 3]);
        let broken = Polytope::new(t.vertices().to_vec(), t.edges().to_vec(), faces).unwrap();
        assert!(matches!(validate_tesseract(&broken), Err(PolytopeError::Geometry(_))));
    }

    #[test]
    fn test_planarity_check() {
        let flat = [
            Vec4::new(0.0, 0.0, 0.0, 0.0),
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(1.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
        ];
        assert!(is_planar(&flat));
        let mut bent = flat;
        bent[3].w = 1.0;
        assert!(!is_planar(&bent));
    }
}
