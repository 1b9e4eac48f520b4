//! # Primitive Shape Generation
//!
//! Generates the platonic solids used by the hero scene. All solids are
//! centered at the origin with their circumradius equal to the requested
//! radius, flat-shaded with one normal per face.
//!
//! The dodecahedron is built as the dual of an icosahedron: its 20
//! vertices are the normalized centroids of the icosahedron's 20 faces,
//! and each of its 12 pentagons corresponds to one icosahedron vertex.

use super::GeometryData;

const PHI: f32 = 1.618_034;

/// Icosahedron vertex/face tables used to derive the dodecahedron.
fn icosahedron() -> ([[f32; 3]; 12], [[usize; 3]; 20]) {
    let t = PHI;
    let vertices = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    let faces = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    (vertices, faces)
}

/// The dodecahedron's 20 unit-sphere vertices plus its 12 pentagonal
/// faces, each pentagon wound counter-clockwise viewed from outside.
fn dodecahedron_pentagons() -> (Vec<[f32; 3]>, Vec<[usize; 5]>) {
    let (ico_vertices, ico_faces) = icosahedron();

    // One dodecahedron vertex per icosahedron face
    let centroids: Vec<[f32; 3]> = ico_faces
        .iter()
        .map(|face| {
            let mut c = [0.0f32; 3];
            for &vi in face {
                c[0] += ico_vertices[vi][0];
                c[1] += ico_vertices[vi][1];
                c[2] += ico_vertices[vi][2];
            }
            normalize(c)
        })
        .collect();

    // One pentagon per icosahedron vertex: the five faces meeting there,
    // ordered by angle around the vertex direction.
    let mut pentagons = Vec::with_capacity(12);
    for vi in 0..12 {
        let mut ring: Vec<usize> = (0..20).filter(|&fi| ico_faces[fi].contains(&vi)).collect();
        debug_assert_eq!(ring.len(), 5);

        let d = normalize(ico_vertices[vi]);
        let helper = if d[0].abs() < 0.9 {
            [1.0, 0.0, 0.0]
        } else {
            [0.0, 1.0, 0.0]
        };
        let u = normalize(cross(d, helper));
        let w = cross(d, u);

        ring.sort_by(|&a, &b| {
            let angle = |c: [f32; 3]| dot(c, w).atan2(dot(c, u));
            angle(centroids[a]).total_cmp(&angle(centroids[b]))
        });

        // Flip the ring if the sort produced clockwise winding
        let n = cross(
            sub(centroids[ring[1]], centroids[ring[0]]),
            sub(centroids[ring[2]], centroids[ring[0]]),
        );
        if dot(n, d) < 0.0 {
            ring.reverse();
        }

        pentagons.push([ring[0], ring[1], ring[2], ring[3], ring[4]]);
    }

    (centroids, pentagons)
}

/// Generate a flat-shaded dodecahedron with the given circumradius.
///
/// Each of the 12 pentagons contributes 5 vertices sharing the face
/// normal and 3 fan triangles, so the result has 60 vertices and 36
/// triangles.
pub fn generate_dodecahedron(radius: f32) -> GeometryData {
    let (unit_vertices, pentagons) = dodecahedron_pentagons();
    let mut data = GeometryData::new();

    for pentagon in &pentagons {
        // Pentagon face normal points along the centroid direction
        let mut center = [0.0f32; 3];
        for &vi in pentagon {
            center[0] += unit_vertices[vi][0];
            center[1] += unit_vertices[vi][1];
            center[2] += unit_vertices[vi][2];
        }
        let normal = normalize(center);

        let base = data.vertices.len() as u32;
        for &vi in pentagon {
            data.vertices.push(scale(unit_vertices[vi], radius));
            data.normals.push(normal);
        }
        for i in 1..4 {
            data.indices.push(base);
            data.indices.push(base + i);
            data.indices.push(base + i + 1);
        }
    }

    data
}

/// Generate the dodecahedron's 30 edges as a line list.
///
/// Returns 20 vertices at the given circumradius and 60 indices (one pair
/// per edge); render with a line-list topology.
pub fn generate_dodecahedron_edges(radius: f32) -> GeometryData {
    let (unit_vertices, pentagons) = dodecahedron_pentagons();
    let mut data = GeometryData::new();

    for v in &unit_vertices {
        data.vertices.push(scale(*v, radius));
        data.normals.push(*v);
    }

    let mut edges: Vec<(u32, u32)> = Vec::new();
    for pentagon in &pentagons {
        for i in 0..5 {
            let a = pentagon[i] as u32;
            let b = pentagon[(i + 1) % 5] as u32;
            let edge = (a.min(b), a.max(b));
            if !edges.contains(&edge) {
                edges.push(edge);
            }
        }
    }

    for (a, b) in edges {
        data.indices.push(a);
        data.indices.push(b);
    }

    data
}

/// Generate a flat-shaded octahedron with the given circumradius.
///
/// 8 triangular faces with duplicated vertices, 24 vertices total.
pub fn generate_octahedron(radius: f32) -> GeometryData {
    let r = radius;
    let corners = [
        [r, 0.0, 0.0],
        [-r, 0.0, 0.0],
        [0.0, r, 0.0],
        [0.0, -r, 0.0],
        [0.0, 0.0, r],
        [0.0, 0.0, -r],
    ];
    // Counter-clockwise viewed from outside
    let faces = [
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];

    let mut data = GeometryData::new();
    for face in &faces {
        let mut center = [0.0f32; 3];
        for &vi in face {
            center[0] += corners[vi][0];
            center[1] += corners[vi][1];
            center[2] += corners[vi][2];
        }
        let normal = normalize(center);

        let base = data.vertices.len() as u32;
        for &vi in face {
            data.vertices.push(corners[vi]);
            data.normals.push(normal);
        }
        data.indices.push(base);
        data.indices.push(base + 1);
        data.indices.push(base + 2);
    }

    data
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let length = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    [v[0] / length, v[1] / length, v[2] / length]
}

fn scale(v: [f32; 3], s: f32) -> [f32; 3] {
    [v[0] * s, v[1] * s, v[2] * s]
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_dodecahedron_generation() {
        let dodeca = generate_dodecahedron(1.2);
        assert_eq!(dodeca.vertices.len(), 60); // 12 pentagons * 5 vertices
        assert_eq!(dodeca.indices.len(), 108); // 12 pentagons * 3 triangles * 3 indices
        assert_eq!(dodeca.triangle_count(), 36);
        for v in &dodeca.vertices {
            assert!((length(*v) - 1.2).abs() < 1e-4);
        }
        for n in &dodeca.normals {
            assert!((length(*n) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_dodecahedron_normals_point_outward() {
        let dodeca = generate_dodecahedron(1.0);
        for (v, n) in dodeca.vertices.iter().zip(dodeca.normals.iter()) {
            assert!(dot(*v, *n) > 0.0);
        }
    }

    #[test]
    fn test_dodecahedron_edge_generation() {
        let edges = generate_dodecahedron_edges(1.25);
        assert_eq!(edges.vertices.len(), 20);
        assert_eq!(edges.indices.len(), 60); // 30 edges * 2 endpoints
        for v in &edges.vertices {
            assert!((length(*v) - 1.25).abs() < 1e-4);
        }

        // All edges of a regular dodecahedron have the same length
        let edge_length = |a: u32, b: u32| {
            length(sub(
                edges.vertices[a as usize],
                edges.vertices[b as usize],
            ))
        };
        let first = edge_length(edges.indices[0], edges.indices[1]);
        for pair in edges.indices.chunks(2) {
            assert!((edge_length(pair[0], pair[1]) - first).abs() < 1e-4);
        }
    }

    #[test]
    fn test_octahedron_generation() {
        let octa = generate_octahedron(0.3);
        assert_eq!(octa.vertices.len(), 24); // 8 faces * 3 vertices
        assert_eq!(octa.indices.len(), 24);
        assert_eq!(octa.triangle_count(), 8);
        for v in &octa.vertices {
            assert!((length(*v) - 0.3).abs() < 1e-5);
        }
    }
}
