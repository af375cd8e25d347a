//! Primitive shape generation
//!
//! Generators for the simple shapes used by the default viewer scene.
//! All shapes come with outward-facing per-vertex normals and
//! counter-clockwise winding.

use super::GeometryData;

/// Generates a unit cube centered at the origin.
///
/// Vertices run from -0.5 to 0.5 on every axis. Each face carries its own
/// four vertices so normals stay flat across the face.
pub fn generate_cube() -> GeometryData {
    let mut data = GeometryData::new();

    // (face normal, four corners counter-clockwise seen from outside)
    let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
        (
            [0.0, 0.0, 1.0],
            [
                [-0.5, -0.5, 0.5],
                [0.5, -0.5, 0.5],
                [0.5, 0.5, 0.5],
                [-0.5, 0.5, 0.5],
            ],
        ),
        (
            [0.0, 0.0, -1.0],
            [
                [0.5, -0.5, -0.5],
                [-0.5, -0.5, -0.5],
                [-0.5, 0.5, -0.5],
                [0.5, 0.5, -0.5],
            ],
        ),
        (
            [-1.0, 0.0, 0.0],
            [
                [-0.5, -0.5, -0.5],
                [-0.5, -0.5, 0.5],
                [-0.5, 0.5, 0.5],
                [-0.5, 0.5, -0.5],
            ],
        ),
        (
            [1.0, 0.0, 0.0],
            [
                [0.5, -0.5, 0.5],
                [0.5, -0.5, -0.5],
                [0.5, 0.5, -0.5],
                [0.5, 0.5, 0.5],
            ],
        ),
        (
            [0.0, 1.0, 0.0],
            [
                [-0.5, 0.5, 0.5],
                [0.5, 0.5, 0.5],
                [0.5, 0.5, -0.5],
                [-0.5, 0.5, -0.5],
            ],
        ),
        (
            [0.0, -1.0, 0.0],
            [
                [-0.5, -0.5, -0.5],
                [0.5, -0.5, -0.5],
                [0.5, -0.5, 0.5],
                [-0.5, -0.5, 0.5],
            ],
        ),
    ];

    for (normal, corners) in faces {
        let base = data.vertices.len() as u32;
        for corner in corners {
            data.vertices.push(corner);
            data.normals.push(normal);
        }
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generates a flat plane in the XZ plane, centered at the origin.
///
/// # Arguments
/// * `width` - Extent along X
/// * `depth` - Extent along Z
/// * `subdivisions` - Number of quads per side (minimum 1)
///
/// All normals point up (+Y).
pub fn generate_plane(width: f32, depth: f32, subdivisions: u32) -> GeometryData {
    let mut data = GeometryData::new();
    let segs = subdivisions.max(1);

    for row in 0..=segs {
        let z = (row as f32 / segs as f32 - 0.5) * depth;
        for col in 0..=segs {
            let x = (col as f32 / segs as f32 - 0.5) * width;
            data.vertices.push([x, 0.0, z]);
            data.normals.push([0.0, 1.0, 0.0]);
        }
    }

    let stride = segs + 1;
    for row in 0..segs {
        for col in 0..segs {
            let a = row * stride + col;
            let b = a + 1;
            let c = a + stride;
            let d = c + 1;
            // Counter-clockwise seen from +Y.
            data.indices.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_generation() {
        let cube = generate_cube();
        assert_eq!(cube.vertices.len(), 24); // 6 faces * 4 vertices
        assert_eq!(cube.indices.len(), 36); // 6 faces * 2 triangles * 3 indices
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.normals.len(), cube.vertices.len());
    }

    #[test]
    fn test_cube_normals_are_unit_axis_aligned() {
        let cube = generate_cube();
        for normal in &cube.normals {
            let length_sq: f32 = normal.iter().map(|c| c * c).sum();
            assert!((length_sq - 1.0).abs() < 1e-6);
            assert_eq!(normal.iter().filter(|c| **c != 0.0).count(), 1);
        }
    }

    #[test]
    fn test_plane_generation() {
        let plane = generate_plane(2.0, 2.0, 2);
        assert_eq!(plane.vertices.len(), 9); // 3x3 grid
        assert_eq!(plane.indices.len(), 24); // 4 quads * 2 triangles * 3 indices
        assert!(plane.vertices.iter().all(|v| v[1] == 0.0));
    }

    #[test]
    fn test_plane_subdivisions_clamped_to_one() {
        let plane = generate_plane(1.0, 1.0, 0);
        assert_eq!(plane.vertices.len(), 4);
        assert_eq!(plane.triangle_count(), 2);
    }

    #[test]
    fn test_plane_spans_requested_extent() {
        let plane = generate_plane(10.0, 4.0, 3);
        let min_x = plane.vertices.iter().map(|v| v[0]).fold(f32::MAX, f32::min);
        let max_x = plane.vertices.iter().map(|v| v[0]).fold(f32::MIN, f32::max);
        assert_eq!(min_x, -5.0);
        assert_eq!(max_x, 5.0);
    }

    #[test]
    fn test_indices_stay_in_bounds() {
        for data in [generate_cube(), generate_plane(3.0, 3.0, 4)] {
            let count = data.vertex_count() as u32;
            assert!(data.indices.iter().all(|i| *i < count));
        }
    }
}
