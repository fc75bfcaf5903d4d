//! Open-ended cylinder tessellation
//!
//! Both the prism body (3 radial segments) and the transition-line segments
//! (4 radial segments) are lathed with the same torso layout: one vertex ring
//! per height subdivision, with the seam vertex duplicated so each ring holds
//! `radial_segments + 1` vertices.

use toblerone_core::Point3f;

/// Generate the side surface of an open-ended cylinder centered on the
/// origin, axis along +Y. Ring 0 sits at `+height / 2`, the last ring at
/// `-height / 2`; vertices run seam-to-seam around each ring before stepping
/// down to the next.
pub fn open_cylinder(
    radius: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
) -> (Vec<Point3f>, Vec<[u32; 3]>) {
    let ring = radial_segments + 1;
    let mut positions = Vec::with_capacity((ring * (height_segments + 1)) as usize);
    let half_height = height / 2.0;

    for y in 0..=height_segments {
        let v = y as f32 / height_segments as f32;
        for x in 0..=radial_segments {
            let u = x as f32 / radial_segments as f32;
            let theta = u * std::f32::consts::TAU;
            positions.push(Point3f::new(
                radius * theta.sin(),
                -v * height + half_height,
                radius * theta.cos(),
            ));
        }
    }

    let mut faces = Vec::with_capacity((radial_segments * height_segments * 2) as usize);
    for x in 0..radial_segments {
        for y in 0..height_segments {
            let a = y * ring + x;
            let b = (y + 1) * ring + x;
            let c = (y + 1) * ring + x + 1;
            let d = y * ring + x + 1;
            faces.push([a, b, d]);
            faces.push([b, c, d]);
        }
    }

    (positions, faces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertex_and_face_counts() {
        let (positions, faces) = open_cylinder(15.0, 3.0, 3, 1);
        assert_eq!(positions.len(), 8);
        assert_eq!(faces.len(), 6);

        let (positions, faces) = open_cylinder(0.5, 1.0, 4, 1);
        assert_eq!(positions.len(), 10);
        assert_eq!(faces.len(), 8);
    }

    #[test]
    fn test_rings_straddle_origin() {
        let (positions, _) = open_cylinder(15.0, 4.0, 3, 1);
        for vertex in &positions[..4] {
            assert_relative_eq!(vertex.y, 2.0);
        }
        for vertex in &positions[4..] {
            assert_relative_eq!(vertex.y, -2.0);
        }
    }

    #[test]
    fn test_seam_vertex_duplicated() {
        let (positions, _) = open_cylinder(15.0, 1.0, 3, 1);
        assert_relative_eq!(positions[0].x, positions[3].x, epsilon = 1e-4);
        assert_relative_eq!(positions[0].z, positions[3].z, epsilon = 1e-4);
    }

    #[test]
    fn test_vertices_sit_on_radius() {
        let (positions, _) = open_cylinder(15.0, 2.0, 3, 1);
        for vertex in &positions {
            let radial = (vertex.x * vertex.x + vertex.z * vertex.z).sqrt();
            assert_relative_eq!(radial, 15.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_face_indices_in_bounds() {
        let (positions, faces) = open_cylinder(1.0, 1.0, 4, 1);
        for face in &faces {
            for &index in face {
                assert!((index as usize) < positions.len());
            }
        }
    }
}
