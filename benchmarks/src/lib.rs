//! Shared setup for the seam correction benchmarks.

use glam::Vec3;
use rein_seam::{ChildManifold, Contact, ConvexContactManifold, Triangle};

/// A flat `n` x `n` grid of unit quads facing +Y, two triangles per quad.
pub fn setup_grid_mesh(n: usize) -> Vec<Triangle> {
    let mut triangles = Vec::with_capacity(n * n * 2);
    for row in 0..n {
        for col in 0..n {
            let x = col as f32;
            let z = row as f32;
            let p00 = Vec3::new(x, 0.0, z);
            let p10 = Vec3::new(x + 1.0, 0.0, z);
            let p01 = Vec3::new(x, 0.0, z + 1.0);
            let p11 = Vec3::new(x + 1.0, 0.0, z + 1.0);
            triangles.push(Triangle::new(p00, p01, p10));
            triangles.push(Triangle::new(p10, p01, p11));
        }
    }
    triangles
}

/// One child per triangle. Even children touch their triangle's interior with the
/// face normal; odd children sit on edge AB with a normal leaning across it.
pub fn setup_seam_children(triangles: &[Triangle]) -> Vec<ChildManifold> {
    triangles
        .iter()
        .enumerate()
        .map(|(i, triangle)| {
            let face = -triangle.normal();
            let manifold = if i % 2 == 0 {
                let mut manifold = ConvexContactManifold::new(face, Vec3::ZERO);
                let centroid = (triangle.a + triangle.b + triangle.c) / 3.0;
                assert!(manifold.push(Contact::new(centroid, 0.02, 0)));
                manifold
            } else {
                let edge = triangle.b - triangle.a;
                let outward = edge.cross(triangle.normal()).normalize_or_zero();
                let leaning = (face + outward * 0.5).normalize();
                let mut manifold = ConvexContactManifold::new(leaning, Vec3::ZERO);
                assert!(manifold.push(Contact::new(triangle.a + edge * 0.5, 0.02, 0)));
                assert!(manifold.push(Contact::new(triangle.a + edge * 0.25, 0.01, 1)));
                manifold
            };
            ChildManifold {
                manifold,
                triangle_index: i,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_mesh_faces_up() {
        let triangles = setup_grid_mesh(2);
        assert_eq!(triangles.len(), 8);
        for triangle in &triangles {
            assert!((triangle.normal() - Vec3::Y).length() < 1e-6);
        }
    }

    #[test]
    fn test_seam_children_match_triangles() {
        let triangles = setup_grid_mesh(2);
        let children = setup_seam_children(&triangles);
        assert_eq!(children.len(), triangles.len());
        assert!(children.iter().all(|child| !child.manifold.is_empty()));
    }
}
