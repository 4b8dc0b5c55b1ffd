//! Abstract spatial query interface for culling and broad-phase collision
//!
//! Lets the frame loop swap the quadtree for an exhaustive scan (the
//! "culling off" mode) without changing how it draws or collides.

use crate::field::{ObstacleField, ObstacleRecord};
use crate::foundation::math::Point2;
use crate::physics::Quad;
use crate::render::RenderSink;
use crate::spatial::Quadtree;

/// Visibility and proximity queries over a static asteroid field
pub trait SpatialQuery {
    /// Submit the asteroids to draw for a frame whose ground-plane frustum is `frustum`
    fn draw_visible(&self, frustum: &Quad, sink: &mut dyn RenderSink);

    /// Collision candidates for a disc at (`x`, `z`) with `radius`
    fn gather_within(&self, x: f32, z: f32, radius: f32) -> Vec<ObstacleRecord>;

    /// Number of field slots covered by the query structure
    fn obstacle_count(&self) -> usize;
}

impl SpatialQuery for Quadtree {
    fn draw_visible(&self, frustum: &Quad, sink: &mut dyn RenderSink) {
        Quadtree::draw_visible(self, frustum, sink);
    }

    fn gather_within(&self, x: f32, z: f32, radius: f32) -> Vec<ObstacleRecord> {
        Quadtree::gather_within(self, x, z, radius)
    }

    fn obstacle_count(&self) -> usize {
        Quadtree::obstacle_count(self)
    }
}

/// Exhaustive scan over every field slot
///
/// Draws every existing asteroid regardless of the frustum and tests every
/// asteroid for proximity. This is the baseline the quadtree is measured
/// against.
#[derive(Debug, Clone, Copy)]
pub struct LinearScan<'a> {
    field: &'a ObstacleField,
}

impl<'a> LinearScan<'a> {
    /// Scan over `field`
    pub fn new(field: &'a ObstacleField) -> Self {
        Self { field }
    }
}

impl SpatialQuery for LinearScan<'_> {
    fn draw_visible(&self, _frustum: &Quad, sink: &mut dyn RenderSink) {
        for (_, record) in self.field.iter_occupied() {
            sink.draw_obstacle(record.render_index);
        }
    }

    fn gather_within(&self, x: f32, z: f32, radius: f32) -> Vec<ObstacleRecord> {
        if radius < 0.0 {
            return Vec::new();
        }
        let center = Point2::new(x, z);
        self.field
            .iter_occupied()
            .map(|(_, record)| record)
            .filter(|record| {
                let reach = radius + record.radius;
                (record.ground_center() - center).magnitude_squared() <= reach * reach
            })
            .collect()
    }

    fn obstacle_count(&self) -> usize {
        self.field.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldConfig, FieldGenerator};
    use crate::render::DrawList;
    use crate::spatial::QuadtreeConfig;

    fn scene() -> Quadtree {
        let generated = FieldGenerator::generate(&FieldConfig {
            rows: 10,
            columns: 10,
            fill_probability: 70,
            seed: Some(99),
            ..FieldConfig::default()
        })
        .unwrap();
        Quadtree::from_generated(generated, QuadtreeConfig::default())
    }

    #[test]
    fn test_linear_scan_draws_everything() {
        let tree = scene();
        let scan = LinearScan::new(tree.field());
        let mut draws = DrawList::new();
        // A frustum that sees nothing still draws every asteroid
        let elsewhere = Quad::from_corners(0.0, 10.0, 0.0, 0.0, 10.0, 0.0, 10.0, 10.0);
        scan.draw_visible(&elsewhere, &mut draws);
        assert_eq!(draws.len(), tree.field().occupied_count());
    }

    #[test]
    fn test_quadtree_culls_relative_to_scan() {
        let tree = scene();
        let frustum = Quad::from_corners(-5.0, -5.0, -250.0, -250.0, 250.0, -250.0, 5.0, -5.0);
        let scan = LinearScan::new(tree.field());
        let backends: [&dyn SpatialQuery; 2] = [&tree, &scan];

        let counts: Vec<usize> = backends
            .iter()
            .map(|backend| {
                let mut draws = DrawList::new();
                backend.draw_visible(&frustum, &mut draws);
                draws.unique_indices().len()
            })
            .collect();
        assert!(counts[0] > 0);
        assert!(counts[0] < counts[1]);
    }

    #[test]
    fn test_quadtree_gather_is_superset_of_exact_scan() {
        let tree = scene();
        let scan = LinearScan::new(tree.field());
        for (x, z) in [(15.0, -40.0), (-20.0, -95.0), (100.0, -300.0), (0.0, 200.0)] {
            let exact = scan.gather_within(x, z, 6.0);
            let broad = SpatialQuery::gather_within(&tree, x, z, 6.0);
            for record in &exact {
                assert!(broad.contains(record));
            }
        }
    }

    #[test]
    fn test_backends_agree_on_negative_radius() {
        let tree = scene();
        let scan = LinearScan::new(tree.field());
        let backends: [&dyn SpatialQuery; 2] = [&tree, &scan];
        let occupied = tree.field().iter_occupied().next().unwrap().1.ground_center();

        for backend in backends {
            assert!(!backend.gather_within(occupied.x, occupied.y, 6.0).is_empty());
            for radius in [-6.0, -1.0] {
                assert!(backend.gather_within(occupied.x, occupied.y, radius).is_empty());
            }
        }
    }

    #[test]
    fn test_obstacle_counts() {
        let tree = scene();
        assert_eq!(SpatialQuery::obstacle_count(&tree), 100);
        assert_eq!(LinearScan::new(tree.field()).obstacle_count(), 100);
    }
}
