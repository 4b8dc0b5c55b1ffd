//! The player's spacecraft
//!
//! The craft moves on the ground plane. Its heading `angle` is measured in
//! degrees from the -z axis, turning counter-clockwise when seen from above.
//! Every move is collision-checked against the asteroid field before it is
//! committed.

use serde::{Deserialize, Serialize};
use space_engine::foundation::math::{deg_to_rad, Point2, Vec3};
use space_engine::physics::{BoundingSphere, Quad};
use space_engine::spatial::SpatialQuery;

/// One step of craft input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CraftCommand {
    /// Rotate counter-clockwise
    TurnLeft,
    /// Rotate clockwise
    TurnRight,
    /// Move along the heading
    Forward,
    /// Move against the heading
    Backward,
    /// Switch between quadtree culling and drawing everything
    ToggleCulling,
}

/// Craft motion and collision settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraftConfig {
    /// Degrees turned per turn command
    pub turn_step_degrees: f32,

    /// Distance moved per move command
    pub move_step: f32,

    /// Distance from the craft's base to its bounding sphere center, along the heading
    pub collision_offset: f32,

    /// Bounding sphere radius
    pub collision_radius: f32,

    /// Distance from the craft to the near corners of its frustum
    pub frustum_near: f32,

    /// Distance from the craft to the far corners of its frustum
    pub frustum_far: f32,
}

impl Default for CraftConfig {
    fn default() -> Self {
        Self {
            turn_step_degrees: 5.0,
            move_step: 1.0,
            collision_offset: 5.0,
            collision_radius: 7.072,
            // Corners of a 90 degree frustum with near plane 5 and far plane 250
            frustum_near: 7.072,
            frustum_far: 353.6,
        }
    }
}

/// Result of attempting a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The craft took the new pose
    Moved,
    /// The new pose would hit an asteroid; the craft stayed put
    Blocked,
}

/// Craft pose on the ground plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Craft {
    /// World x
    pub x: f32,
    /// World z
    pub z: f32,
    /// Heading in degrees, kept within [0, 360]
    pub angle: f32,
}

impl Craft {
    /// Craft at the origin facing -z
    pub fn new() -> Self {
        Self::default()
    }

    /// The pose `command` would produce, ignoring collisions
    pub fn tentative(&self, command: CraftCommand, config: &CraftConfig) -> Self {
        let mut next = *self;
        let heading = deg_to_rad(self.angle);
        match command {
            CraftCommand::TurnLeft => next.angle += config.turn_step_degrees,
            CraftCommand::TurnRight => next.angle -= config.turn_step_degrees,
            CraftCommand::Forward => {
                next.x -= config.move_step * heading.sin();
                next.z -= config.move_step * heading.cos();
            }
            CraftCommand::Backward => {
                next.x += config.move_step * heading.sin();
                next.z += config.move_step * heading.cos();
            }
            CraftCommand::ToggleCulling => {}
        }

        if next.angle > 360.0 {
            next.angle -= 360.0;
        }
        if next.angle < 0.0 {
            next.angle += 360.0;
        }
        next
    }

    /// Sphere approximating the craft's hull
    pub fn bounding_sphere(&self, config: &CraftConfig) -> BoundingSphere {
        let heading = deg_to_rad(self.angle);
        BoundingSphere::new(
            Vec3::new(
                self.x - config.collision_offset * heading.sin(),
                0.0,
                self.z - config.collision_offset * heading.cos(),
            ),
            config.collision_radius,
        )
    }

    /// Whether the craft in this pose touches any asteroid
    pub fn collides(&self, config: &CraftConfig, field: &dyn SpatialQuery) -> bool {
        let hull = self.bounding_sphere(config);
        field
            .gather_within(hull.center.x, hull.center.z, hull.radius)
            .iter()
            .any(|asteroid| asteroid.bounding_sphere().intersects(&hull))
    }

    /// Apply `command` unless the resulting pose collides
    pub fn try_move(
        &mut self,
        command: CraftCommand,
        config: &CraftConfig,
        field: &dyn SpatialQuery,
    ) -> MoveOutcome {
        let next = self.tentative(command, config);
        if next.collides(config, field) {
            MoveOutcome::Blocked
        } else {
            *self = next;
            MoveOutcome::Moved
        }
    }

    /// Ground-plane footprint of the view frustum carried by the craft
    pub fn frustum(&self, config: &CraftConfig) -> Quad {
        let left = deg_to_rad(45.0 + self.angle);
        let right = deg_to_rad(45.0 - self.angle);
        let (near, far) = (config.frustum_near, config.frustum_far);
        Quad::new([
            Point2::new(self.x - near * left.sin(), self.z - near * left.cos()),
            Point2::new(self.x - far * left.sin(), self.z - far * left.cos()),
            Point2::new(self.x + far * right.sin(), self.z - far * right.cos()),
            Point2::new(self.x + near * right.sin(), self.z - near * right.cos()),
        ])
    }
}

/// Ground-plane footprint of the fixed overview camera's frustum
pub fn overview_frustum() -> Quad {
    Quad::from_corners(-5.0, -5.0, -250.0, -250.0, 250.0, -250.0, 5.0, -5.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use space_engine::field::{ObstacleField, ObstacleRecord};
    use space_engine::spatial::{LinearScan, Quadtree};

    fn lone_asteroid_tree() -> Quadtree {
        let mut field = ObstacleField::new(1, 1);
        field
            .set(0, ObstacleRecord::new(Vec3::new(0.0, 0.0, -20.0), 3.0, [255, 255, 255], 14))
            .unwrap();
        Quadtree::initialize(-50.0, 50.0, 100.0, 1, field)
    }

    #[test]
    fn test_forward_moves_toward_negative_z() {
        let craft = Craft::new().tentative(CraftCommand::Forward, &CraftConfig::default());
        assert_relative_eq!(craft.x, 0.0);
        assert_relative_eq!(craft.z, -1.0);
    }

    #[test]
    fn test_turning_wraps_angle() {
        let config = CraftConfig::default();
        let right = Craft::new().tentative(CraftCommand::TurnRight, &config);
        assert_relative_eq!(right.angle, 355.0);
        let left = Craft { angle: 358.0, ..Craft::new() }
            .tentative(CraftCommand::TurnLeft, &config);
        assert_relative_eq!(left.angle, 3.0, epsilon = 1e-4);
    }

    #[test]
    fn test_heading_left_moves_toward_negative_x() {
        let craft = Craft { angle: 90.0, ..Craft::new() }
            .tentative(CraftCommand::Forward, &CraftConfig::default());
        assert_relative_eq!(craft.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(craft.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_blocked_before_reaching_asteroid() {
        let tree = lone_asteroid_tree();
        let config = CraftConfig::default();
        let mut craft = Craft::new();

        let outcomes: Vec<MoveOutcome> = (0..6)
            .map(|_| craft.try_move(CraftCommand::Forward, &config, &tree))
            .collect();
        assert_eq!(&outcomes[..4], &[MoveOutcome::Moved; 4]);
        assert_eq!(outcomes[4], MoveOutcome::Blocked);
        assert_eq!(outcomes[5], MoveOutcome::Blocked);
        assert_relative_eq!(craft.z, -4.0);

        // Backing away is always allowed
        assert_eq!(craft.try_move(CraftCommand::Backward, &config, &tree), MoveOutcome::Moved);
    }

    #[test]
    fn test_quadtree_and_scan_agree_on_collision() {
        let tree = lone_asteroid_tree();
        let scan = LinearScan::new(tree.field());
        let config = CraftConfig::default();
        for z in [0.0, -3.0, -4.9, -5.0, -8.0, -30.0, -40.0] {
            let craft = Craft { z, ..Craft::new() };
            assert_eq!(craft.collides(&config, &tree), craft.collides(&config, &scan), "z = {z}");
        }
    }

    #[test]
    fn test_frustum_at_origin_matches_overview() {
        let frustum = Craft::new().frustum(&CraftConfig::default());
        let overview = overview_frustum();
        for (a, b) in frustum.vertices.iter().zip(overview.vertices.iter()) {
            assert_relative_eq!(a.x, b.x, epsilon = 0.05);
            assert_relative_eq!(a.y, b.y, epsilon = 0.05);
        }
    }

    #[test]
    fn test_frustum_follows_heading() {
        // Facing +x (angle 270): the frustum opens toward +x
        let frustum = Craft { angle: 270.0, ..Craft::new() }.frustum(&CraftConfig::default());
        let far_mid_x = (frustum.vertices[1].x + frustum.vertices[2].x) / 2.0;
        assert_relative_eq!(far_mid_x, 250.0, epsilon = 0.1);
    }
}
