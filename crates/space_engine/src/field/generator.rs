//! Random asteroid field generation
//!
//! Asteroids sit on a regular grid in front of the craft's starting
//! position. Each grid slot is filled with a configurable probability and
//! gets a random color.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::field::{FieldError, ObstacleField, ObstacleRecord};
use crate::foundation::math::{Point2, Vec3};
use crate::spatial::Square;

/// Layout of the generated asteroid grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of rows (asteroids per line, spread along x)
    pub rows: usize,

    /// Number of columns (lines of asteroids, receding along -z)
    pub columns: usize,

    /// Distance between neighbouring grid positions
    pub spacing: f32,

    /// Radius of every asteroid
    pub radius: f32,

    /// z coordinate of the nearest line of asteroids
    pub first_row_z: f32,

    /// Percentage chance (0-100) that a grid slot holds an asteroid
    pub fill_probability: u8,

    /// RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,

    /// Render index of the first asteroid in the vertex buffer
    pub base_render_index: u32,

    /// Vertices reserved per asteroid in the vertex buffer
    pub vertices_per_obstacle: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            columns: 100,
            spacing: 30.0,
            radius: 3.0,
            first_row_z: -40.0,
            fill_probability: 100,
            seed: None,
            // Cone (12 vertices) and divider line (2) come first in the buffer
            base_render_index: 14,
            vertices_per_obstacle: 288,
        }
    }
}

impl FieldConfig {
    /// Check that the layout describes a non-empty grid of separated asteroids
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(FieldError::InvalidLayout(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.columns
            )));
        }
        if !(self.spacing > 0.0) || !(self.radius > 0.0) {
            return Err(FieldError::InvalidLayout(format!(
                "spacing and radius must be positive, got spacing {} radius {}",
                self.spacing, self.radius
            )));
        }
        if self.rows * self.columns > 1 && self.spacing <= 2.0 * self.radius {
            return Err(FieldError::InvalidLayout(format!(
                "spacing {} must exceed twice the radius {} or neighbouring asteroids touch",
                self.spacing, self.radius
            )));
        }
        if self.fill_probability > 100 {
            return Err(FieldError::InvalidLayout(format!(
                "fill probability {} exceeds 100",
                self.fill_probability
            )));
        }
        Ok(())
    }

    /// x offset that centers the grid in front of the craft
    fn x_offset(&self) -> f32 {
        if self.columns % 2 == 0 { self.spacing / 2.0 } else { 0.0 }
    }

    /// Grid position of (column, row) on the ground plane
    pub fn grid_position(&self, column: usize, row: usize) -> Point2 {
        let x = self.x_offset() + self.spacing * (-(self.columns as f32) / 2.0 + row as f32);
        let z = self.first_row_z - self.spacing * column as f32;
        Point2::new(x, z)
    }

    /// Flat slot index of (column, row)
    pub fn slot(&self, column: usize, row: usize) -> usize {
        column * self.rows + row
    }
}

/// A generated field together with the layout that produced it
#[derive(Debug, Clone)]
pub struct GeneratedField {
    /// The populated field
    pub field: ObstacleField,

    /// Layout used for generation
    pub config: FieldConfig,
}

impl GeneratedField {
    /// Number of slots to hand to the spatial index
    pub fn slot_count(&self) -> usize {
        self.field.capacity()
    }

    /// Square bounding every grid position's disc, suitable as a quadtree root
    pub fn root_square(&self) -> Square {
        let config = &self.config;
        let nearest_left = config.grid_position(0, 0);
        let x_extent = config.spacing * (config.rows - 1) as f32;
        let z_extent = config.spacing * (config.columns - 1) as f32;
        Square::new(
            nearest_left.x - config.radius,
            nearest_left.y + config.radius,
            x_extent.max(z_extent) + 2.0 * config.radius,
        )
    }
}

/// Builds asteroid fields from a [`FieldConfig`]
pub struct FieldGenerator;

impl FieldGenerator {
    /// Generate a field
    pub fn generate(config: &FieldConfig) -> Result<GeneratedField, FieldError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut field = ObstacleField::new(config.rows, config.columns);
        let mut render_index = config.base_render_index;
        let mut placed = 0usize;

        for column in 0..config.columns {
            for row in 0..config.rows {
                if rng.gen_range(0..100u8) >= config.fill_probability {
                    continue;
                }
                let ground = config.grid_position(column, row);
                let record = ObstacleRecord::new(
                    Vec3::new(ground.x, 0.0, ground.y),
                    config.radius,
                    rng.gen::<[u8; 3]>(),
                    render_index,
                );
                field.set(config.slot(column, row), record)?;
                render_index += config.vertices_per_obstacle;
                placed += 1;
            }
        }

        log::info!(
            "Generated asteroid field: {} of {} slots filled ({}x{} grid)",
            placed,
            field.capacity(),
            config.rows,
            config.columns
        );

        Ok(GeneratedField { field, config: config.clone() })
    }
}
