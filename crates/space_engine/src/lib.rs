//! # Space Engine
//!
//! Frustum culling and broad-phase collision for a large, static field of
//! spherical asteroids.
//!
//! ## Features
//!
//! - **Region Quadtree**: Built once over the (x, z) ground plane; prunes
//!   draw and proximity queries to the asteroids their region reaches
//! - **Structure-of-Arrays Field**: Cache-friendly asteroid storage
//! - **Pluggable Rendering**: Draw traversals feed a [`render::RenderSink`]
//! - **Configurable**: TOML / RON configuration for every tunable
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use space_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generated = FieldGenerator::generate(&FieldConfig::default())?;
//!     let tree = Quadtree::from_generated(generated, QuadtreeConfig::default());
//!
//!     let mut draws = DrawList::new();
//!     tree.draw_visible_corners(-5.0, -5.0, -250.0, -250.0, 250.0, -250.0, 5.0, -5.0, &mut draws);
//!     println!("{} asteroids visible", draws.len());
//!
//!     let nearby = tree.gather_near(0.0, -40.0);
//!     println!("{} collision candidates", nearby.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod physics;
pub mod field;
pub mod render;
pub mod spatial;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        field::{
            FieldConfig, FieldError, FieldGenerator, GeneratedField, ObstacleField, ObstacleRecord,
        },
        foundation::math::{Point2, Vec3},
        physics::{BoundingSphere, Quad, Rect},
        render::{DrawList, RenderSink},
        spatial::{LinearScan, Quadtree, QuadtreeConfig, QuadtreeStats, SpatialQuery, Square},
    };
}
