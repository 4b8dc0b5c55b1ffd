//! Space Travel
//!
//! Flies a conical spacecraft through a large grid of asteroids. The field
//! is drawn from two cameras every frame, a fixed overview camera and one
//! carried by the craft, with a quadtree culling asteroids outside each
//! camera's frustum. Moves that would hit an asteroid are refused.
//!
//! Run with `--help` for usage. `RUST_LOG=debug` logs every frame.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

mod app;
mod cli;
mod config;
mod craft;

use space_engine::config::{Config, ConfigError};
use space_engine::field::FieldError;
use space_engine::foundation::logging;
use thiserror::Error;

use crate::app::SpaceTravelApp;
use crate::cli::CliArgs;
use crate::config::SpaceTravelConfig;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Asteroid field could not be generated
    #[error("Field error: {0}")]
    Field(#[from] FieldError),
}

fn main() -> Result<(), AppError> {
    let args = CliArgs::parse();
    logging::init_with_default_filter("info");

    let mut config = match &args.config_path {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            SpaceTravelConfig::load_from_file(path)?
        }
        None => SpaceTravelConfig::default(),
    };
    if let Some(culling) = args.culling {
        config.frustum_culling = culling;
    }

    log::info!(
        "Asteroid field {}x{}, frustum culling {}",
        config.field.rows,
        config.field.columns,
        if config.frustum_culling { "on" } else { "off" }
    );

    let mut app = SpaceTravelApp::new(config)?;
    let stats = app.tree().stats();
    log::info!(
        "Quadtree: {} nodes, {} leaves ({} empty), depth {}",
        stats.nodes,
        stats.leaves,
        stats.empty_leaves,
        stats.max_depth
    );

    let report = app.run();
    let craft = app.craft();
    log::info!(
        "Craft finished at ({:.1}, {:.1}) heading {:.0}; culling {} for {} of {} frames",
        craft.x,
        craft.z,
        craft.angle,
        if app.culling() { "on" } else { "off" },
        report.culled_frames,
        report.frames
    );
    Ok(())
}
