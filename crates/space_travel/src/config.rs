//! Space travel configuration

use serde::{Deserialize, Serialize};
use space_engine::config::Config;
use space_engine::field::FieldConfig;
use space_engine::spatial::QuadtreeConfig;

use crate::craft::{CraftCommand, CraftConfig};

/// Top-level configuration, loadable from `.toml` or `.ron`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceTravelConfig {
    /// Start with quadtree culling enabled
    pub frustum_culling: bool,

    /// One command per frame
    pub script: Vec<CraftCommand>,

    /// Asteroid field layout
    pub field: FieldConfig,

    /// Spatial index tuning
    pub quadtree: QuadtreeConfig,

    /// Craft motion and collision
    pub craft: CraftConfig,
}

impl Default for SpaceTravelConfig {
    fn default() -> Self {
        Self {
            frustum_culling: true,
            script: default_script(),
            field: FieldConfig::default(),
            quadtree: QuadtreeConfig::default(),
            craft: CraftConfig::default(),
        }
    }
}

impl Config for SpaceTravelConfig {}

/// A short tour: up the central lane, a weave into the asteroids, then back
fn default_script() -> Vec<CraftCommand> {
    use CraftCommand::{Backward, Forward, ToggleCulling, TurnLeft, TurnRight};

    let legs: [(CraftCommand, usize); 8] = [
        (Forward, 60),
        (TurnLeft, 6),
        (Forward, 25),
        (ToggleCulling, 1),
        (TurnRight, 12),
        (Forward, 40),
        (ToggleCulling, 1),
        (Backward, 20),
    ];
    legs.iter()
        .flat_map(|&(command, repeat)| std::iter::repeat(command).take(repeat))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_script_shape() {
        let config = SpaceTravelConfig::default();
        assert_eq!(config.script.len(), 60 + 6 + 25 + 1 + 12 + 40 + 1 + 20);
        assert_eq!(config.script[0], CraftCommand::Forward);
        assert!(config.frustum_culling);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!("space_travel_{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "frustum_culling = false\nscript = [\"Forward\", \"TurnLeft\"]\n\n[field]\nrows = 8\nseed = 4\n",
        )
        .unwrap();
        let config = SpaceTravelConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(!config.frustum_culling);
        assert_eq!(config.script, vec![CraftCommand::Forward, CraftCommand::TurnLeft]);
        assert_eq!(config.field.rows, 8);
        assert_eq!(config.field.seed, Some(4));
        assert_eq!(config.field.columns, FieldConfig::default().columns);
        assert_eq!(config.quadtree, QuadtreeConfig::default());
    }
}
