//! Headless space travel loop
//!
//! Each frame applies one scripted command to the craft, then draws the
//! asteroid field for the overview camera and for the craft's own camera.
//! Drawing goes through the quadtree while culling is on and through an
//! exhaustive scan while it is off.

use std::time::Instant;

use space_engine::field::FieldGenerator;
use space_engine::render::DrawList;
use space_engine::spatial::{LinearScan, Quadtree, SpatialQuery};

use crate::config::SpaceTravelConfig;
use crate::craft::{overview_frustum, Craft, CraftCommand, MoveOutcome};
use crate::AppError;

/// What happened in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Frame number, starting at 0
    pub frame: usize,
    /// Result of the frame's move, `None` for non-move commands
    pub outcome: Option<MoveOutcome>,
    /// Whether the frame was drawn with quadtree culling
    pub culled: bool,
    /// Draw calls for the overview camera
    pub overview_draws: usize,
    /// Draw calls for the craft camera
    pub craft_draws: usize,
}

/// Totals over a whole flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightReport {
    /// Frames run
    pub frames: usize,
    /// Moves committed
    pub moves: usize,
    /// Moves refused because of a collision
    pub blocked: usize,
    /// Frames drawn with culling
    pub culled_frames: usize,
    /// Draw calls over both viewports
    pub draws: usize,
    /// Draw calls an exhaustive scan would have issued over both viewports
    pub naive_draws: usize,
}

/// Asteroid field, its quadtree, and the craft flying through it
pub struct SpaceTravelApp {
    config: SpaceTravelConfig,
    tree: Quadtree,
    craft: Craft,
    culling: bool,
    draws: DrawList,
    frame: usize,
}

impl SpaceTravelApp {
    /// Generate the field and build its quadtree
    pub fn new(config: SpaceTravelConfig) -> Result<Self, AppError> {
        let generated = FieldGenerator::generate(&config.field)?;

        let started = Instant::now();
        let tree = Quadtree::from_generated(generated, config.quadtree.clone());
        log::info!("Quadtree ready in {:.2?}", started.elapsed());

        Ok(Self {
            culling: config.frustum_culling,
            config,
            tree,
            craft: Craft::new(),
            draws: DrawList::new(),
            frame: 0,
        })
    }

    /// The spatial index
    pub fn tree(&self) -> &Quadtree {
        &self.tree
    }

    /// Current craft pose
    pub fn craft(&self) -> Craft {
        self.craft
    }

    /// Whether quadtree culling is active
    pub fn culling(&self) -> bool {
        self.culling
    }

    /// Run one frame
    pub fn step(&mut self, command: CraftCommand) -> FrameStats {
        let outcome = match command {
            CraftCommand::ToggleCulling => {
                self.culling = !self.culling;
                log::info!("Frustum culling {}", if self.culling { "enabled" } else { "disabled" });
                None
            }
            _ => Some(self.craft.try_move(command, &self.config.craft, &self.tree)),
        };

        let scan = LinearScan::new(self.tree.field());
        let backend: &dyn SpatialQuery = if self.culling { &self.tree } else { &scan };

        self.draws.clear();
        backend.draw_visible(&overview_frustum(), &mut self.draws);
        let overview_draws = self.draws.len();

        self.draws.clear();
        backend.draw_visible(&self.craft.frustum(&self.config.craft), &mut self.draws);
        let craft_draws = self.draws.len();

        let stats = FrameStats {
            frame: self.frame,
            outcome,
            culled: self.culling,
            overview_draws,
            craft_draws,
        };
        log::debug!(
            "Frame {}: {:?} -> {:?} at ({:.1}, {:.1}) heading {:.0}, draws {}/{}",
            stats.frame,
            command,
            outcome,
            self.craft.x,
            self.craft.z,
            self.craft.angle,
            overview_draws,
            craft_draws
        );
        if outcome == Some(MoveOutcome::Blocked) {
            log::info!(
                "Collision ahead at ({:.1}, {:.1}); move refused",
                self.craft.x,
                self.craft.z
            );
        }

        self.frame += 1;
        stats
    }

    /// Run the configured script to the end
    pub fn run(&mut self) -> FlightReport {
        let script = self.config.script.clone();
        let visible_everywhere = self.tree.field().occupied_count();
        let mut report = FlightReport::default();

        for command in script {
            let stats = self.step(command);
            report.frames += 1;
            match stats.outcome {
                Some(MoveOutcome::Moved) => report.moves += 1,
                Some(MoveOutcome::Blocked) => report.blocked += 1,
                None => {}
            }
            if stats.culled {
                report.culled_frames += 1;
            }
            report.draws += stats.overview_draws + stats.craft_draws;
            report.naive_draws += 2 * visible_everywhere;
        }

        log::info!(
            "Flight complete: {} frames, {} moves, {} blocked, {} draws ({} without culling)",
            report.frames,
            report.moves,
            report.blocked,
            report.draws,
            report.naive_draws
        );
        report
    }
}
