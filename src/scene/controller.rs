use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::foundation::error::MondriResult;
use crate::scene::config::SceneConfig;
use crate::scene::grid::build_grid;
use crate::scene::model::SceneState;
use crate::scene::palette::Palette;

/// Speeds `randomize_speed` draws from, in units per frame.
pub const SPEED_CHOICES: [f64; 11] = [0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

/// Multiplicative alpha factor applied by `adjust_opacity`.
pub const OPACITY_FACTOR: f64 = 0.7;

/// Owns the current [`SceneState`] and the scene's single random source,
/// accepts discrete commands, and drives the per-frame update.
///
/// One `advance_frame` call per rendered frame; discrete commands may be
/// delivered between frames. Commands cannot fail once a controller exists;
/// only construction and [`SceneController::regenerate`] return a result.
pub struct SceneController {
    state: SceneState,
    rng: StdRng,
}

impl SceneController {
    /// Validate `config`, seed the random source, and generate the initial
    /// scene.
    pub fn new(config: &SceneConfig) -> MondriResult<Self> {
        config.validate()?;
        let canvas = config.canvas()?;
        let palette = Palette::new(config.palette.clone())?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let containers = build_grid(canvas, config.depth, &palette, &mut rng)?;
        Ok(Self {
            state: SceneState {
                canvas,
                palette,
                base_depth: config.depth,
                animate_all: true,
                containers,
            },
            rng,
        })
    }

    /// The current scene state.
    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Discard the current containers and build a brand-new grid from the
    /// same canvas, depth, and palette.
    ///
    /// The new collection is constructed completely before being published
    /// with a single assignment, so a draw taken between commands never
    /// observes a mix of old and new containers.
    #[tracing::instrument(skip_all)]
    pub fn regenerate(&mut self) -> MondriResult<()> {
        let containers = build_grid(
            self.state.canvas,
            self.state.base_depth,
            &self.state.palette,
            &mut self.rng,
        )?;
        self.state.containers = containers;
        Ok(())
    }

    /// Reset every tile to its construction-time position and bring it to
    /// rest.
    pub fn reset_all(&mut self) {
        for container in &mut self.state.containers {
            container.reset_positions(&mut self.rng);
            container.reset_speeds();
        }
        tracing::debug!("reset all tiles");
    }

    /// Flip the global animate-all flag.
    ///
    /// When the flag lands on true every tile is marked animated; when it
    /// lands on false each tile is re-marked independently at 50/50.
    pub fn toggle_animate_all(&mut self) {
        self.state.animate_all = !self.state.animate_all;
        let all = self.state.animate_all;
        for container in &mut self.state.containers {
            for tile in container.tiles_mut() {
                let animated = all || self.rng.random_bool(0.5);
                tile.set_animated(animated);
            }
        }
        tracing::debug!(animate_all = all, "toggled animation");
    }

    /// Flip every tile's motion orientation in place.
    pub fn toggle_orientation(&mut self) {
        for container in &mut self.state.containers {
            for tile in container.tiles_mut() {
                tile.flip_orientation();
            }
        }
    }

    /// Assign each tile a new speed drawn uniformly from [`SPEED_CHOICES`],
    /// then restore ascending speed order within each container.
    pub fn randomize_speed(&mut self) {
        for container in &mut self.state.containers {
            for tile in container.tiles_mut() {
                tile.set_speed(SPEED_CHOICES[self.rng.random_range(0..SPEED_CHOICES.len())]);
            }
            container.sort_tiles_by_speed();
        }
    }

    /// Reassign every tile's fill to a fresh uniform palette draw.
    pub fn randomize_colors(&mut self) {
        let palette = &self.state.palette;
        for container in &mut self.state.containers {
            for tile in container.tiles_mut() {
                tile.set_fill(palette.pick(&mut self.rng));
            }
        }
    }

    /// Scale every tile's fill alpha by [`OPACITY_FACTOR`]; cumulative, not
    /// idempotent.
    pub fn adjust_opacity(&mut self) {
        for container in &mut self.state.containers {
            for tile in container.tiles_mut() {
                tile.opacify_fill(OPACITY_FACTOR);
            }
        }
    }

    /// Advance one frame of motion across the whole scene.
    ///
    /// Call exactly once per rendered frame, before taking the frame's draw
    /// batch.
    pub fn advance_frame(&mut self) {
        let canvas = self.state.canvas;
        for container in &mut self.state.containers {
            container.update(canvas);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/controller.rs"]
mod tests;
