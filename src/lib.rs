//! Mondrigen generates Mondrian-style geometric compositions.
//!
//! A canvas is recursively partitioned into nested rectangular regions using
//! golden-ratio splits, each region is further subdivided into colored tiles,
//! and a subset of tiles animates by bouncing within the canvas bounds.
//!
//! # Pipeline overview
//!
//! 1. **Partition**: [`divide`] splits a length into `2^depth` golden-ratio
//!    segments.
//! 2. **Build**: [`build_grid`] tiles the canvas with [`Container`]s, each of
//!    which re-partitions its own box into [`Tile`]s.
//! 3. **Animate**: [`SceneController::advance_frame`] steps every tile once
//!    per rendered frame; discrete commands (regenerate, toggles) arrive
//!    between frames.
//! 4. **Draw**: [`batch_frame`] snapshots the scene as backend-independent
//!    rectangle ops; [`render_batch`] rasterizes them to RGBA8, though any
//!    consumer of [`FrameBatch`] works.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Injectable randomness**: every coin flip, palette draw, and speed draw
//!   routes through the scene's single seedable random source.
//! - **No render context in entities**: tiles and containers are plain data
//!   plus motion logic; rendering consumes a [`FrameBatch`] snapshot.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod partition;
mod render;
mod scene;

pub use foundation::core::{Canvas, Point, Rect, Rgba, Vec2};
pub use foundation::error::{MondriError, MondriResult};
pub use partition::{GOLDEN_RATIO, divide};
pub use render::batch::{FrameBatch, RectOp, STROKE_WIDTH, batch_frame};
pub use render::cpu::{FrameRgba, render_batch};
pub use scene::config::SceneConfig;
pub use scene::controller::{OPACITY_FACTOR, SPEED_CHOICES, SceneController};
pub use scene::grid::{CONTAINER_DEPTH_CHOICES, build_grid};
pub use scene::model::{Container, Orientation, SceneState, Tile};
pub use scene::palette::Palette;
