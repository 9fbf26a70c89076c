use rand::Rng;

use crate::foundation::core::{Canvas, Rect};
use crate::foundation::error::MondriResult;
use crate::partition::divide;
use crate::scene::model::Container;
use crate::scene::palette::Palette;

/// Recursion depths a container may draw for its own grid.
pub const CONTAINER_DEPTH_CHOICES: [u32; 2] = [2, 3];

/// Partition the canvas at `depth` and build one container per grid cell.
///
/// Width and height are divided independently; the Cartesian product of the
/// resulting segments, walked with running offsets, tiles the canvas exactly.
/// Every container then draws its own depth from
/// [`CONTAINER_DEPTH_CHOICES`], which is what gives sibling cells visually
/// different granularity.
#[tracing::instrument(skip(palette, rng))]
pub fn build_grid<R: Rng + ?Sized>(
    canvas: Canvas,
    depth: u32,
    palette: &Palette,
    rng: &mut R,
) -> MondriResult<Vec<Container>> {
    let widths = divide(canvas.width_f64(), depth, rng)?;
    let heights = divide(canvas.height_f64(), depth, rng)?;

    let mut containers = Vec::with_capacity(widths.len() * heights.len());
    let mut y = 0.0;
    for h in &heights {
        let mut x = 0.0;
        for w in &widths {
            let cell = Rect::new(x, y, x + w, y + h);
            let cell_depth =
                CONTAINER_DEPTH_CHOICES[rng.random_range(0..CONTAINER_DEPTH_CHOICES.len())];
            containers.push(Container::new(cell, cell_depth, palette, rng)?);
            x += w;
        }
        y += h;
    }

    tracing::debug!(
        containers = containers.len(),
        depth,
        "built top-level grid"
    );
    Ok(containers)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/grid.rs"]
mod tests;
