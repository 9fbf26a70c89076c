use crate::foundation::core::{Canvas, Rect, Rgba};
use crate::scene::model::SceneState;

/// Stroke width applied to every tile border, in canvas units.
pub const STROKE_WIDTH: f64 = 1.0;

/// One rectangle draw operation: geometry plus paint.
#[derive(Clone, Debug, PartialEq)]
pub struct RectOp {
    /// Rectangle to draw.
    pub bounds: Rect,
    /// Fill color (straight alpha).
    pub fill: Rgba,
    /// Border color.
    pub border: Rgba,
    /// Border stroke width.
    pub stroke_width: f64,
}

/// All draw operations for one frame, in painter's order.
///
/// Scene entities never hold a render context; this batch is the only seam
/// between scene state and whatever backend consumes it.
#[derive(Clone, Debug)]
pub struct FrameBatch {
    /// Target canvas dimensions.
    pub canvas: Canvas,
    /// Background color the frame is cleared to before drawing.
    pub clear: Rgba,
    /// Rectangle operations: containers in grid order, tiles in ascending
    /// speed order within each container.
    pub ops: Vec<RectOp>,
}

/// Snapshot the current scene geometry as a draw batch.
///
/// Take the batch after [`crate::SceneController::advance_frame`] so drawn
/// positions reflect the current frame's motion.
pub fn batch_frame(state: &SceneState) -> FrameBatch {
    let mut ops = Vec::with_capacity(state.tile_count());
    for container in state.containers() {
        for tile in container.tiles() {
            ops.push(RectOp {
                bounds: tile.bounds(),
                fill: tile.fill(),
                border: tile.border(),
                stroke_width: STROKE_WIDTH,
            });
        }
    }
    FrameBatch {
        canvas: state.canvas(),
        clear: Rgba::BLACK,
        ops,
    }
}
