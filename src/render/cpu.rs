use crate::foundation::core::{Rect, Rgba};
use crate::render::batch::{FrameBatch, RectOp};

/// A rendered frame as straight-alpha RGBA8 bytes, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Pixel bytes, `width * height * 4` long.
    pub data: Vec<u8>,
}

/// Rasterize a frame batch: clear, then fill and stroke every op in order.
///
/// Geometry is clipped to the canvas; coordinates are rounded to pixel
/// boundaries, so adjacent tiles sharing an edge rasterize without seams.
pub fn render_batch(batch: &FrameBatch) -> FrameRgba {
    let width = batch.canvas.width;
    let height = batch.canvas.height;
    let mut frame = FrameRgba {
        width,
        height,
        data: vec![0; width as usize * height as usize * 4],
    };

    let clear = batch.clear.to_rgba8();
    for px in frame.data.chunks_exact_mut(4) {
        px.copy_from_slice(&clear);
    }

    for op in &batch.ops {
        draw_op(&mut frame, op);
    }
    frame
}

fn draw_op(frame: &mut FrameRgba, op: &RectOp) {
    fill_rect(frame, op.bounds, op.fill);
    if op.stroke_width > 0.0 {
        stroke_rect(frame, op.bounds, op.border, op.stroke_width);
    }
}

/// Inset border: four bands of `width` units just inside the rect edges.
fn stroke_rect(frame: &mut FrameRgba, bounds: Rect, color: Rgba, width: f64) {
    let t = width.min(bounds.width() / 2.0).min(bounds.height() / 2.0);
    let Rect { x0, y0, x1, y1 } = bounds;
    fill_rect(frame, Rect::new(x0, y0, x1, y0 + t), color);
    fill_rect(frame, Rect::new(x0, y1 - t, x1, y1), color);
    fill_rect(frame, Rect::new(x0, y0 + t, x0 + t, y1 - t), color);
    fill_rect(frame, Rect::new(x1 - t, y0 + t, x1, y1 - t), color);
}

fn fill_rect(frame: &mut FrameRgba, bounds: Rect, color: Rgba) {
    let Some((x0, x1)) = clip_span(bounds.x0, bounds.x1, frame.width) else {
        return;
    };
    let Some((y0, y1)) = clip_span(bounds.y0, bounds.y1, frame.height) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            blend_px(frame, x, y, color);
        }
    }
}

fn clip_span(lo: f64, hi: f64, max: u32) -> Option<(u32, u32)> {
    let start = (lo.round() as i64).clamp(0, i64::from(max));
    let end = (hi.round() as i64).clamp(0, i64::from(max));
    (start < end).then_some((start as u32, end as u32))
}

/// Straight-alpha source-over blend of one pixel.
fn blend_px(frame: &mut FrameRgba, x: u32, y: u32, src: Rgba) {
    let idx = (y as usize * frame.width as usize + x as usize) * 4;
    let dst = &mut frame.data[idx..idx + 4];

    if src.a >= 1.0 {
        dst.copy_from_slice(&src.to_rgba8());
        return;
    }

    let sa = src.a.clamp(0.0, 1.0);
    let da = f64::from(dst[3]) / 255.0;
    let oa = sa + da * (1.0 - sa);
    if oa <= 0.0 {
        dst.copy_from_slice(&[0, 0, 0, 0]);
        return;
    }
    for (channel, sc) in [src.r, src.g, src.b].into_iter().enumerate() {
        let dc = f64::from(dst[channel]) / 255.0;
        let oc = (sc.clamp(0.0, 1.0) * sa + dc * da * (1.0 - sa)) / oa;
        dst[channel] = (oc * 255.0).round() as u8;
    }
    dst[3] = (oa * 255.0).round() as u8;
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
