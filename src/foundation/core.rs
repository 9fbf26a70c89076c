use crate::foundation::error::{MondriError, MondriResult};

pub use kurbo::{Point, Rect, Vec2};

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> MondriResult<Self> {
        if width == 0 || height == 0 {
            return Err(MondriError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Width as `f64` for geometry math.
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64` for geometry math.
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    /// The canvas rectangle anchored at the origin.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width_f64(), self.height_f64())
    }
}

/// Straight-alpha RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
    /// Alpha component (straight, not premultiplied).
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::opaque(1.0, 0.0, 0.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::opaque(1.0, 1.0, 0.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::opaque(0.0, 0.0, 1.0);

    /// Build a color from straight-alpha components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build a fully opaque color.
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Scale alpha by `factor`, clamped to `[0, 1]`.
    pub fn opacify(self, factor: f64) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to straight-alpha RGBA8 bytes, clamping each component.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn channel(v: f64) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [
            channel(self.r),
            channel(self.g),
            channel(self.b),
            channel(self.a),
        ]
    }
}
