use rand::Rng;

use crate::foundation::core::Rgba;
use crate::foundation::error::{MondriError, MondriResult};

/// Ordered set of colors tiles draw their fills from.
///
/// Selection is uniform-random; repeating a color (as the classic palette
/// does with white) biases draws toward it.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<Rgba>,
}

impl Palette {
    /// Build a palette, rejecting an empty color list.
    pub fn new(colors: Vec<Rgba>) -> MondriResult<Self> {
        if colors.is_empty() {
            return Err(MondriError::validation("palette must be non-empty"));
        }
        Ok(Self { colors })
    }

    /// The classic composition palette: red, yellow, blue, white, white.
    pub fn classic() -> Self {
        Self {
            colors: classic_colors(),
        }
    }

    /// Colors in palette order.
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Draw one color uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgba {
        self.colors[rng.random_range(0..self.colors.len())]
    }
}

/// Color list backing [`Palette::classic`], also used as the config default.
pub(crate) fn classic_colors() -> Vec<Rgba> {
    vec![
        Rgba::RED,
        Rgba::YELLOW,
        Rgba::BLUE,
        Rgba::WHITE,
        Rgba::WHITE,
    ]
}
