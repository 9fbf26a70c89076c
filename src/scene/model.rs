use rand::Rng;

use crate::foundation::core::{Canvas, Point, Rect, Rgba};
use crate::foundation::error::MondriResult;
use crate::partition::divide;
use crate::scene::palette::Palette;

/// Axis along which a tile is permitted to translate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Orientation {
    /// The tile may translate along the x axis.
    Horizontal,
    /// The tile may translate along the y axis.
    Vertical,
}

impl Orientation {
    /// The other axis.
    pub fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Smallest drawable unit: a colored rectangle that may bounce inside the
/// canvas along a single axis.
///
/// A tile is stationary unless it is both marked animated and has a speed
/// above zero; the two are toggled independently by scene commands. The
/// origin captured at construction is immutable and used by
/// [`Tile::reset_position`].
#[derive(Clone, Debug)]
pub struct Tile {
    bounds: Rect,
    fill: Rgba,
    border: Rgba,
    orientation: Orientation,
    animated: bool,
    speed: f64,
    x_dir: f64,
    y_dir: f64,
    initial_origin: Point,
}

impl Tile {
    /// Build a tile at rest: black border, zero speed, marked animated,
    /// directions randomized to ±1.
    pub fn new<R: Rng + ?Sized>(
        bounds: Rect,
        fill: Rgba,
        orientation: Orientation,
        rng: &mut R,
    ) -> Self {
        Self {
            bounds,
            fill,
            border: Rgba::BLACK,
            orientation,
            animated: true,
            speed: 0.0,
            x_dir: random_direction(rng),
            y_dir: random_direction(rng),
            initial_origin: bounds.origin(),
        }
    }

    /// Current bounding box.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Current fill color.
    pub fn fill(&self) -> Rgba {
        self.fill
    }

    /// Border color.
    pub fn border(&self) -> Rgba {
        self.border
    }

    /// Motion orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the tile is marked for animation.
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Current speed in units per frame.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Whether the tile actually moves: marked animated with speed above zero.
    pub fn is_moving(&self) -> bool {
        self.animated && self.speed > 0.0
    }

    /// Replace the fill color.
    pub fn set_fill(&mut self, fill: Rgba) {
        self.fill = fill;
    }

    /// Set the speed; negative values are treated as zero.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.max(0.0);
    }

    /// Mark or unmark the tile for animation.
    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
    }

    /// Swap the motion orientation in place.
    pub fn flip_orientation(&mut self) {
        self.orientation = self.orientation.flipped();
    }

    /// Scale the fill alpha by `factor`; cumulative across calls.
    pub fn opacify_fill(&mut self, factor: f64) {
        self.fill = self.fill.opacify(factor);
    }

    /// Advance one frame of motion inside `canvas`.
    ///
    /// Crossing a canvas edge flips the direction sign; the same frame's
    /// delta is still applied afterwards, so a tile may overshoot the edge by
    /// one frame before turning back. A tile larger than the canvas flips on
    /// the first frame rather than looping. Only the axis selected by the
    /// orientation moves.
    pub fn step(&mut self, canvas: Canvas) {
        if !self.is_moving() {
            return;
        }

        let origin = self.bounds.origin();
        if origin.x > canvas.width_f64() - self.bounds.width() {
            self.x_dir = -1.0;
        }
        if origin.x < 0.0 {
            self.x_dir = 1.0;
        }
        let dx = match self.orientation {
            Orientation::Horizontal => self.speed * self.x_dir,
            Orientation::Vertical => 0.0,
        };

        if origin.y > canvas.height_f64() - self.bounds.height() {
            self.y_dir = -1.0;
        }
        if origin.y < 0.0 {
            self.y_dir = 1.0;
        }
        let dy = match self.orientation {
            Orientation::Vertical => self.speed * self.y_dir,
            Orientation::Horizontal => 0.0,
        };

        self.bounds = Rect::from_origin_size(
            Point::new(origin.x + dx, origin.y + dy),
            self.bounds.size(),
        );
    }

    /// Restore the construction-time origin and re-randomize both directions.
    pub fn reset_position<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.bounds = Rect::from_origin_size(self.initial_origin, self.bounds.size());
        self.x_dir = random_direction(rng);
        self.y_dir = random_direction(rng);
    }

    /// Bring the tile to rest without touching the animated flag.
    pub fn reset_speed(&mut self) {
        self.speed = 0.0;
    }
}

/// A canvas cell that tiles itself with a second, deeper golden-ratio grid.
///
/// The owned tiles exactly cover the container's bounding box with no gap or
/// overlap, up to floating-point tolerance. Tiles are kept in ascending speed
/// order so slow and static tiles are visited first when drawing.
#[derive(Clone, Debug)]
pub struct Container {
    bounds: Rect,
    depth: u32,
    tiles: Vec<Tile>,
}

impl Container {
    /// Partition `bounds` at `depth` and populate the resulting grid with
    /// palette-colored tiles.
    ///
    /// Orientation is assigned from geometry: wider-than-tall tiles move
    /// horizontally, the rest vertically.
    pub fn new<R: Rng + ?Sized>(
        bounds: Rect,
        depth: u32,
        palette: &Palette,
        rng: &mut R,
    ) -> MondriResult<Self> {
        let widths = divide(bounds.width(), depth, rng)?;
        let heights = divide(bounds.height(), depth, rng)?;

        let mut tiles = Vec::with_capacity(widths.len() * heights.len());
        let mut y = bounds.y0;
        for h in &heights {
            let mut x = bounds.x0;
            for w in &widths {
                let tile_bounds = Rect::new(x, y, x + w, y + h);
                let orientation = if w > h {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                tiles.push(Tile::new(tile_bounds, palette.pick(rng), orientation, rng));
                x += w;
            }
            y += h;
        }
        tiles.sort_by(|a, b| a.speed.total_cmp(&b.speed));

        Ok(Self {
            bounds,
            depth,
            tiles,
        })
    }

    /// Bounding box of the container.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Recursion depth used to partition this container.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Owned tiles in draw order (ascending speed).
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Mutable access to the owned tiles.
    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    /// Advance one frame of motion for every tile.
    pub fn update(&mut self, canvas: Canvas) {
        for tile in &mut self.tiles {
            tile.step(canvas);
        }
    }

    /// Reset every tile to its construction-time position.
    pub fn reset_positions<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for tile in &mut self.tiles {
            tile.reset_position(rng);
        }
    }

    /// Bring every tile to rest.
    pub fn reset_speeds(&mut self) {
        for tile in &mut self.tiles {
            tile.reset_speed();
        }
    }

    /// Re-establish ascending speed order; stable, so equal-speed tiles keep
    /// their grid order.
    pub fn sort_tiles_by_speed(&mut self) {
        self.tiles.sort_by(|a, b| a.speed.total_cmp(&b.speed));
    }
}

/// Top-level mutable state for one generated composition.
///
/// Created once from configuration, replaced wholesale on regeneration;
/// tiles are mutated in place every frame in between.
#[derive(Clone, Debug)]
pub struct SceneState {
    pub(crate) canvas: Canvas,
    pub(crate) palette: Palette,
    pub(crate) base_depth: u32,
    pub(crate) animate_all: bool,
    pub(crate) containers: Vec<Container>,
}

impl SceneState {
    /// Canvas dimensions the scene was generated for.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// The shared palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Base recursion depth used for the top-level grid.
    pub fn base_depth(&self) -> u32 {
        self.base_depth
    }

    /// Whether every tile is currently forced animated.
    pub fn animate_all(&self) -> bool {
        self.animate_all
    }

    /// Current containers in grid order.
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Total tile count across all containers.
    pub fn tile_count(&self) -> usize {
        self.containers.iter().map(|c| c.tiles.len()).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
