use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn tile(x: f64, y: f64, w: f64, h: f64, orientation: Orientation) -> Tile {
    Tile::new(
        Rect::new(x, y, x + w, y + h),
        Rgba::RED,
        orientation,
        &mut rng(1),
    )
}

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn reflection_flips_direction_before_applying_delta() {
    // One unit past the right edge, still heading right.
    let mut t = tile(81.0, 10.0, 20.0, 20.0, Orientation::Horizontal);
    t.x_dir = 1.0;
    t.set_speed(2.0);

    t.step(canvas(100, 100));
    assert_eq!(t.x_dir, -1.0);
    assert_eq!(t.bounds().x0, 79.0);
}

#[test]
fn left_edge_reflects_back_to_positive() {
    let mut t = tile(-1.0, 10.0, 20.0, 20.0, Orientation::Horizontal);
    t.x_dir = -1.0;
    t.set_speed(3.0);

    t.step(canvas(100, 100));
    assert_eq!(t.x_dir, 1.0);
    assert_eq!(t.bounds().x0, 2.0);
}

#[test]
fn stationary_tile_does_not_move() {
    let c = canvas(100, 100);

    let mut at_rest = tile(10.0, 10.0, 20.0, 20.0, Orientation::Horizontal);
    at_rest.step(c);
    assert_eq!(at_rest.bounds().origin(), Point::new(10.0, 10.0));

    let mut unmarked = tile(10.0, 10.0, 20.0, 20.0, Orientation::Horizontal);
    unmarked.set_speed(5.0);
    unmarked.set_animated(false);
    unmarked.step(c);
    assert_eq!(unmarked.bounds().origin(), Point::new(10.0, 10.0));
}

#[test]
fn only_the_oriented_axis_moves() {
    let c = canvas(100, 100);

    let mut v = tile(10.0, 10.0, 20.0, 20.0, Orientation::Vertical);
    v.y_dir = 1.0;
    v.set_speed(4.0);
    v.step(c);
    assert_eq!(v.bounds().x0, 10.0);
    assert_eq!(v.bounds().y0, 14.0);

    let mut h = tile(10.0, 10.0, 20.0, 20.0, Orientation::Horizontal);
    h.x_dir = -1.0;
    h.set_speed(4.0);
    h.step(c);
    assert_eq!(h.bounds().x0, 6.0);
    assert_eq!(h.bounds().y0, 10.0);
}

#[test]
fn reset_position_is_idempotent() {
    let c = canvas(100, 100);
    let mut t = tile(30.0, 40.0, 10.0, 10.0, Orientation::Horizontal);
    t.set_speed(7.0);
    for _ in 0..5 {
        t.step(c);
    }
    assert_ne!(t.bounds().origin(), Point::new(30.0, 40.0));

    let mut r = rng(9);
    t.reset_position(&mut r);
    assert_eq!(t.bounds().origin(), Point::new(30.0, 40.0));
    t.reset_position(&mut r);
    t.reset_position(&mut r);
    assert_eq!(t.bounds().origin(), Point::new(30.0, 40.0));
}

#[test]
fn reset_speed_stops_motion_without_unmarking() {
    let mut t = tile(10.0, 10.0, 20.0, 20.0, Orientation::Horizontal);
    t.set_speed(5.0);
    assert!(t.is_moving());

    t.reset_speed();
    assert_eq!(t.speed(), 0.0);
    assert!(t.is_animated());
    assert!(!t.is_moving());
}

#[test]
fn oversized_tile_keeps_flipping_instead_of_looping() {
    // Wider than the whole canvas: both edge checks fire in turn.
    let c = canvas(100, 100);
    let mut t = tile(0.0, 0.0, 200.0, 50.0, Orientation::Horizontal);
    t.x_dir = 1.0;
    t.set_speed(2.0);

    t.step(c);
    assert_eq!(t.x_dir, -1.0);
    for _ in 0..100 {
        t.step(c);
    }
    assert!(t.bounds().x0.abs() <= 2.0 * t.speed());
}

#[test]
fn opacify_fill_is_cumulative() {
    let mut t = tile(0.0, 0.0, 10.0, 10.0, Orientation::Horizontal);
    t.opacify_fill(0.7);
    assert!((t.fill().a - 0.7).abs() < 1e-12);
    t.opacify_fill(0.7);
    assert!((t.fill().a - 0.49).abs() < 1e-12);
}

fn assert_exact_tiling(bounds: Rect, tiles: &[Rect]) {
    let total: f64 = tiles.iter().map(|t| t.area()).sum();
    assert!(
        (total - bounds.area()).abs() < 1e-6,
        "tile area {total} != bounds area {}",
        bounds.area()
    );
    for t in tiles {
        assert!(t.width() > 0.0 && t.height() > 0.0);
        assert!(t.x0 >= bounds.x0 - 1e-9 && t.x1 <= bounds.x1 + 1e-9);
        assert!(t.y0 >= bounds.y0 - 1e-9 && t.y1 <= bounds.y1 + 1e-9);
    }
    for (i, a) in tiles.iter().enumerate() {
        for b in &tiles[i + 1..] {
            let overlap = a.intersect(*b);
            assert!(
                overlap.width().max(0.0) * overlap.height().max(0.0) < 1e-6,
                "tiles {a:?} and {b:?} overlap"
            );
        }
    }
}

#[test]
fn container_tiles_exactly_tile_its_bounds() {
    let bounds = Rect::new(10.0, 20.0, 410.0, 320.0);
    let container = Container::new(bounds, 3, &Palette::classic(), &mut rng(5)).unwrap();

    assert_eq!(container.tiles().len(), 64);
    let boxes: Vec<Rect> = container.tiles().iter().map(Tile::bounds).collect();
    assert_exact_tiling(bounds, &boxes);
}

#[test]
fn orientation_follows_tile_geometry() {
    let bounds = Rect::new(0.0, 0.0, 500.0, 300.0);
    let container = Container::new(bounds, 2, &Palette::classic(), &mut rng(8)).unwrap();
    for t in container.tiles() {
        let expect = if t.bounds().width() > t.bounds().height() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        assert_eq!(t.orientation(), expect);
    }
}

#[test]
fn tiles_are_kept_in_ascending_speed_order() {
    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    let mut container = Container::new(bounds, 2, &Palette::classic(), &mut rng(2)).unwrap();

    let speeds = [9.0, 1.0, 5.0, 3.0];
    for (tile, speed) in container.tiles_mut().iter_mut().zip(speeds.iter().cycle()) {
        tile.set_speed(*speed);
    }
    container.sort_tiles_by_speed();

    let sorted: Vec<f64> = container.tiles().iter().map(Tile::speed).collect();
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
}
