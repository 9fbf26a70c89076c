//! Render a few frames of the classic 800x800 scene and write the last one
//! to `mondrigen_frame.png`.

use mondrigen::{SceneConfig, SceneController, batch_frame, render_batch};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = SceneConfig {
        seed: Some(7),
        ..SceneConfig::default()
    };
    let mut controller = SceneController::new(&config)?;
    controller.randomize_speed();
    for _ in 0..30 {
        controller.advance_frame();
    }

    let frame = render_batch(&batch_frame(controller.state()));
    image::save_buffer_with_format(
        "mondrigen_frame.png",
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )?;

    println!(
        "rendered {} tiles into mondrigen_frame.png",
        controller.state().tile_count()
    );
    Ok(())
}
