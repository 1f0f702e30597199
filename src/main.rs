use log::info;

use aizawa_viewer::{SoftwareSurface, ViewerConfig, ViewerEvent, ViewerSession, write_ppm};

const FRAMES: usize = 120;
const OUTPUT_PATH: &str = "output/aizawa.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = ViewerConfig::default();
    let surface = SoftwareSurface::new(
        config.window_width,
        config.window_height,
        (config.fullscreen_width, config.fullscreen_height),
    )?;
    let mut session = ViewerSession::new(&config, surface)?;

    for _ in 0..FRAMES {
        session.step(ViewerEvent::Tick)?;
    }

    write_ppm(session.surface().presented(), OUTPUT_PATH)?;
    info!(
        "wrote frame {} to {}",
        session.surface().frames_presented(),
        OUTPUT_PATH
    );

    Ok(())
}
