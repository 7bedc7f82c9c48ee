use std::path::PathBuf;

use anyhow::Context;
use orrery::{
    gfx::{ImageTextureLoader, LogRenderer},
    OrreryApp, OrreryConfig,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("orrery.ron"));
    let config = OrreryConfig::load_or_create(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    let mut loader = ImageTextureLoader::new(&config.scene.texture_root);
    let app = OrreryApp::from_config(&config, LogRenderer::new(), &mut loader)
        .context("building scene")?;

    log::info!(
        "Headless renderer: the window takes keyboard input and shows status in its title, \
         frames are only logged (RUST_LOG=trace)"
    );
    log::info!("Controls: W/S zoom, arrows orbit, +/- speed, P pause, O orbits, T textures, Q quit");
    app.run().context("running event loop")?;
    Ok(())
}
