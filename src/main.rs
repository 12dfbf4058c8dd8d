//! `turntable [MODEL_PATH] [CONFIG_JSON]`
//!
//! Opens a window showing the model (default `car.glb`) with the control
//! panel, drag-to-rotate and the drifting camera. Set `RUST_LOG=debug` to
//! trace frames.

use anyhow::Context;
use turntable::{App, GltfLoader, HeadlessSurface, Viewer, ViewerConfig};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let model_path = args.next().unwrap_or_else(|| "car.glb".to_string());
    let config = match args.next() {
        Some(path) => ViewerConfig::from_json_file(&path).with_context(|| format!("reading config '{path}'"))?,
        None => ViewerConfig::default(),
    };

    let asset = GltfLoader::load(&model_path).with_context(|| format!("loading model '{model_path}'"))?;

    let title = config.title.clone();
    let mut viewer = Viewer::new(config);
    viewer.set_asset(asset);

    App::new().with_title(title).run(viewer, HeadlessSurface::new())?;
    Ok(())
}
