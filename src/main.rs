use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use clap::Parser;
use log::{error, info};

use mirrorball::cli::Args;
use mirrorball::logger::init_logger;
use mirrorball::scene::Scene;
use mirrorball::Result;

fn main() {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let mut scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => Scene::sample()?,
    };

    if let Some(background) = args.background {
        scene.background = background;
    }
    if let Some(max) = args.max_reflect_times {
        scene.config.max_reflect_times = max;
    }
    if let Some(delta) = args.zoom {
        scene.camera.zoom(delta);
    }
    if args.orbit_h != 0. || args.orbit_v != 0. {
        scene.camera.rotate(args.orbit_h, args.orbit_v);
    }
    info!(
        "camera at {:?} looking {:?}",
        scene.camera.position.coords, scene.camera.direction
    );

    for frame in 0..args.frames {
        let output = if args.frames > 1 {
            scene.animate(Duration::from_millis(args.frame_step_ms * u64::from(frame)));
            frame_path(&args.output, frame)
        } else {
            args.output.clone()
        };

        let image = scene.render_image(args.width, args.height)?;
        image.save(&output)?;
        info!("wrote {}", output.display());
    }
    Ok(())
}

/// `render.png` becomes `render_0003.png` for frame 3.
fn frame_path(output: &Path, frame: u32) -> PathBuf {
    let stem = output.file_stem().and_then(|s| s.to_str()).unwrap_or("frame");
    let name = match output.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_{:04}.{}", stem, frame, ext),
        None => format!("{}_{:04}", stem, frame),
    };
    output.with_file_name(name)
}
