#[macro_use]
extern crate log;

use clap::Parser;
use std::process::ExitCode;
use std::sync::atomic::AtomicBool;
use whitted_api::*;
use whitted_core::app::*;
use whitted_core::display::*;
use whitted_core::integrator::*;
use whitted_integrators::WhittedIntegrator;

fn main() -> ExitCode {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();

    match render(&options) {
        Ok(stats) => {
            info!(
                "{} frames presented, {} abandoned",
                stats.frames_presented, stats.frames_abandoned
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn render(options: &Options) -> Result<RenderStats, String> {
    // Process scene description.
    let LoadedScene {
        scene,
        mut camera,
        projection,
        max_depth,
    } = match options.path.as_deref() {
        Some(path) => load_scene_file(path)?,
        None => {
            info!("No scene file given; rendering the built-in scene");
            load_default_scene()?
        }
    };

    let max_depth = options.max_depth.unwrap_or(max_depth);
    let integrator = WhittedIntegrator::new(max_depth).map_err(|e| e.to_string())?;

    let mut driver = FrameDriver::new(projection, options.threads(), options.tile_size);
    let progress = if options.quiet {
        None
    } else {
        let len = progress_len(options.frames, driver.band_count());
        let progress = create_progress_reporter(len);
        driver = driver.with_progress(progress.clone());
        Some(progress)
    };

    let (width, height) = (projection.canvas_width(), projection.canvas_height());
    let mut surface: Box<dyn DisplaySurface> = match options.image_file.as_deref() {
        Some(path) => Box::new(ImageSurface::new(
            path,
            width,
            height,
            options.sequence,
            options.frames,
        )),
        None => Box::new(MemorySurface::new(width, height, Some(options.frames))),
    };

    let mut controller: Box<dyn CameraController> = match options.camera_step() {
        Some(step) => Box::new(ScriptedController::new(step)),
        None => Box::new(StaticController),
    };

    let shutdown = AtomicBool::new(false);
    let stats = run_render_loop(
        &driver,
        &integrator,
        &scene,
        &mut camera,
        controller.as_mut(),
        surface.as_mut(),
        &shutdown,
    );

    if let Some(progress) = progress {
        progress.finish();
    }

    stats
}
