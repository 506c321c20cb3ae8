//! Application related stuff

use crate::geometry::*;
use crate::pbrt::Float;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

/// Command line options.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Number of threads to use for rendering.
    #[arg(
        long = "nthreads",
        short = 't',
        value_name = "NUM",
        help = "Use specified number of threads for rendering. Defaults to the number of logical CPUs."
    )]
    n_threads: Option<usize>,

    /// Suppress all text output other than error messages.
    #[arg(long, help = "Suppress all text output other than error messages.")]
    pub quiet: bool,

    /// Path to the image file.
    #[arg(
        long = "outfile",
        short = 'o',
        value_name = "FILE",
        help = "Write rendered frames to the given filename."
    )]
    pub image_file: Option<String>,

    /// Number of scanlines per work band.
    #[arg(
        long = "tilesize",
        short = 'p',
        value_name = "ROWS",
        default_value_t = 16,
        help = "Number of scanlines rendered per work band."
    )]
    pub tile_size: usize,

    /// Number of frames to render.
    #[arg(
        long = "frames",
        short = 'f',
        value_name = "NUM",
        default_value_t = 1,
        help = "Number of frames to render before closing."
    )]
    pub frames: usize,

    /// Overrides the scene's recursion depth.
    #[arg(
        long = "maxdepth",
        value_name = "NUM",
        help = "Override the scene's reflection recursion depth."
    )]
    pub max_depth: Option<u32>,

    /// Camera translation per frame.
    #[arg(
        long = "camera-step",
        value_name = "FLOAT",
        num_args = 3,
        allow_negative_numbers = true,
        help = "Move the camera by (x y z) after every frame."
    )]
    camera_step: Option<Vec<Float>>,

    /// Number output images per frame.
    #[arg(long, help = "Write each frame to its own numbered image file.")]
    pub sequence: bool,

    /// Scene file path. Empty implies the built-in scene.
    #[arg(value_name = "FILE", help = "Scene description file.")]
    pub path: Option<String>,
}

impl Options {
    /// Returns the number of threads to use.
    pub fn threads(&self) -> usize {
        let max_threads = num_cpus::get();
        match self.n_threads {
            None => max_threads,
            Some(0) => {
                warn!("Invalid nthreads");
                1
            }
            Some(n) if n > max_threads => {
                warn!("Num threads > max logical CPUs {}", max_threads);
                max_threads
            }
            Some(n) => n,
        }
    }

    /// Returns the camera translation per frame if one was given.
    pub fn camera_step(&self) -> Option<Vector3f> {
        match self.camera_step.as_deref() {
            Some(&[x, y, z]) => Some(Vector3f::new(x, y, z)),
            _ => None,
        }
    }
}

/// Returns the number of progress steps for rendering `frames` frames of
/// `bands` bands each, saturating instead of overflowing.
///
/// * `frames` - Number of frames.
/// * `bands`  - Number of bands per frame.
pub fn progress_len(frames: usize, bands: usize) -> u64 {
    u64::try_from(frames.saturating_mul(bands)).unwrap_or(u64::MAX)
}

/// Returns a progress bar for reporting rendering progress.
///
/// * `len` - Total number of steps.
pub fn create_progress_reporter(len: u64) -> ProgressBar {
    let progress = ProgressBar::new(len);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");
    progress.set_style(style);
    progress
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
