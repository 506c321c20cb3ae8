//! Frame Driver

use super::Integrator;
use crate::camera::*;
use crate::display::*;
use crate::film::*;
use crate::scene::*;
use indicatif::ProgressBar;
use itertools::iproduct;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Renders frames by tracing one primary ray per screen pixel. The screen is
/// split into horizontal bands that are rendered in parallel.
#[derive(Clone)]
pub struct FrameDriver {
    /// Maps screen pixels to primary rays.
    projection: Projection,

    /// Number of worker threads.
    threads: usize,

    /// Number of scanlines per band.
    tile_rows: usize,

    /// Advanced once per rendered band.
    progress: Option<ProgressBar>,
}

impl FrameDriver {
    /// Create a new `FrameDriver`.
    ///
    /// * `projection` - Maps screen pixels to primary rays.
    /// * `threads`    - Number of worker threads.
    /// * `tile_rows`  - Number of scanlines per band.
    pub fn new(projection: Projection, threads: usize, tile_rows: usize) -> Self {
        if threads == 0 {
            warn!("Invalid thread count 0; using 1");
        }
        if tile_rows == 0 {
            warn!("Invalid tile size 0; using 1");
        }

        Self {
            projection,
            threads: threads.max(1),
            tile_rows: tile_rows.max(1),
            progress: None,
        }
    }

    /// Reports rendered bands to a progress bar.
    ///
    /// * `progress` - The progress bar.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Returns the projection.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Returns the number of worker threads.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Returns the number of bands in a frame.
    pub fn band_count(&self) -> usize {
        (self.projection.canvas_height() + self.tile_rows - 1) / self.tile_rows
    }

    /// Renders a frame. Returns `None` if `shutdown` was observed while
    /// rendering; the partial frame is discarded.
    ///
    /// * `integrator` - Computes the color of each primary ray.
    /// * `scene`      - The scene.
    /// * `camera`     - Camera snapshot used for every pixel of the frame.
    /// * `shutdown`   - Cancellation flag checked between bands.
    pub fn render_frame(
        &self,
        integrator: &dyn Integrator,
        scene: &Scene,
        camera: &Camera,
        shutdown: &AtomicBool,
    ) -> Result<Option<Film>, String> {
        let width = self.projection.canvas_width();
        let height = self.projection.canvas_height();
        let n_bands = self.band_count();
        let n_threads = self.threads;

        debug!("Rendering {n_bands} bands of {width}x{height} frame; {camera}");

        let mut film = Film::new(width, height, scene.background());
        let film_ref = &mut film;

        thread::scope(|scope| {
            let (tx_collector, rx_collector) = crossbeam_channel::bounded::<FilmTile>(n_threads);
            let (tx_worker, rx_worker) = crossbeam_channel::bounded::<usize>(n_threads);

            // Spawn collector thread.
            scope.spawn(move || {
                for tile in rx_collector.iter() {
                    film_ref.merge_film_tile(&tile);
                }
            });

            // Spawn worker threads.
            for _ in 0..n_threads {
                let rx_worker = rx_worker.clone();
                let tx_collector = tx_collector.clone();
                scope.spawn(move || {
                    for band in rx_worker.iter() {
                        // Keep draining so the producer never blocks.
                        if shutdown.load(Ordering::Relaxed) {
                            continue;
                        }

                        let tile = self.render_band(band, integrator, scene, camera);
                        if tx_collector.send(tile).is_err() {
                            break;
                        }

                        if let Some(progress) = self.progress.as_ref() {
                            progress.inc(1);
                        }
                    }
                });
            }
            drop(rx_worker); // Drop extra since we've cloned one for each worker.
            drop(tx_collector);

            // Send work.
            for band in 0..n_bands {
                if shutdown.load(Ordering::Relaxed) {
                    break;
                }
                tx_worker
                    .send(band)
                    .map_err(|err| format!("Unable to dispatch band {band}: {err}"))?;
            }

            Ok::<(), String>(())
        })?;

        if shutdown.load(Ordering::Relaxed) {
            warn!("Shutdown requested; frame abandoned");
            return Ok(None);
        }

        Ok(Some(film))
    }

    /// Renders a single band of scanlines.
    ///
    /// * `band`       - Band index.
    /// * `integrator` - Computes the color of each primary ray.
    /// * `scene`      - The scene.
    /// * `camera`     - Camera snapshot for the frame.
    fn render_band(
        &self,
        band: usize,
        integrator: &dyn Integrator,
        scene: &Scene,
        camera: &Camera,
    ) -> FilmTile {
        let width = self.projection.canvas_width();
        let y0 = band * self.tile_rows;
        let y1 = (y0 + self.tile_rows).min(self.projection.canvas_height());
        let depth = integrator.max_depth();

        debug!("Starting band {band} -> scanlines [{y0}, {y1})");

        let mut tile = FilmTile::new(width, y0, y1, scene.background());
        for (y, x) in iproduct!(y0..y1, 0..width) {
            let ray = self.projection.generate_ray(camera, x, y);
            tile.set(x, y, integrator.li(&ray, scene, depth));
        }

        debug!("Finished band {band}");

        tile
    }

    /// Hands every pixel of a completed frame to the display surface.
    ///
    /// * `film`    - The completed frame.
    /// * `surface` - The display surface.
    pub fn present(&self, film: &Film, surface: &mut dyn DisplaySurface) {
        for (y, x) in iproduct!(0..film.height(), 0..film.width()) {
            surface.present_pixel(x, y, film.get(x, y));
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::*;
    use crate::pbrt::*;
    use crate::spectrum::*;
    use std::collections::HashMap;

    /// Encodes the primary ray into the color.
    struct RayColorIntegrator;

    impl Integrator for RayColorIntegrator {
        fn max_depth(&self) -> u32 {
            0
        }

        fn li(&self, ray: &Ray, _scene: &Scene, _depth: u32) -> Color {
            let channel = |v: Float| clamp(128.0 + v * 100.0, 0.0, 255.0) as u8;
            Color::rgb(channel(ray.d.x), channel(ray.d.y), channel(ray.o.x))
        }
    }

    /// Counts presented pixels.
    #[derive(Default)]
    struct CountingSurface {
        presented: HashMap<(usize, usize), usize>,
    }

    impl DisplaySurface for CountingSurface {
        fn present_pixel(&mut self, x: usize, y: usize, _color: Color) {
            *self.presented.entry((x, y)).or_insert(0) += 1;
        }

        fn commit_frame(&mut self) -> Result<(), String> {
            Ok(())
        }

        fn should_close(&self) -> bool {
            false
        }
    }

    fn empty_scene() -> Scene {
        Scene::new(Color::WHITE, vec![], vec![]).unwrap()
    }

    fn driver(w: usize, h: usize, threads: usize, tile_rows: usize) -> FrameDriver {
        let projection = Projection::new(w, h, Viewport::default()).unwrap();
        FrameDriver::new(projection, threads, tile_rows)
    }

    #[test]
    fn every_pixel_is_presented_once() {
        let d = driver(7, 5, 3, 2);
        let shutdown = AtomicBool::new(false);
        let film = d
            .render_frame(&RayColorIntegrator, &empty_scene(), &Camera::default(), &shutdown)
            .unwrap()
            .unwrap();

        let mut surface = CountingSurface::default();
        d.present(&film, &mut surface);

        assert_eq!(surface.presented.len(), 35);
        assert!(surface.presented.values().all(|&n| n == 1));
    }

    #[test]
    fn pixels_match_projection() {
        let d = driver(4, 4, 2, 1);
        let camera = Camera::default();
        let shutdown = AtomicBool::new(false);
        let film = d
            .render_frame(&RayColorIntegrator, &empty_scene(), &camera, &shutdown)
            .unwrap()
            .unwrap();

        for (y, x) in iproduct!(0..4, 0..4) {
            let ray = d.projection().generate_ray(&camera, x, y);
            let expected = RayColorIntegrator.li(&ray, &empty_scene(), 0);
            assert_eq!(film.get(x, y), expected);
        }
    }

    #[test]
    fn thread_and_band_count_do_not_change_the_image() {
        let scene = empty_scene();
        let camera = Camera::new(Vector3f::new(0.5, 0.0, 0.0));
        let shutdown = AtomicBool::new(false);

        let reference = driver(9, 6, 1, 16)
            .render_frame(&RayColorIntegrator, &scene, &camera, &shutdown)
            .unwrap();
        for (threads, tile_rows) in [(2, 1), (4, 4), (8, 5), (3, 6)] {
            let film = driver(9, 6, threads, tile_rows)
                .render_frame(&RayColorIntegrator, &scene, &camera, &shutdown)
                .unwrap();
            assert_eq!(film, reference);
        }
    }

    #[test]
    fn band_count_rounds_up() {
        assert_eq!(driver(10, 10, 1, 3).band_count(), 4);
        assert_eq!(driver(10, 10, 1, 10).band_count(), 1);
        assert_eq!(driver(10, 10, 1, 0).band_count(), 10);
    }

    #[test]
    fn preset_shutdown_abandons_frame() {
        let d = driver(8, 8, 2, 2);
        let shutdown = AtomicBool::new(true);
        let result = d.render_frame(&RayColorIntegrator, &empty_scene(), &Camera::default(), &shutdown);
        assert_eq!(result, Ok(None));
    }
}
