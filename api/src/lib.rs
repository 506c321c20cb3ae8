//! The API

#[macro_use]
extern crate log;
#[macro_use]
extern crate pest_derive;

pub mod parser;

use parser::SphereParams;
use whitted_core::camera::*;
use whitted_core::error::ConfigError;
use whitted_core::geometry::*;
use whitted_core::light::*;
use whitted_core::pbrt::*;
use whitted_core::scene::*;
use whitted_core::shape::*;
use whitted_core::spectrum::*;
use whitted_integrators::{validate_max_depth, DEFAULT_MAX_DEPTH};

/// Default canvas width and height in pixels.
pub const DEFAULT_CANVAS_SIZE: usize = 600;

/// Returns the built-in scene description.
pub fn default_scene_description() -> &'static str {
    include_str!("../scenes/default.scene")
}

/// Everything needed to render a scene description.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedScene {
    /// The scene.
    pub scene: Scene,

    /// Initial camera.
    pub camera: Camera,

    /// Canvas to viewport projection.
    pub projection: Projection,

    /// Recursion depth budget.
    pub max_depth: u32,
}

/// Parses the scene file at `path` and builds it.
///
/// * `path` - Path to the scene file.
pub fn load_scene_file(path: &str) -> Result<LoadedScene, String> {
    let mut api = Api::new();
    parser::parse_file(path, &mut api)?;
    api.build().map_err(|err| format!("{path}: {err}"))
}

/// Parses a scene description and builds it.
///
/// * `src` - The scene description.
pub fn load_scene_str(src: &str) -> Result<LoadedScene, String> {
    let mut api = Api::new();
    parser::parse_str(src, &mut api)?;
    api.build().map_err(|err| err.to_string())
}

/// Loads the built-in scene.
pub fn load_default_scene() -> Result<LoadedScene, String> {
    load_scene_str(default_scene_description())
}

/// Accumulates scene statements. Every statement is validated as it is
/// applied so errors can be attributed to it.
#[derive(Clone, Debug)]
pub struct Api {
    background: Color,
    canvas_width: usize,
    canvas_height: usize,
    viewport: Viewport,
    camera: Vector3f,
    max_depth: u32,
    lights: Vec<Light>,
    spheres: Vec<Sphere>,
}

impl Default for Api {
    fn default() -> Self {
        Self::new()
    }
}

impl Api {
    /// Returns a new `Api` holding the defaults of an empty scene file.
    pub fn new() -> Self {
        Self {
            background: Color::WHITE,
            canvas_width: DEFAULT_CANVAS_SIZE,
            canvas_height: DEFAULT_CANVAS_SIZE,
            viewport: Viewport::default(),
            camera: Vector3f::zero(),
            max_depth: DEFAULT_MAX_DEPTH,
            lights: vec![],
            spheres: vec![],
        }
    }

    /// Sets the background color.
    ///
    /// * `rgba` - Color channels `[r, g, b]` or `[r, g, b, a]`.
    pub fn background(&mut self, rgba: &[i64]) -> Result<(), ConfigError> {
        self.background = color_from_channels(rgba)?;
        Ok(())
    }

    /// Sets the canvas size in pixels.
    ///
    /// * `width`  - Canvas width.
    /// * `height` - Canvas height.
    pub fn canvas(&mut self, width: usize, height: usize) -> Result<(), ConfigError> {
        Projection::new(width, height, self.viewport)?;
        self.canvas_width = width;
        self.canvas_height = height;
        Ok(())
    }

    /// Sets the viewport.
    ///
    /// * `width`    - Width in world units.
    /// * `height`   - Height in world units.
    /// * `distance` - Distance from the eye.
    pub fn viewport(
        &mut self,
        width: Float,
        height: Float,
        distance: Float,
    ) -> Result<(), ConfigError> {
        let viewport = Viewport {
            width,
            height,
            distance,
        };
        Projection::new(self.canvas_width, self.canvas_height, viewport)?;
        self.viewport = viewport;
        Ok(())
    }

    /// Sets the initial camera position.
    ///
    /// * `position` - The position.
    pub fn camera(&mut self, position: Vector3f) -> Result<(), ConfigError> {
        if !position.is_finite() {
            return Err(ConfigError::NonFiniteVector("camera position"));
        }
        self.camera = position;
        Ok(())
    }

    /// Sets the recursion depth budget.
    ///
    /// * `depth` - The depth.
    pub fn max_depth(&mut self, depth: i64) -> Result<(), ConfigError> {
        self.max_depth = validate_max_depth(depth)?;
        Ok(())
    }

    /// Adds a light.
    ///
    /// * `light` - The light.
    pub fn light(&mut self, light: Light) -> Result<(), ConfigError> {
        light.validate()?;
        self.lights.push(light);
        Ok(())
    }

    /// Adds a sphere.
    ///
    /// * `params` - Sphere parameters.
    pub fn sphere(&mut self, params: &SphereParams) -> Result<(), ConfigError> {
        let center = params
            .center
            .ok_or(ConfigError::MissingParameter("sphere center"))?;
        let radius = params
            .radius
            .ok_or(ConfigError::MissingParameter("sphere radius"))?;
        let color = params
            .color
            .as_deref()
            .ok_or(ConfigError::MissingParameter("sphere color"))?;

        let sphere = Sphere::new(
            center,
            radius,
            color_from_channels(color)?,
            params.specular.unwrap_or(-1),
            params.reflective.unwrap_or(0.0),
        )?;
        self.spheres.push(sphere);
        Ok(())
    }

    /// Builds the scene, camera and projection.
    pub fn build(self) -> Result<LoadedScene, ConfigError> {
        let projection = Projection::new(self.canvas_width, self.canvas_height, self.viewport)?;
        let camera = Camera::new(self.camera);

        info!(
            "Scene loaded: {} spheres, {} lights, {}x{} canvas, depth {}",
            self.spheres.len(),
            self.lights.len(),
            self.canvas_width,
            self.canvas_height,
            self.max_depth
        );
        for light in self.lights.iter() {
            debug!("{} light, intensity {}", light.get_type(), light.intensity());
        }

        let scene = Scene::new(self.background, self.lights, self.spheres)?;
        Ok(LoadedScene {
            scene,
            camera,
            projection,
            max_depth: self.max_depth,
        })
    }
}

/// Converts parsed color channels to a `Color`. Alpha defaults to 255.
///
/// * `channels` - Color channels `[r, g, b]` or `[r, g, b, a]`.
fn color_from_channels(channels: &[i64]) -> Result<Color, ConfigError> {
    let channel = |i: usize| -> Result<u8, ConfigError> {
        match channels.get(i) {
            Some(&c) => u8::try_from(c).map_err(|_| ConfigError::InvalidColorChannel(c)),
            None if i == 3 => Ok(255),
            None => Err(ConfigError::MissingParameter("color channel")),
        }
    };
    Ok(Color::new(channel(0)?, channel(1)?, channel(2)?, channel(3)?))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
