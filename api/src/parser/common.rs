//! Common

use crate::Api;
use std::fmt;
use whitted_core::error::ConfigError;
use whitted_core::geometry::Vector3f;
use whitted_core::light::Light;
use whitted_core::pbrt::Float;

/// Represents the `scene` rule of the scene file.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SceneFile {
    /// Parsed statements in file order.
    pub(crate) stmts: Vec<Stmt>,
}

impl SceneFile {
    /// Process the rule. Stops at the first rejected statement.
    ///
    /// * `api` - The scene building API.
    pub(crate) fn process(&self, api: &mut Api) -> Result<(), String> {
        self.stmts.iter().try_for_each(|stmt| stmt.process(api))
    }
}

/// A statement and the line it starts on.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Stmt {
    /// 1-based line number.
    pub(crate) line: usize,

    /// The statement.
    pub(crate) kind: StmtKind,
}

impl Stmt {
    /// Process the rule.
    ///
    /// * `api` - The scene building API.
    pub(crate) fn process(&self, api: &mut Api) -> Result<(), String> {
        debug!("line {}: {:?}", self.line, self.kind);
        self.kind
            .process(api)
            .map_err(|err| format!("line {}: {}: {}", self.line, self.kind, err))
    }
}

/// Represents the statement rules of the scene file.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum StmtKind {
    Background(Vec<i64>),              // background_stmt(rgba)
    Canvas(usize, usize),              // canvas_stmt(width, height)
    Viewport(Float, Float, Float),     // viewport_stmt(width, height, distance)
    Camera(Vector3f),                  // camera_stmt(position)
    MaxDepth(i64),                     // max_depth_stmt(depth)
    AmbientLight(Float),               // ambient_light_stmt(intensity)
    PointLight(Float, Vector3f),       // point_light_stmt(intensity, position)
    DirectionalLight(Float, Vector3f), // directional_light_stmt(intensity, direction)
    Sphere(SphereParams),              // sphere_stmt
}

impl StmtKind {
    /// Process the rule.
    ///
    /// * `api` - The scene building API.
    fn process(&self, api: &mut Api) -> Result<(), ConfigError> {
        match self {
            Self::Background(rgba) => api.background(rgba),
            Self::Canvas(width, height) => api.canvas(*width, *height),
            Self::Viewport(width, height, distance) => api.viewport(*width, *height, *distance),
            Self::Camera(position) => api.camera(*position),
            Self::MaxDepth(depth) => api.max_depth(*depth),
            Self::AmbientLight(intensity) => api.light(Light::Ambient {
                intensity: *intensity,
            }),
            Self::PointLight(intensity, position) => api.light(Light::Point {
                intensity: *intensity,
                position: *position,
            }),
            Self::DirectionalLight(intensity, direction) => api.light(Light::Directional {
                intensity: *intensity,
                direction: *direction,
            }),
            Self::Sphere(params) => api.sphere(params),
        }
    }
}

impl fmt::Display for StmtKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Background(_) => "Background",
            Self::Canvas(..) => "Canvas",
            Self::Viewport(..) => "Viewport",
            Self::Camera(_) => "Camera",
            Self::MaxDepth(_) => "MaxDepth",
            Self::AmbientLight(_) => "AmbientLight",
            Self::PointLight(..) => "PointLight",
            Self::DirectionalLight(..) => "DirectionalLight",
            Self::Sphere(_) => "Sphere",
        };
        write!(f, "{keyword}")
    }
}

/// Parameters of a `Sphere` statement. Later occurrences of a parameter
/// override earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SphereParams {
    /// Center. Required.
    pub center: Option<Vector3f>,

    /// Radius. Required.
    pub radius: Option<Float>,

    /// Color channels `[r, g, b]` or `[r, g, b, a]`. Required.
    pub color: Option<Vec<i64>>,

    /// Specular exponent. Defaults to -1.
    pub specular: Option<i64>,

    /// Reflectivity. Defaults to 0.
    pub reflective: Option<Float>,
}
