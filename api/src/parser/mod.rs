//! Scene File Parser

mod common;

use crate::Api;
use common::*;
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use std::fs;
use std::result::Result;
use whitted_core::geometry::Vector3f;
use whitted_core::pbrt::Float;

// Re-export.
pub use common::SphereParams;

/// The `pest` parser generated from a grammar.
#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
struct SceneParser;

/// Parses a scene file and calls the API for each statement.
///
/// * `path` - Path to the scene file.
/// * `api`  - The scene building API.
pub fn parse_file(path: &str, api: &mut Api) -> Result<(), String> {
    let unparsed_file = file_to_string(path)?;
    parse_str(&unparsed_file, api).map_err(|err| format!("{path}: {err}"))
}

/// Parses a scene description and calls the API for each statement.
///
/// * `src` - The scene description.
/// * `api` - The scene building API.
pub fn parse_str(src: &str, api: &mut Api) -> Result<(), String> {
    parse_scene_rule(src)?.process(api)
}

/// Read the entire contents of a file into a string.
///
/// * `path` - Path to the file.
fn file_to_string(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("Error reading file '{path}': {err}"))
}

/// Parse the initial `scene` rule of the grammar and return the statements.
///
/// * `src` - Contents of the file to parse.
fn parse_scene_rule(src: &str) -> Result<SceneFile, String> {
    let mut pairs = SceneParser::parse(Rule::scene, src)
        .map_err(|err| format!("Error parsing scene.\n{err}"))?;
    let scene = pairs
        .next()
        .ok_or_else(|| "Error parsing scene. Missing scene rule.".to_string())?;

    let mut stmts = vec![];
    for pair in scene.into_inner() {
        match pair.as_rule() {
            Rule::EOI => (), // Done
            _ => stmts.push(parse_stmt(pair)?),
        }
    }

    Ok(SceneFile { stmts })
}

/// Parse a statement rule of the grammar.
///
/// * `pair` - The matched statement rule.
fn parse_stmt(pair: Pair<Rule>) -> Result<Stmt, String> {
    let (line, _) = pair.as_span().start_pos().line_col();
    let rule = pair.as_rule();
    let mut inner_rules = pair.into_inner();

    let kind = match rule {
        Rule::background_stmt => StmtKind::Background(parse_color(next(&mut inner_rules)?)?),
        Rule::canvas_stmt => {
            let width = parse_uint(next(&mut inner_rules)?)?;
            let height = parse_uint(next(&mut inner_rules)?)?;
            StmtKind::Canvas(width, height)
        }
        Rule::viewport_stmt => {
            let width = parse_float(next(&mut inner_rules)?)?;
            let height = parse_float(next(&mut inner_rules)?)?;
            let distance = parse_float(next(&mut inner_rules)?)?;
            StmtKind::Viewport(width, height, distance)
        }
        Rule::camera_stmt => StmtKind::Camera(parse_vector(next(&mut inner_rules)?)?),
        Rule::max_depth_stmt => StmtKind::MaxDepth(parse_int(next(&mut inner_rules)?)?),
        Rule::ambient_light_stmt => StmtKind::AmbientLight(parse_float(next(&mut inner_rules)?)?),
        Rule::point_light_stmt => {
            let intensity = parse_float(next(&mut inner_rules)?)?;
            let position = parse_vector(next(&mut inner_rules)?)?;
            StmtKind::PointLight(intensity, position)
        }
        Rule::directional_light_stmt => {
            let intensity = parse_float(next(&mut inner_rules)?)?;
            let direction = parse_vector(next(&mut inner_rules)?)?;
            StmtKind::DirectionalLight(intensity, direction)
        }
        Rule::sphere_stmt => StmtKind::Sphere(parse_sphere_params(inner_rules)?),
        _ => return Err(format!("line {line}: unexpected rule {rule:?}")),
    };

    Ok(Stmt { line, kind })
}

/// Parse the parameters of a `sphere_stmt` rule.
///
/// * `pairs` - The inner token pairs for matched `sphere_stmt` rule.
fn parse_sphere_params(pairs: Pairs<Rule>) -> Result<SphereParams, String> {
    let mut params = SphereParams::default();

    for pair in pairs {
        let rule = pair.as_rule();
        let mut inner_rules = pair.into_inner();
        let value = next(&mut inner_rules)?;
        match rule {
            Rule::center_param => params.center = Some(parse_vector(value)?),
            Rule::radius_param => params.radius = Some(parse_float(value)?),
            Rule::color_param => params.color = Some(parse_color(value)?),
            Rule::specular_param => params.specular = Some(parse_int(value)?),
            Rule::reflective_param => params.reflective = Some(parse_float(value)?),
            _ => return Err(format!("unexpected sphere parameter {rule:?}")),
        }
    }

    Ok(params)
}

/// Returns the next token pair.
///
/// * `pairs` - The token pairs.
fn next<'a>(pairs: &mut Pairs<'a, Rule>) -> Result<Pair<'a, Rule>, String> {
    pairs
        .next()
        .ok_or_else(|| "Error parsing scene. Missing token.".to_string())
}

/// Parse a `vector_expr` rule.
///
/// * `pair` - The matched rule.
fn parse_vector(pair: Pair<Rule>) -> Result<Vector3f, String> {
    let mut inner_rules = pair.into_inner();
    let x = parse_float(next(&mut inner_rules)?)?;
    let y = parse_float(next(&mut inner_rules)?)?;
    let z = parse_float(next(&mut inner_rules)?)?;
    Ok(Vector3f::new(x, y, z))
}

/// Parse a `color_expr` rule into its 3 or 4 channels.
///
/// * `pair` - The matched rule.
fn parse_color(pair: Pair<Rule>) -> Result<Vec<i64>, String> {
    pair.into_inner().map(parse_int).collect()
}

/// Parse a `float` rule.
///
/// * `pair` - The matched rule.
fn parse_float(pair: Pair<Rule>) -> Result<Float, String> {
    let s = pair.as_str();
    s.parse::<Float>()
        .map_err(|err| format!("Invalid number '{s}': {err}"))
}

/// Parse an `int` rule.
///
/// * `pair` - The matched rule.
fn parse_int(pair: Pair<Rule>) -> Result<i64, String> {
    let s = pair.as_str();
    s.parse::<i64>()
        .map_err(|err| format!("Invalid integer '{s}': {err}"))
}

/// Parse a `uint` rule.
///
/// * `pair` - The matched rule.
fn parse_uint(pair: Pair<Rule>) -> Result<usize, String> {
    let s = pair.as_str();
    s.parse::<usize>()
        .map_err(|err| format!("Invalid integer '{s}': {err}"))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
