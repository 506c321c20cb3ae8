//! Core

#[macro_use]
extern crate log;

// Re-export.
pub mod geometry;

pub mod app;
pub mod camera;
pub mod display;
pub mod error;
pub mod film;
pub mod image_io;
pub mod integrator;
pub mod light;
pub mod pbrt;
pub mod scene;
pub mod shape;
pub mod spectrum;
