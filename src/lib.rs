//! Tesseract Viewer
//!
//! Interactive wireframe viewer for a rotating tesseract. Held keys rotate
//! the object in any of the six 4D planes; the result is projected to 3D and
//! drawn through an orbiting camera.

pub mod config;
pub mod input;
pub mod systems;
