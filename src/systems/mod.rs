//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod render;
mod simulation;
mod window;

pub use render::RenderSystem;
pub use simulation::{SimulationError, SimulationSystem};
pub use window::{WindowError, WindowSystem};
