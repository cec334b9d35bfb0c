//! Fixed-rate simulation system
//!
//! Runs whole ticks at the configured rate: each tick resolves the held
//! controls into intents and advances the object once. Rotation speed is
//! per tick, so the rate fixes how fast a held key turns the object
//! independently of the display's frame rate.
//!
//! Ticks are not tied to redraws. A redraw runs as many whole ticks as the
//! elapsed time holds at `object.tick_rate`, which may be none or several,
//! and the remainder carries over to the next redraw.

use std::time::Instant;

use tesseract4d_core::{
    build_tesseract, GeometryError, MotionState, Object4D, PolytopeError, ProjectionMode,
};
use tesseract4d_input::{ActiveControls, ControlTable, InputMapper};

use crate::config::AppConfig;

/// Frame time beyond which the backlog of ticks is dropped
const MAX_FRAME_TIME: f64 = 0.25;

/// Accepted `object.tick_rate` range in Hz
const MIN_TICK_RATE: f64 = 1.0;
const MAX_TICK_RATE: f64 = 1000.0;

/// Failure to assemble the simulation from configuration
#[derive(Debug)]
pub enum SimulationError {
    /// Bad plane or non-finite value in the bindings, or a camera too close to the object
    Geometry(GeometryError),
    /// The generated polytope failed validation
    Polytope(PolytopeError),
    /// A tick rate that is not finite or lies outside 1..=1000 Hz
    InvalidTickRate(f64),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::Geometry(e) => write!(f, "Simulation setup failed: {}", e),
            SimulationError::Polytope(e) => write!(f, "Simulation setup failed: {}", e),
            SimulationError::InvalidTickRate(rate) => write!(
                f,
                "Simulation setup failed: tick rate {} Hz is outside {}..={} Hz",
                rate, MIN_TICK_RATE, MAX_TICK_RATE
            ),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<GeometryError> for SimulationError {
    fn from(e: GeometryError) -> Self {
        SimulationError::Geometry(e)
    }
}

impl From<PolytopeError> for SimulationError {
    fn from(e: PolytopeError) -> Self {
        SimulationError::Polytope(e)
    }
}

/// Owns the rotating object and drives it from input
pub struct SimulationSystem {
    object: Object4D,
    mapper: InputMapper,
    tick_duration: f64,
    accumulator: f64,
    ticks: u64,
    last_frame: Instant,
}

impl SimulationSystem {
    /// Create a simulation running `tick_rate` ticks per second
    pub fn new(object: Object4D, mapper: InputMapper, tick_rate: f64) -> Result<Self, SimulationError> {
        if !(MIN_TICK_RATE..=MAX_TICK_RATE).contains(&tick_rate) {
            return Err(SimulationError::InvalidTickRate(tick_rate));
        }
        Ok(Self {
            object,
            mapper,
            tick_duration: 1.0 / tick_rate,
            accumulator: 0.0,
            ticks: 0,
            last_frame: Instant::now(),
        })
    }

    /// Build the tesseract, control table and object described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self, SimulationError> {
        let tesseract = build_tesseract()?;
        let table = ControlTable::new(&config.input.bindings, config.input.reset_control.as_str())?;
        let object = Object4D::new(tesseract.into(), config.object.camera_distance)?
            .with_projection(config.object.projection);
        let mapper = InputMapper::new(table, config.object.rotation_speed)?;
        let system = Self::new(object, mapper, config.object.tick_rate)?;

        log::info!(
            "Simulation ready: {} bindings, {:.3} rad/tick at {} Hz, 4D camera at w = {}",
            system.mapper.table().bindings().len(),
            system.mapper.rotation_speed(),
            config.object.tick_rate,
            config.object.camera_distance
        );
        Ok(system)
    }

    /// Measure the time since the last call and advance by it
    pub fn update<C: ActiveControls + ?Sized>(&mut self, controls: &C) -> u32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.advance(dt, controls)
    }

    /// Advance by `dt` seconds, running as many whole ticks as fit.
    ///
    /// Returns the number of ticks run.
    pub fn advance<C: ActiveControls + ?Sized>(&mut self, dt: f64, controls: &C) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_TIME);

        let mut ran = 0;
        while self.accumulator >= self.tick_duration {
            self.accumulator -= self.tick_duration;
            self.tick(controls);
            ran += 1;
        }
        ran
    }

    /// Run exactly one tick
    pub fn tick<C: ActiveControls + ?Sized>(&mut self, controls: &C) {
        let input = self.mapper.resolve(controls);
        self.object.update(&input.intents, input.reset);
        self.ticks += 1;
    }

    /// Flip between perspective and orthographic projection
    pub fn toggle_projection(&mut self) -> ProjectionMode {
        let next = self.object.projection().toggled();
        self.object.set_projection(next);
        log::info!("Projection: {:?}", next);
        next
    }

    pub fn object(&self) -> &Object4D {
        &self.object
    }

    pub fn motion_state(&self) -> MotionState {
        self.object.motion_state()
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}
