pub mod drive;
pub mod engine;
pub mod error;
pub mod noise;
pub mod params;
pub mod policy;
pub mod state;
pub mod telemetry;

// Core types
pub type F = f64;
pub use state::{GraphState, Time};
pub use noise::NoiseSource;
pub use params::Params;

// Tick engine
pub use engine::{step, LeapEngine};
pub use telemetry::Telemetry;

// Seams
pub use drive::DriveSignal;
pub use error::EngineError;
