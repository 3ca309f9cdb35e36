pub mod coupling;
pub mod events;
pub mod levels;
pub mod model;
pub mod system;

// Channel model
pub use levels::{NeuroLevels, TimeConstants};
pub use model::NeuroModel;

// Engine coupling
pub use coupling::modulate_params;
pub use system::ModulatedEngine;
