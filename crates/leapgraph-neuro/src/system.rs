use leapgraph_core::{EngineError, LeapEngine, Params, Telemetry};

use crate::coupling::modulate_params;
use crate::model::NeuroModel;

/// A graph engine whose coefficients are re-derived from a physiological
/// model before every tick.
///
/// The coupling reads back whatever bundle the engine currently holds, so
/// sustained off-neutral channels push the coefficients a little further each
/// tick until the clips stop them. Events act immediately through
/// [`apply_event`](Self::apply_event); relaxation pulls the channels back
/// between events.
pub struct ModulatedEngine {
    pub neuro: NeuroModel,
    engine: LeapEngine,
}

impl ModulatedEngine {
    pub fn new(node_count: usize, seed: u64) -> Result<Self, EngineError> {
        Self::with_params(node_count, Params::default(), seed)
    }

    pub fn with_params(node_count: usize, params: Params, seed: u64) -> Result<Self, EngineError> {
        Ok(Self {
            neuro: NeuroModel::default(),
            engine: LeapEngine::new(node_count, params, seed)?,
        })
    }

    /// Relax the channels, fold them into the engine coefficients, then run
    /// one engine tick under `drive`.
    pub fn tick(&mut self, drive: f64, dt: f64) -> Telemetry {
        self.neuro.tick(dt);
        let mut params = self.engine.params();
        modulate_params(&self.neuro.levels, &mut params);
        self.engine.set_params(params);
        self.engine.step(drive, dt)
    }

    pub fn apply_event(&mut self, id: &str) {
        self.neuro.apply_event(id);
    }

    pub fn params(&self) -> Params {
        self.engine.params()
    }

    pub fn engine(&self) -> &LeapEngine {
        &self.engine
    }

    pub fn current_node(&self) -> usize {
        self.engine.current_node()
    }

    pub fn heat(&self) -> f64 {
        self.engine.heat()
    }
}
