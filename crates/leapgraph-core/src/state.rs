use crate::error::EngineError;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

pub type Time = f64;

/// Mutable per-entity simulation state over a fixed N-node graph.
///
/// Invariants held after construction and after every tick:
/// every `inertia` entry stays at or above the configured floor, `heat`
/// stays non-negative, `temperature` stays at or above 1e-6, and `weight`
/// entries only ever grow. `policy` reflects the most recent leap decision
/// and is deliberately left stale between leaps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphState {
    pub inertia: DMatrix<f64>,
    pub weight: DMatrix<f64>,
    pub heat: f64,
    /// Historical feedback term read by the threshold formula. Nothing
    /// mutates it yet; it exists so stored states keep their shape when
    /// feedback lands.
    pub threshold_offset: f64,
    pub policy: DVector<f64>,
    pub current: usize,
    pub temperature: f64,
}

impl GraphState {
    pub fn new(n: usize, t0: f64) -> Result<Self, EngineError> {
        if n == 0 {
            return Err(EngineError::EmptyGraph);
        }
        if t0 < 1e-6 {
            log::warn!("initial temperature {} below 1e-6 floor", t0);
        }
        Ok(Self {
            inertia: DMatrix::zeros(n, n),
            weight: DMatrix::zeros(n, n),
            heat: 0.0,
            threshold_offset: 0.0,
            policy: DVector::from_element(n, 1.0 / n as f64),
            current: 0,
            temperature: t0.max(1e-6),
        })
    }

    pub fn node_count(&self) -> usize {
        self.inertia.nrows()
    }

    /// Copy of one row of the inertia matrix, `None` when out of range.
    pub fn inertia_row(&self, row: usize) -> Option<Vec<f64>> {
        if row >= self.node_count() {
            return None;
        }
        Some(self.inertia.row(row).iter().copied().collect())
    }
}
