use serde::{Deserialize, Serialize};

/// Derived quantities reported by a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub heat: f64,
    /// Leap threshold active during the tick.
    pub threshold: f64,
    pub jump_rate: f64,
    pub temperature: f64,
    /// Normalized entropy of the policy as it stands after the tick; stale
    /// between leaps.
    pub policy_entropy: f64,
    pub flow_norm: f64,
    /// Flow carried per unit of drive; 0 when the drive is negligible.
    pub align_efficiency: f64,
    pub kappa_mean: f64,
    pub current: usize,
    pub did_jump: bool,
    /// Node moved to this tick, whether by leap or by the greedy walk.
    pub rewired_to: usize,
}
