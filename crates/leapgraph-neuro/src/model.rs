use serde::{Deserialize, Serialize};

use crate::events::delta_for;
use crate::levels::{NeuroLevels, TimeConstants};

/// Seven-channel physiological state with first-order relaxation toward a
/// baseline and additive shocks from discrete events.
///
/// Each channel follows `v += (baseline - v) * (dt / tau)` and is clamped to
/// `[0, 1]` after every update. Events add a fixed per-channel delta, also
/// clamped.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct NeuroModel {
    pub baseline: NeuroLevels,
    pub levels: NeuroLevels,
    pub time_constants: TimeConstants,
}

fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

fn relax(v: &mut f64, baseline: f64, tau: f64, dt: f64) {
    if tau <= 1e-3 {
        return;
    }
    *v = clamp01(*v + (baseline - *v) * (dt / tau));
}

impl NeuroModel {
    /// Advance every channel by `dt` seconds of relaxation.
    pub fn tick(&mut self, dt: f64) {
        relax(&mut self.levels.da, self.baseline.da, self.time_constants.da, dt);
        relax(&mut self.levels.s5, self.baseline.s5, self.time_constants.s5, dt);
        relax(&mut self.levels.ne, self.baseline.ne, self.time_constants.ne, dt);
        relax(&mut self.levels.ad, self.baseline.ad, self.time_constants.ad, dt);
        relax(&mut self.levels.end, self.baseline.end, self.time_constants.end, dt);
        relax(&mut self.levels.oxt, self.baseline.oxt, self.time_constants.oxt, dt);
        relax(
            &mut self.levels.cort,
            self.baseline.cort,
            self.time_constants.cort,
            dt,
        );
    }

    /// Apply a named event's channel deltas. Unknown ids are ignored.
    pub fn apply_event(&mut self, id: &str) {
        if let Some(delta) = delta_for(id) {
            self.levels.da = clamp01(self.levels.da + delta.da);
            self.levels.s5 = clamp01(self.levels.s5 + delta.s5);
            self.levels.ne = clamp01(self.levels.ne + delta.ne);
            self.levels.ad = clamp01(self.levels.ad + delta.ad);
            self.levels.end = clamp01(self.levels.end + delta.end);
            self.levels.oxt = clamp01(self.levels.oxt + delta.oxt);
            self.levels.cort = clamp01(self.levels.cort + delta.cort);
        } else {
            log::debug!("ignoring unknown event id {id:?}");
        }
    }

    /// Oxytocin bonding multiplier: 1 at the neutral level 0.5, up to
    /// `1 + gain` at full oxytocin.
    pub fn oxt_boost(&self, gain: f64) -> f64 {
        1.0 + gain * (2.0 * self.levels.oxt - 1.0)
    }
}
