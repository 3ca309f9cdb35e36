use serde::{Deserialize, Serialize};

/// Normalized physiological channel levels, each in `[0, 1]`.
///
/// The layout is shared with the C interface, so the field order is fixed.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NeuroLevels {
    pub da: f64,   // dopamine
    pub s5: f64,   // serotonin
    pub ne: f64,   // noradrenaline
    pub ad: f64,   // adrenaline
    pub end: f64,  // endorphin
    pub oxt: f64,  // oxytocin
    pub cort: f64, // cortisol
}

impl Default for NeuroLevels {
    fn default() -> Self {
        Self {
            da: 0.5,
            s5: 0.5,
            ne: 0.5,
            ad: 0.5,
            end: 0.5,
            oxt: 0.5,
            cort: 0.5,
        }
    }
}

/// Relaxation time constant per channel, in seconds.
///
/// A constant at or below 1e-3 freezes that channel: it no longer relaxes
/// toward baseline, though events still move it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TimeConstants {
    pub da: f64,
    pub s5: f64,
    pub ne: f64,
    pub ad: f64,
    pub end: f64,
    pub oxt: f64,
    pub cort: f64,
}

impl Default for TimeConstants {
    fn default() -> Self {
        Self {
            da: 30.0,
            s5: 45.0,
            ne: 20.0,
            ad: 8.0,
            end: 40.0,
            oxt: 35.0,
            cort: 120.0,
        }
    }
}
