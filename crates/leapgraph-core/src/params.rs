use serde::{Deserialize, Serialize};

/// Coefficient bundle read by every phase of the tick engine.
///
/// The struct is a flat value copied wholesale across API boundaries, so it
/// is `repr(C)` and `Copy`. No range validation is performed anywhere:
/// out-of-range values produce numerically valid but degenerate dynamics.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    // Flow
    pub g0: f64,        // baseline conductance
    pub g: f64,         // inertia-proportional conductance
    pub eps_noise: f64, // per-edge flow noise amplitude (0 disables the draw)

    // Inertia
    pub eta: f64,       // reinforcement learning rate
    pub rho: f64,       // quadratic self-limiting term
    pub lam: f64,       // decay rate toward the floor
    pub kappa_min: f64, // hard lower bound on every edge

    // Heat
    pub alpha: f64,  // excess-pressure intake rate
    pub beta_e: f64, // dissipation rate

    // Leap gate
    pub theta0: f64, // base threshold
    pub a1: f64,     // threshold rise per unit mean inertia
    pub a2: f64,     // threshold drop per unit offset
    pub h0: f64,     // base leap rate
    pub gamma: f64,  // rate sensitivity scale

    // Temperature
    pub t0: f64,    // base temperature
    pub c1: f64,    // heat contribution
    pub c2: f64,    // entropy discount
    pub sigma: f64, // candidate logit noise amplitude

    // Rewiring
    pub delta_w: f64,     // weight added to the leaped edge
    pub delta_kappa: f64, // inertia added to the leaped edge
    pub c0_cool: f64,     // heat multiplier after a leap
    pub q_relax: f64,     // fraction of edges relaxed after a leap
    pub eps_relax: f64,   // inertia removed per relaxed edge
    pub eps0: f64,        // base exploration probability
    pub d1: f64,          // exploration rise per unit heat
    pub d2: f64,          // exploration drop per unit mean inertia
    pub b_path: f64,      // reserved path-bias term, not read by the dynamics
}

impl Default for Params {
    fn default() -> Self {
        Self {
            g0: 0.5,
            g: 0.7,
            eps_noise: 0.0,
            eta: 0.3,
            rho: 0.3,
            lam: 0.02,
            kappa_min: 0.0,
            alpha: 0.6,
            beta_e: 0.15,
            theta0: 1.0,
            a1: 0.5,
            a2: 0.4,
            h0: 0.2,
            gamma: 0.8,
            t0: 0.3,
            c1: 0.5,
            c2: 0.6,
            sigma: 0.2,
            delta_w: 0.2,
            delta_kappa: 0.2,
            c0_cool: 0.6,
            q_relax: 0.1,
            eps_relax: 0.01,
            eps0: 0.02,
            d1: 0.2,
            d2: 0.2,
            b_path: 0.5,
        }
    }
}
