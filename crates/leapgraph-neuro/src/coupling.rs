use leapgraph_core::Params;

use crate::levels::NeuroLevels;

fn dev(u: f64) -> f64 {
    2.0 * u - 1.0
}

fn clip01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

fn clip_pos(v: f64) -> f64 {
    v.max(1e-6)
}

/// Shift engine coefficients by the channels' deviation from the neutral
/// level 0.5. A fully neutral state leaves `params` untouched.
///
/// The caller decides what to pass as the starting point: feeding back the
/// previously modulated bundle lets sustained arousal build up, feeding the
/// same base bundle every time keeps the mapping memoryless.
pub fn modulate_params(levels: &NeuroLevels, params: &mut Params) {
    let da = dev(levels.da);
    let s5 = dev(levels.s5);
    let ne = dev(levels.ne);
    let ad = dev(levels.ad);
    let end = dev(levels.end);
    let oxt = dev(levels.oxt);
    let cort = dev(levels.cort);

    params.t0 = clip01(params.t0 + 0.20 * da - 0.15 * ne + 0.10 * ad);
    params.theta0 = clip01(params.theta0 + 0.25 * s5 + 0.20 * oxt - 0.25 * cort);
    params.h0 = clip01(params.h0 + 0.20 * da + 0.15 * ad - 0.15 * s5);
    params.eta = clip_pos(params.eta + 0.10 * da - 0.10 * cort);
    params.lam = clip_pos(params.lam + 0.10 * s5);
    params.alpha = clip_pos(params.alpha + 0.15 * ne - 0.10 * end);
    params.beta_e = clip_pos(params.beta_e + 0.15 * s5 + 0.10 * end);
    params.sigma = clip01(params.sigma + 0.05 * da - 0.05 * s5);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn neutral_levels_leave_params_alone() {
        let mut params = Params::default();
        modulate_params(&NeuroLevels::default(), &mut params);
        assert_eq!(params, Params::default());
    }

    #[test]
    fn dopamine_raises_temperature_and_leap_rate() {
        let levels = NeuroLevels {
            da: 1.0,
            ..NeuroLevels::default()
        };
        let mut params = Params::default();
        modulate_params(&levels, &mut params);

        let base = Params::default();
        assert_relative_eq!(params.t0, base.t0 + 0.20);
        assert_relative_eq!(params.h0, base.h0 + 0.20);
        assert_relative_eq!(params.eta, base.eta + 0.10);
        assert_relative_eq!(params.sigma, base.sigma + 0.05);
    }

    #[test]
    fn cortisol_drops_the_threshold() {
        let levels = NeuroLevels {
            cort: 1.0,
            ..NeuroLevels::default()
        };
        let mut params = Params::default();
        modulate_params(&levels, &mut params);
        assert_relative_eq!(params.theta0, Params::default().theta0 - 0.25);
    }

    #[test]
    fn rate_floors_hold() {
        // Drive every negative contribution to its extreme.
        let levels = NeuroLevels {
            da: 0.0,
            s5: 0.0,
            end: 1.0,
            cort: 1.0,
            ..NeuroLevels::default()
        };
        let mut params = Params {
            eta: 0.05,
            alpha: 0.05,
            ..Params::default()
        };
        modulate_params(&levels, &mut params);
        assert!(params.eta >= 1e-6);
        assert!(params.alpha >= 1e-6);
        assert!(params.sigma >= 0.0);
    }
}
