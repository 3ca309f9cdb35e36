use crate::error::EngineError;
use crate::noise::NoiseSource;
use crate::params::Params;
use crate::policy::{normalized_entropy, sample_index, softmax_with_temperature};
use crate::state::GraphState;
use crate::telemetry::Telemetry;
use nalgebra::{DMatrix, DVector};

/// Advance the graph by one tick under a scalar drive.
///
/// Five phases run in order every call:
/// 1. flow: j = (g0 + g·κ)·p per edge, plus optional noise
/// 2. inertia: κ += (η·(p·j − ρ·j²) − λ·(κ − κ_min))·dt, floored at κ_min
/// 3. heat: E += (α·max(|p| − ‖j‖, 0) − β_E·E)·dt, floored at 0
/// 4. threshold Θ, leap rate h, temperature T
/// 5. leap decision: with probability 1 − exp(−h·dt) sample a target from
///    a fresh softmax policy and rewire; otherwise nudge a random edge with
///    probability ε and walk greedily to the strongest outgoing edge
///
/// `dt = 0` is legal: the leap probability is exactly 0 and the continuous
/// quantities hold still, so a zero-dt call inspects the discrete walk
/// without integrating anything.
pub fn step(
    state: &mut GraphState,
    params: &Params,
    rng: &mut NoiseSource,
    drive: f64,
    dt: f64,
) -> Telemetry {
    let n = state.node_count();

    // === 1. Flow ===
    let mut flow = DMatrix::zeros(n, n);
    let mut flow_norm_sq = 0.0;
    for (f, &kappa) in flow.iter_mut().zip(state.inertia.iter()) {
        let mut v = (params.g0 + params.g * kappa) * drive;
        // The draw is skipped entirely when disabled; generator state must
        // not depend on an amplitude of zero.
        if params.eps_noise > 0.0 {
            v += params.eps_noise * rng.standard_normal();
        }
        *f = v;
        flow_norm_sq += v * v;
    }
    let flow_norm = flow_norm_sq.sqrt();

    // === 2. Inertia update ===
    for (kappa, &f) in state.inertia.iter_mut().zip(flow.iter()) {
        let gain = params.eta * (drive * f - params.rho * f * f);
        let decay = params.lam * (*kappa - params.kappa_min);
        *kappa = (*kappa + (gain - decay) * dt).max(params.kappa_min);
    }

    // === 3. Heat update ===
    let excess = (drive.abs() - flow_norm).max(0.0);
    state.heat =
        (state.heat + (params.alpha * excess - params.beta_e * state.heat) * dt).max(0.0);

    // === 4. Threshold, leap rate, temperature ===
    let kappa_mean = state.inertia.mean();
    let threshold = params.theta0 + params.a1 * kappa_mean - params.a2 * state.threshold_offset;
    let jump_rate =
        params.h0 * ((state.heat - threshold) / params.gamma.max(1e-8)).exp();
    let entropy = normalized_entropy(state.policy.as_slice());
    state.temperature = (params.t0 + params.c1 * state.heat - params.c2 * entropy).max(1e-6);

    // === 5. Leap decision ===
    let mut did_jump = false;
    let rewired_to;

    let jump_probability = 1.0 - (-jump_rate * dt).exp();
    if rng.uniform() < jump_probability {
        did_jump = true;

        // Candidate logits from the current node's outgoing inertia, with
        // the self edge pushed down and one noise draw per candidate. The
        // draw happens even at zero amplitude to keep the generator
        // sequence independent of sigma.
        let mut logits = Vec::with_capacity(n);
        for k in 0..n {
            let mut logit = state.inertia[(state.current, k)];
            if k == state.current {
                logit -= 1.0;
            }
            logit += params.sigma * rng.standard_normal();
            logits.push(logit);
        }

        state.policy = DVector::from_vec(softmax_with_temperature(&logits, state.temperature));

        let r = rng.uniform();
        let selected = sample_index(state.policy.as_slice(), r);

        // Rewire toward the selected node and cool off
        state.weight[(state.current, selected)] += params.delta_w;
        state.inertia[(state.current, selected)] += params.delta_kappa;
        state.heat = (state.heat * params.c0_cool).max(0.0);
        state.current = selected;
        rewired_to = selected;

        // Relax the strongest-flow edges so entrenched paths loosen a bit
        let total = n * n;
        let relax_count = ((params.q_relax * total as f64).round() as usize).clamp(1, total);
        let flow_flat = flow.as_slice();
        let mut order: Vec<usize> = (0..total).collect();
        order.sort_unstable_by(|&a, &b| {
            flow_flat[b]
                .abs()
                .partial_cmp(&flow_flat[a].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });
        let inertia_flat = state.inertia.as_mut_slice();
        for &pos in order.iter().take(relax_count) {
            inertia_flat[pos] = (inertia_flat[pos] - params.eps_relax).max(params.kappa_min);
        }
    } else {
        // Epsilon exploration: occasionally strengthen a random outgoing
        // edge. The nudge constants are fixed, unlike the leap rewiring.
        let eps = (params.eps0 + params.d1 * state.heat - params.d2 * kappa_mean).clamp(0.0, 1.0);
        if rng.uniform() < eps {
            let k = ((rng.uniform() * n as f64).floor() as usize).min(n - 1);
            if k != state.current {
                state.weight[(state.current, k)] += 0.05;
                state.inertia[(state.current, k)] += 0.05;
            }
        }

        // Greedy walk along the strongest outgoing inertia, with a slight
        // penalty on staying put. First occurrence wins ties.
        let mut best = state.current;
        let mut best_value = f64::NEG_INFINITY;
        for k in 0..n {
            let mut value = state.inertia[(state.current, k)];
            if k == state.current {
                value -= 1e-6;
            }
            if value > best_value {
                best_value = value;
                best = k;
            }
        }
        state.current = best;
        rewired_to = best;
    }

    let align_efficiency = if drive.abs() > 1e-8 {
        flow_norm / drive.abs()
    } else {
        0.0
    };

    Telemetry {
        heat: state.heat,
        threshold,
        jump_rate,
        temperature: state.temperature,
        policy_entropy: normalized_entropy(state.policy.as_slice()),
        flow_norm,
        align_efficiency,
        kappa_mean,
        current: state.current,
        did_jump,
        rewired_to,
    }
}

/// Owned engine bundling state, parameters, and the noise source.
///
/// The free [`step`] function is the primitive; this wrapper is the
/// convenient single-entity surface the bindings and harnesses use.
pub struct LeapEngine {
    state: GraphState,
    params: Params,
    rng: NoiseSource,
}

impl LeapEngine {
    pub fn new(n: usize, params: Params, seed: u64) -> Result<Self, EngineError> {
        Ok(Self {
            state: GraphState::new(n, params.t0)?,
            params,
            rng: NoiseSource::new(seed),
        })
    }

    pub fn with_defaults(n: usize, seed: u64) -> Result<Self, EngineError> {
        Self::new(n, Params::default(), seed)
    }

    pub fn step(&mut self, drive: f64, dt: f64) -> Telemetry {
        step(&mut self.state, &self.params, &mut self.rng, drive, dt)
    }

    /// Raw copy; no validation is applied on the way in or out.
    pub fn params(&self) -> Params {
        self.params
    }

    pub fn set_params(&mut self, params: Params) {
        self.params = params;
    }

    pub fn state(&self) -> &GraphState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GraphState {
        &mut self.state
    }

    pub fn node_count(&self) -> usize {
        self.state.node_count()
    }

    pub fn current_node(&self) -> usize {
        self.state.current
    }

    pub fn heat(&self) -> f64 {
        self.state.heat
    }

    pub fn inertia_row(&self, row: usize) -> Option<Vec<f64>> {
        self.state.inertia_row(row)
    }
}
