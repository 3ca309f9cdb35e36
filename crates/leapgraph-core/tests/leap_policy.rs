use leapgraph_core::policy::normalized_entropy;
use leapgraph_core::{LeapEngine, Params};

/// Pinned leap gate: theta frozen at zero and an enormous base rate make
/// the leap probability exactly 1 on every tick.
fn always_leap() -> Params {
    Params {
        h0: 1e9,
        theta0: 0.0,
        a1: 0.0,
        ..Params::default()
    }
}

#[test]
fn forced_leaps_never_select_the_self_loop() {
    let params = Params {
        sigma: 0.0,
        t0: 0.0,
        c1: 0.0,
        ..always_leap()
    };
    let mut engine = LeapEngine::new(4, params, 777).unwrap();

    for tick in 0..10_000 {
        let before = engine.current_node();
        let telem = engine.step(0.0, 1.0);
        assert!(telem.did_jump, "gate failed to fire at tick {}", tick);
        assert_ne!(telem.rewired_to, before, "self loop selected at tick {}", tick);
        // With the temperature pinned at its floor and no logit noise, the
        // penalized self edge underflows to an exact zero probability.
        assert_eq!(engine.state().policy[before], 0.0);
    }
}

#[test]
fn leap_rewires_and_cools() {
    // Dissipation off so the only thing acting on heat is the leap cooling
    let params = Params {
        beta_e: 0.0,
        ..always_leap()
    };
    let mut engine = LeapEngine::new(5, params, 21).unwrap();
    engine.state_mut().heat = 2.0;

    let before = engine.current_node();
    let telem = engine.step(0.0, 1.0);

    assert!(telem.did_jump);
    let selected = telem.rewired_to;
    assert_eq!(engine.current_node(), selected);
    assert_eq!(engine.state().weight[(before, selected)], params.delta_w);
    // 2.0 heat cooled by c0, nothing else touches it at zero drive
    assert_eq!(telem.heat, 2.0 * params.c0_cool);
}

#[test]
fn policy_held_stale_between_leaps() {
    let mut engine = LeapEngine::new(5, always_leap(), 42).unwrap();

    let first = engine.step(1.0, 0.5);
    assert!(first.did_jump);
    let frozen = engine.state().policy.clone();

    let calm = Params {
        h0: 0.0,
        ..always_leap()
    };
    engine.set_params(calm);

    for _ in 0..50 {
        let telem = engine.step(1.0, 0.5);
        assert!(!telem.did_jump);
        assert_eq!(engine.state().policy, frozen);
        assert_eq!(telem.policy_entropy, normalized_entropy(frozen.as_slice()));
    }
}
