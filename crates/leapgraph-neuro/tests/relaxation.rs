use approx::assert_relative_eq;
use leapgraph_core::Params;
use leapgraph_neuro::{ModulatedEngine, NeuroModel};

#[test]
fn channels_relax_monotonically_toward_baseline() {
    let mut model = NeuroModel::default();
    model.levels.da = 1.0;

    let mut previous = model.levels.da;
    for _ in 0..200 {
        model.tick(1.0);
        assert!(model.levels.da < previous, "relaxation must be monotone");
        assert!(model.levels.da >= model.baseline.da);
        previous = model.levels.da;
    }
    // tau_DA = 30s, so 200s closes most of the gap
    assert!(model.levels.da - model.baseline.da < 0.01);
}

#[test]
fn tiny_time_constant_freezes_the_channel() {
    let mut model = NeuroModel::default();
    model.levels.cort = 0.9;
    model.time_constants.cort = 1e-3;

    for _ in 0..50 {
        model.tick(1.0);
    }
    assert_eq!(model.levels.cort, 0.9);
    // The other channels are already at baseline and stay there
    assert_relative_eq!(model.levels.da, 0.5);
}

#[test]
fn oversized_step_clamps_instead_of_overshooting() {
    let mut model = NeuroModel::default();
    model.levels.ad = 0.0;
    model.baseline.ad = 1.0;
    // dt/tau = 3 would carry the Euler step to 3.0 without the clamp
    model.tick(3.0 * model.time_constants.ad);
    assert_eq!(model.levels.ad, 1.0);
}

#[test]
fn praise_shifts_the_expected_channels() {
    let mut model = NeuroModel::default();
    model.apply_event("praise");

    assert_relative_eq!(model.levels.da, 0.6);
    assert_relative_eq!(model.levels.s5, 0.55);
    assert_relative_eq!(model.levels.oxt, 0.6);
    assert_relative_eq!(model.levels.cort, 0.48);
    assert_eq!(model.levels.ne, 0.5);
    assert_eq!(model.levels.ad, 0.5);
}

#[test]
fn event_deltas_clamp_at_the_ceiling() {
    let mut model = NeuroModel::default();
    model.levels.oxt = 0.95;
    model.apply_event("praise");
    assert_eq!(model.levels.oxt, 1.0);
}

#[test]
fn unknown_event_changes_nothing() {
    let mut model = NeuroModel::default();
    let before = model.levels;
    model.apply_event("solar_eclipse");
    assert_eq!(model.levels, before);
}

#[test]
fn oxt_boost_is_neutral_at_midpoint() {
    let mut model = NeuroModel::default();
    assert_relative_eq!(model.oxt_boost(0.3), 1.0);

    model.levels.oxt = 1.0;
    assert_relative_eq!(model.oxt_boost(0.3), 1.3);

    model.levels.oxt = 0.0;
    assert_relative_eq!(model.oxt_boost(0.3), 0.7);
}

#[test]
fn stress_event_loosens_the_leap_gate() {
    let mut system = ModulatedEngine::new(6, 7).unwrap();
    let base = Params::default();

    system.apply_event("insult_god");
    system.tick(0.5, 0.1);

    let after_one = system.params();
    println!(
        "after insult_god: h0 {:.4} -> {:.4}, theta0 {:.4} -> {:.4}",
        base.h0, after_one.h0, base.theta0, after_one.theta0
    );
    assert!(after_one.h0 > base.h0, "stress should raise the leap rate");
    assert!(
        after_one.theta0 < base.theta0,
        "stress should lower the threshold"
    );

    // The coupling feeds back the stored bundle, so a still-elevated state
    // pushes the coefficients further on the next tick.
    system.tick(0.5, 0.1);
    let after_two = system.params();
    assert!(after_two.h0 > after_one.h0);
}
