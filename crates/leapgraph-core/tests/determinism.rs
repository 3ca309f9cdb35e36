use leapgraph_core::{LeapEngine, Params};

fn drive_at(tick: usize) -> f64 {
    let t = tick as f64 * 0.1;
    0.9 + 0.5 * (0.4 * t).sin()
}

#[test]
fn identical_seeds_replay_bitwise() {
    let params = Params {
        theta0: 0.0,
        h0: 2.0,
        eps_noise: 0.05,
        sigma: 0.3,
        ..Params::default()
    };

    let mut a = LeapEngine::new(12, params, 9001).unwrap();
    let mut b = LeapEngine::new(12, params, 9001).unwrap();

    let mut leaps = 0;
    for tick in 0..800 {
        let drive = drive_at(tick);
        let ta = a.step(drive, 0.1);
        let tb = b.step(drive, 0.1);
        assert_eq!(ta, tb, "telemetry diverged at tick {}", tick);
        if ta.did_jump {
            leaps += 1;
        }
    }

    assert_eq!(a.state(), b.state());
    println!("replayed 800 ticks with {} leaps, no divergence", leaps);
    assert!(leaps > 0, "config should leap at least once");
}

#[test]
fn different_seeds_diverge() {
    let params = Params {
        eps_noise: 0.05,
        ..Params::default()
    };

    let mut a = LeapEngine::new(6, params, 1).unwrap();
    let mut b = LeapEngine::new(6, params, 2).unwrap();

    let trace_a: Vec<_> = (0..200).map(|k| a.step(drive_at(k), 0.1)).collect();
    let trace_b: Vec<_> = (0..200).map(|k| b.step(drive_at(k), 0.1)).collect();
    assert_ne!(trace_a, trace_b);
}

#[test]
fn seed_zero_matches_fallback_seed() {
    let params = Params {
        eps_noise: 0.05,
        sigma: 0.3,
        ..Params::default()
    };

    let mut a = LeapEngine::new(5, params, 0).unwrap();
    let mut b = LeapEngine::new(5, params, 123_456_789).unwrap();

    for tick in 0..100 {
        let drive = drive_at(tick);
        assert_eq!(a.step(drive, 0.1), b.step(drive, 0.1));
    }
}
