use leapgraph_core::{DriveSignal, Time};

/// Drive backed by a pre-recorded sample buffer taken at a fixed stride.
///
/// Lookups use zero-order hold: the value at time `t` is the sample whose
/// slot contains `t`, clamped to the last sample past the end of the buffer.
#[derive(Clone, Debug)]
pub struct RecordedDrive {
    samples: Vec<f64>,
    dt: f64,
}

impl RecordedDrive {
    pub fn new(samples: Vec<f64>, dt: f64) -> Self {
        assert!(dt > 0.0, "sample stride must be positive");
        Self { samples, dt }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl DriveSignal for RecordedDrive {
    fn value(&self, t: Time) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let idx = (t / self.dt).floor().max(0.0) as usize;
        self.samples[idx.min(self.samples.len() - 1)]
    }
}
