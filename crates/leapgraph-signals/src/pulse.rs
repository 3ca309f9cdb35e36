use leapgraph_core::{DriveSignal, Time};

/// Rectangular pulse train: p(t) = peak while the cycle fraction is below
/// duty, base otherwise.
#[derive(Clone, Copy, Debug)]
pub struct PulseDrive {
    pub base: f64,
    pub peak: f64,
    pub period: f64,
    pub duty: f64, // fraction of each cycle spent at peak
}

impl PulseDrive {
    pub fn new(base: f64, peak: f64, period: f64, duty: f64) -> Self {
        assert!(period > 0.0, "period must be positive");
        assert!((0.0..=1.0).contains(&duty), "duty must lie in [0, 1]");
        Self {
            base,
            peak,
            period,
            duty,
        }
    }
}

impl DriveSignal for PulseDrive {
    fn value(&self, t: Time) -> f64 {
        let fraction = t.rem_euclid(self.period) / self.period;
        if fraction < self.duty {
            self.peak
        } else {
            self.base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_boundaries() {
        let pulse = PulseDrive::new(0.0, 1.0, 10.0, 0.3);
        assert_eq!(pulse.value(0.0), 1.0);
        assert_eq!(pulse.value(2.9), 1.0);
        assert_eq!(pulse.value(3.0), 0.0);
        assert_eq!(pulse.value(9.9), 0.0);
        assert_eq!(pulse.value(10.0), 1.0);
    }

    #[test]
    fn negative_time_wraps() {
        let pulse = PulseDrive::new(-0.5, 2.0, 4.0, 0.5);
        // t = -3 sits at cycle fraction 0.25
        assert_eq!(pulse.value(-3.0), 2.0);
        // t = -1 sits at cycle fraction 0.75
        assert_eq!(pulse.value(-1.0), -0.5);
    }

    #[test]
    fn zero_duty_never_fires() {
        let pulse = PulseDrive::new(0.1, 5.0, 1.0, 0.0);
        for k in 0..20 {
            assert_eq!(pulse.value(k as f64 * 0.13), 0.1);
        }
    }
}
