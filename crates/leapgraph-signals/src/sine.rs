use leapgraph_core::{DriveSignal, Time};
use std::f64::consts::PI;

/// Sinusoidal drive: p(t) = offset + amplitude * sin(2πt/period + phase)
#[derive(Clone, Copy, Debug)]
pub struct SineDrive {
    pub amplitude: f64,
    pub period: f64, // seconds per cycle
    pub phase: f64,  // radians
    pub offset: f64,
}

impl SineDrive {
    pub fn new(amplitude: f64, period: f64) -> Self {
        assert!(period > 0.0, "period must be positive");
        Self {
            amplitude,
            period,
            phase: 0.0,
            offset: 0.0,
        }
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }
}

impl DriveSignal for SineDrive {
    fn value(&self, t: Time) -> f64 {
        self.offset + self.amplitude * (2.0 * PI * t / self.period + self.phase).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn peaks_at_the_quarter_period() {
        let sine = SineDrive::new(2.0, 8.0);
        assert_relative_eq!(sine.value(0.0), 0.0);
        assert_relative_eq!(sine.value(2.0), 2.0);
        assert_relative_eq!(sine.value(6.0), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn builders_shift_and_delay() {
        let sine = SineDrive::new(1.0, 4.0).with_offset(0.5).with_phase(PI);
        assert_relative_eq!(sine.value(0.0), 0.5, epsilon = 1e-12);
        // Half a cycle of phase flips the sign
        assert_relative_eq!(sine.value(1.0), -0.5, epsilon = 1e-12);
    }
}
