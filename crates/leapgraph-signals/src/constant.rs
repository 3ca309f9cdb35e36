use leapgraph_core::{DriveSignal, Time};

/// Constant drive: p(t) = level
#[derive(Clone, Copy, Debug)]
pub struct ConstantDrive {
    pub level: f64,
}

impl ConstantDrive {
    pub fn new(level: f64) -> Self {
        Self { level }
    }
}

impl DriveSignal for ConstantDrive {
    fn value(&self, _t: Time) -> f64 {
        self.level
    }
}
