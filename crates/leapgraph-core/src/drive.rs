use crate::state::Time;

/// External scalar input sampled once per tick.
pub trait DriveSignal: Send + Sync {
    fn value(&self, t: Time) -> f64;
}
