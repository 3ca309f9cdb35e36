pub mod constant;
pub mod sine;
pub mod pulse;
pub mod recorded;

pub use constant::ConstantDrive;
pub use sine::SineDrive;
pub use pulse::PulseDrive;
pub use recorded::RecordedDrive;
