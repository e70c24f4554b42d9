mod arbiter;
pub mod config;
mod core;
mod detect;
pub mod sensors;
pub mod trace;
pub mod types;

pub use self::core::{HitEngine, PollOutput};
pub use self::types::{HitEvent, HitKind, SampleSource, SensorZone};
