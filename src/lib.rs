#![no_std]

#[cfg(test)]
extern crate std;

pub mod clock;
pub mod hit_engine;
pub mod report;
pub mod trace_log;

pub use clock::Millis;
pub use hit_engine::config::{active_profile, PadProfile, SensorProfile};
pub use hit_engine::{HitEngine, HitEvent, HitKind, PollOutput, SampleSource, SensorZone};
pub use report::Buttons;
