use crate::clock::Millis;
use crate::report::Buttons;

use super::config::{
    non_zero_or, output_or_default, SensorProfile, DEFAULT_THRESHOLD_HEAVY,
    DEFAULT_THRESHOLD_LIGHT,
};
use super::types::SensorZone;

/// One pad zone's resolved configuration and runtime state.
#[derive(Clone, Copy, Debug)]
pub struct SensorState {
    pub(crate) channel: Option<u8>,
    pub(crate) output: Buttons,
    pub(crate) threshold_light: u16,
    pub(crate) threshold_heavy: u16,
    pub(crate) pressed: bool,
    pub(crate) last_trigger: Option<Millis>,
}

impl SensorState {
    pub(crate) const fn disabled() -> Self {
        Self {
            channel: None,
            output: Buttons::empty(),
            threshold_light: 0,
            threshold_heavy: 0,
            pressed: false,
            last_trigger: None,
        }
    }

    /// Resolve a raw profile entry against the zone's built-in defaults.
    pub(crate) fn from_profile(zone: SensorZone, profile: &SensorProfile) -> Self {
        Self {
            channel: profile.channel,
            output: output_or_default(profile.output, zone),
            threshold_light: non_zero_or(
                profile.threshold_light,
                DEFAULT_THRESHOLD_LIGHT[zone.index()],
            ),
            threshold_heavy: non_zero_or(
                profile.threshold_heavy,
                DEFAULT_THRESHOLD_HEAVY[zone.index()],
            ),
            pressed: false,
            last_trigger: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.channel.is_some()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn output(&self) -> Buttons {
        self.output
    }

    pub fn thresholds(&self) -> (u16, u16) {
        (self.threshold_light, self.threshold_heavy)
    }

    pub(crate) fn mark_pressed(&mut self, now: Millis) {
        self.pressed = true;
        self.last_trigger = Some(now);
    }

    // Keeps the trigger timestamp: the per-sensor debounce window is measured
    // from the last accepted hit, not from release.
    pub(crate) fn clear_pressed(&mut self) {
        self.pressed = false;
    }
}
