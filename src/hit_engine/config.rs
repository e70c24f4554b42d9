use core::fmt;

use crate::report::Buttons;

use super::types::{SensorZone, SENSOR_COUNT};

/// Ceiling of the analog intensity scale (12-bit conversions).
pub const INTENSITY_MAX: u16 = 4095;

pub const DEFAULT_DEBOUNCE_MS: u16 = 45;
pub const DEFAULT_HOLD_MS: u16 = 30;
pub const DEFAULT_THRESHOLD_LIGHT: [u16; SENSOR_COUNT] = [1400, 600, 700, 1400];
pub const DEFAULT_THRESHOLD_HEAVY: [u16; SENSOR_COUNT] = [3600, 2600, 2700, 3600];
pub const DEFAULT_OUTPUT: [Buttons; SENSOR_COUNT] =
    [Buttons::B1, Buttons::B2, Buttons::B3, Buttons::B4];

/// Raw per-sensor settings as persisted by the host. Zero thresholds and an
/// empty output mean "use the built-in default for this zone"; a sensor
/// without a channel is disabled.
#[derive(Clone, Copy, Debug)]
pub struct SensorProfile {
    pub channel: Option<u8>,
    pub output: Buttons,
    pub threshold_light: u16,
    pub threshold_heavy: u16,
}

/// Raw pad settings as persisted by the host. Zero timing values mean "use
/// the built-in default".
#[derive(Clone, Copy, Debug)]
pub struct PadProfile {
    pub enabled: bool,
    pub debounce_ms: u16,
    pub hold_ms: u16,
    pub anti_ghost_sides_enabled: bool,
    pub anti_ghost_center_enabled: bool,
    pub sensors: [SensorProfile; SENSOR_COUNT],
}

/// Engine-wide settings after default resolution.
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    pub debounce_ms: u32,
    pub hold_ms: u32,
    pub anti_ghost_sides_enabled: bool,
    pub anti_ghost_center_enabled: bool,
}

impl EngineConfig {
    pub(crate) fn from_profile(profile: &PadProfile) -> Self {
        Self {
            debounce_ms: u32::from(non_zero_or(profile.debounce_ms, DEFAULT_DEBOUNCE_MS)),
            hold_ms: u32::from(non_zero_or(profile.hold_ms, DEFAULT_HOLD_MS)),
            anti_ghost_sides_enabled: profile.anti_ghost_sides_enabled,
            anti_ghost_center_enabled: profile.anti_ghost_center_enabled,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce_ms: u32::from(DEFAULT_DEBOUNCE_MS),
            hold_ms: u32::from(DEFAULT_HOLD_MS),
            anti_ghost_sides_enabled: true,
            anti_ghost_center_enabled: true,
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/pad_profile.rs"));

/// Profile compiled from `config/pads.toml` at build time.
pub fn active_profile() -> &'static PadProfile {
    &PAD_PROFILE
}

pub(crate) fn non_zero_or(value: u16, default: u16) -> u16 {
    if value == 0 {
        default
    } else {
        value
    }
}

pub(crate) fn output_or_default(output: Buttons, zone: SensorZone) -> Buttons {
    if output.is_empty() {
        DEFAULT_OUTPUT[zone.index()]
    } else {
        output
    }
}

pub const PROFILE_LINT_MAX: usize = 3 * SENSOR_COUNT;

/// Suspicious but accepted profile settings. The engine still runs with
/// them; hosts are expected to surface these at startup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProfileLint {
    HeavyNotAboveLight { zone: SensorZone, light: u16, heavy: u16 },
    LightUnreachable { zone: SensorZone, light: u16 },
    HeavyUnreachable { zone: SensorZone, heavy: u16 },
    AllSensorsDisabled,
}

impl fmt::Display for ProfileLint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ProfileLint::HeavyNotAboveLight { zone, light, heavy } => write!(
                f,
                "heavy_not_above_light zone={} light={} heavy={}",
                zone.index(),
                light,
                heavy
            ),
            ProfileLint::LightUnreachable { zone, light } => write!(
                f,
                "light_unreachable zone={} light={} ceiling={}",
                zone.index(),
                light,
                INTENSITY_MAX
            ),
            ProfileLint::HeavyUnreachable { zone, heavy } => write!(
                f,
                "heavy_unreachable zone={} heavy={} ceiling={}",
                zone.index(),
                heavy,
                INTENSITY_MAX
            ),
            ProfileLint::AllSensorsDisabled => write!(f, "all_sensors_disabled"),
        }
    }
}

/// Check a profile for settings that resolve to something unplayable.
/// Thresholds are checked after zone-default resolution; disabled sensors
/// are skipped.
pub fn profile_lints(profile: &PadProfile) -> heapless::Vec<ProfileLint, PROFILE_LINT_MAX> {
    let mut lints = heapless::Vec::new();
    let mut any_enabled = false;
    for zone in SensorZone::ALL {
        let sensor = &profile.sensors[zone.index()];
        if sensor.channel.is_none() {
            continue;
        }
        any_enabled = true;
        let light = non_zero_or(sensor.threshold_light, DEFAULT_THRESHOLD_LIGHT[zone.index()]);
        let heavy = non_zero_or(sensor.threshold_heavy, DEFAULT_THRESHOLD_HEAVY[zone.index()]);
        if heavy <= light {
            let _ = lints.push(ProfileLint::HeavyNotAboveLight { zone, light, heavy });
        }
        // Acceptance needs intensity strictly above the threshold, so a
        // threshold at the ceiling can never fire.
        if light >= INTENSITY_MAX {
            let _ = lints.push(ProfileLint::LightUnreachable { zone, light });
        }
        if heavy >= INTENSITY_MAX {
            let _ = lints.push(ProfileLint::HeavyUnreachable { zone, heavy });
        }
    }
    if !any_enabled {
        let _ = lints.push(ProfileLint::AllSensorsDisabled);
    }
    lints
}

pub fn log_profile_lints(profile: &PadProfile) {
    for lint in profile_lints(profile).iter() {
        log::warn!("pads: profile lint {lint}");
    }
}

#[cfg(test)]
mod tests;
