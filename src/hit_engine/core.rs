use crate::clock::Millis;
use crate::report::Buttons;

use super::arbiter::group_activity;
use super::config::{EngineConfig, PadProfile};
use super::detect::assess_hit_candidate;
use super::sensors::SensorState;
use super::trace::{LaneTrace, PollTrace};
use super::types::{HitBuffer, HitEvent, RejectReason, SampleSource, SensorZone, SENSOR_COUNT};

/// Everything one polling cycle produced. `buttons` is the OR of the output
/// codes owed to the host report this cycle, held sensors included.
#[derive(Clone, Copy, Debug, Default)]
pub struct PollOutput {
    pub buttons: Buttons,
    pub hits: HitBuffer,
    pub trace: PollTrace,
}

/// Percussive input engine over a bank of four analog sensors.
///
/// Built once, then driven by [`HitEngine::poll`] from the host's input
/// loop. Inert until [`HitEngine::initialize`] applies a profile that is
/// marked enabled.
pub struct HitEngine {
    sensors: [SensorState; SENSOR_COUNT],
    config: EngineConfig,
    global_debounce: Option<Millis>,
    enabled: bool,
    initialized: bool,
}

impl HitEngine {
    pub fn new() -> Self {
        Self {
            sensors: [SensorState::disabled(); SENSOR_COUNT],
            config: EngineConfig::default(),
            global_debounce: None,
            enabled: false,
            initialized: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.initialized && self.enabled
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn sensor(&self, zone: SensorZone) -> &SensorState {
        &self.sensors[zone.index()]
    }

    /// Apply a profile: resolve defaults, populate the sensor bank, and reset
    /// all runtime state (pressed flags, trigger times, the global gate).
    pub fn initialize(&mut self, profile: &PadProfile) {
        self.config = EngineConfig::from_profile(profile);
        for zone in SensorZone::ALL {
            self.sensors[zone.index()] =
                SensorState::from_profile(zone, &profile.sensors[zone.index()]);
        }
        self.global_debounce = None;
        self.enabled = profile.enabled;
        self.initialized = true;
    }

    /// Run one polling cycle at `now`. Never blocks and never fails; an
    /// inactive engine returns an empty cycle.
    pub fn poll<S: SampleSource>(&mut self, now: Millis, source: &mut S) -> PollOutput {
        let mut out = PollOutput::default();
        out.trace.now_ms = now.0;
        if !self.is_active() {
            return out;
        }

        // Arbitration and the global gate see pre-cycle state only: a hit
        // accepted below affects neither until the next cycle.
        let activity = group_activity(&self.sensors);
        let global_open = self
            .global_debounce
            .is_none_or(|last| now.since(last) > self.config.debounce_ms);

        for zone in SensorZone::ALL {
            let lane = zone.index();
            let sensor = &mut self.sensors[lane];

            let Some(channel) = sensor.channel else {
                out.trace.lanes[lane].reason = RejectReason::LaneDisabled;
                continue;
            };

            if sensor.pressed {
                let held = sensor
                    .last_trigger
                    .is_some_and(|last| now.since(last) <= self.config.hold_ms);
                if held {
                    out.buttons |= sensor.output;
                    out.trace.lanes[lane] = LaneTrace {
                        pressed: true,
                        held: true,
                        ..LaneTrace::default()
                    };
                    continue;
                }
                // Hold expired: release, then evaluate a fresh candidate in
                // this same cycle.
                sensor.clear_pressed();
            }

            let (intensity, read_fault) = match source.read(channel) {
                Ok(value) => (value, false),
                Err(_) => (0, true),
            };

            let assessment = assess_hit_candidate(
                zone,
                sensor,
                intensity,
                activity,
                global_open,
                now,
                &self.config,
            );

            out.trace.lanes[lane] = LaneTrace {
                intensity,
                pressed: assessment.accepted,
                held: false,
                accepted: assessment.accepted,
                kind: assessment.kind,
                reason: assessment.reason,
                read_fault,
            };

            if assessment.accepted {
                sensor.mark_pressed(now);
                // Heavy strikes close the gate too, even though they ignore
                // its state on entry.
                self.global_debounce = Some(now);
                out.buttons |= sensor.output;
                out.hits.push(HitEvent {
                    zone,
                    kind: assessment.kind,
                    at: now,
                });
            }
        }

        out
    }
}

impl Default for HitEngine {
    fn default() -> Self {
        Self::new()
    }
}
