use crate::clock::Millis;

use super::arbiter::{permits, GroupActivity};
use super::config::EngineConfig;
use super::sensors::SensorState;
use super::types::{CandidateAssessment, HitKind, RejectReason, SensorZone};

/// Evaluate one idle sensor's intensity against the acceptance pipeline.
///
/// `global_open` is the cross-sensor debounce gate as snapshotted at the top
/// of the cycle. It gates light strikes only; a heavy strike is accepted
/// regardless of gate state.
pub(crate) fn assess_hit_candidate(
    zone: SensorZone,
    sensor: &SensorState,
    intensity: u16,
    activity: GroupActivity,
    global_open: bool,
    now: Millis,
    config: &EngineConfig,
) -> CandidateAssessment {
    let over_light = intensity > sensor.threshold_light;
    let over_heavy = intensity > sensor.threshold_heavy;

    let mut assessment = CandidateAssessment {
        accepted: false,
        kind: if over_heavy {
            HitKind::Heavy
        } else {
            HitKind::Light
        },
        reason: RejectReason::None,
        over_light,
        over_heavy,
    };

    if !over_light && !over_heavy {
        assessment.reason = RejectReason::BelowThreshold;
        return assessment;
    }

    let arbiter_ok = permits(
        zone,
        activity,
        config.anti_ghost_sides_enabled,
        config.anti_ghost_center_enabled,
    );
    if !arbiter_ok {
        assessment.reason = RejectReason::Ghosted;
        return assessment;
    }

    // A sensor that has never triggered passes its debounce at any clock
    // value, including zero.
    let debounce_ok = sensor
        .last_trigger
        .is_none_or(|last| now.since(last) > config.debounce_ms);
    if !debounce_ok {
        assessment.reason = RejectReason::LaneDebounce;
        return assessment;
    }

    let light_hit = over_light && global_open;
    let heavy_hit = over_heavy;
    if !(light_hit || heavy_hit) {
        assessment.reason = RejectReason::GlobalGate;
        return assessment;
    }

    assessment.accepted = true;
    assessment
}
