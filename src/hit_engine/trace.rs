use super::types::{HitKind, RejectReason, SENSOR_COUNT};

/// Per-sensor diagnostics for one polling cycle.
///
/// `held` marks a sustained press that was not re-evaluated (and therefore
/// not sampled); `accepted` marks a hit registered this cycle. `kind` is only
/// meaningful alongside `accepted`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LaneTrace {
    pub intensity: u16,
    pub pressed: bool,
    pub held: bool,
    pub accepted: bool,
    pub kind: HitKind,
    pub reason: RejectReason,
    pub read_fault: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PollTrace {
    pub now_ms: u32,
    pub lanes: [LaneTrace; SENSOR_COUNT],
}
