use core::fmt::Write;

use crate::hit_engine::trace::PollTrace;
use crate::hit_engine::types::{HitEvent, HitKind, RejectReason, SensorZone};
use crate::hit_engine::PollOutput;

pub const POLL_TRACE_HEADER: &str =
    "pad_trace,ms,v0,p0,a0,r0,f0,v1,p1,a1,r1,f1,v2,p2,a2,r2,f2,v3,p3,a3,r3,f3";
pub const HIT_HEADER: &str = "pad_hit,ms,zone,kind";

const SESSION_TRACE_CAPACITY: usize = 256;
const SESSION_HIT_CAPACITY: usize = 64;

/// Bounded in-memory capture of recent polling cycles and accepted hits.
/// When full, the oldest entries are dropped first.
pub struct HitSessionLog {
    overflowed: bool,
    samples: heapless::Vec<PollTrace, SESSION_TRACE_CAPACITY>,
    hits: heapless::Vec<HitEvent, SESSION_HIT_CAPACITY>,
}

impl HitSessionLog {
    pub fn new() -> Self {
        Self {
            overflowed: false,
            samples: heapless::Vec::new(),
            hits: heapless::Vec::new(),
        }
    }

    pub fn record(&mut self, output: &PollOutput) {
        if self.samples.push(output.trace).is_err() {
            self.overflowed = true;
            let _ = self.samples.remove(0);
            let _ = self.samples.push(output.trace);
        }
        for hit in output.hits.iter() {
            if self.hits.push(*hit).is_err() {
                self.overflowed = true;
                let _ = self.hits.remove(0);
                let _ = self.hits.push(*hit);
            }
        }
    }

    pub fn samples(&self) -> &[PollTrace] {
        &self.samples
    }

    pub fn hits(&self) -> &[HitEvent] {
        &self.hits
    }

    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn clear(&mut self) {
        self.overflowed = false;
        self.samples.clear();
        self.hits.clear();
    }
}

impl Default for HitSessionLog {
    fn default() -> Self {
        Self::new()
    }
}

/// One CSV line per cycle, matching [`POLL_TRACE_HEADER`].
pub fn format_poll_trace(trace: &PollTrace) -> heapless::String<192> {
    let mut line = heapless::String::new();
    let _ = write!(&mut line, "pad_trace,{}", trace.now_ms);
    for lane in &trace.lanes {
        let _ = write!(
            &mut line,
            ",{},{},{},{},{}",
            lane.intensity,
            bool_as_u8(lane.pressed),
            bool_as_u8(lane.accepted),
            reject_reason_label(lane.reason),
            bool_as_u8(lane.read_fault),
        );
    }
    line
}

/// One CSV line per accepted hit, matching [`HIT_HEADER`].
pub fn format_hit(event: &HitEvent) -> heapless::String<48> {
    let mut line = heapless::String::new();
    let _ = write!(
        &mut line,
        "pad_hit,{},{},{}",
        event.at.0,
        zone_label(event.zone),
        hit_kind_label(event.kind),
    );
    line
}

pub fn log_hits(output: &PollOutput) {
    for hit in output.hits.iter() {
        log::debug!(
            "pads: hit zone={} kind={} ms={}",
            zone_label(hit.zone),
            hit_kind_label(hit.kind),
            hit.at.0,
        );
    }
}

pub fn zone_label(zone: SensorZone) -> &'static str {
    match zone {
        SensorZone::LeftSide => "left_side",
        SensorZone::CenterLeft => "center_left",
        SensorZone::CenterRight => "center_right",
        SensorZone::RightSide => "right_side",
    }
}

pub fn hit_kind_label(kind: HitKind) -> &'static str {
    match kind {
        HitKind::Light => "light",
        HitKind::Heavy => "heavy",
    }
}

pub fn reject_reason_label(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::None => "none",
        RejectReason::BelowThreshold => "below_threshold",
        RejectReason::Ghosted => "ghosted",
        RejectReason::LaneDebounce => "lane_debounce",
        RejectReason::GlobalGate => "global_gate",
        RejectReason::LaneDisabled => "lane_disabled",
    }
}

fn bool_as_u8(value: bool) -> u8 {
    if value {
        1
    } else {
        0
    }
}
