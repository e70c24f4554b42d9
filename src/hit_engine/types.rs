use crate::clock::Millis;

pub const SENSOR_COUNT: usize = 4;

/// Physical pad zones, in sensor index order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum SensorZone {
    #[default]
    LeftSide = 0,
    CenterLeft = 1,
    CenterRight = 2,
    RightSide = 3,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SensorGroup {
    Sides,
    Center,
}

impl SensorZone {
    pub const ALL: [SensorZone; SENSOR_COUNT] = [
        SensorZone::LeftSide,
        SensorZone::CenterLeft,
        SensorZone::CenterRight,
        SensorZone::RightSide,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Crosstalk topology is fixed: the rim pair opposes the head pair.
    pub const fn group(self) -> SensorGroup {
        match self {
            SensorZone::LeftSide | SensorZone::RightSide => SensorGroup::Sides,
            SensorZone::CenterLeft | SensorZone::CenterRight => SensorGroup::Center,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum HitKind {
    #[default]
    Light = 0,
    Heavy = 1,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HitEvent {
    pub zone: SensorZone,
    pub kind: HitKind,
    pub at: Millis,
}

/// Newly accepted hits for one polling cycle, at most one per sensor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HitBuffer {
    len: usize,
    slots: [Option<HitEvent>; Self::MAX],
}

impl HitBuffer {
    pub const MAX: usize = SENSOR_COUNT;

    pub const fn new() -> Self {
        Self {
            len: 0,
            slots: [None; Self::MAX],
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.slots = [None; Self::MAX];
    }

    pub fn push(&mut self, event: HitEvent) {
        if self.len >= Self::MAX {
            return;
        }
        self.slots[self.len] = Some(event);
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &HitEvent> {
        self.slots[..self.len].iter().filter_map(Option::as_ref)
    }
}

impl Default for HitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a sensor did not register a new hit this cycle. Diagnostic only; the
/// first failing check in evaluation order wins.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum RejectReason {
    #[default]
    None = 0,
    BelowThreshold = 1,
    Ghosted = 2,
    LaneDebounce = 3,
    GlobalGate = 4,
    LaneDisabled = 5,
}

/// Outcome of evaluating one idle sensor's intensity for this cycle.
#[derive(Clone, Copy, Debug, Default)]
pub struct CandidateAssessment {
    pub accepted: bool,
    pub kind: HitKind,
    pub reason: RejectReason,
    pub over_light: bool,
    pub over_heavy: bool,
}

/// Analog intensity provider, implemented by the host against its ADC.
///
/// Read errors never propagate out of the engine; a failed read counts as
/// zero intensity for that cycle.
pub trait SampleSource {
    type Error;

    fn read(&mut self, channel: u8) -> Result<u16, Self::Error>;
}
