use super::sensors::SensorState;
use super::types::{SensorGroup, SensorZone, SENSOR_COUNT};

/// Group-activity flags, snapshotted from sensor state before any of the
/// current cycle's updates. A hit accepted this cycle therefore starts
/// suppressing the opposing group on the next cycle, not within its own.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GroupActivity {
    pub sides_active: bool,
    pub center_active: bool,
}

pub(crate) fn group_activity(sensors: &[SensorState; SENSOR_COUNT]) -> GroupActivity {
    let mut activity = GroupActivity::default();
    for zone in SensorZone::ALL {
        if !sensors[zone.index()].is_pressed() {
            continue;
        }
        match zone.group() {
            SensorGroup::Sides => activity.sides_active = true,
            SensorGroup::Center => activity.center_active = true,
        }
    }
    activity
}

/// Whether a candidate on `zone` survives crosstalk arbitration. Each toggle
/// names the group whose activity does the vetoing: `anti_ghost_sides` lets
/// active sides veto center candidates, `anti_ghost_center` the reverse.
pub fn permits(
    zone: SensorZone,
    activity: GroupActivity,
    anti_ghost_sides: bool,
    anti_ghost_center: bool,
) -> bool {
    match zone.group() {
        SensorGroup::Sides => !(anti_ghost_center && activity.center_active),
        SensorGroup::Center => !(anti_ghost_sides && activity.sides_active),
    }
}

#[cfg(test)]
mod tests;
