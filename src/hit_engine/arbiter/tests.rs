use super::*;
use crate::clock::Millis;

fn bank(pressed: [bool; SENSOR_COUNT]) -> [SensorState; SENSOR_COUNT] {
    let mut sensors = [SensorState::disabled(); SENSOR_COUNT];
    for (state, is_pressed) in sensors.iter_mut().zip(pressed) {
        if is_pressed {
            state.mark_pressed(Millis::ZERO);
        }
    }
    sensors
}

#[test]
fn idle_bank_reports_no_activity() {
    assert_eq!(
        group_activity(&bank([false, false, false, false])),
        GroupActivity::default()
    );
}

#[test]
fn rim_sensors_drive_sides_activity() {
    let left_only = group_activity(&bank([true, false, false, false]));
    assert!(left_only.sides_active);
    assert!(!left_only.center_active);

    let right_only = group_activity(&bank([false, false, false, true]));
    assert!(right_only.sides_active);
    assert!(!right_only.center_active);
}

#[test]
fn head_sensors_drive_center_activity() {
    let both_heads = group_activity(&bank([false, true, true, false]));
    assert!(both_heads.center_active);
    assert!(!both_heads.sides_active);
}

#[test]
fn mixed_bank_reports_both_groups() {
    let mixed = group_activity(&bank([true, true, false, false]));
    assert!(mixed.sides_active);
    assert!(mixed.center_active);
}

#[test]
fn center_activity_vetoes_side_candidates_only_when_enabled() {
    let activity = GroupActivity {
        sides_active: false,
        center_active: true,
    };
    assert!(!permits(SensorZone::LeftSide, activity, true, true));
    assert!(!permits(SensorZone::RightSide, activity, false, true));
    assert!(permits(SensorZone::LeftSide, activity, true, false));
    // Same-group activity never vetoes.
    assert!(permits(SensorZone::CenterLeft, activity, true, true));
}

#[test]
fn sides_activity_vetoes_center_candidates_only_when_enabled() {
    let activity = GroupActivity {
        sides_active: true,
        center_active: false,
    };
    assert!(!permits(SensorZone::CenterLeft, activity, true, true));
    assert!(!permits(SensorZone::CenterRight, activity, true, false));
    assert!(permits(SensorZone::CenterLeft, activity, false, true));
    assert!(permits(SensorZone::RightSide, activity, true, true));
}
