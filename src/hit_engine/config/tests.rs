use super::*;
use crate::hit_engine::types::SensorZone;
use crate::report::Buttons;

#[test]
fn compiled_default_profile_matches_shipped_settings() {
    let profile = active_profile();
    assert!(profile.enabled);
    assert_eq!(profile.debounce_ms, 45);
    assert_eq!(profile.hold_ms, 30);
    assert!(profile.anti_ghost_sides_enabled);
    assert!(profile.anti_ghost_center_enabled);
    for zone in SensorZone::ALL {
        assert_eq!(
            profile.sensors[zone.index()].channel,
            Some(zone.index() as u8)
        );
    }
    assert_eq!(profile.sensors[0].threshold_light, 1400);
    assert_eq!(profile.sensors[1].threshold_light, 600);
    assert_eq!(profile.sensors[1].threshold_heavy, 2600);
    assert_eq!(profile.sensors[2].threshold_heavy, 2700);
    assert_eq!(profile.sensors[0].output, Buttons::B1);
    assert_eq!(profile.sensors[3].output, Buttons::B4);
}

#[test]
fn compiled_default_profile_is_lint_free() {
    assert!(profile_lints(active_profile()).is_empty());
}

#[test]
fn zero_values_resolve_to_defaults() {
    assert_eq!(non_zero_or(0, 45), 45);
    assert_eq!(non_zero_or(12, 45), 12);
    assert_eq!(
        output_or_default(Buttons::empty(), SensorZone::CenterRight),
        Buttons::B3
    );
    assert_eq!(
        output_or_default(Buttons::L1, SensorZone::CenterRight),
        Buttons::L1
    );

    let mut profile = *active_profile();
    profile.debounce_ms = 0;
    profile.hold_ms = 0;
    let config = EngineConfig::from_profile(&profile);
    assert_eq!(config.debounce_ms, 45);
    assert_eq!(config.hold_ms, 30);
}

#[test]
fn inverted_tiers_are_linted() {
    let mut profile = *active_profile();
    profile.sensors[1].threshold_heavy = 500;
    let lints = profile_lints(&profile);
    assert!(lints.iter().any(|lint| matches!(
        lint,
        ProfileLint::HeavyNotAboveLight {
            zone: SensorZone::CenterLeft,
            light: 600,
            heavy: 500,
        }
    )));
}

#[test]
fn ceiling_thresholds_are_linted_as_unreachable() {
    let mut profile = *active_profile();
    profile.sensors[0].threshold_light = INTENSITY_MAX;
    profile.sensors[3].threshold_heavy = INTENSITY_MAX;
    let lints = profile_lints(&profile);
    assert!(lints.iter().any(|lint| matches!(
        lint,
        ProfileLint::LightUnreachable {
            zone: SensorZone::LeftSide,
            ..
        }
    )));
    assert!(lints.iter().any(|lint| matches!(
        lint,
        ProfileLint::HeavyUnreachable {
            zone: SensorZone::RightSide,
            ..
        }
    )));
}

#[test]
fn zero_thresholds_are_resolved_before_linting() {
    let mut profile = *active_profile();
    profile.sensors[2].threshold_light = 0;
    profile.sensors[2].threshold_heavy = 0;
    assert!(profile_lints(&profile).is_empty());
}

#[test]
fn disabled_sensors_are_skipped_and_an_empty_bank_is_linted() {
    let mut profile = *active_profile();
    // A disabled sensor's thresholds are irrelevant, however odd.
    profile.sensors[1].channel = None;
    profile.sensors[1].threshold_heavy = 1;
    assert!(profile_lints(&profile).is_empty());

    for sensor in &mut profile.sensors {
        sensor.channel = None;
    }
    let lints = profile_lints(&profile);
    assert_eq!(lints.len(), 1);
    assert_eq!(lints[0], ProfileLint::AllSensorsDisabled);
}

#[test]
fn lint_display_is_key_value_formatted() {
    let lint = ProfileLint::HeavyNotAboveLight {
        zone: SensorZone::CenterLeft,
        light: 600,
        heavy: 500,
    };
    let rendered = std::format!("{lint}");
    assert_eq!(rendered, "heavy_not_above_light zone=1 light=600 heavy=500");
}
