use donka::trace_log::{format_poll_trace, HitSessionLog};
use donka::{active_profile, Buttons, HitEngine, HitKind, Millis, SampleSource, SensorZone};

struct Bench {
    frame: [u16; 4],
}

impl SampleSource for Bench {
    type Error = core::convert::Infallible;

    fn read(&mut self, channel: u8) -> Result<u16, Self::Error> {
        Ok(self.frame.get(usize::from(channel)).copied().unwrap_or(0))
    }
}

#[test]
fn compiled_profile_drives_a_full_hit_cycle() {
    let mut engine = HitEngine::new();
    assert!(!engine.is_active());
    engine.initialize(active_profile());
    assert!(engine.is_active());

    let mut bench = Bench { frame: [0; 4] };

    // Right-side strike above its heavy threshold (3600).
    bench.frame[3] = 3800;
    let strike = engine.poll(Millis(1_000), &mut bench);
    assert_eq!(strike.buttons, Buttons::B4);
    assert_eq!(strike.hits.len(), 1);
    let hit = strike.hits.iter().next().expect("missing hit");
    assert_eq!(hit.zone, SensorZone::RightSide);
    assert_eq!(hit.kind, HitKind::Heavy);

    // Output persists through the 30 ms hold window even after the sensor
    // goes quiet.
    bench.frame[3] = 0;
    let held = engine.poll(Millis(1_020), &mut bench);
    assert_eq!(held.buttons, Buttons::B4);
    assert!(held.hits.is_empty());

    // Fully released once hold and debounce expire.
    let idle = engine.poll(Millis(1_100), &mut bench);
    assert_eq!(idle.buttons, Buttons::empty());

    // A center-left tap above its light threshold (600) fires B2 now that
    // the global gate has reopened.
    bench.frame[1] = 900;
    let tap = engine.poll(Millis(1_200), &mut bench);
    assert_eq!(tap.buttons, Buttons::B2);
    assert_eq!(
        tap.hits.iter().next().map(|hit| hit.kind),
        Some(HitKind::Light)
    );
}

#[test]
fn session_log_captures_replayable_cycles() {
    let mut engine = HitEngine::new();
    engine.initialize(active_profile());

    let mut bench = Bench { frame: [0; 4] };
    let mut log = HitSessionLog::new();

    bench.frame[0] = 4000;
    log.record(&engine.poll(Millis(0), &mut bench));
    bench.frame[0] = 0;
    log.record(&engine.poll(Millis(10), &mut bench));

    assert_eq!(log.samples().len(), 2);
    assert_eq!(log.hits().len(), 1);
    assert_eq!(log.hits()[0].zone, SensorZone::LeftSide);
    assert!(!log.overflowed());

    let first_line = format_poll_trace(&log.samples()[0]);
    assert!(first_line.as_str().starts_with("pad_trace,0,4000,1,1,none,0"));
}
