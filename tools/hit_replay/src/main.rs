use std::{
    env,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    process,
};

use donka::hit_engine::config::profile_lints;
use donka::trace_log::{
    format_hit, format_poll_trace, hit_kind_label, zone_label, HIT_HEADER, POLL_TRACE_HEADER,
};
use donka::{active_profile, HitEngine, Millis, SampleSource};

const SENSOR_COUNT: usize = 4;

#[derive(Clone, Copy)]
struct ReplayFrame {
    ms: u32,
    channels: [u16; SENSOR_COUNT],
}

struct FrameSource {
    frame: [u16; SENSOR_COUNT],
}

impl SampleSource for FrameSource {
    type Error = ();

    fn read(&mut self, channel: u8) -> Result<u16, ()> {
        self.frame.get(usize::from(channel)).copied().ok_or(())
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let mut frames_path: Option<PathBuf> = None;
    let mut expect_path: Option<PathBuf> = None;
    let mut show_trace = false;

    let mut idx = 1usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--expect" => {
                idx += 1;
                let Some(path) = args.get(idx) else {
                    return Err("missing path after --expect".into());
                };
                expect_path = Some(PathBuf::from(path));
            }
            "--trace" => {
                show_trace = true;
            }
            "-h" | "--help" => {
                println!("{}", usage());
                return Ok(());
            }
            value if value.starts_with('-') => {
                return Err(format!("unknown argument: {value}"));
            }
            value => {
                if frames_path.is_some() {
                    return Err("multiple frame paths provided".into());
                }
                frames_path = Some(PathBuf::from(value));
            }
        }
        idx += 1;
    }

    let frames_path = frames_path.ok_or_else(usage)?;
    let frames = parse_frames(&frames_path)?;

    let profile = active_profile();
    for lint in profile_lints(profile).iter() {
        eprintln!("warning: profile lint {lint}");
    }

    let mut engine = HitEngine::new();
    engine.initialize(profile);
    if !engine.is_active() {
        return Err("compiled profile is disabled; nothing to replay".into());
    }

    let mut source = FrameSource {
        frame: [0; SENSOR_COUNT],
    };
    let mut observed: Vec<String> = Vec::new();

    if show_trace {
        println!("{POLL_TRACE_HEADER}");
    }
    println!("{HIT_HEADER}");
    for frame in &frames {
        source.frame = frame.channels;
        let output = engine.poll(Millis(frame.ms), &mut source);
        if show_trace {
            println!("{}", format_poll_trace(&output.trace));
        }
        for hit in output.hits.iter() {
            println!("{}", format_hit(hit));
            observed.push(format!(
                "{}:{}",
                zone_label(hit.zone),
                hit_kind_label(hit.kind)
            ));
        }
    }

    if let Some(expect_path) = expect_path {
        let expected = parse_expected_hits(&expect_path)?;
        if observed != expected {
            eprintln!("expected hits: {}", expected.join(","));
            eprintln!("actual hits:   {}", observed.join(","));
            return Err("hit sequence mismatch".into());
        }
    }

    Ok(())
}

fn usage() -> String {
    "usage: hit_replay <frames.csv> [--trace] [--expect expected_hits.txt]".to_string()
}

fn parse_frames(path: &Path) -> Result<Vec<ReplayFrame>, String> {
    let file = File::open(path).map_err(|e| format!("failed to open {}: {e}", path.display()))?;
    let reader = BufReader::new(file);

    let mut out: Vec<ReplayFrame> = Vec::new();
    for (line_no, line_result) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line_result
            .map_err(|e| format!("failed to read {}:{}: {e}", path.display(), line_no))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if trimmed == "pad_frame,ms,ch0,ch1,ch2,ch3" {
            continue;
        }

        let parts: Vec<&str> = trimmed.split(',').collect();
        if parts[0].trim() != "pad_frame" {
            continue;
        }
        if parts.len() != 6 {
            return Err(format!(
                "{}:{} invalid frame line, expected 6 columns",
                path.display(),
                line_no
            ));
        }

        let ms = parse_u32(parts[1], path, line_no, "ms")?;
        let mut channels = [0u16; SENSOR_COUNT];
        for (offset, slot) in channels.iter_mut().enumerate() {
            *slot = parse_u16(parts[2 + offset], path, line_no, "channel intensity")?;
        }

        out.push(ReplayFrame { ms, channels });
    }

    Ok(out)
}

fn parse_expected_hits(path: &Path) -> Result<Vec<String>, String> {
    let file = File::open(path).map_err(|e| format!("failed to open {}: {e}", path.display()))?;
    let reader = BufReader::new(file);

    let mut hits = Vec::new();
    for (line_no, line_result) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line_result
            .map_err(|e| format!("failed to read {}:{}: {e}", path.display(), line_no))?;
        for token in line.split(',') {
            let token = token.trim();
            if token.is_empty() || token.starts_with('#') {
                continue;
            }

            let normalized = normalize_hit_token(token).ok_or_else(|| {
                format!(
                    "{}:{} invalid expected hit: {}",
                    path.display(),
                    line_no,
                    token
                )
            })?;
            hits.push(normalized);
        }
    }

    Ok(hits)
}

/// Tokens are `zone:kind`, e.g. `left_side:heavy` or `center_left:light`.
fn normalize_hit_token(token: &str) -> Option<String> {
    let lowered = token.trim().to_ascii_lowercase();
    let (zone, kind) = lowered.split_once(':')?;
    let zone = match zone {
        "left_side" | "center_left" | "center_right" | "right_side" => zone,
        _ => return None,
    };
    let kind = match kind {
        "light" | "heavy" => kind,
        _ => return None,
    };
    Some(format!("{zone}:{kind}"))
}

fn parse_u32(raw: &str, path: &Path, line_no: usize, field: &str) -> Result<u32, String> {
    raw.trim().parse::<u32>().map_err(|e| {
        format!(
            "{}:{} invalid {} '{}': {}",
            path.display(),
            line_no,
            field,
            raw.trim(),
            e
        )
    })
}

fn parse_u16(raw: &str, path: &Path, line_no: usize, field: &str) -> Result<u16, String> {
    raw.trim().parse::<u16>().map_err(|e| {
        format!(
            "{}:{} invalid {} '{}': {}",
            path.display(),
            line_no,
            field,
            raw.trim(),
            e
        )
    })
}
