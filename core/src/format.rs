//! Pure value formatters and the fixed lookup tables they draw from.
//!
//! Everything here is total: unknown enumerated codes resolve to a literal
//! fallback token (`"Unknown"`, `"Default"`, or the raw number) and
//! unparseable raw values are passed through verbatim. No formatter touches
//! locale, time, or any other ambient state, so identical inputs always
//! produce identical strings.

/// Track color palette, keyed by the raw color code attribute.
const COLORS: &[(&str, &str)] = &[
    ("0", "Gray"),
    ("1", "Rose"),
    ("2", "Red"),
    ("3", "Orange"),
    ("4", "Gold"),
    ("5", "Yellow"),
    ("6", "Lime"),
    ("7", "Green"),
    ("8", "Teal"),
    ("9", "Cyan"),
    ("10", "Sky"),
    ("11", "Blue"),
    ("12", "Indigo"),
    ("13", "Purple"),
    ("14", "Violet"),
    ("15", "Pink"),
    ("16", "Hot Pink"),
    ("17", "Flesh"),
    ("18", "Tan"),
    ("19", "Peach"),
    ("20", "Khaki"),
    ("21", "Light Green"),
    ("22", "Sea Foam"),
    ("23", "Light Blue"),
    ("24", "Lavender"),
    ("25", "Light Purple"),
    ("26", "White"),
    ("69", "Default"),
];

/// Sharp-based note names used for MIDI pitch display.
pub(crate) const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-based note names used for the project key display.
pub(crate) const NOTE_NAMES_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Internal bookkeeping parameters never shown for any device.
pub(crate) const SKIP_PARAMS: &[&str] = &[
    "LomId",
    "LomIdView",
    "OverwriteProtectionNumber",
    "LastSelectedTimeableIndex",
    "LastSelectedClipEnvelopeIndex",
    "ModulationSourceCount",
    "IsFolded",
    "IsExpanded",
    "ShouldShowPresetName",
    "Annotation",
    "UserName",
    "ParametersListWrapper",
    "LastPresetRef",
    "LockedScripts",
    "SendsListWrapper",
    "Pointee",
    "ViewStateSesstionTrackWidth",
    "SourceContext",
    "BranchSelectorRange",
    "IsAutoSelectEnabled",
    "ChainSelector",
];

pub fn color_name(code: &str) -> &'static str {
    COLORS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or("Default")
}

pub fn warp_mode_name(mode: i64) -> &'static str {
    match mode {
        0 => "Beats",
        1 => "Tones",
        2 => "Texture",
        3 => "Re-Pitch",
        4 => "Complex",
        6 => "Complex Pro",
        _ => "Unknown",
    }
}

pub fn launch_mode_name(mode: i64) -> String {
    match mode {
        0 => "trigger".to_string(),
        1 => "gate".to_string(),
        2 => "toggle".to_string(),
        3 => "repeat".to_string(),
        other => other.to_string(),
    }
}

pub fn launch_quant_name(quant: i64) -> String {
    let name = match quant {
        0 => "none",
        1 => "8 bars",
        2 => "4 bars",
        3 => "2 bars",
        4 => "1 bar",
        5 => "1/2",
        6 => "1/2T",
        7 => "1/4",
        8 => "1/4T",
        9 => "1/8",
        10 => "1/8T",
        11 => "1/16",
        12 => "1/16T",
        13 => "1/32",
        other => return other.to_string(),
    };
    name.to_string()
}

pub fn follow_action_name(action: i64) -> &'static str {
    match action {
        0 => "none",
        1 => "stop",
        2 => "again",
        3 => "prev",
        4 => "next",
        5 => "first",
        6 => "last",
        7 => "any",
        8 => "other",
        _ => "unknown",
    }
}

pub fn crossfade_side(state: i64) -> Option<char> {
    match state {
        1 => Some('A'),
        2 => Some('B'),
        _ => None,
    }
}

/// Convert a linear gain value to a dB display string.
///
/// Non-positive gain is `"-inf"`; anything within 0.1 dB of unity is `"0dB"`;
/// otherwise signed one-decimal dB with the decimal dropped on exact
/// integers (`+6dB`, `-3.5dB`).
pub fn format_db(linear: f64) -> String {
    if linear <= 0.0 {
        return "-inf".to_string();
    }
    let db = 20.0 * linear.log10();
    if db.abs() < 0.1 {
        return "0dB".to_string();
    }
    if db == db.trunc() {
        format!("{:+}dB", db as i64)
    } else {
        format!("{db:+.1}dB")
    }
}

/// Convert a pan value in [-1, 1] to `L<pct>`/`C`/`R<pct>`.
///
/// The center dead zone is exactly `|pan| < 0.01`.
pub fn format_pan(pan: f64) -> String {
    if pan.abs() < 0.01 {
        return "C".to_string();
    }
    let pct = (pan.abs() * 50.0).round() as i64;
    if pan < 0.0 {
        format!("L{pct}")
    } else {
        format!("R{pct}")
    }
}

/// Convert a MIDI pitch number to a note name like `C3` or `F#4`.
pub fn midi_note_name(pitch: i64) -> String {
    let octave = pitch.div_euclid(12) - 2;
    let name = NOTE_NAMES[pitch.rem_euclid(12) as usize];
    format!("{name}{octave}")
}

/// Convert a raw beat offset (0-based, four beats to the bar) to `bar.beat`
/// notation with the beat shown to one decimal. Raw `0` is `"1.1.0"`.
pub fn format_beats(offset: f64) -> String {
    let bar = (offset / 4.0).floor() as i64 + 1;
    let beat = offset.rem_euclid(4.0) + 1.0;
    format!("{bar}.{beat:.1}")
}

/// One unit-classification rule: a predicate over the lowercased parameter
/// name and value, and the transform applied when it matches.
struct ParamRule {
    applies: fn(name: &str, value: f64) -> bool,
    render: fn(value: f64) -> String,
}

fn name_has_any(name: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| name.contains(n))
}

/// Ordered unit-classification table for device parameters, evaluated top to
/// bottom. The order is load-bearing: it is the only disambiguation rule for
/// names matching several heuristics (a name containing both `gain` and
/// `freq` classifies as a percentage, not a frequency).
const PARAM_RULES: &[ParamRule] = &[
    // Boolean switches: exact 0/1, name suggests a toggle, and neither
    // "time" nor "rate" appears (those are continuous despite names like
    // "SyncRate").
    ParamRule {
        applies: |name, value| {
            (value == 0.0 || value == 1.0)
                && !name.contains("time")
                && !name.contains("rate")
                && name_has_any(name, &["on", "sync", "link", "freeze"])
        },
        render: |value| {
            if value == 1.0 { "on" } else { "off" }.to_string()
        },
    },
    // Normalized amounts rendered as whole percentages.
    ParamRule {
        applies: |name, value| {
            (0.0..=1.0).contains(&value)
                && name_has_any(
                    name,
                    &[
                        "wet",
                        "mix",
                        "amount",
                        "feedback",
                        "depth",
                        "gain",
                        "drive",
                        "resonance",
                    ],
                )
        },
        render: |value| format!("{:.0}%", value * 100.0),
    },
    // Frequencies: Hz below 1 kHz, one-decimal kHz above.
    ParamRule {
        applies: |name, _| name.contains("freq") && !name.contains("mod"),
        render: |value| {
            if value >= 1000.0 {
                format!("{:.1}kHz", value / 1000.0)
            } else {
                format!("{value:.0}Hz")
            }
        },
    },
    // Short time constants: ms below one second, two-decimal seconds above.
    ParamRule {
        applies: |name, value| {
            value < 10.0 && name_has_any(name, &["timesec", "attack", "release", "predelay"])
        },
        render: |value| {
            if value < 1.0 {
                format!("{:.0}ms", value * 1000.0)
            } else {
                format!("{value:.2}s")
            }
        },
    },
];

/// Classify and format a raw device-parameter value using the parameter's
/// name. A value that does not parse as a number is returned verbatim.
pub fn format_param(raw: &str, name: &str) -> String {
    let value: f64 = match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => return raw.to_string(),
    };
    let lower = name.to_ascii_lowercase();
    for rule in PARAM_RULES {
        if (rule.applies)(&lower, value) {
            return (rule.render)(value);
        }
    }
    if value == value.trunc() {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}
