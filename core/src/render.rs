//! Deterministic text rendering of the normalized model.
//!
//! The output is a pure function of the [`Project`] value: fixed section
//! order, no timestamps, no locale formatting. Identical models always
//! produce byte-identical text, which is the whole point — the summary
//! exists to make version-control diffs stable.

use crate::model::{Clip, Device, Mixer, Param, Project, Track};
use std::io::{self, Write};

const RULE_HEAVY: usize = 60;
const RULE_LIGHT: usize = 40;

/// Session-clip display cap; the remainder collapses to a count line.
const MAX_SESSION_CLIPS: usize = 3;

/// Parameter count at which device rendering switches from inline to an
/// indented block.
const MAX_INLINE_PARAMS: usize = 4;

/// Render the summary into a `String`.
pub fn render_summary(project: &Project) -> String {
    let mut lines: Vec<String> = Vec::new();

    push_header(&mut lines, project);
    push_markers(&mut lines, project);

    for (label, tracks) in [
        ("AUDIO", &project.tracks.audio),
        ("MIDI", &project.tracks.midi),
        ("RETURN", &project.tracks.return_tracks),
        ("GROUP", &project.tracks.group),
    ] {
        if tracks.is_empty() {
            continue;
        }
        lines.push("-".repeat(RULE_LIGHT));
        lines.push(format!("{} TRACKS ({}):", label, tracks.len()));
        for (i, track) in tracks.iter().enumerate() {
            push_track(&mut lines, i + 1, track);
        }
        lines.push(String::new());
    }

    push_master(&mut lines, project);
    push_scenes(&mut lines, project);

    lines.push("=".repeat(RULE_HEAVY));
    lines.join("\n")
}

/// Write the summary to any `io::Write` sink.
pub fn write_summary<W: Write>(w: &mut W, project: &Project) -> io::Result<()> {
    w.write_all(render_summary(project).as_bytes())
}

fn push_header(lines: &mut Vec<String>, p: &Project) {
    lines.push("=".repeat(RULE_HEAVY));
    lines.push("ABLETON PROJECT SUMMARY".to_string());
    lines.push("=".repeat(RULE_HEAVY));
    lines.push(format!("Creator: {}", p.creator));

    if let Some(key) = &p.key {
        lines.push(format!("Key: {key}"));
    }

    let automated = if p.tempo_automated { " [automated]" } else { "" };
    lines.push(format!("Tempo: {} BPM{}", p.tempo, automated));
    lines.push(format!("Time Signature: {}", p.time_signature));

    if let Some(region) = &p.loop_region {
        let bar_word = if region.bars == 1 { "bar" } else { "bars" };
        lines.push(format!(
            "Loop: bars {}-{} ({} {})",
            region.start_bar, region.end_bar, region.bars, bar_word
        ));
    }

    lines.push(String::new());
}

fn push_markers(lines: &mut Vec<String>, p: &Project) {
    if p.markers.is_empty() {
        return;
    }
    lines.push("-".repeat(RULE_LIGHT));
    lines.push("MARKERS:".to_string());
    for marker in &p.markers {
        lines.push(format!("  [{}] {}", marker.time, marker.name));
    }
    lines.push(String::new());
}

fn push_track(lines: &mut Vec<String>, index: usize, t: &Track) {
    let mut header = format!("  [{}] {} ({})", index, t.name, t.color);

    if t.state.frozen {
        header.push_str(" [FROZEN]");
    }

    header.push_str(&mixer_summary(t.mixer.as_ref()));

    let mut extra = Vec::new();
    if let Some(side) = t.state.crossfade {
        extra.push(format!("XF: {side}"));
    }
    if let Some(ms) = t.state.delay_ms {
        extra.push(format!("delay: {ms:.0}ms"));
    }
    if !extra.is_empty() {
        header.push_str(&format!(" [{}]", extra.join(", ")));
    }

    // Routing only when it departs from the defaults: external input in,
    // master out.
    if let Some(input) = &t.routing.input {
        if !input.starts_with("Ext. In") {
            header.push_str(&format!(" In: {input}"));
        }
    }
    if let Some(output) = &t.routing.output {
        if output != "Master" {
            header.push_str(&format!(" → {output}"));
        }
    }

    if let Some(group) = &t.state.group_name {
        header.push_str(&format!(" (in \"{group}\")"));
    }

    lines.push(header);

    if !t.devices.is_empty() {
        lines.push("      Devices:".to_string());
        for device in &t.devices {
            lines.push(format!(
                "        - {}",
                device_line(device, "          ")
            ));
        }
    }

    if !t.arrangement_clips.is_empty() {
        lines.push(format!("      Arrangement ({}):", t.arrangement_clips.len()));
        for clip in &t.arrangement_clips {
            lines.push(format!("        - {}", clip_line(clip, false)));
        }
    }

    if !t.session_clips.is_empty() {
        lines.push(format!("      Session Slots ({}):", t.session_clips.len()));
        for clip in t.session_clips.iter().take(MAX_SESSION_CLIPS) {
            lines.push(format!("        - {}", clip_line(clip, true)));
        }
        if t.session_clips.len() > MAX_SESSION_CLIPS {
            lines.push(format!(
                "        ... and {} more in slots",
                t.session_clips.len() - MAX_SESSION_CLIPS
            ));
        }
    }
}

fn mixer_summary(mixer: Option<&Mixer>) -> String {
    let Some(m) = mixer else {
        return String::new();
    };

    let mut parts = Vec::new();
    if m.solo {
        parts.push("SOLO".to_string());
    }
    if m.muted {
        parts.push("MUTED".to_string());
    }
    parts.push(format!("Vol: {}", m.volume));
    parts.push(format!("Pan: {}", m.pan));

    for (i, send) in m.sends.iter().enumerate() {
        if send != "-inf" {
            let label = (b'A' + i as u8) as char;
            parts.push(format!("Send {label}: {send}"));
        }
    }

    format!(" [{}]", parts.join(", "))
}

fn device_line(device: &Device, indent: &str) -> String {
    let status = if device.enabled { "" } else { "[OFF] " };
    format!(
        "{}{}{}",
        status,
        device.name,
        device_params(&device.params, indent)
    )
}

fn device_params(params: &[Param], indent: &str) -> String {
    if params.is_empty() {
        return String::new();
    }
    if params.len() <= MAX_INLINE_PARAMS {
        let inline = params
            .iter()
            .map(|p| format!("{}={}", p.name, p.value))
            .collect::<Vec<_>>()
            .join(", ");
        return format!(" ({inline})");
    }
    let mut block = String::from(":");
    for p in params {
        block.push_str(&format!("\n{indent}    {}: {}", p.name, p.value));
    }
    block
}

fn clip_line(clip: &Clip, session: bool) -> String {
    let mut flags: Vec<String> = Vec::new();

    if clip.looped {
        flags.push("loop".to_string());
    }
    if clip.muted {
        flags.push("muted".to_string());
    }
    if let Some(offset) = &clip.offset {
        flags.push(format!("from {offset}"));
    }

    if let Some(audio) = &clip.audio {
        if let Some(file) = &audio.file {
            flags.push(file.clone());
        }
    }
    if let Some(midi) = &clip.midi {
        flags.push(format!("{} notes, {}", midi.note_count, midi.pitch_range));
    }
    if let Some(audio) = &clip.audio {
        flags.extend(audio.adjustments.iter().cloned());
        flags.extend(audio.fades.iter().cloned());
        if let Some(warp) = &audio.warp {
            let mut text = format!("warped: {}", warp.mode);
            if let Some(count) = warp.markers {
                text.push_str(&format!(", {count} markers"));
            }
            flags.push(text);
        }
    }

    if clip.groove {
        flags.push("groove".to_string());
    }

    if session {
        if let Some(launch) = &clip.launch {
            if let Some(mode) = &launch.mode {
                flags.push(mode.clone());
            }
            if let Some(quant) = &launch.quantization {
                flags.push(quant.clone());
            }
            if let Some(follow) = &launch.follow {
                flags.push(format!("follow: {follow}"));
            }
            if launch.ram {
                flags.push("RAM".to_string());
            }
        }
    }

    let flag_str = if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", "))
    };
    format!("\"{}\" @ {} - {}{}", clip.name, clip.start, clip.end, flag_str)
}

fn push_master(lines: &mut Vec<String>, p: &Project) {
    let Some(master) = &p.master else {
        return;
    };
    lines.push("-".repeat(RULE_LIGHT));
    lines.push("MASTER:".to_string());
    if let Some(mixer) = &master.mixer {
        lines.push(format!("  Volume: {}", mixer.volume));
    }
    if !master.devices.is_empty() {
        lines.push("  Devices:".to_string());
        for device in &master.devices {
            lines.push(format!("    - {}", device_line(device, "      ")));
        }
    }
    lines.push(String::new());
}

fn push_scenes(lines: &mut Vec<String>, p: &Project) {
    if p.scenes.is_empty() {
        return;
    }
    lines.push("-".repeat(RULE_LIGHT));
    lines.push("SCENES:".to_string());
    for scene in &p.scenes {
        lines.push(format!("  [{}] {}", scene.index, scene.name));
    }
    lines.push(String::new());
}
