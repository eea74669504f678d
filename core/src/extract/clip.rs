//! Clip extraction: arrangement and session clips, audio and MIDI payloads,
//! and session launch settings.

use crate::format::{
    follow_action_name, format_beats, format_db, launch_mode_name, launch_quant_name,
    midi_note_name, warp_mode_name,
};
use crate::model::{AudioClip, Clip, ClipKind, LaunchSettings, MidiSummary, WarpInfo};
use crate::tree::Element;

/// Clips placed on the arrangement timeline, ascending by raw position.
pub(super) fn arrangement_clips(track: &Element) -> Vec<Clip> {
    let mut clips: Vec<Clip> = track
        .find_all(".//ArrangerAutomation/Events/AudioClip")
        .into_iter()
        .chain(track.find_all(".//ArrangerAutomation/Events/MidiClip"))
        .map(|c| extract_clip(c, false))
        .collect();
    clips.sort_by(|a, b| a.time.total_cmp(&b.time));
    clips
}

/// Clips sitting in session slots, in slot order.
pub(super) fn session_clips(track: &Element) -> Vec<Clip> {
    track
        .find_all(".//ClipSlotList//AudioClip")
        .into_iter()
        .chain(track.find_all(".//ClipSlotList//MidiClip"))
        .map(|c| extract_clip(c, true))
        .collect()
}

fn extract_clip(clip: &Element, session: bool) -> Clip {
    let kind = if clip.tag == "AudioClip" {
        ClipKind::Audio
    } else {
        ClipKind::Midi
    };

    let time: f64 = clip
        .attr("Time")
        .and_then(|t| t.trim().parse().ok())
        .unwrap_or(0.0);
    let end = clip
        .find("CurrentEnd")
        .and_then(|e| e.attr("Value"))
        .and_then(|v| v.trim().parse::<f64>().ok())
        .map(format_beats)
        .unwrap_or_else(|| "?".to_string());

    let loop_start = clip.f64_at("Loop/LoopStart", 0.0);
    let start_rel = clip.f64_at("Loop/StartRelative", 0.0);
    let offset =
        (loop_start != 0.0 || start_rel != 0.0).then(|| format_beats(loop_start + start_rel));

    let audio = (kind == ClipKind::Audio).then(|| AudioClip {
        file: audio_file(clip),
        adjustments: adjustments(clip),
        fades: fades(clip),
        warp: warp_info(clip),
    });
    let midi = match kind {
        ClipKind::Midi => midi_summary(clip),
        ClipKind::Audio => None,
    };

    Clip {
        kind,
        name: clip.value_at("Name", "unnamed"),
        start: format_beats(time),
        end,
        time,
        looped: clip.bool_at("Loop/LoopOn", false),
        muted: clip.bool_at("Disabled", false),
        offset,
        audio,
        midi,
        groove: clip.i64_at("GrooveSettings/GrooveId", -1) >= 0,
        launch: if session { launch_settings(clip) } else { None },
    }
}

fn audio_file(clip: &Element) -> Option<String> {
    if let Some(rel) = clip.find(".//SampleRef/FileRef/RelativePath") {
        let path = rel.attr("Value").unwrap_or("");
        if !path.is_empty() {
            let base = path.rsplit('/').next().unwrap_or(path);
            return Some(base.to_string());
        }
    }
    clip.find(".//SampleRef/FileRef/Name")
        .map(|n| n.attr("Value").unwrap_or("").to_string())
        .filter(|name| !name.is_empty())
}

/// Gain, transpose, and fine-tune adjustments, each shown only when it
/// departs from its default.
fn adjustments(clip: &Element) -> Vec<String> {
    let mut adj = Vec::new();

    let gain = clip.f64_at("SampleVolume", 1.0);
    if (gain - 1.0).abs() > 0.01 {
        adj.push(format_db(gain));
    }

    let transpose = clip.f64_at("PitchCoarse", 0.0) as i64;
    if transpose != 0 {
        adj.push(format!("{transpose:+}st"));
    }

    let fine = clip.f64_at("PitchFine", 0.0);
    if fine.abs() > 0.1 {
        adj.push(format!("{fine:+.0}ct"));
    }

    adj
}

fn fades(clip: &Element) -> Vec<String> {
    let mut fades = Vec::new();
    let fade_in = clip.f64_at("Fades/FadeInLength", 0.0);
    if fade_in > 0.001 {
        fades.push(format!("fade in: {}", fade_duration(fade_in)));
    }
    let fade_out = clip.f64_at("Fades/FadeOutLength", 0.0);
    if fade_out > 0.001 {
        fades.push(format!("fade out: {}", fade_duration(fade_out)));
    }
    fades
}

fn fade_duration(len: f64) -> String {
    if len >= 1.0 {
        format!("{len:.2}s")
    } else {
        format!("{:.0}ms", len * 1000.0)
    }
}

/// Warp info for a warped clip. Every warped clip carries two markers by
/// default, so the count is only interesting beyond that; a warped clip with
/// no markers at all reports nothing.
fn warp_info(clip: &Element) -> Option<WarpInfo> {
    if !clip.bool_at("IsWarped", true) {
        return None;
    }
    let mode = warp_mode_name(clip.i64_at("WarpMode", 0)).to_string();
    let count = clip.find_all(".//WarpMarkers/WarpMarker").len();
    match count {
        0 => None,
        1..=2 => Some(WarpInfo {
            mode,
            markers: None,
        }),
        _ => Some(WarpInfo {
            mode,
            markers: Some(count),
        }),
    }
}

/// Note count and pitch range over key tracks that actually hold events.
fn midi_summary(clip: &Element) -> Option<MidiSummary> {
    let mut pitches: Vec<i64> = Vec::new();
    let mut count = 0usize;

    for key_track in clip.find_all(".//Notes/KeyTracks/KeyTrack") {
        let pitch = key_track.i64_at("MidiKey", 0);
        let events = key_track.find_all("Notes/MidiNoteEvent").len();
        if events > 0 {
            pitches.push(pitch);
            count += events;
        }
    }

    let min = *pitches.iter().min()?;
    let max = *pitches.iter().max()?;
    Some(MidiSummary {
        note_count: count,
        pitch_range: format!("{}-{}", midi_note_name(min), midi_note_name(max)),
    })
}

fn launch_settings(clip: &Element) -> Option<LaunchSettings> {
    let mut settings = LaunchSettings::default();

    let mode = clip.i64_at("LaunchMode", 0);
    if mode != 0 {
        settings.mode = Some(launch_mode_name(mode));
    }

    let quant = clip.i64_at("LaunchQuantisation", 0);
    if quant > 0 {
        settings.quantization = Some(launch_quant_name(quant));
    }

    if clip.bool_at("FollowAction/FollowActionEnabled", false) {
        let action = follow_action_name(clip.i64_at("FollowAction/FollowActionA", 0));
        if action != "none" {
            let bars = clip.f64_at("FollowAction/FollowTime", 4.0) / 4.0;
            let unit = if bars == 1.0 { "bar" } else { "bars" };
            settings.follow = Some(format!("{action} @ {bars:.0} {unit}"));
        }
    }

    settings.ram = clip.bool_at("Ram", false);

    (!settings.is_empty()).then_some(settings)
}
