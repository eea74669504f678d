//! Track-level extraction: name, color, mixer, routing, state flags.

use super::{clip, device};
use crate::format::{color_name, crossfade_side, format_db, format_pan};
use crate::model::{Mixer, Routing, Track, TrackKind, TrackState};
use crate::tree::Element;
use std::collections::HashMap;

// Send level stored when a send has never been touched: -70 dB.
const SILENT_SEND_LINEAR: f64 = 0.000_316_227_757_1;

pub(super) fn extract_track(
    elem: &Element,
    kind: TrackKind,
    groups: &HashMap<String, String>,
) -> Track {
    let is_master = kind == TrackKind::Master;

    let mut state = if is_master {
        TrackState::default()
    } else {
        extract_state(elem)
    };
    if let Some(id) = &state.group_id {
        state.group_name = groups.get(id).cloned();
    }

    Track {
        kind,
        name: elem.value_at("Name/EffectiveName", "Untitled"),
        color: color_name(&elem.value_at("Color", "69")).to_string(),
        mixer: extract_mixer(elem),
        routing: if is_master {
            Routing::default()
        } else {
            extract_routing(elem)
        },
        state,
        devices: device::extract_devices(elem, is_master),
        arrangement_clips: clip::arrangement_clips(elem),
        session_clips: clip::session_clips(elem),
    }
}

fn extract_mixer(track: &Element) -> Option<Mixer> {
    let mixer = track.find(".//DeviceChain/Mixer")?;

    let mut sends = Vec::new();
    if let Some(sends_elem) = mixer.find("Sends") {
        for holder in sends_elem
            .children
            .iter()
            .filter(|c| c.tag == "TrackSendHolder")
        {
            let value = holder.f64_at("Send/Manual", SILENT_SEND_LINEAR);
            // Untouched sends sit at the -70 dB floor; keep the slot so later
            // sends still label correctly, but mark it silent.
            if value <= SILENT_SEND_LINEAR {
                sends.push("-inf".to_string());
            } else {
                sends.push(format_db(value));
            }
        }
    }

    Some(Mixer {
        volume: format_db(mixer.f64_at("Volume/Manual", 1.0)),
        pan: format_pan(mixer.f64_at("Pan/Manual", 0.0)),
        solo: mixer.bool_at("SoloSink", false),
        // Speaker is the un-mute switch: on means audible.
        muted: mixer.value_at("Speaker/Manual", "true") == "false",
        sends,
    })
}

fn extract_routing(track: &Element) -> Routing {
    Routing {
        input: routing_display(track, "AudioInputRouting"),
        output: routing_display(track, "AudioOutputRouting"),
        midi_in: routing_display(track, "MidiInputRouting"),
        midi_out: routing_display(track, "MidiOutputRouting"),
    }
}

fn routing_display(track: &Element, tag: &str) -> Option<String> {
    let elem = track.find(&format!(".//DeviceChain/{tag}"))?;
    let upper = elem.value_at("UpperDisplayString", "");
    if upper.is_empty() {
        return None;
    }
    let lower = elem.value_at("LowerDisplayString", "");
    if lower.is_empty() {
        Some(upper)
    } else {
        Some(format!("{upper} {lower}").trim().to_string())
    }
}

fn extract_state(track: &Element) -> TrackState {
    let mut state = TrackState {
        frozen: track.bool_at("Freeze", false),
        ..TrackState::default()
    };

    let group_id = track.value_at("TrackGroupId", "-1");
    if group_id != "-1" {
        state.group_id = Some(group_id);
    }

    if let Some(delay) = track.child("TrackDelay") {
        let ms = delay.f64_at("Value", 0.0);
        if ms.abs() > 0.01 {
            state.delay_ms = Some(ms);
        }
    }

    state.crossfade = crossfade_side(track.i64_at(".//Mixer/CrossFadeState", 0));

    state
}
