//! Extractors: declarative walks over the decoded tree, one per musical
//! concept. Every read goes through the accessors on [`Element`] with an
//! explicit default, so a missing or malformed field never aborts
//! extraction — it just resolves to its default.

mod clip;
mod device;
mod track;

use crate::format::{NOTE_NAMES_FLAT, format_beats};
use crate::model::{LoopRegion, Marker, Project, Scene, TrackKind, TrackLists};
use crate::tree::Element;
use std::collections::HashMap;

/// Build the normalized model for one decoded Live Set.
pub fn extract_project(root: &Element) -> Project {
    // Group names must be resolvable while individual tracks are being
    // extracted, so the id -> name map is a pre-pass over the whole tree.
    let groups = build_group_map(root);

    let mut tracks = TrackLists::default();
    if let Some(tracks_elem) = root.find(".//Tracks") {
        for t in &tracks_elem.children {
            let kind = match t.tag.as_str() {
                "AudioTrack" => TrackKind::Audio,
                "MidiTrack" => TrackKind::Midi,
                "ReturnTrack" => TrackKind::Return,
                "GroupTrack" => TrackKind::Group,
                _ => continue,
            };
            let track = track::extract_track(t, kind, &groups);
            match kind {
                TrackKind::Audio => tracks.audio.push(track),
                TrackKind::Midi => tracks.midi.push(track),
                TrackKind::Return => tracks.return_tracks.push(track),
                TrackKind::Group => tracks.group.push(track),
                TrackKind::Master => unreachable!(),
            }
        }
    }

    let master = root
        .find(".//MasterTrack")
        .map(|m| track::extract_track(m, TrackKind::Master, &groups));

    Project {
        creator: root.attr("Creator").unwrap_or("Unknown").to_string(),
        tempo: root.value_at(".//Tempo/Manual", "120"),
        tempo_automated: tempo_automated(root),
        time_signature: format!(
            "{}/{}",
            root.value_at(".//TimeSignature/Manual/Numerator", "4"),
            root.value_at(".//TimeSignature/Manual/Denominator", "4"),
        ),
        key: project_key(root),
        loop_region: loop_region(root),
        tracks,
        markers: markers(root),
        master,
        scenes: scenes(root),
    }
}

fn build_group_map(root: &Element) -> HashMap<String, String> {
    let mut groups = HashMap::new();
    for track in root.find_all(".//Tracks/GroupTrack") {
        if let Some(id) = track.attr("Id") {
            groups.insert(
                id.to_string(),
                track.value_at("Name/EffectiveName", "Group"),
            );
        }
    }
    groups
}

/// Key/scale display, present only when the root note is a valid index.
fn project_key(root: &Element) -> Option<String> {
    let scale = root.find(".//ScaleInformation")?;
    let root_note = scale.i64_at("RootNote", 0);
    if !(0..12).contains(&root_note) {
        return None;
    }
    let scale_name = scale.value_at("Name", "Major");
    Some(format!(
        "{} {}",
        NOTE_NAMES_FLAT[root_note as usize], scale_name
    ))
}

fn loop_region(root: &Element) -> Option<LoopRegion> {
    let transport = root.find(".//Transport")?;
    if !transport.bool_at("LoopOn", false) {
        return None;
    }
    let start = transport.f64_at("LoopStart", 0.0);
    let length = transport.f64_at("LoopLength", 16.0);
    Some(LoopRegion {
        start_bar: (start / 4.0).floor() as i64 + 1,
        end_bar: ((start + length) / 4.0).floor() as i64 + 1,
        bars: (length / 4.0).floor() as i64,
    })
}

fn markers(root: &Element) -> Vec<Marker> {
    let mut out = Vec::new();
    for loc in root.find_all(".//Locators/Locators/Locator") {
        let name = loc.value_at("Name", "");
        if name.is_empty() {
            continue;
        }
        let time = format_beats(loc.f64_at("Time", 0.0));
        out.push(Marker { name, time });
    }
    out
}

fn scenes(root: &Element) -> Vec<Scene> {
    let Some(scenes_elem) = root.find(".//Scenes") else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for (idx, scene) in scenes_elem
        .children
        .iter()
        .filter(|c| c.tag == "Scene")
        .enumerate()
    {
        let name = scene.value_at("Name", "");
        // Default scene names ("Scene 3") carry no information.
        if name.is_empty() || name.starts_with("Scene ") {
            continue;
        }
        out.push(Scene {
            index: idx + 1,
            name,
        });
    }
    out
}

/// Tempo automation: an automation envelope on the master track that points
/// at a target, or more than one tempo float event.
fn tempo_automated(root: &Element) -> bool {
    if let Some(envelope) =
        root.find(".//MasterTrack//AutomationEnvelopes//Envelopes//AutomationEnvelope")
    {
        if envelope.find(".//PointeeId").is_some() {
            return true;
        }
    }
    root.find_all(
        ".//MasterTrack//AutomationEnvelopes//Envelopes//AutomationEnvelope//Events//FloatEvent",
    )
    .len()
        > 1
}
