//! The normalized project model.
//!
//! This is the value type the extractors produce and the renderer consumes.
//! The general rule throughout: a field equal to its documented default is
//! absent from the model (`None`, `false`, or an empty list) — absence means
//! "default", not "zero" or "unknown". The model is built fresh per input
//! file, consumed once, and discarded.

use serde::Serialize;

/// One decoded Live Set, normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub creator: String,
    /// Tempo in BPM, kept as the raw attribute string so the summary never
    /// re-rounds what the project file stores.
    pub tempo: String,
    pub tempo_automated: bool,
    pub time_signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loop_region: Option<LoopRegion>,
    pub tracks: TrackLists,
    pub markers: Vec<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master: Option<Track>,
    pub scenes: Vec<Scene>,
}

/// Transport loop region, in one-based bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoopRegion {
    pub start_bar: i64,
    pub end_bar: i64,
    pub bars: i64,
}

/// An arrangement locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub name: String,
    /// Bar.beat position string.
    pub time: String,
}

/// A named session scene. Scenes left at their default name are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scene {
    /// One-based scene index.
    pub index: usize,
    pub name: String,
}

/// Tracks partitioned by kind. The partitions are mutually exclusive and
/// exhaustive over the input track elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackLists {
    pub audio: Vec<Track>,
    pub midi: Vec<Track>,
    #[serde(rename = "return")]
    pub return_tracks: Vec<Track>,
    pub group: Vec<Track>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Audio,
    Midi,
    Return,
    Group,
    Master,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub kind: TrackKind,
    pub name: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixer: Option<Mixer>,
    pub routing: Routing,
    pub state: TrackState,
    pub devices: Vec<Device>,
    pub arrangement_clips: Vec<Clip>,
    /// Full session-clip list; display truncation happens in the renderer.
    pub session_clips: Vec<Clip>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mixer {
    /// Volume as a dB display string.
    pub volume: String,
    /// Pan descriptor (`C`, `L23`, `R50`).
    pub pan: String,
    pub solo: bool,
    pub muted: bool,
    /// Send levels as dB display strings, in send order.
    pub sends: Vec<String>,
}

/// Routing display strings, present only when the element carries one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Routing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midi_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midi_out: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackState {
    pub frozen: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Resolved from the project-wide group map after extraction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<f64>,
    /// Crossfader assignment, `A` or `B`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossfade: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    /// Preset name, else user name, else the raw device tag.
    pub name: String,
    pub enabled: bool,
    /// Formatted parameters in schema order.
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipKind {
    Audio,
    Midi,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clip {
    pub kind: ClipKind,
    pub name: String,
    /// Bar.beat start position.
    pub start: String,
    /// Bar.beat end position, or `"?"` when the schema omits it.
    pub end: String,
    /// Raw timeline position in beats; the arrangement sort key.
    pub time: f64,
    pub looped: bool,
    pub muted: bool,
    /// Bar.beat offset into the clip, shown only when non-zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioClip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midi: Option<MidiSummary>,
    pub groove: bool,
    /// Launch settings; populated for session clips only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch: Option<LaunchSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioClip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Gain/transpose/fine-tune adjustments, already formatted.
    pub adjustments: Vec<String>,
    /// Fade descriptors, already formatted.
    pub fades: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warp: Option<WarpInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarpInfo {
    pub mode: String,
    /// Present only when the clip has more than the default two markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MidiSummary {
    pub note_count: usize,
    /// `C3-G4` style pitch range.
    pub pitch_range: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaunchSettings {
    /// Launch mode when it differs from the default trigger mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Quantization when it differs from global/none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantization: Option<String>,
    /// `"<action> @ <N> bar(s)"` when a follow action is armed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow: Option<String>,
    pub ram: bool,
}

impl LaunchSettings {
    pub fn is_empty(&self) -> bool {
        self.mode.is_none() && self.quantization.is_none() && self.follow.is_none() && !self.ram
    }
}
