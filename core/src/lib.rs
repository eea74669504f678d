//! als_summary: render Ableton Live Set (`.als`) files as deterministic,
//! human-readable text summaries.
//!
//! A `.als` file is a gzip-compressed XML document whose low-level
//! serialization churns between saves even when the musical content is
//! unchanged. This crate extracts the semantically relevant subset — tracks,
//! mixer state, devices, clips, scenes — into a normalized model and renders
//! it as stable text, so version-control diffs show what actually changed.
//!
//! The whole pipeline is a pure transform:
//! bytes → [`decode`] → element tree → [`extract_project`] → [`Project`] →
//! [`render_summary`] → text.
//!
//! # Quick Start
//!
//! ```ignore
//! let summary = als_summary::summarize_path("My Song.als")?;
//! print!("{summary}");
//! ```
//!
//! A decode failure is terminal for that file and yields a [`DecodeError`];
//! missing or malformed individual fields never fail — they resolve to their
//! documented defaults during extraction.

mod decode;
mod extract;
mod format;
mod model;
mod render;
mod tree;

pub use decode::{DecodeError, decode, parse_xml};
pub use extract::extract_project;
pub use format::{
    color_name, crossfade_side, follow_action_name, format_beats, format_db, format_pan,
    format_param, launch_mode_name, launch_quant_name, midi_note_name, warp_mode_name,
};
pub use model::{
    AudioClip, Clip, ClipKind, Device, LaunchSettings, LoopRegion, Marker, MidiSummary, Mixer,
    Param, Project, Routing, Scene, Track, TrackKind, TrackLists, TrackState, WarpInfo,
};
pub use render::{render_summary, write_summary};
pub use tree::Element;

use std::io::Read;
use std::path::Path;

impl Project {
    /// Decode and extract a project from raw `.als` bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Project, DecodeError> {
        let root = decode::decode(bytes)?;
        Ok(extract::extract_project(&root))
    }

    /// Decode and extract a project from any reader.
    pub fn open<R: Read>(mut reader: R) -> Result<Project, DecodeError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Project::from_bytes(&bytes)
    }

    /// Decode and extract a project from a file path. A missing file
    /// surfaces as [`DecodeError::Io`].
    pub fn open_path(path: impl AsRef<Path>) -> Result<Project, DecodeError> {
        let bytes = std::fs::read(path)?;
        Project::from_bytes(&bytes)
    }

    /// Render this project's text summary.
    pub fn summary(&self) -> String {
        render::render_summary(self)
    }
}

/// Read, decode, and render one `.als` file in a single call. This is the
/// textconv entry point: one path in, one text buffer out, no partial output
/// on failure.
pub fn summarize_path(path: impl AsRef<Path>) -> Result<String, DecodeError> {
    Ok(Project::open_path(path)?.summary())
}

/// Decode and render raw `.als` bytes.
pub fn summarize_bytes(bytes: &[u8]) -> Result<String, DecodeError> {
    Ok(Project::from_bytes(bytes)?.summary())
}
