//! Device-chain extraction: display names, enabled state, parameters, and
//! macro controls on rack devices.

use crate::format::{SKIP_PARAMS, format_param};
use crate::model::{Device, Param};
use crate::tree::Element;
use std::collections::HashMap;

pub(super) fn extract_devices(track: &Element, is_master: bool) -> Vec<Device> {
    // The master track keeps its devices one level higher than regular
    // tracks, which nest a second DeviceChain.
    let path = if is_master {
        ".//DeviceChain/Devices"
    } else {
        ".//DeviceChain/DeviceChain/Devices"
    };
    let Some(devices_elem) = track.find(path) else {
        return Vec::new();
    };

    devices_elem
        .children
        .iter()
        .filter(|dev| {
            !matches!(
                dev.tag.as_str(),
                "AudioEffectBranchGroup" | "MidiEffectBranchGroup" | "InstrumentBranchGroup"
            )
        })
        .map(extract_device)
        .collect()
}

fn extract_device(dev: &Element) -> Device {
    let name = preset_name(dev)
        .or_else(|| {
            let user = dev.value_at("UserName", "");
            (!user.is_empty()).then_some(user)
        })
        .unwrap_or_else(|| dev.tag.clone());

    let macros = if dev.tag.ends_with("GroupDevice") {
        macro_display_names(dev)
    } else {
        HashMap::new()
    };

    let mut params = Vec::new();
    for child in &dev.children {
        let tag = child.tag.as_str();
        if tag == "On" || SKIP_PARAMS.contains(&tag) || tag.starts_with("MacroDisplayNames.") {
            continue;
        }

        if let Some(idx) = tag.strip_prefix("MacroControls.") {
            // Only macros the user has renamed are meaningful controls;
            // everything still called "Macro <N>" stays hidden.
            if let (Ok(idx), Some(value)) = (idx.parse::<u32>(), manual_value(child)) {
                if let Some(custom) = macros.get(&idx) {
                    params.push(Param {
                        name: custom.clone(),
                        value: format_param(value, custom),
                    });
                }
            }
            continue;
        }

        if let Some(value) = manual_value(child) {
            params.push(Param {
                name: tag.to_string(),
                value: format_param(value, tag),
            });
        }
    }

    Device {
        name,
        enabled: dev.bool_at("On/Manual", true),
        params,
    }
}

fn manual_value(param: &Element) -> Option<&str> {
    param
        .child("Manual")
        .and_then(|m| m.attr("Value"))
        .filter(|v| !v.is_empty())
}

/// A device's preset name: the stem of any `.adv` preset reference found in
/// its subtree.
fn preset_name(dev: &Element) -> Option<String> {
    for elem in dev.iter_all() {
        if elem.tag != "RelativePath" {
            continue;
        }
        let path = elem.attr("Value").unwrap_or("");
        if let Some(stem) = path.strip_suffix(".adv") {
            let base = stem.rsplit('/').next().unwrap_or(stem);
            return Some(base.to_string());
        }
    }
    None
}

fn macro_display_names(dev: &Element) -> HashMap<u32, String> {
    let mut names = HashMap::new();
    for child in &dev.children {
        let Some(idx) = child.tag.strip_prefix("MacroDisplayNames.") else {
            continue;
        };
        let Ok(idx) = idx.parse::<u32>() else { continue };
        let name = child.attr("Value").unwrap_or("");
        if !name.is_empty() && !is_default_macro_name(name) {
            names.insert(idx, name.to_string());
        }
    }
    names
}

/// Matches the factory naming pattern `Macro <N>`.
fn is_default_macro_name(name: &str) -> bool {
    name.strip_prefix("Macro ")
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
}
