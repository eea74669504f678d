//! Generic labeled element tree and path-based accessors.
//!
//! The decoder produces an [`Element`] tree and every extractor reads it
//! through the accessors defined here. Paths follow ElementTree conventions,
//! since the schema addresses for Live Sets are documented against them:
//!
//! - `"Name/EffectiveName"` — direct child chain
//! - `".//DeviceChain/Mixer"` — `Mixer` as a direct child of a `DeviceChain`
//!   found at any depth
//! - `".//ClipSlotList//AudioClip"` — `AudioClip` at any depth below a
//!   `ClipSlotList` at any depth
//!
//! All value accessors take a caller-supplied default and never fail: an
//! absent node, absent attribute, or unparseable value yields the default.

/// A single XML element: tag, attributes, ordered children.
///
/// Immutable after construction; text content is not retained because the
/// Live Set schema carries every value in a `Value` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Element {
        Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The value of an attribute on this element, if present.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The first direct child with the given tag.
    pub fn child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// The first element matching `path`, in document order.
    pub fn find(&self, path: &str) -> Option<&Element> {
        let steps = parse_path(path);
        if steps.is_empty() {
            return Some(self);
        }
        find_first(self, &steps)
    }

    /// All elements matching `path`, in document order.
    pub fn find_all(&self, path: &str) -> Vec<&Element> {
        let steps = parse_path(path);
        let mut out = Vec::new();
        if steps.is_empty() {
            out.push(self);
        } else {
            collect(self, &steps, &mut out);
        }
        out
    }

    /// Depth-first iterator over this element and every descendant.
    pub fn iter_all(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// The `Value` attribute of the first match for `path`, else `default`.
    ///
    /// This is the workhorse read: nearly every field in the schema is an
    /// element whose payload lives in its `Value` attribute.
    pub fn value_at(&self, path: &str, default: &str) -> String {
        self.attr_at(path, "Value", default)
    }

    /// The `key` attribute of the first match for `path`, else `default`.
    pub fn attr_at(&self, path: &str, key: &str, default: &str) -> String {
        self.find(path)
            .and_then(|e| e.attr(key))
            .unwrap_or(default)
            .to_string()
    }

    /// Numeric read with coercion-failure absorption: an absent node or a
    /// value that does not parse yields `default`.
    pub fn f64_at(&self, path: &str, default: f64) -> f64 {
        self.find(path)
            .and_then(|e| e.attr("Value"))
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Integer read; tolerates float-formatted values by truncating.
    pub fn i64_at(&self, path: &str, default: i64) -> i64 {
        self.find(path)
            .and_then(|e| e.attr("Value"))
            .and_then(|v| {
                let v = v.trim();
                v.parse::<i64>()
                    .ok()
                    .or_else(|| v.parse::<f64>().ok().map(|f| f as i64))
            })
            .unwrap_or(default)
    }

    /// Boolean read over the schema's `"true"`/`"false"` literals. An absent
    /// node yields `default`; a present non-`"true"` value is false.
    pub fn bool_at(&self, path: &str, default: bool) -> bool {
        match self.find(path).and_then(|e| e.attr("Value")) {
            Some(v) => v == "true",
            None => default,
        }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

struct Step<'a> {
    tag: &'a str,
    any_depth: bool,
}

fn parse_path(path: &str) -> Vec<Step<'_>> {
    let mut steps = Vec::new();
    let mut any_depth = false;
    for seg in path.split('/') {
        match seg {
            "." => {}
            "" => any_depth = true,
            tag => {
                steps.push(Step { tag, any_depth });
                any_depth = false;
            }
        }
    }
    steps
}

fn find_first<'a>(node: &'a Element, steps: &[Step<'_>]) -> Option<&'a Element> {
    let step = &steps[0];
    for child in &node.children {
        if child.tag == step.tag {
            if steps.len() == 1 {
                return Some(child);
            }
            if let Some(found) = find_first(child, &steps[1..]) {
                return Some(found);
            }
        }
        if step.any_depth {
            if let Some(found) = find_first(child, steps) {
                return Some(found);
            }
        }
    }
    None
}

fn collect<'a>(node: &'a Element, steps: &[Step<'_>], out: &mut Vec<&'a Element>) {
    let step = &steps[0];
    for child in &node.children {
        if child.tag == step.tag {
            if steps.len() == 1 {
                out.push(child);
            } else {
                collect(child, &steps[1..], out);
            }
        }
        if step.any_depth {
            collect(child, steps, out);
        }
    }
}
