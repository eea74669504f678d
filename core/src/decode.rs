//! Live Set decoding: gzip inflation and XML tree construction.
//!
//! A `.als` file is a gzip stream wrapping one XML document. [`decode`]
//! performs both steps and returns the document element. Failure is terminal
//! for the file: there is no partial tree and no recovery.

use crate::tree::Element;
use flate2::read::GzDecoder;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::io::Read;
use thiserror::Error;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a gzip stream")]
    NotGzip,
    #[error("failed to decompress: {0}")]
    Decompress(String),
    #[error("XML parse error: {0}")]
    Xml(String),
}

/// Inflate and parse a raw `.als` byte buffer into its document element.
pub fn decode(bytes: &[u8]) -> Result<Element, DecodeError> {
    if bytes.len() < 2 || bytes[..2] != GZIP_MAGIC {
        return Err(DecodeError::NotGzip);
    }
    let mut xml = Vec::new();
    GzDecoder::new(bytes)
        .read_to_end(&mut xml)
        .map_err(|e| DecodeError::Decompress(e.to_string()))?;
    parse_xml(&xml)
}

/// Parse uncompressed XML into an [`Element`] tree.
///
/// Public so tests and tooling can build trees without compressing first.
pub fn parse_xml(xml: &[u8]) -> Result<Element, DecodeError> {
    let mut reader = Reader::from_reader(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                stack.push(element_from(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let el = element_from(&e)?;
                attach(&mut stack, &mut root, el)?;
            }
            Ok(Event::End(_)) => {
                let el = stack
                    .pop()
                    .ok_or_else(|| DecodeError::Xml("unbalanced end tag".to_string()))?;
                attach(&mut stack, &mut root, el)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(DecodeError::Xml(e.to_string())),
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(DecodeError::Xml("truncated document".to_string()));
    }
    root.ok_or_else(|| DecodeError::Xml("no document element".to_string()))
}

fn element_from(start: &BytesStart<'_>) -> Result<Element, DecodeError> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| DecodeError::Xml(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| DecodeError::Xml(e.to_string()))?
            .into_owned();
        attrs.push((key, value));
    }
    Ok(Element {
        tag,
        attrs,
        children: Vec::new(),
    })
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    el: Element,
) -> Result<(), DecodeError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(el);
        Ok(())
    } else if root.is_none() {
        *root = Some(el);
        Ok(())
    } else {
        Err(DecodeError::Xml("multiple document elements".to_string()))
    }
}
