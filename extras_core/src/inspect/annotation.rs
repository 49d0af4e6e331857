//! Annotation parsing for inspectable events.
//!
//! Grammar of a recognized line:
//!
//! ```text
//! annotation = prefix [ "[" codes "]" ]
//! prefix     = "\inspect_event"
//! codes      = integer { "," integer }
//! ```
//!
//! Parsing is deliberately forgiving: after the prefix, every maximal digit
//! run anywhere on the line contributes one direction code, so stray text or
//! a second bracket group cannot make a page error out. A line that does not
//! begin with the prefix is simply not an annotation.

use engine_view::InspectTag;
use std::collections::BTreeSet;

/// The prefix that marks an event-page comment as an inspect annotation.
pub const ANNOTATION_PREFIX: &str = "\\inspect_event";

/// Parse one annotation line.
///
/// Returns `None` when the line does not begin with the prefix. A matching
/// line with no codes yields an empty direction set, meaning "any cardinal
/// adjacency".
pub fn parse_line(line: &str) -> Option<InspectTag> {
    let rest = line.strip_prefix(ANNOTATION_PREFIX)?;

    let mut directions = BTreeSet::new();
    let mut digits = String::new();
    for ch in rest.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else {
            flush_run(&mut digits, &mut directions);
        }
    }
    flush_run(&mut digits, &mut directions);

    Some(InspectTag {
        enabled: true,
        directions,
    })
}

/// Collect a finished digit run as one direction code.
///
/// Runs too long to fit an integer are dropped; out-of-range codes are kept
/// as written and never match anything downstream.
fn flush_run(digits: &mut String, directions: &mut BTreeSet<u32>) {
    if digits.is_empty() {
        return;
    }
    if let Ok(code) = digits.parse::<u32>() {
        directions.insert(code);
    }
    digits.clear();
}

/// Scan an event page's comment lines for an annotation.
///
/// Only the first matching line counts; later annotations on the same page
/// are ignored. Pages without a match come back disabled.
pub fn scan_page<'a>(lines: impl IntoIterator<Item = &'a str>) -> InspectTag {
    for line in lines {
        if let Some(tag) = parse_line(line) {
            return tag;
        }
    }
    InspectTag::disabled()
}
