//! Views of map events, the player, and map names as exposed by the host.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::grid::{Direction, Position};

/// Index key of an event on its map.
///
/// The host keys live events by small integer ids. Ascending id order is the
/// deterministic tie-break used whenever several events qualify at once.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct EventId(pub u32);

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inspection state of an event's active page.
///
/// Recomputed by the host whenever the event's page changes, immutable for
/// the page's lifetime. An empty direction set means "any cardinal
/// adjacency"; code 0 means "same cell" and must be listed explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InspectTag {
    pub enabled: bool,
    /// Raw numpad codes from the annotation. Out-of-range codes are carried
    /// as written; they simply never match.
    pub directions: BTreeSet<u32>,
}

impl InspectTag {
    /// The state of an event with no recognized annotation.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Inspectable from any of the four cardinal adjacencies.
    pub fn any_direction() -> Self {
        Self {
            enabled: true,
            directions: BTreeSet::new(),
        }
    }

    /// Inspectable from the given direction codes only.
    pub fn with_directions(codes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            enabled: true,
            directions: codes.into_iter().collect(),
        }
    }
}

/// A live map event as seen from the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventView {
    pub id: EventId,
    pub position: Position,
    pub inspect: InspectTag,
}

impl EventView {
    /// Create an event view at the given tile.
    pub fn new(id: EventId, position: Position, inspect: InspectTag) -> Self {
        Self {
            id,
            position,
            inspect,
        }
    }
}

/// The player as seen from the host.
///
/// Owned and mutated exclusively by the host's movement code; the script
/// extras only ever read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub direction: Direction,
    /// True while the player is mid-movement between tiles.
    pub moving: bool,
}

impl PlayerView {
    /// Create a stationary player view.
    pub fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
            moving: false,
        }
    }
}

/// A map name with its indoor tag stripped.
///
/// Map names may carry a case-insensitive `[ind]` tag marking the map as
/// indoors; the tag is removed from the display name so it never leaks into
/// name-display features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MapName {
    pub display: String,
    pub indoor: bool,
}

impl MapName {
    /// Parse a raw editor map name.
    pub fn parse(raw: &str) -> Self {
        const TAG: &str = "[ind]";
        // ASCII lowercasing keeps byte offsets aligned with the raw name.
        let lower = raw.to_ascii_lowercase();
        let mut display = String::with_capacity(raw.len());
        let mut indoor = false;
        let mut at = 0;
        while let Some(offset) = lower[at..].find(TAG) {
            indoor = true;
            display.push_str(&raw[at..at + offset]);
            at += offset + TAG.len();
        }
        display.push_str(&raw[at..]);
        Self { display, indoor }
    }
}
