//! Inspect overlays - a looping animation over the player when they face an
//! inspectable event.
//!
//! The feature runs as a per-frame recomputation with no persisted state:
//!
//! 1. **Annotate**: an event page carries a `\inspect_event` comment,
//!    optionally restricting which sides of the event count
//! 2. **Scan**: once per frame, visit the live events in ascending id order
//!    and find the first adjacent one the player is facing
//! 3. **Present**: the host's sprite layer reads the resulting animation
//!    loop id and starts or stops the overlay
//!
//! A malformed annotation degrades to "not inspectable"; there is no error
//! state anywhere in this module.

mod annotation;
mod facing;

pub use annotation::*;
pub use facing::*;

use engine_view::{EventView, PlayerView};
use serde::{Deserialize, Serialize};

/// Identifier of the looping overlay animation on the player.
///
/// Zero means no loop animation. Written once per frame by [`scan`], read by
/// the host's sprite presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct AnimationLoop(pub u32);

impl AnimationLoop {
    /// No loop animation.
    pub const NONE: AnimationLoop = AnimationLoop(0);

    /// Whether no animation should loop.
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

/// Per-frame scan over the live events.
///
/// Events are visited in ascending id order, so a frame with several
/// qualifying events always settles on the same one and at most one
/// animation id is ever set. Returns [`AnimationLoop::NONE`] while the
/// player is mid-movement, which keeps the overlay from flickering during
/// transit, and whenever no event within Manhattan distance 1 passes the
/// facing check.
pub fn scan(player: &PlayerView, events: &[EventView], animation_id: u32) -> AnimationLoop {
    if player.moving {
        return AnimationLoop::NONE;
    }

    let mut ordered: Vec<&EventView> = events.iter().collect();
    ordered.sort_by_key(|event| event.id);

    for event in ordered {
        if !event.inspect.enabled {
            continue;
        }
        if event.position.manhattan_distance(player.position) > 1 {
            continue;
        }
        if player_facing(&event.inspect, player, event.position) {
            return AnimationLoop(animation_id);
        }
    }
    AnimationLoop::NONE
}

/// Presenter-side decision for the overlay.
///
/// A modal message overlay always suppresses the loop, overriding whatever
/// the scan computed this frame; otherwise a non-zero id selects the
/// animation to loop and zero stops it.
pub fn overlay_animation(animation: AnimationLoop, message_showing: bool) -> Option<u32> {
    if message_showing || animation.is_none() {
        None
    } else {
        Some(animation.0)
    }
}
