//! Adjacency and facing checks for inspectable events.

use engine_view::{InspectTag, PlayerView, Position};

/// Direction code for "player stands on the event's tile".
pub const CODE_SAME_CELL: u32 = 0;

/// Decide whether the player currently faces an inspectable event.
///
/// `tag.directions` holds the permitted numpad codes from the event's
/// annotation; each code names the side of the event the player must stand
/// on, so the tile that can match lies opposite the player's facing
/// direction. An empty set permits all four cardinal adjacencies.
///
/// Code 0 ("same cell") is checked in addition to the cardinal check and the
/// two are OR'd: listing 0 alongside cardinal codes never suppresses a
/// cardinal match. Diagonal or more distant events never match.
pub fn player_facing(tag: &InspectTag, player: &PlayerView, event_pos: Position) -> bool {
    if !tag.enabled {
        return false;
    }

    // The side of the event the player occupies, as a numpad code.
    let side = player.direction.opposite();
    let permitted = tag.directions.is_empty() || tag.directions.contains(&u32::from(side.code()));

    let mut facing = permitted && event_pos == player.position.step(side);

    if tag.directions.contains(&CODE_SAME_CELL) && event_pos == player.position {
        facing = true;
    }
    facing
}
