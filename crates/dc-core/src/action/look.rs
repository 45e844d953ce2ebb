//! Room descriptions

use crate::action::ActionResult;
use crate::catalog::join_names;
use crate::error::EngineError;
use crate::event::Category;
use crate::gameloop::GameState;

/// `look`: describe the current room again
pub fn do_look(state: &mut GameState) -> Result<ActionResult, EngineError> {
    describe_room(state)?;
    Ok(ActionResult::NoTime)
}

/// Narrate the current room: description, items, closed chest, enemies
/// and exits, in that order.
pub(crate) fn describe_room(state: &mut GameState) -> Result<(), EngineError> {
    let room = state.current_room()?;

    let mut lines = vec![(Category::RoomDescription, room.description().to_string())];
    if !room.items().is_empty() {
        lines.push((
            Category::RoomInfo,
            format!("You see: {}", join_names(room.items())),
        ));
    }
    if room.has_closed_chest() {
        lines.push((Category::RoomInfo, "There is a chest in the room.".to_string()));
    }
    if !room.enemies().is_empty() {
        lines.push((
            Category::RoomInfo,
            format!("Enemies present: {}", join_names(room.enemies())),
        ));
    }
    let exits = room
        .exits()
        .iter()
        .map(|e| e.direction.name())
        .collect::<Vec<_>>()
        .join(", ");
    lines.push((Category::RoomInfo, format!("Exits: {exits}")));

    for (category, text) in lines {
        state.narrate(category, text);
    }
    Ok(())
}
