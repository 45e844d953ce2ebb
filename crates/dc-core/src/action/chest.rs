//! Opening chests

use crate::action::ActionResult;
use crate::catalog::join_names;
use crate::error::EngineError;
use crate::event::{Category, Event};
use crate::gameloop::GameState;

/// `open <target>`
///
/// Contents are dropped into the room; the player still has to `take` them.
pub fn do_open(state: &mut GameState, target: &str) -> Result<ActionResult, EngineError> {
    if target != "chest" {
        state.narrate(Category::Info, "What are you trying to open?");
        return Ok(ActionResult::NoTime);
    }

    let room = state.current_room()?;
    let refusal = match room.chest() {
        None => Some("There's no chest here to open."),
        Some(chest) if chest.open => Some("The chest is already open."),
        Some(_) if !room.enemies().is_empty() => {
            Some("You can't open the chest while enemies are present!")
        }
        Some(_) => None,
    };
    if let Some(refusal) = refusal {
        state.narrate(Category::Info, refusal);
        return Ok(ActionResult::NoTime);
    }

    let room = state.current_room_mut()?;
    let contents = match room.chest.as_mut() {
        Some(chest) => {
            chest.open = true;
            chest.contents.clone()
        }
        None => return Ok(ActionResult::NoTime),
    };
    room.items.extend(contents.iter().copied());

    tracing::debug!(room = %state.player.current_room, ?contents, "chest opened");
    state.emit(Event::ChestOpened {
        contents: contents.clone(),
    });
    state.narrate(Category::RoomInfo, "You open the chest.");
    state.narrate(
        Category::RoomInfo,
        format!("Inside you find: {}", join_names(&contents)),
    );
    Ok(ActionResult::Success)
}
