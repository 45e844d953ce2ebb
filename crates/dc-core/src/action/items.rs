//! Taking, using and listing items

use std::str::FromStr;

use crate::action::ActionResult;
use crate::catalog::{ItemKind, join_names};
use crate::error::EngineError;
use crate::event::{Category, Event};
use crate::gameloop::GameState;
use crate::{PLAYER_MAX_HP, POTION_HEAL};

/// `take <item>`
pub fn do_take(state: &mut GameState, name: &str) -> Result<ActionResult, EngineError> {
    let taken = match ItemKind::from_str(name) {
        Ok(item) => state.current_room_mut()?.take_item(item).then_some(item),
        Err(_) => None,
    };
    let Some(item) = taken else {
        state.narrate(Category::Info, "That item isn't here!");
        return Ok(ActionResult::NoTime);
    };

    state.player.inventory.push(item);
    if item == ItemKind::Key {
        state.player.has_key = true;
    }
    tracing::debug!(%item, "item taken");
    state.emit(Event::ItemTaken { item });
    state.narrate(Category::Info, format!("You take the {item}."));
    Ok(ActionResult::Success)
}

/// `use <item>`: only the health potion does anything.
pub fn do_use(state: &mut GameState, name: &str) -> ActionResult {
    let Some(item) = ItemKind::from_str(name)
        .ok()
        .filter(|&item| state.player.carries(item))
    else {
        state.narrate(Category::Info, "You don't have that item!");
        return ActionResult::NoTime;
    };

    match item {
        ItemKind::HealthPotion => {
            state.player.health = (state.player.health + POTION_HEAL).min(PLAYER_MAX_HP);
            if let Some(index) = state.player.inventory.iter().position(|&i| i == item) {
                state.player.inventory.remove(index);
            }
            state.emit(Event::ItemUsed { item });
            state.emit(Event::PlayerHealed {
                hp: state.player.health,
            });
            state.narrate(
                Category::Info,
                format!("You drink the health potion and restore {POTION_HEAL} health!"),
            );
            ActionResult::Success
        }
        _ => {
            state.narrate(Category::Info, "You can't use that item right now.");
            ActionResult::NoTime
        }
    }
}

/// `inventory`
pub fn show_inventory(state: &mut GameState) -> ActionResult {
    let listing = if state.player.inventory.is_empty() {
        "Your inventory is empty.".to_string()
    } else {
        format!("Inventory: {}", join_names(&state.player.inventory))
    };
    state.narrate(Category::Info, listing);
    state.narrate(Category::Info, format!("Health: {}", state.player.health));
    ActionResult::NoTime
}
