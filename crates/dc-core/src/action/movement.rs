//! Moving between rooms
//!
//! `go <direction>` and `go back` are deliberately different transitions.
//! A normal move replaces the active enemies, springs traps and checks the
//! exit door. Going back only swaps the current and previous rooms and
//! describes the room again; none of the entry effects run.

use crate::action::look::describe_room;
use crate::action::{ActionResult, player_dies};
use crate::catalog::EnemyKind;
use crate::entity::Enemy;
use crate::error::EngineError;
use crate::event::{Category, Event, GameOverCause};
use crate::gameloop::{GameState, GameStatus};
use crate::world::Direction;
use crate::TRAP_DAMAGE;

/// `go <direction>`
pub fn do_move(state: &mut GameState, direction: Direction) -> Result<ActionResult, EngineError> {
    let Some(destination) = state.current_room()?.exit(direction).cloned() else {
        return Ok(no_exit(state));
    };

    let room = state.world.room(destination.as_str())?;
    let newcomers = room.enemies().to_vec();
    let trapped = room.is_trap();
    let is_exit = room.is_exit();

    tracing::debug!(from = %state.player.current_room, to = %destination, %direction, "player moves");
    state.player.previous_room = Some(state.player.current_room.clone());
    replace_enemies(state, &newcomers);

    if trapped {
        state.player.health -= TRAP_DAMAGE;
        state.narrate(
            Category::Info,
            format!("You triggered a trap! You take {TRAP_DAMAGE} damage."),
        );
        state.emit(Event::PlayerDamaged {
            hp: state.player.health,
        });
        if state.player.is_dead() {
            // The player never arrives: no description, no door check.
            return Ok(player_dies(state, Category::Info));
        }
    }

    state.player.current_room = destination.clone();
    state.emit(Event::RoomEntered { room: destination });
    describe_room(state)?;

    if is_exit {
        return Ok(try_exit_door(state));
    }
    Ok(ActionResult::Success)
}

/// `go back`: one step of history, swapped rather than popped, so a second
/// `go back` returns to where the first one started.
pub fn go_back(state: &mut GameState) -> Result<ActionResult, EngineError> {
    let Some(previous) = state.player.previous_room.clone() else {
        state.narrate(Category::Info, "You can't go back from here.");
        return Ok(ActionResult::NoTime);
    };
    state.world.room(previous.as_str())?;

    let current = std::mem::replace(&mut state.player.current_room, previous.clone());
    tracing::debug!(from = %current, to = %previous, "player goes back");
    state.player.previous_room = Some(current);

    state.emit(Event::RoomEntered { room: previous });
    describe_room(state)?;
    Ok(ActionResult::Success)
}

/// Refusal for a direction with no exit
pub fn no_exit(state: &mut GameState) -> ActionResult {
    state.narrate(Category::Info, "You can't go that way!");
    ActionResult::NoTime
}

/// Drop every active enemy, then spawn the given ones from the catalog.
pub(crate) fn replace_enemies(state: &mut GameState, newcomers: &[EnemyKind]) {
    for enemy in std::mem::take(&mut state.enemies) {
        state.emit(Event::EnemyRemoved { enemy: enemy.kind });
    }
    for &kind in newcomers {
        let enemy = Enemy::new(kind);
        tracing::debug!(enemy = %kind, hp = enemy.max_hp, "enemy spawned");
        state.emit(Event::EnemySpawned {
            enemy: kind,
            max_hp: enemy.max_hp,
        });
        state.enemies.push(enemy);
    }
}

fn try_exit_door(state: &mut GameState) -> ActionResult {
    if state.player.has_key {
        state.narrate(
            Category::Info,
            "You use the key to unlock the door and escape the dungeon! Congratulations!",
        );
        state.emit(Event::GameOver {
            cause: GameOverCause::Victory,
        });
        state.status = GameStatus::Won;
        ActionResult::Won
    } else {
        state.narrate(Category::Info, "The door is locked. You need a key to open it.");
        ActionResult::Success
    }
}
