//! Player action system
//!
//! Every action function takes the [`GameState`] it mutates and reports
//! what happened through `state.narrate` / `state.emit`. Fallible lookups
//! are resolved before anything is changed, so an `Err` never leaves a
//! half-applied action behind.

pub mod chest;
pub mod combat;
pub mod commands;
pub mod help;
pub mod items;
pub mod look;
pub mod movement;

pub use commands::parse;

use crate::event::{Category, Event, GameOverCause};
use crate::gameloop::{GameState, GameStatus};
use crate::world::Direction;

/// Structured player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Look,
    Move(Direction),
    /// `go` with something that is not a direction
    BadDirection(String),
    Back,
    Take(String),
    Use(String),
    Open(String),
    Inventory,
    Attack(String),
    Flee,
    Help,
    /// Not a known verb; carries the raw input
    Unrecognized(String),
}

impl Action {
    /// Commands that never change state, and so stay available after the
    /// game has ended.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Action::Look | Action::Inventory | Action::Help | Action::Unrecognized(_)
        )
    }
}

/// Result of executing an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// State changed, a turn passes
    Success,
    /// Nothing changed (information, or a narrated refusal)
    NoTime,
    /// The player died
    Died,
    /// The player escaped the dungeon
    Won,
}

/// End the game with the player's death.
pub(crate) fn player_dies(state: &mut GameState, category: Category) -> ActionResult {
    tracing::debug!(room = %state.player.current_room, "player died");
    state.narrate(category, "You have died! Game Over.");
    state.emit(Event::GameOver {
        cause: GameOverCause::Death,
    });
    state.status = GameStatus::Dead;
    ActionResult::Died
}
