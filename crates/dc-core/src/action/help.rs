//! Help and welcome text

use crate::action::ActionResult;
use crate::event::Category;
use crate::gameloop::GameState;

pub const COMMANDS_HELP: &str = "Available commands: look, go [direction], go back, take [item], use [item], open chest, inventory, attack [enemy], run, help";

pub const DIRECTIONS_HELP: &str = "Directions: north, south, east, west";

const WELCOME: &[&str] = &[
    "Welcome to the Dungeon Crawler!",
    "You find yourself at the entrance of a mysterious dungeon. Your goal is to find the exit.",
    COMMANDS_HELP,
    DIRECTIONS_HELP,
];

/// `help`
pub fn do_help(state: &mut GameState) -> ActionResult {
    state.narrate(Category::Info, COMMANDS_HELP);
    ActionResult::NoTime
}

/// Opening banner shown once at game start
pub(crate) fn welcome(state: &mut GameState) {
    for line in WELCOME {
        state.narrate(Category::Welcome, *line);
    }
}

/// Reply to input that is not a command
pub fn not_understood(state: &mut GameState, raw: &str) -> ActionResult {
    tracing::debug!(input = raw, "unrecognized command");
    state.narrate(
        Category::Info,
        "I don't understand that command. Type 'help' for available commands.",
    );
    ActionResult::NoTime
}
