//! Line-mode sessions over the shipped dungeon

use std::io::Cursor;

use dc_core::{GameLoop, GameLoopResult, GameState, ScriptedRng};
use dc_tui::{OutputFormat, PlainPresenter};

fn session(input: &str, format: OutputFormat, welcome: bool) -> (GameLoopResult, String) {
    let mut game = GameLoop::new(
        GameState::new(dc_data::dungeon()),
        ScriptedRng::constant(0.5),
    );
    let mut presenter = PlainPresenter::new(Vec::new(), format);
    let result = presenter
        .run(&mut game, Cursor::new(input.to_string()), welcome)
        .unwrap();
    let out = String::from_utf8(presenter.into_inner()).unwrap();
    (result, out)
}

#[test]
fn test_text_session() {
    let (result, out) = session("take torch\n\ninventory\n", OutputFormat::Text, false);
    assert_eq!(result, GameLoopResult::Continue);

    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].starts_with("You stand at the entrance"));
    assert_eq!(lines[1], "You see: torch");
    assert_eq!(lines[2], "Exits: north");
    assert_eq!(lines[3], "You take the torch.");
    assert_eq!(lines[4], "Inventory: torch");
    assert_eq!(lines[5], "Health: 100");
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_quit_stops_reading() {
    let (_, out) = session("quit\ntake torch\n", OutputFormat::Text, true);
    assert!(out.starts_with("Welcome to the Dungeon Crawler!"));
    assert!(!out.contains("You take the torch."));
}

#[test]
fn test_json_session() {
    let (_, out) = session("go north\n", OutputFormat::Json, false);
    let events: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert!(events.iter().all(|e| e["event"].is_string()));
    assert!(events.iter().any(|e| {
        e["event"] == "enemy-spawned" && e["enemy"] == "skeleton" && e["max_hp"] == 50
    }));
    assert!(events
        .iter()
        .any(|e| e["event"] == "room-entered" && e["room"] == "corridor1"));
}

#[test]
fn test_session_ends_with_game() {
    // Skeleton fight leaves 76 health; the fourth trap visit is fatal.
    let mut walk = String::from("go north\n");
    walk.push_str(&"attack skeleton\n".repeat(3));
    walk.push_str("go north\n");
    walk.push_str(&"go east\ngo west\n".repeat(4));
    walk.push_str("look\n");

    let (result, out) = session(&walk, OutputFormat::Text, false);
    assert_eq!(result, GameLoopResult::PlayerDied);
    assert!(out.contains("You defeat the skeleton!"));
    assert_eq!(out.lines().last(), Some("You have died! Game Over."));
}
