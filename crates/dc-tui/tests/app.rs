//! Driving the full-screen app with synthetic key presses

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use dc_core::{EnemyKind, GameLoop, GameOverCause, GameState, ItemKind, ScriptedRng, WorldMap};
use dc_tui::{App, Theme, UiMode};

fn app(draws: &[f64]) -> App<ScriptedRng> {
    let game = GameLoop::new(
        GameState::new(dc_data::dungeon()),
        ScriptedRng::new(draws.iter().copied()),
    );
    let mut app = App::new(game, Theme::dark(), 200);
    app.start(true).unwrap();
    app
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_line(app: &mut App<ScriptedRng>, line: &str) {
    for c in line.chars() {
        app.handle_event(key(KeyCode::Char(c))).unwrap();
    }
    app.handle_event(key(KeyCode::Enter)).unwrap();
}

fn screen(app: &App<ScriptedRng>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_opening_screen() {
    let app = app(&[0.5]);
    assert_eq!(
        app.view().log().next().map(|l| l.text.as_str()),
        Some("Welcome to the Dungeon Crawler!")
    );
    assert_eq!(app.view().room.as_ref().map(|r| r.as_str()), Some("entrance"));

    let text = screen(&app);
    assert!(text.contains("Dungeon - entrance"));
    assert!(text.contains("Health"));
    assert!(text.contains("100/100"));
    assert!(text.contains("No enemy"));
}

#[test]
fn test_typed_commands_reach_engine() {
    let mut app = app(&[0.5]);
    type_line(&mut app, "take torch");
    assert_eq!(app.view().inventory, vec![ItemKind::Torch]);
    assert!(app.view().log().any(|l| l.text == "> take torch"));

    type_line(&mut app, "go north");
    let gauge = app.view().enemy().unwrap();
    assert_eq!(gauge.kind, EnemyKind::Skeleton);
    assert_eq!(gauge.hp, 50);

    type_line(&mut app, "attack skeleton");
    assert_eq!(app.view().enemy().map(|g| g.hp), Some(30));
    assert_eq!(app.view().player_hp, 88);
    assert_eq!(app.view().player_hp, app.state().player.health);

    let text = screen(&app);
    assert!(text.contains("skeleton"));
    assert!(text.contains("30/50"));
    assert!(text.contains("a - torch"));
}

#[test]
fn test_gauge_follows_engaged_enemy() {
    let world = WorldMap::from_json(
        r#"{
            "start": "a",
            "rooms": [
                { "id": "a", "description": "A.", "exits": [{ "direction": "north", "to": "b" }] },
                { "id": "b", "description": "B.", "enemies": ["goblin", "skeleton"] }
            ]
        }"#,
    )
    .unwrap();
    let game = GameLoop::new(GameState::new(world), ScriptedRng::constant(0.5));
    let mut app = App::new(game, Theme::dark(), 50);
    app.start(false).unwrap();

    type_line(&mut app, "go north");
    let engaged = app.state().engaged_enemy().map(|e| e.kind);
    assert_eq!(engaged, Some(EnemyKind::Goblin));
    assert_eq!(app.view().enemy().map(|g| g.kind), engaged);

    type_line(&mut app, "attack goblin");
    let gauge = app.view().enemy().unwrap();
    assert_eq!((gauge.kind, gauge.hp), (EnemyKind::Goblin, 20));
    assert_eq!(Some(gauge.hp), app.state().engaged_enemy().map(|e| e.hp));
}

#[test]
fn test_help_overlay_toggles() {
    let mut app = app(&[0.5]);
    app.handle_event(key(KeyCode::F(1))).unwrap();
    assert_eq!(app.mode(), UiMode::Help);
    assert!(screen(&app).contains("open chest"));

    app.handle_event(key(KeyCode::Char('x'))).unwrap();
    assert_eq!(app.mode(), UiMode::Normal);
}

#[test]
fn test_death_banner() {
    // Player hits for 10, the guardian answers for 19 every time
    let mut app = app(&[0.0, 0.999]);
    for line in ["go north", "go north", "go west"] {
        type_line(&mut app, line);
    }
    for _ in 0..6 {
        type_line(&mut app, "attack guardian");
    }
    assert_eq!(app.mode(), UiMode::GameOver(GameOverCause::Death));
    assert_eq!(app.view().game_over, Some(GameOverCause::Death));
    assert!(screen(&app).contains("R.I.P."));

    app.handle_event(key(KeyCode::Enter)).unwrap();
    assert_eq!(app.mode(), UiMode::Normal);

    type_line(&mut app, "go east");
    assert_eq!(
        app.view().log().last().map(|l| l.text.as_str()),
        Some("The game is over.")
    );
}

#[test]
fn test_escape_quits() {
    let mut app = app(&[0.5]);
    assert!(!app.should_quit());
    app.handle_event(key(KeyCode::Esc)).unwrap();
    assert!(app.should_quit());
}
