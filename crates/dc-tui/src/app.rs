//! Application state and main UI controller

use crossterm::event::{Event as TermEvent, KeyCode, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use strum::IntoEnumIterator;

use dc_core::{
    Direction, EngineError, Event as GameEvent, GameLoop, GameLoopResult, GameOverCause, GameRng,
    GameState, RandomSource, TurnOutcome,
};

use crate::input::{InputAction, InputLine};
use crate::theme::Theme;
use crate::view::ViewState;
use crate::widgets::{InventoryWidget, LogWidget, StatusWidget};

/// Rows moved per PageUp/PageDown
const SCROLL_STEP: usize = 5;

/// UI mode - what the app is currently displaying
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal play
    Normal,
    /// Key and command reference
    Help,
    /// End of game banner; dismissing it returns to `Normal`
    GameOver(GameOverCause),
}

/// Application state
pub struct App<R: RandomSource = GameRng> {
    /// Game loop controller
    game_loop: GameLoop<R>,

    /// Everything the screen shows, built from events
    view: ViewState,

    input: InputLine,

    mode: UiMode,

    /// Wrapped rows scrolled back from the newest message
    scroll: usize,

    theme: Theme,

    should_quit: bool,
}

impl<R: RandomSource> App<R> {
    /// Create an application around a game loop
    pub fn new(game_loop: GameLoop<R>, theme: Theme, history: usize) -> Self {
        Self {
            game_loop,
            view: ViewState::new(history),
            input: InputLine::new(),
            mode: UiMode::Normal,
            scroll: 0,
            theme,
            should_quit: false,
        }
    }

    /// Show the opening banner and the first room
    pub fn start(&mut self, welcome: bool) -> Result<(), EngineError> {
        let outcome = self.game_loop.begin(welcome)?;
        self.absorb(&outcome);
        Ok(())
    }

    /// Get game state
    pub fn state(&self) -> &GameState {
        self.game_loop.state()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle a terminal event. Only engine data errors are returned.
    pub fn handle_event(&mut self, event: TermEvent) -> Result<(), EngineError> {
        let TermEvent::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match self.mode {
            UiMode::Help => {
                self.mode = UiMode::Normal;
                return Ok(());
            }
            UiMode::GameOver(_) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.mode = UiMode::Normal;
                }
                return Ok(());
            }
            UiMode::Normal => {}
        }

        match self.input.handle_key(key) {
            InputAction::None => {}
            InputAction::Submit(line) => {
                self.submit(&line)?;
            }
            InputAction::Quit => self.should_quit = true,
            InputAction::ToggleHelp => self.mode = UiMode::Help,
            InputAction::ScrollUp => self.scroll += SCROLL_STEP,
            InputAction::ScrollDown => self.scroll = self.scroll.saturating_sub(SCROLL_STEP),
        }
        Ok(())
    }

    /// Run one typed command and fold its events into the view
    pub fn submit(&mut self, line: &str) -> Result<GameLoopResult, EngineError> {
        self.view.echo(line);
        let outcome = self.game_loop.execute_line(line)?;
        self.absorb(&outcome);
        Ok(outcome.result)
    }

    fn absorb(&mut self, outcome: &TurnOutcome) {
        for event in &outcome.events {
            self.view.apply(event);
            if let GameEvent::GameOver { cause } = event {
                self.mode = UiMode::GameOver(*cause);
            }
        }
        self.scroll = 0;
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Layout: log and sidebar on top, input line at the bottom
        let [body, input_area] =
            Layout::vertical([Constraint::Min(6), Constraint::Length(3)]).areas(frame.area());
        let [log_area, sidebar] =
            Layout::horizontal([Constraint::Min(30), Constraint::Length(28)]).areas(body);
        let [status_area, inventory_area] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(3)]).areas(sidebar);

        let title = self
            .view
            .room
            .as_ref()
            .map_or_else(|| "Dungeon".to_string(), |room| format!("Dungeon - {room}"));
        frame.render_widget(
            LogWidget::new(self.view.log(), &self.theme)
                .title(&title)
                .scroll(self.scroll),
            log_area,
        );
        frame.render_widget(StatusWidget::new(&self.view, &self.theme), status_area);
        frame.render_widget(
            InventoryWidget::new(&self.view.inventory, &self.theme),
            inventory_area,
        );
        self.render_input(frame, input_area);

        match self.mode {
            UiMode::Normal => {}
            UiMode::Help => self.render_help(frame),
            UiMode::GameOver(cause) => self.render_game_over(frame, cause),
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Command (F1 help, Esc quit)")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        let text = Paragraph::new(format!("> {}", self.input.text()))
            .style(Style::default().fg(self.theme.text))
            .block(block);
        frame.render_widget(text, area);

        if self.mode == UiMode::Normal {
            let width = u16::try_from(self.input.text().chars().count() + 2).unwrap_or(u16::MAX);
            let x = inner.x.saturating_add(width).min(inner.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }

    /// Render help overlay
    fn render_help(&self, frame: &mut Frame) {
        let area = centered_rect(70, 70, frame.area());
        frame.render_widget(Clear, area);

        let directions: Vec<&str> = Direction::iter().map(Direction::name).collect();
        let help_text = format!(
            "Commands:
  look                 describe the room again
  go <direction>       move ({})
  go back / back       return to the previous room
  take <item>          pick something up
  use <item>           use an item (health potion)
  open chest           open a chest when no enemy is near
  inventory            list what you carry
  attack <enemy>       fight an enemy in the room
  run / flee           try to escape a fight
  help                 list commands

Keys:
  Up/Down     command history
  PgUp/PgDn   scroll messages
  F1          this help
  Esc         quit

Press any key to close",
            directions.join(", ")
        );

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));

        let paragraph = Paragraph::new(help_text)
            .block(block)
            .style(Style::default().fg(self.theme.text));

        frame.render_widget(paragraph, area);
    }

    fn render_game_over(&self, frame: &mut Frame, cause: GameOverCause) {
        let area = centered_rect(50, 40, frame.area());
        frame.render_widget(Clear, area);

        let (headline, color) = match cause {
            GameOverCause::Death => ("  R.I.P.  ", self.theme.bad),
            GameOverCause::Victory => ("  You escaped!  ", self.theme.good),
        };
        let state = self.state();
        let lines = vec![
            Line::from(Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Turns: {}", state.turns)),
            Line::from(format!("Health: {}", state.player.health.max(0))),
            Line::from(format!("Items: {}", state.player.inventory.len())),
            Line::from(""),
            Line::from(Span::styled(
                "Press ENTER to continue",
                Style::default().fg(self.theme.text_dim),
            )),
        ];

        let border = match cause {
            GameOverCause::Death => self.theme.border_danger,
            GameOverCause::Victory => self.theme.border_accent,
        };
        let block = Block::default()
            .title(" Game Over ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(r);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 40, outer);
        assert!(inner.width <= 50 && inner.height <= 20);
        assert!(outer.contains(Position::new(inner.x, inner.y)));
    }
}
