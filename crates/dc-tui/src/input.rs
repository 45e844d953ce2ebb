//! Input line editing
//!
//! Commands are typed as text; the only single-key bindings are the ones
//! that never reach the engine (quit, help, scrolling, history recall).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the application to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Nothing beyond editing the line
    None,
    /// Run this command
    Submit(String),
    Quit,
    ToggleHelp,
    ScrollUp,
    ScrollDown,
}

/// The command line at the bottom of the screen
#[derive(Debug, Clone, Default)]
pub struct InputLine {
    buffer: String,
    history: Vec<String>,
    /// Position while browsing history with Up/Down
    recall: Option<usize>,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('d') => InputAction::Quit,
                KeyCode::Char('u') => {
                    self.buffer.clear();
                    InputAction::None
                }
                _ => InputAction::None,
            };
        }

        match key.code {
            KeyCode::Char(c) => {
                self.buffer.push(c);
                self.recall = None;
                InputAction::None
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                InputAction::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => InputAction::Quit,
            KeyCode::F(1) => InputAction::ToggleHelp,
            KeyCode::PageUp => InputAction::ScrollUp,
            KeyCode::PageDown => InputAction::ScrollDown,
            KeyCode::Up => {
                self.recall_previous();
                InputAction::None
            }
            KeyCode::Down => {
                self.recall_next();
                InputAction::None
            }
            _ => InputAction::None,
        }
    }

    fn submit(&mut self) -> InputAction {
        self.recall = None;
        let line = self.buffer.trim().to_string();
        self.buffer.clear();
        if line.is_empty() {
            return InputAction::None;
        }
        if self.history.last() != Some(&line) {
            self.history.push(line.clone());
        }
        InputAction::Submit(line)
    }

    fn recall_previous(&mut self) {
        let index = match self.recall {
            Some(0) => 0,
            Some(i) => i - 1,
            None if self.history.is_empty() => return,
            None => self.history.len() - 1,
        };
        self.recall = Some(index);
        self.buffer = self.history[index].clone();
    }

    fn recall_next(&mut self) {
        let Some(index) = self.recall else {
            return;
        };
        if index + 1 < self.history.len() {
            self.recall = Some(index + 1);
            self.buffer = self.history[index + 1].clone();
        } else {
            self.recall = None;
            self.buffer.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(line: &mut InputLine, code: KeyCode) -> InputAction {
        line.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(line: &mut InputLine, text: &str) {
        for c in text.chars() {
            press(line, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_and_submit() {
        let mut line = InputLine::new();
        type_str(&mut line, "go nortj");
        press(&mut line, KeyCode::Backspace);
        type_str(&mut line, "h  ");
        assert_eq!(
            press(&mut line, KeyCode::Enter),
            InputAction::Submit("go north".to_string())
        );
        assert_eq!(line.text(), "");
    }

    #[test]
    fn test_blank_line_is_ignored() {
        let mut line = InputLine::new();
        type_str(&mut line, "   ");
        assert_eq!(press(&mut line, KeyCode::Enter), InputAction::None);
    }

    #[test]
    fn test_history_recall() {
        let mut line = InputLine::new();
        for cmd in ["look", "go north"] {
            type_str(&mut line, cmd);
            press(&mut line, KeyCode::Enter);
        }
        press(&mut line, KeyCode::Up);
        assert_eq!(line.text(), "go north");
        press(&mut line, KeyCode::Up);
        press(&mut line, KeyCode::Up);
        assert_eq!(line.text(), "look");
        press(&mut line, KeyCode::Down);
        assert_eq!(line.text(), "go north");
        press(&mut line, KeyCode::Down);
        assert_eq!(line.text(), "");
    }

    #[test]
    fn test_control_keys() {
        let mut line = InputLine::new();
        type_str(&mut line, "attack");
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(line.handle_key(ctrl_u), InputAction::None);
        assert_eq!(line.text(), "");
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(line.handle_key(ctrl_c), InputAction::Quit);
        assert_eq!(press(&mut line, KeyCode::Esc), InputAction::Quit);
    }
}
