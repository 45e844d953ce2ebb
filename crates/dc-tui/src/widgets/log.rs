//! Scrolling message log

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme::Theme;
use crate::view::LogLine;

/// Message log, newest line at the bottom.
///
/// `scroll` counts wrapped rows hidden below the bottom edge.
pub struct LogWidget<'a> {
    lines: Vec<&'a LogLine>,
    scroll: usize,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a> LogWidget<'a> {
    pub fn new(lines: impl IntoIterator<Item = &'a LogLine>, theme: &'a Theme) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            scroll: 0,
            title: "Dungeon",
            theme,
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

impl Widget for LogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = usize::from(inner.width);
        let height = usize::from(inner.height);
        if width == 0 || height == 0 {
            return;
        }

        let rows: Vec<Line> = self
            .lines
            .iter()
            .flat_map(|line| {
                let style = self.theme.line_style(line.category);
                wrap_text(&line.text, width)
                    .into_iter()
                    .map(move |row| Line::styled(row, style))
            })
            .collect();

        let scroll = self.scroll.min(rows.len().saturating_sub(height));
        let end = rows.len() - scroll;
        let start = end.saturating_sub(height);
        Paragraph::new(rows[start..end].to_vec()).render(inner, buf);
    }
}

/// Greedy word wrap. Words longer than `width` are split; an empty text
/// still takes one row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > width {
            if !current.is_empty() {
                rows.push(std::mem::take(&mut current));
            }
            let split = word
                .char_indices()
                .nth(width)
                .map_or(word.len(), |(i, _)| i);
            rows.push(word[..split].to_string());
            word = &word[split..];
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width {
            rows.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_on_words() {
        assert_eq!(
            wrap_text("You see: torch, key", 10),
            vec!["You see:", "torch, key"]
        );
    }

    #[test]
    fn test_wrap_long_word() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(wrap_text("", 5), vec![String::new()]);
    }

    #[test]
    fn test_wrap_fits() {
        assert_eq!(wrap_text("Exits: north", 40), vec!["Exits: north"]);
    }
}
