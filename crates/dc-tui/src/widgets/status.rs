//! Health gauges for the player and the engaged enemy

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use dc_core::PLAYER_MAX_HP;

use crate::theme::Theme;
use crate::view::ViewState;

/// Player gauge on top, enemy gauge (or "No enemy") below it.
/// Needs six rows.
pub struct StatusWidget<'a> {
    view: &'a ViewState,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(view: &'a ViewState, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    fn gauge(&self, title: String, hp: i32, max_hp: i32, ratio: f64) -> Gauge<'static> {
        Gauge::default()
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border)),
            )
            .gauge_style(Style::default().fg(self.theme.health_color(ratio)))
            .ratio(ratio)
            .label(format!("{}/{}", hp.max(0), max_hp))
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [player_area, enemy_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).areas(area);

        let view = self.view;
        self.gauge(
            "Health".to_string(),
            view.player_hp,
            PLAYER_MAX_HP,
            view.player_ratio(),
        )
        .render(player_area, buf);

        match view.enemy() {
            Some(enemy) => self
                .gauge(
                    enemy.kind.name().to_string(),
                    enemy.hp,
                    enemy.max_hp,
                    enemy.ratio(),
                )
                .render(enemy_area, buf),
            None => Paragraph::new("No enemy")
                .style(Style::default().fg(self.theme.text_dim))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(self.theme.border)),
                )
                .render(enemy_area, buf),
        }
    }
}
