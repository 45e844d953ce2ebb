//! Inventory panel

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use dc_core::ItemKind;

use crate::theme::Theme;

/// Carried items, lettered in pickup order
pub struct InventoryWidget<'a> {
    items: &'a [ItemKind],
    theme: &'a Theme,
}

impl<'a> InventoryWidget<'a> {
    pub fn new(items: &'a [ItemKind], theme: &'a Theme) -> Self {
        Self { items, theme }
    }

    /// "a - torch"
    pub fn format_item(index: usize, item: ItemKind) -> String {
        let letter = (b'a' + (index % 26) as u8) as char;
        format!("{letter} - {}", item.name())
    }
}

impl Widget for InventoryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Inventory")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.items.is_empty() {
            Paragraph::new("(empty)")
                .style(Style::default().fg(self.theme.text_dim))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, &item)| {
                ListItem::new(Self::format_item(i, item))
                    .style(Style::default().fg(self.theme.text))
            })
            .collect();
        Widget::render(List::new(items), inner, buf);
    }
}
