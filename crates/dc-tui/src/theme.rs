//! Terminal color theme
//!
//! Adaptive palettes for dark and light terminal backgrounds, plus a
//! monochrome palette for the `!color` option. Detection uses COLORFGBG, or
//! the DC_LIGHT_BG=1 override.

use dc_core::Category;
use ratatui::style::{Color, Modifier, Style};

/// Color theme for the terminal UI.
/// UI code takes colors from here instead of hardcoding `Color` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // General UI text
    /// Primary foreground text
    pub text: Color,
    /// Hints and echoed input
    pub text_dim: Color,

    // Borders
    pub border: Color,
    /// Help overlay
    pub border_accent: Color,
    /// Game over overlay
    pub border_danger: Color,

    // Gauges
    pub good: Color,
    pub warn: Color,
    pub bad: Color,

    // Narration categories
    pub welcome: Color,
    pub room_description: Color,
    pub room_info: Color,
    pub combat_action: Color,
    pub combat_result: Color,
    pub enemy_defeat: Color,
    pub info: Color,

    /// Whether styling is applied at all
    pub styled: bool,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            border_accent: Color::Cyan,
            border_danger: Color::Red,
            good: Color::Green,
            warn: Color::Yellow,
            bad: Color::Red,
            welcome: Color::LightCyan,
            room_description: Color::White,
            room_info: Color::Cyan,
            combat_action: Color::Yellow,
            combat_result: Color::LightRed,
            enemy_defeat: Color::LightGreen,
            info: Color::Gray,
            styled: true,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            border_accent: Color::Blue,
            border_danger: Color::Red,
            good: Color::Green,
            warn: Color::Yellow,
            bad: Color::Red,
            welcome: Color::Blue,
            room_description: Color::Black,
            room_info: Color::Blue,
            combat_action: Color::Magenta,
            combat_result: Color::Red,
            enemy_defeat: Color::Green,
            info: Color::DarkGray,
            styled: true,
        }
    }

    /// No colors: everything in the terminal's own foreground
    pub fn monochrome() -> Self {
        Self {
            text: Color::Reset,
            text_dim: Color::Reset,
            border: Color::Reset,
            border_accent: Color::Reset,
            border_danger: Color::Reset,
            good: Color::Reset,
            warn: Color::Reset,
            bad: Color::Reset,
            welcome: Color::Reset,
            room_description: Color::Reset,
            room_info: Color::Reset,
            combat_action: Color::Reset,
            combat_result: Color::Reset,
            enemy_defeat: Color::Reset,
            info: Color::Reset,
            styled: false,
        }
    }

    /// Theme for the `color` option: detected palette or monochrome
    pub fn for_options(color: bool) -> Self {
        if color { Self::detect() } else { Self::monochrome() }
    }

    /// Auto-detect terminal background and return appropriate theme.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Style for a narration line; `None` is echoed player input
    pub fn line_style(&self, category: Option<Category>) -> Style {
        let Some(category) = category else {
            return Style::default().fg(self.text_dim);
        };
        let color = match category {
            Category::Welcome => self.welcome,
            Category::RoomDescription => self.room_description,
            Category::RoomInfo => self.room_info,
            Category::CombatAction => self.combat_action,
            Category::CombatResult => self.combat_result,
            Category::EnemyDefeat => self.enemy_defeat,
            Category::Info => self.info,
        };
        let style = Style::default().fg(color);
        match category {
            Category::Welcome | Category::EnemyDefeat if self.styled => {
                style.add_modifier(Modifier::BOLD)
            }
            _ => style,
        }
    }

    /// Gauge color for a health ratio in 0..=1
    pub fn health_color(&self, ratio: f64) -> Color {
        if ratio > 0.5 {
            self.good
        } else if ratio > 0.25 {
            self.warn
        } else {
            self.bad
        }
    }

    fn is_light_background() -> bool {
        if let Ok(val) = std::env::var("DC_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is "fg;bg" with color indices 0-15
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_text_is_white() {
        assert_eq!(Theme::dark().text, Color::White);
    }

    #[test]
    fn test_light_theme_text_is_black() {
        assert_eq!(Theme::light().text, Color::Black);
    }

    #[test]
    fn test_combat_lines_stand_out() {
        let theme = Theme::dark();
        let action = theme.line_style(Some(Category::CombatAction));
        let description = theme.line_style(Some(Category::RoomDescription));
        assert_ne!(action.fg, description.fg);
        assert!(
            theme
                .line_style(Some(Category::EnemyDefeat))
                .add_modifier
                .contains(Modifier::BOLD)
        );
    }

    #[test]
    fn test_monochrome_has_no_modifiers() {
        let theme = Theme::for_options(false);
        let style = theme.line_style(Some(Category::Welcome));
        assert_eq!(style.fg, Some(Color::Reset));
        assert!(style.add_modifier.is_empty());
    }

    #[test]
    fn test_health_color_thresholds() {
        let theme = Theme::dark();
        assert_eq!(theme.health_color(1.0), Color::Green);
        assert_eq!(theme.health_color(0.4), Color::Yellow);
        assert_eq!(theme.health_color(0.1), Color::Red);
    }
}
