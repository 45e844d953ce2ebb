//! dc-tui: Terminal front-end for the dungeon crawler
//!
//! Consumes the engine's event stream. The full-screen interface lives in
//! [`app`]; [`plain`] is the line-mode presenter for pipes and scripts.

pub mod app;
pub mod error;
pub mod input;
pub mod plain;
pub mod terminal;
pub mod theme;
pub mod view;
pub mod widgets;

pub use app::{App, UiMode};
pub use error::AppError;
pub use plain::{OutputFormat, PlainPresenter};
pub use theme::Theme;
pub use view::{EnemyGauge, LogLine, ViewState};
