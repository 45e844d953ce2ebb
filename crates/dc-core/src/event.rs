//! Engine-to-presentation event stream

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

use crate::catalog::{EnemyKind, ItemKind};
use crate::world::RoomId;

/// Narration category, used by presentation for styling
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    Welcome,
    RoomDescription,
    RoomInfo,
    CombatAction,
    CombatResult,
    EnemyDefeat,
    Info,
}

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameOverCause {
    Death,
    Victory,
}

/// One unit of engine output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum Event {
    /// A line of text for the player
    Narration { category: Category, text: String },
    RoomEntered { room: RoomId },
    EnemySpawned { enemy: EnemyKind, max_hp: i32 },
    EnemyRemoved { enemy: EnemyKind },
    EnemyDamaged { enemy: EnemyKind, hp: i32 },
    PlayerDamaged { hp: i32 },
    PlayerHealed { hp: i32 },
    ItemTaken { item: ItemKind },
    /// An item left the inventory by being used up
    ItemUsed { item: ItemKind },
    ChestOpened { contents: Vec<ItemKind> },
    GameOver { cause: GameOverCause },
}

impl Event {
    /// Narration text, if this is a narration event
    pub fn text(&self) -> Option<&str> {
        match self {
            Event::Narration { text, .. } => Some(text),
            _ => None,
        }
    }
}
