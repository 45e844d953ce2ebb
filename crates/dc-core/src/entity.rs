//! Player and enemy records
//!
//! These are plain data. Every transition lives in the action modules so
//! state changes stay in one place.

use serde::{Deserialize, Serialize};

use crate::PLAYER_MAX_HP;
use crate::catalog::{EnemyKind, ItemKind};
use crate::world::RoomId;

/// The player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub current_room: RoomId,
    /// One step of history for `go back`
    pub previous_room: Option<RoomId>,
    /// 0..=100 while alive; the game ends at or below 0
    pub health: i32,
    /// Carried items in pickup order; duplicates allowed
    pub inventory: Vec<ItemKind>,
    /// Cached "inventory holds the key"
    pub has_key: bool,
}

impl Player {
    /// A fresh player standing in `room`
    pub fn new(room: RoomId) -> Self {
        Self {
            current_room: room,
            previous_room: None,
            health: PLAYER_MAX_HP,
            inventory: Vec::new(),
            has_key: false,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn carries(&self, item: ItemKind) -> bool {
        self.inventory.contains(&item)
    }
}

/// An enemy instance spawned from the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub hp: i32,
    pub max_hp: i32,
}

impl Enemy {
    pub fn new(kind: EnemyKind) -> Self {
        Self {
            kind,
            hp: kind.max_hp(),
            max_hp: kind.max_hp(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}
