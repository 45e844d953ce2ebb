//! Rooms: the nodes of the world graph

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::catalog::{EnemyKind, ItemKind};
use crate::world::{Direction, RoomId};

bitflags! {
    /// Special room markers
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct RoomFlags: u8 {
        /// Entering deals trap damage
        const TRAP = 0x01;
        /// Reaching this room with the key wins the game
        const EXIT = 0x02;
    }
}

/// A one-way connection out of a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    pub direction: Direction,
    pub to: RoomId,
}

/// A chest holding items until it is opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chest {
    pub contents: Vec<ItemKind>,
    #[serde(default)]
    pub open: bool,
}

impl Chest {
    pub fn new(contents: impl IntoIterator<Item = ItemKind>) -> Self {
        Self {
            contents: contents.into_iter().collect(),
            open: false,
        }
    }
}

/// A room in the world graph
///
/// Exits are fixed once the room is built. Items, enemies and the chest
/// state change during play, but only through engine operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub(crate) id: RoomId,
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) exits: Vec<Exit>,
    #[serde(default)]
    pub(crate) items: Vec<ItemKind>,
    #[serde(default)]
    pub(crate) enemies: Vec<EnemyKind>,
    #[serde(default)]
    pub(crate) chest: Option<Chest>,
    #[serde(default)]
    pub(crate) flags: RoomFlags,
}

impl Room {
    /// Start building a room
    pub fn builder(id: impl Into<RoomId>, description: impl Into<String>) -> RoomBuilder {
        RoomBuilder {
            room: Room {
                id: id.into(),
                description: description.into(),
                exits: Vec::new(),
                items: Vec::new(),
                enemies: Vec::new(),
                chest: None,
                flags: RoomFlags::empty(),
            },
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Exits in declaration order
    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    /// Destination of the exit in `direction`, if any
    pub fn exit(&self, direction: Direction) -> Option<&RoomId> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| &e.to)
    }

    pub fn items(&self) -> &[ItemKind] {
        &self.items
    }

    pub fn enemies(&self) -> &[EnemyKind] {
        &self.enemies
    }

    pub fn chest(&self) -> Option<&Chest> {
        self.chest.as_ref()
    }

    pub fn flags(&self) -> RoomFlags {
        self.flags
    }

    pub fn is_trap(&self) -> bool {
        self.flags.contains(RoomFlags::TRAP)
    }

    pub fn is_exit(&self) -> bool {
        self.flags.contains(RoomFlags::EXIT)
    }

    /// Whether a closed chest is present
    pub fn has_closed_chest(&self) -> bool {
        self.chest.as_ref().is_some_and(|c| !c.open)
    }

    /// Remove the first occurrence of `item`. Returns true if it was there.
    pub(crate) fn take_item(&mut self, item: ItemKind) -> bool {
        match self.items.iter().position(|&i| i == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the first occurrence of `enemy`. Returns true if it was there.
    pub(crate) fn remove_enemy(&mut self, enemy: EnemyKind) -> bool {
        match self.enemies.iter().position(|&e| e == enemy) {
            Some(index) => {
                self.enemies.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Builder for [`Room`]
#[derive(Debug, Clone)]
pub struct RoomBuilder {
    room: Room,
}

impl RoomBuilder {
    pub fn exit(mut self, direction: Direction, to: impl Into<RoomId>) -> Self {
        self.room.exits.push(Exit {
            direction,
            to: to.into(),
        });
        self
    }

    pub fn item(mut self, item: ItemKind) -> Self {
        self.room.items.push(item);
        self
    }

    pub fn enemy(mut self, enemy: EnemyKind) -> Self {
        self.room.enemies.push(enemy);
        self
    }

    pub fn chest(mut self, contents: impl IntoIterator<Item = ItemKind>) -> Self {
        self.room.chest = Some(Chest::new(contents));
        self
    }

    pub fn trap(mut self) -> Self {
        self.room.flags.insert(RoomFlags::TRAP);
        self
    }

    pub fn exit_room(mut self) -> Self {
        self.room.flags.insert(RoomFlags::EXIT);
        self
    }

    pub fn build(self) -> Room {
        self.room
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Room {
        Room::builder("vault", "A vault.")
            .exit(Direction::West, "hall")
            .exit(Direction::North, "attic")
            .item(ItemKind::Torch)
            .item(ItemKind::Torch)
            .enemy(EnemyKind::Goblin)
            .chest([ItemKind::Diamond])
            .trap()
            .build()
    }

    #[test]
    fn test_builder_keeps_exit_order() {
        let room = sample();
        let dirs: Vec<_> = room.exits().iter().map(|e| e.direction).collect();
        assert_eq!(dirs, vec![Direction::West, Direction::North]);
        assert_eq!(room.exit(Direction::North).map(RoomId::as_str), Some("attic"));
        assert!(room.exit(Direction::South).is_none());
    }

    #[test]
    fn test_flags() {
        let room = sample();
        assert!(room.is_trap());
        assert!(!room.is_exit());
        assert!(room.has_closed_chest());
    }

    #[test]
    fn test_take_item_removes_one_copy() {
        let mut room = sample();
        assert!(room.take_item(ItemKind::Torch));
        assert_eq!(room.items(), &[ItemKind::Torch]);
        assert!(!room.take_item(ItemKind::Key));
    }

    #[test]
    fn test_remove_enemy() {
        let mut room = sample();
        assert!(room.remove_enemy(EnemyKind::Goblin));
        assert!(room.enemies().is_empty());
        assert!(!room.remove_enemy(EnemyKind::Goblin));
    }
}
