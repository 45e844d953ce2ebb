//! World map: the static room graph
//!
//! Rooms are looked up by identifier only. The graph may be asymmetric
//! (one-way exits are fine) but every exit must lead to a room that exists;
//! this is checked once when the map is built, so lookups during play can
//! only fail on a programming error.

mod file;
mod room;

use core::fmt;
use std::borrow::Borrow;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

pub use file::{ChestFile, ExitFile, RoomFile, WorldFile};
pub use room::{Chest, Exit, Room, RoomBuilder, RoomFlags};

/// Room identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RoomId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for RoomId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Exit directions
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Direction {
    /// Get the direction name as a string
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// World data errors
///
/// All of these are data or programming errors, never player mistakes.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("unknown room '{0}'")]
    UnknownRoom(RoomId),

    #[error("room '{from}' has an exit {direction} to unknown room '{to}'")]
    DanglingExit {
        from: RoomId,
        direction: Direction,
        to: RoomId,
    },

    #[error("room '{0}' is defined more than once")]
    DuplicateRoom(RoomId),

    #[error("room '{room}' has more than one exit {direction}")]
    DuplicateExit { room: RoomId, direction: Direction },

    #[error("room stored under '{key}' calls itself '{id}'")]
    MismatchedRoomId { key: RoomId, id: RoomId },

    #[error("start room '{0}' does not exist")]
    MissingStart(RoomId),

    #[error("room '{room}' lists enemy '{name}' which is not in the enemy catalog")]
    UnknownEnemy { room: RoomId, name: String },

    #[error("room '{room}' lists item '{name}' which is not in the item catalog")]
    UnknownItem { room: RoomId, name: String },

    #[error("room '{room}' has an exit in unknown direction '{name}'")]
    UnknownDirection { room: RoomId, name: String },

    #[error("invalid world file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct RawWorld {
    start: RoomId,
    rooms: HashMap<RoomId, Room>,
}

impl TryFrom<RawWorld> for WorldMap {
    type Error = WorldError;

    fn try_from(raw: RawWorld) -> Result<Self, Self::Error> {
        if let Some((key, room)) = raw.rooms.iter().find(|(key, room)| **key != room.id) {
            return Err(WorldError::MismatchedRoomId {
                key: key.clone(),
                id: room.id.clone(),
            });
        }
        let map = WorldMap {
            start: raw.start,
            rooms: raw.rooms,
        };
        map.validate()?;
        Ok(map)
    }
}

/// The room graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWorld")]
pub struct WorldMap {
    start: RoomId,
    rooms: HashMap<RoomId, Room>,
}

impl WorldMap {
    /// Build a map from rooms, checking that the graph is closed.
    pub fn from_rooms(
        start: impl Into<RoomId>,
        rooms: impl IntoIterator<Item = Room>,
    ) -> Result<Self, WorldError> {
        let mut map = HashMap::new();
        for room in rooms {
            let id = room.id.clone();
            if map.insert(id.clone(), room).is_some() {
                return Err(WorldError::DuplicateRoom(id));
            }
        }

        let world = Self {
            start: start.into(),
            rooms: map,
        };
        world.validate()?;
        Ok(world)
    }

    /// Load a map from its JSON file form.
    pub fn from_json(json: &str) -> Result<Self, WorldError> {
        let file: WorldFile = serde_json::from_str(json)?;
        file.into_world()
    }

    /// Check every exit target and the start room.
    pub fn validate(&self) -> Result<(), WorldError> {
        if !self.rooms.contains_key(&self.start) {
            return Err(WorldError::MissingStart(self.start.clone()));
        }
        for room in self.rooms.values() {
            for (i, exit) in room.exits.iter().enumerate() {
                if room.exits[..i].iter().any(|e| e.direction == exit.direction) {
                    return Err(WorldError::DuplicateExit {
                        room: room.id.clone(),
                        direction: exit.direction,
                    });
                }
                if !self.rooms.contains_key(&exit.to) {
                    return Err(WorldError::DanglingExit {
                        from: room.id.clone(),
                        direction: exit.direction,
                        to: exit.to.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Room the player starts in
    pub fn start(&self) -> &RoomId {
        &self.start
    }

    /// Look up a room by id
    pub fn room(&self, id: &str) -> Result<&Room, WorldError> {
        self.rooms
            .get(id)
            .ok_or_else(|| WorldError::UnknownRoom(RoomId::from(id)))
    }

    pub(crate) fn room_mut(&mut self, id: &str) -> Result<&mut Room, WorldError> {
        self.rooms
            .get_mut(id)
            .ok_or_else(|| WorldError::UnknownRoom(RoomId::from(id)))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rooms.contains_key(id)
    }

    /// All rooms, in no particular order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Replace the start room (used by the `start` option).
    pub fn with_start(mut self, start: impl Into<RoomId>) -> Result<Self, WorldError> {
        self.start = start.into();
        if !self.rooms.contains_key(&self.start) {
            return Err(WorldError::MissingStart(self.start));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EnemyKind;

    fn two_rooms() -> Vec<Room> {
        vec![
            Room::builder("a", "Room A.").exit(Direction::North, "b").build(),
            Room::builder("b", "Room B.")
                .exit(Direction::South, "a")
                .enemy(EnemyKind::Goblin)
                .build(),
        ]
    }

    #[test]
    fn test_from_rooms_valid() {
        let world = WorldMap::from_rooms("a", two_rooms()).unwrap();
        assert_eq!(world.len(), 2);
        assert_eq!(world.start().as_str(), "a");
        assert_eq!(world.room("b").unwrap().enemies(), &[EnemyKind::Goblin]);
    }

    #[test]
    fn test_unknown_room_lookup() {
        let world = WorldMap::from_rooms("a", two_rooms()).unwrap();
        assert!(matches!(world.room("nowhere"), Err(WorldError::UnknownRoom(_))));
    }

    #[test]
    fn test_dangling_exit_rejected() {
        let rooms = vec![Room::builder("a", "A.").exit(Direction::East, "ghost").build()];
        let err = WorldMap::from_rooms("a", rooms).unwrap_err();
        assert!(matches!(err, WorldError::DanglingExit { .. }));
    }

    #[test]
    fn test_duplicate_room_rejected() {
        let rooms = vec![Room::builder("a", "A.").build(), Room::builder("a", "A again.").build()];
        assert!(matches!(
            WorldMap::from_rooms("a", rooms),
            Err(WorldError::DuplicateRoom(_))
        ));
    }

    #[test]
    fn test_missing_start_rejected() {
        assert!(matches!(
            WorldMap::from_rooms("z", two_rooms()),
            Err(WorldError::MissingStart(_))
        ));
    }

    #[test]
    fn test_one_way_exit_allowed() {
        let rooms = vec![
            Room::builder("a", "A.").exit(Direction::Down, "b").build(),
            Room::builder("b", "B.").build(),
        ];
        assert!(WorldMap::from_rooms("a", rooms).is_ok());
    }

    #[test]
    fn test_with_start() {
        let world = WorldMap::from_rooms("a", two_rooms()).unwrap();
        let world = world.with_start("b").unwrap();
        assert_eq!(world.start().as_str(), "b");
        assert!(world.with_start("q").is_err());
    }

    #[test]
    fn test_snapshot_round_trip_validates() {
        let world = WorldMap::from_rooms("a", two_rooms()).unwrap();
        let json = serde_json::to_string(&world).unwrap();
        let back: WorldMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, world);

        let broken = json.replace("\"to\":\"b\"", "\"to\":\"nowhere\"");
        assert!(serde_json::from_str::<WorldMap>(&broken).is_err());
    }

    #[test]
    fn test_snapshot_key_must_match_room_id() {
        let json = r#"{
            "start": "a",
            "rooms": {
                "a": { "id": "zzz", "description": "Misfiled." }
            }
        }"#;
        let err = serde_json::from_str::<WorldMap>(json).unwrap_err();
        assert!(err.to_string().contains("calls itself 'zzz'"));
    }

    #[test]
    fn test_duplicate_exit_rejected() {
        let rooms = vec![
            Room::builder("a", "A.")
                .exit(Direction::North, "b")
                .exit(Direction::North, "a")
                .build(),
            Room::builder("b", "B.").build(),
        ];
        assert!(matches!(
            WorldMap::from_rooms("a", rooms),
            Err(WorldError::DuplicateExit {
                direction: Direction::North,
                ..
            })
        ));
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(Direction::North.name(), "north");
        assert_eq!("west".parse::<Direction>().unwrap(), Direction::West);
        assert!("sideways".parse::<Direction>().is_err());
    }
}
