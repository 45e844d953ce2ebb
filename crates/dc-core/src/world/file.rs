//! JSON file form of a world
//!
//! Names are kept as plain strings here so that a bad enemy, item or
//! direction name is reported with the room it appears in, instead of as a
//! bare serde error.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{EnemyKind, ItemKind};
use crate::world::{Direction, Room, RoomId, WorldError, WorldMap};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldFile {
    pub start: String,
    pub rooms: Vec<RoomFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomFile {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub exits: Vec<ExitFile>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub enemies: Vec<String>,
    #[serde(default)]
    pub chest: Option<ChestFile>,
    #[serde(default)]
    pub trap: bool,
    #[serde(default)]
    pub exit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitFile {
    pub direction: String,
    pub to: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChestFile {
    pub contents: Vec<String>,
}

impl WorldFile {
    /// Resolve names against the catalogs and build a validated map.
    pub fn into_world(self) -> Result<WorldMap, WorldError> {
        let rooms = self
            .rooms
            .into_iter()
            .map(RoomFile::into_room)
            .collect::<Result<Vec<_>, _>>()?;
        WorldMap::from_rooms(self.start, rooms)
    }
}

impl RoomFile {
    fn into_room(self) -> Result<Room, WorldError> {
        let id = RoomId::new(self.id);
        let mut builder = Room::builder(id.clone(), self.description);

        for exit in self.exits {
            let direction =
                Direction::from_str(&exit.direction).map_err(|_| WorldError::UnknownDirection {
                    room: id.clone(),
                    name: exit.direction.clone(),
                })?;
            builder = builder.exit(direction, exit.to);
        }
        for name in &self.items {
            builder = builder.item(parse_item(&id, name)?);
        }
        for name in &self.enemies {
            let enemy = EnemyKind::from_str(name).map_err(|_| WorldError::UnknownEnemy {
                room: id.clone(),
                name: name.clone(),
            })?;
            builder = builder.enemy(enemy);
        }
        if let Some(chest) = &self.chest {
            let contents = chest
                .contents
                .iter()
                .map(|name| parse_item(&id, name))
                .collect::<Result<Vec<_>, _>>()?;
            builder = builder.chest(contents);
        }
        if self.trap {
            builder = builder.trap();
        }
        if self.exit {
            builder = builder.exit_room();
        }
        Ok(builder.build())
    }
}

fn parse_item(room: &RoomId, name: &str) -> Result<ItemKind, WorldError> {
    ItemKind::from_str(name).map_err(|_| WorldError::UnknownItem {
        room: room.clone(),
        name: name.to_string(),
    })
}
