//! dc-data: Static game data for the dungeon crawler
//!
//! Contains the shipped dungeon layout.

pub mod rooms;

pub use rooms::{dungeon, room_ids};
