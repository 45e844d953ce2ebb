//! dc-core: Game-state engine for the dungeon crawler
//!
//! This crate contains all game rules with no I/O dependencies: the room
//! graph, the player and enemy records, the command interpreter and the
//! turn-based engine. Every state change is reported as an [`Event`] so a
//! presentation layer can render it without touching engine state.

pub mod action;
pub mod catalog;
pub mod entity;
pub mod event;
pub mod options;
pub mod world;

mod consts;
mod error;
mod gameloop;
mod rng;

pub use action::{Action, ActionResult, parse};
pub use catalog::{EnemyKind, ItemKind};
pub use consts::*;
pub use entity::{Enemy, Player};
pub use error::EngineError;
pub use event::{Category, Event, GameOverCause};
pub use gameloop::{GameLoop, GameLoopResult, GameState, GameStatus, TurnOutcome};
pub use options::{GameOptions, OptionsError};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use world::{Direction, RoomId, WorldError, WorldMap};
