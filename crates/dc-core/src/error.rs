//! Engine errors
//!
//! Player mistakes are narrated, not returned. An `EngineError` means the
//! engine found its own data inconsistent.

use thiserror::Error;

use crate::world::WorldError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("world data error: {0}")]
    World(#[from] WorldError),
}
