//! Front-end errors

use std::io;

use dc_core::{EngineError, OptionsError, WorldError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("cannot load world: {0}")]
    World(#[from] WorldError),

    #[error("bad options: {0}")]
    Options(#[from] OptionsError),

    #[error("cannot encode event: {0}")]
    Json(#[from] serde_json::Error),
}
