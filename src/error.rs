use std::io;

use thiserror::Error;

use crate::auth::AuthError;
use crate::config::ConfigError;
use crate::data::LoadError;
use crate::route::RouteError;
use crate::storage::StorageError;

/// Error type for SkillSprout operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading or validating puzzle data.
    #[error("failed to load puzzles: {0}")]
    Load(#[from] LoadError),
    /// Error reading or writing the session storage file.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Error saving a login.
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// A start route that does not parse.
    #[error(transparent)]
    Route(#[from] RouteError),
    /// Error reading `skillsprout.toml`.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// IO error while driving the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
