use thiserror::Error;

use crate::game::GameId;

/// Failures reported by catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("game with id {id} does not exist")]
    NotFound { id: GameId },

    #[error("a game from editor {editor} already exists (id: {existing_id})")]
    Conflict { editor: String, existing_id: GameId },

    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
}

impl CatalogError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}
