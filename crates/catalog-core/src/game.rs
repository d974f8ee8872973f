use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::CatalogError;
use crate::time::Timestamp;

/// Identifier assigned to a game when it enters the catalog.
pub type GameId = u64;

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum editor length, in characters.
pub const EDITOR_MAX_CHARS: usize = 100;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "title": "smash bros melee",
    "editor": "Nintendo",
    "available": true,
    "created_at": "2023-10-01T12:00:00Z",
    "updated_at": "2023-10-01T12:00:00Z"
}))]
pub struct Game {
    #[schema(value_type = u64)]
    pub id: GameId,
    pub title: String,
    pub editor: String,
    pub available: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// Request body for creating a game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewGame {
    #[schema(min_length = 1, max_length = 200)]
    pub title: String,
    #[schema(min_length = 1, max_length = 100)]
    pub editor: String,
    #[serde(default = "default_true")]
    #[schema(default = true)]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

impl NewGame {
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_title(&self.title)?;
        validate_editor(&self.editor)
    }
}

/// Partial update. `None` leaves the field untouched; a JSON `null` is
/// treated the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct GameUpdate {
    #[schema(min_length = 1, max_length = 200)]
    pub title: Option<String>,
    #[schema(min_length = 1, max_length = 100)]
    pub editor: Option<String>,
    pub available: Option<bool>,
}

impl GameUpdate {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if let Some(ref title) = self.title {
            validate_title(title)?;
        }
        if let Some(ref editor) = self.editor {
            validate_editor(editor)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.editor.is_none() && self.available.is_none()
    }
}

/// Optional filters for listing games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct GameFilter {
    pub available: Option<bool>,
    /// Case-insensitive substring of the editor. Empty means no filter.
    pub editor: Option<String>,
}

impl GameFilter {
    pub fn matches(&self, game: &Game) -> bool {
        if let Some(available) = self.available
            && game.available != available
        {
            return false;
        }
        if let Some(ref needle) = self.editor
            && !needle.is_empty()
            && !game
                .editor
                .to_lowercase()
                .contains(&needle.to_lowercase())
        {
            return false;
        }
        true
    }
}

fn validate_title(title: &str) -> Result<(), CatalogError> {
    check_length("title", title, TITLE_MAX_CHARS)
}

fn validate_editor(editor: &str) -> Result<(), CatalogError> {
    check_length("editor", editor, EDITOR_MAX_CHARS)
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), CatalogError> {
    let len = value.chars().count();
    if len == 0 {
        return Err(CatalogError::validation(field, "must not be empty"));
    }
    if len > max {
        return Err(CatalogError::validation(
            field,
            format!("exceeds {max} chars"),
        ));
    }
    Ok(())
}
