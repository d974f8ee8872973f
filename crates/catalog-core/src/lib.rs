pub mod catalog;
pub mod error;
pub mod game;
pub mod seed;
pub mod time;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use game::{Game, GameFilter, GameId, GameUpdate, NewGame};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::game::{GameUpdate, NewGame};

    /// Create an available game input with the given title and editor.
    pub fn make_new_game(title: &str, editor: &str) -> NewGame {
        NewGame {
            title: title.to_string(),
            editor: editor.to_string(),
            available: true,
        }
    }

    /// An update that only touches the editor field.
    pub fn editor_update(editor: &str) -> GameUpdate {
        GameUpdate {
            editor: Some(editor.to_string()),
            ..GameUpdate::default()
        }
    }
}
