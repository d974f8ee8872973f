use crate::error::CatalogError;
use crate::game::{Game, GameFilter, GameId, GameUpdate, NewGame};
use crate::seed::demo_games;
use crate::time::timestamp_now;

/// In-memory game catalog. Records are kept in insertion order and looked up
/// by linear scan. Ids are handed out sequentially and never reused.
///
/// The catalog itself is not synchronized; callers that share it across
/// tasks hold it behind a lock and keep the lock for the whole operation.
#[derive(Debug, Default)]
pub struct Catalog {
    games: Vec<Game>,
    next_id: GameId,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with the demo titles.
    pub fn with_seed() -> Self {
        Self::from_games(demo_games(timestamp_now()))
    }

    /// Build a catalog from existing records. They are taken as-is: the
    /// editor rule is not applied, and the next id follows the highest one.
    pub fn from_games(games: Vec<Game>) -> Self {
        let next_id = games.iter().map(|g| g.id + 1).max().unwrap_or(0);
        Self { games, next_id }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// All games matching `filter`, in insertion order.
    pub fn list(&self, filter: &GameFilter) -> Vec<&Game> {
        self.games.iter().filter(|g| filter.matches(g)).collect()
    }

    pub fn get(&self, id: GameId) -> Result<&Game, CatalogError> {
        self.games
            .iter()
            .find(|g| g.id == id)
            .ok_or(CatalogError::NotFound { id })
    }

    /// First game whose editor is exactly `editor`.
    pub fn find_by_editor(&self, editor: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.editor == editor)
    }

    /// Add a game. Only one game per editor is allowed.
    pub fn create(&mut self, new_game: NewGame) -> Result<Game, CatalogError> {
        new_game.validate()?;

        if let Some(existing) = self.find_by_editor(&new_game.editor) {
            return Err(CatalogError::Conflict {
                editor: new_game.editor,
                existing_id: existing.id,
            });
        }

        let now = timestamp_now();
        let game = Game {
            id: self.next_id,
            title: new_game.title,
            editor: new_game.editor,
            available: new_game.available,
            created_at: now,
            updated_at: now,
        };
        self.next_id += 1;
        self.games.push(game.clone());

        tracing::info!(id = game.id, editor = %game.editor, "Game added to catalog");
        Ok(game)
    }

    /// Merge the supplied fields into an existing game and return the result.
    pub fn update(&mut self, id: GameId, update: GameUpdate) -> Result<Game, CatalogError> {
        update.validate()?;

        let idx = self.position(id)?;

        if update.is_empty() {
            tracing::debug!(id, "Update carries no fields, only refreshing updated_at");
        }

        // First match wins, so a game sharing its editor with an earlier
        // seeded record cannot re-assert that editor.
        if let Some(ref editor) = update.editor
            && let Some(existing) = self.find_by_editor(editor)
            && existing.id != id
        {
            return Err(CatalogError::Conflict {
                editor: editor.clone(),
                existing_id: existing.id,
            });
        }

        let game = &mut self.games[idx];
        if let Some(title) = update.title {
            game.title = title;
        }
        if let Some(editor) = update.editor {
            game.editor = editor;
        }
        if let Some(available) = update.available {
            game.available = available;
        }
        game.updated_at = timestamp_now();

        tracing::info!(id, "Game updated");
        Ok(game.clone())
    }

    /// Remove a game, returning the record that was dropped.
    pub fn delete(&mut self, id: GameId) -> Result<Game, CatalogError> {
        let idx = self.position(id)?;
        let game = self.games.remove(idx);
        tracing::info!(id, "Game removed from catalog");
        Ok(game)
    }

    fn position(&self, id: GameId) -> Result<usize, CatalogError> {
        self.games
            .iter()
            .position(|g| g.id == id)
            .ok_or(CatalogError::NotFound { id })
    }
}
