use crate::game::Game;
use crate::time::Timestamp;

const DEMO_GAMES: [(&str, &str, bool); 3] = [
    ("The Legend of Zelda: Ocarina of Time", "Nintendo", true),
    ("Super Mario 64", "Nintendo", false),
    ("Final Fantasy VII", "Square Enix", true),
];

/// Demo titles loaded at startup, numbered from 0. Two of them share an
/// editor, so they bypass the one-game-per-editor rule.
pub fn demo_games(now: Timestamp) -> Vec<Game> {
    DEMO_GAMES
        .iter()
        .zip(0..)
        .map(|(&(title, editor, available), id)| Game {
            id,
            title: title.to_string(),
            editor: editor.to_string(),
            available,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::timestamp_now;

    #[test]
    fn demo_games_are_numbered_from_zero() {
        let games = demo_games(timestamp_now());
        assert_eq!(games.len(), 3);
        for (i, game) in games.iter().enumerate() {
            assert_eq!(game.id, i as u64);
        }
        assert_eq!(games[2].editor, "Square Enix");
    }
}
