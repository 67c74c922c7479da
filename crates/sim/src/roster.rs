//! The controller's view of every player in the match.
//!
//! Stats dumps from the game server arrive as full player lists. `merge`
//! folds them into the roster: unknown ids are added, known ids have their
//! controller-owned values copied over, then the roster is re-sorted for the
//! leaderboard.

use crate::player::{Player, PlayerId};

/// Players known to this controller, kept in leaderboard order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a batch of player snapshots into the roster.
    ///
    /// After merging, players are stably sorted by descending score; players
    /// with equal scores keep their relative order.
    pub fn merge<I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = Player>,
    {
        for update in updates {
            match self.players.iter().position(|p| p.key() == update.key()) {
                Some(index) => self.players[index].copy_values_from(&update),
                None => {
                    tracing::debug!(player_id = update.id(), name = %update.name, "roster: new player");
                    self.players.push(update);
                }
            }
        }
        self.players.sort_by(Player::cmp_by_score);
    }

    /// Look up a player by id.
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        let found = self.players.iter().find(|p| p.key() == id);
        if found.is_none() {
            tracing::warn!(player_id = id, "roster: unknown player id");
        }
        found
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        let found = self.players.iter_mut().find(|p| p.key() == id);
        if found.is_none() {
            tracing::warn!(player_id = id, "roster: unknown player id");
        }
        found
    }

    /// Players in leaderboard order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Forget every player (new game).
    pub fn clear(&mut self) {
        self.players.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: PlayerId, score: i32, name: &str) -> Player {
        let mut p = Player::new(id);
        p.score = score;
        p.name = name.to_string();
        p
    }

    #[test]
    fn test_merge_inserts_unknown_players() {
        let mut roster = Roster::new();
        assert!(roster.is_empty());

        roster.merge([player(1, 0, "A"), player(2, 0, "B")]);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(1).unwrap().name, "A");
        assert_eq!(roster.get(2).unwrap().name, "B");
    }

    #[test]
    fn test_merge_copies_into_existing() {
        let mut roster = Roster::new();
        let mut original = player(1, 0, "Alpha");
        original.bullets_in_magazine = 7;
        roster.merge([original]);

        let mut update = player(1, 5, "");
        update.team_id = 2;
        update.health = 60;
        roster.merge([update]);

        assert_eq!(roster.len(), 1);
        let merged = roster.get(1).unwrap();
        assert_eq!(merged.score, 5);
        assert_eq!(merged.team_id, 2);
        assert_eq!(merged.health, 60);
        assert_eq!(merged.name, "Alpha", "empty name must not overwrite");
        assert_eq!(merged.bullets_in_magazine, 7);
    }

    #[test]
    fn test_merge_lower_cap_clamps_reserve() {
        let mut roster = Roster::new();
        let mut original = player(1, 0, "A");
        original.bullets_max = 30;
        original.bullets_total = 30;
        roster.merge([original]);

        let mut update = player(1, 0, "");
        update.bullets_max = 10;
        roster.merge([update]);

        let merged = roster.get(1).unwrap();
        assert_eq!(merged.bullets_max, 10);
        assert!(merged.bullets_total <= merged.bullets_max);
    }

    #[test]
    fn test_merge_sorts_by_descending_score() {
        let mut roster = Roster::new();
        roster.merge([player(1, 2, "A"), player(2, 9, "B"), player(3, 5, "C")]);

        let ids: Vec<PlayerId> = roster.iter().map(Player::id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        roster.merge([player(1, 20, "")]);
        let ids: Vec<PlayerId> = roster.iter().map(Player::id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_merge_keeps_tie_order() {
        let mut roster = Roster::new();
        roster.merge([player(4, 1, "D"), player(3, 1, "C"), player(9, 1, "I")]);

        let ids: Vec<PlayerId> = roster.iter().map(Player::id).collect();
        assert_eq!(ids, vec![4, 3, 9]);
    }

    #[test]
    fn test_get_missing_and_get_mut() {
        let mut roster = Roster::new();
        roster.merge([player(1, 0, "A")]);
        assert!(roster.get(42).is_none());
        assert!(roster.get_mut(42).is_none());

        roster.get_mut(1).unwrap().decrease_health(30);
        assert_eq!(roster.get(1).unwrap().health, 70);
    }

    #[test]
    fn test_clear() {
        let mut roster = Roster::new();
        roster.merge([player(1, 0, "A")]);
        roster.clear();
        assert!(roster.is_empty());
    }
}
