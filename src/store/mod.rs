use std::sync::Arc;
use crate::models::Player;

mod roster;

/// Read-only, ordered player list shared by every request.
///
/// Cloning only bumps a reference count; the records themselves are never
/// mutated after construction, so handlers read them without locking.
#[derive(Debug, Clone)]
pub struct PlayerStore {
    players: Arc<[Player]>,
}

impl PlayerStore {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerStore {
            players: players.into(),
        }
    }

    /// The roster served in the deployed configuration.
    pub fn seeded() -> Self {
        Self::new(roster::default_roster())
    }

    pub fn all(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
