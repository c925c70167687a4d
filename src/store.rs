//! In-memory game sessions keyed by an opaque session id, with inactivity cleanup.

use crate::models::{GameSession, GameView};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockWriteGuard};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Opaque key carried in the session cookie.
pub type SessionId = Uuid;

/// Per-session entry: game data + last activity time (for auto-cleanup).
struct SessionEntry {
    game: GameSession,
    last_activity: Instant,
}

/// All live game sessions. Each call is one atomic read-modify-write.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SessionEntry>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Each transition is a single push + status write, so a poisoned map is still consistent.
    fn write(&self) -> RwLockWriteGuard<'_, HashMap<SessionId, SessionEntry>> {
        self.sessions.write().unwrap_or_else(|e| {
            log::warn!("Session store lock was poisoned; recovering");
            PoisonError::into_inner(e)
        })
    }

    /// Start (or replace) the game for `id`.
    pub fn start(&self, id: SessionId, game: GameSession) -> GameView {
        let view = game.view();
        self.write().insert(
            id,
            SessionEntry {
                game,
                last_activity: Instant::now(),
            },
        );
        view
    }

    /// Current view of the game for `id`. Touching it refreshes last activity.
    pub fn view(&self, id: &SessionId) -> Option<GameView> {
        self.with_session_mut(id, |game| game.view())
    }

    /// Run `f` on the game for `id`; `None` if there is no such session.
    pub fn with_session_mut<T>(&self, id: &SessionId, f: impl FnOnce(&mut GameSession) -> T) -> Option<T> {
        let mut g = self.write();
        let entry = g.get_mut(id)?;
        entry.last_activity = Instant::now();
        Some(f(&mut entry.game))
    }

    /// Drop sessions idle for at least `timeout`. Returns how many were removed.
    pub fn purge_inactive(&self, timeout: Duration) -> usize {
        let mut g = self.write();
        let before = g.len();
        g.retain(|_, entry| entry.last_activity.elapsed() < timeout);
        before - g.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|g| g.len()).unwrap_or_else(|e| e.into_inner().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::PlayerDataset;
    use crate::models::{GameMode, GameStatus, PlayerRecord};

    fn dataset() -> PlayerDataset {
        PlayerDataset::from_records(vec![
            PlayerRecord::new(1, "Rodri", "Spain", "CDM", 28, 91, "Manchester City", "Premier League"),
            PlayerRecord::new(2, "Pedri", "Spain", "CM", 21, 86, "FC Barcelona", "La Liga"),
        ])
        .unwrap()
    }

    #[test]
    fn test_start_and_mutate_session() {
        let ds = dataset();
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        let target = ds.lookup("Rodri").unwrap().clone();
        store.start(id, GameSession::new(target, GameMode::Random));

        let won = store
            .with_session_mut(&id, |game| {
                game.submit_guess(&ds, "pedri").unwrap();
                game.submit_guess(&ds, "rodri").map(|e| e.feedback.is_correct)
            })
            .unwrap();
        assert_eq!(won, Ok(true));

        let view = store.view(&id).unwrap();
        assert_eq!(view.status, GameStatus::Won);
        assert_eq!(view.guess_number, 2);
        assert_eq!(view.target.unwrap().long_name, "Rodri");
    }

    #[test]
    fn test_unknown_session() {
        let store = SessionStore::new();
        assert!(store.view(&Uuid::new_v4()).is_none());
        assert!(store.with_session_mut(&Uuid::new_v4(), |_| ()).is_none());
    }

    #[test]
    fn test_start_replaces_existing_game() {
        let ds = dataset();
        let store = SessionStore::new();
        let id = Uuid::new_v4();
        let rodri = ds.lookup("Rodri").unwrap().clone();
        let pedri = ds.lookup("Pedri").unwrap().clone();
        store.start(id, GameSession::new(rodri, GameMode::Random));
        store.with_session_mut(&id, |g| g.submit_guess(&ds, "Pedri").map(|_| ())).unwrap().unwrap();
        store.start(id, GameSession::new(pedri, GameMode::Random));
        assert_eq!(store.len(), 1);
        assert_eq!(store.view(&id).unwrap().guess_number, 0);
    }

    #[test]
    fn test_purge_inactive() {
        let ds = dataset();
        let store = SessionStore::new();
        let target = ds.lookup("Pedri").unwrap().clone();
        store.start(Uuid::new_v4(), GameSession::new(target.clone(), GameMode::Random));
        store.start(Uuid::new_v4(), GameSession::new(target, GameMode::Random));
        assert_eq!(store.purge_inactive(Duration::from_secs(3600)), 0);
        assert_eq!(store.len(), 2);
        assert_eq!(store.purge_inactive(Duration::ZERO), 2);
        assert!(store.is_empty());
    }
}
