use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use word_types::{GameMode, GameRecord, RemoteError, RemoteResult, UserProfile};

/// The remote document store: system of record for game history and
/// aggregate stats. Every operation resolves to a success/failure result;
/// nothing here raises.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Store a new game document and return its assigned id.
    async fn create_game(&self, game: &GameRecord) -> RemoteResult<String>;

    async fn list_user_games(&self, user_id: &str) -> RemoteResult<Vec<GameRecord>>;

    async fn get_user(&self, user_id: &str) -> RemoteResult<UserProfile>;

    async fn create_user(&self, profile: &UserProfile) -> RemoteResult<()>;

    async fn update_user_stats(
        &self,
        user_id: &str,
        total_games: i32,
        total_wins: i32,
    ) -> RemoteResult<()>;

    /// Whether a daily game exists for the user inside a `[start, end)`
    /// window of epoch millis.
    async fn has_daily_game_between(
        &self,
        user_id: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> RemoteResult<bool>;
}

#[derive(Default)]
struct RemoteState {
    games: Vec<GameRecord>,
    users: HashMap<String, UserProfile>,
}

/// In-memory reference implementation of the remote contract, used by tests.
/// `set_offline(true)` makes every call fail with a network error.
#[derive(Default)]
pub struct InMemoryRemoteStore {
    state: RwLock<RemoteState>,
    offline: AtomicBool,
}

impl InMemoryRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> RemoteResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(RemoteError::Network("remote store unreachable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RemoteStore for InMemoryRemoteStore {
    async fn create_game(&self, game: &GameRecord) -> RemoteResult<String> {
        self.check_online()?;
        let remote_id = Uuid::new_v4().simple().to_string();

        let mut stored = game.clone();
        stored.local_id = 0;
        stored.remote_id = remote_id.clone();

        let mut state = self.state.write().await;
        state.games.push(stored);
        Ok(remote_id)
    }

    async fn list_user_games(&self, user_id: &str) -> RemoteResult<Vec<GameRecord>> {
        self.check_online()?;
        let state = self.state.read().await;
        Ok(state
            .games
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_user(&self, user_id: &str) -> RemoteResult<UserProfile> {
        self.check_online()?;
        let state = self.state.read().await;
        state
            .users
            .get(user_id)
            .cloned()
            .ok_or_else(|| RemoteError::NotFound(user_id.to_string()))
    }

    async fn create_user(&self, profile: &UserProfile) -> RemoteResult<()> {
        self.check_online()?;
        let mut state = self.state.write().await;
        state.users.insert(profile.uid.clone(), profile.clone());
        Ok(())
    }

    async fn update_user_stats(
        &self,
        user_id: &str,
        total_games: i32,
        total_wins: i32,
    ) -> RemoteResult<()> {
        self.check_online()?;
        let mut state = self.state.write().await;
        let profile = state
            .users
            .get_mut(user_id)
            .ok_or_else(|| RemoteError::NotFound(user_id.to_string()))?;
        profile.total_games = total_games;
        profile.total_wins = total_wins;
        Ok(())
    }

    async fn has_daily_game_between(
        &self,
        user_id: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> RemoteResult<bool> {
        self.check_online()?;
        let state = self.state.read().await;
        Ok(state.games.iter().any(|g| {
            g.user_id == user_id
                && g.mode == GameMode::Daily
                && g.played_at >= start_ms
                && g.played_at < end_ms
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(user_id: &str, mode: GameMode, played_at: i64) -> GameRecord {
        GameRecord {
            local_id: 0,
            remote_id: String::new(),
            user_id: user_id.to_string(),
            mode,
            word: "CRANE".to_string(),
            guesses_used: 4,
            played_at,
            won: true,
            guesses: vec!["CRANE".to_string()],
        }
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let store = InMemoryRemoteStore::new();
        let a = store
            .create_game(&game("u1", GameMode::Unlimited, 1))
            .await
            .unwrap();
        let b = store
            .create_game(&game("u1", GameMode::Unlimited, 2))
            .await
            .unwrap();
        assert_ne!(a, b);

        let listed = store.list_user_games("u1").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|g| !g.remote_id.is_empty()));
    }

    #[tokio::test]
    async fn test_offline_mode_fails_every_call() {
        let store = InMemoryRemoteStore::new();
        store.set_offline(true);

        let err = store
            .create_game(&game("u1", GameMode::Daily, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, RemoteError::Network(_)));
        assert!(store.list_user_games("u1").await.is_err());

        store.set_offline(false);
        assert!(store.list_user_games("u1").await.is_ok());
    }

    #[tokio::test]
    async fn test_user_stats_roundtrip() {
        let store = InMemoryRemoteStore::new();
        let profile = UserProfile {
            uid: "u1".to_string(),
            email: "u1@example.com".to_string(),
            display_name: "U One".to_string(),
            created_at: 0,
            total_games: 0,
            total_wins: 0,
        };
        store.create_user(&profile).await.unwrap();
        store.update_user_stats("u1", 3, 2).await.unwrap();

        let read = store.get_user("u1").await.unwrap();
        assert_eq!(read.total_games, 3);
        assert_eq!(read.total_wins, 2);

        let missing = store.get_user("nobody").await.unwrap_err();
        assert!(matches!(missing, RemoteError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_daily_window_check() {
        let store = InMemoryRemoteStore::new();
        store
            .create_game(&game("u1", GameMode::Daily, 5000))
            .await
            .unwrap();
        store
            .create_game(&game("u1", GameMode::Unlimited, 5000))
            .await
            .unwrap();

        assert!(store.has_daily_game_between("u1", 5000, 6000).await.unwrap());
        assert!(!store.has_daily_game_between("u1", 0, 5000).await.unwrap());
        assert!(!store.has_daily_game_between("u2", 5000, 6000).await.unwrap());
    }
}
