use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Duration, Local, NaiveDateTime, NaiveTime, TimeZone, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use word_persistence::repositories::GameRepository;
use word_types::{GameRecord, RemoteResult, UserStats};

use crate::remote::RemoteStore;

/// Orchestrates the dual-store write path and local/remote reconciliation.
///
/// The remote store is the system of record; the local store is the cache
/// that keeps the game usable offline. No play is ever lost: a failed remote
/// write still lands locally with an empty remote id.
pub struct SyncCoordinator {
    games: GameRepository,
    remote: Arc<dyn RemoteStore>,
    reconcile_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SyncCoordinator {
    pub fn new(games: GameRepository, remote: Arc<dyn RemoteStore>) -> Self {
        Self {
            games,
            remote,
            reconcile_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn games(&self) -> &GameRepository {
        &self.games
    }

    /// Save a finished game to both stores. Remote first: on success the
    /// record lands locally with the remote id attached and the user's remote
    /// stats are bumped; on failure the record lands locally with an empty
    /// remote id and the failure goes back to the caller.
    pub async fn save_game(&self, game: GameRecord) -> RemoteResult<String> {
        debug!("saving game {} for user {}", game.word, game.user_id);

        match self.remote.create_game(&game).await {
            Ok(remote_id) => {
                let mut synced = game;
                synced.remote_id = remote_id.clone();
                self.persist_local(&synced).await;
                self.bump_remote_stats(&synced.user_id, synced.won).await;
                info!("game saved with remote id {}", remote_id);
                Ok(remote_id)
            }
            Err(err) => {
                warn!("remote save failed ({}), saving locally only", err);
                self.persist_local(&game).await;
                Err(err)
            }
        }
    }

    // A local insert failure only costs the offline view; it is logged and
    // swallowed, like an insert ignored for being a duplicate.
    async fn persist_local(&self, record: &GameRecord) {
        if let Err(err) = self.games.insert(record).await {
            warn!("local insert for user {} failed: {}", record.user_id, err);
        }
    }

    async fn bump_remote_stats(&self, user_id: &str, won: bool) {
        match self.remote.get_user(user_id).await {
            Ok(profile) => {
                let total_games = profile.total_games + 1;
                let total_wins = profile.total_wins + if won { 1 } else { 0 };
                debug!(
                    "updating remote stats for {}: games={}, wins={}",
                    user_id, total_games, total_wins
                );
                if let Err(err) = self
                    .remote
                    .update_user_stats(user_id, total_games, total_wins)
                    .await
                {
                    warn!("remote stats update for user {} failed: {}", user_id, err);
                }
            }
            Err(err) => warn!("could not read remote profile for {}: {}", user_id, err),
        }
    }

    /// Pull the user's remote game list and insert whatever is missing
    /// locally, keyed by (user id, remote id). Remote records are immutable,
    /// so presence means done. Pulls for the same user are serialized so
    /// concurrent triggers cannot race the existence check. Returns the
    /// remote list or the remote failure; local reads keep working either
    /// way.
    pub async fn sync_from_remote(&self, user_id: &str) -> RemoteResult<Vec<GameRecord>> {
        let lock = self.user_lock(user_id).await;
        let _guard = lock.lock().await;

        let remote_games = match self.remote.list_user_games(user_id).await {
            Ok(games) => games,
            Err(err) => {
                warn!("sync for user {} failed: {}", user_id, err);
                return Err(err);
            }
        };
        debug!(
            "found {} games in remote store for {}",
            remote_games.len(),
            user_id
        );

        for game in &remote_games {
            if game.remote_id.is_empty() {
                // cannot be reconciled without an identity
                warn!("remote store returned a game without an id for {}", user_id);
                continue;
            }
            match self.games.find_by_remote_id(user_id, &game.remote_id).await {
                Ok(Some(_)) => {}
                Ok(None) => self.persist_local(game).await,
                Err(err) => warn!(
                    "local lookup of remote game {} failed: {}",
                    game.remote_id, err
                ),
            }
        }

        Ok(remote_games)
    }

    async fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.reconcile_locks.lock().await;
        locks
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Reconcile with the remote store, then return the local history. A
    /// remote failure degrades to the stale local view, never an empty one.
    pub async fn history(&self, user_id: &str) -> Result<Vec<GameRecord>> {
        if let Err(err) = self.sync_from_remote(user_id).await {
            debug!("serving local history only: {}", err);
        }
        self.games.all_for_user(user_id).await
    }

    /// Whether the user already played today's daily challenge. The local
    /// check is authoritative and works offline; the remote check only
    /// catches a daily game created on another device, and its failure never
    /// flips a local verdict.
    pub async fn has_played_daily_today(&self, user_id: &str) -> bool {
        let (start_ms, end_ms) = local_day_bounds(Local::now());
        self.has_played_daily_between(user_id, start_ms, end_ms)
            .await
    }

    pub async fn has_played_daily_between(
        &self,
        user_id: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> bool {
        match self.games.daily_game_between(user_id, start_ms, end_ms).await {
            Ok(Some(_)) => return true,
            Ok(None) => {}
            Err(err) => warn!("local daily lookup for {} failed: {}", user_id, err),
        }

        self.remote
            .has_daily_game_between(user_id, start_ms, end_ms)
            .await
            .unwrap_or(false)
    }

    /// Live aggregate counts from the local store, available offline.
    pub async fn total_games(&self, user_id: &str) -> Result<u64> {
        self.games.count_games(user_id).await
    }

    pub async fn total_wins(&self, user_id: &str) -> Result<u64> {
        self.games.count_wins(user_id).await
    }

    pub async fn local_stats(&self, user_id: &str) -> Result<UserStats> {
        Ok(UserStats {
            total_games: self.games.count_games(user_id).await? as i32,
            total_wins: self.games.count_wins(user_id).await? as i32,
        })
    }

    /// Account reset: drop the user's local cache. The remote store keeps
    /// its copies.
    pub async fn clear_local(&self, user_id: &str) -> Result<u64> {
        self.games.delete_for_user(user_id).await
    }
}

/// `[start, end)` epoch-millis bounds of the calendar day containing `now`,
/// in the caller's local time zone.
pub fn local_day_bounds(now: DateTime<Local>) -> (i64, i64) {
    let day_start = now.date_naive().and_time(NaiveTime::MIN);
    let day_end = day_start + Duration::days(1);
    (local_millis(day_start), local_millis(day_end))
}

fn local_millis(naive: NaiveDateTime) -> i64 {
    match Local.from_local_datetime(&naive).earliest() {
        Some(dt) => dt.timestamp_millis(),
        // midnight skipped by a DST jump: read it as UTC instead
        None => Utc.from_utc_datetime(&naive).timestamp_millis(),
    }
}
