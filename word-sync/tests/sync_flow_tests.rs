use std::sync::Arc;

use chrono::Utc;

use word_core::{GameSession, SessionStatus, WordList};
use word_sync::{
    Config, IdentityProvider, InMemoryRemoteStore, RemoteStore, StaticIdentity, SyncCoordinator,
    bootstrap,
};
use word_types::{GameMode, GameRecord, UserIdentity, UserProfile};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn test_identity() -> StaticIdentity {
    StaticIdentity::new(UserIdentity {
        user_id: "player-1".to_string(),
        email: "player-1@example.com".to_string(),
        display_name: "Player One".to_string(),
    })
}

async fn memory_coordinator(remote: Arc<InMemoryRemoteStore>) -> SyncCoordinator {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        ..Config::new()
    };
    bootstrap(&config, remote).await.unwrap()
}

fn play_to_record(target: &str, guesses: &[&str], user_id: &str) -> GameRecord {
    let mut session = GameSession::new(GameMode::Daily, target);
    for guess in guesses {
        session.submit(guess).unwrap();
    }
    assert!(session.is_over());
    session
        .into_record(user_id, Utc::now().timestamp_millis())
        .unwrap()
}

#[tokio::test]
async fn test_full_game_flow_lands_in_both_stores() {
    init_tracing();

    let remote = Arc::new(InMemoryRemoteStore::new());
    let coordinator = memory_coordinator(remote.clone()).await;

    let identity = test_identity();
    let user = identity.current_user().unwrap();
    remote
        .create_user(&UserProfile {
            uid: user.user_id.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            created_at: Utc::now().timestamp_millis(),
            total_games: 0,
            total_wins: 0,
        })
        .await
        .unwrap();

    // today's daily word, taken from the canonical list
    let list = WordList::builtin();
    let target = list.daily_word(Utc::now().date_naive()).to_string();

    let mut session = GameSession::new(GameMode::Daily, &target);
    session.submit(&target).unwrap();
    assert_eq!(session.status(), SessionStatus::Won);
    let record = session
        .into_record(&user.user_id, Utc::now().timestamp_millis())
        .unwrap();

    let remote_id = coordinator.save_game(record).await.unwrap();

    // visible locally by its remote identity
    let stored = coordinator
        .games()
        .find_by_remote_id(&user.user_id, &remote_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.word, target);
    assert!(stored.won);

    // visible in the remote profile stats
    let profile = remote.get_user(&user.user_id).await.unwrap();
    assert_eq!(profile.total_games, 1);
    assert_eq!(profile.total_wins, 1);

    // and the daily gate is now closed for today
    assert!(coordinator.has_played_daily_today(&user.user_id).await);
}

#[tokio::test]
async fn test_fresh_install_pulls_history_from_remote() {
    init_tracing();

    let remote = Arc::new(InMemoryRemoteStore::new());

    // two finished games already live in the remote store
    remote
        .create_game(&play_to_record("CRANE", &["HOUSE", "CRANE"], "player-1"))
        .await
        .unwrap();
    remote
        .create_game(&play_to_record(
            "ZEBRA",
            &["HOUSE", "CRANE", "BRAVE", "APPLE", "QUEEN", "TIGER"],
            "player-1",
        ))
        .await
        .unwrap();

    // a brand-new local database
    let coordinator = memory_coordinator(remote.clone()).await;
    let history = coordinator.history("player-1").await.unwrap();

    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|g| g.is_synced()));
    assert_eq!(coordinator.total_games("player-1").await.unwrap(), 2);
    assert_eq!(coordinator.total_wins("player-1").await.unwrap(), 1);

    // pulling again changes nothing
    coordinator.sync_from_remote("player-1").await.unwrap();
    assert_eq!(coordinator.total_games("player-1").await.unwrap(), 2);
}

#[tokio::test]
async fn test_offline_play_is_never_lost() {
    init_tracing();

    let remote = Arc::new(InMemoryRemoteStore::new());
    let coordinator = memory_coordinator(remote.clone()).await;
    remote.set_offline(true);

    let record = play_to_record("CRANE", &["HOUSE", "CRANE"], "player-1");
    let result = coordinator.save_game(record).await;
    assert!(result.is_err());

    // the play survived locally and still counts
    let history = coordinator.history("player-1").await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(!history[0].is_synced());
    assert!(coordinator.has_played_daily_today("player-1").await);
}
