use std::sync::Arc;

use anyhow::Result;

use word_persistence::{connection, repositories::GameRepository};

pub mod config;
pub mod coordinator;
pub mod dictionary;
pub mod identity;
pub mod remote;

pub use config::Config;
pub use coordinator::{SyncCoordinator, local_day_bounds};
pub use dictionary::HttpDictionary;
pub use identity::{IdentityProvider, StaticIdentity};
pub use remote::{InMemoryRemoteStore, RemoteStore};

/// Open the local database, apply migrations and wire up a coordinator
/// against the given remote store.
pub async fn bootstrap(config: &Config, remote: Arc<dyn RemoteStore>) -> Result<SyncCoordinator> {
    let db = connection::connect_and_migrate(&config.database_url).await?;
    Ok(SyncCoordinator::new(GameRepository::new(db), remote))
}
