use serde::{Deserialize, Serialize};

/// Per-user document held by the remote store (the system of record for
/// aggregate stats).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub created_at: i64,
    #[serde(default)]
    pub total_games: i32,
    #[serde(default)]
    pub total_wins: i32,
}

/// Aggregate counters, whether read from the remote profile or derived from
/// local count queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserStats {
    pub total_games: i32,
    pub total_wins: i32,
}

impl From<&UserProfile> for UserStats {
    fn from(profile: &UserProfile) -> Self {
        UserStats {
            total_games: profile.total_games,
            total_wins: profile.total_wins,
        }
    }
}

/// What the identity provider knows about the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
}
