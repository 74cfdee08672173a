use anyhow::{Result, anyhow};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, SqlErr,
};
use tracing::debug;

use crate::entities::{games, prelude::*};
use word_types::{GameMode, GameRecord};

pub struct GameRepository {
    db: DatabaseConnection,
}

impl GameRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_record(model: games::Model) -> Result<GameRecord> {
        Ok(GameRecord {
            local_id: model.id,
            mode: model.mode.parse()?,
            guesses: serde_json::from_str(&model.guesses)?,
            remote_id: model.remote_id,
            user_id: model.user_id,
            word: model.word,
            guesses_used: model.guesses_used,
            played_at: model.played_at,
            won: model.won,
        })
    }

    fn record_to_model(record: &GameRecord) -> Result<games::ActiveModel> {
        Ok(games::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(record.user_id.clone()),
            mode: ActiveValue::Set(record.mode.as_str().to_string()),
            word: ActiveValue::Set(record.word.clone()),
            guesses_used: ActiveValue::Set(record.guesses_used),
            played_at: ActiveValue::Set(record.played_at),
            won: ActiveValue::Set(record.won),
            guesses: ActiveValue::Set(serde_json::to_string(&record.guesses)?),
            remote_id: ActiveValue::Set(record.remote_id.clone()),
        })
    }

    /// Insert a game and return the assigned local id. Inserting the same
    /// remote document twice for a user is benign: the existing row wins and
    /// its id is returned.
    pub async fn insert(&self, record: &GameRecord) -> Result<i64> {
        let model = Self::record_to_model(record)?;
        match Games::insert(model).exec(&self.db).await {
            Ok(res) => Ok(res.last_insert_id),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                debug!(
                    "game {} for user {} already stored locally",
                    record.remote_id, record.user_id
                );
                let existing = self
                    .find_by_remote_id(&record.user_id, &record.remote_id)
                    .await?
                    .ok_or_else(|| anyhow!("conflicting games row no longer present"))?;
                Ok(existing.local_id)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn all_for_user(&self, user_id: &str) -> Result<Vec<GameRecord>> {
        let models = Games::find()
            .filter(games::Column::UserId.eq(user_id))
            .order_by_desc(games::Column::PlayedAt)
            .all(&self.db)
            .await?;

        models.into_iter().map(Self::model_to_record).collect()
    }

    pub async fn by_mode(&self, user_id: &str, mode: GameMode) -> Result<Vec<GameRecord>> {
        let models = Games::find()
            .filter(games::Column::UserId.eq(user_id))
            .filter(games::Column::Mode.eq(mode.as_str()))
            .order_by_desc(games::Column::PlayedAt)
            .all(&self.db)
            .await?;

        models.into_iter().map(Self::model_to_record).collect()
    }

    pub async fn find_by_remote_id(
        &self,
        user_id: &str,
        remote_id: &str,
    ) -> Result<Option<GameRecord>> {
        let model = Games::find()
            .filter(games::Column::UserId.eq(user_id))
            .filter(games::Column::RemoteId.eq(remote_id))
            .one(&self.db)
            .await?;

        model.map(Self::model_to_record).transpose()
    }

    /// The user's daily game inside a `[start, end)` window of epoch millis,
    /// if any.
    pub async fn daily_game_between(
        &self,
        user_id: &str,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<Option<GameRecord>> {
        let model = Games::find()
            .filter(games::Column::UserId.eq(user_id))
            .filter(games::Column::Mode.eq(GameMode::Daily.as_str()))
            .filter(games::Column::PlayedAt.gte(start_ms))
            .filter(games::Column::PlayedAt.lt(end_ms))
            .one(&self.db)
            .await?;

        model.map(Self::model_to_record).transpose()
    }

    pub async fn count_games(&self, user_id: &str) -> Result<u64> {
        let count = Games::find()
            .filter(games::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?;
        Ok(count)
    }

    pub async fn count_wins(&self, user_id: &str) -> Result<u64> {
        let count = Games::find()
            .filter(games::Column::UserId.eq(user_id))
            .filter(games::Column::Won.eq(true))
            .count(&self.db)
            .await?;
        Ok(count)
    }

    pub async fn delete_for_user(&self, user_id: &str) -> Result<u64> {
        let res = Games::delete_many()
            .filter(games::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn delete_all(&self) -> Result<u64> {
        let res = Games::delete_many().exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}
