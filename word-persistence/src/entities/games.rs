use sea_orm::entity::prelude::*;

/// Row shape of the `games` table. `guesses` holds the guess sequence as a
/// JSON array of strings; `remote_id` is empty until the record reaches the
/// remote store.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: String,
    pub mode: String,
    pub word: String,
    pub guesses_used: i32,
    pub played_at: i64,
    pub won: bool,
    pub guesses: String,
    pub remote_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
