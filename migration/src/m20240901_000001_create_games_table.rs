use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Games::UserId).string().not_null())
                    .col(ColumnDef::new(Games::Mode).string().not_null())
                    .col(ColumnDef::new(Games::Word).string().not_null())
                    .col(ColumnDef::new(Games::GuessesUsed).integer().not_null())
                    .col(ColumnDef::new(Games::PlayedAt).big_integer().not_null())
                    .col(ColumnDef::new(Games::Won).boolean().not_null())
                    .col(ColumnDef::new(Games::Guesses).text().not_null())
                    .to_owned(),
            )
            .await?;

        // Create index for user-scoped history queries ordered by play time
        manager
            .create_index(
                Index::create()
                    .name("idx_games_user_played_at")
                    .table(Games::Table)
                    .col(Games::UserId)
                    .col(Games::PlayedAt)
                    .to_owned(),
            )
            .await?;

        // Create index for the daily-gate and mode-filtered queries
        manager
            .create_index(
                Index::create()
                    .name("idx_games_user_mode")
                    .table(Games::Table)
                    .col(Games::UserId)
                    .col(Games::Mode)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Games {
    Table,
    Id,
    UserId,
    Mode,
    Word,
    GuessesUsed,
    PlayedAt,
    Won,
    Guesses,
}
