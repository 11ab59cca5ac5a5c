//! Create the `song` table. Ids are DB-assigned and never reused for a
//! live record; `squad`/`song` width matches the service-side 256 bound.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Song::Table)
                    .if_not_exists()
                    .col(big_integer(Song::Id).primary_key().auto_increment())
                    .col(string_len(Song::Squad, 256).not_null())
                    .col(string_len(Song::Song, 256).not_null())
                    .col(text(Song::Text).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Song::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Song {
    Table,
    Id,
    Squad,
    Song,
    Text,
}
