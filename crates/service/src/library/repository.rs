use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, Order, QueryFilter, QueryOrder,
    Set,
};

use models::song;

use crate::errors::LibraryError;
use crate::sort::{SortField, SortOrder};

/// Storage contract the library service depends on.
///
/// Implementations must assign each id exactly once, signal a missing id as
/// `SongNotFound`, and sort `list_all_sorted` themselves; the service never
/// re-sorts.
#[async_trait]
pub trait SongRepository: Send + Sync {
    async fn insert(&self, squad: &str, song: &str, text: &str) -> Result<i64, LibraryError>;
    async fn update_by_id(&self, id: i64, squad: &str, song: &str, text: &str) -> Result<(), LibraryError>;
    async fn text_by_id(&self, id: i64) -> Result<String, LibraryError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), LibraryError>;
    async fn list_all_sorted(&self, field: SortField, order: SortOrder) -> Result<Vec<song::Model>, LibraryError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmSongRepository {
    pub db: DatabaseConnection,
}

fn sort_column(field: SortField) -> song::Column {
    match field {
        SortField::Song => song::Column::Song,
        SortField::Text => song::Column::Text,
        SortField::Squad => song::Column::Squad,
        SortField::Id => song::Column::Id,
    }
}

fn sort_order(order: SortOrder) -> Order {
    match order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    }
}

#[async_trait]
impl SongRepository for SeaOrmSongRepository {
    async fn insert(&self, squad: &str, song_title: &str, text: &str) -> Result<i64, LibraryError> {
        let am = song::ActiveModel {
            squad: Set(squad.to_string()),
            song: Set(song_title.to_string()),
            text: Set(text.to_string()),
            ..Default::default()
        };
        let inserted = am.insert(&self.db).await.map_err(LibraryError::storage)?;
        Ok(inserted.id)
    }

    async fn update_by_id(&self, id: i64, squad: &str, song_title: &str, text: &str) -> Result<(), LibraryError> {
        // Single UPDATE; zero affected rows is the NotFound signal.
        let res = song::Entity::update_many()
            .col_expr(song::Column::Squad, Expr::value(squad))
            .col_expr(song::Column::Song, Expr::value(song_title))
            .col_expr(song::Column::Text, Expr::value(text))
            .filter(song::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(LibraryError::storage)?;
        if res.rows_affected == 0 {
            return Err(LibraryError::SongNotFound);
        }
        Ok(())
    }

    async fn text_by_id(&self, id: i64) -> Result<String, LibraryError> {
        let found = song::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(LibraryError::storage)?
            .ok_or(LibraryError::SongNotFound)?;
        Ok(found.text)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), LibraryError> {
        let res = song::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(LibraryError::storage)?;
        if res.rows_affected == 0 {
            return Err(LibraryError::SongNotFound);
        }
        Ok(())
    }

    async fn list_all_sorted(&self, field: SortField, order: SortOrder) -> Result<Vec<song::Model>, LibraryError> {
        song::Entity::find()
            .order_by(sort_column(field), sort_order(order))
            .all(&self.db)
            .await
            .map_err(LibraryError::storage)
    }
}
