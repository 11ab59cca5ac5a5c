use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use models::song;

use crate::errors::LibraryError;
use crate::library::repository::SongRepository;
use crate::sort::{SortField, SortOrder};

/// In-memory song repository.
///
/// Backs tests and local development where a database is overkill. Honors
/// the same contract as the SeaORM implementation: ids assigned exactly
/// once, missing ids signalled as `SongNotFound`, listing sorted here rather
/// than by the caller.
#[derive(Default)]
pub struct InMemorySongRepository {
    inner: RwLock<Store>,
}

struct Store {
    next_id: i64,
    songs: BTreeMap<i64, song::Model>,
}

impl Default for Store {
    fn default() -> Self {
        Self { next_id: 1, songs: BTreeMap::new() }
    }
}

impl InMemorySongRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SongRepository for InMemorySongRepository {
    async fn insert(&self, squad: &str, song_title: &str, text: &str) -> Result<i64, LibraryError> {
        let mut store = self.inner.write().await;
        let id = store.next_id;
        store.next_id += 1;
        store.songs.insert(
            id,
            song::Model {
                id,
                squad: squad.to_string(),
                song: song_title.to_string(),
                text: text.to_string(),
            },
        );
        Ok(id)
    }

    async fn update_by_id(&self, id: i64, squad: &str, song_title: &str, text: &str) -> Result<(), LibraryError> {
        let mut store = self.inner.write().await;
        let entry = store.songs.get_mut(&id).ok_or(LibraryError::SongNotFound)?;
        entry.squad = squad.to_string();
        entry.song = song_title.to_string();
        entry.text = text.to_string();
        Ok(())
    }

    async fn text_by_id(&self, id: i64) -> Result<String, LibraryError> {
        let store = self.inner.read().await;
        store.songs.get(&id).map(|s| s.text.clone()).ok_or(LibraryError::SongNotFound)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), LibraryError> {
        let mut store = self.inner.write().await;
        store.songs.remove(&id).map(|_| ()).ok_or(LibraryError::SongNotFound)
    }

    async fn list_all_sorted(&self, field: SortField, order: SortOrder) -> Result<Vec<song::Model>, LibraryError> {
        let store = self.inner.read().await;
        let mut rows: Vec<song::Model> = store.songs.values().cloned().collect();
        rows.sort_by(|a, b| {
            let ord = match field {
                SortField::Song => a.song.cmp(&b.song),
                SortField::Text => a.text.cmp(&b.text),
                SortField::Squad => a.squad.cmp(&b.squad),
                SortField::Id => a.id.cmp(&b.id),
            };
            match order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        Ok(rows)
    }
}
