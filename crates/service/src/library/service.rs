use std::sync::Arc;

use tracing::{info, instrument};

use models::song;

use crate::chunk::{chunk_pages, validate_chunk};
use crate::errors::LibraryError;
use crate::library::repository::SongRepository;
use crate::sort::{SortField, SortOrder};

/// Longest accepted `squad`/`song` value, in characters; matches the column
/// width the migration creates.
pub const MAX_FIELD_LEN: usize = 256;

/// Application service encapsulating the song library business rules.
///
/// Constructed once at startup around a storage handle; holds no other
/// state. Input is validated before any storage call; repository errors pass
/// through untouched so the transport can tell the tiers apart.
pub struct LibraryService {
    repo: Arc<dyn SongRepository>,
}

impl LibraryService {
    pub fn new(repo: Arc<dyn SongRepository>) -> Self {
        Self { repo }
    }

    /// Add a song; returns the storage-assigned id.
    #[instrument(skip(self, text))]
    pub async fn add(&self, squad: &str, song: &str, text: &str) -> Result<i64, LibraryError> {
        validate_fields(squad, song)?;
        let id = self.repo.insert(squad, song, text).await?;
        info!(id, "song added");
        Ok(id)
    }

    /// Replace `squad`, `song` and `text` of an existing record.
    #[instrument(skip(self, text))]
    pub async fn update(&self, id: i64, squad: &str, song: &str, text: &str) -> Result<(), LibraryError> {
        validate_fields(squad, song)?;
        self.repo.update_by_id(id, squad, song, text).await?;
        info!("song updated");
        Ok(())
    }

    /// Fetch a song's text as its ordered lines.
    ///
    /// A text without newlines yields one element; an empty stored text
    /// yields a single empty string. Callers depend on that exact shape.
    pub async fn text(&self, id: i64) -> Result<Vec<String>, LibraryError> {
        let text = self.repo.text_by_id(id).await?;
        Ok(text.split('\n').map(str::to_owned).collect())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), LibraryError> {
        self.repo.delete_by_id(id).await?;
        info!("song deleted");
        Ok(())
    }

    /// List the whole library sorted by `field`/`order`, split into pages of
    /// `chunk` records. Storage sorts; chunking happens in memory over the
    /// flat result set.
    pub async fn library(
        &self,
        order: &str,
        field: &str,
        chunk: i64,
    ) -> Result<Vec<Vec<song::Model>>, LibraryError> {
        let chunk = validate_chunk(chunk)?;
        let order = SortOrder::parse(order)?;
        let field = SortField::parse(field)?;
        let rows = self.repo.list_all_sorted(field, order).await?;
        Ok(chunk_pages(&rows, chunk))
    }
}

fn validate_fields(squad: &str, song: &str) -> Result<(), LibraryError> {
    if squad.is_empty() || squad.chars().count() > MAX_FIELD_LEN {
        return Err(LibraryError::InvalidSquad);
    }
    if song.is_empty() || song.chars().count() > MAX_FIELD_LEN {
        return Err(LibraryError::InvalidSong);
    }
    Ok(())
}
