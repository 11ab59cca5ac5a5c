//! In-memory chunking of a flat, already-sorted result set.

use std::num::NonZeroUsize;

use crate::errors::LibraryError;

/// Validate a caller-supplied chunk size. Anything below 1 is rejected;
/// a zero chunk would never terminate the partition loop.
pub fn validate_chunk(size: i64) -> Result<NonZeroUsize, LibraryError> {
    usize::try_from(size)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(LibraryError::InvalidChunk)
}

/// Partition `rows` into consecutive pages of exactly `size` records, in
/// input order; the final page holds the remainder and is omitted when the
/// remainder is zero.
pub fn chunk_pages<T: Clone>(rows: &[T], size: NonZeroUsize) -> Vec<Vec<T>> {
    rows.chunks(size.get()).map(<[T]>::to_vec).collect()
}
