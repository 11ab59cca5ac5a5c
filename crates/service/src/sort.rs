use crate::errors::LibraryError;

/// Whitelisted sort columns for the listing operation.
///
/// Parsing caller input into this enum is the boundary that keeps arbitrary
/// strings out of any ORDER BY clause; repositories only ever see the enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Song,
    Text,
    Squad,
    Id,
}

impl SortField {
    /// Case-sensitive: exactly `song`, `text`, `squad` or `id`.
    pub fn parse(s: &str) -> Result<Self, LibraryError> {
        match s {
            "song" => Ok(Self::Song),
            "text" => Ok(Self::Text),
            "squad" => Ok(Self::Squad),
            "id" => Ok(Self::Id),
            _ => Err(LibraryError::InvalidField),
        }
    }
}

/// Sort direction, `ASC` or `DESC` exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Result<Self, LibraryError> {
        match s {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(LibraryError::InvalidOrder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LibraryError;

    #[test]
    fn parses_whitelisted_fields() {
        assert_eq!(SortField::parse("song").unwrap(), SortField::Song);
        assert_eq!(SortField::parse("text").unwrap(), SortField::Text);
        assert_eq!(SortField::parse("squad").unwrap(), SortField::Squad);
        assert_eq!(SortField::parse("id").unwrap(), SortField::Id);
    }

    #[test]
    fn rejects_unknown_field() {
        assert!(matches!(SortField::parse("title"), Err(LibraryError::InvalidField)));
        assert!(matches!(SortField::parse(""), Err(LibraryError::InvalidField)));
        // whitelist is case-sensitive
        assert!(matches!(SortField::parse("Id"), Err(LibraryError::InvalidField)));
    }

    #[test]
    fn rejects_order_by_injection_attempt() {
        assert!(matches!(
            SortField::parse("id; DROP TABLE song"),
            Err(LibraryError::InvalidField)
        ));
    }

    #[test]
    fn parses_exact_order_literals() {
        assert_eq!(SortOrder::parse("ASC").unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::parse("DESC").unwrap(), SortOrder::Desc);
        assert!(matches!(SortOrder::parse("asc"), Err(LibraryError::InvalidOrder)));
        assert!(matches!(SortOrder::parse("descending"), Err(LibraryError::InvalidOrder)));
    }
}
