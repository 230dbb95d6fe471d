//! Favorite model and submission validation.
//!
//! A favorite names a movie or character from the catalog together with a
//! reference URL. Names are the natural key: no two stored favorites share
//! one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, MSG_EMPTY_NAME, MSG_INVALID_TYPE};
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Type constants
// ---------------------------------------------------------------------------

/// Wire value for a movie favorite.
pub const TYPE_MOVIE: &str = "movie";
/// Wire value for a character favorite.
pub const TYPE_CHARACTER: &str = "character";

/// All accepted favorite types.
pub const VALID_TYPES: &[&str] = &[TYPE_MOVIE, TYPE_CHARACTER];

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// The kind of catalog entry a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteType {
    Movie,
    Character,
}

impl FavoriteType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => TYPE_MOVIE,
            Self::Character => TYPE_CHARACTER,
        }
    }
}

impl fmt::Display for FavoriteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FavoriteType {
    type Err = CoreError;

    /// Exact, case-sensitive match against [`VALID_TYPES`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TYPE_MOVIE => Ok(Self::Movie),
            TYPE_CHARACTER => Ok(Self::Character),
            _ => Err(CoreError::InvalidInput(MSG_INVALID_TYPE.to_string())),
        }
    }
}

/// A persisted favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Favorite {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub favorite_type: FavoriteType,
    pub url: String,
    pub created_at: Timestamp,
}

/// A validated favorite that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavorite {
    pub name: String,
    pub favorite_type: FavoriteType,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a raw submission and build the [`NewFavorite`] to store.
///
/// The type is checked first, then the name. Values are kept exactly as
/// given; nothing is trimmed or normalized.
pub fn validate_new_favorite(
    name: &str,
    favorite_type: &str,
    url: &str,
) -> Result<NewFavorite, CoreError> {
    let favorite_type = favorite_type.parse::<FavoriteType>()?;

    if name.is_empty() {
        return Err(CoreError::InvalidInput(MSG_EMPTY_NAME.to_string()));
    }

    Ok(NewFavorite {
        name: name.to_string(),
        favorite_type,
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn all_types_are_valid() {
        for t in VALID_TYPES {
            assert!(t.parse::<FavoriteType>().is_ok(), "Type '{t}' should be valid");
        }
    }

    #[test]
    fn type_match_is_case_sensitive() {
        assert!("Movie".parse::<FavoriteType>().is_err());
        assert!("CHARACTER".parse::<FavoriteType>().is_err());
        assert!(" movie".parse::<FavoriteType>().is_err());
    }

    #[test]
    fn unknown_type_is_rejected_with_message() {
        let err = validate_new_favorite("Millennium Falcon", "vehicle", "u").unwrap_err();
        assert_matches!(err, CoreError::InvalidInput(msg) if msg == MSG_INVALID_TYPE);
    }

    #[test]
    fn type_is_checked_before_name() {
        let err = validate_new_favorite("", "planet", "").unwrap_err();
        assert_matches!(err, CoreError::InvalidInput(msg) if msg == MSG_INVALID_TYPE);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = validate_new_favorite("", "movie", "").unwrap_err();
        assert_matches!(err, CoreError::InvalidInput(msg) if msg == MSG_EMPTY_NAME);
    }

    #[test]
    fn values_are_kept_verbatim() {
        let new = validate_new_favorite("  Leia ", "character", "not a url").unwrap();
        assert_eq!(new.name, "  Leia ");
        assert_eq!(new.favorite_type, FavoriteType::Character);
        assert_eq!(new.url, "not a url");
    }

    #[test]
    fn favorite_serializes_type_field() {
        let fav = Favorite {
            id: 7,
            name: "A New Hope".to_string(),
            favorite_type: FavoriteType::Movie,
            url: "https://swapi.dev/api/films/1/".to_string(),
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&fav).unwrap();
        assert_eq!(json["type"], "movie");
        assert_eq!(json["id"], 7);
        assert!(json.get("favorite_type").is_none());
    }
}
