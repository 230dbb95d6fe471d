//! Response bodies for the favorites and catalog endpoints.
//!
//! Each endpoint wraps its payload under a named key (`favorites`, `movies`,
//! `people`) rather than a generic envelope.

use serde::Serialize;
use swfav_core::favorite::Favorite;

/// Confirmation text returned after a favorite is stored.
pub const MSG_FAVORITE_SAVED: &str = "Favorite saved!";

/// `{ "favorites": [...] }`
#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<Favorite>,
}

/// `{ "message": "Favorite saved!", "favorite": {...} }`
#[derive(Debug, Serialize)]
pub struct FavoriteSavedResponse {
    pub message: &'static str,
    pub favorite: Favorite,
}

/// `{ "movies": <upstream JSON> }`
#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub movies: serde_json::Value,
}

/// `{ "people": <upstream JSON> }`
#[derive(Debug, Serialize)]
pub struct PeopleResponse {
    pub people: serde_json::Value,
}

/// `{ "message": ... }` body used for every error response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
