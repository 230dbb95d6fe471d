//! Domain core for the favorites service.
//!
//! Holds the [`favorite::Favorite`] model, the pure validation rules for new
//! submissions, the [`store::FavoriteStore`] seam implemented by `swfav-db`,
//! and the [`service::FavoriteService`] that ties them together.

pub mod error;
pub mod favorite;
pub mod service;
pub mod store;
pub mod types;
