//! Data model for the video catalog
//!
//! Videos are loaded once into a catalog and shared by reference with the
//! playback controller and the playlist store.

mod catalog;
mod playlist;
mod video;

pub use catalog::{Catalog, CatalogProvider};
pub use playlist::Playlist;
pub use video::Video;
