//! Playlist management
//!
//! Playlists are named, ordered, duplicate-free collections of catalog
//! videos. Names are matched case-insensitively.

mod store;

pub use store::{PlaylistChange, PlaylistStore};
