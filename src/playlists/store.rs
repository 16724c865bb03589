//! Named playlist collection with case-insensitive names

use crate::error::{PlayerError, Result};
use crate::model::{CatalogProvider, Playlist, Video};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Result of adding a video to or removing one from a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistChange {
    /// Display name of the playlist that changed
    pub playlist: String,

    /// Video that was added or removed
    pub video: Arc<Video>,
}

/// Owns every playlist of a session
///
/// Playlists are keyed by their lowercased name, so "My List" and "my list"
/// are the same playlist. The case used at creation is kept for display.
pub struct PlaylistStore<C: CatalogProvider> {
    catalog: Arc<C>,
    playlists: BTreeMap<String, Playlist>,
}

/// Identity key for a playlist name
fn fold(name: &str) -> String {
    name.to_lowercase()
}

impl<C: CatalogProvider> PlaylistStore<C> {
    /// Create an empty store over the given catalog
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            playlists: BTreeMap::new(),
        }
    }

    /// Create an empty playlist
    pub fn create(&mut self, name: &str) -> Result<&Playlist> {
        let key = fold(name);
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::AlreadyExists(name.to_string()));
        }

        log::debug!("Creating playlist: {}", name);
        let playlist = self
            .playlists
            .entry(key)
            .or_insert_with(|| Playlist::new(name.to_string()));
        Ok(&*playlist)
    }

    /// Append a catalog video to a playlist
    pub fn add_video(&mut self, name: &str, video_id: &str) -> Result<PlaylistChange> {
        let video = self.resolve(video_id)?;
        let playlist = self.find_mut(name)?;

        if !playlist.add_video(Arc::clone(&video)) {
            return Err(PlayerError::DuplicateVideo {
                playlist: playlist.name.clone(),
                video_id: video_id.to_string(),
            });
        }

        log::debug!("Added {} to {} ({} videos)", video_id, playlist.name, playlist.len());
        Ok(PlaylistChange {
            playlist: playlist.name.clone(),
            video,
        })
    }

    /// Remove a video from a playlist
    pub fn remove_video(&mut self, name: &str, video_id: &str) -> Result<PlaylistChange> {
        self.resolve(video_id)?;
        let playlist = self.find_mut(name)?;

        let video = playlist
            .remove_video(video_id)
            .ok_or_else(|| PlayerError::VideoNotInPlaylist {
                playlist: playlist.name.clone(),
                video_id: video_id.to_string(),
            })?;

        log::debug!("Removed {} from {}", video_id, playlist.name);
        Ok(PlaylistChange {
            playlist: playlist.name.clone(),
            video,
        })
    }

    /// Remove every video from a playlist, keeping the playlist
    pub fn clear(&mut self, name: &str) -> Result<&Playlist> {
        let playlist = self.find_mut(name)?;
        playlist.clear();
        log::debug!("Cleared playlist: {}", playlist.name);
        Ok(&*playlist)
    }

    /// Delete a playlist, returning it
    pub fn delete(&mut self, name: &str) -> Result<Playlist> {
        let playlist = self
            .playlists
            .remove(&fold(name))
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))?;

        log::debug!("Deleted playlist: {}", playlist.name);
        Ok(playlist)
    }

    /// Look up a playlist for display
    pub fn show(&self, name: &str) -> Result<&Playlist> {
        self.playlists
            .get(&fold(name))
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))
    }

    /// Display names of all playlists, ordered by lowercased name
    ///
    /// An empty vector means no playlists exist.
    pub fn list_all(&self) -> Vec<&str> {
        self.playlists.values().map(|p| p.name.as_str()).collect()
    }

    /// Total number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Check if no playlists exist
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    fn resolve(&self, video_id: &str) -> Result<Arc<Video>> {
        self.catalog
            .get(video_id)
            .ok_or_else(|| PlayerError::VideoNotFound(video_id.to_string()))
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Playlist> {
        self.playlists
            .get_mut(&fold(name))
            .ok_or_else(|| PlayerError::PlaylistNotFound(name.to_string()))
    }
}
