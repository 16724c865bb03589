use crate::model::Video;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Represents a playlist
///
/// `add_video` keeps ids unique; a deserialized playlist is taken as-is and
/// is not checked for duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name, in the case it was created with
    pub name: String,

    /// Videos in insertion order, no two sharing an id
    videos: Vec<Arc<Video>>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            videos: Vec::new(),
        }
    }

    /// Videos in playlist order
    pub fn videos(&self) -> &[Arc<Video>] {
        &self.videos
    }

    /// Check if a video with this id is in the playlist
    pub fn contains(&self, video_id: &str) -> bool {
        self.position(video_id).is_some()
    }

    /// Append a video, unless one with the same id is already present
    ///
    /// Returns false when the video was already in the playlist.
    pub fn add_video(&mut self, video: Arc<Video>) -> bool {
        if self.contains(&video.id) {
            return false;
        }
        self.videos.push(video);
        true
    }

    /// Remove the video with this id, returning it if it was present
    pub fn remove_video(&mut self, video_id: &str) -> Option<Arc<Video>> {
        self.position(video_id).map(|pos| self.videos.remove(pos))
    }

    /// Remove all videos, keeping the playlist itself
    pub fn clear(&mut self) {
        self.videos.clear();
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    fn position(&self, video_id: &str) -> Option<usize> {
        self.videos.iter().position(|v| v.id == video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str) -> Arc<Video> {
        Arc::new(Video::new(id, format!("Title {id}"), &[]))
    }

    #[test]
    fn test_add_preserves_order_and_rejects_duplicates() {
        let mut playlist = Playlist::new("Mixed".to_string());
        assert!(playlist.add_video(video("b")));
        assert!(playlist.add_video(video("a")));
        assert!(!playlist.add_video(video("b")));

        let ids: Vec<&str> = playlist.videos().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut playlist = Playlist::new("Mixed".to_string());
        playlist.add_video(video("a"));
        playlist.add_video(video("b"));

        assert_eq!(playlist.remove_video("a").unwrap().id, "a");
        assert!(playlist.remove_video("a").is_none());
        assert_eq!(playlist.len(), 1);

        playlist.clear();
        assert!(playlist.is_empty());
        assert_eq!(playlist.name, "Mixed");
    }
}
