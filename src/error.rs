//! Error types for playback and playlist operations
//!
//! Every failure here is recoverable: the caller reports it and carries on.
//! No operation that returns an error leaves any state modified.

use thiserror::Error;

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;

/// Failures reported by the playback controller and playlist store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// Video id not present in the catalog
    #[error("Video does not exist: {0}")]
    VideoNotFound(String),

    /// No playlist matches the name (case-insensitive)
    #[error("Playlist does not exist: {0}")]
    PlaylistNotFound(String),

    /// A playlist with the same case-folded name exists
    #[error("A playlist with the same name already exists: {0}")]
    AlreadyExists(String),

    /// Video is already part of the target playlist
    #[error("Video {video_id} already added to {playlist}")]
    DuplicateVideo { playlist: String, video_id: String },

    /// Video is not part of the playlist it should be removed from
    #[error("Video {video_id} is not in playlist {playlist}")]
    VideoNotInPlaylist { playlist: String, video_id: String },

    /// Playback operation not valid in the current state
    #[error("{0}")]
    InvalidState(InvalidState),

    /// Random play requested on a catalog with no videos
    #[error("No videos available")]
    EmptyCatalog,
}

/// Why a playback operation was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidState {
    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,
}

impl From<InvalidState> for PlayerError {
    fn from(state: InvalidState) -> Self {
        PlayerError::InvalidState(state)
    }
}
