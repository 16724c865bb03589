//! Playback state and the notifications emitted on transitions

use crate::model::Video;
use std::sync::Arc;

/// State of the "now playing" slot
///
/// A paused state always carries its video, so "paused with nothing
/// loaded" cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing(Arc<Video>),
    Paused(Arc<Video>),
}

impl PlaybackState {
    /// The loaded video, if any
    pub fn video(&self) -> Option<&Arc<Video>> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing(video) | PlaybackState::Paused(video) => Some(video),
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused(_))
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, PlaybackState::Stopped)
    }
}

/// Observable side effect of a playback operation
///
/// Operations return these in emission order; an implicit stop always
/// precedes the `Playing` of the next video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Stopped(Arc<Video>),
    Playing(Arc<Video>),
    Paused(Arc<Video>),
    AlreadyPaused(Arc<Video>),
    Continued(Arc<Video>),
}

impl Notification {
    /// Video the notification refers to
    pub fn video(&self) -> &Video {
        match self {
            Notification::Stopped(v)
            | Notification::Playing(v)
            | Notification::Paused(v)
            | Notification::AlreadyPaused(v)
            | Notification::Continued(v) => v,
        }
    }
}

/// Snapshot returned by the "currently playing" query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub video: Arc<Video>,
    pub paused: bool,
}
