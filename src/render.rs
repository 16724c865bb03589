//! Text rendering of player results
//!
//! The core only reports structured outcomes; everything the user reads is
//! built here.

use crate::command::Command;
use crate::error::PlayerError;
use crate::model::{Playlist, Video};
use crate::playback::{NowPlaying, Notification};
use std::sync::Arc;

/// One line per playback notification
pub fn notification(event: &Notification) -> String {
    match event {
        Notification::Stopped(v) => format!("Stopping video: {}", v.title),
        Notification::Playing(v) => format!("Playing video: {}", v.title),
        Notification::Paused(v) => format!("Pausing video: {}", v.title),
        Notification::AlreadyPaused(v) => format!("Video already paused: {}", v.title),
        Notification::Continued(v) => format!("Continuing video: {}", v.title),
    }
}

pub fn now_playing(now: Option<&NowPlaying>) -> String {
    match now {
        None => "No video is currently playing".to_string(),
        Some(NowPlaying { video, paused: true }) => {
            format!("Currently playing: {} - PAUSED", video)
        }
        Some(NowPlaying { video, paused: false }) => format!("Currently playing: {}", video),
    }
}

pub fn video_list(videos: &[Arc<Video>]) -> Vec<String> {
    let mut lines = vec!["Here's a list of all available videos:".to_string()];
    lines.extend(videos.iter().map(|v| format!("  {}", v)));
    lines
}

pub fn playlist(playlist: &Playlist) -> Vec<String> {
    let mut lines = vec![format!("Showing playlist: {}", playlist.name)];
    if playlist.is_empty() {
        lines.push("  No videos here yet".to_string());
    } else {
        lines.extend(playlist.videos().iter().map(|v| format!("  {}", v)));
    }
    lines
}

pub fn playlist_names(names: &[&str]) -> Vec<String> {
    if names.is_empty() {
        return vec!["No playlists exist yet".to_string()];
    }
    let mut lines = vec!["Showing all playlists:".to_string()];
    lines.extend(names.iter().map(|n| format!("  {}", n)));
    lines
}

/// Short reason used after the command-specific prefix
fn reason(err: &PlayerError) -> String {
    match err {
        PlayerError::VideoNotFound(_) => "Video does not exist".to_string(),
        PlayerError::PlaylistNotFound(_) => "Playlist does not exist".to_string(),
        PlayerError::AlreadyExists(_) => "A playlist with the same name already exists".to_string(),
        PlayerError::DuplicateVideo { .. } => "Video already added".to_string(),
        PlayerError::VideoNotInPlaylist { .. } => "Video is not in playlist".to_string(),
        PlayerError::InvalidState(state) => state.to_string(),
        PlayerError::EmptyCatalog => "No videos available".to_string(),
    }
}

/// Message for a command that failed
///
/// Once the playlist has been found, messages name it as it was created.
pub fn failure(command: &Command, err: &PlayerError) -> String {
    let stored = match err {
        PlayerError::DuplicateVideo { playlist, .. }
        | PlayerError::VideoNotInPlaylist { playlist, .. } => Some(playlist.as_str()),
        _ => None,
    };

    let prefix = match command {
        Command::Play(_) => "Cannot play video".to_string(),
        Command::PlayRandom => "Cannot play random video".to_string(),
        Command::Stop => "Cannot stop video".to_string(),
        Command::Pause => "Cannot pause video".to_string(),
        Command::Continue => "Cannot continue video".to_string(),
        Command::CreatePlaylist(_) => "Cannot create playlist".to_string(),
        Command::AddToPlaylist { playlist, .. } => {
            format!("Cannot add video to {}", stored.unwrap_or(playlist))
        }
        Command::RemoveFromPlaylist { playlist, .. } => {
            format!("Cannot remove video from {}", stored.unwrap_or(playlist))
        }
        Command::ClearPlaylist(name) => format!("Cannot clear playlist {}", name),
        Command::DeletePlaylist(name) => format!("Cannot delete playlist {}", name),
        Command::ShowPlaylist(name) => format!("Cannot show playlist {}", name),
        _ => return err.to_string(),
    };
    format!("{}: {}", prefix, reason(err))
}
