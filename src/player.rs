//! Player session
//!
//! Ties one catalog to one playback controller and one playlist store, and
//! runs parsed commands against them.

use crate::command::{Command, HELP_TEXT};
use crate::config::PlayerConfig;
use crate::error::Result;
use crate::model::{Catalog, CatalogProvider, Video};
use crate::playback::{Notification, PlaybackController};
use crate::playlists::PlaylistStore;
use crate::render;
use std::sync::Arc;

/// A single player session
pub struct VideoPlayer<C: CatalogProvider = Catalog> {
    catalog: Arc<C>,
    playback: PlaybackController<C>,
    playlists: PlaylistStore<C>,
}

impl<C: CatalogProvider> VideoPlayer<C> {
    /// Create a session over a catalog
    pub fn new(catalog: C, config: &PlayerConfig) -> Self {
        let catalog = Arc::new(catalog);

        let mut playback = PlaybackController::new(Arc::clone(&catalog));
        if let Some(seed) = config.seed {
            log::debug!("Random play seeded with {}", seed);
            playback = playback.with_seed(seed);
        }

        log::info!("Session started with {} videos", catalog.len());

        Self {
            playlists: PlaylistStore::new(Arc::clone(&catalog)),
            catalog,
            playback,
        }
    }

    pub fn playback(&self) -> &PlaybackController<C> {
        &self.playback
    }

    pub fn playlists(&self) -> &PlaylistStore<C> {
        &self.playlists
    }

    /// Number of videos in the catalog
    pub fn number_of_videos(&self) -> usize {
        self.catalog.len()
    }

    /// All catalog videos sorted by title
    pub fn all_videos(&self) -> Vec<Arc<Video>> {
        let mut videos = self.catalog.videos().to_vec();
        videos.sort_by(|a, b| a.title.cmp(&b.title));
        videos
    }

    /// Run a command and return the lines to show the user
    ///
    /// Failures are rendered as messages; the session always stays usable.
    pub fn execute(&mut self, command: &Command) -> Vec<String> {
        log::debug!("Executing {:?}", command);

        match self.dispatch(command) {
            Ok(lines) => lines,
            Err(err) => {
                log::debug!("{:?} failed: {}", command, err);
                vec![render::failure(command, &err)]
            }
        }
    }

    fn dispatch(&mut self, command: &Command) -> Result<Vec<String>> {
        let lines = match command {
            Command::NumberOfVideos => {
                vec![format!("{} videos in the library", self.number_of_videos())]
            }
            Command::ShowAllVideos => render::video_list(&self.all_videos()),
            Command::Play(video_id) => notifications(self.playback.play(video_id)?),
            Command::PlayRandom => notifications(self.playback.play_random()?),
            Command::Stop => notifications(self.playback.stop()?),
            Command::Pause => notifications(self.playback.pause()?),
            Command::Continue => notifications(self.playback.resume()?),
            Command::ShowPlaying => {
                vec![render::now_playing(self.playback.currently_playing().as_ref())]
            }
            Command::CreatePlaylist(name) => {
                let playlist = self.playlists.create(name)?;
                vec![format!("Successfully created new playlist: {}", playlist.name)]
            }
            Command::AddToPlaylist { playlist, video_id } => {
                let change = self.playlists.add_video(playlist, video_id)?;
                vec![format!("Added video to {}: {}", change.playlist, change.video.title)]
            }
            Command::RemoveFromPlaylist { playlist, video_id } => {
                let change = self.playlists.remove_video(playlist, video_id)?;
                vec![format!("Removed video from {}: {}", change.playlist, change.video.title)]
            }
            Command::ClearPlaylist(name) => {
                let playlist = self.playlists.clear(name)?;
                vec![format!("Successfully removed all videos from {}", playlist.name)]
            }
            Command::DeletePlaylist(name) => {
                let playlist = self.playlists.delete(name)?;
                vec![format!("Deleted playlist: {}", playlist.name)]
            }
            Command::ShowPlaylist(name) => render::playlist(self.playlists.show(name)?),
            Command::ShowAllPlaylists => render::playlist_names(&self.playlists.list_all()),
            Command::Help => HELP_TEXT.lines().map(str::to_string).collect(),
            Command::Exit => Vec::new(),
        };
        Ok(lines)
    }
}

fn notifications(events: Vec<Notification>) -> Vec<String> {
    events.iter().map(render::notification).collect()
}
