//! Play/pause/stop/resume state machine

use super::state::{NowPlaying, Notification, PlaybackState};
use crate::error::{InvalidState, PlayerError, Result};
use crate::model::{CatalogProvider, Video};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::sync::Arc;

/// Owns the single "now playing" slot
pub struct PlaybackController<C: CatalogProvider> {
    catalog: Arc<C>,
    state: PlaybackState,
    rng: StdRng,
}

impl<C: CatalogProvider> PlaybackController<C> {
    /// Create a stopped controller over the given catalog
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            state: PlaybackState::Stopped,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Use a fixed seed for random play (reproducible sessions)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Current playback state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Play a video by id, stopping whatever is loaded first
    ///
    /// Playing the video that is already loaded restarts it.
    pub fn play(&mut self, video_id: &str) -> Result<Vec<Notification>> {
        let video = self
            .catalog
            .get(video_id)
            .ok_or_else(|| PlayerError::VideoNotFound(video_id.to_string()))?;

        Ok(self.start(video))
    }

    /// Play a video chosen uniformly from the whole catalog
    pub fn play_random(&mut self) -> Result<Vec<Notification>> {
        let video = self
            .catalog
            .videos()
            .choose(&mut self.rng)
            .cloned()
            .ok_or(PlayerError::EmptyCatalog)?;

        log::debug!("Random pick: {}", video.id);
        Ok(self.start(video))
    }

    /// Stop the loaded video
    pub fn stop(&mut self) -> Result<Vec<Notification>> {
        match std::mem::take(&mut self.state) {
            PlaybackState::Stopped => Err(InvalidState::NothingPlaying.into()),
            PlaybackState::Playing(video) | PlaybackState::Paused(video) => {
                log::debug!("Stopped: {}", video.id);
                Ok(vec![Notification::Stopped(video)])
            }
        }
    }

    /// Pause the playing video
    ///
    /// Pausing an already paused video changes nothing but is reported
    /// with its own notification.
    pub fn pause(&mut self) -> Result<Vec<Notification>> {
        match &self.state {
            PlaybackState::Stopped => Err(InvalidState::NothingPlaying.into()),
            PlaybackState::Paused(video) => {
                Ok(vec![Notification::AlreadyPaused(Arc::clone(video))])
            }
            PlaybackState::Playing(video) => {
                let video = Arc::clone(video);
                log::debug!("Paused: {}", video.id);
                self.state = PlaybackState::Paused(Arc::clone(&video));
                Ok(vec![Notification::Paused(video)])
            }
        }
    }

    /// Continue a paused video
    pub fn resume(&mut self) -> Result<Vec<Notification>> {
        match &self.state {
            PlaybackState::Stopped => Err(InvalidState::NothingPlaying.into()),
            PlaybackState::Playing(_) => Err(InvalidState::NotPaused.into()),
            PlaybackState::Paused(video) => {
                let video = Arc::clone(video);
                log::debug!("Continued: {}", video.id);
                self.state = PlaybackState::Playing(Arc::clone(&video));
                Ok(vec![Notification::Continued(video)])
            }
        }
    }

    /// What is loaded right now, if anything
    pub fn currently_playing(&self) -> Option<NowPlaying> {
        self.state.video().map(|video| NowPlaying {
            video: Arc::clone(video),
            paused: self.state.is_paused(),
        })
    }

    fn start(&mut self, video: Arc<Video>) -> Vec<Notification> {
        let mut events = Vec::with_capacity(2);

        // Implicit stop of the previous video
        if let Some(previous) = self.state.video() {
            events.push(Notification::Stopped(Arc::clone(previous)));
        }

        log::debug!("Playing: {}", video.id);
        self.state = PlaybackState::Playing(Arc::clone(&video));
        events.push(Notification::Playing(video));
        events
    }
}
