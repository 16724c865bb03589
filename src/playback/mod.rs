//! Playback control
//!
//! A single "now playing" slot driven through a small state machine:
//! stopped, playing, or paused. Every transition reports what it did as an
//! ordered list of notifications, leaving rendering to the caller.

mod controller;
mod state;

pub use controller::PlaybackController;
pub use state::{NowPlaying, Notification, PlaybackState};
