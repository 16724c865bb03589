//! Video Player - in-memory video catalog and playback simulator
//!
//! This library models a fixed catalog of videos, a single "now playing"
//! slot with play/pause/stop/continue semantics, and a set of named
//! playlists whose names are matched case-insensitively.

pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod playback;
pub mod player;
pub mod playlists;
pub mod render;

pub use command::Command;
pub use config::PlayerConfig;
pub use error::{InvalidState, PlayerError, Result};
pub use player::VideoPlayer;
