//! core/player/mod.rs
//! Command/event boundary to the playback engine.
//!
//! The UI never talks to a decoder directly; it sends `PlayerCommand`s into a
//! channel and reads `PlayerEvent`s out of another. What sits on the far side
//! is opaque — here it is the simulated engine in `engine.rs`, in a full
//! build it would be the libopenmpt-backed one.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use crate::core::types::{LoadedTrack, MetadataEntry};

mod engine;

pub use engine::SimulatedEngine;

/// Clonable handle the GUI stores to issue commands.
#[derive(Clone)]
pub struct PlayerHandle {
    command_tx: Sender<PlayerCommand>,
}

impl PlayerHandle {
    /// Best-effort send. If the engine died, the command is dropped; the UI
    /// reconciles via the next event (or the lack of one), never by retry.
    pub fn send(&self, cmd: PlayerCommand) {
        let _ = self.command_tx.send(cmd);
    }
}

#[derive(Debug, Clone)]
pub enum PlayerCommand {
    Load(PathBuf),
    Play,
    Pause,
    Stop,
    /// Target position in seconds.
    Seek(f64),
    Previous,
    Next,
    Shutdown,
}

/// Everything the engine reports back. Closed set; the broker forwards these
/// verbatim and never synthesizes or reorders them.
#[derive(Debug, Clone)]
pub enum PlayerEvent {
    Loaded {
        filename: String,
        filepath: String,
        metadata: Vec<MetadataEntry>,
        /// Seconds.
        duration: f64,
    },
    Playing,
    Paused,
    Stopped,
    PositionUpdated {
        position: f64,
        duration: f64,
    },
    /// Confirmation of a user-initiated seek. Unlike `PositionUpdated`, this
    /// one is applied unconditionally by the UI.
    Seeked {
        position: f64,
        duration: f64,
    },
}

impl PlayerEvent {
    /// Convenience for the `Loaded` payload.
    pub fn loaded(track: &LoadedTrack) -> Self {
        PlayerEvent::Loaded {
            filename: track.filename.clone(),
            filepath: track.filepath.clone(),
            metadata: track.metadata.clone(),
            duration: track.duration,
        }
    }
}

/// Spawns the engine thread and returns:
/// - `PlayerHandle` (store in GUI state)
/// - `Receiver<PlayerEvent>` (hand to the `EventBroker`)
pub fn start_player() -> (PlayerHandle, Receiver<PlayerEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

    thread::spawn(move || {
        let mut engine = SimulatedEngine::new(event_tx);
        engine.run(command_rx);
    });

    (PlayerHandle { command_tx }, event_rx)
}
