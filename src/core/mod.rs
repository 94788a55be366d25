//! core/mod.rs
//!
//! Everything below `core` is GUI-free:
//! - the command/event boundary to the playback engine (`player`)
//! - the event fan-out hub (`broker`)
//! - the sprite atlas model + skin engine (`skin`)
//! - the drag-value control math (`drag`)
//! - configuration and shared plain types
//!
//! The GUI composes these; none of them import iced.

pub mod broker;
pub mod config;
pub mod drag;
pub mod player;
pub mod skin;
pub mod types;
