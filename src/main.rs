//! RetroPulse
//!
//! # What this program is
//! A desktop front end (built with the `iced` GUI library) for playing
//! tracker modules (.mod, .xm, .it, .s3m). The playback engine lives on its
//! own thread behind a command/event channel pair; the GUI renders either a
//! plain widget surface or the classic sprite-skinned shell.
//!
//! # How the pieces fit
//! - `core` is GUI-free: the engine boundary, the event broker, the skin
//!   engine, the drag-value math, config and shared types.
//! - `gui` composes them: `RetroPulse` state, `Message`, `update()`,
//!   `view()`, and a periodic tick subscription that pumps engine events
//!   through the broker.
//!
//! The app repeats this forever:
//! **Message happens -> update changes state -> view redraws**

mod core;
mod gui;

use iced::Size;

use crate::core::config::AppConfig;
use crate::gui::RetroPulse;
use crate::gui::view::layout::{WINDOW_H, WINDOW_W};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load_or_default();

    let window_size = if config.use_classic_skin {
        let scale = if config.double_size { 2.0 } else { 1.0 };
        Size::new(WINDOW_W * scale, WINDOW_H * scale)
    } else {
        Size::new(640.0, 360.0)
    };

    iced::application(
        move || RetroPulse::new(config.clone()),
        gui::update,
        gui::view,
    )
    .subscription(gui::subscription)
    .title(gui::title)
    .window_size(window_size)
    .run()
}
