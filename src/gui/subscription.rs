//! gui/subscription.rs
//! Poll the playback engine by emitting a periodic Tick message.

use iced::{Subscription, time};
use std::time::Duration;

use super::state::{Message, RetroPulse, TICK_MS};

pub(crate) fn subscription(state: &RetroPulse) -> Subscription<Message> {
    if state.player.is_none() {
        return Subscription::none();
    }

    time::every(Duration::from_millis(TICK_MS)).map(|_| Message::Tick)
}
