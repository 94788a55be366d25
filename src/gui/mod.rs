//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('RetroPulse') and messages ('Message')
//! - the broker-fed view model ('model')
//! - update logic ('update()')
//! - the two surfaces ('view()': modern widgets or the skinned canvas)
//! - subscriptions (polling playback events)
//! - small UI helpers ('util')

pub(crate) mod model;
pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod util;
pub(crate) mod view;

// Re-export the entry points main.rs needs.
pub(crate) use state::RetroPulse;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;

/// Window title follows the loaded track.
pub(crate) fn title(state: &RetroPulse) -> String {
    state.model.borrow().display_title()
}
