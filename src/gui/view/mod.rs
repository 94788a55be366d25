//! GUI renderer (reads state, produces widgets; no mutation).

pub(crate) mod layout;
mod modern;
pub(crate) mod skinned;

use iced::Element;

use super::state::{Message, RetroPulse, Surface};

pub(crate) fn view(state: &RetroPulse) -> Element<'_, Message> {
    match state.surface() {
        Surface::Modern => modern::view(state),
        Surface::Skinned => skinned::view(state),
    }
}
