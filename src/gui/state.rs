//! gui/state.rs
//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use iced::Point;
use iced::widget::image;

use crate::core::broker::{EventBroker, SubscriptionId};
use crate::core::config::AppConfig;
use crate::core::drag::{DragController, ScaleFactor};
use crate::core::player::{PlayerCommand, PlayerHandle, start_player};
use crate::core::skin::{SymbolTable, load_atlas, load_skin};

use super::model::PlayerModel;

/// Poll/animation tick interval (also the marquee redraw rate).
pub(crate) const TICK_MS: u64 = 100;

/// A loaded skin: the symbol table plus one iced image handle per sprite,
/// cropped out of the atlas once at load time.
pub(crate) struct Skin {
    pub table: SymbolTable,
    handles: HashMap<String, image::Handle>,
}

impl Skin {
    pub fn new(table: SymbolTable) -> Self {
        let handles = table
            .names()
            .filter_map(|name| {
                let entry = table.get(name)?;
                Some((
                    name.to_string(),
                    image::Handle::from_rgba(
                        entry.width,
                        entry.height,
                        entry.rgba.as_raw().clone(),
                    ),
                ))
            })
            .collect();

        Self { table, handles }
    }

    pub fn handle(&self, name: &str) -> Option<&image::Handle> {
        self.handles.get(name)
    }
}

/// Which surface the window presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Surface {
    Modern,
    Skinned,
}

/// Elapsed vs remaining time in the skinned time display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum TimeMode {
    #[default]
    Elapsed,
    Remaining,
}

/// Which skinned slider a pointer drag currently owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActiveSlider {
    Seek,
    Volume,
    Balance,
}

/// App state.
pub(crate) struct RetroPulse {
    pub config: AppConfig,

    // Engine boundary
    pub player: Option<PlayerHandle>,
    pub broker: EventBroker,

    // The broker subscriber both surfaces render from.
    pub model: Rc<RefCell<PlayerModel>>,
    pub model_subscription: Option<SubscriptionId>,

    pub skin: Option<Skin>,
    pub status: String,

    // Modern surface
    pub path_input: String,

    // Surface-local controls (never sent to the engine; see DESIGN.md)
    pub volume: f64,
    /// [-1, 1], 0 = center.
    pub balance: f64,
    pub shuffle: bool,
    pub repeat: bool,
    pub equalizer: bool,
    pub playlist: bool,
    pub time_mode: TimeMode,

    // Skinned pointer interaction
    pub volume_drag: DragController,
    pub balance_drag: DragController,
    pub active_slider: Option<ActiveSlider>,

    /// Animation clock, advanced by Tick; drives the marquee.
    pub anim_seconds: f32,
}

impl RetroPulse {
    /// Boot: spawn the engine, wire the broker, subscribe the view model,
    /// load the skin if configured.
    pub fn new(config: AppConfig) -> Self {
        let (player, events) = start_player();
        let mut state = Self::with_parts(config, Some(player), EventBroker::new(events));

        if state.config.use_classic_skin {
            state.skin = state.load_configured_skin();
            if state.skin.is_none() {
                log::warn!("classic skin unavailable, falling back to the modern surface");
            }
        }

        state
    }

    /// State without an engine or upstream stream. Used by tests.
    #[cfg(test)]
    pub fn detached(config: AppConfig) -> Self {
        Self::with_parts(config, None, EventBroker::detached())
    }

    fn with_parts(config: AppConfig, player: Option<PlayerHandle>, broker: EventBroker) -> Self {
        let model = Rc::new(RefCell::new(PlayerModel::default()));

        // The one surface subscription; dropped again in Drop.
        let model_subscription = {
            let model = Rc::clone(&model);
            Some(broker.subscribe(move |event| model.borrow_mut().apply(event)))
        };

        Self {
            config,
            player,
            broker,
            model,
            model_subscription,
            skin: None,
            status: "Enter a module path, then Load.".to_string(),
            path_input: String::new(),
            volume: 0.8,
            balance: 0.0,
            shuffle: false,
            repeat: false,
            equalizer: false,
            playlist: false,
            time_mode: TimeMode::default(),
            volume_drag: DragController::default(),
            balance_drag: DragController::default(),
            active_slider: None,
            anim_seconds: 0.0,
        }
    }

    fn load_configured_skin(&self) -> Option<Skin> {
        let path = self.config.skin_path.as_ref()?;
        match load_atlas(path) {
            Ok(atlas) => Some(Skin::new(load_skin(&atlas))),
            Err(err) => {
                log::warn!("failed to load skin from {}: {err}", path.display());
                None
            }
        }
    }

    pub fn surface(&self) -> Surface {
        if self.config.use_classic_skin && self.skin.is_some() {
            Surface::Skinned
        } else {
            Surface::Modern
        }
    }

    pub fn scale(&self) -> ScaleFactor {
        if self.config.double_size {
            ScaleFactor(2.0)
        } else {
            ScaleFactor(1.0)
        }
    }
}

impl Drop for RetroPulse {
    fn drop(&mut self) {
        if let Some(id) = self.model_subscription.take() {
            self.broker.unsubscribe(id);
        }
        if let Some(player) = &self.player {
            player.send(PlayerCommand::Shutdown);
        }
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    /// Periodic poll: drain player events, advance animations.
    Tick,

    // Modern surface
    PathInputChanged(String),
    LoadPressed,

    // Transport (both surfaces)
    PlayPressed,
    PausePressed,
    StopPressed,
    PrevPressed,
    NextPressed,

    // Seek: preview vs commit (modern slider)
    SeekPreview(f64),
    SeekCommitted,

    VolumeChanged(f64),

    // Toggles (modern checkboxes; the skinned surface flips these directly)
    ShuffleToggled(bool),
    RepeatToggled(bool),
    DoubleSizeToggled(bool),

    // Skinned pointer stream, already converted to skin space
    SkinPressed(Point),
    SkinMoved(Point),
    SkinReleased(Point),
}
