// src/lib.rs

// Top-Level Module für Features
pub mod config;
pub mod error;
pub mod initialization;
pub mod presenter;
pub mod sequencer;
pub mod tokens;
mod utils;

// Zufall: feste Seeds nur zum Debuggen, sonst System-Entropie
pub const FIXED_SEED: u64 = 1234567890;
pub const USE_FIXED_SEED: bool = false;

use bevy::prelude::*;

use config::PresentationConfig;
use initialization::InitializationPlugin;
use presenter::PresenterPlugin;
use sequencer::SequencerPlugin;

pub use error::{FatalError, PresentationError};
pub use initialization::AppState;

// System Sets: erst Ablauf, dann Anzeige
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum PresentationSystemSet {
    Sequence, // sequencer::systems::drive_sequencer
    Display,  // presenter::systems::apply_display_commands
}

/// Bündelt alle Plugins der Präsentation.
pub struct ShowturtlePlugin;

impl Plugin for ShowturtlePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PresentationConfig>().add_plugins((
            InitializationPlugin,
            PresenterPlugin,
            SequencerPlugin,
        ));
    }
}
