// src/initialization/plugin.rs
use bevy::prelude::*;

// Import the main plugin from each sub-module
use super::{
    assets::plugin::AssetManagementPlugin, // Import from assets/plugin.rs
    core::plugin::CorePlugin,              // Import from core/plugin.rs
    events::plugin::EventPlugin,           // Import from events/plugin.rs
    state::plugin::StatePlugin,            // Import from state/plugin.rs
};

pub struct InitializationPlugin;

impl Plugin for InitializationPlugin {
    fn build(&self, app: &mut App) {
        // Reihenfolge wichtig: State muss vor dem LoadingState existieren
        app.add_plugins((CorePlugin, StatePlugin, EventPlugin, AssetManagementPlugin));
    }
}
