// src/presenter/plugin.rs
use bevy::prelude::*;

use super::systems::{
    apply_display_commands, apply_extruded_commands, apply_loaded_font, spawn_text_display,
};
use super::types::{DisplayCommand, TextMesh};
use crate::config::PresentationConfig;
use crate::error::FatalError;
use crate::utils::cleanup;
use crate::{AppState, PresentationSystemSet};

/// Text-Element, 3D-Schrift und die Anwendung aller `DisplayCommand`s.
pub struct PresenterPlugin;

impl Plugin for PresenterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PresentationConfig>()
            .add_event::<DisplayCommand>()
            .add_event::<FatalError>()
            .add_systems(Startup, spawn_text_display)
            .add_systems(OnEnter(AppState::Presenting), apply_loaded_font)
            .add_systems(
                Update,
                (apply_display_commands, apply_extruded_commands)
                    .chain()
                    .in_set(PresentationSystemSet::Display),
            )
            .add_systems(OnEnter(AppState::Finished), cleanup::<TextMesh>);
    }
}
