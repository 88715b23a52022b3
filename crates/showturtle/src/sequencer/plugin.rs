// src/sequencer/plugin.rs
use bevy::prelude::*;

use super::machine::Sequencer;
use super::systems::{
    drive_sequencer, finish_presentation, handle_cancel_requests, request_cancel_on_escape,
    start_presentation,
};
use crate::config::PresentationConfig;
use crate::initialization::{CancelPresentation, PresentationFinished, PresentationStarted};
use crate::presenter::DisplayCommand;
use crate::tokens::TokenPool;
use crate::utils::remove;
use crate::{AppState, PresentationSystemSet};

/// Mischt den Pool und steuert Intro, Durchlauf und Outro.
pub struct SequencerPlugin;

impl Plugin for SequencerPlugin {
    fn build(&self, app: &mut App) {
        // Pool wird einmalig beim Aufbau erzeugt (sofern nicht schon vorhanden)
        app.init_resource::<TokenPool>()
            .init_resource::<PresentationConfig>()
            .add_event::<DisplayCommand>()
            .add_event::<PresentationStarted>()
            .add_event::<PresentationFinished>()
            .add_event::<CancelPresentation>()
            .configure_sets(
                Update,
                (PresentationSystemSet::Sequence, PresentationSystemSet::Display).chain(),
            )
            .add_systems(OnEnter(AppState::Presenting), start_presentation)
            .add_systems(
                Update,
                (
                    request_cancel_on_escape,
                    handle_cancel_requests,
                    drive_sequencer,
                )
                    .chain()
                    .in_set(PresentationSystemSet::Sequence)
                    .run_if(in_state(AppState::Presenting))
                    .run_if(resource_exists::<Sequencer>),
            )
            .add_systems(
                OnExit(AppState::Presenting),
                (finish_presentation, remove::<Sequencer>).chain(),
            );
    }
}
