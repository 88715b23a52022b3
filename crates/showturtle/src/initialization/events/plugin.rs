// src/initialization/events/plugin.rs
use super::{
    systems::{log_presentation_finished, log_presentation_started, report_fatal_errors},
    {CancelPresentation, PresentationFinished, PresentationStarted},
};
use crate::error::FatalError;
use bevy::prelude::*;

/// Plugin zum Registrieren von Events.
pub struct EventPlugin;

impl Plugin for EventPlugin {
    fn build(&self, app: &mut App) {
        app // Register events
            .add_event::<PresentationStarted>()
            .add_event::<PresentationFinished>()
            .add_event::<CancelPresentation>()
            .add_event::<FatalError>()
            // Add systems
            .add_systems(
                Update,
                (
                    log_presentation_started,
                    log_presentation_finished,
                    report_fatal_errors,
                ),
            );
    }
}
