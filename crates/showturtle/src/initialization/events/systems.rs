// src/initialization/events/systems.rs
use super::{PresentationFinished, PresentationStarted};
use crate::error::FatalError;
use bevy::prelude::*;

pub fn log_presentation_started(mut started: EventReader<PresentationStarted>) {
    for event in started.read() {
        info!("Presentation started with {} tokens", event.tokens);
    }
}

pub fn log_presentation_finished(mut finished: EventReader<PresentationFinished>) {
    for event in finished.read() {
        if event.completed {
            info!("Presentation finished");
        } else {
            info!("Presentation cancelled before the outro completed");
        }
    }
}

// Fatale Fehler: loggen und die App genau einmal beenden
pub fn report_fatal_errors(
    mut errors: EventReader<FatalError>,
    mut exit: EventWriter<AppExit>,
    mut exit_requested: Local<bool>,
) {
    for FatalError(error) in errors.read() {
        error!("Fatal: {error}");
        if !*exit_requested {
            exit.send(AppExit::error());
            *exit_requested = true;
        }
    }
}
