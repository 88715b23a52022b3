// src/initialization/state/types.rs
use bevy::prelude::*;

/// Definiert die Hauptzustände der Anwendung.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Loading, // Lädt die Schrift, noch keine Anzeige
    Presenting, // Sequencer läuft
    Finished,   // Outro beendet oder abgebrochen
    Failed,     // Asset konnte nicht geladen werden
}
