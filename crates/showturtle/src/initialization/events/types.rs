// src/initialization/events/types.rs
use bevy::prelude::*;

// Events für den Lebenszyklus der Präsentation
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationStarted {
    pub tokens: usize,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationFinished {
    /// `false`, wenn vor dem Ende des Outros abgebrochen wurde.
    pub completed: bool,
}

/// Bricht den laufenden Ablauf ab (idempotent).
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct CancelPresentation;
