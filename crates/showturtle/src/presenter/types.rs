// src/presenter/types.rs
use bevy::prelude::*;

use crate::tokens::Token;

/// Darstellungsart eines Begriffs.
///
/// Der Sequencer nutzt ausschließlich `Flat`. `Extruded` bleibt als
/// Fähigkeit erhalten und wird nur über ein explizites `DisplayCommand` erreicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Flat,
    Extruded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opacity {
    Hidden,
    Visible,
}

impl Opacity {
    pub fn alpha(self) -> f32 {
        match self {
            Opacity::Hidden => 0.0,
            Opacity::Visible => 1.0,
        }
    }
}

/// Einziger Kanal, über den das Text-Element verändert wird.
#[derive(Event, Debug, Clone, PartialEq)]
pub enum DisplayCommand {
    Present { token: Token, mode: DisplayMode },
    SetOpacity(Opacity),
    Hide,
}

impl DisplayCommand {
    pub fn flat(token: impl Into<Token>) -> Self {
        DisplayCommand::Present {
            token: token.into(),
            mode: DisplayMode::Flat,
        }
    }
}

/// Empfänger für Anzeigebefehle (Event-Queue zur Laufzeit, `Vec` in Tests).
pub trait DisplaySink {
    fn submit(&mut self, command: DisplayCommand);
}

impl DisplaySink for Vec<DisplayCommand> {
    fn submit(&mut self, command: DisplayCommand) {
        self.push(command);
    }
}

impl DisplaySink for EventWriter<'_, DisplayCommand> {
    fn submit(&mut self, command: DisplayCommand) {
        self.send(command);
    }
}

// --- Marker Components ---

/// Das flache Text-Element (Overlay).
#[derive(Component)]
pub struct TextDisplay;

/// Vollflächiger Container, der den Text zentriert.
#[derive(Component)]
pub struct TextDisplayRoot;

/// Wurzel der extrudierten 3D-Schrift.
#[derive(Component)]
pub struct TextMesh;
