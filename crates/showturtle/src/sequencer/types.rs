// src/sequencer/types.rs
use std::time::Duration;

use strum::Display;

use super::delay::DelayCurve;
use crate::tokens::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Phase {
    #[default]
    Intro,
    Cycling,
    Outro,
}

/// Unterzustände des Outros (Halten, Blinken, Ausblenden).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutroStage {
    /// Outro-Begriff steht, Wartezeit vor dem Blinken.
    Hold,
    /// Ausgeblendet; `flashes` = bisher abgeschlossene Blinkzyklen.
    Dimmed { flashes: u8 },
    /// Wieder sichtbar nach `flashes` Zyklen.
    Lit { flashes: u8 },
    FinalHold,
    Done,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequencerState {
    pub current_index: usize,
    pub phase: Phase,
    pub outro: Option<OutroStage>,
    pub cancelled: bool,
}

/// Feste Zeiten und Begriffe des Ablaufs.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceTiming {
    pub intro_token: Token,
    pub outro_token: Token,
    pub intro_hold: Duration,
    /// Anzahl der Durchläufe über den gemischten Pool.
    pub passes: usize,
    pub outro_hold: Duration,
    pub flash_interval: Duration,
    pub flash_count: u8,
    pub final_hold: Duration,
    pub curve: DelayCurve,
}

impl Default for SequenceTiming {
    fn default() -> Self {
        Self {
            intro_token: Token::from("GO"),
            outro_token: Token::from("SHOWTURTLE"),
            intro_hold: Duration::from_millis(2000),
            passes: 2,
            outro_hold: Duration::from_millis(1000),
            flash_interval: Duration::from_millis(300),
            flash_count: 5,
            final_hold: Duration::from_millis(1000),
            curve: DelayCurve::default(),
        }
    }
}
