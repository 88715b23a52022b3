// src/config.rs
use bevy::prelude::*;

use crate::presenter::GlyphParams;
use crate::sequencer::SequenceTiming;

/// Zentrale, fest verdrahtete Einstellungen der Präsentation.
#[derive(Resource, Debug, Clone)]
pub struct PresentationConfig {
    pub window_title: String,
    /// Schriftgröße des flachen Text-Elements (px).
    pub font_size: f32,
    pub text_color: Color,
    pub timing: SequenceTiming,
    pub glyphs: GlyphParams,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            window_title: "SHOWTURTLE".into(),
            font_size: 96.0,
            text_color: Color::WHITE,
            timing: SequenceTiming::default(),
            glyphs: GlyphParams::default(),
        }
    }
}
