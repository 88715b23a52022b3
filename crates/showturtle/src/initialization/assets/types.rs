// src/initialization/assets/types.rs
use bevy::prelude::*;
use bevy_asset_loader::prelude::*;

/// Pfad relativ zum `assets/`-Ordner. Muss mit dem Attribut unten übereinstimmen.
pub const FONT_PATH: &str = "fonts/FiraMono-Medium.ttf";

/// Schrift für Text-Element und extrudierte Darstellung.
/// Der Ablauf startet erst, wenn sie geladen ist.
#[derive(AssetCollection, Resource)]
pub struct FontAssets {
    #[asset(path = "fonts/FiraMono-Medium.ttf")]
    pub glyphs: Handle<Font>,
}
