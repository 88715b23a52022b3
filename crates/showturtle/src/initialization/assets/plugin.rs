// src/initialization/assets/plugin.rs
use bevy::prelude::*;
use bevy_asset_loader::prelude::*;

use super::{
    systems::{announce_font_loading, report_font_load_failure},
    types::FontAssets,
};
use crate::AppState;

/// Lädt die Schrift asynchron und schaltet danach in `Presenting`
/// (bei Fehler in `Failed`).
pub struct AssetManagementPlugin;

impl Plugin for AssetManagementPlugin {
    fn build(&self, app: &mut App) {
        app.add_loading_state(
            LoadingState::new(AppState::Loading)
                .continue_to_state(AppState::Presenting)
                .on_failure_continue_to_state(AppState::Failed)
                .load_collection::<FontAssets>(),
        )
        .add_systems(OnEnter(AppState::Loading), announce_font_loading)
        .add_systems(OnEnter(AppState::Failed), report_font_load_failure);
    }
}
