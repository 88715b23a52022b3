// src/initialization/core/plugin.rs
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy_rand::prelude::{EntropyPlugin, WyRand};

use crate::config::PresentationConfig;
use crate::{FIXED_SEED, USE_FIXED_SEED};

use super::systems::{setup_camera, sync_camera_aspect, verify_render_backend};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let title = app
            .world()
            .get_resource::<PresentationConfig>()
            .map(|config| config.window_title.clone())
            .unwrap_or_else(|| PresentationConfig::default().window_title);

        app.add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn,bevy_render=info,bevy_app=info".to_string(),
                    ..default()
                }),
        );

        // --- bevy_rand Plugin hinzufügen ---
        if USE_FIXED_SEED {
            app.add_plugins(EntropyPlugin::<WyRand>::with_seed(FIXED_SEED.to_le_bytes()));
            info!("Using fixed RNG seed: {}", FIXED_SEED);
        } else {
            app.add_plugins(EntropyPlugin::<WyRand>::default());
            info!("Using system entropy for RNG seed.");
        }

        // Schwarzer Hintergrund, perspektivische Kamera, Resize-Handler
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, (setup_camera, verify_render_backend))
            .add_systems(Update, sync_camera_aspect);
    }
}
