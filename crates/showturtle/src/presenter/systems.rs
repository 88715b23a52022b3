// src/presenter/systems.rs
use bevy::color::Alpha;
use bevy::prelude::*;

use super::layout::layout_glyph_slabs;
use super::types::{DisplayCommand, DisplayMode, TextDisplay, TextDisplayRoot, TextMesh};
use crate::config::PresentationConfig;
use crate::error::{FatalError, PresentationError};
use crate::initialization::FontAssets;
use crate::tokens::Token;

// Startup-System: vollflächiger Container mit zentriertem, zunächst leerem Text
pub fn spawn_text_display(mut commands: Commands, config: Res<PresentationConfig>) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            TextDisplayRoot,
            Name::new("Text Display Root"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: config.font_size,
                    ..default()
                },
                TextLayout::new_with_justify(JustifyText::Center),
                TextColor(config.text_color),
                Visibility::Hidden,
                TextDisplay,
                Label,
                Name::new("Text Display"),
            ));
        });
    info!("Spawned text display.");
}

// Sobald die Schrift geladen ist, nutzt auch das flache Element sie
pub fn apply_loaded_font(
    fonts: Option<Res<FontAssets>>,
    mut display: Query<&mut TextFont, With<TextDisplay>>,
) {
    let Some(fonts) = fonts else {
        return;
    };
    for mut text_font in &mut display {
        text_font.font = fonts.glyphs.clone();
    }
    debug!("Font applied to text display.");
}

/// Einziger Schreiber des flachen Text-Elements.
pub fn apply_display_commands(
    mut display_commands: EventReader<DisplayCommand>,
    mut display: Query<(&mut Text, &mut TextColor, &mut Visibility), With<TextDisplay>>,
    fonts: Option<Res<FontAssets>>,
    mut fatal: EventWriter<FatalError>,
) {
    if display_commands.is_empty() {
        return;
    }

    let Ok((mut text, mut color, mut visibility)) = display.get_single_mut() else {
        display_commands.clear();
        fatal.send(FatalError(PresentationError::PresentationTargetMissing(
            "text display".into(),
        )));
        return;
    };

    let extruded_available = fonts.is_some();
    for command in display_commands.read() {
        apply_to_flat(
            command,
            extruded_available,
            &mut text,
            &mut color,
            &mut visibility,
        );
    }
}

pub(crate) fn apply_to_flat(
    command: &DisplayCommand,
    extruded_available: bool,
    text: &mut Text,
    color: &mut TextColor,
    visibility: &mut Visibility,
) {
    match command {
        // 3D übernimmt, das Overlay wird versteckt
        DisplayCommand::Present {
            mode: DisplayMode::Extruded,
            ..
        } if extruded_available => *visibility = Visibility::Hidden,
        DisplayCommand::Present { token, .. } => {
            text.0 = token.to_string();
            *visibility = Visibility::Visible;
        }
        DisplayCommand::SetOpacity(opacity) => color.0 = color.0.with_alpha(opacity.alpha()),
        DisplayCommand::Hide => *visibility = Visibility::Hidden,
    }
}

/// Entfernt bei jedem `Present` die bisherige 3D-Schrift und baut sie für
/// `Extruded` neu auf (nur mit geladener Schrift).
pub fn apply_extruded_commands(
    mut commands: Commands,
    mut display_commands: EventReader<DisplayCommand>,
    existing: Query<Entity, With<TextMesh>>,
    fonts: Option<Res<FontAssets>>,
    config: Res<PresentationConfig>,
    mut meshes: Option<ResMut<Assets<Mesh>>>,
    mut materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    let mut live: Vec<Entity> = existing.iter().collect();

    for command in display_commands.read() {
        let DisplayCommand::Present { token, mode } = command else {
            continue;
        };

        for entity in live.drain(..) {
            commands.entity(entity).despawn_recursive();
        }

        if *mode != DisplayMode::Extruded || fonts.is_none() {
            continue;
        }
        let (Some(meshes), Some(materials)) = (meshes.as_deref_mut(), materials.as_deref_mut())
        else {
            warn!("Mesh assets unavailable, cannot build 3D text for '{token}'");
            continue;
        };

        live.push(spawn_text_mesh(
            &mut commands,
            token,
            &config,
            meshes,
            materials,
        ));
    }
}

fn spawn_text_mesh(
    commands: &mut Commands,
    token: &Token,
    config: &PresentationConfig,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) -> Entity {
    let slabs = layout_glyph_slabs(token.as_str(), &config.glyphs);
    let material = materials.add(StandardMaterial {
        base_color: config.text_color,
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            TextMesh,
            Transform::default(),
            Visibility::default(),
            Name::new(format!("Text Mesh '{token}'")),
        ))
        .with_children(|parent| {
            for slab in &slabs {
                parent.spawn((
                    Mesh3d(meshes.add(Cuboid::from_size(slab.extent))),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(slab.center),
                ));
            }
        })
        .id()
}
