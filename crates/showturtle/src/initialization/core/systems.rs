// src/initialization/core/systems.rs
use bevy::prelude::*;
use bevy::render::renderer::RenderAdapterInfo;
use bevy::window::WindowResized;

use crate::error::{FatalError, PresentationError};

/// Marker für die einzige Szenen-Kamera.
#[derive(Component)]
pub struct PresentationCamera;

// Startup-System: 3D-Kamera, die auch das UI-Overlay rendert
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, 15.0).looking_at(Vec3::ZERO, Vec3::Y),
        // Diese Komponente ist wichtig, damit die UI weiß, welche Kamera sie verwenden soll!
        IsDefaultUiCamera,
        PresentationCamera,
        Name::new("Presentation Camera"),
    ));
    info!("Spawned presentation camera.");
}

pub fn verify_render_backend(
    adapter: Option<Res<RenderAdapterInfo>>,
    mut fatal: EventWriter<FatalError>,
) {
    match adapter {
        Some(adapter) => {
            info!("Render backend: {} ({:?})", adapter.name, adapter.backend);
        }
        None => {
            fatal.send(FatalError(PresentationError::RenderInit(
                "no render adapter available".into(),
            )));
        }
    }
}

/// Seitenverhältnis für die Kamera; `None` bei degenerierter Fenstergröße.
pub fn aspect_ratio(width: f32, height: f32) -> Option<f32> {
    (width > 0.0 && height > 0.0).then(|| width / height)
}

// Resize: nur das letzte Event im Frame zählt
pub fn sync_camera_aspect(
    mut resized: EventReader<WindowResized>,
    mut cameras: Query<&mut Projection, With<PresentationCamera>>,
) {
    let Some(event) = resized.read().last() else {
        return;
    };
    let Some(aspect) = aspect_ratio(event.width, event.height) else {
        debug!("Ignoring resize to {}x{}", event.width, event.height);
        return;
    };

    for mut projection in &mut cameras {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect;
        }
    }
}
