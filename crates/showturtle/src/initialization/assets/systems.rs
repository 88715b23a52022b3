// src/initialization/assets/systems.rs
use bevy::prelude::*;

use super::types::FONT_PATH;
use crate::error::{FatalError, PresentationError};

pub fn announce_font_loading() {
    info!("Requesting font '{}' ...", FONT_PATH);
}

pub fn report_font_load_failure(mut fatal: EventWriter<FatalError>) {
    fatal.send(FatalError(PresentationError::ResourceLoad {
        path: FONT_PATH.to_string(),
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialization::{EventPlugin, StatePlugin};
    use crate::AppState;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn failed_font_load_exits_with_error() {
        let mut app = App::new();
        app.add_plugins((StatesPlugin, StatePlugin, EventPlugin))
            .add_systems(OnEnter(AppState::Failed), report_font_load_failure);

        app.update();
        assert_eq!(app.should_exit(), None);

        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Failed);
        app.update();

        let fatal: Vec<PresentationError> = app
            .world_mut()
            .resource_mut::<Events<FatalError>>()
            .drain()
            .map(|FatalError(error)| error)
            .collect();
        assert_eq!(
            fatal,
            vec![PresentationError::ResourceLoad {
                path: FONT_PATH.to_string()
            }]
        );
        assert!(matches!(app.should_exit(), Some(AppExit::Error(_))));
    }
}
