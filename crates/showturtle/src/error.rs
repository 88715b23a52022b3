// src/error.rs
use bevy::prelude::*;
use thiserror::Error;

/// Nicht behebbare Fehler der Präsentation. Es gibt keinen Retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresentationError {
    #[error("failed to load font asset '{path}'")]
    ResourceLoad { path: String },
    #[error("presentation target missing: {0}")]
    PresentationTargetMissing(String),
    #[error("render backend unavailable: {0}")]
    RenderInit(String),
}

/// Wird einmal gemeldet, geloggt und beendet die App.
#[derive(Event, Debug, Clone)]
pub struct FatalError(pub PresentationError);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_resource() {
        let error = PresentationError::ResourceLoad {
            path: "fonts/FiraMono-Medium.ttf".into(),
        };
        assert_eq!(
            error.to_string(),
            "failed to load font asset 'fonts/FiraMono-Medium.ttf'"
        );
        assert_eq!(
            PresentationError::PresentationTargetMissing("text display".into()).to_string(),
            "presentation target missing: text display"
        );
    }
}
