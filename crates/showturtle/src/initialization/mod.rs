// src/initialization/mod.rs

// Declare sub-modules
mod assets;
mod core;
mod events;
mod plugin;
mod state;

// --- Public Exports ---

// The main plugin for this module
pub use plugin::InitializationPlugin;

// Teil-Plugins, einzeln nutzbar (z.B. für Headless-Tests ohne Fenster)
pub use events::EventPlugin;
pub use state::StatePlugin;

// Important types and resources needed outside the module
pub use assets::types::{FontAssets, FONT_PATH};
pub use self::core::systems::{aspect_ratio, PresentationCamera};
pub use events::types::{CancelPresentation, PresentationFinished, PresentationStarted};
pub use state::types::AppState;
