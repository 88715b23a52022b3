// src/initialization/state/mod.rs
pub mod plugin;
pub mod types;

pub use plugin::StatePlugin;
pub use types::AppState;
