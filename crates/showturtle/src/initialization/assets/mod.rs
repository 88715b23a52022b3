// src/initialization/assets/mod.rs
pub mod plugin;
pub mod systems;
pub mod types;

// Export the main asset management plugin
pub use plugin::AssetManagementPlugin;

// Export types needed outside the assets module
pub use types::{FontAssets, FONT_PATH};
