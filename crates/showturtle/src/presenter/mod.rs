// src/presenter/mod.rs
pub mod layout;
pub mod plugin;
pub mod systems;
pub mod types;

pub use layout::{layout_glyph_slabs, GlyphParams, GlyphSlab};
pub use plugin::PresenterPlugin;
pub use types::{
    DisplayCommand, DisplayMode, DisplaySink, Opacity, TextDisplay, TextDisplayRoot, TextMesh,
};
