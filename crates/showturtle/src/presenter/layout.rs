// src/presenter/layout.rs
//! Block-Geometrie für die extrudierte Darstellung.
//!
//! Jede Glyphe wird als Quader in einer festen Zelle dargestellt. Die
//! Fasen-Parameter vergrößern den Quader nur (keine echte Abschrägung).
//! Das Ergebnis wird wie bei einer Text-Geometrie über die Bounding Box
//! zentriert.
use bevy::prelude::*;

/// Parameter der extrudierten Schrift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphParams {
    pub size: f32,
    pub depth: f32,
    pub bevel_thickness: f32,
    pub bevel_size: f32,
    /// Vorschub pro Zeichen relativ zu `size`.
    pub advance: f32,
    /// Breite einer Glyphe relativ zu `size`.
    pub glyph_width: f32,
}

impl Default for GlyphParams {
    fn default() -> Self {
        Self {
            size: 2.0,
            depth: 0.5,
            bevel_thickness: 0.1,
            bevel_size: 0.05,
            advance: 0.7,
            glyph_width: 0.6,
        }
    }
}

impl GlyphParams {
    fn cell_extent(&self) -> Vec3 {
        Vec3::new(
            self.size * self.glyph_width + 2.0 * self.bevel_size,
            self.size + 2.0 * self.bevel_size,
            self.depth + 2.0 * self.bevel_thickness,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphSlab {
    pub center: Vec3,
    pub extent: Vec3,
}

impl GlyphSlab {
    pub fn min(&self) -> Vec3 {
        self.center - self.extent * 0.5
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.extent * 0.5
    }
}

/// Legt einen Quader pro sichtbarem Zeichen an. Leerzeichen verbrauchen
/// nur Vorschub.
pub fn layout_glyph_slabs(text: &str, params: &GlyphParams) -> Vec<GlyphSlab> {
    let extent = params.cell_extent();
    let step = params.size * params.advance;

    let mut slabs: Vec<GlyphSlab> = text
        .chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| GlyphSlab {
            center: Vec3::new(i as f32 * step, 0.0, 0.0) + extent * 0.5,
            extent,
        })
        .collect();

    let Some((min, max)) = bounding_box(&slabs) else {
        return slabs;
    };

    // Zentrieren über die halbe Ausdehnung (x/y), z bleibt
    let offset = Vec3::new(-0.5 * (max.x - min.x), -0.5 * (max.y - min.y), 0.0);
    for slab in &mut slabs {
        slab.center += offset;
    }
    slabs
}

pub fn bounding_box(slabs: &[GlyphSlab]) -> Option<(Vec3, Vec3)> {
    let first = slabs.first()?;
    Some(
        slabs
            .iter()
            .skip(1)
            .fold((first.min(), first.max()), |(min, max), slab| {
                (min.min(slab.min()), max.max(slab.max()))
            }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn one_slab_per_visible_glyph() {
        let slabs = layout_glyph_slabs("GO TO", &GlyphParams::default());
        assert_eq!(slabs.len(), 4);
    }

    #[test]
    fn layout_is_centered_on_xy() {
        let params = GlyphParams::default();
        for text in ["GO", "SHOWTURTLE", "FD 100", "X"] {
            let slabs = layout_glyph_slabs(text, &params);
            let (min, max) = bounding_box(&slabs).expect("non-empty");
            assert!((min.x + max.x).abs() < EPS, "{text}: x {min} {max}");
            assert!((min.y + max.y).abs() < EPS, "{text}: y {min} {max}");
        }
    }

    #[test]
    fn depth_includes_bevel() {
        let params = GlyphParams::default();
        let slabs = layout_glyph_slabs("GO", &params);
        let (min, max) = bounding_box(&slabs).expect("non-empty");
        assert!((min.z).abs() < EPS);
        assert!((max.z - 0.7).abs() < EPS);
    }

    #[test]
    fn whitespace_only_has_no_geometry() {
        assert!(layout_glyph_slabs("   ", &GlyphParams::default()).is_empty());
        assert!(layout_glyph_slabs("", &GlyphParams::default()).is_empty());
    }
}
