use eframe::egui::Color32;
use egui_plot::MarkerShape;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::StationKind;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize, hue_offset: f32, lightness: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = hue_offset + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, lightness);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Marker icons
// ---------------------------------------------------------------------------

/// How every marker of one network is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerIcon {
    pub shape: MarkerShape,
    pub color: Color32,
    pub filled: bool,
}

const TEMPORARY_SHAPES: [MarkerShape; 4] = [
    MarkerShape::Diamond,
    MarkerShape::Square,
    MarkerShape::Up,
    MarkerShape::Down,
];

/// Two bounded icon palettes, one per station kind.
#[derive(Debug, Clone)]
pub struct IconPalette {
    permanent: Vec<MarkerIcon>,
    temporary: Vec<MarkerIcon>,
}

impl IconPalette {
    /// Build palettes of the given sizes. Sizes below one are raised to one.
    pub fn new(permanent_size: usize, temporary_size: usize) -> Self {
        let permanent = generate_palette(permanent_size.max(1), 0.0, 0.5)
            .into_iter()
            .map(|color| MarkerIcon {
                shape: MarkerShape::Circle,
                color,
                filled: true,
            })
            .collect();

        // Offset hues so a temporary network never shares a colour with the
        // permanent network drawn next to it.
        let temporary = generate_palette(temporary_size.max(1), 20.0, 0.4)
            .into_iter()
            .enumerate()
            .map(|(i, color)| MarkerIcon {
                shape: TEMPORARY_SHAPES[i % TEMPORARY_SHAPES.len()],
                color,
                filled: false,
            })
            .collect();

        Self {
            permanent,
            temporary,
        }
    }

    #[cfg(test)]
    pub fn size(&self, kind: StationKind) -> usize {
        self.icons(kind).len()
    }

    /// Icon for the `k`-th network of the given kind; wraps around.
    pub fn icon(&self, kind: StationKind, k: usize) -> MarkerIcon {
        let icons = self.icons(kind);
        icons[k % icons.len()]
    }

    fn icons(&self, kind: StationKind) -> &[MarkerIcon] {
        match kind {
            StationKind::Permanent => &self.permanent,
            StationKind::Temporary => &self.temporary,
        }
    }
}

impl Default for IconPalette {
    fn default() -> Self {
        Self::new(8, 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_sizes() {
        let palette = IconPalette::new(5, 3);
        assert_eq!(palette.size(StationKind::Permanent), 5);
        assert_eq!(palette.size(StationKind::Temporary), 3);
    }

    #[test]
    fn zero_size_is_raised_to_one() {
        let palette = IconPalette::new(0, 0);
        assert_eq!(palette.size(StationKind::Permanent), 1);
        assert_eq!(
            palette.icon(StationKind::Temporary, 7),
            palette.icon(StationKind::Temporary, 0)
        );
    }

    #[test]
    fn icons_wrap_around_palette() {
        let palette = IconPalette::new(4, 2);
        for k in 0..12 {
            assert_eq!(
                palette.icon(StationKind::Permanent, k),
                palette.icon(StationKind::Permanent, k % 4)
            );
        }
        assert_ne!(
            palette.icon(StationKind::Permanent, 0).color,
            palette.icon(StationKind::Permanent, 1).color
        );
    }

    #[test]
    fn kinds_are_drawn_differently() {
        let palette = IconPalette::default();
        let perm = palette.icon(StationKind::Permanent, 0);
        let temp = palette.icon(StationKind::Temporary, 0);
        assert!(perm.filled);
        assert!(!temp.filled);
        assert_ne!(perm.shape, temp.shape);
    }
}
