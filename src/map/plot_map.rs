use eframe::egui::Pos2;

use super::{InfoContent, MapSurface, MarkerId};
use crate::data::model::Position;
use crate::icon::MarkerIcon;

// ---------------------------------------------------------------------------
// PlotMap – markers kept for drawing on an egui_plot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct PlacedMarker {
    position: Position,
    /// Index into `PlotMap::layers`.
    layer: usize,
    visible: bool,
}

/// An open info popup.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoPopup {
    pub anchor: MarkerId,
    pub content: InfoContent,
}

/// Visible markers sharing one icon, as `[lng, lat]` plot points.
#[derive(Debug, Clone)]
pub struct MarkerLayer {
    pub icon: MarkerIcon,
    pub points: Vec<[f64; 2]>,
}

/// [`MapSurface`] backed by an egui_plot scatter plot (x = longitude,
/// y = latitude). Rendering lives in `ui::map_view`.
#[derive(Debug, Clone, Default)]
pub struct PlotMap {
    markers: Vec<PlacedMarker>,
    /// Distinct icons in first-use order; one plot series each.
    layers: Vec<MarkerIcon>,
    popup: Option<InfoPopup>,
}

impl PlotMap {
    #[cfg(test)]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn popup(&self) -> Option<&InfoPopup> {
        self.popup.as_ref()
    }

    /// Visible markers grouped by icon. Empty layers are left out.
    pub fn visible_layers(&self) -> Vec<MarkerLayer> {
        let mut layers: Vec<MarkerLayer> = self
            .layers
            .iter()
            .map(|&icon| MarkerLayer {
                icon,
                points: Vec::new(),
            })
            .collect();

        for marker in self.markers.iter().filter(|m| m.visible) {
            layers[marker.layer]
                .points
                .push([marker.position.lng, marker.position.lat]);
        }

        layers.retain(|l| !l.points.is_empty());
        layers
    }

    /// Nearest visible marker within `radius` screen pixels of `pointer`.
    /// `to_screen` projects a marker position into screen space.
    pub fn pick(
        &self,
        pointer: Pos2,
        radius: f32,
        to_screen: impl Fn(Position) -> Pos2,
    ) -> Option<MarkerId> {
        self.markers
            .iter()
            .enumerate()
            .filter(|(_, m)| m.visible)
            .map(|(i, m)| (i, to_screen(m.position).distance(pointer)))
            .filter(|&(_, d)| d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| MarkerId(i))
    }

    fn layer_for(&mut self, icon: MarkerIcon) -> usize {
        match self.layers.iter().position(|&l| l == icon) {
            Some(i) => i,
            None => {
                self.layers.push(icon);
                self.layers.len() - 1
            }
        }
    }
}

impl MapSurface for PlotMap {
    fn place_marker(&mut self, position: Position, icon: MarkerIcon) -> MarkerId {
        let layer = self.layer_for(icon);
        self.markers.push(PlacedMarker {
            position,
            layer,
            visible: true,
        });
        MarkerId(self.markers.len() - 1)
    }

    fn set_marker_visible(&mut self, marker: MarkerId, visible: bool) {
        let Some(placed) = self.markers.get_mut(marker.0) else {
            log::warn!("Visibility change for unknown marker {marker:?}");
            return;
        };
        placed.visible = visible;

        // A hidden marker takes its popup with it.
        if !visible && self.popup.as_ref().is_some_and(|p| p.anchor == marker) {
            self.popup = None;
        }
    }

    fn open_info_popup(&mut self, content: InfoContent, anchor: MarkerId) {
        if anchor.0 >= self.markers.len() {
            log::warn!("Popup requested for unknown marker {anchor:?}");
            return;
        }
        self.popup = Some(InfoPopup { anchor, content });
    }

    fn close_info_popup(&mut self) {
        self.popup = None;
    }

    fn clear(&mut self) {
        self.markers.clear();
        self.layers.clear();
        self.popup = None;
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use super::*;
    use crate::data::model::StationKind;
    use crate::icon::IconPalette;

    fn content() -> InfoContent {
        InfoContent {
            title: "t".into(),
            image: None,
            fields: Vec::new(),
            links: Vec::new(),
        }
    }

    /// One plot unit per pixel, y flipped like a screen.
    fn to_screen(p: Position) -> Pos2 {
        pos2(p.lng as f32, -p.lat as f32)
    }

    #[test]
    fn markers_group_into_layers_by_icon() {
        let palette = IconPalette::default();
        let a = palette.icon(StationKind::Permanent, 0);
        let b = palette.icon(StationKind::Temporary, 0);

        let mut map = PlotMap::default();
        map.place_marker(Position::new(1.0, 2.0), a);
        let hidden = map.place_marker(Position::new(3.0, 4.0), b);
        map.place_marker(Position::new(5.0, 6.0), a);
        map.set_marker_visible(hidden, false);

        let layers = map.visible_layers();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].icon, a);
        assert_eq!(layers[0].points, vec![[2.0, 1.0], [6.0, 5.0]]);
    }

    #[test]
    fn pick_chooses_nearest_visible_within_radius() {
        let icon = IconPalette::default().icon(StationKind::Permanent, 0);
        let mut map = PlotMap::default();
        let near = map.place_marker(Position::new(0.0, 0.0), icon);
        let nearer = map.place_marker(Position::new(0.0, 3.0), icon);
        map.place_marker(Position::new(0.0, 50.0), icon);

        assert_eq!(map.pick(pos2(4.0, 0.0), 8.0, to_screen), Some(nearer));
        map.set_marker_visible(nearer, false);
        assert_eq!(map.pick(pos2(4.0, 0.0), 8.0, to_screen), Some(near));
        assert_eq!(map.pick(pos2(20.0, 0.0), 8.0, to_screen), None);
    }

    #[test]
    fn hiding_the_anchor_closes_the_popup() {
        let icon = IconPalette::default().icon(StationKind::Permanent, 0);
        let mut map = PlotMap::default();
        let a = map.place_marker(Position::new(0.0, 0.0), icon);
        let b = map.place_marker(Position::new(1.0, 1.0), icon);

        map.open_info_popup(content(), a);
        map.set_marker_visible(b, false);
        assert!(map.popup().is_some());
        map.set_marker_visible(a, false);
        assert!(map.popup().is_none());
    }

    #[test]
    fn clear_removes_everything() {
        let icon = IconPalette::default().icon(StationKind::Permanent, 0);
        let mut map = PlotMap::default();
        let a = map.place_marker(Position::new(0.0, 0.0), icon);
        map.open_info_popup(content(), a);
        map.clear();
        assert_eq!(map.marker_count(), 0);
        assert!(map.popup().is_none());
        assert!(map.visible_layers().is_empty());
    }
}
