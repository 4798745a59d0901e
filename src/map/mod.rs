/// Map boundary: the surface markers are drawn on.
///
/// The application only talks to [`MapSurface`]; [`plot_map::PlotMap`] is
/// the egui_plot implementation used by the viewer.

pub mod info;
pub mod plot_map;

use crate::data::model::Position;
use crate::icon::MarkerIcon;

pub use info::InfoContent;

/// Handle to a marker placed on a [`MapSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub usize);

/// A surface that can display station markers and one info popup.
pub trait MapSurface {
    /// Place a new marker. Markers start visible.
    fn place_marker(&mut self, position: Position, icon: MarkerIcon) -> MarkerId;

    fn set_marker_visible(&mut self, marker: MarkerId, visible: bool);

    /// Open the popup anchored on `anchor`, replacing any open popup.
    fn open_info_popup(&mut self, content: InfoContent, anchor: MarkerId);

    fn close_info_popup(&mut self);

    /// Remove every marker and close the popup.
    fn clear(&mut self);
}
