use eframe::egui::Ui;
use egui_plot::{Plot, PlotPoint, PlotPoints, Points};

use crate::config::ViewerConfig;
use crate::map::plot_map::PlotMap;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Station map (central panel)
// ---------------------------------------------------------------------------

/// Render the station markers on a longitude / latitude plot and route
/// marker clicks to the info popup.
pub fn station_map(ui: &mut Ui, state: &mut AppState<PlotMap>, config: &ViewerConfig) {
    if state.registry.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a station file to view the map  (File → Open…)");
        });
        return;
    }

    let layers = state.map.visible_layers();

    // Whole globe, centered on (0, 0).
    let response = Plot::new("station_map")
        .data_aspect(1.0)
        .include_x(-180.0)
        .include_x(180.0)
        .include_y(-90.0)
        .include_y(90.0)
        .x_axis_label("Longitude (°)")
        .y_axis_label("Latitude (°)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for layer in layers {
                let points = Points::new(PlotPoints::from(layer.points))
                    .shape(layer.icon.shape)
                    .color(layer.icon.color)
                    .filled(layer.icon.filled)
                    .radius(config.marker_radius);
                plot_ui.points(points);
            }
        });

    if !response.response.clicked() {
        return;
    }
    let Some(pointer) = response.response.interact_pointer_pos() else {
        return;
    };

    let transform = response.transform;
    let picked = state.map.pick(pointer, config.pick_radius_px, |p| {
        transform.position_from_point(&PlotPoint::new(p.lng, p.lat))
    });
    if let Some(marker) = picked {
        state.marker_clicked(marker);
    }
}
