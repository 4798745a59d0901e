use eframe::egui::{self, Ui};

use crate::map::plot_map::PlotMap;
use crate::map::MapSurface;
use crate::state::AppState;

/// Width of the receiver function preview.
const IMAGE_WIDTH: f32 = 185.0;

/// Render the station info window, if one is open.
pub fn info_popup(ctx: &egui::Context, state: &mut AppState<PlotMap>) {
    let Some(popup) = state.map.popup().cloned() else {
        return;
    };
    let content = popup.content;

    let mut open = true;
    egui::Window::new(&content.title)
        .id(egui::Id::new("station_info"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui: &mut Ui| {
            ui.horizontal_top(|ui: &mut Ui| {
                if let Some(image) = &content.image {
                    ui.add(egui::Image::new(image.clone()).max_width(IMAGE_WIDTH));
                }

                ui.vertical(|ui: &mut Ui| {
                    egui::Grid::new("station_info_fields")
                        .num_columns(2)
                        .striped(true)
                        .show(ui, |ui: &mut Ui| {
                            for (label, value) in &content.fields {
                                ui.strong(*label);
                                ui.label(value);
                                ui.end_row();
                            }
                        });

                    if !content.links.is_empty() {
                        ui.add_space(4.0);
                        ui.strong("More information:");
                        for (label, url) in &content.links {
                            ui.hyperlink_to(*label, url);
                        }
                    }
                });
            });
        });

    if !open {
        state.map.close_info_popup();
    }
}
