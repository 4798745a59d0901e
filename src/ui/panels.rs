use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::data::loader::DATE_FORMAT;
use crate::data::model::NetworkId;
use crate::data::timeline::{SLIDER_MAX, SLIDER_MIN};
use crate::map::plot_map::PlotMap;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – network toggles and timeline
// ---------------------------------------------------------------------------

enum NetworkAction {
    Toggle(NetworkId, bool),
    Only(NetworkId),
    All,
    None,
}

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState<PlotMap>) {
    timeline_controls(ui, state);
    ui.separator();

    ui.heading("Networks");
    ui.separator();

    if state.registry.is_empty() {
        ui.label("No stations loaded.");
        return;
    }

    let mut action = None;

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            action = Some(NetworkAction::All);
        }
        if ui.small_button("None").clicked() {
            action = Some(NetworkAction::None);
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for id in state.registry.network_ids() {
                let network = state.registry.network(id);
                let count = state.registry.stations_of(id).len();
                let text = RichText::new(format!("{}  ({count})", network.code))
                    .color(network.icon.color)
                    .strong();

                ui.horizontal(|ui: &mut Ui| {
                    let mut checked = network.checked;
                    if ui.checkbox(&mut checked, text).changed() {
                        action = Some(NetworkAction::Toggle(id, checked));
                    }
                    if ui
                        .small_button("only")
                        .on_hover_text(format!("Show only {}", network.code))
                        .clicked()
                    {
                        action = Some(NetworkAction::Only(id));
                    }
                });
            }
        });

    // Apply after the loop, the registry is borrowed while drawing.
    match action {
        Some(NetworkAction::Toggle(id, checked)) => state.toggle_network(id, checked),
        Some(NetworkAction::Only(id)) => state.show_only(id),
        Some(NetworkAction::All) => state.show_all(),
        Some(NetworkAction::None) => state.hide_all(),
        None => {}
    }
}

fn timeline_controls(ui: &mut Ui, state: &mut AppState<PlotMap>) {
    ui.heading("Timeline");

    let Some(timeline) = state.timeline else {
        ui.label("No stations loaded.");
        return;
    };

    let mut enabled = timeline.enabled;
    if ui.checkbox(&mut enabled, "Enable timeline").changed() {
        state.set_timeline_enabled(enabled);
    }

    let mut date = timeline.date;
    let mut slider = timeline.slider;
    let mut date_changed = false;
    let mut slider_changed = false;

    ui.add_enabled_ui(enabled, |ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            ui.label("Date");
            date_changed = ui
                .add(DatePickerButton::new(&mut date).id_salt("timeline_date"))
                .changed();
        });
        slider_changed = ui
            .add(egui::Slider::new(&mut slider, SLIDER_MIN..=SLIDER_MAX).show_value(false))
            .changed();
        ui.label(
            RichText::new(format!(
                "{} – {}",
                timeline.scale.earliest().format(DATE_FORMAT),
                timeline.scale.latest().format(DATE_FORMAT)
            ))
            .small()
            .weak(),
        );
    });

    if date_changed {
        state.set_timeline_date(date);
    } else if slider_changed {
        state.set_timeline_slider(slider);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState<PlotMap>) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if !state.registry.is_empty() {
            ui.label(format!(
                "{} stations in {} networks, {} visible",
                state.registry.len(),
                state.registry.networks().len(),
                state.visible_stations().len()
            ));
        }

        if let Some(source) = &state.source {
            ui.label(RichText::new(source.display().to_string()).weak());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState<PlotMap>) {
    let file = rfd::FileDialog::new()
        .set_title("Open station list")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
