use chrono::Local;
use eframe::egui;

use crate::config::ViewerConfig;
use crate::icon::IconPalette;
use crate::map::plot_map::PlotMap;
use crate::state::AppState;
use crate::ui::{map_view, panels, popup};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SeismapApp {
    pub state: AppState<PlotMap>,
    config: ViewerConfig,
}

impl SeismapApp {
    /// Build the app and load the configured station file.
    pub fn new(config: ViewerConfig) -> Self {
        let palette = IconPalette::new(config.permanent_palette_size, config.temporary_palette_size);
        let mut state = AppState::new(
            PlotMap::default(),
            palette,
            Local::now().date_naive(),
            config.timeline_enabled,
        );
        state.load_path(&config.stations_path);
        if let Some(code) = &config.only_network {
            state.show_only_code(code);
        }
        Self { state, config }
    }
}

impl eframe::App for SeismapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: networks and timeline ----
        egui::SidePanel::left("network_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: map ----
        egui::CentralPanel::default().show(ctx, |ui| {
            map_view::station_map(ui, &mut self.state, &self.config);
        });

        popup::info_popup(ctx, &mut self.state);
    }
}
