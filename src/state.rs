use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::data::filter;
use crate::data::loader::{self, ParsedStations};
use crate::data::model::{NetworkId, StationId};
use crate::data::registry::StationRegistry;
use crate::data::timeline::{TimelineScale, TimelineState};
use crate::icon::IconPalette;
use crate::map::{InfoContent, MapSurface, MarkerId};

// ---------------------------------------------------------------------------
// Visibility bus – network / timeline changes → station markers
// ---------------------------------------------------------------------------

/// Something that changes which markers should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent {
    NetworkToggled(NetworkId),
    TimelineChanged,
}

/// A station's marker, listening for changes to its network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationListener {
    pub station: StationId,
    pub marker: MarkerId,
}

/// Subscriptions of station markers to their network.
#[derive(Debug, Clone, Default)]
pub struct VisibilityBus {
    by_network: Vec<Vec<StationListener>>,
}

impl VisibilityBus {
    pub fn subscribe(&mut self, network: NetworkId, listener: StationListener) {
        if self.by_network.len() <= network.0 {
            self.by_network.resize_with(network.0 + 1, Vec::new);
        }
        self.by_network[network.0].push(listener);
    }

    /// Listeners to notify for `event`: a network's own stations for a
    /// toggle, every station for a timeline change.
    pub fn listeners(&self, event: VisibilityEvent) -> Vec<StationListener> {
        match event {
            VisibilityEvent::NetworkToggled(id) => {
                self.by_network.get(id.0).cloned().unwrap_or_default()
            }
            VisibilityEvent::TimelineChanged => self.by_network.iter().flatten().copied().collect(),
        }
    }

    pub fn clear(&mut self) {
        self.by_network.clear();
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState<M: MapSurface> {
    /// Loaded stations (empty until a file loads).
    pub registry: StationRegistry,

    /// Timeline filter; `None` until stations are loaded.
    pub timeline: Option<TimelineState>,

    /// Surface the station markers live on.
    pub map: M,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// File the current stations came from.
    pub source: Option<PathBuf>,

    bus: VisibilityBus,
    marker_station: HashMap<MarkerId, StationId>,
    palette: IconPalette,
    today: NaiveDate,
    timeline_enabled_on_load: bool,
}

impl<M: MapSurface> AppState<M> {
    pub fn new(map: M, palette: IconPalette, today: NaiveDate, timeline_enabled: bool) -> Self {
        Self {
            registry: StationRegistry::default(),
            timeline: None,
            map,
            status_message: None,
            source: None,
            bus: VisibilityBus::default(),
            marker_station: HashMap::new(),
            palette,
            today,
            timeline_enabled_on_load: timeline_enabled,
        }
    }

    /// Drop every station and marker.
    pub fn reset(&mut self) {
        self.map.clear();
        self.registry = StationRegistry::default();
        self.timeline = None;
        self.bus.clear();
        self.marker_station.clear();
        self.status_message = None;
        self.source = None;
    }

    /// Load a station file, replacing the current stations. Errors are
    /// logged and shown in the status line; no markers remain after a
    /// failed load.
    pub fn load_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(parsed) => {
                self.load(parsed);
                self.source = Some(path.to_path_buf());
                log::info!(
                    "Loaded {} stations in {} networks from {}",
                    self.registry.len(),
                    self.registry.networks().len(),
                    path.display()
                );
            }
            Err(e) => {
                log::error!("Failed to load stations: {e}");
                self.reset();
                self.status_message = Some(format!("Error: {}", error_chain(&e)));
            }
        }
    }

    /// Ingest parsed stations: place one marker per station, subscribe it to
    /// its network and apply the initial visibility.
    pub fn load(&mut self, parsed: ParsedStations) {
        self.reset();

        let skipped = parsed.skipped.len();
        self.registry = StationRegistry::from_stations(parsed.stations, &self.palette);

        let Some(earliest) = self.registry.earliest_start() else {
            return;
        };
        let mut timeline = TimelineState::new(TimelineScale::new(earliest, self.today), self.today);
        timeline.enabled = self.timeline_enabled_on_load;
        self.timeline = Some(timeline);

        for (i, station) in self.registry.stations().iter().enumerate() {
            let id = StationId(i);
            let network = self.registry.network_of(id);
            let icon = self.registry.network(network).icon;
            let marker = self.map.place_marker(station.position, icon);
            self.marker_station.insert(marker, id);
            self.bus.subscribe(
                network,
                StationListener {
                    station: id,
                    marker,
                },
            );
        }

        self.publish(VisibilityEvent::TimelineChanged);

        if skipped > 0 {
            self.status_message = Some(format!("Skipped {skipped} malformed station rows"));
        }
    }

    /// Recompute the visibility of every listener affected by `event`.
    fn publish(&mut self, event: VisibilityEvent) {
        let Some(timeline) = self.timeline else {
            return;
        };
        let listeners = self.bus.listeners(event);
        log::debug!("{event:?}: updating {} markers", listeners.len());
        for listener in listeners {
            let visible = filter::is_visible(&self.registry, listener.station, &timeline);
            self.map.set_marker_visible(listener.marker, visible);
        }
    }

    // -- Network toggles --

    pub fn toggle_network(&mut self, id: NetworkId, checked: bool) {
        self.registry.network_mut(id).checked = checked;
        self.publish(VisibilityEvent::NetworkToggled(id));
    }

    /// Check or uncheck every network.
    pub fn set_all_networks(&mut self, checked: bool) {
        for network in self.registry.networks_mut() {
            network.checked = checked;
        }
        self.publish(VisibilityEvent::TimelineChanged);
    }

    pub fn show_all(&mut self) {
        self.set_all_networks(true);
    }

    pub fn hide_all(&mut self) {
        self.set_all_networks(false);
    }

    /// Check `only` and uncheck every other network.
    pub fn show_only(&mut self, only: NetworkId) {
        let ids: Vec<NetworkId> = self.registry.network_ids().collect();
        for id in ids {
            self.registry.network_mut(id).checked = id == only;
        }
        self.publish(VisibilityEvent::TimelineChanged);
    }

    /// [`Self::show_only`] by network code. Unknown codes change nothing.
    pub fn show_only_code(&mut self, code: &str) -> bool {
        match self.registry.network_by_code(code) {
            Some(id) => {
                self.show_only(id);
                true
            }
            None => {
                log::warn!("No network '{code}' to show");
                false
            }
        }
    }

    // -- Timeline --

    pub fn set_timeline_enabled(&mut self, enabled: bool) {
        if let Some(timeline) = &mut self.timeline {
            timeline.enabled = enabled;
            self.publish(VisibilityEvent::TimelineChanged);
        }
    }

    pub fn set_timeline_date(&mut self, date: NaiveDate) {
        if let Some(timeline) = &mut self.timeline {
            timeline.set_date(date);
            self.publish(VisibilityEvent::TimelineChanged);
        }
    }

    pub fn set_timeline_slider(&mut self, position: f64) {
        if let Some(timeline) = &mut self.timeline {
            timeline.set_slider(position);
            self.publish(VisibilityEvent::TimelineChanged);
        }
    }

    // -- Markers --

    /// Open the info popup for the station behind `marker`.
    pub fn marker_clicked(&mut self, marker: MarkerId) {
        let Some(&id) = self.marker_station.get(&marker) else {
            log::warn!("Click on unknown marker {marker:?}");
            return;
        };
        let content = InfoContent::for_station(self.registry.station(id));
        self.map.open_info_popup(content, marker);
    }

    pub fn visible_stations(&self) -> Vec<StationId> {
        match &self.timeline {
            Some(timeline) => filter::visible_indices(&self.registry, timeline),
            None => Vec::new(),
        }
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
