use std::collections::HashMap;

use chrono::NaiveDate;

use super::model::{Network, NetworkId, Station, StationId, StationKind};
use crate::icon::IconPalette;

// ---------------------------------------------------------------------------
// StationRegistry – stations grouped by network
// ---------------------------------------------------------------------------

/// All loaded stations and their networks, both in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct StationRegistry {
    stations: Vec<Station>,
    /// Owning network of each station, parallel to `stations`.
    station_network: Vec<NetworkId>,
    networks: Vec<Network>,
    /// Stations of each network, parallel to `networks`.
    members: Vec<Vec<StationId>>,
    by_code: HashMap<String, NetworkId>,
}

impl StationRegistry {
    /// Group stations by network and assign each new network the next icon
    /// of its kind's palette.
    pub fn from_stations(stations: Vec<Station>, palette: &IconPalette) -> Self {
        let mut registry = StationRegistry::default();
        let mut next_permanent = 0usize;
        let mut next_temporary = 0usize;

        for station in stations {
            let station_id = StationId(registry.stations.len());

            let network_id = match registry.by_code.get(&station.network) {
                Some(&id) => id,
                None => {
                    let counter = match station.kind {
                        StationKind::Permanent => &mut next_permanent,
                        StationKind::Temporary => &mut next_temporary,
                    };
                    let icon = palette.icon(station.kind, *counter);
                    *counter += 1;

                    let id = NetworkId(registry.networks.len());
                    registry.networks.push(Network {
                        code: station.network.clone(),
                        kind: station.kind,
                        icon,
                        checked: true,
                    });
                    registry.members.push(Vec::new());
                    registry.by_code.insert(station.network.clone(), id);
                    id
                }
            };

            registry.members[network_id.0].push(station_id);
            registry.station_network.push(network_id);
            registry.stations.push(station);
        }

        registry
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, id: StationId) -> &Station {
        &self.stations[id.0]
    }

    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn network(&self, id: NetworkId) -> &Network {
        &self.networks[id.0]
    }

    pub fn network_mut(&mut self, id: NetworkId) -> &mut Network {
        &mut self.networks[id.0]
    }

    pub fn networks_mut(&mut self) -> impl Iterator<Item = &mut Network> {
        self.networks.iter_mut()
    }

    pub fn network_ids(&self) -> impl Iterator<Item = NetworkId> {
        (0..self.networks.len()).map(NetworkId)
    }

    pub fn network_by_code(&self, code: &str) -> Option<NetworkId> {
        self.by_code.get(code).copied()
    }

    /// Network that owns the given station.
    pub fn network_of(&self, id: StationId) -> NetworkId {
        self.station_network[id.0]
    }

    pub fn stations_of(&self, id: NetworkId) -> &[StationId] {
        &self.members[id.0]
    }

    /// Start date of the earliest station, `None` when empty.
    pub fn earliest_start(&self) -> Option<NaiveDate> {
        self.stations.iter().map(|s| s.start).min()
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the registry holds no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::model::Position;

    pub(crate) fn station(network: &str, kind: StationKind, start: &str, end: &str) -> Station {
        Station {
            network: network.to_string(),
            name: format!("{network}-st"),
            start: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            end: NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap(),
            position: Position::new(10.0, 20.0),
            elevation: 100.0,
            frequency: 50.0,
            kind,
            url1: None,
            url2: None,
            url3: None,
        }
    }

    fn perm(network: &str) -> Station {
        station(network, StationKind::Permanent, "2001-01-01", "2010-01-01")
    }

    fn temp(network: &str) -> Station {
        station(network, StationKind::Temporary, "2001-01-01", "2010-01-01")
    }

    #[test]
    fn networks_in_first_seen_order() {
        let registry = StationRegistry::from_stations(
            vec![perm("B"), perm("A"), perm("B"), perm("C"), perm("A")],
            &IconPalette::default(),
        );
        let codes: Vec<&str> = registry.networks().iter().map(|n| n.code.as_str()).collect();
        assert_eq!(codes, vec!["B", "A", "C"]);

        let a = registry.network_by_code("A").unwrap();
        assert_eq!(registry.stations_of(a), &[StationId(1), StationId(4)]);
        assert_eq!(registry.network_of(StationId(2)), NetworkId(0));
        assert!(registry.networks().iter().all(|n| n.checked));
    }

    #[test]
    fn icons_round_robin_per_kind() {
        let palette = IconPalette::new(3, 2);
        let stations = vec![
            perm("P0"),
            temp("T0"),
            perm("P1"),
            perm("P2"),
            temp("T1"),
            perm("P3"),
            temp("T2"),
            perm("P4"),
        ];
        let registry = StationRegistry::from_stations(stations, &palette);

        let icon_of = |code: &str| {
            let id = registry.network_by_code(code).unwrap();
            registry.network(id).icon
        };
        for k in 0..5 {
            assert_eq!(
                icon_of(&format!("P{k}")),
                palette.icon(StationKind::Permanent, k % 3)
            );
        }
        for k in 0..3 {
            assert_eq!(
                icon_of(&format!("T{k}")),
                palette.icon(StationKind::Temporary, k % 2)
            );
        }
    }

    #[test]
    fn network_kind_follows_first_station() {
        let registry =
            StationRegistry::from_stations(vec![temp("X"), perm("X")], &IconPalette::default());
        assert_eq!(registry.networks().len(), 1);
        assert_eq!(registry.networks()[0].kind, StationKind::Temporary);
    }

    #[test]
    fn earliest_start_scans_all_stations() {
        let registry = StationRegistry::from_stations(
            vec![
                station("A", StationKind::Permanent, "2005-01-01", "2010-01-01"),
                station("B", StationKind::Permanent, "1998-06-15", "2010-01-01"),
                station("A", StationKind::Permanent, "2001-01-01", "2010-01-01"),
            ],
            &IconPalette::default(),
        );
        assert_eq!(
            registry.earliest_start(),
            NaiveDate::from_ymd_opt(1998, 6, 15)
        );
        assert_eq!(StationRegistry::default().earliest_start(), None);
    }
}
