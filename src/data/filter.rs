use chrono::NaiveDate;

use super::model::{Station, StationId};
use super::registry::StationRegistry;
use super::timeline::TimelineState;

// ---------------------------------------------------------------------------
// Visibility predicate
// ---------------------------------------------------------------------------

/// Decide whether a station's marker is shown.
///
/// The network checkbox dominates: an unchecked network hides all of its
/// stations whatever the timeline says. With the timeline enabled a station
/// is shown only while `start <= current_date <= end`.
pub fn should_show(
    station: &Station,
    network_checked: bool,
    timeline_enabled: bool,
    current_date: NaiveDate,
) -> bool {
    if !network_checked {
        false
    } else if timeline_enabled {
        station.is_active_on(current_date)
    } else {
        true
    }
}

/// [`should_show`] for one registry station under the given timeline.
pub fn is_visible(registry: &StationRegistry, id: StationId, timeline: &TimelineState) -> bool {
    let network = registry.network(registry.network_of(id));
    should_show(
        registry.station(id),
        network.checked,
        timeline.enabled,
        timeline.date,
    )
}

/// Ids of every visible station, in load order.
pub fn visible_indices(registry: &StationRegistry, timeline: &TimelineState) -> Vec<StationId> {
    (0..registry.len())
        .map(StationId)
        .filter(|&id| is_visible(registry, id, timeline))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::StationKind;
    use crate::data::registry::tests::station;
    use crate::data::timeline::TimelineScale;
    use crate::icon::IconPalette;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn station_a() -> Station {
        station("NET", StationKind::Permanent, "2001-01-01", "2010-01-01")
    }

    #[test]
    fn unchecked_network_always_hides() {
        let st = station_a();
        for enabled in [false, true] {
            for d in ["1990-01-01", "2001-01-01", "2005-06-01", "2010-01-01", "2020-01-01"] {
                assert!(!should_show(&st, false, enabled, date(d)));
            }
        }
    }

    #[test]
    fn timeline_range_is_inclusive() {
        let st = station_a();
        assert!(should_show(&st, true, true, date("2001-01-01")));
        assert!(should_show(&st, true, true, date("2010-01-01")));
        assert!(!should_show(&st, true, true, date("2000-12-31")));
        assert!(!should_show(&st, true, true, date("2010-01-02")));
    }

    #[test]
    fn example_station_with_timeline() {
        let st = station_a();
        assert!(should_show(&st, true, true, date("2005-06-01")));
        assert!(!should_show(&st, true, true, date("2015-01-01")));
    }

    #[test]
    fn timeline_disabled_shows_checked() {
        let st = station_a();
        assert!(should_show(&st, true, false, date("2015-01-01")));
    }

    #[test]
    fn visible_indices_combines_network_and_timeline() {
        let mut registry = StationRegistry::from_stations(
            vec![
                station("A", StationKind::Permanent, "2001-01-01", "2010-01-01"),
                station("B", StationKind::Temporary, "2008-01-01", "2012-01-01"),
                station("A", StationKind::Permanent, "2011-01-01", "2020-01-01"),
            ],
            &IconPalette::default(),
        );
        let scale = TimelineScale::new(date("2001-01-01"), date("2024-01-01"));
        let mut timeline = TimelineState::new(scale, date("2009-01-01"));

        assert_eq!(visible_indices(&registry, &timeline).len(), 3);

        timeline.enabled = true;
        assert_eq!(
            visible_indices(&registry, &timeline),
            vec![StationId(0), StationId(1)]
        );

        let b = registry.network_by_code("B").unwrap();
        registry.network_mut(b).checked = false;
        assert_eq!(visible_indices(&registry, &timeline), vec![StationId(0)]);
    }
}
