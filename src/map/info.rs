use crate::data::loader::DATE_FORMAT;
use crate::data::model::Station;

/// Content of a station info popup.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoContent {
    pub title: String,
    /// Preview image shown next to the fields.
    pub image: Option<String>,
    /// Label / value pairs in display order.
    pub fields: Vec<(&'static str, String)>,
    /// Label / url pairs. Stations without a url omit that link.
    pub links: Vec<(&'static str, String)>,
}

impl InfoContent {
    pub fn for_station(station: &Station) -> Self {
        let fields = vec![
            ("Network", station.network.clone()),
            ("Station", station.name.clone()),
            ("Startdate", station.start.format(DATE_FORMAT).to_string()),
            ("Enddate", station.end.format(DATE_FORMAT).to_string()),
            ("Latitude", format!("{}°", station.position.lat)),
            ("Longitude", format!("{}°", station.position.lng)),
            ("Elevation", format!("{} m", station.elevation)),
            ("Sampling Frequency", format!("{} Hz", station.frequency)),
            ("Type", station.kind.to_string()),
        ];

        let links = [
            ("Stacked radial P receiver function", &station.url1),
            ("Radial P receiver functions", &station.url2),
            ("Transverse P receiver functions", &station.url3),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.clone().map(|u| (label, u)))
        .collect();

        InfoContent {
            title: format!("{}.{}", station.network, station.name),
            image: station.url1.clone(),
            fields,
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::StationKind;
    use crate::data::registry::tests::station;

    #[test]
    fn fields_follow_station() {
        let mut st = station("NET", StationKind::Permanent, "2001-01-01", "2010-01-01");
        st.url1 = Some("https://example.org/stack.png".into());
        st.url3 = Some("https://example.org/transverse.html".into());

        let info = InfoContent::for_station(&st);
        assert_eq!(info.title, "NET.NET-st");
        assert_eq!(info.image.as_deref(), Some("https://example.org/stack.png"));
        assert!(info.fields.contains(&("Startdate", "2001-01-01".to_string())));
        assert!(info.fields.contains(&("Latitude", "10°".to_string())));
        assert!(info.fields.contains(&("Elevation", "100 m".to_string())));
        assert!(info.fields.contains(&("Sampling Frequency", "50 Hz".to_string())));

        let labels: Vec<&str> = info.links.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![
                "Stacked radial P receiver function",
                "Transverse P receiver functions"
            ]
        );
    }
}
