use std::fmt;

use chrono::NaiveDate;

use crate::icon::MarkerIcon;

// ---------------------------------------------------------------------------
// Position – a point on the globe
// ---------------------------------------------------------------------------

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// ---------------------------------------------------------------------------
// StationKind – permanent vs temporary deployment
// ---------------------------------------------------------------------------

/// Deployment type. Selects which icon palette a network draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StationKind {
    Permanent,
    Temporary,
}

impl StationKind {
    /// The permanence column holds the literal `perm` for permanent stations;
    /// anything else is a temporary deployment.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "perm" {
            StationKind::Permanent
        } else {
            StationKind::Temporary
        }
    }
}

impl fmt::Display for StationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationKind::Permanent => write!(f, "permanent"),
            StationKind::Temporary => write!(f, "temporary"),
        }
    }
}

// ---------------------------------------------------------------------------
// Station – one row of stations.csv
// ---------------------------------------------------------------------------

/// A single seismic station. Immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub network: String,
    pub name: String,
    /// First day of operation (inclusive).
    pub start: NaiveDate,
    /// Last day of operation (inclusive). Never before `start`.
    pub end: NaiveDate,
    pub position: Position,
    /// Meters.
    pub elevation: f64,
    /// Sampling frequency in Hz.
    pub frequency: f64,
    pub kind: StationKind,
    /// Stacked radial P receiver function (an image).
    pub url1: Option<String>,
    /// Radial P receiver functions.
    pub url2: Option<String>,
    /// Transverse P receiver functions.
    pub url3: Option<String>,
}

impl Station {
    /// Whether the station was operating on `date`, both ends inclusive.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

// ---------------------------------------------------------------------------
// Network – implicit grouping of stations
// ---------------------------------------------------------------------------

/// Index of a network in first-seen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkId(pub usize);

/// Index of a station in load order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub usize);

/// A network of stations. Owns the checkbox state and the marker icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    pub code: String,
    /// Kind of the first station seen in this network.
    pub kind: StationKind,
    pub icon: MarkerIcon,
    pub checked: bool,
}
