use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};

use super::error::{LoadError, RowErrorKind, RowParseError};
use super::model::{Position, Station, StationKind};

// ---------------------------------------------------------------------------
// Canonical column layout
// ---------------------------------------------------------------------------

/// Column indices of `stations.csv`. Column 9 is present but unused.
mod col {
    pub const NETWORK: usize = 0;
    pub const NAME: usize = 1;
    pub const START: usize = 2;
    pub const END: usize = 3;
    pub const LAT: usize = 4;
    pub const LNG: usize = 5;
    pub const ELEVATION: usize = 6;
    pub const FREQUENCY: usize = 7;
    pub const PERMANENCE: usize = 8;
    pub const URL1: usize = 10;
    pub const URL2: usize = 11;
    pub const URL3: usize = 12;

    pub const COUNT: usize = 13;
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result of parsing a station file: the good rows plus every rejected one.
#[derive(Debug, Default)]
pub struct ParsedStations {
    pub stations: Vec<Station>,
    pub skipped: Vec<RowParseError>,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load stations from a CSV file on disk.
pub fn load_file(path: &Path) -> Result<ParsedStations, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::Io(path.to_path_buf(), e))?;
    parse_stations(file)
}

/// Parse station CSV text. The header row is discarded.
///
/// Malformed rows are logged and collected in [`ParsedStations::skipped`];
/// the load only fails when the input has no data rows at all or when none
/// of them parse.
pub fn parse_stations<R: Read>(reader: R) -> Result<ParsedStations, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut parsed = ParsedStations::default();
    let mut rows = 0usize;

    for result in reader.byte_records() {
        let bytes = result?;
        rows += 1;

        let line = bytes.position().map(|p| p.line()).unwrap_or(rows as u64 + 1);
        let parsed_row = match StringRecord::from_byte_record(bytes) {
            Ok(record) => parse_row(&record),
            Err(e) => Err(RowErrorKind::Encoding {
                field: e.utf8_error().field(),
            }),
        };
        match parsed_row {
            Ok(station) => parsed.stations.push(station),
            Err(kind) => {
                let err = RowParseError { line, kind };
                log::warn!("Skipping station row: {err}");
                parsed.skipped.push(err);
            }
        }
    }

    if rows == 0 {
        return Err(LoadError::Empty);
    }
    if parsed.stations.is_empty() {
        return Err(LoadError::NoValidRows {
            skipped: parsed.skipped.len(),
        });
    }
    Ok(parsed)
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

fn parse_row(record: &StringRecord) -> Result<Station, RowErrorKind> {
    if record.len() != col::COUNT {
        return Err(RowErrorKind::ColumnCount {
            expected: col::COUNT,
            found: record.len(),
        });
    }
    let field = |idx: usize| record.get(idx).unwrap_or("");

    let network = field(col::NETWORK);
    if network.is_empty() {
        return Err(RowErrorKind::EmptyNetwork);
    }

    let start = parse_date(field(col::START), "start")?;
    let end = parse_date(field(col::END), "end")?;
    if end < start {
        return Err(RowErrorKind::InvertedRange { start, end });
    }

    let lat = parse_number(field(col::LAT), "lat")?;
    if !(-90.0..=90.0).contains(&lat) {
        return Err(RowErrorKind::OutOfRange {
            column: "lat",
            value: lat,
        });
    }
    let lng = parse_number(field(col::LNG), "lng")?;
    if !(-180.0..=180.0).contains(&lng) {
        return Err(RowErrorKind::OutOfRange {
            column: "lng",
            value: lng,
        });
    }

    Ok(Station {
        network: network.to_string(),
        name: field(col::NAME).to_string(),
        start,
        end,
        position: Position::new(lat, lng),
        elevation: parse_number(field(col::ELEVATION), "elevation")?,
        frequency: parse_number(field(col::FREQUENCY), "frequency")?,
        kind: StationKind::from_flag(field(col::PERMANENCE)),
        url1: optional_text(field(col::URL1)),
        url2: optional_text(field(col::URL2)),
        url3: optional_text(field(col::URL3)),
    })
}

fn parse_date(s: &str, column: &'static str) -> Result<NaiveDate, RowErrorKind> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| RowErrorKind::Date {
        column,
        value: s.to_string(),
    })
}

fn parse_number(s: &str, column: &'static str) -> Result<f64, RowErrorKind> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(RowErrorKind::Number {
            column,
            value: s.to_string(),
        }),
    }
}

fn optional_text(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
