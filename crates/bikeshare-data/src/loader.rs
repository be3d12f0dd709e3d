//! CSV loading for the city trip-record files.
//!
//! Reads one city's file into a [`Dataset`], parsing the start time of every
//! row.  Nothing is cached: every call re-reads the source.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use bikeshare_core::error::{BikeshareError, Result};
use bikeshare_core::models::{Dataset, TripRecord};
use bikeshare_core::registry::City;
use bikeshare_core::time_utils::parse_trip_time;
use serde::Deserialize;
use tracing::{debug, info, warn};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every row depends on.
const REQUIRED_COLUMNS: [&str; 4] = [START_TIME, TRIP_DURATION, START_STATION, END_STATION];

// ── Raw row ───────────────────────────────────────────────────────────────────

/// One CSV row as it appears on disk, before any parsing.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration", default)]
    trip_duration: Option<String>,
    #[serde(rename = "Start Station", default)]
    start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

impl RawTrip {
    /// Convert into a typed record.  `row` is the 1-based data row number.
    fn into_record(self, row: usize) -> Result<TripRecord> {
        let start_time =
            parse_trip_time(&self.start_time).ok_or_else(|| BikeshareError::MalformedTimestamp {
                row,
                value: self.start_time.clone(),
            })?;

        let duration_raw = self.trip_duration.unwrap_or_default();
        let trip_duration = duration_raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite())
            .ok_or_else(|| BikeshareError::MalformedField {
                row,
                column: TRIP_DURATION.to_string(),
                value: duration_raw.clone(),
            })?;

        let end_time = self.end_time.as_deref().and_then(parse_trip_time);

        Ok(TripRecord {
            start_time,
            end_time,
            trip_duration,
            start_station: non_blank(self.start_station),
            end_station: non_blank(self.end_station),
            user_type: non_blank(self.user_type),
            gender: non_blank(self.gender),
            birth_year: self.birth_year.as_deref().and_then(|s| parse_birth_year(s, row)),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Accepts `1989` and `1989.0`; anything else is treated as missing.
fn parse_birth_year(s: &str, row: usize) -> Option<i32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 => Some(v as i32),
        _ => {
            warn!("Row {}: ignoring unparseable birth year {:?}", row, s);
            None
        }
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Reads city datasets from a data directory.
#[derive(Debug, Clone)]
pub struct Loader {
    data_dir: PathBuf,
}

impl Loader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of `city`'s backing file.
    pub fn source_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.source_file())
    }

    /// Read every trip for `city` from disk.
    pub fn load(&self, city: City) -> Result<Dataset> {
        load_path(&self.source_path(city), city)
    }
}

/// Read every trip from the CSV file at `path`.
pub fn load_path(path: &Path, city: City) -> Result<Dataset> {
    debug!("Opening {} for {}", path.display(), city);
    let file = File::open(path).map_err(|source| BikeshareError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file, city)?;
    info!(
        "Loaded {} trips for {} from {}",
        dataset.len(),
        city,
        path.display()
    );
    Ok(dataset)
}

/// Read every trip from CSV text supplied by `reader`.
pub fn load_reader<R: Read>(reader: R, city: City) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);

    for column in REQUIRED_COLUMNS {
        if !has_column(column) {
            return Err(BikeshareError::MissingColumn(column.to_string()));
        }
    }
    let has_demographics = has_column(GENDER) && has_column(BIRTH_YEAR);
    if !has_demographics {
        debug!("{} source has no demographic columns", city);
    }

    let mut records = Vec::new();
    for (i, raw) in csv_reader.deserialize::<RawTrip>().enumerate() {
        records.push(raw?.into_record(i + 1)?);
    }

    Ok(Dataset::new(city, records, has_demographics))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
