use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::registry::{weekday_name, City, Month, Selection};

// ── TripRecord ────────────────────────────────────────────────────────────────

/// A single ride read from a city's trip-record file.
///
/// Month, weekday and hour are always computed from `start_time`, so they can
/// never drift from it.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Local wall-clock time the trip started.
    pub start_time: NaiveDateTime,
    /// Local wall-clock time the trip ended, when the source provides it.
    pub end_time: Option<NaiveDateTime>,
    /// Trip length in seconds.
    pub trip_duration: f64,
    /// `None` when the cell is blank.
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// `"Subscriber"`, `"Customer"`, ... when recorded.
    pub user_type: Option<String>,
    /// Absent on datasets without demographics and on rows left blank.
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Calendar month number `1..=12` of the start time.
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    /// Day of week of the start time.
    pub fn day_of_week(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Full weekday name of the start time, e.g. `"Monday"`.
    pub fn day_name(&self) -> &'static str {
        weekday_name(self.day_of_week())
    }

    /// Hour component `0..=23` of the start time.
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// `"<start> and <end>"` route label used for popular-trip counts.
    ///
    /// `None` unless both stations are recorded.
    pub fn route(&self) -> Option<String> {
        match (&self.start_station, &self.end_station) {
            (Some(start), Some(end)) => Some(format!("{} and {}", start, end)),
            _ => None,
        }
    }
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// All trip records loaded from one city's file.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub city: City,
    pub records: Vec<TripRecord>,
    /// `true` when the source header carries both `Gender` and `Birth Year`.
    pub has_demographics: bool,
}

impl Dataset {
    pub fn new(city: City, records: Vec<TripRecord>, has_demographics: bool) -> Self {
        Self {
            city,
            records,
            has_demographics,
        }
    }

    /// A dataset for the same city and capabilities holding `records`.
    pub fn with_records(&self, records: Vec<TripRecord>) -> Self {
        Self {
            city: self.city,
            records,
            has_demographics: self.has_demographics,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `n` records (fewer when the dataset is shorter).
    pub fn head(&self, n: usize) -> &[TripRecord] {
        self.page(0, n)
    }

    /// Up to `n` records starting at `offset`; empty past the end.
    pub fn page(&self, offset: usize, n: usize) -> &[TripRecord] {
        let start = offset.min(self.records.len());
        let end = offset.saturating_add(n).min(self.records.len());
        &self.records[start..end]
    }
}

// ── FilterSpec ────────────────────────────────────────────────────────────────

/// The city, month and day a user chose for one query cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub city: City,
    pub month: Selection<Month>,
    pub day: Selection<Weekday>,
}

impl FilterSpec {
    pub fn new(city: City, month: Selection<Month>, day: Selection<Weekday>) -> Self {
        Self { city, month, day }
    }

    /// A filter that keeps every row of `city`.
    pub fn unfiltered(city: City) -> Self {
        Self::new(city, Selection::All, Selection::All)
    }

    /// One-line summary, e.g. `"Chicago, month: March, day: all"`.
    pub fn describe(&self) -> String {
        let month = match self.month {
            Selection::All => "all".to_string(),
            Selection::Only(m) => m.to_string(),
        };
        let day = match self.day {
            Selection::All => "all",
            Selection::Only(d) => weekday_name(d),
        };
        format!("{}, month: {}, day: {}", self.city, month, day)
    }
}

// ── StatResult ────────────────────────────────────────────────────────────────

/// Outcome of one statistics routine.
#[derive(Debug, Clone, PartialEq)]
pub enum StatResult<T> {
    /// The statistic was computed.
    Available(T),
    /// The input had no rows to aggregate.
    NoData,
    /// The statistic does not exist for this dataset.
    NotApplicable,
}

impl<T> StatResult<T> {
    pub fn available(&self) -> Option<&T> {
        match self {
            StatResult::Available(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, StatResult::NoData)
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, StatResult::NotApplicable)
    }
}

impl<T> From<Option<T>> for StatResult<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(StatResult::NoData, StatResult::Available)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
