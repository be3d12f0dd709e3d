//! Descriptive statistics over a (filtered) trip dataset.
//!
//! Four independent routines, each a pure function of the dataset.  Empty
//! input yields [`StatResult::NoData`] instead of an undefined mode or a
//! division by zero.

use bikeshare_core::models::{Dataset, StatResult, TripRecord};
use bikeshare_core::registry::{month_name, weekday_name, City};
use chrono::Weekday;

use crate::frequency::{FrequencyTable, ValueCount};

// ── Result payloads ───────────────────────────────────────────────────────────

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    /// Calendar month number `1..=12`.
    pub month: u32,
    pub day_of_week: Weekday,
    /// Start hour `0..=23`.
    pub hour: u32,
}

impl TimeStats {
    pub fn month_name(&self) -> &'static str {
        month_name(self.month).unwrap_or("Unknown")
    }

    pub fn day_name(&self) -> &'static str {
        weekday_name(self.day_of_week)
    }
}

/// Most popular stations and trip.
///
/// Blank station cells are left out of every count.  A field is `None` when
/// no row in the set carries that value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    /// `"<start> and <end>"` of the most frequent route, counted over rows
    /// with both stations recorded.
    pub route: Option<String>,
}

/// Total and average trip duration, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDurationStats {
    pub total: f64,
    pub mean: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Rider demographics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Counts per user type, in first-seen order.
    pub user_types: Vec<ValueCount>,
    /// Counts per gender, in first-seen order; rows without gender excluded.
    pub genders: Vec<ValueCount>,
    /// `None` when no row in the set carries a birth year.
    pub birth_year: Option<BirthYearStats>,
}

// ── Routines ──────────────────────────────────────────────────────────────────

/// Most common month, weekday and start hour.
pub fn time_stats(dataset: &Dataset) -> StatResult<TimeStats> {
    let records = &dataset.records;
    let months: FrequencyTable<u32> = records.iter().map(TripRecord::month).collect();
    let days: FrequencyTable<Weekday> = records.iter().map(TripRecord::day_of_week).collect();
    let hours: FrequencyTable<u32> = records.iter().map(TripRecord::hour).collect();

    months
        .mode()
        .zip(days.mode())
        .zip(hours.mode())
        .map(|((&month, &day_of_week), &hour)| TimeStats {
            month,
            day_of_week,
            hour,
        })
        .into()
}

/// Most common start station, end station and start/end route.
pub fn station_stats(dataset: &Dataset) -> StatResult<StationStats> {
    let records = &dataset.records;
    let starts: FrequencyTable<&str> = records
        .iter()
        .filter_map(|r| r.start_station.as_deref())
        .collect();
    let ends: FrequencyTable<&str> = records
        .iter()
        .filter_map(|r| r.end_station.as_deref())
        .collect();
    let routes: FrequencyTable<String> = records.iter().filter_map(TripRecord::route).collect();

    if starts.is_empty() && ends.is_empty() {
        return StatResult::NoData;
    }
    StatResult::Available(StationStats {
        start_station: starts.mode().map(|s| s.to_string()),
        end_station: ends.mode().map(|s| s.to_string()),
        route: routes.mode().cloned(),
    })
}

/// Sum and arithmetic mean of trip durations.
pub fn trip_duration_stats(dataset: &Dataset) -> StatResult<TripDurationStats> {
    if dataset.is_empty() {
        return StatResult::NoData;
    }
    let count = dataset.len();
    let total: f64 = dataset.records.iter().map(|r| r.trip_duration).sum();
    StatResult::Available(TripDurationStats {
        total,
        mean: total / count as f64,
        count,
    })
}

/// User-type and gender counts plus birth-year range and mode.
///
/// Not applicable for cities whose data has no demographic columns.
pub fn user_stats(dataset: &Dataset, city: City) -> StatResult<UserStats> {
    if !city.has_demographics() || !dataset.has_demographics {
        return StatResult::NotApplicable;
    }
    if dataset.is_empty() {
        return StatResult::NoData;
    }

    let records = &dataset.records;
    let user_types: FrequencyTable<&str> =
        records.iter().filter_map(|r| r.user_type.as_deref()).collect();
    let genders: FrequencyTable<&str> =
        records.iter().filter_map(|r| r.gender.as_deref()).collect();
    let years: FrequencyTable<i32> = records.iter().filter_map(|r| r.birth_year).collect();

    let birth_year = years.mode().map(|&most_common| {
        let known = || years.iter().map(|(&y, _)| y);
        BirthYearStats {
            earliest: known().min().unwrap_or(most_common),
            most_recent: known().max().unwrap_or(most_common),
            most_common,
        }
    });

    StatResult::Available(UserStats {
        user_types: user_types.to_value_counts(),
        genders: genders.to_value_counts(),
        birth_year,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
