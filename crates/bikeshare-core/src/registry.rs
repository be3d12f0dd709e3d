//! Static dataset registry: the enumerated cities, months and weekdays.
//!
//! Every user-facing choice is parsed here into a typed value.  Matching is
//! case-insensitive; input is trimmed and lower-cased before comparison.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::error::{BikeshareError, Result};

// ── City ──────────────────────────────────────────────────────────────────────

/// One of the three cities with a backing trip-record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Every valid city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// File name of the city's CSV inside the data directory.
    pub fn source_file(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Lower-case key the user types at the prompt.
    pub fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Whether the city's dataset carries gender and birth-year columns.
    pub fn has_demographics(self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        f.write_str(name)
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        match normalise(s).as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" | "new_york_city" | "new york" | "nyc" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            _ => Err(BikeshareError::InvalidKey(s.trim().to_string())),
        }
    }
}

/// Resolve a raw city key to its backing file name.
pub fn source_file(key: &str) -> Result<&'static str> {
    key.parse::<City>().map(City::source_file)
}

// ── Month ─────────────────────────────────────────────────────────────────────

/// The ordered month names a filter may select.
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// A month the datasets cover, usable as a filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based position within [`MONTHS`], equal to the calendar month number.
    pub fn number(self) -> u32 {
        Month::ALL
            .iter()
            .position(|m| *m == self)
            .map_or(0, |i| i as u32 + 1)
    }

    /// Lower-case name as listed in [`MONTHS`].
    pub fn name(self) -> &'static str {
        MONTHS[self.number() as usize - 1]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(month_name(self.number()).unwrap_or("?"))
    }
}

impl FromStr for Month {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalise(s);
        MONTHS
            .iter()
            .position(|name| *name == wanted)
            .map(|i| Month::ALL[i])
            .ok_or_else(|| BikeshareError::InvalidChoice {
                kind: "month",
                value: s.trim().to_string(),
            })
    }
}

/// Title-case name of any calendar month `1..=12`.
pub fn month_name(number: u32) -> Option<&'static str> {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    number
        .checked_sub(1)
        .and_then(|i| NAMES.get(i as usize).copied())
}

// ── Weekday ───────────────────────────────────────────────────────────────────

/// The seven weekday names a filter may select, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

const DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Parse a weekday name into a [`chrono::Weekday`].
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    let wanted = normalise(s);
    WEEKDAYS
        .iter()
        .position(|name| *name == wanted)
        .map(|i| DAYS[i])
        .ok_or_else(|| BikeshareError::InvalidChoice {
            kind: "day",
            value: s.trim().to_string(),
        })
}

/// Full title-case weekday name, e.g. `"Thursday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

/// Either no constraint on an axis, or exactly one accepted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T: Copy> Selection<T> {
    /// The selected value, or `None` for `All`.
    pub fn value(&self) -> Option<T> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(*v),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl FromStr for Selection<Month> {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        if normalise(s) == "all" {
            return Ok(Selection::All);
        }
        s.parse::<Month>().map(Selection::Only)
    }
}

impl FromStr for Selection<Weekday> {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        if normalise(s) == "all" {
            return Ok(Selection::All);
        }
        parse_weekday(s).map(Selection::Only)
    }
}

fn normalise(s: &str) -> String {
    s.trim().to_lowercase()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── City ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_city_parse_is_case_insensitive() {
        assert_eq!("Chicago".parse::<City>().unwrap(), City::Chicago);
        assert_eq!("  WASHINGTON ".parse::<City>().unwrap(), City::Washington);
        assert_eq!(
            "New York City".parse::<City>().unwrap(),
            City::NewYorkCity
        );
    }

    #[test]
    fn test_city_parse_aliases() {
        assert_eq!("nyc".parse::<City>().unwrap(), City::NewYorkCity);
        assert_eq!(
            "new_york_city".parse::<City>().unwrap(),
            City::NewYorkCity
        );
    }

    #[test]
    fn test_city_parse_rejects_unknown() {
        let err = "boston".parse::<City>().unwrap_err();
        assert!(matches!(err, BikeshareError::InvalidKey(ref k) if k == "boston"));
    }

    #[test]
    fn test_source_file_mapping() {
        assert_eq!(source_file("chicago").unwrap(), "chicago.csv");
        assert_eq!(source_file("new york city").unwrap(), "new_york_city.csv");
        assert_eq!(source_file("washington").unwrap(), "washington.csv");
        assert!(source_file("paris").is_err());
    }

    #[test]
    fn test_city_keys_round_trip() {
        for city in City::ALL {
            assert_eq!(city.key().parse::<City>().unwrap(), city);
        }
    }

    #[test]
    fn test_only_washington_lacks_demographics() {
        assert!(City::Chicago.has_demographics());
        assert!(City::NewYorkCity.has_demographics());
        assert!(!City::Washington.has_demographics());
    }

    // ── Month ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_month_numbers_follow_list_order() {
        assert_eq!(Month::January.number(), 1);
        assert_eq!(Month::April.number(), 4);
        assert_eq!(Month::June.number(), 6);
        assert_eq!(Month::May.name(), "may");
    }

    #[test]
    fn test_month_parse_rejects_second_half_of_year() {
        assert!("july".parse::<Month>().is_err());
        assert!("December".parse::<Month>().is_err());
        assert_eq!("MARCH".parse::<Month>().unwrap(), Month::March);
    }

    #[test]
    fn test_month_name_covers_full_calendar() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    // ── Weekday ───────────────────────────────────────────────────────────────

    #[test]
    fn test_weekday_accepts_correct_thursday_spelling() {
        assert_eq!(parse_weekday("thursday").unwrap(), Weekday::Thu);
        assert_eq!(parse_weekday("Thursday").unwrap(), Weekday::Thu);
        assert!(parse_weekday("thursady").is_err());
    }

    #[test]
    fn test_weekday_list_maps_in_order() {
        for (i, name) in WEEKDAYS.iter().enumerate() {
            let day = parse_weekday(name).unwrap();
            assert_eq!(day.num_days_from_monday() as usize, i);
            assert_eq!(weekday_name(day).to_lowercase(), *name);
        }
    }

    // ── Selection ─────────────────────────────────────────────────────────────

    #[test]
    fn test_selection_all() {
        assert_eq!("ALL".parse::<Selection<Month>>().unwrap(), Selection::All);
        assert_eq!(
            "all".parse::<Selection<Weekday>>().unwrap(),
            Selection::All
        );
    }

    #[test]
    fn test_selection_only() {
        assert_eq!(
            "june".parse::<Selection<Month>>().unwrap(),
            Selection::Only(Month::June)
        );
        assert_eq!(
            "Sunday".parse::<Selection<Weekday>>().unwrap(),
            Selection::Only(Weekday::Sun)
        );
        assert_eq!(Selection::Only(Month::May).value(), Some(Month::May));
        assert!(Selection::<Month>::All.is_all());
    }

    #[test]
    fn test_selection_invalid_reports_kind() {
        let err = "someday".parse::<Selection<Weekday>>().unwrap_err();
        assert!(matches!(err, BikeshareError::InvalidChoice { kind: "day", .. }));
    }
}
