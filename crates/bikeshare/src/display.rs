//! Console rendering of statistics and raw rows.

use std::io::{self, Write};
use std::time::Duration;

use bikeshare_core::formatting::{format_hour, format_number, format_seconds};
use bikeshare_core::models::{StatResult, TripRecord};
use bikeshare_core::registry::City;
use bikeshare_data::frequency::ValueCount;
use bikeshare_data::stats::{StationStats, TimeStats, TripDurationStats, UserStats};

pub const RULE: &str = "----------------------------------------";

const NO_DATA: &str = "No data available for the selected filters.";

/// Shown in place of a station that no row recorded.
const NOT_RECORDED: &str = "(not recorded)";

/// Most common month, day and start hour.
pub fn render_time_stats<W: Write>(out: &mut W, result: &StatResult<TimeStats>) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    match result {
        StatResult::Available(s) => {
            writeln!(out, "Most common month: {}", s.month_name())?;
            writeln!(out, "Most common day: {}", s.day_name())?;
            writeln!(out, "Most common start hour: {}", format_hour(s.hour))
        }
        _ => writeln!(out, "{}", NO_DATA),
    }
}

/// Most common start station, end station and route.
pub fn render_station_stats<W: Write>(
    out: &mut W,
    result: &StatResult<StationStats>,
) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    match result {
        StatResult::Available(s) => {
            writeln!(out, "Most common start station: {}", or_blank(&s.start_station))?;
            writeln!(out, "Most common end station: {}", or_blank(&s.end_station))?;
            writeln!(out, "Most common start and end station: {}", or_blank(&s.route))
        }
        _ => writeln!(out, "{}", NO_DATA),
    }
}

fn or_blank(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(NOT_RECORDED)
}

/// Total and mean travel time with the number of trips counted.
pub fn render_trip_duration_stats<W: Write>(
    out: &mut W,
    result: &StatResult<TripDurationStats>,
) -> io::Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    match result {
        StatResult::Available(s) => {
            writeln!(
                out,
                "Total travel time: {} seconds ({})",
                format_number(s.total, 1),
                format_seconds(s.total)
            )?;
            writeln!(
                out,
                "Mean trip duration: {} seconds ({})",
                format_number(s.mean, 1),
                format_seconds(s.mean)
            )?;
            writeln!(out, "Trips counted: {}", format_number(s.count as f64, 0))
        }
        _ => writeln!(out, "{}", NO_DATA),
    }
}

/// User-type and gender tables plus birth years, or a notice when the city has none.
pub fn render_user_stats<W: Write>(
    out: &mut W,
    result: &StatResult<UserStats>,
    city: City,
) -> io::Result<()> {
    if result.is_not_applicable() {
        return writeln!(out, "\nUser statistics are not available for {}.", city);
    }
    writeln!(out, "\nCalculating User Stats...\n")?;
    let StatResult::Available(s) = result else {
        return writeln!(out, "{}", NO_DATA);
    };

    writeln!(out, "User Types:")?;
    render_counts(out, &s.user_types)?;
    writeln!(out, "\nGender:")?;
    render_counts(out, &s.genders)?;
    writeln!(out)?;

    match s.birth_year {
        Some(years) => {
            writeln!(out, "Earliest birth year: {}", years.earliest)?;
            writeln!(out, "Most recent birth year: {}", years.most_recent)?;
            writeln!(out, "Most common birth year: {}", years.most_common)
        }
        None => writeln!(out, "No birth year data for the selected filters."),
    }
}

fn render_counts<W: Write>(out: &mut W, counts: &[ValueCount]) -> io::Result<()> {
    if counts.is_empty() {
        return writeln!(out, "  (none recorded)");
    }
    let width = counts.iter().map(|c| c.value.len()).max().unwrap_or(0);
    for c in counts {
        writeln!(out, "  {:<width$}  {}", c.value, c.count, width = width)?;
    }
    Ok(())
}

/// Footer printed after each statistics block.
pub fn render_elapsed<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "\nThis took {:.6} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", RULE)
}

/// One raw trip as a single line.
pub fn format_row(record: &TripRecord) -> String {
    let mut line = format!(
        "{} | {}s | {} -> {}",
        record.start_time.format("%Y-%m-%d %H:%M:%S"),
        format_number(record.trip_duration, 0),
        record.start_station.as_deref().unwrap_or("?"),
        record.end_station.as_deref().unwrap_or("?")
    );
    if let Some(user_type) = &record.user_type {
        line.push_str(" | ");
        line.push_str(user_type);
    }
    if let Some(gender) = &record.gender {
        line.push_str(" | ");
        line.push_str(gender);
    }
    if let Some(year) = record.birth_year {
        line.push_str(&format!(" | born {}", year));
    }
    line
}

/// Each record in `rows` on its own line.
pub fn render_rows<W: Write>(out: &mut W, rows: &[TripRecord]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", format_row(row))?;
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_data::stats::BirthYearStats;
    use chrono::{NaiveDateTime, Weekday};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("render");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn test_render_time_stats() {
        let result = StatResult::Available(TimeStats {
            month: 6,
            day_of_week: Weekday::Thu,
            hour: 17,
        });
        let text = render(|out| render_time_stats(out, &result));
        assert!(text.contains("Most common month: June"));
        assert!(text.contains("Most common day: Thursday"));
        assert!(text.contains("Most common start hour: 17:00"));
    }

    #[test]
    fn test_render_no_data() {
        let text = render(|out| render_station_stats(out, &StatResult::NoData));
        assert!(text.contains(NO_DATA));
        let text = render(|out| render_trip_duration_stats(out, &StatResult::NoData));
        assert!(text.contains(NO_DATA));
        let text = render(|out| render_user_stats(out, &StatResult::NoData, City::Chicago));
        assert!(text.contains(NO_DATA));
    }

    #[test]
    fn test_render_station_stats_without_route() {
        let result = StatResult::Available(StationStats {
            start_station: Some("A".to_string()),
            end_station: Some("C".to_string()),
            route: None,
        });
        let text = render(|out| render_station_stats(out, &result));
        assert!(text.contains("Most common start station: A"));
        assert!(text.contains("Most common end station: C"));
        assert!(text.contains("Most common start and end station: (not recorded)"));
    }

    #[test]
    fn test_render_trip_duration() {
        let result = StatResult::Available(TripDurationStats {
            total: 4_000.0,
            mean: 2_000.0,
            count: 2,
        });
        let text = render(|out| render_trip_duration_stats(out, &result));
        assert!(text.contains("Total travel time: 4,000.0 seconds (1h 6m 40s)"));
        assert!(text.contains("Mean trip duration: 2,000.0 seconds (33m 20s)"));
        assert!(text.contains("Trips counted: 2"));
    }

    #[test]
    fn test_render_user_stats_not_applicable() {
        let text = render(|out| {
            render_user_stats(out, &StatResult::NotApplicable, City::Washington)
        });
        assert!(text.contains("User statistics are not available for Washington."));
        assert!(!text.contains("Calculating User Stats"));
    }

    #[test]
    fn test_render_user_stats_tables() {
        let result = StatResult::Available(UserStats {
            user_types: vec![
                ValueCount {
                    value: "Subscriber".to_string(),
                    count: 10,
                },
                ValueCount {
                    value: "Customer".to_string(),
                    count: 2,
                },
            ],
            genders: Vec::new(),
            birth_year: Some(BirthYearStats {
                earliest: 1940,
                most_recent: 2001,
                most_common: 1989,
            }),
        });
        let text = render(|out| render_user_stats(out, &result, City::Chicago));
        assert!(text.contains("  Subscriber  10"));
        assert!(text.contains("  Customer    2"));
        assert!(text.contains("(none recorded)"));
        assert!(text.contains("Earliest birth year: 1940"));
        assert!(text.contains("Most recent birth year: 2001"));
        assert!(text.contains("Most common birth year: 1989"));
    }

    #[test]
    fn test_format_row() {
        let record = TripRecord {
            start_time: NaiveDateTime::parse_from_str("2017-06-23 15:09:32", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            end_time: None,
            trip_duration: 321.0,
            start_station: Some("Wood St".to_string()),
            end_station: Some("Damen Ave".to_string()),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: Some(1992),
        };
        assert_eq!(
            format_row(&record),
            "2017-06-23 15:09:32 | 321s | Wood St -> Damen Ave | Subscriber | born 1992"
        );

        let blank = TripRecord {
            end_station: None,
            ..record
        };
        assert_eq!(
            format_row(&blank),
            "2017-06-23 15:09:32 | 321s | Wood St -> ? | Subscriber | born 1992"
        );
    }

    #[test]
    fn test_render_elapsed_ends_with_rule() {
        let text = render(|out| render_elapsed(out, Duration::from_millis(250)));
        assert!(text.contains("This took 0.250000 seconds."));
        assert!(text.trim_end().ends_with(RULE));
    }
}
