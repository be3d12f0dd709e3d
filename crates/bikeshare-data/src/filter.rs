use bikeshare_core::models::{Dataset, FilterSpec, TripRecord};
use tracing::{debug, warn};

/// Return a new dataset holding only the records that pass `spec`.
///
/// A record passes when:
/// * the month axis is `All`, or its start month equals the selected month's
///   1-based position in the month list
/// * the day axis is `All`, or its start weekday equals the selected day
///
/// The input is left untouched.  No match yields an empty dataset.
pub fn filter(dataset: &Dataset, spec: &FilterSpec) -> Dataset {
    if spec.city != dataset.city {
        warn!(
            "Filtering {} data with a filter for {}",
            dataset.city, spec.city
        );
    }

    let records: Vec<TripRecord> = dataset
        .records
        .iter()
        .filter(|r| matches(r, spec))
        .cloned()
        .collect();

    debug!(
        "Filter [{}] kept {} of {} trips",
        spec.describe(),
        records.len(),
        dataset.len()
    );
    dataset.with_records(records)
}

/// Whether a single record passes both axes of `spec`.
pub fn matches(record: &TripRecord, spec: &FilterSpec) -> bool {
    let month_ok = spec
        .month
        .value()
        .map_or(true, |m| record.month() == m.number());
    let day_ok = spec
        .day
        .value()
        .map_or(true, |d| record.day_of_week() == d);
    month_ok && day_ok
}

// ── Tests ─────────────────────────────────────────────────────────────────────
