//! Interactive prompt loop driving load → filter → statistics.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::time::Instant;

use bikeshare_core::error::BikeshareError;
use bikeshare_core::models::{Dataset, FilterSpec};
use bikeshare_core::registry::{City, Month, Selection, MONTHS};
use bikeshare_data::filter::filter;
use bikeshare_data::loader::Loader;
use bikeshare_data::stats::{station_stats, time_stats, trip_duration_stats, user_stats};
use chrono::Weekday;
use tracing::{error, info};

use crate::display;

/// Raw rows shown per page of the preview.
const PAGE_SIZE: usize = 5;

/// One interactive user session over `input` and `output`.
pub struct Session<R, W> {
    input: R,
    output: W,
    loader: Loader,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, loader: Loader) -> Self {
        Self {
            input,
            output,
            loader,
        }
    }

    /// Run query cycles until the user declines to restart or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!\n")?;
        loop {
            let Some(spec) = self.get_filters()? else {
                break;
            };
            self.run_cycle(&spec)?;

            let answer = self.ask("\nWould you like to restart? Enter yes or no.")?;
            if !answer.as_deref().is_some_and(is_yes) {
                break;
            }
        }
        info!("Session finished");
        Ok(())
    }

    /// Ask for city, month and day.  `None` when input ends first.
    pub fn get_filters(&mut self) -> io::Result<Option<FilterSpec>> {
        let city_prompt = "What city? Please enter 'chicago', 'washington', or 'new york city':";
        let Some(city) = self.prompt_choice::<City>(city_prompt)? else {
            return Ok(None);
        };

        let month_prompt = format!(
            "What month would you like to use to filter? Please enter 'all' for no filter, or {}:",
            quoted_list(&MONTHS)
        );
        let Some(month) = self.prompt_choice::<Selection<Month>>(&month_prompt)? else {
            return Ok(None);
        };

        let day_prompt = "What day would you like to use to filter? \
                          Please enter 'all' for no filter, or type the name of the day:";
        let Some(day) = self.prompt_choice::<Selection<Weekday>>(day_prompt)? else {
            return Ok(None);
        };

        writeln!(self.output, "{}", display::RULE)?;
        Ok(Some(FilterSpec::new(city, month, day)))
    }

    /// Load, filter and report on one filter selection.
    ///
    /// Load failures are shown to the user and end the cycle early.
    pub fn run_cycle(&mut self, spec: &FilterSpec) -> io::Result<()> {
        info!("Query: {}", spec.describe());

        let dataset = match self.loader.load(spec.city) {
            Ok(ds) => ds,
            Err(err) => {
                error!("Loading {} failed: {}", spec.city, err);
                writeln!(self.output, "\nCould not load data for {}: {}", spec.city, err)?;
                return Ok(());
            }
        };
        let filtered = filter(&dataset, spec);
        writeln!(
            self.output,
            "\n{} of {} trips match ({}).",
            filtered.len(),
            dataset.len(),
            spec.describe()
        )?;

        let started = Instant::now();
        let result = time_stats(&filtered);
        display::render_time_stats(&mut self.output, &result)?;
        display::render_elapsed(&mut self.output, started.elapsed())?;

        let started = Instant::now();
        let result = station_stats(&filtered);
        display::render_station_stats(&mut self.output, &result)?;
        display::render_elapsed(&mut self.output, started.elapsed())?;

        let started = Instant::now();
        let result = trip_duration_stats(&filtered);
        display::render_trip_duration_stats(&mut self.output, &result)?;
        display::render_elapsed(&mut self.output, started.elapsed())?;

        let started = Instant::now();
        let result = user_stats(&filtered, spec.city);
        display::render_user_stats(&mut self.output, &result, spec.city)?;
        if !result.is_not_applicable() {
            display::render_elapsed(&mut self.output, started.elapsed())?;
        }

        self.show_rows(&filtered)
    }

    /// Page through raw rows while the user keeps answering yes.
    fn show_rows(&mut self, dataset: &Dataset) -> io::Result<()> {
        let mut offset = 0;
        let mut prompt = format!(
            "\nWould you like to see {} rows of raw data? Enter yes or no.",
            PAGE_SIZE
        );
        while offset < dataset.len() {
            let answer = self.ask(&prompt)?;
            if !answer.as_deref().is_some_and(is_yes) {
                break;
            }
            display::render_rows(&mut self.output, dataset.page(offset, PAGE_SIZE))?;
            offset += PAGE_SIZE;
            prompt = format!(
                "\nWould you like to see {} more rows? Enter yes or no.",
                PAGE_SIZE
            );
        }
        Ok(())
    }

    /// Re-prompt until the answer parses as `T`.  `None` on end of input.
    pub fn prompt_choice<T>(&mut self, prompt: &str) -> io::Result<Option<T>>
    where
        T: FromStr<Err = BikeshareError>,
    {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{}. Please try again.", err)?,
            }
        }
    }

    /// Print `prompt` and read one trimmed line.  `None` on end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "yes" | "y")
}

fn quoted_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|s| format!("'{}'", s))
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Tests ──────────────────────────────────────────────────────────────────────
