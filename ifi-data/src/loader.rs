//! CSV loading for the flood event dataset.
//!
//! The dataset ships as one CSV embedded into the WASM binary via
//! `include_str!` in the consuming app crate. Columns are matched by header
//! name rather than position, so reordered exports keep working; headers the
//! explorer does not know about are carried through opaquely on each record.
//!
//! # CSV Format
//!
//! Headers (case-insensitive): `UID,Start Date,End Date,Duration (Days),
//! Main Cause,States,Districts,Severity,Area Affected (sq km),
//! Human Fatality,Human Displaced,Source` plus any number of extra columns.
//! Dates are `YYYY-MM-DD`.

use crate::models::FloodRecord;
use anyhow::{bail, Context};
use chrono::NaiveDate;

/// Columns the explorer interprets.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Id,
    StartDate,
    EndDate,
    DurationDays,
    MainCause,
    State,
    District,
    Severity,
    AreaAffected,
    HumanFatalities,
    HumanDisplaced,
    Source,
    /// Anything else: preserved verbatim under its original header.
    Passthrough,
}

fn classify_header(header: &str) -> Field {
    match header.trim().to_ascii_lowercase().as_str() {
        "uid" | "id" => Field::Id,
        "start date" | "startdate" => Field::StartDate,
        "end date" | "enddate" => Field::EndDate,
        "duration (days)" | "duration" => Field::DurationDays,
        "main cause" | "maincause" => Field::MainCause,
        "states" | "state" => Field::State,
        "districts" | "district" => Field::District,
        "severity" => Field::Severity,
        "area affected (sq km)" | "area affected" => Field::AreaAffected,
        "human fatality" | "human fatalities" => Field::HumanFatalities,
        "human displaced" => Field::HumanDisplaced,
        "source" | "event source" => Field::Source,
        _ => Field::Passthrough,
    }
}

/// Parse a date cell. Blank or malformed cells become `None`; malformed
/// cells are counted so the total can be logged once per load.
fn parse_date_cell(cell: &str, bad_dates: &mut u32) -> Option<NaiveDate> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    match ifi_utils::dates::parse_date(cell) {
        Ok(d) => Some(d),
        Err(_) => {
            *bad_dates += 1;
            None
        }
    }
}

/// Parse a numeric cell permissively: blanks and placeholder markers
/// (`---`, `NA`) become `None` rather than load failures.
fn parse_num_cell<T: std::str::FromStr>(cell: &str) -> Option<T> {
    let cell = cell.trim();
    if cell.is_empty() || cell == "---" || cell.eq_ignore_ascii_case("na") {
        return None;
    }
    cell.parse().ok()
}

/// Load the flood event dataset from CSV text.
///
/// Returns records in file order; the explorer relies on this order being
/// preserved through filtering. Fails only on structural problems (missing
/// header row, unreadable CSV, or none of the required columns present) —
/// per-cell problems degrade to `None` fields.
pub fn load_flood_events(csv_data: &str) -> anyhow::Result<Vec<FloodRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers().context("dataset CSV has no header row")?;
    let columns: Vec<(Field, String)> = headers
        .iter()
        .map(|h| (classify_header(h), h.trim().to_string()))
        .collect();

    if !columns.iter().any(|(f, _)| *f == Field::State) {
        bail!("dataset CSV is missing the `States` column");
    }

    let mut records = Vec::new();
    let mut bad_dates = 0u32;
    for result in rdr.records() {
        let row = result.context("unreadable dataset CSV row")?;

        let mut rec = FloodRecord {
            id: String::new(),
            start_date: None,
            end_date: None,
            state: String::new(),
            district: String::new(),
            duration_days: None,
            main_cause: String::new(),
            severity: None,
            area_affected_sqkm: None,
            human_fatalities: None,
            human_displaced: None,
            source: String::new(),
            extra: Vec::new(),
        };

        for (i, (field, header)) in columns.iter().enumerate() {
            let cell = row.get(i).unwrap_or("");
            match field {
                Field::Id => rec.id = cell.trim().to_string(),
                Field::StartDate => rec.start_date = parse_date_cell(cell, &mut bad_dates),
                Field::EndDate => rec.end_date = parse_date_cell(cell, &mut bad_dates),
                Field::DurationDays => rec.duration_days = parse_num_cell(cell),
                Field::MainCause => rec.main_cause = cell.trim().to_string(),
                Field::State => rec.state = cell.trim().to_string(),
                Field::District => rec.district = cell.trim().to_string(),
                Field::Severity => rec.severity = parse_num_cell(cell),
                Field::AreaAffected => rec.area_affected_sqkm = parse_num_cell(cell),
                Field::HumanFatalities => rec.human_fatalities = parse_num_cell(cell),
                Field::HumanDisplaced => rec.human_displaced = parse_num_cell(cell),
                Field::Source => rec.source = cell.trim().to_string(),
                Field::Passthrough => {
                    let cell = cell.trim();
                    if !cell.is_empty() {
                        rec.extra.push((header.clone(), cell.to_string()));
                    }
                }
            }
        }

        records.push(rec);
    }

    log::info!(
        "[IFI Debug] loader: Loaded {} flood events ({} unparseable date cells)",
        records.len(),
        bad_dates
    );
    Ok(records)
}
