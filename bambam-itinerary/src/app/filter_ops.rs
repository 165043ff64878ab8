use chrono::{Datelike, NaiveDate};
use std::path::Path;

use crate::{
    app::{FilterConfig, FilterError, FilterSummary},
    connection::{ConnectionDeriver, TransferConnection},
    itinerary::{Itinerary, LegMatcher, MatchedLeg},
    output::{
        output_ops::{self, CONNECTIONS_FILENAME, LEGS_FILENAME, LOG_FILENAME, TRIPS_FILENAME},
        MatchedLegRow, TripRow,
    },
    run_log::{LogLevel, RunLog},
    schedule::{GtfsSource, ScheduleIndex},
};

/// GTFS calendar date format, which service ids often follow
const GTFS_DATE_FORMAT: &str = "%Y%m%d";

/// runs the itinerary filter end to end: loads the schedule for one service
/// day, matches every itinerary leg to a trip, derives transfer connections
/// and writes the output tables.
///
/// `log.txt` is written to the output directory whether or not the run
/// succeeds. a fatal failure is recorded there as the final message.
pub fn run_filter(config: &FilterConfig) -> Result<FilterSummary, FilterError> {
    config.validate()?;
    log::info!(
        "starting itinerary filter at {}",
        chrono::Local::now().to_rfc3339()
    );
    let output_directory = Path::new(&config.output_directory);
    std::fs::create_dir_all(output_directory)?;

    let mut run_log = RunLog::new();
    let result = filter(config, output_directory, &mut run_log);
    let result = match result {
        Ok(mut summary) => {
            summary.n_warnings = run_log.count(LogLevel::Warn);
            summary.n_errors = run_log.count(LogLevel::Error);
            Ok(summary)
        }
        Err(e) => {
            run_log.fatal(e.to_string());
            Err(e)
        }
    };

    let log_path = output_directory.join(LOG_FILENAME);
    let flushed = run_log.flush(&log_path).map_err(|e| {
        FilterError::Write(format!(
            "Failed to write log file {}: {}",
            log_path.display(),
            e
        ))
    });
    let summary = result?;
    flushed?;
    Ok(summary)
}

/// reads the itinerary list. a missing, unreadable, null or empty list is fatal.
pub fn read_itineraries(filepath: &Path) -> Result<Vec<Itinerary>, FilterError> {
    let filename = filepath.display().to_string();
    let contents = std::fs::read_to_string(filepath)
        .map_err(|e| FilterError::ItineraryRead(filename.clone(), e.to_string()))?;
    if contents.trim().is_empty() {
        return Err(FilterError::NoItineraries(filename));
    }
    let itineraries: Option<Vec<Itinerary>> = serde_json::from_str(&contents)
        .map_err(|e| FilterError::ItineraryRead(filename.clone(), e.to_string()))?;
    match itineraries {
        Some(itineraries) if !itineraries.is_empty() => Ok(itineraries),
        _ => Err(FilterError::NoItineraries(filename)),
    }
}

fn filter(
    config: &FilterConfig,
    output_directory: &Path,
    run_log: &mut RunLog,
) -> Result<FilterSummary, FilterError> {
    log_service_date(&config.target_service_id);

    let source = GtfsSource::new(Path::new(&config.gtfs_path))?;
    let index = ScheduleIndex::from_source(&source, &config.target_service_id)?;
    log::info!(
        "loaded {} trips with service_id={} from {}",
        index.n_trips(),
        index.service_id(),
        source.path().display()
    );

    let itineraries = read_itineraries(Path::new(&config.itineraries_file))?;
    let n_legs: usize = itineraries.iter().map(|it| it.legs.len()).sum();
    log::info!(
        "matching {} legs from {} itineraries",
        n_legs,
        itineraries.len()
    );

    let matcher = LegMatcher::new(&index, config.match_window_min);
    let mut matched: Vec<(&Itinerary, Vec<MatchedLeg>)> = Vec::with_capacity(itineraries.len());
    for itinerary in itineraries.iter() {
        let legs = matcher.match_itinerary(itinerary, run_log);
        matched.push((itinerary, legs));
    }
    let n_legs_matched: usize = matched.iter().map(|(_, legs)| legs.len()).sum();
    if n_legs_matched == 0 {
        return Err(FilterError::NoLegsMatched);
    }

    let trip_rows = TripRow::from_matched_legs(
        matched.iter().flat_map(|(_, legs)| legs.iter()),
        &config.policy,
    );
    write_output(
        output_directory,
        TRIPS_FILENAME,
        &trip_rows,
        "trips",
        config.overwrite,
        run_log,
    )?;

    // connection ids are assigned in itinerary name order. the sort is stable,
    // so itineraries sharing a name keep their input order and stay separate.
    let mut by_name: Vec<&(&Itinerary, Vec<MatchedLeg>)> = matched.iter().collect();
    by_name.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name));
    let mut deriver = ConnectionDeriver::new(&index, &config.policy);
    let mut connections: Vec<TransferConnection> = vec![];
    for (itinerary, legs) in by_name {
        connections.extend(deriver.derive_connections(&itinerary.name, legs, run_log));
    }
    if connections.is_empty() {
        run_log.warn("No connections built (maybe all itineraries are single-leg).");
    } else {
        write_output(
            output_directory,
            CONNECTIONS_FILENAME,
            &connections,
            "connections",
            config.overwrite,
            run_log,
        )?;
    }

    if config.write_matched_legs {
        let leg_rows: Vec<MatchedLegRow> = matched
            .iter()
            .flat_map(|(_, legs)| legs.iter().map(MatchedLegRow::from))
            .collect();
        write_output(
            output_directory,
            LEGS_FILENAME,
            &leg_rows,
            "matched legs",
            config.overwrite,
            run_log,
        )?;
    }

    Ok(FilterSummary {
        n_itineraries: itineraries.len(),
        n_legs,
        n_legs_matched,
        n_trips: trip_rows.len(),
        n_connections: connections.len(),
        n_warnings: 0,
        n_errors: 0,
        output_directory: output_directory.to_path_buf(),
    })
}

fn write_output<T: serde::Serialize>(
    output_directory: &Path,
    filename: &str,
    rows: &[T],
    description: &str,
    overwrite: bool,
    run_log: &mut RunLog,
) -> Result<(), FilterError> {
    match output_ops::write_table(output_directory, filename, rows, overwrite)? {
        Some(filepath) => run_log.info(format!(
            "Wrote {} {} to {}",
            rows.len(),
            description,
            filepath.display()
        )),
        None => run_log.warn(format!(
            "{} already exists in {} and overwrite=false, leaving it unchanged",
            filename,
            output_directory.display()
        )),
    }
    Ok(())
}

/// service ids are opaque, but when one reads as a calendar date the weekday
/// is a useful sanity check for the user.
fn log_service_date(service_id: &str) {
    if let Ok(date) = NaiveDate::parse_from_str(service_id, GTFS_DATE_FORMAT) {
        log::info!(
            "target service_id={} reads as {} {}",
            service_id,
            date.weekday(),
            date
        );
    }
}
