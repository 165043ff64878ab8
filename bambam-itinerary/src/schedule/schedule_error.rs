use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error("GTFS source {0} is missing required table {1}")]
    MissingTable(PathBuf, String),
    #[error("GTFS archive {0} contains table {1} more than once")]
    DuplicateTable(PathBuf, String),
    #[error("failure reading GTFS source {0}: {1}")]
    Read(PathBuf, String),
    #[error("failure decoding row of {0}: {1}")]
    Csv(String, csv::Error),
    #[error("invalid GTFS time '{0}', expected H:M:S")]
    InvalidTime(String),
    #[error("No trips found with service_id={0}. Check target_service_id and trips.txt.")]
    NoTripsForService(String),
}
