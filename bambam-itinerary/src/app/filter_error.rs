use crate::schedule::ScheduleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("failure reading run configuration: {0}")]
    Configuration(String),
    #[error(transparent)]
    Schedule {
        #[from]
        source: ScheduleError,
    },
    #[error("failure reading itineraries from {0}: {1}")]
    ItineraryRead(String, String),
    #[error("{0} is empty or missing itineraries.")]
    NoItineraries(String),
    #[error("No legs were matched. Check the itineraries file and GTFS data.")]
    NoLegsMatched,
    #[error("{0}")]
    Write(String),
    #[error("failure preparing output directory: {source}")]
    StdIo {
        #[from]
        source: std::io::Error,
    },
}
