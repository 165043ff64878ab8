use crate::schedule::{record::StopTimeRecord, schedule_error::ScheduleError, time_ops};

/// one scheduled visit of one trip to one stop, with its times converted to
/// minutes since the start of the service day.
#[derive(Debug, Clone, PartialEq)]
pub struct StopVisit {
    pub trip_id: String,
    pub stop_id: String,
    pub stop_sequence: u32,
    /// raw GTFS arrival time, kept for reporting
    pub arrival_time: Option<String>,
    /// raw GTFS departure time, kept for reporting
    pub departure_time: Option<String>,
    pub arrival_min: Option<f64>,
    pub departure_min: Option<f64>,
    /// position of the source row in stop_times.txt. candidates that are
    /// otherwise equal are ranked by this value.
    pub row_index: usize,
}

impl StopVisit {
    pub fn try_from_record(
        record: StopTimeRecord,
        row_index: usize,
    ) -> Result<StopVisit, ScheduleError> {
        let arrival_min = time_ops::parse_optional_minutes(record.arrival_time.as_deref())?;
        let departure_min = time_ops::parse_optional_minutes(record.departure_time.as_deref())?;
        Ok(StopVisit {
            trip_id: record.trip_id,
            stop_id: record.stop_id,
            stop_sequence: record.stop_sequence,
            arrival_time: record.arrival_time,
            departure_time: record.departure_time,
            arrival_min,
            departure_min,
            row_index,
        })
    }
}
