use serde::{Deserialize, Serialize};

/// a single row from stop_times.txt. times are kept as their raw GTFS strings
/// here and converted to minutes when the schedule index is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopTimeRecord {
    /// unique trip identifier
    pub trip_id: String,

    /// H:M:S, hours may exceed 23
    pub arrival_time: Option<String>,

    /// H:M:S, hours may exceed 23
    pub departure_time: Option<String>,

    pub stop_id: String,

    /// position of this visit within the trip (1, 2, 3, etc.)
    pub stop_sequence: u32,
}
