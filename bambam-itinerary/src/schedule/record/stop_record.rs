use serde::{Deserialize, Serialize};

/// a single row from stops.txt. only used to produce diagnostics for
/// itinerary authors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopRecord {
    pub stop_id: String,
    pub stop_name: Option<String>,
    /// station grouping this stop, if any. two platforms of one station
    /// share a parent_station.
    pub parent_station: Option<String>,
}
