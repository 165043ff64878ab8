use serde::{Deserialize, Serialize};

/// a single row from routes.txt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    /// unique route identifier
    pub route_id: String,

    /// public-facing name, the value itinerary legs refer to
    pub route_short_name: Option<String>,
}
