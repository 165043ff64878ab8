/// reasons a single leg could not be bound to a scheduled trip. these are
/// soft failures: the leg is left out and the run continues.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LegMatchFailure {
    #[error("Invalid dep_time_str={dep_time_str} for route_short_name={route_short_name}: {message}")]
    InvalidDepartureTime {
        route_short_name: String,
        dep_time_str: String,
        message: String,
    },
    #[error("No trips found for route_short_name={route_short_name}")]
    NoTripsOnRoute { route_short_name: String },
    #[error("No stop_times at origin_stop_id={origin_stop_id} for route_short_name={route_short_name}")]
    NoOriginStopTimes {
        route_short_name: String,
        origin_stop_id: String,
    },
    #[error("No origin departure within window for route={route_short_name}, origin_stop_id={origin_stop_id}, dep_time={dep_time_str}, window=+/-{window_min} min")]
    NoDepartureInWindow {
        route_short_name: String,
        origin_stop_id: String,
        dep_time_str: String,
        window_min: f64,
    },
    #[error("No trip found that goes origin_stop_id={origin_stop_id} -> dest_stop_id={dest_stop_id} on route={route_short_name} around dep_time={dep_time_str}")]
    NoTripServesDestination {
        route_short_name: String,
        origin_stop_id: String,
        dest_stop_id: String,
        dep_time_str: String,
    },
}
