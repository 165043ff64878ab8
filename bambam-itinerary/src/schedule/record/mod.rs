mod route_record;
mod stop_record;
mod stop_time_record;
mod trip_record;

pub use route_record::RouteRecord;
pub use stop_record::StopRecord;
pub use stop_time_record::StopTimeRecord;
pub use trip_record::TripRecord;
