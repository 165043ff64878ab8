mod gtfs_source;
pub mod record;
mod schedule_error;
mod schedule_index;
mod scheduled_trip;
mod stop_visit;
pub mod time_ops;

pub use gtfs_source::GtfsSource;
pub use schedule_error::ScheduleError;
pub use schedule_index::ScheduleIndex;
pub use scheduled_trip::ScheduledTrip;
pub use stop_visit::StopVisit;

#[cfg(test)]
pub(crate) use schedule_index::test as fixtures;
