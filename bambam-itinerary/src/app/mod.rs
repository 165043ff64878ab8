mod filter_config;
mod filter_error;
pub mod filter_ops;
mod filter_summary;
mod itinerary_app;
mod operation;

pub use filter_config::FilterConfig;
pub use filter_error::FilterError;
pub use filter_summary::FilterSummary;
pub use itinerary_app::ItineraryApp;
pub use operation::ItineraryOperation;
