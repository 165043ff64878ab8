mod matched_leg_row;
pub mod output_ops;
mod trip_row;

pub use matched_leg_row::MatchedLegRow;
pub use trip_row::TripRow;
