mod itinerary_input;
mod leg_match_failure;
mod leg_matcher;
mod matched_leg;

pub use itinerary_input::{Itinerary, Leg};
pub use leg_match_failure::LegMatchFailure;
pub use leg_matcher::{LegMatcher, DEFAULT_MATCH_WINDOW_MIN};
pub use matched_leg::{MatchedLeg, TripMatch};
