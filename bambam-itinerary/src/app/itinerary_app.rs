use clap::Parser;

use crate::app::operation::ItineraryOperation;

/// command line tool matching planned transit itineraries to scheduled GTFS trips
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ItineraryApp {
    #[command(subcommand)]
    pub op: ItineraryOperation,
}
