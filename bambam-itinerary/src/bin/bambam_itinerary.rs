//! matches planned itineraries to the scheduled trips of one GTFS service day
//! and writes the trips and transfer connections they use.
use bambam_itinerary::app::ItineraryApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = ItineraryApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
