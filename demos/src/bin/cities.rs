use std::process::ExitCode;

use aoc_demos::cities::{RoadMap, plan};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let map = RoadMap::default();
    let solution = match plan(&map, "Mannheim", "Bremen") {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("search failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("{}", solution.stats);

    match solution.into_pair() {
        Some((km, trip)) => {
            let stops: Vec<_> = trip.stops().collect();
            println!("{} ({km} km)", stops.join(" -> "));
            ExitCode::SUCCESS
        }
        None => {
            println!("Bremen is unreachable from Mannheim");
            ExitCode::FAILURE
        }
    }
}
