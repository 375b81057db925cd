//! Command-line driver: resolve a location, fetch its checkpoints,
//! solve the tour, print the report.

use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use checkpoint_planner::api::{self, ApiClient, ApiConfig};
use checkpoint_planner::cache::CacheConfig;
use checkpoint_planner::error::Error;
use checkpoint_planner::maps;
use checkpoint_planner::matrix::DistanceMatrix;
use checkpoint_planner::models::Checkpoint;
use checkpoint_planner::solver::CheapestArcSolver;
use checkpoint_planner::traits::TourSolver;

#[derive(Parser, Debug)]
#[command(
    name = "checkpoint-planner",
    version,
    about = "Plan the shortest walking tour through a location's checkpoints"
)]
struct Args {
    /// Location name as published by the checkpoint service
    location: String,

    /// Checkpoint IDs to leave out, e.g. ones already collected
    #[arg(short, long, value_name = "ID", num_args = 1..)]
    exclude: Vec<i64>,

    /// Serve API responses from a local one-day cache
    #[arg(long)]
    cache: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::LookupNotFound { query, available }) => {
            let names = available
                .iter()
                .map(|name| format!("'{name}'"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("Didn't find a location named '{query}'. Choose from {names}.");
            ExitCode::FAILURE
        }
        Err(Error::NoSolution) => {
            println!("No tour found for these checkpoints.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let config = ApiConfig {
        cache: args.cache.then(CacheConfig::default),
        ..ApiConfig::default()
    };
    let client = ApiClient::new(config)?;

    let locations = client.locations()?;
    let location = api::resolve_location(&locations, &args.location)?;
    info!("found location {}", location.name);

    let mut checkpoints = client.checkpoints(location.id)?;
    info!("got {} checkpoints", checkpoints.len());

    if !args.exclude.is_empty() {
        let before = checkpoints.len();
        checkpoints.retain(|checkpoint| !args.exclude.contains(&checkpoint.id));
        info!("excluded {} checkpoints", before - checkpoints.len());
    }
    if checkpoints.is_empty() {
        return Err(Error::NoCheckpoints {
            location: location.name.clone(),
        });
    }

    let matrix = DistanceMatrix::projected(&checkpoints)?;
    let tour = CheapestArcSolver::default()
        .solve(&matrix)
        .ok_or(Error::NoSolution)?;

    let ordered: Vec<Checkpoint> = tour
        .order
        .iter()
        .map(|&index| checkpoints[index].clone())
        .collect();

    println!(
        "Optimal path through {} ({} checkpoints):",
        location.name,
        ordered.len()
    );
    for checkpoint in &ordered {
        println!("- {}: {}", checkpoint.number, checkpoint.short_description);
    }

    println!();
    for (i, url) in maps::directions_urls(&ordered).enumerate() {
        println!("Google Maps URL #{}:", i + 1);
        println!("{url}");
    }

    println!();
    println!(
        "Distance to travel: {:.1} km",
        tour.total_distance as f64 * 1e-3
    );

    Ok(())
}
