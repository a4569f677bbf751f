use std::error::Error;
use std::path::PathBuf;

use surfsup::ClimateStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let file_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Resources/hawaii.sqlite"));

    println!("Inspecting climate database: {}", file_path.display());

    let store = ClimateStore::open(&file_path, 1).await?;

    println!("\n=== SCHEMA ===");
    match store.validate_schema().await {
        Ok(()) => println!("  measurement and station tables look usable"),
        Err(e) => println!("  {}", e),
    }

    let summary = store.dataset_summary().await?;
    println!("\n=== DATASET ===");
    println!("  observations: {}", summary.observation_count);
    println!("  stations:     {}", summary.station_count);
    match (summary.first_date, summary.last_date) {
        (Some(first), Some(last)) => println!("  dates:        {} to {}", first, last),
        _ => println!("  dates:        none"),
    }

    println!("\n=== BUSIEST STATION ===");
    let observations = store.most_active_station_observations().await?;
    match observations.first() {
        Some(first) => {
            println!("  {} with {} readings", first.station, observations.len());
            for observation in observations.iter().rev().take(5) {
                println!("    {}  {:.1}", observation.date, observation.tobs);
            }
        }
        None => println!("  no temperature readings"),
    }

    store.close().await;
    Ok(())
}
