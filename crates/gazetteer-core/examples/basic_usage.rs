//! Basic usage example for gazetteer-core
//!
//! This example demonstrates how to:
//! - Load a GeoNames dump (defaults to the bundled test sample)
//! - Look a city up by id and page through the records
//! - Autocomplete a Cyrillic prefix
//! - Compare two cities
//!
//! Run with: `cargo run -p gazetteer-core --example basic_usage [path/to/RU.txt]`

use gazetteer_core::{DefaultGazetteer, PlaceSearch, Result};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("=== gazetteer-core Basic Usage Example ===\n");

    let path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sample.txt")
    });

    println!("Loading {}...", path.display());
    let db = DefaultGazetteer::load_from_path(&path)?;
    let stats = db.stats();
    println!(
        "✓ Loaded {} records ({} distinct names)\n",
        stats.records, stats.distinct_names
    );

    // Example 1: Lookup by id
    println!("--- Example 1: City by geonameid ---");
    match db.city(524901) {
        Ok(city) => {
            println!("Name: {}", city.name());
            println!("Latitude: {:?}", city.latitude());
            println!("Population: {:?}", city.population());
            println!("Timezone: {:?}", city.timezone());
        }
        Err(e) => println!("  {e}"),
    }
    println!();

    // Example 2: Paging
    println!("--- Example 2: Second page of five ---");
    for (i, city) in db.cities_page(2, 5)?.iter().enumerate() {
        println!("{}. {} ({})", i + 6, city.name(), city.id());
    }
    println!();

    // Example 3: Autocomplete
    println!("--- Example 3: Autocomplete \"Мос\" ---");
    for name in db.autocomplete("Мос") {
        println!("- {name}");
    }
    println!();

    // Example 4: Compare
    println!("--- Example 4: Compare Москва and Владивосток ---");
    match db.compare_cities("Москва", "Владивосток") {
        Ok(cmp) => {
            println!("More northerly: {}", cmp.more_northerly);
            println!("Same offset right now: {}", cmp.timezone_coincidence);
            println!("Time shift: {}", cmp.time_shifting);
        }
        Err(e) => println!("  {e}"),
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
