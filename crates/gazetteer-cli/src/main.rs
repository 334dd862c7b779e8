//! gazetteer: command-line interface for gazetteer-core
//!
//! This binary loads a GeoNames country dump and answers the same questions
//! the HTTP server does, straight from the terminal.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ gazetteer --input RU.txt stats
//!
//! - Look a place up by geonameid
//!   $ gazetteer city 524901
//!
//! - Page through the records in file order
//!   $ gazetteer list --page 3 --size 50
//!
//! - Compare two places (Cyrillic input is transliterated)
//!   $ gazetteer compare Москва Владивосток
//!
//! - Autocomplete a prefix
//!   $ gazetteer complete Мос
//!
//! Data source
//! -----------
//!
//! Without `--input` (or `GAZETTEER_DATA`), the CLI reads `data/RU.txt` from
//! the `gazetteer-core` crate directory. A `.gz` path is decompressed on the fly.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use gazetteer_core::loader::DATA_SOURCE_URL;
use gazetteer_core::{DefaultGazetteer, GazetteerError, PlaceRecord, PlaceSearch};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_record<B: gazetteer_core::GeoBackend>(r: &PlaceRecord<B>) {
    println!("Name: {}", r.name());
    println!("Geonameid: {}", r.id());
    println!("ASCII name: {}", r.asciiname().unwrap_or(""));
    println!("Latitude: {:?}", r.latitude());
    println!("Longitude: {:?}", r.longitude());
    println!("Country: {}", r.country_code());
    println!("Feature: {}", r.feature_code().unwrap_or(""));
    println!("Population: {:?}", r.population());
    println!("Timezone: {}", r.timezone().unwrap_or(""));
    println!("Modified: {}", r.modification_date());
}

fn load(input: Option<PathBuf>) -> anyhow::Result<DefaultGazetteer> {
    let input_path = match input {
        Some(path) => path,
        None => {
            let path = DefaultGazetteer::default_dataset_path();
            debug!(path = %path.display(), "no --input given, using the default dataset");
            path
        }
    };
    DefaultGazetteer::load_from_path(&input_path).with_context(|| {
        format!(
            "loading {} (the dump is published at {DATA_SOURCE_URL})",
            input_path.display()
        )
    })
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = CliArgs::parse();
    debug!(command = ?args.command, "parsed arguments");

    match args.command {
        Commands::Translit { text } => {
            println!("{}", gazetteer_core::text::transliterate(&text));
        }

        Commands::Stats => {
            let stats = load(args.input)?.stats();
            println!("Gazetteer statistics:");
            println!("  Records: {}", stats.records);
            println!("  Distinct names: {}", stats.distinct_names);
        }

        Commands::City { id } => match load(args.input)?.city(id) {
            Ok(city) => print_record(city),
            Err(GazetteerError::NotFound(_)) => eprintln!("No city with geonameid {id}"),
            Err(e) => return Err(e.into()),
        },

        Commands::List { page, size } => {
            let db = load(args.input)?;
            let cities = db.cities_page(page, size)?;
            if cities.is_empty() {
                println!("Page {page} is empty");
            }
            for city in cities {
                let tz = city.timezone().unwrap_or("");
                println!("{}\t{}\t{tz}", city.id(), city.name());
            }
        }

        Commands::Compare { first, second } => {
            let db = load(args.input)?;
            match db.compare_cities(&first, &second) {
                Ok(cmp) => {
                    for city in cmp.cities {
                        let tz = city.timezone().unwrap_or("UTC");
                        println!("{} ({}), {tz}", city.name(), city.id());
                    }
                    println!("More northerly: {}", cmp.more_northerly);
                    println!("Same UTC offset now: {}", cmp.timezone_coincidence);
                    println!("Time shift: {}", cmp.time_shifting);
                }
                Err(GazetteerError::NotFound(what)) => eprintln!("{what} not found"),
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Complete { prefix } => {
            let db = load(args.input)?;
            let names = db.autocomplete(&prefix);
            if names.is_empty() {
                println!("No names starting with: {prefix}");
            }
            for name in names {
                println!("{name}");
            }
        }
    }

    Ok(())
}
