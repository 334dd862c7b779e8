use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for gazetteer
#[derive(Debug, Parser)]
#[command(
    name = "gazetteer",
    version,
    about = "Query a GeoNames country dump: lookups, paging, autocomplete and comparisons"
)]
pub struct CliArgs {
    /// Path to the tab-separated dump (RU.txt, or RU.txt.gz)
    #[arg(short = 'i', long = "input", global = true, env = "GAZETTEER_DATA")]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded records
    Stats,

    /// Show one place by geonameid
    City {
        /// GeoNames identifier (e.g. 524901)
        id: u64,
    },

    /// List one page of places in file order
    List {
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Places per page
        #[arg(short, long, default_value_t = 20)]
        size: usize,
    },

    /// Compare two places by latitude and current UTC offset
    Compare {
        /// First place name (Cyrillic or Latin)
        first: String,
        /// Second place name (Cyrillic or Latin)
        second: String,
    },

    /// Names starting with a prefix (Cyrillic is transliterated first)
    Complete { prefix: String },

    /// Print the Latin transliteration of a text
    Translit { text: String },
}
