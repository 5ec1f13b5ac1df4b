use clap::{Parser, Subcommand};

/// CLI arguments for regiondb-cli
#[derive(Debug, Parser)]
#[command(
    name = "regiondb",
    version,
    about = "CLI for building the UN region hierarchy and flattening it into per-country tables"
)]
pub struct CliArgs {
    /// Path to the input region outline CSV (plain or .csv.gz)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Optional JSON grouping profile (default: the built-in UN M49 profile)
    #[arg(short = 'p', long = "profile", global = true)]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the built hierarchy
    Stats,

    /// List the countries under a region
    Region {
        /// Region name, case- and accent-insensitive (e.g. "Eastern Africa")
        name: String,
    },

    /// Check whether a region contains a country
    Contains {
        /// Region name
        region: String,
        /// ISO2 country code (e.g. KE)
        cc: String,
    },

    /// List the regions registered at each level
    Levels,

    /// Write per-region country lists for the profile's export levels
    Export {
        /// Output directory for the Countries_in_*.csv files
        #[arg(short = 'o', long = "out-dir", default_value = "data")]
        out_dir: String,
    },

    /// Write the flattened master table and its JSON schema descriptor
    Flatten {
        /// Output CSV path
        #[arg(
            short = 'o',
            long = "out",
            default_value = "geographic_regions_by_country.csv"
        )]
        out: String,
    },
}
