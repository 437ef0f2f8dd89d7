//! Command implementations for the gun deaths data CLI.
//!
//! Provides subcommands to check that the state records join cleanly to a
//! map file and to print the numbers the charts are built from.

use clap::Subcommand;

pub mod config;
pub mod summary;
pub mod validate;

#[derive(Subcommand)]
pub enum Command {
    /// Join state records to a GeoJSON map and report unmatched names
    Validate {
        /// GeoJSON FeatureCollection of state outlines
        #[arg(short = 'g', long)]
        geojson: String,

        /// State records CSV (state,count,male_count,population)
        #[arg(short = 's', long)]
        states_csv: String,

        /// Feature property holding the state name
        #[arg(long, default_value = gdv_data::DEFAULT_NAME_PROPERTY)]
        name_property: String,

        /// Fail when any feature or record is left unmatched
        #[arg(long)]
        strict: bool,
    },

    /// Print rates, color thresholds, legend labels and bar order
    Summary {
        /// State records CSV (state,count,male_count,population)
        #[arg(short = 's', long)]
        states_csv: String,

        /// City records CSV (key,city,state,lat,lng,count)
        #[arg(short = 'c', long)]
        cities_csv: Option<String>,

        /// JSON file overriding map and bar chart settings
        #[arg(long)]
        config: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Validate {
            geojson,
            states_csv,
            name_property,
            strict,
        } => validate::run_validate(&geojson, &states_csv, &name_property, strict),
        Command::Summary {
            states_csv,
            cities_csv,
            config,
        } => summary::run_summary(&states_csv, cities_csv.as_deref(), config.as_deref()),
    }
}
