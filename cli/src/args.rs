use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "citycompare")]
#[command(version, about = "Compare French municipalities on rents and sale prices")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the commune table, rent surveys and land registry
    #[arg(short, long, global = true, env = "CITYCOMPARE_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose mode - show load diagnostics and lookup traces
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List regions
    Regions,

    /// List the departments of a region
    Departments {
        /// Region name, as listed by `regions`
        region: String,
    },

    /// List the communes of a department
    Cities {
        /// Department name, as listed by `departments`
        department: String,
    },

    /// Find communes by partial name
    Search {
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Territorial profile and housing prices of one commune
    Show {
        city: String,
    },

    /// Housing prices of two communes side by side
    Compare {
        /// First commune
        city1: String,

        /// Second commune
        city2: String,
    },
}
