use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "migracheck")]
#[command(version)]
#[command(about = "Log migraine episodes and review them by month and year")]
pub struct Cli {
    /// Data directory (defaults to ~/.migracheck)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log or replace the entry for a day
    Log(LogArgs),

    /// Delete the entry for a day
    Delete {
        /// Day to clear (YYYY-MM-DD)
        date: String,
    },

    /// Show the entry for a day
    Show {
        /// Day to show (YYYY-MM-DD)
        date: String,
    },

    /// Print the calendar grid for a month
    Calendar {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// Per-day statistics for a month
    Month {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(long)]
        month: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Per-month statistics for a year
    Year {
        /// Year to show (YYYY, defaults to the current year)
        #[arg(long)]
        year: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print version information
    Version,
}

#[derive(Args, Debug, Default)]
pub struct LogArgs {
    /// Day to log (YYYY-MM-DD)
    pub date: String,

    /// Intensity from 0 (none) to 10
    #[arg(short, long, default_value_t = 0)]
    pub intensity: u8,

    /// Free-text notes
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Medication doses taken
    #[arg(short, long, default_value_t = 0)]
    pub medication: u32,

    #[arg(long)]
    pub tooth_pain: bool,

    #[arg(long)]
    pub good_sleep: bool,

    /// Menstruation
    #[arg(long)]
    pub period: bool,

    #[arg(long)]
    pub hydration: bool,

    #[arg(long)]
    pub caffeine: bool,

    #[arg(long)]
    pub exercise: bool,

    #[arg(long)]
    pub stress: bool,

    /// Weather or pressure change
    #[arg(long)]
    pub weather: bool,
}
