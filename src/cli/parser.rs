use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rollcall
#[derive(Parser)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile a roster against attendance check-in sheets into per-day present/absent tables",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path (useful for tests)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile a roster file against an attendance file
    Report {
        /// Roster file (.csv or .json): one row per enrolled person
        roster: String,

        /// Attendance file (.csv or .json): one row per check-in event
        attendance: String,

        /// Export format, used together with --out
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Write the report to FILE instead of printing it
        #[arg(long, value_name = "FILE")]
        out: Option<String>,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Validate a roster file without producing a report
    Check {
        /// Roster file (.csv or .json)
        roster: String,
    },

    /// List the distinct day labels found in an attendance file
    ///
    /// Labels come out in first-occurrence order, exactly as the report
    /// command will use them as table columns.
    Days {
        /// Attendance file (.csv or .json)
        attendance: String,
    },

    /// Manage the configuration file (header synonym tables)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },
}
