use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Keep a student roster: add, search, sort and export records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (overrides ROSTER_HOME)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: StudentArgs,
    },

    /// List students
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Change fields of a student; omitted fields keep their value
    #[command(alias = "e")]
    Edit {
        /// Index of the student (as shown by `list`)
        index: usize,

        #[command(flatten)]
        fields: StudentArgs,
    },

    /// Delete one or more students
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the students (e.g. 1 3 5 or 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Write a plain-text report of the (searched, sorted) roster
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Directory for the report file (defaults to export-dir, then the data directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Print the report instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (slot, export-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Search and sort options shared by `list` and `export`.
#[derive(Args, Debug, Default)]
pub struct ViewArgs {
    /// Only show students matching this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort fields, comma separated (e.g. lastName,firstName or averageGrade)
    #[arg(long, value_delimiter = ',', value_name = "FIELDS")]
    pub sort: Vec<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}

#[derive(Args, Debug, Default)]
pub struct StudentArgs {
    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub middle_name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Date of birth, YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    pub birth_date: Option<String>,

    #[arg(long)]
    pub group: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Budget or Contract
    #[arg(long, value_name = "TYPE")]
    pub education_type: Option<String>,

    /// Grades 0-100, separated by spaces (e.g. "85 90 77.5")
    #[arg(long)]
    pub grades: Option<String>,
}
