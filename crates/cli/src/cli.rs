use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Grade exam submissions against an answer key.
///
/// Extracts answers from PDF or text submissions, scores each one by
/// character similarity to the reference answer, and writes a gradebook.
#[derive(Parser, Debug)]
#[command(name = "gradebook", version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Grade one submission and print or save its gradebook.
    Grade {
        /// Submission file (.pdf, .txt)
        submission: PathBuf,

        /// Answer key file (.json, .yaml, .yml)
        #[arg(long, short)]
        key: PathBuf,

        /// Output format (defaults to GRADEBOOK_FORMAT, then "table")
        #[arg(long, short, value_enum)]
        format: Option<OutputFormat>,

        /// Write to this file instead of stdout (csv or json only)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Field delimiter for csv output (defaults to GRADEBOOK_DELIMITER, then ",")
        #[arg(long)]
        delimiter: Option<char>,
    },

    /// Grade many submissions in parallel, one csv file each.
    Batch {
        /// Submission files (.pdf, .txt)
        #[arg(required = true)]
        submissions: Vec<PathBuf>,

        /// Answer key file (.json, .yaml, .yml)
        #[arg(long, short)]
        key: PathBuf,

        /// Directory for the generated gradebooks (defaults to GRADEBOOK_OUTPUT_DIR)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Worker threads, 0 = one per core (defaults to GRADEBOOK_WORKERS)
        #[arg(long)]
        workers: Option<usize>,
    },

    /// Print the answers segmented from a submission, without scoring.
    Segment {
        /// Submission file (.pdf, .txt)
        submission: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    /// Parse a configured format name, if it is one we know.
    pub fn from_config(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}
