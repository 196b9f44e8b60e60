mod cli;
mod terminal;

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};

use gradebook_core::config::load_dotenv;
use gradebook_core::{AnswerKey, Config, GradeReport};
use gradebook_grading::{
    grade_batch, grade_document, locate_roll_number, normalize, segment_answers, to_json,
    write_delimited, Submission,
};
use gradebook_ingest::{extract_text, extractor_for, load_answer_key};

use crate::cli::{CliArgs, Command, OutputFormat};
use crate::terminal::Terminal;

fn main() -> Result<()> {
    load_dotenv();
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    config.log_summary();

    let args = CliArgs::parse();
    let terminal = Terminal::new();

    match args.command {
        Command::Grade {
            submission,
            key,
            format,
            output,
            delimiter,
        } => {
            let format = match format {
                Some(f) => f,
                None => OutputFormat::from_config(&config.output.format).unwrap_or_else(|| {
                    warn!(format = %config.output.format, "Unknown output format, using table");
                    OutputFormat::Table
                }),
            };
            let delimiter = resolve_delimiter(delimiter, &config);
            run_grade(&terminal, &submission, &key, format, output.as_deref(), delimiter)
        }
        Command::Batch {
            submissions,
            key,
            output_dir,
            workers,
        } => {
            let (output_dir, workers) = resolve_batch_settings(output_dir, workers, &config);
            run_batch(&submissions, &key, &output_dir, workers, config.output.delimiter)
        }
        Command::Segment { submission } => run_segment(&terminal, &submission),
    }
}

/// Flag first, then the profile-resolved config.
fn resolve_delimiter(flag: Option<char>, config: &Config) -> char {
    flag.unwrap_or(config.output.delimiter)
}

/// Flags first, then the profile-resolved config.
fn resolve_batch_settings(
    output_dir: Option<PathBuf>,
    workers: Option<usize>,
    config: &Config,
) -> (PathBuf, usize) {
    (
        output_dir.unwrap_or_else(|| config.output.dir.clone()),
        workers.unwrap_or(config.batch.workers),
    )
}

fn run_grade(
    terminal: &Terminal,
    submission: &Path,
    key_path: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    delimiter: char,
) -> Result<()> {
    let key = load_key(key_path)?;
    let (name, bytes) = read_submission(submission)?;
    let extractor = extractor_for(&name)?;
    let report = grade_document(&bytes, extractor.as_ref(), &key)
        .with_context(|| format!("failed to grade '{}'", submission.display()))?;

    match (format, output) {
        (OutputFormat::Table, None) => terminal.print_report(&report),
        (OutputFormat::Table, Some(_)) => bail!("table format prints to stdout; use csv or json with --output"),
        (format, Some(path)) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create '{}'", path.display()))?;
            let mut out = BufWriter::new(file);
            write_report(&report, format, delimiter, &mut out)?;
            out.flush()?;
            info!(path = %path.display(), "wrote gradebook");
            Ok(())
        }
        (format, None) => {
            let mut out = io::stdout().lock();
            write_report(&report, format, delimiter, &mut out)
        }
    }
}

fn run_batch(
    paths: &[PathBuf],
    key_path: &Path,
    output_dir: &Path,
    workers: usize,
    delimiter: char,
) -> Result<()> {
    let targets = gradebook_targets(paths, output_dir)?;
    let key = load_key(key_path)?;
    let submissions = paths
        .iter()
        .map(|p| read_submission(p).map(|(name, bytes)| Submission { name, bytes }))
        .collect::<Result<Vec<_>>>()?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create '{}'", output_dir.display()))?;

    let outcomes = grade_batch(&submissions, &key, workers).context("failed to start worker pool")?;

    let mut failed = 0usize;
    for (outcome, target) in outcomes.iter().zip(&targets) {
        match &outcome.result {
            Ok(report) => {
                let file = File::create(target)
                    .with_context(|| format!("failed to create '{}'", target.display()))?;
                let mut out = BufWriter::new(file);
                write_delimited(report, &mut out, delimiter)?;
                out.flush()?;
                println!(
                    "{}\t{}\t{}/{}\t{}",
                    outcome.name,
                    report.roll_number,
                    report.total_obtained,
                    report.total_possible,
                    target.display()
                );
            }
            Err(e) => {
                failed += 1;
                eprintln!("{}\terror: {}", outcome.name, e);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} submissions could not be graded", failed, outcomes.len());
    }
    Ok(())
}

fn run_segment(terminal: &Terminal, submission: &Path) -> Result<()> {
    let (name, bytes) = read_submission(submission)?;
    let text = extract_text(&bytes, &name)
        .with_context(|| format!("failed to extract text from '{}'", submission.display()))?;
    let answers = normalize(&segment_answers(&text));
    terminal.print_answers(&locate_roll_number(&text), &answers)
}

fn load_key(path: &Path) -> Result<AnswerKey> {
    let key = load_answer_key(path)
        .with_context(|| format!("failed to load answer key '{}'", path.display()))?;
    if key.is_empty() {
        warn!(path = %path.display(), "answer key is empty");
    }
    Ok(key)
}

fn read_submission(path: &Path) -> Result<(String, Vec<u8>)> {
    let bytes = fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok((name, bytes))
}

fn write_report<W: Write>(
    report: &GradeReport,
    format: OutputFormat,
    delimiter: char,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", to_json(report)?)?,
        _ => write_delimited(report, out, delimiter)?,
    }
    Ok(())
}

/// Output path for each submission. Fails before anything is graded when two
/// submissions would write the same file.
fn gradebook_targets(paths: &[PathBuf], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut claimed: HashMap<String, &Path> = HashMap::new();
    let mut targets = Vec::with_capacity(paths.len());
    for path in paths {
        let name = gradebook_file_name(path);
        if let Some(previous) = claimed.insert(name.clone(), path.as_path()) {
            bail!(
                "'{}' and '{}' would both be written to '{}'; rename one of them",
                previous.display(),
                path.display(),
                name
            );
        }
        targets.push(output_dir.join(name));
    }
    Ok(targets)
}

/// `<stem>.csv` for a submission path.
fn gradebook_file_name(submission: &Path) -> String {
    let stem = submission
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "submission".to_string());
    format!("{stem}.csv")
}
