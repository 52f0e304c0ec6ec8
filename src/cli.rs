//! Command-line interface module for dirsort.
//!
//! This module ties the pieces together:
//! - Argument definition
//! - Directory selection, from the argument or an interactive prompt
//! - Organization of the selected directory and reporting of the result

use crate::file_organizer::{
    EntryOutcome, FileOrganizer, OrganizeError, OrganizeReport, OrganizeResult,
};
use crate::output::OutputFormatter;
use crate::prompt::{InputSession, PromptOutcome, prompt_for_directory, validate_directory};
use clap::{Parser, ValueHint};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Sort the files of a directory into category subdirectories.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Sort the top-level files of a directory into category subdirectories"
)]
pub struct Cli {
    /// Directory to organize. You are asked for one when it is omitted.
    #[arg(value_name = "DIRECTORY", value_hint = ValueHint::DirPath)]
    pub directory: Option<PathBuf>,
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The user quit at the prompt; nothing was touched.
    Quit,
    /// The selected directory has no entries.
    EmptyDirectory(PathBuf),
    /// The directory was organized.
    Organized(OrganizeReport),
}

/// Runs dirsort for the parsed arguments.
///
/// Without a directory argument the user is prompted on standard input.
///
/// # Errors
///
/// Returns `OrganizeError::InvalidDirectory` if the argument is not an
/// existing directory, and propagates listing and input failures.
///
/// # Examples
///
/// ```no_run
/// use dirsort::cli::{Cli, run_cli};
/// use std::path::PathBuf;
///
/// let cli = Cli { directory: Some(PathBuf::from("/path/to/downloads")) };
/// match run_cli(&cli) {
///     Ok(outcome) => println!("{:?}", outcome),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(cli: &Cli) -> OrganizeResult<RunOutcome> {
    match &cli.directory {
        Some(directory) => {
            if !validate_directory(directory) {
                return Err(OrganizeError::InvalidDirectory {
                    path: directory.clone(),
                });
            }
            organize_directory(directory)
        }
        None => run_interactive(InputSession::stdio()),
    }
}

/// Asks for a directory through `session`, then organizes it.
pub fn run_interactive<R: BufRead, W: Write>(
    session: InputSession<R, W>,
) -> OrganizeResult<RunOutcome> {
    match prompt_for_directory(session)? {
        PromptOutcome::Quit => {
            OutputFormatter::info("No directory selected. Nothing was organized.");
            Ok(RunOutcome::Quit)
        }
        PromptOutcome::Directory(directory) => organize_directory(&directory),
    }
}

/// Organizes every top-level file of `root`.
///
/// This function:
/// 1. Lists the entries of the directory
/// 2. Stops with a notice if there are none
/// 3. Classifies and moves each file, printing one line per file
/// 4. Prints a per-category summary
pub fn organize_directory(root: &Path) -> OrganizeResult<RunOutcome> {
    let file_names = FileOrganizer::list_entries(root)?;

    if file_names.is_empty() {
        OutputFormatter::plain("There are no files specified in the directory you typed.");
        OutputFormatter::plain(&format!("Directory typed: {}", root.display()));
        return Ok(RunOutcome::EmptyDirectory(root.to_path_buf()));
    }

    OutputFormatter::info(&format!("Organizing contents of: {}", root.display()));

    let pb = OutputFormatter::create_progress_bar(file_names.len() as u64);
    let report = FileOrganizer::organize_with(&file_names, root, |name, outcome| {
        pb.suspend(|| print_entry(name, outcome));
        pb.inc(1);
    });
    pb.finish_and_clear();

    print_summary(&report);
    Ok(RunOutcome::Organized(report))
}

fn print_entry(name: &str, outcome: &EntryOutcome) {
    match outcome {
        EntryOutcome::Moved { category, .. } => {
            OutputFormatter::success(&format!("{} → {}/", name, category.dir_name()));
        }
        EntryOutcome::Failed(e) => OutputFormatter::error(&format!("{}: {}", name, e)),
        EntryOutcome::SkippedDirectory => {}
    }
}

fn print_summary(report: &OrganizeReport) {
    let moved = report.moved_count();
    if moved > 0 {
        OutputFormatter::summary_table(&report.category_counts(), moved);
    }

    if report.is_complete_success() {
        OutputFormatter::success("Files successfully organized!");
    } else {
        OutputFormatter::warning(&format!(
            "{} of {} files could not be organized. Please review errors above.",
            report.failed_count(),
            report.failed_count() + moved
        ));
    }
}
