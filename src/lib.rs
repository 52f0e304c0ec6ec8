//! dirsort - sort the top-level files of a directory into category folders.
//!
//! Files are classified by extension into a fixed set of categories (images,
//! documents, development, audio, video, executable, other) and moved into a
//! subdirectory named after their category. Subdirectories are never entered.

pub mod cli;
pub mod file_category;
pub mod file_organizer;
pub mod output;
pub mod prompt;

pub use file_category::{Category, ExtensionTable, classify};
pub use file_organizer::{EntryOutcome, FileOrganizer, OrganizeError, OrganizeReport};
pub use prompt::{InputSession, PromptOutcome, prompt_for_directory, validate_directory};

pub use cli::{Cli, RunOutcome, run_cli};
