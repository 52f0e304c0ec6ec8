/// File organization into category subdirectories.
///
/// This module moves the top-level files of a directory into one subdirectory
/// per category, creating those subdirectories on demand. Subdirectories that
/// already exist at the top level are skipped, never recursed into.
///
/// A failure on one file is recorded and the run continues with the next.
use crate::file_category::{Category, classify, extension_of};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file organization operations.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The path is blank, missing, or not a directory.
    #[error("Not an existing directory: {}", path.display())]
    InvalidDirectory { path: PathBuf },

    /// The directory to organize could not be listed.
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDirectory { path: PathBuf, source: io::Error },

    /// A directory entry could not be inspected.
    #[error("Failed to inspect {}: {source}", path.display())]
    Inspect { path: PathBuf, source: io::Error },

    /// Failed to create a category directory.
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    /// Failed to move a file to its category directory.
    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    FileMoveFailure {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    /// The entry has no final name component to move.
    #[error("{} has no file name component", path.display())]
    MissingFileName { path: PathBuf },

    /// Reading the user's answer failed.
    #[error("Failed to read input: {source}")]
    Input { source: io::Error },
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// What happened to a single directory entry.
#[derive(Debug)]
pub enum EntryOutcome {
    /// The file now lives in its category directory.
    Moved {
        category: Category,
        destination: PathBuf,
    },
    /// The entry is a directory and was left alone.
    SkippedDirectory,
    /// The entry could not be organized.
    Failed(OrganizeError),
}

/// Record of one organization run, in listing order.
#[derive(Debug)]
pub struct OrganizeReport {
    /// The directory that was organized.
    pub root: PathBuf,
    /// Every processed entry name with its outcome.
    pub entries: Vec<(String, EntryOutcome)>,
}

impl OrganizeReport {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            entries: Vec::new(),
        }
    }

    /// Iterates moved files as (name, category, destination).
    pub fn moved(&self) -> impl Iterator<Item = (&str, Category, &Path)> {
        self.entries.iter().filter_map(|(name, outcome)| match outcome {
            EntryOutcome::Moved {
                category,
                destination,
            } => Some((name.as_str(), *category, destination.as_path())),
            _ => None,
        })
    }

    /// Iterates entries that failed, with their error.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &OrganizeError)> {
        self.entries.iter().filter_map(|(name, outcome)| match outcome {
            EntryOutcome::Failed(error) => Some((name.as_str(), error)),
            _ => None,
        })
    }

    /// Iterates the names of subdirectories that were skipped.
    pub fn skipped_directories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|(name, outcome)| match outcome {
            EntryOutcome::SkippedDirectory => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn moved_count(&self) -> usize {
        self.moved().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    /// Number of moved files per category.
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for (_, category, _) in self.moved() {
            *counts.entry(category).or_insert(0) += 1;
        }
        counts
    }

    /// Returns true if no entry failed.
    pub fn is_complete_success(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Organizes files by moving them into category subdirectories.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Lists the entry names of `root`, in the order the filesystem returns them.
    ///
    /// # Errors
    ///
    /// Returns `OrganizeError::ReadDirectory` if `root` cannot be listed.
    pub fn list_entries(root: &Path) -> OrganizeResult<Vec<OsString>> {
        let read_error = |source| OrganizeError::ReadDirectory {
            path: root.to_path_buf(),
            source,
        };

        fs::read_dir(root)
            .map_err(read_error)?
            .map(|entry| entry.map(|e| e.file_name()).map_err(read_error))
            .collect()
    }

    /// Ensures `root/<category>` exists and returns its path.
    ///
    /// Missing parent directories are created as well. An entry that already
    /// exists under that name, including one created concurrently by another
    /// process, counts as success. Any other creation error is returned.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::file_category::Category;
    /// use dirsort::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let dir = FileOrganizer::ensure_subdirectory(Path::new("/tmp/downloads"), Category::Images)?;
    /// assert!(dir.ends_with("images"));
    /// # Ok::<(), dirsort::OrganizeError>(())
    /// ```
    pub fn ensure_subdirectory(root: &Path, category: Category) -> OrganizeResult<PathBuf> {
        let path = root.join(category.dir_name());

        match fs::create_dir_all(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "category directory ready");
                Ok(path)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(path),
            Err(source) => Err(OrganizeError::DirectoryCreationFailed { path, source }),
        }
    }

    /// Moves `root/<name>` to `target_dir/<name>`, where `<name>` is the final
    /// component of `file_name`, and returns the destination.
    ///
    /// This is a single rename, so it only works within one filesystem. An
    /// existing file at the destination is replaced where the platform allows.
    ///
    /// # Arguments
    ///
    /// * `root` - The directory the file currently lives in
    /// * `target_dir` - The category directory to move it into
    /// * `file_name` - The entry name; only its last component is used
    ///
    /// # Returns
    ///
    /// Returns the destination path, or `OrganizeError::FileMoveFailure` if the
    /// rename fails and `OrganizeError::MissingFileName` if `file_name` has no
    /// final component.
    pub fn move_file(root: &Path, target_dir: &Path, file_name: &Path) -> OrganizeResult<PathBuf> {
        let base_name = file_name
            .file_name()
            .ok_or_else(|| OrganizeError::MissingFileName {
                path: file_name.to_path_buf(),
            })?;

        let from = root.join(base_name);
        let to = target_dir.join(base_name);

        fs::rename(&from, &to).map_err(|source| OrganizeError::FileMoveFailure {
            from,
            to: to.clone(),
            source,
        })?;

        Ok(to)
    }

    /// Classifies and moves a single entry of `root`.
    pub fn organize_entry(root: &Path, file_name: &Path) -> EntryOutcome {
        let path = root.join(file_name);

        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(source) => return EntryOutcome::Failed(OrganizeError::Inspect { path, source }),
        };

        if metadata.is_dir() {
            tracing::debug!(path = %path.display(), "skipping directory");
            return EntryOutcome::SkippedDirectory;
        }

        let extension = extension_of(file_name);
        let category = classify(&extension);
        tracing::debug!(file = %file_name.display(), extension = %extension, %category, "classified");

        let result = Self::ensure_subdirectory(root, category)
            .and_then(|target_dir| Self::move_file(root, &target_dir, file_name));

        match result {
            Ok(destination) => {
                tracing::info!(
                    from = %path.display(),
                    to = %destination.display(),
                    "moved file"
                );
                EntryOutcome::Moved {
                    category,
                    destination,
                }
            }
            Err(e) => EntryOutcome::Failed(e),
        }
    }

    /// Organizes the named entries of `root`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let root = Path::new("/path/to/downloads");
    /// let names = FileOrganizer::list_entries(root)?;
    /// let report = FileOrganizer::organize(&names, root);
    /// println!("moved {} files", report.moved_count());
    /// # Ok::<(), dirsort::OrganizeError>(())
    /// ```
    pub fn organize<P: AsRef<Path>>(file_names: &[P], root: &Path) -> OrganizeReport {
        Self::organize_with(file_names, root, |_, _| {})
    }

    /// Same as [`FileOrganizer::organize`], calling `on_entry` after each entry.
    ///
    /// Entries are processed in the order given. Directories are skipped, and a
    /// failure on one entry is logged and recorded before moving on to the next.
    ///
    /// # Arguments
    ///
    /// * `file_names` - Entry names relative to `root`, usually from [`FileOrganizer::list_entries`]
    /// * `root` - The directory being organized
    /// * `on_entry` - Called with each entry's name and outcome, as soon as it is known
    ///
    /// # Returns
    ///
    /// An `OrganizeReport` holding one outcome per entry, in processing order.
    pub fn organize_with<P, F>(file_names: &[P], root: &Path, mut on_entry: F) -> OrganizeReport
    where
        P: AsRef<Path>,
        F: FnMut(&str, &EntryOutcome),
    {
        let mut report = OrganizeReport::new(root);

        for file_name in file_names {
            let file_name = file_name.as_ref();
            let name = file_name.to_string_lossy().into_owned();
            let outcome = Self::organize_entry(root, file_name);

            if let EntryOutcome::Failed(ref e) = outcome {
                tracing::warn!(file = %name, error = %e, "could not organize file");
            }

            on_entry(&name, &outcome);
            report.entries.push((name, outcome));
        }

        report
    }
}
