//! Output formatting and styling module.
//!
//! All user-facing console output goes through [`OutputFormatter`], so the
//! styling of status lines, the progress bar and the summary table lives in
//! one place. Diagnostics go through `tracing` instead.

use crate::file_category::Category;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;

/// Manages all CLI output with consistent styling and formatting.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    ///
    /// ```no_run
    /// use dirsort::output::OutputFormatter;
    /// OutputFormatter::success("Files successfully organized!");
    /// ```
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Creates and returns a progress bar for an organization run.
    ///
    /// indicatif draws to stderr and hides itself when that is not a terminal.
    ///
    /// # Arguments
    ///
    /// * `total` - Number of directory entries to process
    ///
    /// # Returns
    ///
    /// A configured `ProgressBar` ready for use.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dirsort::output::OutputFormatter;
    /// let pb = OutputFormatter::create_progress_bar(12);
    /// pb.inc(1);
    /// pb.finish_and_clear();
    /// ```
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        // The template is a literal; fall back to the default style if it is ever rejected.
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("█▓░"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    }

    /// Prints a table of moved files per category.
    ///
    /// # Arguments
    ///
    /// * `category_counts` - Moved file count for each category that received files
    /// * `total_files` - Total number of files moved
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dirsort::file_category::Category;
    /// use dirsort::output::OutputFormatter;
    /// use std::collections::BTreeMap;
    ///
    /// let mut counts = BTreeMap::new();
    /// counts.insert(Category::Documents, 15);
    /// counts.insert(Category::Images, 8);
    /// OutputFormatter::summary_table(&counts, 23);
    /// ```
    pub fn summary_table(category_counts: &BTreeMap<Category, usize>, total_files: usize) {
        Self::header("SUMMARY");

        let width = category_counts
            .keys()
            .map(|category| category.dir_name().len())
            .max()
            .unwrap_or(0)
            .max("Category".len());

        println!(
            "{:<width$} | {}",
            "Category".bold(),
            "Files".bold(),
            width = width
        );
        println!("{}", "-".repeat(width + 10));

        for (category, count) in category_counts {
            println!(
                "{:<width$} | {} {}",
                category.dir_name(),
                count.to_string().green(),
                plural_files(*count),
                width = width
            );
        }

        println!("{}", "-".repeat(width + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total_files.to_string().green().bold(),
            plural_files(total_files),
            width = width
        );
    }
}

fn plural_files(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_files() {
        assert_eq!(plural_files(0), "files");
        assert_eq!(plural_files(1), "file");
        assert_eq!(plural_files(7), "files");
    }

    #[test]
    fn test_progress_bar_length() {
        let pb = OutputFormatter::create_progress_bar(4);
        assert_eq!(pb.length(), Some(4));
        pb.inc(1);
        assert_eq!(pb.position(), 1);
    }
}
