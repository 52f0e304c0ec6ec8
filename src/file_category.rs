//! File categorization by extension.
//!
//! This module maps file extensions to the fixed set of categories a directory
//! is sorted into. Lookup tables are checked in priority order, so an extension
//! listed under more than one category resolves to the first one.
//!
//! # Examples
//!
//! ```
//! use dirsort::file_category::{Category, classify};
//!
//! assert_eq!(classify(".png"), Category::Images);
//! assert_eq!(classify(".MP3"), Category::Audio);
//! assert_eq!(classify(".xyz"), Category::Other);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

/// Represents a file category.
///
/// Each category owns one subdirectory of the organized directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Installers and binaries (EXE, MSI, DEB, etc.)
    Executable,
    /// Image files (PNG, JPG, PSD, etc.)
    Images,
    /// Document files (TXT, PDF, DOCX, etc.)
    Documents,
    /// Source code and scripts (PY, RS, JS, etc.)
    Development,
    /// Audio files (MP3, FLAC, WAV, etc.)
    Audio,
    /// Video files (MP4, MKV, MOV, etc.)
    Video,
    /// Anything not matched by another category
    Other,
}

impl Category {
    /// Every category, in lookup priority order.
    pub const ALL: [Category; 7] = [
        Category::Executable,
        Category::Images,
        Category::Documents,
        Category::Development,
        Category::Audio,
        Category::Video,
        Category::Other,
    ];

    /// Returns the subdirectory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::file_category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "images");
    /// assert_eq!(Category::Development.dir_name(), "development");
    /// assert_eq!(Category::Other.dir_name(), "other");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Executable => "executable",
            Category::Images => "images",
            Category::Documents => "documents",
            Category::Development => "development",
            Category::Audio => "audio",
            Category::Video => "video",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

const EXECUTABLE_EXTENSIONS: &[&str] = &[
    ".exe", ".msi", ".com", ".appimage", ".deb", ".rpm", ".apk", ".dmg", ".pkg",
];

const IMAGE_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".bmp", ".tff", ".tiff", ".svg", ".webp", ".heic", ".heif",
    ".raw", ".nef", ".cr2", ".orf", ".psd",
];

const DOCUMENT_EXTENSIONS: &[&str] = &[
    ".txt", ".rtf", ".docx", ".doc", ".xls", ".xlsx", ".ods", ".csv", ".ppt", ".pptx", ".odp",
    ".key", ".pdf", ".xps", ".epub", ".mobi", ".azw", ".azw3", ".md", ".rst", ".html", ".xml",
    ".json",
];

const DEVELOPMENT_EXTENSIONS: &[&str] = &[
    ".js", ".mjs", ".cjs", ".ts", ".tsx", ".jsx", ".py", ".rb", ".java", ".kt", ".c", ".h", ".cpp",
    ".hpp", ".cc", ".cs", ".go", ".rs", ".php", ".swift", ".sh", ".bash", ".ps1", ".bat", ".css",
    ".scss", ".sass", ".less", ".sql", ".yaml", ".yml", ".toml", ".ini", ".lua", ".pl", ".r",
    ".dart", ".vue", ".ipynb",
];

const AUDIO_EXTENSIONS: &[&str] = &[
    ".wav", ".aiff", ".flac", ".m4a", ".mp3", ".aac", ".ogg", ".wma", ".opus",
];

const VIDEO_EXTENSIONS: &[&str] = &[
    ".mp4", ".avi", ".mov", ".wmv", ".webm", ".flv", ".mkv", ".mpeg", ".mpg", ".mts", ".m2ts",
    ".3gp", ".mxf",
];

/// Built once on first use and never mutated.
static STANDARD_TABLE: LazyLock<ExtensionTable> = LazyLock::new(ExtensionTable::new);

/// Ordered list of (category, extension set) pairs.
///
/// Extensions are stored lower-case with their leading dot. `Category::Other`
/// has no entry; it is the fallback when no set matches.
#[derive(Debug, Clone)]
pub struct ExtensionTable {
    groups: Vec<(Category, HashSet<&'static str>)>,
}

impl ExtensionTable {
    /// Creates the standard table in priority order.
    pub fn new() -> Self {
        let groups: Vec<(Category, HashSet<&'static str>)> = [
            (Category::Executable, EXECUTABLE_EXTENSIONS),
            (Category::Images, IMAGE_EXTENSIONS),
            (Category::Documents, DOCUMENT_EXTENSIONS),
            (Category::Development, DEVELOPMENT_EXTENSIONS),
            (Category::Audio, AUDIO_EXTENSIONS),
            (Category::Video, VIDEO_EXTENSIONS),
        ]
        .into_iter()
        .map(|(category, extensions)| (category, extensions.iter().copied().collect()))
        .collect();

        Self { groups }
    }

    /// Returns the shared standard table.
    pub fn standard() -> &'static ExtensionTable {
        &STANDARD_TABLE
    }

    /// Returns the extensions registered for a category, if it has a table.
    pub fn extensions(&self, category: Category) -> Option<&HashSet<&'static str>> {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, set)| set)
    }

    /// Iterates the (category, extension set) pairs in priority order.
    pub fn groups(&self) -> impl Iterator<Item = (Category, &HashSet<&'static str>)> {
        self.groups.iter().map(|(category, set)| (*category, set))
    }

    /// Maps an extension to a category.
    ///
    /// The extension is lower-cased, then matched exactly against each set
    /// in priority order. Unknown and empty extensions map to `Category::Other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::file_category::{Category, ExtensionTable};
    ///
    /// let table = ExtensionTable::new();
    /// assert_eq!(table.classify(".EXE"), Category::Executable);
    /// assert_eq!(table.classify(".py"), Category::Development);
    /// assert_eq!(table.classify(""), Category::Other);
    /// ```
    pub fn classify(&self, extension: &str) -> Category {
        let ext = extension.to_lowercase();

        // .exe wins regardless of what the other sets contain
        if ext == ".exe" {
            return Category::Executable;
        }

        self.groups
            .iter()
            .find(|(_, set)| set.contains(ext.as_str()))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Classifies an extension against the standard table.
pub fn classify(extension: &str) -> Category {
    ExtensionTable::standard().classify(extension)
}

/// Returns the extension of a file name, with its leading dot.
///
/// A name without a dot, or whose only dot is the first character
/// (`.bashrc`), has no extension and yields an empty string. Case is preserved.
///
/// # Examples
///
/// ```
/// use dirsort::file_category::extension_of;
/// use std::path::Path;
///
/// assert_eq!(extension_of(Path::new("photo.JPG")), ".JPG");
/// assert_eq!(extension_of(Path::new("archive.tar.gz")), ".gz");
/// assert_eq!(extension_of(Path::new("README")), "");
/// assert_eq!(extension_of(Path::new(".bashrc")), "");
/// ```
pub fn extension_of(file_name: &Path) -> String {
    file_name
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_dir_names() {
        assert_eq!(Category::Executable.dir_name(), "executable");
        assert_eq!(Category::Images.dir_name(), "images");
        assert_eq!(Category::Documents.dir_name(), "documents");
        assert_eq!(Category::Development.dir_name(), "development");
        assert_eq!(Category::Audio.dir_name(), "audio");
        assert_eq!(Category::Video.dir_name(), "video");
        assert_eq!(Category::Other.dir_name(), "other");
    }

    #[test]
    fn test_every_table_extension_classifies_to_its_category() {
        let table = ExtensionTable::new();
        for (category, extensions) in table.groups() {
            for ext in extensions {
                assert_eq!(table.classify(ext), category, "extension {}", ext);
                assert_eq!(
                    table.classify(&ext.to_uppercase()),
                    category,
                    "upper-case extension {}",
                    ext
                );
            }
        }
    }

    #[test]
    fn test_extension_belongs_to_one_category() {
        let table = ExtensionTable::new();
        let mut seen = HashSet::new();
        for (_, extensions) in table.groups() {
            for ext in extensions {
                assert!(seen.insert(*ext), "{} is listed twice", ext);
                assert!(ext.starts_with('.'));
                assert_eq!(*ext, ext.to_lowercase());
            }
        }
    }

    #[test]
    fn test_classify_exe_is_executable() {
        assert_eq!(classify(".exe"), Category::Executable);
        assert_eq!(classify(".EXE"), Category::Executable);
        assert_eq!(classify(".Exe"), Category::Executable);
    }

    #[test]
    fn test_classify_mixed_case() {
        assert_eq!(classify(".JPG"), Category::Images);
        assert_eq!(classify(".Pdf"), Category::Documents);
        assert_eq!(classify(".RS"), Category::Development);
        assert_eq!(classify(".Flac"), Category::Audio);
        assert_eq!(classify(".MKV"), Category::Video);
    }

    #[test]
    fn test_classify_development_requires_exact_match() {
        assert_eq!(classify(".py"), Category::Development);
        assert_eq!(classify(".pyc"), Category::Other);
        assert_eq!(classify(".xyz"), Category::Other);
        assert_eq!(classify("py"), Category::Other);
    }

    #[test]
    fn test_documents_take_priority_for_markup() {
        assert_eq!(classify(".json"), Category::Documents);
        assert_eq!(classify(".html"), Category::Documents);
        assert_eq!(classify(".xml"), Category::Documents);
    }

    #[test]
    fn test_classify_empty_and_bare_dot() {
        assert_eq!(classify(""), Category::Other);
        assert_eq!(classify("."), Category::Other);
    }

    #[test]
    fn test_other_has_no_table() {
        let table = ExtensionTable::new();
        assert!(table.extensions(Category::Other).is_none());
        assert!(
            table
                .extensions(Category::Audio)
                .is_some_and(|set| set.contains(".mp3"))
        );
    }

    #[test]
    fn test_groups_follow_priority_order() {
        let order: Vec<Category> = ExtensionTable::new().groups().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL[..6].to_vec());
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("notes.txt")), ".txt");
        assert_eq!(extension_of(Path::new("photo.backup.PNG")), ".PNG");
        assert_eq!(extension_of(Path::new("Makefile")), "");
        assert_eq!(extension_of(Path::new(".gitignore")), "");
        assert_eq!(extension_of(Path::new("trailing.")), ".");
    }
}
