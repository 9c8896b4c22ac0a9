/// Scanner output: one `FileEntry` per discovered file, grouped by category.
use super::category::Category;
use compact_str::CompactString;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// A regular file found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Full path of the file as discovered under the sort root.
    pub path: PathBuf,
    /// Lower-cased extension without the dot. Empty when the name has none.
    pub extension: CompactString,
    pub category: Category,
}

/// A directory the scanner could not list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDir {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything one scan discovered.
///
/// Built by the scanner as a local accumulator and handed to the relocator
/// by value; nothing here outlives a single sort.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// Entries per category, in traversal order. Every category is present.
    pub groups: BTreeMap<Category, Vec<FileEntry>>,
    /// Extensions present in the extension table.
    pub known_extensions: BTreeSet<String>,
    /// Extensions that classified as `Others`. Never contains `""`.
    pub unknown_extensions: BTreeSet<String>,
    pub skipped: Vec<SkippedDir>,
}

impl Default for ScanResult {
    fn default() -> Self {
        Self {
            groups: Category::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
            known_extensions: BTreeSet::new(),
            unknown_extensions: BTreeSet::new(),
            skipped: Vec::new(),
        }
    }
}

impl ScanResult {
    /// Entries of one category.
    pub fn group(&self, category: Category) -> &[FileEntry] {
        self.groups
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Append an entry and record its extension as known or unknown.
    pub fn push(&mut self, entry: FileEntry) {
        if !entry.extension.is_empty() {
            let set = if entry.category == Category::Others {
                &mut self.unknown_extensions
            } else {
                &mut self.known_extensions
            };
            // Checked first so repeated extensions do not allocate.
            if !set.contains(entry.extension.as_str()) {
                set.insert(entry.extension.to_string());
            }
        }
        self.groups.entry(entry.category).or_default().push(entry);
    }

    /// Record a directory that could not be listed. Duplicate paths are ignored.
    pub fn skip_dir(&mut self, path: PathBuf, reason: String) {
        if !self.skipped.iter().any(|s| s.path == path) {
            self.skipped.push(SkippedDir { path, reason });
        }
    }

    /// Total number of files discovered.
    pub fn file_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// `true` when no files were discovered.
    pub fn is_empty(&self) -> bool {
        self.file_count() == 0
    }
}
