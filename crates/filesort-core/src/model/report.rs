/// Relocation and sort reports.
///
/// The core never prints. Everything a caller needs to present the outcome
/// of a sort is in [`SortReport`], which renders as a text summary through
/// `Display` or as JSON through [`SortReport::to_json`].
use super::category::Category;
use super::file_entry::{ScanResult, SkippedDir};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Why a single item could not be processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    DirectoryUnreadable,
    FileMoveFailed,
    ArchiveExtractFailed,
    DestinationCollision,
}

impl FailureKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::DirectoryUnreadable => "directory unreadable",
            Self::FileMoveFailed => "move failed",
            Self::ArchiveExtractFailed => "extraction failed",
            Self::DestinationCollision => "destination exists",
        }
    }
}

/// One recorded per-item failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub path: PathBuf,
    pub kind: FailureKind,
    pub reason: String,
}

/// Outcome of relocating one [`ScanResult`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelocationReport {
    /// Files moved plus archives extracted.
    pub succeeded: usize,
    /// Successes per category. Only categories with at least one success appear.
    pub per_category: BTreeMap<Category, usize>,
    /// Failures in processing order.
    pub failed: Vec<Failure>,
}

impl RelocationReport {
    pub fn record_success(&mut self, category: Category) {
        self.succeeded += 1;
        *self.per_category.entry(category).or_insert(0) += 1;
    }

    pub fn record_failure(&mut self, path: PathBuf, kind: FailureKind, reason: impl Into<String>) {
        self.failed.push(Failure {
            path,
            kind,
            reason: reason.into(),
        });
    }

    /// Fold another report into this one, keeping `other`'s failures after ours.
    pub fn merge(&mut self, other: RelocationReport) {
        self.succeeded += other.succeeded;
        for (cat, n) in other.per_category {
            *self.per_category.entry(cat).or_insert(0) += n;
        }
        self.failed.extend(other.failed);
    }

    /// Successes recorded for `category`.
    pub fn count(&self, category: Category) -> usize {
        self.per_category.get(&category).copied().unwrap_or(0)
    }
}

/// Final summary of a sort run.
#[derive(Debug, Clone, Serialize)]
pub struct SortReport {
    pub root: PathBuf,
    pub started_at: DateTime<Local>,
    #[serde(serialize_with = "serialize_millis")]
    pub duration: Duration,
    /// Sorted, de-duplicated, lower-case.
    pub known_extensions: Vec<String>,
    /// Sorted, de-duplicated, lower-case.
    pub unknown_extensions: Vec<String>,
    /// Files moved (or archives extracted) per category.
    pub relocated: BTreeMap<Category, usize>,
    /// Files of unrecognised type, left where they were.
    pub left_in_place: usize,
    pub skipped_dirs: Vec<SkippedDir>,
    /// Unreadable directories first, then relocation failures in order.
    pub failures: Vec<Failure>,
}

impl SortReport {
    /// Compose the scan and relocation outcomes.
    pub fn new(
        root: PathBuf,
        started_at: DateTime<Local>,
        duration: Duration,
        scan: &ScanResult,
        relocation: RelocationReport,
    ) -> Self {
        let mut failures: Vec<Failure> = scan
            .skipped
            .iter()
            .map(|s| Failure {
                path: s.path.clone(),
                kind: FailureKind::DirectoryUnreadable,
                reason: s.reason.clone(),
            })
            .collect();
        failures.extend(relocation.failed);

        Self {
            root,
            started_at,
            duration,
            known_extensions: scan.known_extensions.iter().cloned().collect(),
            unknown_extensions: scan.unknown_extensions.iter().cloned().collect(),
            relocated: relocation.per_category,
            left_in_place: scan.group(Category::Others).len(),
            skipped_dirs: scan.skipped.clone(),
            failures,
        }
    }

    /// Files moved or archives extracted across all categories.
    pub fn succeeded(&self) -> usize {
        self.relocated.values().sum()
    }

    pub fn relocated_count(&self, category: Category) -> usize {
        self.relocated.get(&category).copied().unwrap_or(0)
    }

    /// `true` when every file and directory was handled.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Known extensions in folder:")?;
        writeln!(f, "     {}", self.known_extensions.join(", "))?;
        writeln!(f, "Unknown extensions in folder:")?;
        writeln!(f, "     {}", self.unknown_extensions.join(", "))?;

        let tallies: Vec<String> = Category::SORTED
            .iter()
            .map(|&cat| format!("{cat} {}", self.relocated_count(cat)))
            .collect();
        writeln!(f, "Relocated: {}", tallies.join(", "))?;
        writeln!(f, "Left in place: {}", self.left_in_place)?;

        if !self.skipped_dirs.is_empty() {
            writeln!(f, "Skipped directories:")?;
            for dir in &self.skipped_dirs {
                writeln!(f, "     {}", dir.path.display())?;
            }
        }

        if self.failures.is_empty() {
            write!(f, "Files were sorted successfully")
        } else {
            writeln!(f, "Failures: {}", self.failures.len())?;
            for (i, failure) in self.failures.iter().enumerate() {
                if i > 0 {
                    writeln!(f)?;
                }
                write!(
                    f,
                    "     {}: {} ({})",
                    failure.path.display(),
                    failure.kind.label(),
                    failure.reason
                )?;
            }
            Ok(())
        }
    }
}
