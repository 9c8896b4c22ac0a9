/// Relocator: moves classified files into their category directories and
/// extracts archives.
///
/// Each category writes only beneath its own `root/<category>/` directory,
/// so categories are processed concurrently on a rayon pool of
/// `SortOptions::threads` workers while the files within one category are
/// handled one after another in scan order.
/// Per-category reports are merged in fixed category order, which keeps the
/// final report identical between serial and parallel runs.
///
/// A failure on one file is recorded and the next file is attempted.
pub mod archive;
pub mod mover;

use crate::config::{CollisionPolicy, SortOptions};
use crate::model::{Category, FailureKind, FileEntry, RelocationReport, ScanResult};
use crate::normalize::{normalize, strip_extension};
use mover::Placement;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Relocate every sortable group of `scan` beneath `root`.
///
/// `Others` is never touched.
pub fn relocate(scan: &ScanResult, root: &Path, options: &SortOptions) -> RelocationReport {
    let run = |&category: &Category| {
        relocate_group(category, scan.group(category), root, options.collision)
    };

    let serial = || Category::SORTED.iter().map(run).collect::<Vec<_>>();
    let reports: Vec<RelocationReport> = if options.is_serial() {
        serial()
    } else {
        match bounded_pool(options.threads) {
            Ok(pool) => pool.install(|| Category::SORTED[..].par_iter().map(run).collect()),
            Err(e) => {
                warn!(
                    "Cannot start {} relocation workers, running serially: {e}",
                    options.threads
                );
                serial()
            }
        }
    };

    let mut merged = RelocationReport::default();
    for report in reports {
        merged.merge(report);
    }
    merged
}

/// Rayon pool limited to `threads` workers.
fn bounded_pool(threads: usize) -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("filesort-relocate-{i}"))
        .build()
}

/// Relocate the files of a single category.
pub fn relocate_group(
    category: Category,
    entries: &[FileEntry],
    root: &Path,
    policy: CollisionPolicy,
) -> RelocationReport {
    let mut report = RelocationReport::default();
    let Some(dir_name) = category.dir_name() else {
        return report;
    };
    if entries.is_empty() {
        return report;
    }

    let failure_kind = if category == Category::Archives {
        FailureKind::ArchiveExtractFailed
    } else {
        FailureKind::FileMoveFailed
    };

    let dest_dir = root.join(dir_name);
    if let Err(e) = fs::create_dir_all(&dest_dir) {
        warn!("Cannot create {}: {e}", dest_dir.display());
        for entry in entries {
            report.record_failure(
                entry.path.clone(),
                failure_kind,
                format!("cannot create {}: {e}", dest_dir.display()),
            );
        }
        return report;
    }

    for entry in entries {
        let Some(file_name) = entry.path.file_name() else {
            report.record_failure(entry.path.clone(), failure_kind, "path has no file name");
            continue;
        };
        let normalized = normalize(&file_name.to_string_lossy());

        if category == Category::Archives {
            extract_entry(entry, &dest_dir, &normalized, &mut report);
        } else {
            move_entry(entry, &dest_dir, &normalized, policy, &mut report);
        }
    }

    report
}

fn move_entry(
    entry: &FileEntry,
    dest_dir: &Path,
    normalized: &str,
    policy: CollisionPolicy,
    report: &mut RelocationReport,
) {
    match mover::place_file(&entry.path, dest_dir, normalized, policy) {
        Ok(Placement::Moved(dest)) => {
            debug!("Moved {} -> {}", entry.path.display(), dest.display());
            report.record_success(entry.category);
        }
        Ok(Placement::AlreadyInPlace) => report.record_success(entry.category),
        Ok(Placement::Collision(dest)) => {
            warn!("Not moving {}: {} exists", entry.path.display(), dest.display());
            report.record_failure(
                entry.path.clone(),
                FailureKind::DestinationCollision,
                format!("{} already exists", dest.display()),
            );
        }
        Err(e) => {
            warn!("Failed to move {}: {e}", entry.path.display());
            report.record_failure(entry.path.clone(), FailureKind::FileMoveFailed, e.to_string());
        }
    }
}

fn extract_entry(
    entry: &FileEntry,
    dest_dir: &Path,
    normalized: &str,
    report: &mut RelocationReport,
) {
    let folder = match strip_extension(normalized) {
        "" => archive::EMPTY_NAME,
        stem => stem,
    };
    let target = dest_dir.join(folder);

    match archive::extract_into(&entry.path, &target) {
        Ok(()) => {
            debug!("Extracted {} -> {}", entry.path.display(), target.display());
            report.record_success(entry.category);
        }
        Err(e) => {
            warn!("Failed to extract {}: {e}", entry.path.display());
            report.record_failure(
                entry.path.clone(),
                FailureKind::ArchiveExtractFailed,
                e.to_string(),
            );
        }
    }
}
