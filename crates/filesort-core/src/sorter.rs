/// The `sort` entry point: scan, then relocate, then report.
use crate::config::SortOptions;
use crate::error::Result;
use crate::model::SortReport;
use crate::relocate::relocate;
use crate::scanner::{open_root, walk_tree};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Sort `root` with default options.
pub fn sort(root: impl AsRef<Path>) -> Result<SortReport> {
    sort_with_options(root, &SortOptions::default())
}

/// Sort `root`.
///
/// The whole tree is classified before the first file is moved. Only an
/// unusable root is an error; every other problem ends up in
/// [`SortReport::failures`].
pub fn sort_with_options(root: impl AsRef<Path>, options: &SortOptions) -> Result<SortReport> {
    let started_at = chrono::Local::now();
    let start = Instant::now();

    let root = open_root(root.as_ref())?;
    info!("Sorting {}", root.display());

    let scan = walk_tree(&root, options);
    info!(
        "Found {} files ({} known extensions, {} unknown)",
        scan.file_count(),
        scan.known_extensions.len(),
        scan.unknown_extensions.len()
    );

    let relocation = relocate(&scan, &root, options);
    let report = SortReport::new(root, started_at, start.elapsed(), &scan, relocation);

    info!(
        "Sort complete: {} relocated, {} left in place, {} failures in {:?}",
        report.succeeded(),
        report.left_in_place,
        report.failures.len(),
        report.duration
    );
    Ok(report)
}
