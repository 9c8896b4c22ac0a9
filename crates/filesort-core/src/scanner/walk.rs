/// Parallel directory walk using `jwalk`.
///
/// Directory reads are spread over a rayon pool, but jwalk hands entries
/// back in depth-first order and siblings are sorted by name, so the
/// resulting [`ScanResult`] is identical from run to run regardless of the
/// worker count.
///
/// Output directories directly under the sort root (`images/`, `video/`,
/// ...) are pruned from the root's child list before jwalk descends, so a
/// second run does not reclassify what the first one already sorted.
/// Directories with those names deeper in the tree are walked normally.
use crate::classify::{classify, extension_of};
use crate::config::SortOptions;
use crate::model::{Category, FileEntry, ScanResult};
use compact_str::CompactString;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

/// Emit a progress line every this many entries.
const PROGRESS_INTERVAL: u64 = 5_000;

/// Walk `root` (already validated and canonical) and classify every file.
pub fn walk_tree(root: &Path, options: &SortOptions) -> ScanResult {
    let start = Instant::now();
    let mut result = ScanResult::default();
    let mut visited: u64 = 0;

    let parallelism = if options.is_serial() {
        jwalk::Parallelism::Serial
    } else {
        jwalk::Parallelism::RayonNewPool(options.threads)
    };

    let sort_root: PathBuf = root.to_path_buf();
    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(parallelism)
        .process_read_dir(move |_depth, dir_path, _state, children| {
            if dir_path != sort_root.as_path() {
                return;
            }
            children.retain(|child| match child {
                Ok(entry) => !(entry.file_type().is_dir() && is_output_dir(entry.file_name())),
                Err(_) => true,
            });
        });

    for entry_result in walker {
        visited += 1;

        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                warn!("Skipping {}: {err}", path.display());
                result.skip_dir(path, err.to_string());
                continue;
            }
        };

        // The root itself.
        if entry.depth == 0 {
            continue;
        }

        // jwalk yields a directory it failed to list as a normal entry.
        if let Some(err) = entry.read_children_error.as_ref() {
            let path = entry.path();
            warn!("Skipping {}: {err}", path.display());
            result.skip_dir(path, err.to_string());
            continue;
        }

        if entry.file_type().is_dir() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        let extension = CompactString::new(extension_of(&file_name).to_lowercase());
        let category = classify(&extension);

        result.push(FileEntry {
            path: entry.path(),
            extension,
            category,
        });

        if visited.is_multiple_of(PROGRESS_INTERVAL) {
            debug!(
                "Scanned {visited} entries, {} files so far",
                result.file_count()
            );
        }
    }

    debug!(
        "Scan complete: {} files, {} skipped dirs in {:?}",
        result.file_count(),
        result.skipped.len(),
        start.elapsed()
    );

    result
}

/// `true` if `name` is one of the category output directories.
fn is_output_dir(name: &std::ffi::OsStr) -> bool {
    name.to_str().and_then(Category::from_dir_name).is_some()
}
