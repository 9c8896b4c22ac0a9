/// Moving a single file into a category directory.
use crate::config::CollisionPolicy;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What happened to a file handed to [`place_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Moved to the contained path.
    Moved(PathBuf),
    /// Source and destination are the same file; nothing to do.
    AlreadyInPlace,
    /// Destination taken and the policy is [`CollisionPolicy::Skip`].
    Collision(PathBuf),
}

/// Move `src` into `dest_dir` under `name`, resolving name collisions
/// according to `policy`.
pub fn place_file(
    src: &Path,
    dest_dir: &Path,
    name: &str,
    policy: CollisionPolicy,
) -> io::Result<Placement> {
    let mut dest = dest_dir.join(name);
    if dest == src {
        return Ok(Placement::AlreadyInPlace);
    }

    if path_taken(&dest) {
        match policy {
            CollisionPolicy::RenameWithSuffix => dest = unique_path(dest_dir, name),
            CollisionPolicy::Overwrite => {}
            CollisionPolicy::Skip => return Ok(Placement::Collision(dest)),
        }
    }

    move_file(src, &dest)?;
    Ok(Placement::Moved(dest))
}

/// Rename `src` to `dest`, falling back to copy + remove when rename fails
/// (different filesystems, or a platform that refuses to rename over an
/// existing file).
///
/// The copy goes to a staging file beside `dest` and is renamed into place
/// only once complete, so a failed copy (disk full, unreadable source)
/// neither truncates an existing `dest` nor leaves a partial file. On
/// failure the source is left intact and the copy error is returned.
pub fn move_file(src: &Path, dest: &Path) -> io::Result<()> {
    if fs::rename(src, dest).is_ok() {
        return Ok(());
    }

    let staging = staging_path(dest);
    if let Err(e) = fs::copy(src, &staging).and_then(|_| fs::rename(&staging, dest)) {
        let _ = fs::remove_file(&staging);
        return Err(e);
    }
    if let Err(e) = fs::remove_file(src) {
        let _ = fs::remove_file(dest);
        return Err(e);
    }
    Ok(())
}

/// Hidden sibling of `dest` used while a cross-device copy is in flight.
fn staging_path(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    dest.with_file_name(format!(".{name}.partial"))
}

/// First free `stem_N.ext` in `dir`, counting from 1.
pub fn unique_path(dir: &Path, name: &str) -> PathBuf {
    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (name, None),
    };
    (1u64..)
        .map(|n| match ext {
            Some(ext) => dir.join(format!("{stem}_{n}.{ext}")),
            None => dir.join(format!("{stem}_{n}")),
        })
        .find(|candidate| !path_taken(candidate))
        .unwrap_or_else(|| dir.join(name))
}

/// `true` if anything, including a dangling symlink, occupies `path`.
fn path_taken(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
