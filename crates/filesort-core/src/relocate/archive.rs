/// Archive extraction for the `archives` category.
///
/// Zip is read with the `zip` crate, tarballs with `tar`, gzip streams with
/// `flate2`. A `.tar.gz` is unpacked as a tarball; any other `.gz` holds a
/// single file, written under its normalized name with `.gz` removed.
/// Both `zip` and `tar` refuse entries that would land outside the target.
use crate::normalize::{normalize, strip_extension};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

/// Stand-in for a name that normalizes to nothing (`.zip`, `.gz`).
pub const EMPTY_NAME: &str = "_";

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("zip: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("unsupported archive format: {0}")]
    Unsupported(String),

    #[error("entry escapes the extraction folder: {0}")]
    UnsafeEntry(String),
}

/// Container formats the relocator can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
    TarGz,
    Gz,
}

impl ArchiveFormat {
    /// Detect the format from a file name, case-insensitively.
    pub fn detect(file_name: &str) -> Option<Self> {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".tar.gz") {
            return Some(Self::TarGz);
        }
        match lower.rsplit_once('.').map(|(_, ext)| ext) {
            Some("zip") => Some(Self::Zip),
            Some("tar") => Some(Self::Tar),
            Some("gz") => Some(Self::Gz),
            _ => None,
        }
    }
}

/// Extract the archive at `archive` into the existing directory `target`.
///
/// The archive file itself is only read.
pub fn extract(archive: &Path, target: &Path) -> Result<(), ExtractError> {
    let file_name = archive
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let format = ArchiveFormat::detect(&file_name)
        .ok_or_else(|| ExtractError::Unsupported(file_name.clone()))?;

    let file = File::open(archive)?;
    match format {
        ArchiveFormat::Zip => extract_zip(file, target)?,
        ArchiveFormat::Tar => {
            tar::Archive::new(BufReader::new(file)).unpack(target)?;
        }
        ArchiveFormat::TarGz => {
            tar::Archive::new(GzDecoder::new(BufReader::new(file))).unpack(target)?;
        }
        ArchiveFormat::Gz => {
            let out_name = match normalize(strip_extension(&file_name)) {
                name if name.is_empty() => EMPTY_NAME.to_string(),
                name => name,
            };
            let mut decoder = GzDecoder::new(BufReader::new(file));
            let mut out = File::create(target.join(out_name))?;
            io::copy(&mut decoder, &mut out)?;
        }
    }
    Ok(())
}

/// Unpack every zip entry beneath `target`, overwriting existing files.
fn extract_zip(file: File, target: &Path) -> Result<(), ExtractError> {
    let mut zip = zip::ZipArchive::new(BufReader::new(file))?;
    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| ExtractError::UnsafeEntry(entry.name().to_string()))?;
        let out_path = target.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&out_path)?;
        io::copy(&mut entry, &mut out)?;
    }
    Ok(())
}

/// Make sure `target` exists, then extract into it.
///
/// When extraction fails and `target` did not exist beforehand, the
/// partially populated directory is removed again.
pub fn extract_into(archive: &Path, target: &Path) -> Result<(), ExtractError> {
    let existed = target.exists();
    let result = fs::create_dir_all(target)
        .map_err(ExtractError::from)
        .and_then(|()| extract(archive, target));
    if result.is_err() && !existed {
        let _ = fs::remove_dir_all(target);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats() {
        assert_eq!(ArchiveFormat::detect("a.zip"), Some(ArchiveFormat::Zip));
        assert_eq!(ArchiveFormat::detect("A.ZIP"), Some(ArchiveFormat::Zip));
        assert_eq!(ArchiveFormat::detect("a.tar"), Some(ArchiveFormat::Tar));
        assert_eq!(ArchiveFormat::detect("a.tar.gz"), Some(ArchiveFormat::TarGz));
        assert_eq!(ArchiveFormat::detect("a.TAR.GZ"), Some(ArchiveFormat::TarGz));
        assert_eq!(ArchiveFormat::detect("a.txt.gz"), Some(ArchiveFormat::Gz));
        assert_eq!(ArchiveFormat::detect("a.rar"), None);
        assert_eq!(ArchiveFormat::detect("zip"), None);
    }

    #[test]
    fn unsupported_format_is_reported() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("a.rar");
        fs::write(&path, b"rar").unwrap();
        let err = extract(&path, tmp.path()).unwrap_err();
        assert!(matches!(err, ExtractError::Unsupported(_)), "{err:?}");
    }

    #[test]
    fn bare_gz_decompresses_to_placeholder_name() {
        use flate2::write::GzEncoder;
        use std::io::Write;

        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join(".gz");
        let mut encoder =
            GzEncoder::new(File::create(&path).unwrap(), flate2::Compression::default());
        encoder.write_all(b"payload").unwrap();
        encoder.finish().unwrap();
        let target = tmp.path().join("out");

        extract_into(&path, &target).unwrap();
        assert_eq!(fs::read(target.join(EMPTY_NAME)).unwrap(), b"payload");
    }

    #[test]
    fn failed_extraction_removes_new_target() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.zip");
        fs::write(&path, b"definitely not a zip").unwrap();
        let target = tmp.path().join("out");

        assert!(extract_into(&path, &target).is_err());
        assert!(!target.exists());
        assert!(path.exists(), "archive must be left alone");
    }

    #[test]
    fn failed_extraction_keeps_existing_target() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("broken.zip");
        fs::write(&path, b"definitely not a zip").unwrap();
        let target = tmp.path().join("out");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("keep.txt"), b"k").unwrap();

        assert!(extract_into(&path, &target).is_err());
        assert!(target.join("keep.txt").exists());
    }
}
