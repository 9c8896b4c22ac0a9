/// File classification by extension.
///
/// The extension table is fixed: output directories produced by earlier runs
/// depend on it, so it must not drift.
use crate::model::Category;

/// Longest extension the table contains, in bytes. Anything longer is `Others`.
const MAX_EXTENSION_LEN: usize = 4;

/// Static mapping from lower-cased extension (no dot) to category.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionTable {
    entries: &'static [(Category, &'static [&'static str])],
}

/// The table used by [`classify`].
pub static EXTENSIONS: ExtensionTable = ExtensionTable {
    entries: &[
        (Category::Images, &["jpeg", "png", "jpg", "svg"]),
        (Category::Video, &["avi", "mp4", "mov", "mkv"]),
        (
            Category::Documents,
            &["doc", "docx", "txt", "pdf", "xlsx", "pptx"],
        ),
        (Category::Audio, &["mp3", "ogg", "wav", "amr"]),
        (Category::Archives, &["zip", "gz", "tar"]),
    ],
};

impl ExtensionTable {
    /// Look up an extension, case-insensitively.
    ///
    /// Returns `None` for extensions the table does not know; those classify
    /// as [`Category::Others`].
    ///
    /// No heap allocation: the extension is lowercased into a stack buffer.
    pub fn lookup(&self, ext: &str) -> Option<Category> {
        let bytes = ext.as_bytes();
        if bytes.is_empty() || bytes.len() > MAX_EXTENSION_LEN {
            return None;
        }

        let mut lower = [0u8; MAX_EXTENSION_LEN];
        for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
            *dest = src.to_ascii_lowercase();
        }
        let lower_str = std::str::from_utf8(&lower[..bytes.len()]).ok()?;

        self.entries
            .iter()
            .find(|(_, exts)| exts.iter().any(|e| *e == lower_str))
            .map(|&(cat, _)| cat)
    }

    /// `true` if `ext` is in the table.
    pub fn is_known(&self, ext: &str) -> bool {
        self.lookup(ext).is_some()
    }

    /// Extensions belonging to `category`, in table order.
    pub fn extensions(&self, category: Category) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(cat, _)| *cat == category)
            .map(|&(_, exts)| exts)
            .unwrap_or(&[])
    }
}

/// Classify a file extension (without the dot). Total: unknown -> `Others`.
pub fn classify(ext: &str) -> Category {
    EXTENSIONS.lookup(ext).unwrap_or(Category::Others)
}

/// The extension of a file name: the text after the last `.`, or `""`.
///
/// A leading dot counts, so `.bashrc` has extension `bashrc`.
pub fn extension_of(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .unwrap_or("")
}
