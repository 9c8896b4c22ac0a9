/// The closed set of buckets a file can be sorted into.
use serde::{Deserialize, Serialize};
use std::fmt;

/// File category derived from an extension.
///
/// Declaration order is the order categories are relocated and reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Images,
    Video,
    Documents,
    Audio,
    Archives,
    Others,
}

impl Category {
    /// Every category, in relocation order.
    pub const ALL: [Category; 6] = [
        Self::Images,
        Self::Video,
        Self::Documents,
        Self::Audio,
        Self::Archives,
        Self::Others,
    ];

    /// Categories that own an output directory under the sort root.
    pub const SORTED: [Category; 5] = [
        Self::Images,
        Self::Video,
        Self::Documents,
        Self::Audio,
        Self::Archives,
    ];

    /// Lower-case name, also used as the output directory name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Video => "video",
            Self::Documents => "documents",
            Self::Audio => "audio",
            Self::Archives => "archives",
            Self::Others => "others",
        }
    }

    /// Name of the output directory under the sort root.
    ///
    /// `Others` is never relocated and has no directory.
    pub fn dir_name(self) -> Option<&'static str> {
        match self {
            Self::Others => None,
            other => Some(other.label()),
        }
    }

    /// Recognise an output directory name. Exact, case-sensitive match.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::SORTED
            .into_iter()
            .find(|cat| cat.dir_name() == Some(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_names_round_trip() {
        for cat in Category::SORTED {
            let name = cat.dir_name().expect("sorted categories have a directory");
            assert_eq!(Category::from_dir_name(name), Some(cat));
        }
    }

    #[test]
    fn others_has_no_directory() {
        assert_eq!(Category::Others.dir_name(), None);
        assert_eq!(Category::from_dir_name("others"), None);
    }

    #[test]
    fn dir_name_match_is_case_sensitive() {
        assert_eq!(Category::from_dir_name("Images"), None);
        assert_eq!(Category::from_dir_name("images"), Some(Category::Images));
    }
}
