//! filesort core: scanning, classification, normalization and relocation.
//!
//! This crate holds all sorting logic with no terminal dependencies. It never
//! prints; the outcome of a run is returned as a [`SortReport`].
//!
//! # Modules
//!
//! - [`classify`]: fixed extension table and `classify(ext) -> Category`.
//! - [`normalize`]: Cyrillic transliteration and filesystem-safe names.
//! - [`scanner`]: parallel, deterministic directory walk into a [`ScanResult`].
//! - [`relocate`]: moves files into category folders, extracts archives.
//! - [`model`]: categories, scan entries and reports.
//!
//! ```no_run
//! let report = filesort_core::sort("/home/me/Downloads")?;
//! println!("{report}");
//! # Ok::<(), filesort_core::SortError>(())
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod relocate;
pub mod scanner;
pub mod sorter;

pub use classify::classify;
pub use config::{CollisionPolicy, SortOptions};
pub use error::SortError;
pub use model::{Category, FailureKind, FileEntry, RelocationReport, ScanResult, SortReport};
pub use normalize::normalize;
pub use relocate::relocate;
pub use scanner::scan;
pub use sorter::{sort, sort_with_options};
