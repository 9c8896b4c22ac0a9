/// Data model shared by the scanner, relocator and reports.
pub mod category;
pub mod file_entry;
pub mod report;

pub use category::Category;
pub use file_entry::{FileEntry, ScanResult, SkippedDir};
pub use report::{Failure, FailureKind, RelocationReport, SortReport};
