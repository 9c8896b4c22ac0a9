/// Options for a sort run.
use serde::{Deserialize, Serialize};

/// What to do when a normalized destination name is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Append `_1`, `_2`, ... to the stem until the name is free.
    #[default]
    RenameWithSuffix,
    /// Replace the existing file.
    Overwrite,
    /// Leave the source where it is and record a collision failure.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    pub collision: CollisionPolicy,
    /// Worker threads for scanning and relocation. `1` runs serially.
    pub threads: usize,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            collision: CollisionPolicy::default(),
            threads: num_cpus::get(),
        }
    }
}

impl SortOptions {
    pub fn with_collision(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }

    /// Set the worker count. `0` is treated as `1`.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub(crate) fn is_serial(&self) -> bool {
        self.threads <= 1
    }
}
