//! filesort: sorts a directory tree into category folders.
//!
//! Thin binary entry point. All logic lives in the `filesort-core` crate.

use clap::{Parser, ValueEnum};
use filesort_core::{CollisionPolicy, SortOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "filesort", version, about = "Sort a folder into images, video, documents, audio and archives")]
struct Cli {
    /// Directory to sort.
    root: PathBuf,

    #[arg(long, help = "Output the report as JSON")]
    json: bool,

    #[arg(
        long,
        value_enum,
        default_value_t = Collision::Rename,
        help = "What to do when a normalized name is already taken"
    )]
    collision: Collision,

    #[arg(long, help = "Worker threads (default: number of CPUs, 1 = serial)")]
    threads: Option<usize>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Log more (-v info, -vv debug)")]
    verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Collision {
    Rename,
    Overwrite,
    Skip,
}

impl From<Collision> for CollisionPolicy {
    fn from(c: Collision) -> Self {
        match c {
            Collision::Rename => CollisionPolicy::RenameWithSuffix,
            Collision::Overwrite => CollisionPolicy::Overwrite,
            Collision::Skip => CollisionPolicy::Skip,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut options = SortOptions::default().with_collision(cli.collision.into());
    if let Some(threads) = cli.threads {
        options = options.with_threads(threads);
    }

    let report = filesort_core::sort_with_options(&cli.root, &options)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }

    Ok(())
}
