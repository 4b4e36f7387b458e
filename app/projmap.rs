//! Command-line interface for projmap.
//!
//! Maps a project directory into a single Markdown file, printing each file
//! as it is processed.

use clap::Parser;
use projmap::{DEFAULT_OUTPUT, ExclusionSet, MapBuilder, MapEvent, MapOptions, map_project};
use std::path::PathBuf;
use std::process::exit;
use std::sync::LazyLock;

static EXCLUDE_HELP: LazyLock<String> = LazyLock::new(|| {
    format!(
        "Additional file or directory names to exclude (exact basenames).\nDefault exclusions: {}",
        ExclusionSet::with_defaults()
            .iter()
            .collect::<Vec<_>>()
            .join(", ")
    )
});

/// Merge a project's files into one Markdown map
#[derive(Parser)]
#[command(name = "projmap", version, about, long_about = None)]
struct Cli {
    /// Path to the project directory to map
    path: PathBuf,

    /// Output Markdown file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    #[arg(short, long, num_args = 1.., value_name = "NAME", help = EXCLUDE_HELP.as_str())]
    exclude: Vec<String>,
}

impl Cli {
    fn into_options(self) -> MapOptions {
        MapBuilder::new(self.path)
            .output(self.output)
            .exclude(self.exclude)
            .build()
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .without_time()
        .with_target(false)
        .init();
}

fn main() {
    #[cfg(feature = "logging")]
    init_logging();

    let options = Cli::parse().into_options();
    run(&options);
}

fn run(options: &MapOptions) {
    let result = map_project(options, |event| match event {
        MapEvent::File(entry) => println!("Processing: {}", entry.relative),
        MapEvent::Unreadable { entry, reason } => {
            eprintln!("Could not read {}: {}", entry.relative, reason)
        }
        MapEvent::WalkError(message) => eprintln!("Skipped: {}", message),
    });

    match result {
        Ok(summary) => {
            if summary.unreadable > 0 {
                println!("{} file(s) could not be read", summary.unreadable);
            }
            println!(
                "\nDone! Project map written to: {}",
                summary.output.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
