//! Generate command - run a full generation and export it as JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use track_gen::{ArtifactKind, TrackGenerator, TrackSnapshot};

use crate::course::{resolve_config, resolve_course};

/// Arguments for the generate command
#[derive(Args)]
pub struct GenerateArgs {
    /// Built-in course id or course file (.toml/.json)
    pub course: String,

    /// Generator config file (defaults to the user config, then built-in defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output JSON file (prints to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs) -> Result<()> {
    let course = resolve_course(&args.course)?;
    let config = resolve_config(args.config.as_deref())?;

    let mut generator = TrackGenerator::new(config);
    let polyline = generator.generate_track(&course);
    let snapshot = TrackSnapshot::new(
        &course.name,
        &polyline,
        generator.anchors(),
        generator.artifacts(),
    );

    match &args.output {
        Some(path) => {
            snapshot
                .write_json(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            eprintln!("=== Generated {} ===", course.name);
            eprintln!("  Output:  {}", path.display());
            eprintln!("  Samples: {}", polyline.len());
            eprintln!("  Length:  {:.1}", polyline.total_length());
            for kind in ArtifactKind::ALL {
                let count = generator.count_of(kind);
                if count > 0 {
                    eprintln!("  {:<15} {}", kind.as_str(), count);
                }
            }
        }
        None => {
            let json = snapshot
                .to_json_pretty()
                .context("Failed to serialize track")?;
            println!("{json}");
        }
    }

    Ok(())
}
