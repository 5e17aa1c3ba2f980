//! Inspect command - show how a course samples, without placing anything

use anyhow::Result;
use clap::Args;
use rainbow_shared::Segment;
use track_gen::build_path;
use track_gen::polyline::sampled_length;

use crate::course::resolve_course;

/// Arguments for the inspect command
#[derive(Args)]
pub struct InspectArgs {
    /// Built-in course id or course file (.toml/.json)
    pub course: String,
}

/// Execute the inspect command
pub fn execute(args: InspectArgs) -> Result<()> {
    let course = resolve_course(&args.course)?;
    let polyline = build_path(&course.segments);

    println!("=== {} ===", course.name);
    if !course.description.is_empty() {
        println!("  {}", course.description);
    }
    println!("  Difficulty:  {}", course.difficulty);
    println!("  Checkpoints: {}", course.checkpoints.len());
    println!();
    println!(
        "  {:>3}  {:<9} {:>6} {:>8} {:>8} {:>7}  {}",
        "#", "type", "width", "length", "sampled", "samples", "decoration"
    );

    for (index, segment) in course.segments.iter().enumerate() {
        let samples = polyline.segment_samples(index);
        let decoration = segment
            .features()
            .map(|f| f.decoration.as_str().to_string())
            .unwrap_or_else(|| "-".to_string());
        let kind = match segment {
            Segment::Turn(t) => format!("{} {:.0}", t.direction.as_str(), t.angle),
            other => other.type_name().to_string(),
        };

        println!(
            "  {:>3}  {:<9} {:>6} {:>8.1} {:>8.1} {:>7}  {}",
            index,
            kind,
            segment
                .width()
                .map(|w| format!("{w:.0}"))
                .unwrap_or_else(|| "-".to_string()),
            segment.centerline_length(),
            sampled_length(samples),
            samples.len(),
            decoration
        );
    }

    let end = polyline.end();
    println!();
    println!(
        "  Total: {} samples, {:.1} units, ends at ({:.1}, {:.1}, {:.1})",
        polyline.len(),
        polyline.total_length(),
        end.position.x,
        end.position.y,
        end.position.z
    );

    let issues = course.issues();
    if issues.is_empty() {
        println!("  No issues");
    } else {
        println!("  {} issue(s):", issues.len());
        for issue in &issues {
            println!("    {issue}");
        }
    }

    Ok(())
}
