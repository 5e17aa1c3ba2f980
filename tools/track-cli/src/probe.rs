//! Probe command - path-relative boundary query at a world point

use anyhow::Result;
use clap::Args;
use glam::Vec3;
use track_gen::build_path;

use crate::course::resolve_course;

/// Arguments for the probe command
#[derive(Args)]
pub struct ProbeArgs {
    /// Built-in course id or course file (.toml/.json)
    pub course: String,

    #[arg(long, allow_negative_numbers = true)]
    pub x: f32,

    #[arg(long, allow_negative_numbers = true)]
    pub z: f32,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub y: f32,
}

/// Execute the probe command
pub fn execute(args: ProbeArgs) -> Result<()> {
    let course = resolve_course(&args.course)?;
    let polyline = build_path(&course.segments);
    let point = Vec3::new(args.x, args.y, args.z);

    let Some(hit) = polyline.nearest(point) else {
        anyhow::bail!("Course '{}' has no centerline", course.name);
    };

    let segment = hit
        .segment
        .map(|s| format!("{} ({})", s, course.segments[s].type_name()))
        .unwrap_or_else(|| "start".to_string());
    let half_width = hit
        .segment
        .and_then(|s| polyline.width_of(s))
        .map(|w| w * 0.5);

    println!("Point ({:.2}, {:.2}, {:.2})", point.x, point.y, point.z);
    println!(
        "  Nearest:        ({:.2}, {:.2}, {:.2})",
        hit.closest.x, hit.closest.y, hit.closest.z
    );
    println!("  Segment:        {segment}");
    println!("  Along track:    {:.2}", hit.distance_along);
    println!("  Lateral offset: {:+.2}", hit.lateral_offset);
    if let Some(half) = half_width {
        println!("  Half width:     {half:.2}");
    }
    println!(
        "  In bounds:      {}",
        if polyline.is_within_bounds(point) { "yes" } else { "no" }
    );

    Ok(())
}
