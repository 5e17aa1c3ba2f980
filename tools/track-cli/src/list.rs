//! List command - show the built-in courses

use anyhow::Result;
use clap::Args;
use rainbow_shared::{builtin_course, builtin_ids};

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
    /// Also list the available color schemes
    #[arg(long)]
    pub schemes: bool,
}

/// Execute the list command
pub fn execute(args: ListArgs) -> Result<()> {
    println!("Built-in courses:");
    for id in builtin_ids() {
        let course = builtin_course(id)?;
        println!(
            "  {:<20} {} (difficulty {}, {} segments, {:.0} units)",
            id,
            course.name,
            course.difficulty,
            course.segments.len(),
            course.centerline_length()
        );
    }

    if args.schemes {
        let config = track_gen::config::load();
        let schemes = config.color_schemes();
        println!();
        println!("Color schemes (default: {}):", schemes.default_name());
        for name in schemes.names() {
            let colors: Vec<String> = schemes
                .get(name)
                .unwrap_or_default()
                .iter()
                .map(|c| format!("#{c:06x}"))
                .collect();
            println!("  {:<20} {}", name, colors.join(" "));
        }
    }

    Ok(())
}
