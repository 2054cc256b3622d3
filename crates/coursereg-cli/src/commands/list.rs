//! Read-only listings
//!
//! Usage:
//!   coursereg students [--json]
//!   coursereg courses [--json]
//!   coursereg roster <CODE> [--json]

use clap::Args;

use super::open_service;
use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RosterArgs {
    /// Course code
    pub code: String,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Execute students command
pub fn students(config: &AppConfig, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let svc = open_service(config)?;
    let students = svc.list_students();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&students)?);
    } else if students.is_empty() {
        println!("(none)");
    } else {
        for student in &students {
            println!("{}", student);
        }
    }
    Ok(())
}

/// Execute courses command
pub fn courses(config: &AppConfig, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let svc = open_service(config)?;
    let infos = svc
        .list_courses()
        .iter()
        .map(|course| svc.course_enrollment_info(course.code()))
        .collect::<Result<Vec<_>, _>>()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
    } else if infos.is_empty() {
        println!("(none)");
    } else {
        for info in &infos {
            println!("{}", info);
        }
    }
    Ok(())
}

/// Execute roster command
pub fn roster(config: &AppConfig, args: RosterArgs) -> Result<(), Box<dyn std::error::Error>> {
    let svc = open_service(config)?;
    let roster = svc.course_roster(&args.code)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&roster)?);
        return Ok(());
    }

    println!(
        "{} (cap {}, {} enrolled, {} waiting)",
        roster.course,
        roster.course.capacity(),
        roster.enrolled.len(),
        roster.waitlist.len()
    );
    println!("Enrolled:");
    print_numbered(&roster.enrolled);
    println!("Waitlist:");
    print_numbered(&roster.waitlist);
    Ok(())
}

fn print_numbered(ids: &[String]) {
    if ids.is_empty() {
        println!("  (none)");
    }
    for (i, id) in ids.iter().enumerate() {
        println!("  {}. {}", i + 1, id);
    }
}
