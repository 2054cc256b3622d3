//! coursereg CLI
//!
//! Command-line interface for course enrollment and waitlists

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use coursereg_core::logging_facility;

mod commands;
mod config;
mod demo;

use config::ConfigLoader;

#[derive(Debug, Parser)]
#[command(name = "coursereg")]
#[command(about = "Course registration with capacity limits and FIFO waitlists", long_about = None)]
struct Cli {
    /// Directory holding coursereg.toml; relative data paths resolve against it
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Interactive numbered menu
    Shell(commands::shell::ShellArgs),
    /// Register a student
    AddStudent(commands::manage::AddStudentArgs),
    /// Register a course
    AddCourse(commands::manage::AddCourseArgs),
    /// Enroll a student, or waitlist them if the course is full
    Enroll(commands::manage::PairArgs),
    /// Drop a student from a course or its waitlist
    Drop(commands::manage::PairArgs),
    /// List students
    Students(commands::list::ListArgs),
    /// List courses with seat counts
    Courses(commands::list::ListArgs),
    /// Show enrolled students and the waitlist for a course
    Roster(commands::list::RosterArgs),
    /// Print the effective configuration
    Config,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut loader = ConfigLoader::new();
    if let Some(dir) = &cli.config_dir {
        loader = loader.with_config_dir(dir);
    }
    let config = loader.load()?;

    logging_facility::init(config.log.format, &config.log.level);
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Shell(args) => commands::shell::execute(&config, args),
        Commands::AddStudent(args) => commands::manage::add_student(&config, args),
        Commands::AddCourse(args) => commands::manage::add_course(&config, args),
        Commands::Enroll(args) => commands::manage::enroll(&config, args),
        Commands::Drop(args) => commands::manage::drop_student(&config, args),
        Commands::Students(args) => commands::list::students(&config, args),
        Commands::Courses(args) => commands::list::courses(&config, args),
        Commands::Roster(args) => commands::list::roster(&config, args),
        Commands::Config => commands::show_config::execute(&config),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
