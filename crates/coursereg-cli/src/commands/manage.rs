//! One-shot registry mutations
//!
//! Usage:
//!   coursereg add-student <ID> <NAME> <EMAIL>
//!   coursereg add-course <CODE> <TITLE> <CAPACITY>
//!   coursereg enroll <STUDENT_ID> <COURSE_CODE>
//!   coursereg drop <STUDENT_ID> <COURSE_CODE>

use clap::Args;

use super::open_service;
use crate::config::AppConfig;

#[derive(Debug, Args)]
pub struct AddStudentArgs {
    /// Banner ID, e.g. B001
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Args)]
pub struct AddCourseArgs {
    /// Course code, e.g. CSCI4490
    pub code: String,
    pub title: String,
    /// Seat count, 1 to 500
    #[arg(allow_negative_numbers = true)]
    pub capacity: i64,
}

#[derive(Debug, Args)]
pub struct PairArgs {
    pub student_id: String,
    pub course_code: String,
}

/// Execute add-student command
pub fn add_student(
    config: &AppConfig,
    args: AddStudentArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut svc = open_service(config)?;
    svc.add_student(&args.id, &args.name, &args.email)?;
    println!("Student added successfully.");
    Ok(())
}

/// Execute add-course command
pub fn add_course(config: &AppConfig, args: AddCourseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut svc = open_service(config)?;
    svc.add_course(&args.code, &args.title, args.capacity)?;
    println!("Course added successfully.");
    Ok(())
}

/// Execute enroll command
pub fn enroll(config: &AppConfig, args: PairArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut svc = open_service(config)?;
    let outcome = svc.enroll_student(&args.student_id, &args.course_code)?;
    println!("{}", outcome);
    Ok(())
}

/// Execute drop command
pub fn drop_student(config: &AppConfig, args: PairArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut svc = open_service(config)?;
    let outcome = svc.drop_student(&args.student_id, &args.course_code)?;
    println!("{}", outcome.message());
    Ok(())
}
