//! Interactive menu
//!
//! Usage: coursereg shell [--demo]
//!
//! Reads choices line by line; end of input exits like choosing 0.

use std::io::{self, BufRead, Write};

use clap::Args;
use coursereg_core::{CourseStore, EnrollmentStore, RegistrationService, StudentStore};

use super::open_service;
use crate::config::AppConfig;
use crate::demo::seed_demo;

#[derive(Debug, Args)]
pub struct ShellArgs {
    /// Seed demo students and courses before starting
    #[arg(long)]
    pub demo: bool,
}

/// Execute shell command
pub fn execute(config: &AppConfig, args: ShellArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut svc = open_service(config)?;

    if args.demo {
        if let Err(e) = seed_demo(&mut svc) {
            tracing::error!(error = %e, "Failed to seed demo data");
        }
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_menu(&mut svc, &mut input, &mut output)?;
    Ok(())
}

/// Line-oriented prompt over any reader/writer pair
struct Prompter<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Prompter<'_, R, W> {
    /// Show `prompt` and read one trimmed line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}

/// Run the numbered menu until the user exits or input ends
///
/// # Errors
/// Only IO errors on the input or output streams; registration errors are
/// reported to the user and the loop continues.
pub fn run_menu<S, C, E, R, W>(
    svc: &mut RegistrationService<S, C, E>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    S: StudentStore,
    C: CourseStore,
    E: EnrollmentStore,
    R: BufRead,
    W: Write,
{
    let mut p = Prompter { input, output };
    p.say("=== Course Registration System ===")?;

    loop {
        p.say("\nMenu:")?;
        p.say("1) Add student")?;
        p.say("2) Add course")?;
        p.say("3) Enroll student in course")?;
        p.say("4) Drop student from course")?;
        p.say("5) List students")?;
        p.say("6) List courses")?;
        p.say("0) Exit")?;

        let Some(choice) = p.ask("Choose: ")? else {
            break;
        };

        let keep_going = match choice.as_str() {
            "1" => add_student(svc, &mut p)?,
            "2" => add_course(svc, &mut p)?,
            "3" => enroll(svc, &mut p)?,
            "4" => drop_student(svc, &mut p)?,
            "5" => {
                list_students(svc, &mut p)?;
                true
            }
            "6" => {
                list_courses(svc, &mut p)?;
                true
            }
            "0" => false,
            _ => {
                p.say("Invalid choice. Please try again.")?;
                true
            }
        };
        if !keep_going {
            break;
        }
    }

    p.say("\nGoodbye!")
}

// Each handler returns Ok(false) when input ended mid-prompt.

fn add_student<S, C, E, R, W>(
    svc: &mut RegistrationService<S, C, E>,
    p: &mut Prompter<'_, R, W>,
) -> io::Result<bool>
where
    S: StudentStore,
    C: CourseStore,
    E: EnrollmentStore,
    R: BufRead,
    W: Write,
{
    let Some(id) = p.ask("Banner ID: ")? else {
        return Ok(false);
    };
    let Some(name) = p.ask("Name: ")? else {
        return Ok(false);
    };
    let Some(email) = p.ask("Email: ")? else {
        return Ok(false);
    };

    match svc.add_student(&id, &name, &email) {
        Ok(()) => p.say("Student added successfully.")?,
        Err(e) => p.say(format_args!("Error: {}", e))?,
    }
    Ok(true)
}

fn add_course<S, C, E, R, W>(
    svc: &mut RegistrationService<S, C, E>,
    p: &mut Prompter<'_, R, W>,
) -> io::Result<bool>
where
    S: StudentStore,
    C: CourseStore,
    E: EnrollmentStore,
    R: BufRead,
    W: Write,
{
    let Some(code) = p.ask("Course Code: ")? else {
        return Ok(false);
    };
    let Some(title) = p.ask("Title: ")? else {
        return Ok(false);
    };

    let capacity = loop {
        let Some(raw) = p.ask("Capacity: ")? else {
            return Ok(false);
        };
        match raw.parse::<i64>() {
            Ok(capacity) => break capacity,
            Err(_) => p.say("Error: Capacity must be a valid number.")?,
        }
    };

    match svc.add_course(&code, &title, capacity) {
        Ok(()) => p.say("Course added successfully.")?,
        Err(e) => p.say(format_args!("Error: {}", e))?,
    }
    Ok(true)
}

fn enroll<S, C, E, R, W>(
    svc: &mut RegistrationService<S, C, E>,
    p: &mut Prompter<'_, R, W>,
) -> io::Result<bool>
where
    S: StudentStore,
    C: CourseStore,
    E: EnrollmentStore,
    R: BufRead,
    W: Write,
{
    let Some(student_id) = p.ask("Student ID: ")? else {
        return Ok(false);
    };
    let Some(course_code) = p.ask("Course Code: ")? else {
        return Ok(false);
    };

    match svc.enroll_student(&student_id, &course_code) {
        Ok(outcome) => p.say(outcome)?,
        Err(e) => p.say(format_args!("Error: {}", e))?,
    }
    Ok(true)
}

fn drop_student<S, C, E, R, W>(
    svc: &mut RegistrationService<S, C, E>,
    p: &mut Prompter<'_, R, W>,
) -> io::Result<bool>
where
    S: StudentStore,
    C: CourseStore,
    E: EnrollmentStore,
    R: BufRead,
    W: Write,
{
    let Some(student_id) = p.ask("Student ID: ")? else {
        return Ok(false);
    };
    let Some(course_code) = p.ask("Course Code: ")? else {
        return Ok(false);
    };

    match svc.drop_student(&student_id, &course_code) {
        Ok(outcome) => p.say(outcome)?,
        Err(e) => p.say(format_args!("Error: {}", e))?,
    }
    Ok(true)
}

fn list_students<S, C, E, R, W>(
    svc: &RegistrationService<S, C, E>,
    p: &mut Prompter<'_, R, W>,
) -> io::Result<()>
where
    S: StudentStore,
    C: CourseStore,
    E: EnrollmentStore,
    R: BufRead,
    W: Write,
{
    let students = svc.list_students();
    p.say("\nStudents:")?;
    if students.is_empty() {
        return p.say("  (none)");
    }
    for student in students {
        p.say(format_args!("  - {}", student))?;
    }
    Ok(())
}

fn list_courses<S, C, E, R, W>(
    svc: &RegistrationService<S, C, E>,
    p: &mut Prompter<'_, R, W>,
) -> io::Result<()>
where
    S: StudentStore,
    C: CourseStore,
    E: EnrollmentStore,
    R: BufRead,
    W: Write,
{
    let courses = svc.list_courses();
    p.say("\nCourses:")?;
    if courses.is_empty() {
        return p.say("  (none)");
    }
    for course in courses {
        match svc.course_enrollment_info(course.code()) {
            Ok(info) => p.say(format_args!("  - {}", info))?,
            Err(e) => p.say(format_args!("Error: {}", e))?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursereg_core::{MemoryCourseStore, MemoryEnrollmentStore, MemoryStudentStore};
    use std::io::Cursor;

    type MemoryService =
        RegistrationService<MemoryStudentStore, MemoryCourseStore, MemoryEnrollmentStore>;

    fn memory_service() -> MemoryService {
        RegistrationService::new(
            MemoryStudentStore::new(),
            MemoryCourseStore::new(),
            MemoryEnrollmentStore::new(),
        )
    }

    fn run_script(svc: &mut MemoryService, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_menu(svc, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_and_list_students() {
        let mut svc = memory_service();
        let out = run_script(&mut svc, "1\nB001\nAlice\nalice@uca.edu\n5\n0\n");

        assert!(out.contains("Student added successfully."));
        assert!(out.contains("  - B001 Alice <alice@uca.edu>"));
        assert!(out.ends_with("\nGoodbye!\n"));
    }

    #[test]
    fn test_capacity_reprompts_until_numeric() {
        let mut svc = memory_service();
        let out = run_script(
            &mut svc,
            "2\nCSCI4490\nSoftware Engineering\ntwo\n2\n6\n0\n",
        );

        assert!(out.contains("Error: Capacity must be a valid number."));
        assert!(out.contains("Course added successfully."));
        assert!(out.contains("  - CSCI4490 Software Engineering cap=2 enrolled=0 wait=0"));
    }

    #[test]
    fn test_enroll_and_drop_report_outcomes() {
        let mut svc = memory_service();
        seed_demo(&mut svc).unwrap();
        svc.add_student("B003", "Cara", "cara@uca.edu").unwrap();

        let out = run_script(
            &mut svc,
            "3\nB001\nCSCI4490\n3\nB002\nCSCI4490\n3\nB003\nCSCI4490\n4\nB001\nCSCI4490\n0\n",
        );

        assert!(out.contains("Enrolled."));
        assert!(out.contains("Course full. Added to WAITLIST."));
        assert!(out.contains("Dropped. Promoted B003 from waitlist."));
    }

    #[test]
    fn test_errors_are_reported_and_loop_continues() {
        let mut svc = memory_service();
        let out = run_script(&mut svc, "3\nB404\nCSCI4490\n9\n5\n0\n");

        assert!(out.contains("Error: Student B404 not found"));
        assert!(out.contains("Invalid choice. Please try again."));
        assert!(out.contains("  (none)"));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let mut svc = memory_service();
        let out = run_script(&mut svc, "1\nB001\n");

        assert!(out.ends_with("\nGoodbye!\n"));
        assert!(svc.list_students().is_empty());
    }
}
