//! Line codecs for the flat-file record formats
//!
//! | record | line |
//! |---|---|
//! | student | `id,name,email` |
//! | course | `code,title,capacity` |
//! | enrollment | `courseCode|studentId|STATUS` |
//!
//! Lines are split on the first and last delimiter, so the middle field
//! (a name or title) may itself contain the delimiter. Keys never can.

use coursereg_core::{Course, Enrollment, EnrollmentStatus, Student};

use crate::errors::decode_error;
use crate::Result;

/// A record with a one-line flat-file representation
pub trait LineCodec: Sized {
    const DELIMITER: char;

    /// Render the record without a trailing newline
    fn encode(&self) -> String;

    /// Parse one line; `line_no` is 1-based and only used in errors
    fn decode(line: &str, line_no: usize) -> Result<Self>;
}

/// Split into three fields on the first and last occurrence of `delim`
fn split_outer(line: &str, delim: char) -> Option<(&str, &str, &str)> {
    let first = line.find(delim)?;
    let last = line.rfind(delim)?;
    if first == last {
        return None;
    }
    let width = delim.len_utf8();
    Some((
        &line[..first],
        &line[first + width..last],
        &line[last + width..],
    ))
}

fn fields(line: &str, line_no: usize, delim: char) -> Result<(&str, &str, &str)> {
    split_outer(line, delim)
        .ok_or_else(|| decode_error(line_no, format!("expected 3 fields separated by '{}'", delim)))
}

impl LineCodec for Student {
    const DELIMITER: char = ',';

    fn encode(&self) -> String {
        format!("{},{},{}", self.id(), self.name(), self.email())
    }

    fn decode(line: &str, line_no: usize) -> Result<Self> {
        let (id, name, email) = fields(line, line_no, Self::DELIMITER)?;
        Student::new(id, name, email.trim()).map_err(|e| decode_error(line_no, e))
    }
}

impl LineCodec for Course {
    const DELIMITER: char = ',';

    fn encode(&self) -> String {
        format!("{},{},{}", self.code(), self.title(), self.capacity())
    }

    fn decode(line: &str, line_no: usize) -> Result<Self> {
        let (code, title, capacity) = fields(line, line_no, Self::DELIMITER)?;
        let capacity: i64 = capacity
            .trim()
            .parse()
            .map_err(|_| decode_error(line_no, format!("capacity '{}' is not a number", capacity)))?;
        Course::new(code, title, capacity).map_err(|e| decode_error(line_no, e))
    }
}

impl LineCodec for Enrollment {
    const DELIMITER: char = '|';

    fn encode(&self) -> String {
        format!(
            "{}|{}|{}",
            self.course_code(),
            self.student_id(),
            self.status().as_str()
        )
    }

    fn decode(line: &str, line_no: usize) -> Result<Self> {
        let (course_code, student_id, status) = fields(line, line_no, Self::DELIMITER)?;
        let status: EnrollmentStatus = status.parse().map_err(|e| decode_error(line_no, e))?;
        Enrollment::new(student_id, course_code, status).map_err(|e| decode_error(line_no, e))
    }
}

/// Render records one per line, each newline-terminated
pub fn encode_all<T: LineCodec>(records: &[T]) -> String {
    records.iter().fold(String::new(), |mut out, record| {
        out.push_str(&record.encode());
        out.push('\n');
        out
    })
}
