mod error;
mod student;

pub use error::{RecordError, RecordResult};
pub use student::{HEADERS, Student, StudentPatch, parse_roll_no};
