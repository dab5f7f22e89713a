use serde::{Deserialize, Serialize};

use super::error::{RecordError, RecordResult};

/// Column headers of the persisted file, in field order
pub const HEADERS: [&str; 5] = ["Student Name", "Class", "Section", "Roll No", "Grade"];

/// A single student row with typed values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "Student Name")]
    pub name: String,
    #[serde(rename = "Class")]
    pub class: String,
    #[serde(rename = "Section")]
    pub section: String,
    #[serde(rename = "Roll No")]
    pub roll_no: i32,
    #[serde(rename = "Grade")]
    pub grade: String,
}

impl Student {
    /// Create a new student row
    pub fn new(name: String, class: String, section: String, roll_no: i32, grade: String) -> Self {
        Self {
            name,
            class,
            section,
            roll_no,
            grade,
        }
    }
}

/// Parse a roll number field.
///
/// Roll number is the only validated field; surrounding whitespace is
/// ignored, anything that is not an integer is rejected.
pub fn parse_roll_no(input: &str) -> RecordResult<i32> {
    let trimmed = input.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| RecordError::InvalidRollNo(trimmed.to_string()))
}

/// Field changes applied to an existing row.
///
/// `None` keeps the current value. Roll number carries the already-resolved
/// value (current or new) and is always written back, so callers must parse
/// new input before constructing a patch.
#[derive(Debug, Clone)]
pub struct StudentPatch {
    pub class: Option<String>,
    pub section: Option<String>,
    pub roll_no: i32,
    pub grade: Option<String>,
}

impl StudentPatch {
    /// Apply this patch to a row
    pub fn apply_to(&self, student: &mut Student) {
        if let Some(class) = &self.class {
            student.class = class.clone();
        }
        if let Some(section) = &self.section {
            student.section = section.clone();
        }
        student.roll_no = self.roll_no;
        if let Some(grade) = &self.grade {
            student.grade = grade.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_student() -> Student {
        Student::new(
            "Alice".to_string(),
            "10".to_string(),
            "A".to_string(),
            1,
            "A+".to_string(),
        )
    }

    #[test]
    fn test_parse_roll_no() {
        assert_eq!(parse_roll_no("42").unwrap(), 42);
        assert_eq!(parse_roll_no(" 7 ").unwrap(), 7);
        assert_eq!(parse_roll_no("-3").unwrap(), -3);
    }

    #[test]
    fn test_parse_roll_no_rejects_non_integers() {
        assert!(parse_roll_no("").is_err());
        assert!(parse_roll_no("   ").is_err());
        assert!(parse_roll_no("abc").is_err());
        assert!(parse_roll_no("4.5").is_err());
        assert!(parse_roll_no("12a").is_err());
    }

    #[test]
    fn test_patch_keeps_unset_fields() {
        let mut student = sample_student();
        let patch = StudentPatch {
            class: None,
            section: None,
            roll_no: student.roll_no,
            grade: Some("B".to_string()),
        };

        patch.apply_to(&mut student);

        assert_eq!(student.class, "10");
        assert_eq!(student.section, "A");
        assert_eq!(student.roll_no, 1);
        assert_eq!(student.grade, "B");
    }

    #[test]
    fn test_patch_replaces_set_fields() {
        let mut student = sample_student();
        let patch = StudentPatch {
            class: Some("11".to_string()),
            section: Some("B".to_string()),
            roll_no: 9,
            grade: Some("A".to_string()),
        };

        patch.apply_to(&mut student);

        assert_eq!(student.class, "11");
        assert_eq!(student.section, "B");
        assert_eq!(student.roll_no, 9);
        assert_eq!(student.grade, "A");
        assert_eq!(student.name, "Alice");
    }
}
