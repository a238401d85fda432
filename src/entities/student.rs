// 🎓 Student Entity

use serde::{Deserialize, Serialize};

use crate::render::Labels;

/// A student known to the register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Student number (intended unique, never enforced)
    pub id: String,

    /// Display name
    pub name: String,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Student {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Labelled one-line description, e.g. `Student - ID: S1, Name: Alice`
    pub fn describe(&self, labels: &Labels) -> String {
        format!(
            "{} - {}: {}, {}: {}",
            labels.student, labels.student_id, self.id, labels.name, self.name
        )
    }

    /// Header line used by the grouped enrollment view
    pub fn group_header(&self, labels: &Labels) -> String {
        format!("{}: {} - {}", labels.student, self.id, self.name)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;

    #[test]
    fn test_student_creation() {
        let student = Student::new("S1", "Alice");

        assert_eq!(student.id, "S1");
        assert_eq!(student.name, "Alice");
    }

    #[test]
    fn test_student_accepts_empty_fields() {
        let student = Student::new("", "");

        assert!(student.id.is_empty());
        assert!(student.name.is_empty());
    }

    #[test]
    fn test_student_describe() {
        let student = Student::new("S1", "Alice");

        assert_eq!(
            student.describe(Locale::En.labels()),
            "Student - ID: S1, Name: Alice"
        );
        assert_eq!(
            student.describe(Locale::ZhTw.labels()),
            "學生 - 學號: S1, 姓名: Alice"
        );
    }

    #[test]
    fn test_student_group_header() {
        let student = Student::new("S2", "Bob");

        assert_eq!(student.group_header(Locale::En.labels()), "Student: S2 - Bob");
        assert_eq!(student.group_header(Locale::ZhTw.labels()), "學生: S2 - Bob");
    }
}
