// 🧑‍🏫 Teacher Entity

use serde::{Deserialize, Serialize};

use crate::render::Labels;

/// A teacher known to the register
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Staff number (intended unique, never enforced)
    pub id: String,

    /// Display name
    pub name: String,
}

impl Teacher {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Teacher {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Labelled one-line description, e.g. `Teacher - Staff ID: T1, Name: Dr. X`
    pub fn describe(&self, labels: &Labels) -> String {
        format!(
            "{} - {}: {}, {}: {}",
            labels.teacher, labels.teacher_id, self.id, labels.name, self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;

    #[test]
    fn test_teacher_describe() {
        let teacher = Teacher::new("T1", "Dr. X");

        assert_eq!(
            teacher.describe(Locale::En.labels()),
            "Teacher - Staff ID: T1, Name: Dr. X"
        );
        assert_eq!(
            teacher.describe(Locale::ZhTw.labels()),
            "教師 - 工號: T1, 姓名: Dr. X"
        );
    }
}
