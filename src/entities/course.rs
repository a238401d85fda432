// 📚 Course Entity
//
// The teacher is referenced by identifier only. A course may point at a
// teacher that was never registered; nothing checks it.

use serde::{Deserialize, Serialize};

use crate::render::Labels;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course number (intended unique, never enforced)
    pub id: String,

    /// Course title
    pub name: String,

    /// Identifier of the teaching teacher (may dangle)
    pub teacher_id: String,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        teacher_id: impl Into<String>,
    ) -> Self {
        Course {
            id: id.into(),
            name: name.into(),
            teacher_id: teacher_id.into(),
        }
    }

    /// Labelled one-line description including the teacher identifier
    pub fn describe(&self, labels: &Labels) -> String {
        format!(
            "{} - {}: {}, {}: {}, {}: {}",
            labels.course,
            labels.course_id,
            self.id,
            labels.course_name,
            self.name,
            labels.course_teacher_id,
            self.teacher_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;

    #[test]
    fn test_course_creation() {
        let course = Course::new("C1", "Algorithms", "T1");

        assert_eq!(course.id, "C1");
        assert_eq!(course.name, "Algorithms");
        assert_eq!(course.teacher_id, "T1");
    }

    #[test]
    fn test_course_describe() {
        let course = Course::new("C1", "Algorithms", "T1");

        assert_eq!(
            course.describe(Locale::En.labels()),
            "Course - Course ID: C1, Title: Algorithms, Teacher ID: T1"
        );
        assert_eq!(
            course.describe(Locale::ZhTw.labels()),
            "課程 - 課號: C1, 課程名稱: Algorithms, 教師工號: T1"
        );
    }
}
