// 🔗 Enrollment - many-to-many link between a student and a course
//
// Neither side is checked on insert. Duplicate links are kept.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub student_id: String,
    pub course_id: String,
}

impl Enrollment {
    pub fn new(student_id: impl Into<String>, course_id: impl Into<String>) -> Self {
        Enrollment {
            student_id: student_id.into(),
            course_id: course_id.into(),
        }
    }
}
