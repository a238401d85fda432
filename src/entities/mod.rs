// Entity Models
//
// Each entity is a plain, immutable record:
// - Identifier chosen by the user (not generated, not checked for uniqueness)
// - Display name
// - References to other entities are plain identifiers, resolved on read

pub mod student;
pub mod teacher;
pub mod course;
pub mod enrollment;

pub use student::Student;
pub use teacher::Teacher;
pub use course::Course;
pub use enrollment::Enrollment;
