// 🗂️ Registry - the in-memory course-enrollment register
//
// Four append-only collections, kept in insertion order:
// - students, teachers, courses: the entities
// - enrollments: (student id, course id) links between them
//
// Nothing is ever updated or removed, and nothing is validated on insert.
// References are resolved on read by linear scan, first match wins.

use std::collections::BTreeMap;
use std::slice;

use tracing::debug;

use crate::entities::{Course, Enrollment, Student, Teacher};

// ============================================================================
// GROUPED VIEW
// ============================================================================

/// One group of the grouped enrollment view: a resolved student and the
/// resolved courses of their enrollments, in enrollment insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentEnrollments<'a> {
    pub student: &'a Student,
    pub courses: Vec<&'a Course>,
}

// ============================================================================
// REGISTRY
// ============================================================================

/// The register. Lives for the whole session; collections only grow.
#[derive(Debug, Default)]
pub struct Registry {
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
}

impl Registry {
    /// Create an empty register
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Inserts (total: any string is accepted, duplicates included)
    // ------------------------------------------------------------------------

    pub fn add_student(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let student = Student::new(id, name);
        debug!(id = %student.id, "student added");
        self.students.push(student);
    }

    pub fn add_teacher(&mut self, id: impl Into<String>, name: impl Into<String>) {
        let teacher = Teacher::new(id, name);
        debug!(id = %teacher.id, "teacher added");
        self.teachers.push(teacher);
    }

    /// The teacher id is stored as given, even if no such teacher exists
    pub fn add_course(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        teacher_id: impl Into<String>,
    ) {
        let course = Course::new(id, name, teacher_id);
        debug!(id = %course.id, teacher_id = %course.teacher_id, "course added");
        self.courses.push(course);
    }

    /// Neither side of the link is checked here; unresolved links are
    /// dropped when the grouped view is built.
    pub fn add_enrollment(&mut self, student_id: impl Into<String>, course_id: impl Into<String>) {
        let enrollment = Enrollment::new(student_id, course_id);
        debug!(
            student_id = %enrollment.student_id,
            course_id = %enrollment.course_id,
            "enrollment added"
        );
        self.enrollments.push(enrollment);
    }

    // ------------------------------------------------------------------------
    // Listings (insertion order; call again to see later inserts)
    // ------------------------------------------------------------------------

    pub fn list_students(&self) -> slice::Iter<'_, Student> {
        self.students.iter()
    }

    pub fn list_teachers(&self) -> slice::Iter<'_, Teacher> {
        self.teachers.iter()
    }

    pub fn list_courses(&self) -> slice::Iter<'_, Course> {
        self.courses.iter()
    }

    /// Raw enrollment links, unresolved
    pub fn list_enrollments(&self) -> slice::Iter<'_, Enrollment> {
        self.enrollments.iter()
    }

    /// Enrollments grouped by student.
    ///
    /// Groups come out in ascending byte-wise order of student id (they are
    /// collected in a `BTreeMap`), not in insertion order. Within a group,
    /// courses keep the order their enrollments were added.
    ///
    /// Unresolved references are skipped without error:
    /// - a student id with no matching student drops the whole group
    /// - a course id with no matching course drops only that line
    pub fn list_enrollments_by_student(&self) -> Vec<StudentEnrollments<'_>> {
        let mut by_student: BTreeMap<&str, Vec<&Enrollment>> = BTreeMap::new();
        for enrollment in &self.enrollments {
            by_student
                .entry(enrollment.student_id.as_str())
                .or_default()
                .push(enrollment);
        }

        let mut groups = Vec::with_capacity(by_student.len());
        for (student_id, enrollments) in by_student {
            let Some(student) = self.find_student(student_id) else {
                debug!(student_id, "skipping enrollments of unknown student");
                continue;
            };

            let courses = enrollments
                .into_iter()
                .filter_map(|enrollment| {
                    let course = self.find_course(&enrollment.course_id);
                    if course.is_none() {
                        debug!(
                            student_id,
                            course_id = %enrollment.course_id,
                            "skipping enrollment in unknown course"
                        );
                    }
                    course
                })
                .collect();

            groups.push(StudentEnrollments { student, courses });
        }

        groups
    }

    // ------------------------------------------------------------------------
    // Lookups (linear scan, first match)
    // ------------------------------------------------------------------------

    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn find_teacher(&self, id: &str) -> Option<&Teacher> {
        self.teachers.iter().find(|t| t.id == id)
    }

    pub fn find_course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    // ------------------------------------------------------------------------
    // Counts
    // ------------------------------------------------------------------------

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn teacher_count(&self) -> usize {
        self.teachers.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn enrollment_count(&self) -> usize {
        self.enrollments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
            && self.teachers.is_empty()
            && self.courses.is_empty()
            && self.enrollments.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
