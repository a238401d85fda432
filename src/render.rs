// 🖨️ Rendering - label sets and record lines
//
// The register never formats anything itself. Listings are turned into
// lines here, in the label set of the session's locale, either as labelled
// text or as one JSON object per line.

use serde::Serialize;

use crate::config::{Locale, OutputFormat};
use crate::entities::{Course, Student, Teacher};
use crate::registry::StudentEnrollments;

// ============================================================================
// LABELS
// ============================================================================

/// Every user-facing string for one locale
#[derive(Debug)]
pub struct Labels {
    // Record labels
    pub student: &'static str,
    pub teacher: &'static str,
    pub course: &'static str,
    pub student_id: &'static str,
    pub teacher_id: &'static str,
    pub course_id: &'static str,
    pub name: &'static str,
    pub course_name: &'static str,
    pub course_teacher_id: &'static str,

    // Section headers
    pub all_students: &'static str,
    pub all_teachers: &'static str,
    pub all_courses: &'static str,
    pub enrollments_by_student: &'static str,

    // Menu
    pub menu_title: &'static str,
    /// Selections 1 to 8, in order
    pub menu_items: [&'static str; 8],
    pub menu_browse: &'static str,
    pub menu_exit: &'static str,
    pub menu_prompt: &'static str,
    pub invalid_selection: &'static str,
    pub goodbye: &'static str,

    // Field prompts
    pub prompt_student_id: &'static str,
    pub prompt_student_name: &'static str,
    pub prompt_teacher_id: &'static str,
    pub prompt_teacher_name: &'static str,
    pub prompt_course_id: &'static str,
    pub prompt_course_name: &'static str,
    pub prompt_course_teacher_id: &'static str,
}

static EN: Labels = Labels {
    student: "Student",
    teacher: "Teacher",
    course: "Course",
    student_id: "ID",
    teacher_id: "Staff ID",
    course_id: "Course ID",
    name: "Name",
    course_name: "Title",
    course_teacher_id: "Teacher ID",

    all_students: "=== All Students ===",
    all_teachers: "=== All Teachers ===",
    all_courses: "=== All Courses ===",
    enrollments_by_student: "=== Enrollments by Student ===",

    menu_title: " Course Enrollment Register ",
    menu_items: [
        "Add student",
        "Add teacher",
        "Add course",
        "Add enrollment",
        "List all students",
        "List all teachers",
        "List all courses",
        "List enrollments by student",
    ],
    menu_browse: "Browse register",
    menu_exit: "Exit",
    menu_prompt: "Enter selection: ",
    invalid_selection: "Invalid selection, please try again.",
    goodbye: "Goodbye.",

    prompt_student_id: "Student ID: ",
    prompt_student_name: "Student name: ",
    prompt_teacher_id: "Teacher staff ID: ",
    prompt_teacher_name: "Teacher name: ",
    prompt_course_id: "Course ID: ",
    prompt_course_name: "Course title: ",
    prompt_course_teacher_id: "Teacher staff ID for this course: ",
};

static ZH_TW: Labels = Labels {
    student: "學生",
    teacher: "教師",
    course: "課程",
    student_id: "學號",
    teacher_id: "工號",
    course_id: "課號",
    name: "姓名",
    course_name: "課程名稱",
    course_teacher_id: "教師工號",

    all_students: "=== 所有學生 ===",
    all_teachers: "=== 所有教師 ===",
    all_courses: "=== 所有課程 ===",
    enrollments_by_student: "=== 依學生分類的選課紀錄 ===",

    menu_title: " 學生選課管理系統 ",
    menu_items: [
        "新增學生",
        "新增教師",
        "新增課程",
        "新增選課紀錄",
        "列出所有學生",
        "列出所有教師",
        "列出所有課程",
        "列出依學生分類的選課紀錄",
    ],
    menu_browse: "瀏覽資料",
    menu_exit: "結束系統",
    menu_prompt: "請輸入選項: ",
    invalid_selection: "無效的選項，請重新輸入。",
    goodbye: "系統結束。",

    prompt_student_id: "輸入學生學號: ",
    prompt_student_name: "輸入學生姓名: ",
    prompt_teacher_id: "輸入教師工號: ",
    prompt_teacher_name: "輸入教師姓名: ",
    prompt_course_id: "輸入課程編號: ",
    prompt_course_name: "輸入課程名稱: ",
    prompt_course_teacher_id: "輸入授課教師工號: ",
};

impl Locale {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::ZhTw => &ZH_TW,
        }
    }
}

// ============================================================================
// RENDERER
// ============================================================================

/// JSON shape of one grouped-view group
#[derive(Serialize)]
struct GroupRecord<'a> {
    student: &'a Student,
    courses: &'a [&'a Course],
}

/// Turns records into output lines for one locale and format
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    labels: &'static Labels,
    format: OutputFormat,
}

impl Renderer {
    pub fn new(locale: Locale, format: OutputFormat) -> Self {
        Renderer {
            labels: locale.labels(),
            format,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        self.labels
    }

    /// Section header, or `None` in JSON mode where headers are omitted
    pub fn header(&self, header: &'static str) -> Option<&'static str> {
        match self.format {
            OutputFormat::Text => Some(header),
            OutputFormat::Json => None,
        }
    }

    pub fn student(&self, student: &Student) -> String {
        match self.format {
            OutputFormat::Text => student.describe(self.labels),
            OutputFormat::Json => to_json_line(student),
        }
    }

    pub fn teacher(&self, teacher: &Teacher) -> String {
        match self.format {
            OutputFormat::Text => teacher.describe(self.labels),
            OutputFormat::Json => to_json_line(teacher),
        }
    }

    pub fn course(&self, course: &Course) -> String {
        match self.format {
            OutputFormat::Text => course.describe(self.labels),
            OutputFormat::Json => to_json_line(course),
        }
    }

    /// Lines for one group of the grouped view.
    ///
    /// Text: a blank separator line, the student header, then one line per
    /// course in enrollment order. JSON: a single object line.
    pub fn group(&self, group: &StudentEnrollments<'_>) -> Vec<String> {
        match self.format {
            OutputFormat::Text => {
                let mut lines = Vec::with_capacity(group.courses.len() + 2);
                lines.push(String::new());
                lines.push(group.student.group_header(self.labels));
                lines.extend(group.courses.iter().map(|c| c.describe(self.labels)));
                lines
            }
            OutputFormat::Json => vec![to_json_line(&GroupRecord {
                student: group.student,
                courses: &group.courses,
            })],
        }
    }
}

fn to_json_line<T: Serialize>(value: &T) -> String {
    // Plain structs of strings always serialize
    serde_json::to_string(value).unwrap_or_default()
}

// ============================================================================
// TESTS
// ============================================================================
