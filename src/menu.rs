// 📋 Menu - interactive text session over a Registry
//
// Reads one line per selection and one line per field, calls into the
// register, and writes listings through the Renderer. Generic over the
// reader and writer so a whole session can run against in-memory buffers.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::MenuConfig;
use crate::registry::Registry;
use crate::render::Renderer;

// ============================================================================
// SELECTION
// ============================================================================

/// What the user picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    AddStudent,
    AddTeacher,
    AddCourse,
    AddEnrollment,
    ListStudents,
    ListTeachers,
    ListCourses,
    ListEnrollmentsByStudent,
    /// Full-screen browser, only offered with the `tui` feature
    Browse,
    Exit,
}

/// Why a selection line was rejected. Every variant is shown to the user
/// as the same "invalid selection" message.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("empty selection")]
    Empty,

    #[error("selection is not a number: {0:?}")]
    NotANumber(String),

    #[error("no menu entry {0}")]
    OutOfRange(i64),
}

impl FromStr for Selection {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SelectionError::Empty);
        }

        let number: i64 = s
            .parse()
            .map_err(|_| SelectionError::NotANumber(s.to_string()))?;

        match number {
            0 => Ok(Selection::Exit),
            1 => Ok(Selection::AddStudent),
            2 => Ok(Selection::AddTeacher),
            3 => Ok(Selection::AddCourse),
            4 => Ok(Selection::AddEnrollment),
            5 => Ok(Selection::ListStudents),
            6 => Ok(Selection::ListTeachers),
            7 => Ok(Selection::ListCourses),
            8 => Ok(Selection::ListEnrollmentsByStudent),
            9 if cfg!(feature = "tui") => Ok(Selection::Browse),
            other => Err(SelectionError::OutOfRange(other)),
        }
    }
}

// ============================================================================
// MENU SESSION
// ============================================================================

/// Whether the session keeps going after a selection is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input ended in the middle of a prompt
    InputClosed,
}

pub struct Menu<'a, R, W> {
    registry: &'a mut Registry,
    input: R,
    output: W,
    renderer: Renderer,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(registry: &'a mut Registry, input: R, output: W, config: MenuConfig) -> Self {
        Menu {
            registry,
            input,
            output,
            renderer: Renderer::new(config.locale, config.format),
        }
    }

    /// Run until the exit selection or end of input
    pub fn run(&mut self) -> Result<()> {
        info!("menu session started");

        loop {
            self.show_menu()?;

            let Some(line) = self.read_line()? else {
                debug!("input closed at menu prompt");
                break;
            };

            match line.parse::<Selection>() {
                Ok(Selection::Exit) => break,
                Ok(selection) => {
                    if self.dispatch(selection)? == Flow::InputClosed {
                        debug!(?selection, "input closed while reading fields");
                        break;
                    }
                }
                Err(e) => {
                    debug!(error = %e, "invalid selection");
                    writeln!(self.output, "{}", self.renderer.labels().invalid_selection)?;
                }
            }
        }

        writeln!(self.output, "{}", self.renderer.labels().goodbye)?;
        self.output.flush()?;

        info!(
            students = self.registry.student_count(),
            teachers = self.registry.teacher_count(),
            courses = self.registry.course_count(),
            enrollments = self.registry.enrollment_count(),
            "menu session finished"
        );
        Ok(())
    }

    fn dispatch(&mut self, selection: Selection) -> Result<Flow> {
        let labels = self.renderer.labels();

        match selection {
            Selection::AddStudent => {
                let Some(id) = self.prompt(labels.prompt_student_id)? else {
                    return Ok(Flow::InputClosed);
                };
                let Some(name) = self.prompt(labels.prompt_student_name)? else {
                    return Ok(Flow::InputClosed);
                };
                self.registry.add_student(id, name);
            }
            Selection::AddTeacher => {
                let Some(id) = self.prompt(labels.prompt_teacher_id)? else {
                    return Ok(Flow::InputClosed);
                };
                let Some(name) = self.prompt(labels.prompt_teacher_name)? else {
                    return Ok(Flow::InputClosed);
                };
                self.registry.add_teacher(id, name);
            }
            Selection::AddCourse => {
                let Some(id) = self.prompt(labels.prompt_course_id)? else {
                    return Ok(Flow::InputClosed);
                };
                let Some(name) = self.prompt(labels.prompt_course_name)? else {
                    return Ok(Flow::InputClosed);
                };
                let Some(teacher_id) = self.prompt(labels.prompt_course_teacher_id)? else {
                    return Ok(Flow::InputClosed);
                };
                self.registry.add_course(id, name, teacher_id);
            }
            Selection::AddEnrollment => {
                let Some(student_id) = self.prompt(labels.prompt_student_id)? else {
                    return Ok(Flow::InputClosed);
                };
                let Some(course_id) = self.prompt(labels.prompt_course_id)? else {
                    return Ok(Flow::InputClosed);
                };
                self.registry.add_enrollment(student_id, course_id);
            }
            Selection::ListStudents => {
                self.write_header(labels.all_students)?;
                for student in self.registry.list_students() {
                    writeln!(self.output, "{}", self.renderer.student(student))?;
                }
            }
            Selection::ListTeachers => {
                self.write_header(labels.all_teachers)?;
                for teacher in self.registry.list_teachers() {
                    writeln!(self.output, "{}", self.renderer.teacher(teacher))?;
                }
            }
            Selection::ListCourses => {
                self.write_header(labels.all_courses)?;
                for course in self.registry.list_courses() {
                    writeln!(self.output, "{}", self.renderer.course(course))?;
                }
            }
            Selection::ListEnrollmentsByStudent => {
                self.write_header(labels.enrollments_by_student)?;
                for group in self.registry.list_enrollments_by_student() {
                    for line in self.renderer.group(&group) {
                        writeln!(self.output, "{}", line)?;
                    }
                }
            }
            Selection::Browse => self.browse()?,
            Selection::Exit => {}
        }

        Ok(Flow::Continue)
    }

    #[cfg(feature = "tui")]
    fn browse(&mut self) -> Result<()> {
        self.output.flush()?;
        let mut app = crate::ui::App::new(self.registry, self.renderer.labels());
        crate::ui::run_ui(&mut app)
    }

    #[cfg(not(feature = "tui"))]
    fn browse(&mut self) -> Result<()> {
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        let labels = self.renderer.labels();

        writeln!(self.output)?;
        writeln!(self.output, "{}", labels.menu_title)?;
        for (i, item) in labels.menu_items.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, item)?;
        }
        if cfg!(feature = "tui") {
            writeln!(self.output, "9. {}", labels.menu_browse)?;
        }
        writeln!(self.output, "0. {}", labels.menu_exit)?;
        write!(self.output, "{}", labels.menu_prompt)?;
        self.output.flush()?;
        Ok(())
    }

    fn write_header(&mut self, header: &'static str) -> Result<()> {
        if let Some(header) = self.renderer.header(header) {
            writeln!(self.output, "{}", header)?;
        }
        Ok(())
    }

    /// Show a field prompt and read its answer
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// One trimmed input line, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read menu input")?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Locale, OutputFormat};
    use std::io::Cursor;

    fn run_session(registry: &mut Registry, input: &str, config: MenuConfig) -> String {
        let mut output = Vec::new();
        Menu::new(registry, Cursor::new(input.as_bytes()), &mut output, config)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_parse_valid_selections() {
        assert_eq!("0".parse::<Selection>(), Ok(Selection::Exit));
        assert_eq!("1".parse::<Selection>(), Ok(Selection::AddStudent));
        assert_eq!(" 4 ".parse::<Selection>(), Ok(Selection::AddEnrollment));
        assert_eq!("8".parse::<Selection>(), Ok(Selection::ListEnrollmentsByStudent));
    }

    #[test]
    fn test_parse_invalid_selections() {
        assert_eq!("".parse::<Selection>(), Err(SelectionError::Empty));
        assert_eq!("   ".parse::<Selection>(), Err(SelectionError::Empty));
        assert_eq!(
            "abc".parse::<Selection>(),
            Err(SelectionError::NotANumber("abc".to_string()))
        );
        assert_eq!("10".parse::<Selection>(), Err(SelectionError::OutOfRange(10)));
        assert_eq!("-1".parse::<Selection>(), Err(SelectionError::OutOfRange(-1)));
        assert_eq!(
            "1 2".parse::<Selection>(),
            Err(SelectionError::NotANumber("1 2".to_string()))
        );
    }

    #[test]
    fn test_browse_selection_depends_on_feature() {
        if cfg!(feature = "tui") {
            assert_eq!("9".parse::<Selection>(), Ok(Selection::Browse));
        } else {
            assert_eq!("9".parse::<Selection>(), Err(SelectionError::OutOfRange(9)));
        }
    }

    #[test]
    fn test_add_student_through_menu() {
        let mut registry = Registry::new();

        run_session(&mut registry, "1\nS1\n  Alice  \n0\n", MenuConfig::default());

        let students: Vec<_> = registry.list_students().collect();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].id, "S1");
        assert_eq!(students[0].name, "Alice");
    }

    #[test]
    fn test_empty_fields_accepted() {
        let mut registry = Registry::new();

        run_session(&mut registry, "3\n\n\n\n0\n", MenuConfig::default());

        let course = registry.list_courses().next().unwrap();
        assert_eq!(course.id, "");
        assert_eq!(course.teacher_id, "");
    }

    #[test]
    fn test_invalid_selection_redisplays_menu() {
        let mut registry = Registry::new();

        let output = run_session(&mut registry, "42\nx\n0\n", MenuConfig::default());

        assert_eq!(output.matches("Invalid selection, please try again.").count(), 2);
        assert_eq!(output.matches(" Course Enrollment Register ").count(), 3);
        assert!(output.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let mut registry = Registry::new();

        let output = run_session(&mut registry, "1\nS1\n", MenuConfig::default());

        // Name never arrived, so nothing was added
        assert!(registry.is_empty());
        assert!(output.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_list_courses_text() {
        let mut registry = Registry::new();
        registry.add_course("C1", "Algorithms", "T1");

        let output = run_session(&mut registry, "7\n0\n", MenuConfig::default());

        assert!(output.contains("=== All Courses ===\n"));
        assert!(output.contains("Course - Course ID: C1, Title: Algorithms, Teacher ID: T1\n"));
    }

    #[test]
    fn test_list_students_json_has_no_header() {
        let mut registry = Registry::new();
        registry.add_student("S1", "Alice");

        let config = MenuConfig::new(Locale::En, OutputFormat::Json);
        let output = run_session(&mut registry, "5\n0\n", config);

        assert!(!output.contains("=== All Students ==="));
        assert!(output.contains("{\"id\":\"S1\",\"name\":\"Alice\"}\n"));
    }

    #[test]
    fn test_traditional_chinese_labels() {
        let mut registry = Registry::new();
        registry.add_teacher("T1", "Dr. X");

        let config = MenuConfig::new(Locale::ZhTw, OutputFormat::Text);
        let output = run_session(&mut registry, "6\n99\n0\n", config);

        assert!(output.contains(" 學生選課管理系統 "));
        assert!(output.contains("=== 所有教師 ===\n教師 - 工號: T1, 姓名: Dr. X\n"));
        assert!(output.contains("無效的選項，請重新輸入。"));
        assert!(output.ends_with("系統結束。\n"));
    }
}
