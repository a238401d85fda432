use crate::registry::Registry;
use crate::render::Labels;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Students,
    Teachers,
    Courses,
    Enrollments,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Students, Page::Teachers, Page::Courses, Page::Enrollments];

    pub fn next(&self) -> Self {
        match self {
            Page::Students => Page::Teachers,
            Page::Teachers => Page::Courses,
            Page::Courses => Page::Enrollments,
            Page::Enrollments => Page::Students,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Students => Page::Enrollments,
            Page::Teachers => Page::Students,
            Page::Courses => Page::Teachers,
            Page::Enrollments => Page::Courses,
        }
    }

    pub fn title(&self, labels: &Labels) -> &'static str {
        match self {
            Page::Students => labels.all_students,
            Page::Teachers => labels.all_teachers,
            Page::Courses => labels.all_courses,
            Page::Enrollments => labels.enrollments_by_student,
        }
    }
}

/// Read-only browser over the register
pub struct App<'a> {
    pub registry: &'a Registry,
    pub labels: &'static Labels,
    pub current_page: Page,
    pub state: TableState,
}

impl<'a> App<'a> {
    pub fn new(registry: &'a Registry, labels: &'static Labels) -> Self {
        let mut app = Self {
            registry,
            labels,
            current_page: Page::Students,
            state: TableState::default(),
        };
        app.reset_selection();
        app
    }

    /// Table rows of the current page, as plain cell text
    pub fn rows(&self) -> Vec<Vec<String>> {
        match self.current_page {
            Page::Students => self
                .registry
                .list_students()
                .map(|s| vec![s.id.clone(), s.name.clone()])
                .collect(),
            Page::Teachers => self
                .registry
                .list_teachers()
                .map(|t| vec![t.id.clone(), t.name.clone()])
                .collect(),
            Page::Courses => self
                .registry
                .list_courses()
                .map(|c| vec![c.id.clone(), c.name.clone(), c.teacher_id.clone()])
                .collect(),
            Page::Enrollments => {
                let mut rows = Vec::new();
                for group in self.registry.list_enrollments_by_student() {
                    for course in &group.courses {
                        let teacher = self
                            .registry
                            .find_teacher(&course.teacher_id)
                            .map(|t| t.name.clone())
                            .unwrap_or_default();
                        rows.push(vec![
                            group.student.id.clone(),
                            group.student.name.clone(),
                            course.id.clone(),
                            course.name.clone(),
                            course.teacher_id.clone(),
                            teacher,
                        ]);
                    }
                }
                rows
            }
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
        self.reset_selection();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
        self.reset_selection();
    }

    fn reset_selection(&mut self) {
        let selected = if self.row_count() == 0 { None } else { Some(0) };
        self.state.select(selected);
    }

    pub fn next(&mut self) {
        let len = self.row_count();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.row_count();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn first(&mut self) {
        if self.row_count() > 0 {
            self.state.select(Some(0));
        }
    }

    pub fn last(&mut self) {
        let len = self.row_count();
        if len > 0 {
            self.state.select(Some(len - 1));
        }
    }

    fn column_titles(&self) -> Vec<&'static str> {
        let l = self.labels;
        match self.current_page {
            Page::Students => vec![l.student_id, l.name],
            Page::Teachers => vec![l.teacher_id, l.name],
            Page::Courses => vec![l.course_id, l.course_name, l.course_teacher_id],
            Page::Enrollments => vec![
                l.student_id,
                l.name,
                l.course_id,
                l.course_name,
                l.course_teacher_id,
                l.teacher,
            ],
        }
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("Register browser failed")
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::BackTab => app.previous_page(),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_page();
                    } else {
                        app.next_page();
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Home => app.first(),
                KeyCode::End => app.last(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Page tabs
            Constraint::Min(0),    // Table
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);
    render_table(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, page) in Page::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let name = page.title(app.labels).trim_matches(|c| c == '=' || c == ' ');
        tab_spans.push(Span::styled(name, style));
    }

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(app.labels.menu_title),
    );

    f.render_widget(header, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let titles = app.column_titles();
    let widths: Vec<Constraint> = titles
        .iter()
        .map(|_| Constraint::Ratio(1, titles.len() as u32))
        .collect();

    let header_cells = titles.iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app
        .rows()
        .into_iter()
        .map(|cells| Row::new(cells.into_iter().map(Cell::from)).height(1));

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected().map(|i| i + 1).unwrap_or(0);
    let total = app.row_count();

    let status_spans = vec![
        Span::styled(
            format!(" Row: {}/{} ", selected, total),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" | "),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Page | "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Nav | "),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(" Back"),
    ];

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;

    fn sample_registry() -> Registry {
        let mut registry = Registry::new();
        registry.add_student("S2", "Bob");
        registry.add_student("S1", "Alice");
        registry.add_teacher("T1", "Dr. X");
        registry.add_course("C1", "Algorithms", "T1");
        registry.add_course("C2", "Compilers", "T9");
        registry.add_enrollment("S2", "C1");
        registry.add_enrollment("S1", "C2");
        registry.add_enrollment("S1", "C9");
        registry.add_enrollment("S9", "C1");
        registry
    }

    #[test]
    fn test_page_cycle() {
        let mut page = Page::Students;
        for _ in 0..4 {
            page = page.next();
        }
        assert_eq!(page, Page::Students);
        assert_eq!(Page::Students.previous(), Page::Enrollments);
    }

    #[test]
    fn test_enrollment_rows_follow_grouped_view() {
        let registry = sample_registry();
        let mut app = App::new(&registry, Locale::En.labels());
        app.current_page = Page::Enrollments;

        let rows = app.rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["S1", "Alice", "C2", "Compilers", "T9", ""]);
        assert_eq!(rows[1], vec!["S2", "Bob", "C1", "Algorithms", "T1", "Dr. X"]);
    }

    #[test]
    fn test_selection_wraps() {
        let registry = sample_registry();
        let mut app = App::new(&registry, Locale::En.labels());

        assert_eq!(app.state.selected(), Some(0));
        app.previous();
        assert_eq!(app.state.selected(), Some(1));
        app.next();
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_empty_page_has_no_selection() {
        let registry = Registry::new();
        let mut app = App::new(&registry, Locale::En.labels());

        assert_eq!(app.state.selected(), None);
        app.next();
        app.last();
        assert_eq!(app.state.selected(), None);
    }
}
