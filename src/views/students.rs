//! The students listing, backed by the generic data table.
//!
//! Search and grade filtering happen here, before rows reach the table;
//! the table only sorts and renders what it is given.

use classboard_core::{CellValue, Column, DataTable};
use classboard_models::{StudentRecord, demo_students};

fn number_render(digits: usize) -> impl Fn(&CellValue) -> String {
    move |value| match value {
        CellValue::Number(n) => format!("{n:.digits$}"),
        CellValue::Text(s) => s.clone(),
    }
}

/// The listing's column schema. Every column is sortable except email.
pub fn columns() -> Vec<Column<StudentRecord>> {
    vec![
        Column::new("id", "Student ID", |s: &StudentRecord| {
            CellValue::from(s.id.clone())
        })
        .sortable(),
        Column::new("name", "Name", |s: &StudentRecord| {
            CellValue::from(s.name.clone())
        })
        .sortable(),
        Column::new("email", "Email", |s: &StudentRecord| {
            CellValue::from(s.email.clone())
        }),
        Column::new("grade", "Grade", |s: &StudentRecord| {
            CellValue::from(s.grade.clone())
        })
        .sortable(),
        Column::new("class", "Class", |s: &StudentRecord| {
            CellValue::from(s.class_name.clone())
        })
        .sortable(),
        Column::new("gpa", "GPA", |s: &StudentRecord| CellValue::Number(s.gpa))
            .sortable()
            .with_render(number_render(2)),
        Column::new("attendance", "Attendance", |s: &StudentRecord| {
            CellValue::Number(s.attendance)
        })
        .sortable()
        .with_render(|v| match v {
            CellValue::Number(n) => format!("{n:.1}%"),
            CellValue::Text(s) => s.clone(),
        }),
        Column::new("enrolled", "Enrolled", |s: &StudentRecord| {
            CellValue::from(s.enrollment_date.clone())
        })
        .sortable(),
    ]
}

/// The students page: roster, active filters, and the table's sort state.
pub struct StudentsPage {
    roster: Vec<StudentRecord>,
    table: DataTable<StudentRecord>,
    pub search: String,
    pub grade_filter: Option<String>,
}

impl StudentsPage {
    pub fn new() -> Self {
        Self::with_roster(demo_students())
    }

    pub fn with_roster(roster: Vec<StudentRecord>) -> Self {
        Self {
            roster,
            table: DataTable::new(columns()),
            search: String::new(),
            grade_filter: None,
        }
    }

    /// Keys of the columns a sort prompt should offer.
    pub fn sortable_keys(&self) -> Vec<String> {
        self.table
            .columns()
            .iter()
            .filter(|c| c.is_sortable())
            .map(|c| c.key().to_string())
            .collect()
    }

    pub fn toggle_sort(&mut self, key: &str) {
        self.table.toggle_sort(key);
    }

    fn filtered(&self) -> Vec<StudentRecord> {
        self.roster
            .iter()
            .filter(|s| s.matches_search(&self.search))
            .filter(|s| {
                self.grade_filter
                    .as_deref()
                    .is_none_or(|grade| s.grade == grade)
            })
            .cloned()
            .collect()
    }

    pub fn render(&self) -> String {
        let rows = self.filtered();
        let mut out = format!("Students ({} of {})\n", rows.len(), self.roster.len());
        if !self.search.is_empty() {
            out.push_str(&format!("Search: {}\n", self.search));
        }
        if let Some(grade) = &self.grade_filter {
            out.push_str(&format!("Grade: {grade}\n"));
        }
        out.push('\n');
        out.push_str(&self.table.view(&rows).to_text());
        out
    }
}

impl Default for StudentsPage {
    fn default() -> Self {
        Self::new()
    }
}
