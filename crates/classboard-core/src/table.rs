//! Column-driven table rendering with client-side sorting.
//!
//! The table is a pure render-and-sort component: callers hand it an ordered
//! slice of rows plus a schema of [`Column`] descriptors, and get back a
//! [`TableView`] of header cells and display strings. Search and filtering
//! stay with the caller, which pre-filters the rows before they arrive here.
//!
//! Sorting never touches the caller's slice. The sorted view is recomputed
//! from the raw rows on every render against the current [`SortState`].

use std::cmp::Ordering;
use std::sync::Arc;

/// The raw comparable value a column extracts from a row.
///
/// Numbers compare numerically, text lexicographically; in mixed columns
/// numbers order before text so the result is still total.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Number(_), CellValue::Text(_)) => Ordering::Less,
            (CellValue::Text(_), CellValue::Number(_)) => Ordering::Greater,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
type Render = Arc<dyn Fn(&CellValue) -> String + Send + Sync>;

/// Describes one column: a key, a header label, whether clicking the header
/// sorts, and how to extract (and optionally re-render) the cell value.
///
/// The render function is always fed the raw accessor output, never a
/// previously rendered string.
pub struct Column<T> {
    key: String,
    label: String,
    sortable: bool,
    accessor: Accessor<T>,
    render: Option<Render>,
}

impl<T> Column<T> {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            accessor: Arc::new(accessor),
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn with_render(
        mut self,
        render: impl Fn(&CellValue) -> String + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    fn cell_text(&self, row: &T) -> String {
        let raw = self.value(row);
        match &self.render {
            Some(render) => render(&raw),
            None => raw.to_string(),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            accessor: Arc::clone(&self.accessor),
            render: self.render.as_ref().map(Arc::clone),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The active sort: which column key, which direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

/// One rendered header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: String,
    pub sortable: bool,
    /// Set when this column is the active sort column.
    pub direction: Option<SortDirection>,
}

/// The rendered table: header cells plus one display row per input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    /// Plain-text rendering with padded columns, for the terminal views.
    pub fn to_text(&self) -> String {
        let marker = |h: &HeaderCell| match h.direction {
            Some(SortDirection::Ascending) => " ▲",
            Some(SortDirection::Descending) => " ▼",
            None => "",
        };
        let header_texts: Vec<String> = self
            .headers
            .iter()
            .map(|h| format!("{}{}", h.label, marker(h)))
            .collect();

        let mut widths: Vec<usize> = header_texts.iter().map(|t| t.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let pad = |text: &str, width: usize| {
            let len = text.chars().count();
            format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
        };

        let mut out = String::new();
        let header_line: Vec<String> = header_texts
            .iter()
            .zip(&widths)
            .map(|(t, w)| pad(t, *w))
            .collect();
        out.push_str(&header_line.join("  "));
        out.push('\n');
        out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)));
        out.push('\n');
        for row in &self.rows {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(c, w)| pad(c, *w))
                .collect();
            out.push_str(&line.join("  "));
            out.push('\n');
        }
        out
    }
}

/// The generic data table: a column schema plus the current sort state.
///
/// Owns nothing but the schema and [`SortState`]; rows are borrowed per
/// render so the caller's sequence is never mutated or retained.
pub struct DataTable<T> {
    columns: Vec<Column<T>>,
    sort: Option<SortState>,
}

impl<T> DataTable<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            sort: None,
        }
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// React to a click on a column header.
    ///
    /// Same sortable column: direction toggles. Different sortable column:
    /// direction resets to ascending. Non-sortable or unknown key: no-op.
    pub fn toggle_sort(&mut self, key: &str) {
        let Some(column) = self.columns.iter().find(|c| c.key() == key) else {
            return;
        };
        if !column.is_sortable() {
            return;
        }
        self.sort = Some(match &self.sort {
            Some(state) if state.key == key => SortState {
                key: state.key.clone(),
                direction: state.direction.toggled(),
            },
            _ => SortState {
                key: key.to_string(),
                direction: SortDirection::Ascending,
            },
        });
    }

    /// Render the rows against the schema and current sort state.
    pub fn view(&self, rows: &[T]) -> TableView {
        let headers = self
            .columns
            .iter()
            .map(|c| HeaderCell {
                label: c.label().to_string(),
                sortable: c.is_sortable(),
                direction: self
                    .sort
                    .as_ref()
                    .filter(|s| s.key == c.key())
                    .map(|s| s.direction),
            })
            .collect();

        let mut order: Vec<&T> = rows.iter().collect();
        if let Some(state) = &self.sort
            && let Some(column) = self.columns.iter().find(|c| c.key() == state.key)
        {
            // Vec::sort_by is stable, so ties keep their input order in
            // both directions.
            match state.direction {
                SortDirection::Ascending => {
                    order.sort_by(|a, b| column.value(a).compare(&column.value(b)));
                }
                SortDirection::Descending => {
                    order.sort_by(|a, b| column.value(b).compare(&column.value(a)));
                }
            }
        }

        let rendered = order
            .iter()
            .map(|row| self.columns.iter().map(|c| c.cell_text(row)).collect())
            .collect();

        TableView {
            headers,
            rows: rendered,
        }
    }
}
