use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;

use crate::domain::value_objects::ColumnName;

/// A single spreadsheet cell, reduced to the three shapes the pipeline cares about.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
    Blank,
}

impl Cell {
    /// Text view of the cell. `None` for blanks.
    ///
    /// Integral numbers render without a fractional part so a numeric SKU
    /// such as `12345` does not turn into `12345.0`.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Cell::Text(s) => Some(Cow::Borrowed(s.as_str())),
            Cell::Number(n) => Some(Cow::Owned(format_number(*n))),
            Cell::Blank => None,
        }
    }

    /// True for [`Cell::Blank`] and empty text; such SKU cells are not grouped.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Blank => true,
            Cell::Text(s) => s.is_empty(),
            Cell::Number(_) => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: ColumnName,
    pub cells: Vec<Cell>,
}

/// An ordered sequence of named columns, as parsed from one sheet.
///
/// Immutable once built. Column names are unique and every column has the
/// same length (short columns are padded with [`Cell::Blank`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawTable {
    columns: Vec<Column>,
    row_count: usize,
}

impl RawTable {
    /// Build a table from a header row and row-major data.
    ///
    /// Blank header cells become `Unnamed: <index>`; a repeated name gets a
    /// `.1`, `.2`, … suffix in order of appearance. Rows longer than the
    /// header widen the table with unnamed columns.
    pub fn from_rows(header: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(header.len());

        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut columns: Vec<Column> = (0..width)
            .map(|idx| {
                let raw = header
                    .get(idx)
                    .filter(|h| !h.is_empty())
                    .cloned()
                    .unwrap_or_else(|| format!("Unnamed: {idx}"));
                let name = match seen.get_mut(&raw) {
                    Some(count) => {
                        *count += 1;
                        format!("{raw}.{count}")
                    }
                    None => {
                        seen.insert(raw.clone(), 0);
                        raw
                    }
                };
                Column {
                    name: ColumnName(name),
                    cells: Vec::with_capacity(rows.len()),
                }
            })
            .collect();

        let row_count = rows.len();
        for row in rows {
            let mut cells = row.into_iter();
            for column in columns.iter_mut() {
                column.cells.push(cells.next().unwrap_or(Cell::Blank));
            }
        }

        Self { columns, row_count }
    }

    /// Build a table from already-named columns.
    pub fn from_columns(columns: Vec<(&str, Vec<Cell>)>) -> Self {
        let header = columns.iter().map(|(name, _)| name.to_string()).collect();
        let row_count = columns.iter().map(|(_, c)| c.len()).max().unwrap_or(0);
        let mut columns: Vec<std::vec::IntoIter<Cell>> =
            columns.into_iter().map(|(_, c)| c.into_iter()).collect();
        let rows = (0..row_count)
            .map(|_| {
                columns
                    .iter_mut()
                    .map(|c| c.next().unwrap_or(Cell::Blank))
                    .collect()
            })
            .collect();
        Self::from_rows(header, rows)
    }

    /// Column identifiers in sheet order.
    pub fn header(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &ColumnName) -> Option<&Column> {
        self.columns.iter().find(|c| &c.name == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of data rows (the header row is not counted).
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(table: &RawTable) -> Vec<String> {
        table.header().into_iter().map(String::from).collect()
    }

    #[test]
    fn blank_headers_become_unnamed() {
        let table = RawTable::from_rows(
            vec!["Order ID".into(), "".into(), "Quantity".into()],
            vec![],
        );
        assert_eq!(names(&table), vec!["Order ID", "Unnamed: 1", "Quantity"]);
    }

    #[test]
    fn duplicate_headers_get_numeric_suffix() {
        let table = RawTable::from_rows(
            vec!["SKU".into(), "SKU".into(), "Qty".into(), "SKU".into()],
            vec![],
        );
        assert_eq!(names(&table), vec!["SKU", "SKU.1", "Qty", "SKU.2"]);
    }

    #[test]
    fn short_rows_are_padded_with_blanks() {
        let table = RawTable::from_rows(
            vec!["A".into(), "B".into()],
            vec![vec![Cell::from("x")], vec![Cell::from("y"), Cell::from(2.0)]],
        );
        let b = table.column(&ColumnName::new("B")).unwrap();
        assert_eq!(b.cells, vec![Cell::Blank, Cell::Number(2.0)]);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn wide_rows_add_unnamed_columns() {
        let table = RawTable::from_rows(
            vec!["A".into()],
            vec![vec![Cell::from("x"), Cell::from("extra")]],
        );
        assert_eq!(names(&table), vec!["A", "Unnamed: 1"]);
    }

    #[test]
    fn integral_numbers_render_without_fraction() {
        assert_eq!(Cell::Number(12345.0).as_text().unwrap(), "12345");
        assert_eq!(Cell::Number(1.5).as_text().unwrap(), "1.5");
        assert!(Cell::Blank.as_text().is_none());
    }

    #[test]
    fn from_columns_keeps_order() {
        let table = RawTable::from_columns(vec![
            ("Seller SKU", vec!["A".into(), "B".into()]),
            ("Quantity", vec![1.0.into()]),
        ]);
        assert_eq!(names(&table), vec!["Seller SKU", "Quantity"]);
        let qty = table.column(&ColumnName::new("Quantity")).unwrap();
        assert_eq!(qty.cells, vec![Cell::Number(1.0), Cell::Blank]);
    }
}
