// src/data.rs
//
// Tabular shapes shared by flattening, aggregation and export.
//
// - Cell: one typed value; numbers stay numbers so the workbook keeps them numeric.
// - DataSet: headers + rows, the unit written as one sheet.
// - Tabular: fixed column schema for a record type.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Rendered width in characters, as used for column autosizing.
    pub fn width(&self) -> usize {
        match self {
            Cell::Empty => 0,
            Cell::Text(s) => s.chars().count(),
            other => other.to_string().chars().count(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Float(v) => write!(f, "{v}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self { Cell::Int(v) }
}
impl From<i32> for Cell {
    fn from(v: i32) -> Self { Cell::Int(v as i64) }
}
impl From<u64> for Cell {
    fn from(v: u64) -> Self { Cell::Int(v as i64) }
}
impl From<usize> for Cell {
    fn from(v: usize) -> Self { Cell::Int(v as i64) }
}
impl From<f64> for Cell {
    fn from(v: f64) -> Self { Cell::Float(v) }
}
impl From<String> for Cell {
    fn from(v: String) -> Self { Cell::Text(v) }
}
impl From<&str> for Cell {
    fn from(v: &str) -> Self { Cell::Text(s!(v)) }
}
impl From<&String> for Cell {
    fn from(v: &String) -> Self { Cell::Text(v.clone()) }
}
impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Cell::Empty, Into::into)
    }
}

/// A record type with a fixed column layout.
pub trait Tabular {
    const HEADERS: &'static [&'static str];
    fn row(&self) -> Vec<Cell>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl DataSet {
    pub fn with_headers(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| s!(*h)).collect(),
            rows: Vec::new(),
        }
    }

    pub fn from_records<T: Tabular>(records: &[T]) -> Self {
        let mut ds = Self::with_headers(T::HEADERS);
        ds.rows = records.iter().map(Tabular::row).collect();
        ds
    }

    #[inline] pub fn len(&self) -> usize { self.rows.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Widest rendered value per column, header included.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let w = cell.width();
                match widths.get_mut(i) {
                    Some(cur) => *cur = (*cur).max(w),
                    None => widths.push(w),
                }
            }
        }
        widths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair { id: i64, name: Option<String> }
    impl Tabular for Pair {
        const HEADERS: &'static [&'static str] = &["Id", "Name"];
        fn row(&self) -> Vec<Cell> { cells![self.id, self.name.clone()] }
    }

    #[test]
    fn from_records_keeps_order_and_schema() {
        let ds = DataSet::from_records(&[
            Pair { id: 2, name: Some(s!("Bathtub Gin")) },
            Pair { id: 1, name: None },
        ]);
        assert_eq!(ds.headers, vec!["Id", "Name"]);
        assert_eq!(ds.rows[0], vec![Cell::Int(2), Cell::Text(s!("Bathtub Gin"))]);
        assert_eq!(ds.rows[1], vec![Cell::Int(1), Cell::Empty]);
        assert!(!ds.is_empty());
    }

    #[test]
    fn widths_cover_headers_and_values() {
        let ds = DataSet::from_records(&[Pair { id: 123456, name: Some(s!("Tweezer")) }]);
        assert_eq!(ds.column_widths(), vec![6, 7]);

        let empty = DataSet::with_headers(&["Era", "TotalShows"]);
        assert_eq!(empty.column_widths(), vec![3, 10]);
    }

    #[test]
    fn cell_rendering() {
        assert_eq!(Cell::Float(1.5).to_string(), "1.5");
        assert_eq!(Cell::Int(-3).width(), 2);
        assert_eq!(Cell::Empty.width(), 0);
        assert_eq!(Cell::from(Some(7_i64)), Cell::Int(7));
        assert_eq!(Cell::from(None::<String>), Cell::Empty);
    }
}
