//! Delimited-text tables and column checks.

use std::{collections::HashMap, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{Dataset, Error};

/// A loaded input table: header names plus the raw string rows.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<StringRecord>,
}

impl Table {
    pub fn from_path(path: &Path, delimiter: u8) -> Result<Self, Error> {
        if !path.is_file() {
            return Err(Error::MissingFile(path.to_path_buf()));
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(Trim::All)
            .from_path(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let rows = reader.records().collect::<Result<Vec<_>, csv::Error>>()?;

        Ok(Table::new(headers, rows))
    }

    pub fn new(headers: Vec<String>, rows: Vec<StringRecord>) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), i))
            .collect();

        Table {
            headers,
            index,
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(move |(number, record)| Row {
            number: number + 1,
            index: &self.index,
            record,
        })
    }

    fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

/// One data row with access to its cells by column name.
pub struct Row<'a> {
    number: usize,
    index: &'a HashMap<String, usize>,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    /// 1-based position of the row below the header.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.index
            .get(column)
            .and_then(|&i| self.record.get(i))
    }

    /// Returns the cell as a string, empty if the column or cell is missing.
    pub fn text(&self, column: &str) -> &'a str {
        self.get(column).unwrap_or("")
    }

    /// Parses the cell as a finite number; `NaN` and `inf` are rejected.
    pub fn number_at(&self, column: &str) -> Result<f64, Error> {
        let value = self.text(column);
        value
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| Error::InvalidValue {
                column: column.to_string(),
                row: self.number,
                value: value.to_string(),
            })
    }
}

/// True when every name in `columns` is a column of `table`.
pub fn columns_exist<S: AsRef<str>>(table: &Table, columns: &[S]) -> bool {
    columns.iter().all(|c| table.has_column(c.as_ref()))
}

/// Names from `columns` that `table` does not have, in the order given.
pub fn missing_columns<S: AsRef<str>>(table: &Table, columns: &[S]) -> Vec<String> {
    columns
        .iter()
        .map(AsRef::as_ref)
        .filter(|c| !table.has_column(c))
        .map(str::to_string)
        .collect()
}

/// Fails with [`Error::ColumnMismatch`] naming the dataset and the absent columns.
pub fn require_columns<S: AsRef<str>>(
    table: &Table,
    columns: &[S],
    dataset: Dataset,
) -> Result<(), Error> {
    if columns_exist(table, columns) {
        return Ok(());
    }

    Err(Error::ColumnMismatch {
        dataset,
        missing: missing_columns(table, columns),
    })
}

// -- Tests -------------------------------------------------------------------
