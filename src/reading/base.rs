use crate::{error::Error, table::Row};

use super::{normalize_time, Reading};

/// Column names of the base-station table.
#[derive(Debug, Clone)]
pub struct BaseColumns {
    pub date: String,
    pub magfield: String,
    pub time: String,
}

impl BaseColumns {
    pub fn names(&self) -> Vec<&str> {
        vec![self.date.as_str(), self.magfield.as_str(), self.time.as_str()]
    }
}

/// A base-station reading. `time` is normalised `HHMMSS`.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseRecord {
    pub date: String,
    pub time: u32,
    pub magfield: f64,
}

impl Reading for BaseRecord {
    type Columns = BaseColumns;

    fn from_row(row: &Row, columns: &BaseColumns) -> Result<Self, Error> {
        Ok(BaseRecord {
            date: row.text(&columns.date).to_string(),
            time: normalize_time(row.text(&columns.time))?,
            magfield: row.number_at(&columns.magfield)?,
        })
    }
}

// -- Tests -------------------------------------------------------------------
