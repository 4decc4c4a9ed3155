//! Typed survey records built from table rows.

pub mod base;
pub mod station;
pub mod time;

use crate::{error::Error, table::Row};

pub use base::{BaseColumns, BaseRecord};
pub use station::{StationColumns, StationRecord};
pub use time::normalize_time;

/// Converts one table row into a record, given the column mapping chosen by the user.
pub trait Reading: Sized {
    type Columns;

    fn from_row(row: &Row, columns: &Self::Columns) -> Result<Self, Error>;
}
