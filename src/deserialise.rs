//! Generic function for deserialising the rows of a table to a Vec of Readings

use anyhow::{Context, Result};

use crate::{error::Dataset, reading::Reading, table::Table};

/// Converts every row of `table` to a reading, stopping at the first bad row.
pub fn deserialise<R: Reading>(table: &Table, columns: &R::Columns, dataset: Dataset) -> Result<Vec<R>> {
    let mut readings = Vec::with_capacity(table.len());

    for row in table.rows() {
        let reading = R::from_row(&row, columns)
            .with_context(|| format!("Invalid row {} in the {} file", row.number(), dataset))?;
        readings.push(reading);
    }

    debug!("Deserialised {} {} readings", readings.len(), dataset);

    Ok(readings)
}

// -- Tests -------------------------------------------------------------------
