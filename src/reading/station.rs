use crate::{error::Error, table::Row};

use super::{normalize_time, Reading};

/// Column names of the field-station table. `elevation` is optional.
#[derive(Debug, Clone)]
pub struct StationColumns {
    pub date: String,
    pub magfield: String,
    pub latitude: String,
    pub longitude: String,
    pub time: String,
    pub elevation: Option<String>,
    /// Used when there is no elevation column or the cell is empty.
    pub default_elevation: f64,
}

impl StationColumns {
    pub fn names(&self) -> Vec<&str> {
        let mut names = vec![
            self.date.as_str(),
            self.magfield.as_str(),
            self.latitude.as_str(),
            self.time.as_str(),
            self.longitude.as_str(),
        ];
        if let Some(elevation) = &self.elevation {
            names.push(elevation);
        }

        names
    }
}

/// A field-station reading. `time` is normalised `HHMMSS`, coordinates are
/// geographic degrees and elevation is in meters.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    pub date: String,
    pub time: u32,
    pub magfield: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl Reading for StationRecord {
    type Columns = StationColumns;

    fn from_row(row: &Row, columns: &StationColumns) -> Result<Self, Error> {
        let elevation = match columns.elevation.as_deref().map(|c| (c, row.text(c))) {
            Some((column, cell)) if !cell.is_empty() => row.number_at(column)?,
            _ => columns.default_elevation,
        };

        Ok(StationRecord {
            date: row.text(&columns.date).to_string(),
            time: normalize_time(row.text(&columns.time))?,
            magfield: row.number_at(&columns.magfield)?,
            latitude: row.number_at(&columns.latitude)?,
            longitude: row.number_at(&columns.longitude)?,
            elevation,
        })
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tests::table_fixture;

    fn columns(elevation: Option<&str>) -> StationColumns {
        StationColumns {
            date: "date".to_string(),
            magfield: "mag".to_string(),
            latitude: "lat".to_string(),
            longitude: "lon".to_string(),
            time: "time".to_string(),
            elevation: elevation.map(str::to_string),
            default_elevation: 1500.0,
        }
    }

    #[test]
    fn should_build_from_row() {
        let table = table_fixture(
            &["date", "time", "mag", "lat", "lon", "elev"],
            &[&["01/06/2022", "133000", "41250.25", "19.43", "-99.13", "2240"]],
        );
        let row = table.rows().next().unwrap();
        let record = StationRecord::from_row(&row, &columns(Some("elev"))).unwrap();

        assert_eq!(record.date, "01/06/2022");
        assert_eq!(record.time, 133000);
        assert_eq!(record.magfield, 41250.25);
        assert_eq!(record.latitude, 19.43);
        assert_eq!(record.longitude, -99.13);
        assert_eq!(record.elevation, 2240.0);
    }

    #[test]
    fn should_use_default_elevation() {
        let table = table_fixture(
            &["date", "time", "mag", "lat", "lon", "elev"],
            &[&["01/06/2022", "13:30:00", "1", "2", "3", ""]],
        );
        let row = table.rows().next().unwrap();

        let without_column = StationRecord::from_row(&row, &columns(None)).unwrap();
        let empty_cell = StationRecord::from_row(&row, &columns(Some("elev"))).unwrap();

        assert_eq!(without_column.elevation, 1500.0);
        assert_eq!(empty_cell.elevation, 1500.0);
    }

    #[test]
    fn should_list_selected_columns() {
        assert_eq!(columns(None).names(), vec!["date", "mag", "lat", "time", "lon"]);
        assert_eq!(columns(Some("elev")).names().len(), 6);
    }

    #[test]
    fn should_reject_non_numeric_latitude() {
        let table = table_fixture(
            &["date", "time", "mag", "lat", "lon"],
            &[&["01/06/2022", "133000", "1", "north", "3"]],
        );
        let row = table.rows().next().unwrap();

        assert!(matches!(
            StationRecord::from_row(&row, &columns(None)),
            Err(Error::InvalidValue { .. })
        ));
    }
}
