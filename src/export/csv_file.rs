use std::path::Path;

use csv::{Reader, Writer};

use crate::{diurnal::EnrichedRecord, error::Error};

use super::OutputRow;

pub fn save_csv(records: &[EnrichedRecord], file_path: &Path) -> Result<(), Error> {
    let mut writer = Writer::from_path(file_path)?;

    for record in records {
        writer.serialize(OutputRow::from(record))?;
    }
    writer.flush()?;

    Ok(())
}

/// Reads back a file written by [`save_csv`].
pub fn read_csv(file_path: &Path) -> Result<Vec<OutputRow>, Error> {
    let mut reader = Reader::from_path(file_path)?;
    let rows = reader.deserialize().collect::<Result<Vec<OutputRow>, csv::Error>>()?;

    Ok(rows)
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::diurnal::{correct, tests::{base, station}};
    use indicatif::ProgressBar;

    #[test]
    fn should_preserve_values_through_file() {
        let base = vec![base("03/04/2021", 80000, 40001.3), base("03/04/2021", 90000, 40007.9)];
        let mut records = correct(
            vec![station("03/04/2021", 84500, 40100.17), station("04/04/2021", 84500, 40100.0)],
            &base,
            &ProgressBar::hidden(),
        );
        records[0].igrf_intensity = Some(40250.123);

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        save_csv(&records, &path).unwrap();
        let rows = read_csv(&path).unwrap();

        let expected: Vec<OutputRow> = records.iter().map(OutputRow::from).collect();
        assert_eq!(rows, expected);
        assert_eq!(rows[1].base_magfield, None);
        assert_eq!(rows[1].igrf_intensity, None);
    }

    #[test]
    fn should_write_header_in_column_order() {
        let records = vec![EnrichedRecord {
            station: station("03/04/2021", 84500, 1.0),
            correction: None,
            igrf_intensity: None,
        }];
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        save_csv(&records, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(
            header,
            "sta_date,sta_time,sta_magfield,sta_latitude,sta_longitude,sta_elevation,\
             base_date,base_time,base_magfield,diff_time,base_magfield_mean,\
             diurnal_var,diurnal_var_corr,igrf_intensity"
        );
        assert!(content.lines().nth(1).unwrap().ends_with(",,,,,,,,"));
    }
}
