//! Diurnal correction of field-station readings against base-station readings.
//!
//! Base readings are grouped by their date value. Each station reading is
//! matched with the base reading of the same date closest in (normalised)
//! time, and corrected by the deviation of that base reading from the mean
//! of the whole date group:
//!
//! ```text
//! diurnal_var      = base_magfield - base_magfield_mean
//! diurnal_var_corr = sta_magfield  - diurnal_var
//! ```
//!
//! Station readings whose date has no base readings are passed through
//! without a correction.

use std::collections::HashMap;

use indicatif::ProgressBar;

use crate::reading::{BaseRecord, StationRecord};

/// All base readings sharing one date, in their original order.
#[derive(Debug)]
pub struct DateGroup<'a> {
    pub records: Vec<&'a BaseRecord>,
    pub mean: f64,
}

impl<'a> DateGroup<'a> {
    /// The member closest in time to `time`.
    ///
    /// Distance is `|base.time - time|` on `HHMMSS` integers. On a tie the
    /// member that comes first in the base table wins.
    pub fn closest(&self, time: u32) -> Option<&'a BaseRecord> {
        let mut best: Option<(&'a BaseRecord, u32)> = None;

        for &record in &self.records {
            let distance = record.time.abs_diff(time);
            match best {
                Some((_, d)) if d <= distance => {}
                _ => best = Some((record, distance)),
            }
        }

        best.map(|(record, _)| record)
    }
}

/// Values derived from the matched base reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    pub base_date: String,
    pub base_time: u32,
    pub base_magfield: f64,
    /// Station time minus base time, signed.
    pub diff_time: i64,
    pub base_magfield_mean: f64,
    pub diurnal_var: f64,
    pub diurnal_var_corr: f64,
}

/// A station reading with its correction, if any, and reference intensity.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub station: StationRecord,
    pub correction: Option<Correction>,
    pub igrf_intensity: Option<f64>,
}

/// Groups base readings by date and computes each group's mean intensity.
pub fn group_by_date(base: &[BaseRecord]) -> HashMap<&str, DateGroup<'_>> {
    let mut members: HashMap<&str, Vec<&BaseRecord>> = HashMap::new();
    for record in base {
        members.entry(record.date.as_str()).or_default().push(record);
    }

    members
        .into_iter()
        .map(|(date, records)| {
            let mean = records.iter().map(|r| r.magfield).sum::<f64>() / records.len() as f64;
            (date, DateGroup { records, mean })
        })
        .collect()
}

/// Computes the correction for a single station reading.
pub fn correct_one(station: &StationRecord, groups: &HashMap<&str, DateGroup>) -> Option<Correction> {
    let group = groups.get(station.date.as_str())?;
    let base = group.closest(station.time)?;

    let diurnal_var = base.magfield - group.mean;

    Some(Correction {
        base_date: base.date.clone(),
        base_time: base.time,
        base_magfield: base.magfield,
        diff_time: i64::from(station.time) - i64::from(base.time),
        base_magfield_mean: group.mean,
        diurnal_var,
        diurnal_var_corr: station.magfield - diurnal_var,
    })
}

/// Corrects every station reading, advancing `progress` once per reading.
pub fn correct(
    stations: Vec<StationRecord>,
    base: &[BaseRecord],
    progress: &ProgressBar,
) -> Vec<EnrichedRecord> {
    let groups = group_by_date(base);
    let mut unmatched = 0;

    let records = stations
        .into_iter()
        .map(|station| {
            let correction = correct_one(&station, &groups);
            if correction.is_none() {
                debug!("No base readings on {} for station at {}", station.date, station.time);
                unmatched += 1;
            }
            progress.inc(1);

            EnrichedRecord {
                station,
                correction,
                igrf_intensity: None,
            }
        })
        .collect();

    if unmatched > 0 {
        warn!("{} station readings have no base readings on the same date", unmatched);
    }

    records
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn base(date: &str, time: u32, magfield: f64) -> BaseRecord {
        BaseRecord {
            date: date.to_string(),
            time,
            magfield,
        }
    }

    pub(crate) fn station(date: &str, time: u32, magfield: f64) -> StationRecord {
        StationRecord {
            date: date.to_string(),
            time,
            magfield,
            latitude: 19.5,
            longitude: -99.1,
            elevation: 0.0,
        }
    }

    #[test]
    fn should_match_closest_base_reading() {
        let base = vec![base("D1", 91500, 100.0), base("D1", 93000, 200.0)];
        let groups = group_by_date(&base);
        let c = correct_one(&station("D1", 92000, 41000.0), &groups).unwrap();

        assert_eq!(c.base_time, 91500);
        assert_eq!(c.base_magfield, 100.0);
        assert_eq!(c.base_magfield_mean, 150.0);
        assert_eq!(c.diurnal_var, -50.0);
        assert_eq!(c.diurnal_var_corr, 41050.0);
        assert_eq!(c.diff_time, 500);
    }

    #[test]
    fn should_keep_negative_time_difference() {
        let base = vec![base("D1", 100000, 10.0)];
        let groups = group_by_date(&base);
        let c = correct_one(&station("D1", 95959, 0.0), &groups).unwrap();

        assert_eq!(c.diff_time, -4041);
    }

    #[test]
    fn should_prefer_first_reading_on_tie() {
        let base = vec![
            base("D1", 90000, 1.0),
            base("D1", 110000, 2.0),
            base("D1", 90000, 3.0),
        ];
        let groups = group_by_date(&base);
        let c = correct_one(&station("D1", 100000, 0.0), &groups).unwrap();

        assert_eq!(c.base_magfield, 1.0);
    }

    #[test]
    fn should_not_match_across_dates() {
        let base = vec![base("D1", 92000, 100.0), base("D2", 92000, 900.0)];
        let groups = group_by_date(&base);
        let c = correct_one(&station("D2", 80000, 0.0), &groups).unwrap();

        assert_eq!(c.base_date, "D2");
        assert_eq!(c.base_magfield_mean, 900.0);
    }

    #[test]
    fn should_average_whole_date_group() {
        let base = vec![
            base("D1", 80000, 10.0),
            base("D1", 90000, 20.0),
            base("D1", 100000, 60.0),
            base("D2", 90000, 1000.0),
        ];
        let groups = group_by_date(&base);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["D1"].mean, 30.0);
        assert_eq!(groups["D1"].records.len(), 3);
        assert_eq!(groups["D2"].mean, 1000.0);
    }

    #[test]
    fn should_leave_unmatched_records_uncorrected() {
        let base = vec![base("D1", 90000, 10.0)];
        let records = correct(
            vec![station("D9", 90000, 5.0)],
            &base,
            &ProgressBar::hidden(),
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].correction, None);
        assert_eq!(records[0].igrf_intensity, None);
    }

    #[test]
    fn should_correct_every_record_in_order() {
        let base = vec![
            base("01/01/2024", 80000, 100.0),
            base("01/01/2024", 120000, 120.0),
            base("02/01/2024", 80000, 90.0),
            base("02/01/2024", 120000, 110.0),
        ];
        let stations = vec![
            station("01/01/2024", 81500, 40000.0),
            station("01/01/2024", 115000, 40010.0),
            station("02/01/2024", 130000, 40020.0),
        ];
        let progress = ProgressBar::hidden();
        let records = correct(stations, &base, &progress);

        assert_eq!(progress.position(), 3);
        let corrected: Vec<f64> = records
            .iter()
            .map(|r| r.correction.as_ref().unwrap().diurnal_var_corr)
            .collect();
        assert_eq!(corrected, vec![40010.0, 40000.0, 40010.0]);
    }

    #[test]
    fn should_handle_empty_base() {
        let groups = group_by_date(&[]);
        assert!(correct_one(&station("D1", 0, 0.0), &groups).is_none());
    }
}
