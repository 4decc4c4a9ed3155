//! Writes corrected records to disk as CSV or _parquet_.

pub mod csv_file;
pub mod parquet_file;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::diurnal::EnrichedRecord;

pub use csv_file::{read_csv, save_csv};
pub use parquet_file::save_parquet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Csv,
    Parquet,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Parquet => "parquet",
        }
    }
}

/// One exported row. Absent values are written as empty cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    pub sta_date: String,
    pub sta_time: u32,
    pub sta_magfield: f64,
    pub sta_latitude: f64,
    pub sta_longitude: f64,
    pub sta_elevation: f64,
    pub base_date: Option<String>,
    pub base_time: Option<u32>,
    pub base_magfield: Option<f64>,
    pub diff_time: Option<i64>,
    pub base_magfield_mean: Option<f64>,
    pub diurnal_var: Option<f64>,
    pub diurnal_var_corr: Option<f64>,
    pub igrf_intensity: Option<f64>,
}

impl From<&EnrichedRecord> for OutputRow {
    fn from(record: &EnrichedRecord) -> Self {
        let s = &record.station;
        let c = record.correction.as_ref();

        OutputRow {
            sta_date: s.date.clone(),
            sta_time: s.time,
            sta_magfield: s.magfield,
            sta_latitude: s.latitude,
            sta_longitude: s.longitude,
            sta_elevation: s.elevation,
            base_date: c.map(|c| c.base_date.clone()),
            base_time: c.map(|c| c.base_time),
            base_magfield: c.map(|c| c.base_magfield),
            diff_time: c.map(|c| c.diff_time),
            base_magfield_mean: c.map(|c| c.base_magfield_mean),
            diurnal_var: c.map(|c| c.diurnal_var),
            diurnal_var_corr: c.map(|c| c.diurnal_var_corr),
            igrf_intensity: record.igrf_intensity,
        }
    }
}

// -- Tests -------------------------------------------------------------------
