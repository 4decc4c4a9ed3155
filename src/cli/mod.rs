//! Command line interface.

pub mod command;

use std::{path::PathBuf, time::Duration};

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    export::Format,
    reading::{BaseColumns, StationColumns},
    reference::Model,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Remove diurnal variation from field station readings
    Correct(CorrectArgs),
    /// List the columns of a table
    Columns {
        /// Table to inspect
        file: PathBuf,
        /// Field delimiter
        #[arg(long, default_value_t = ',')]
        delimiter: char,
    },
}

#[derive(Args, Debug)]
pub struct CorrectArgs {
    /// Field stations table
    #[arg(long)]
    pub stations: PathBuf,
    /// Base stations table
    #[arg(long)]
    pub base: PathBuf,

    #[command(flatten)]
    pub station_columns: StationColumnArgs,
    #[command(flatten)]
    pub base_columns: BaseColumnArgs,

    /// Reference model used for total intensities
    #[arg(long, value_enum, default_value_t = Model::Igrf)]
    pub model: Model,
    /// Elevation in meters used when stations have no elevation column
    #[arg(long, default_value_t = 0.0)]
    pub elevation: f64,
    /// Calculator API key; reference intensities are skipped without one
    #[arg(long, env = "MAGCORR_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Field delimiter of both input tables
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
    /// Output file format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,
    /// Output directory, defaults to the home directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct StationColumnArgs {
    /// Station date column
    #[arg(long, default_value = "date")]
    pub sta_date: String,
    /// Station magnetic field column
    #[arg(long, default_value = "magfield")]
    pub sta_magfield: String,
    /// Station latitude column, geographic degrees
    #[arg(long, default_value = "latitude")]
    pub sta_latitude: String,
    /// Station longitude column, geographic degrees
    #[arg(long, default_value = "longitude")]
    pub sta_longitude: String,
    /// Station time column
    #[arg(long, default_value = "time")]
    pub sta_time: String,
    /// Station elevation column in meters
    #[arg(long)]
    pub sta_elevation: Option<String>,
}

#[derive(Args, Debug)]
pub struct BaseColumnArgs {
    /// Base station date column
    #[arg(long, default_value = "date")]
    pub base_date: String,
    /// Base station magnetic field column
    #[arg(long, default_value = "magfield")]
    pub base_magfield: String,
    /// Base station time column
    #[arg(long, default_value = "time")]
    pub base_time: String,
}

impl CorrectArgs {
    pub fn station_columns(&self) -> StationColumns {
        let c = &self.station_columns;
        StationColumns {
            date: c.sta_date.clone(),
            magfield: c.sta_magfield.clone(),
            latitude: c.sta_latitude.clone(),
            longitude: c.sta_longitude.clone(),
            time: c.sta_time.clone(),
            elevation: c.sta_elevation.clone(),
            default_elevation: self.elevation,
        }
    }

    pub fn base_columns(&self) -> BaseColumns {
        let c = &self.base_columns;
        BaseColumns {
            date: c.base_date.clone(),
            magfield: c.base_magfield.clone(),
            time: c.base_time.clone(),
        }
    }
}

/// Converts a delimiter argument to the single byte the csv reader expects.
pub fn delimiter_byte(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or_else(|| anyhow!("Delimiter `{}` must be a single ASCII character", delimiter))
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    ProgressBar::new(size).with_message(message).with_style(
        ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    )
}

// -- Tests -------------------------------------------------------------------
