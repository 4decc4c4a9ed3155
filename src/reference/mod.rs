//! Reference geomagnetic model intensities (IGRF / WMM).

pub mod noaa;

use std::{fmt, future::Future, time::Duration};

use clap::ValueEnum;
use indicatif::ProgressBar;

use crate::{diurnal::EnrichedRecord, error::Error};

pub use noaa::NoaaCalculator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Model {
    /// International Geomagnetic Reference Field
    #[default]
    Igrf,
    /// World Magnetic Model
    Wmm,
}

impl Model {
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Igrf => "IGRF",
            Model::Wmm => "WMM",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `DD/MM/YYYY` survey date split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl SurveyDate {
    pub fn parse(date: &str) -> Option<Self> {
        let parts: Vec<&str> = date.trim().split('/').collect();
        match parts.as_slice() {
            [day, month, year] => Some(SurveyDate {
                day: day.trim().parse().ok()?,
                month: month.trim().parse().ok()?,
                year: year.trim().parse().ok()?,
            }),
            _ => None,
        }
    }
}

/// A single-point, single-day model query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelQuery {
    pub date: SurveyDate,
    pub latitude: f64,
    pub longitude: f64,
    pub model: Model,
}

/// Source of total field intensities, in nanotesla.
pub trait ReferenceModel {
    fn total_intensity(&self, query: &ModelQuery) -> impl Future<Output = Result<f64, String>> + Send;
}

/// Pause `delay` after every `every` requests.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub every: usize,
    pub delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing {
            every: 10,
            delay: Duration::from_secs(1),
        }
    }
}

/// Queries `source` for each record in turn and attaches the total intensity.
///
/// Intensities are only written once every query has succeeded; on the first
/// failure the records are left as they were.
pub async fn enrich<M: ReferenceModel>(
    records: &mut [EnrichedRecord],
    source: &M,
    model: Model,
    pacing: Pacing,
    progress: &ProgressBar,
) -> Result<(), Error> {
    let mut intensities = Vec::with_capacity(records.len());

    for (i, record) in records.iter().enumerate() {
        let request = i + 1;
        let date = SurveyDate::parse(&record.station.date).ok_or_else(|| Error::Enrichment {
            request,
            reason: format!("date `{}` is not DD/MM/YYYY", record.station.date),
        })?;

        let query = ModelQuery {
            date,
            latitude: record.station.latitude,
            longitude: record.station.longitude,
            model,
        };
        let intensity = source
            .total_intensity(&query)
            .await
            .map_err(|reason| Error::Enrichment { request, reason })?;

        intensities.push(intensity);
        progress.inc(1);

        if pacing.every > 0 && request % pacing.every == 0 && request < records.len() {
            tokio::time::sleep(pacing.delay).await;
        }
    }

    for (record, intensity) in records.iter_mut().zip(intensities) {
        record.igrf_intensity = Some(intensity);
    }

    info!("Attached {} intensities to {} records", model, records.len());

    Ok(())
}

// -- Tests -------------------------------------------------------------------
