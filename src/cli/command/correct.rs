//! Runs the full correction: load, validate, match, enrich and export.

use std::path::Path;

use anyhow::Result;

use crate::{
    cli::{create_progress_bar, create_spinner, delimiter_byte, CorrectArgs},
    deserialise::deserialise,
    diurnal::{self, EnrichedRecord},
    error::{Dataset, Error},
    export::{save_csv, save_parquet, Format},
    reading::{BaseRecord, StationRecord},
    reference::{enrich, NoaaCalculator, Pacing, ReferenceModel},
    table::{require_columns, Table},
};

use super::make_output_path;

pub async fn correct(args: &CorrectArgs) -> Result<String> {
    let output = make_output_path(args.output_dir.as_deref(), args.format)?;

    let calculator = if args.api_key.is_empty() {
        None
    } else {
        Some(NoaaCalculator::new(&args.api_key))
    };

    run(args, calculator.as_ref(), &output).await?;

    Ok(output.to_string_lossy().to_string())
}

/// Runs the pipeline with `source` as the reference model, if any, and
/// writes the result to `output`.
pub async fn run<M: ReferenceModel>(
    args: &CorrectArgs,
    source: Option<&M>,
    output: &Path,
) -> Result<Vec<EnrichedRecord>> {
    ensure_inputs(args)?;
    let delimiter = delimiter_byte(args.delimiter)?;

    let bar = create_spinner("Loading tables...".to_string());
    let stations_table = Table::from_path(&args.stations, delimiter)?;
    let base_table = Table::from_path(&args.base, delimiter)?;
    bar.finish_with_message(format!(
        "Loaded {} field and {} base station rows",
        stations_table.len(),
        base_table.len()
    ));

    let station_columns = args.station_columns();
    let base_columns = args.base_columns();
    require_columns(&stations_table, &station_columns.names(), Dataset::Stations)?;
    require_columns(&base_table, &base_columns.names(), Dataset::Base)?;
    info!("All columns exist");

    for (dataset, table) in [(Dataset::Stations, &stations_table), (Dataset::Base, &base_table)] {
        if table.is_empty() {
            warn!("The {} file has no rows", dataset);
        }
    }

    let stations: Vec<StationRecord> = deserialise(&stations_table, &station_columns, Dataset::Stations)?;
    let base: Vec<BaseRecord> = deserialise(&base_table, &base_columns, Dataset::Base)?;

    let pb = create_progress_bar(
        stations.len() as u64,
        "Finding closest matches in time between field stations and base stations".to_string(),
    );
    let mut records = diurnal::correct(stations, &base, &pb);
    pb.finish_with_message("Diurnal variation processing completed");

    match source {
        Some(source) => {
            let pb = create_progress_bar(records.len() as u64, format!("Requesting {} values", args.model));
            match enrich(&mut records, source, args.model, Pacing::default(), &pb).await {
                Ok(()) => pb.finish_with_message(format!("{} processing completed", args.model)),
                Err(e) => {
                    pb.abandon_with_message(format!("{} processing failed", args.model));
                    error!("{}", e);
                    warn!("Saving diurnal corrections without {} intensities", args.model);
                }
            }
        }
        None => info!("No API key given, skipping {} intensities", args.model),
    }

    let bar = create_spinner(format!("Saving {}...", output.display()));
    match args.format {
        Format::Csv => save_csv(&records, output)?,
        Format::Parquet => save_parquet(&records, output)?,
    }
    bar.finish_with_message("Results saved");

    Ok(records)
}

// Both tables must be present before anything is read.
fn ensure_inputs(args: &CorrectArgs) -> Result<(), Error> {
    for (dataset, path) in [(Dataset::Stations, &args.stations), (Dataset::Base, &args.base)] {
        if !path.is_file() {
            return Err(Error::MissingInput {
                dataset,
                path: path.clone(),
            });
        }
    }

    Ok(())
}

// -- Tests -------------------------------------------------------------------
