//! Save the corrected records to a parquet file.

use std::{fs::File, path::Path, sync::Arc};

use anyhow::Result;
use arrow::{
    array::{ArrayRef, Float64Array, Int64Array, StringArray, UInt32Array},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use parquet::{arrow::ArrowWriter, file::properties::WriterProperties};

use crate::diurnal::EnrichedRecord;

use super::OutputRow;

pub fn save_parquet(records: &[EnrichedRecord], file_path: &Path) -> Result<()> {
    let file = File::create(file_path)?;

    let schema = Arc::new(Schema::new(vec![
        Field::new("sta_date", DataType::Utf8, false),
        Field::new("sta_time", DataType::UInt32, false),
        Field::new("sta_magfield", DataType::Float64, false),
        Field::new("sta_latitude", DataType::Float64, false),
        Field::new("sta_longitude", DataType::Float64, false),
        Field::new("sta_elevation", DataType::Float64, false),
        Field::new("base_date", DataType::Utf8, true),
        Field::new("base_time", DataType::UInt32, true),
        Field::new("base_magfield", DataType::Float64, true),
        Field::new("diff_time", DataType::Int64, true),
        Field::new("base_magfield_mean", DataType::Float64, true),
        Field::new("diurnal_var", DataType::Float64, true),
        Field::new("diurnal_var_corr", DataType::Float64, true),
        Field::new("igrf_intensity", DataType::Float64, true),
    ]));

    let props = WriterProperties::builder()
        .set_compression(parquet::basic::Compression::SNAPPY)
        .build();

    let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;

    let rows: Vec<OutputRow> = records.iter().map(OutputRow::from).collect();

    let floats = |f: fn(&OutputRow) -> Option<f64>| -> ArrayRef {
        Arc::new(rows.iter().map(f).collect::<Float64Array>())
    };

    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.sta_date.as_str()))),
        Arc::new(UInt32Array::from_iter_values(rows.iter().map(|r| r.sta_time))),
        floats(|r| Some(r.sta_magfield)),
        floats(|r| Some(r.sta_latitude)),
        floats(|r| Some(r.sta_longitude)),
        floats(|r| Some(r.sta_elevation)),
        Arc::new(rows.iter().map(|r| r.base_date.as_deref()).collect::<StringArray>()),
        Arc::new(rows.iter().map(|r| r.base_time).collect::<UInt32Array>()),
        floats(|r| r.base_magfield),
        Arc::new(rows.iter().map(|r| r.diff_time).collect::<Int64Array>()),
        floats(|r| r.base_magfield_mean),
        floats(|r| r.diurnal_var),
        floats(|r| r.diurnal_var_corr),
        floats(|r| r.igrf_intensity),
    ];

    let batch = RecordBatch::try_new(schema, columns)?;

    writer.write(&batch)?;

    writer.close()?;

    Ok(())
}

// -- Tests -------------------------------------------------------------------
