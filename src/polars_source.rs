//! Census CSV loading through polars.
//!
//! Numeric columns are cast to `Float64` once, here, so nothing downstream
//! ever parses text. Cells that do not parse become `NaN`.

use crate::data_types::{Dataset, Field, Record};
use eyre::{Result, WrapErr};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Reads a census CSV file into a [`Dataset`].
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading census csv");

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .wrap_err_with(|| format!("failed to open {}", path.display()))?
        .finish()
        .wrap_err_with(|| format!("failed to parse {}", path.display()))?;

    let dataset = dataset_from_frame(&df)?;
    info!(path = %path.display(), records = dataset.len(), "census data loaded");
    Ok(dataset)
}

/// Converts an already-parsed frame into records.
pub fn dataset_from_frame(df: &DataFrame) -> Result<Dataset> {
    let abbr = text_column(df, "abbr")?;
    let state = text_column(df, "state")?;
    let poverty = numeric_column(df, Field::Poverty)?;
    let income = numeric_column(df, Field::Income)?;
    let age = numeric_column(df, Field::Age)?;
    let healthcare = numeric_column(df, Field::Healthcare)?;
    let obesity = numeric_column(df, Field::Obesity)?;
    let smokes = numeric_column(df, Field::Smokes)?;

    let records = (0..df.height())
        .map(|row| Record {
            abbr: abbr[row].clone(),
            state: state[row].clone(),
            poverty: poverty[row],
            income: income[row],
            age: age[row],
            healthcare: healthcare[row],
            obesity: obesity[row],
            smokes: smokes[row],
        })
        .collect();

    Ok(Dataset::new(records))
}

fn text_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let series = df
        .column(name)
        .wrap_err_with(|| format!("missing column `{name}`"))?
        .as_materialized_series()
        .cast(&DataType::String)
        .wrap_err_with(|| format!("column `{name}` is not text"))?;
    let values = series
        .str()
        .wrap_err_with(|| format!("column `{name}` is not text"))?
        .into_iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect();
    Ok(values)
}

fn numeric_column(df: &DataFrame, field: Field) -> Result<Vec<f64>> {
    let name = field.column();
    let series = df
        .column(name)
        .wrap_err_with(|| format!("missing column `{name}`"))?
        .as_materialized_series()
        .cast(&DataType::Float64)
        .wrap_err_with(|| format!("column `{name}` cannot be read as numbers"))?;
    let values = series
        .f64()
        .wrap_err_with(|| format!("column `{name}` cannot be read as numbers"))?
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect();
    Ok(values)
}
