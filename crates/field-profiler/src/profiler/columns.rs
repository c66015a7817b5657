//! Extraction of polars columns into typed rule handlers.

use chrono::NaiveDate;
use polars::prelude::*;

use super::type_inference::infer_coarse_type;
use crate::error::{Result, ResultExt};
use crate::rules::{BooleanColumn, ColumnAnalysis, DateColumn, NumericColumn, TextColumn};
use crate::types::{CoarseType, ColumnProfile, Finding};

/// Days from 0001-01-01 (CE day 1) to 1970-01-01, the epoch of polars dates.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// A column's values, typed by its inferred coarse type.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Boolean(BooleanColumn),
    Numeric(NumericColumn),
    Date(DateColumn),
    String(TextColumn),
}

impl ColumnData {
    /// Infer the coarse type of `series` and extract its values accordingly.
    pub fn from_series(series: &Series) -> Result<Self> {
        let data = match infer_coarse_type(series) {
            CoarseType::Boolean => ColumnData::Boolean(extract_boolean(series)?),
            CoarseType::Numeric => ColumnData::Numeric(extract_numeric(series)?),
            CoarseType::Date => ColumnData::Date(extract_date(series)?),
            CoarseType::String => ColumnData::String(extract_text(series)?),
        };
        Ok(data)
    }

    pub fn coarse_type(&self) -> CoarseType {
        match self {
            ColumnData::Boolean(_) => CoarseType::Boolean,
            ColumnData::Numeric(_) => CoarseType::Numeric,
            ColumnData::Date(_) => CoarseType::Date,
            ColumnData::String(_) => CoarseType::String,
        }
    }

    fn analysis(&self) -> &dyn ColumnAnalysis {
        match self {
            ColumnData::Boolean(col) => col,
            ColumnData::Numeric(col) => col,
            ColumnData::Date(col) => col,
            ColumnData::String(col) => col,
        }
    }

    pub fn profile(&self, name: &str) -> ColumnProfile {
        let analysis = self.analysis();
        ColumnProfile {
            name: name.to_string(),
            data_type: self.coarse_type(),
            row_count: analysis.len(),
            unique_values: analysis.unique_count(),
            missing_values: analysis.missing_count(),
            stats: analysis.statistics(),
        }
    }

    pub fn flag_outliers(&self, name: &str) -> Vec<Finding> {
        self.analysis().flag_outliers(name)
    }
}

fn extract_boolean(series: &Series) -> Result<BooleanColumn> {
    if series.dtype() == &DataType::Boolean {
        let values = series.bool().context(series.name().as_str())?;
        return Ok(BooleanColumn::from_bools(values));
    }

    let values = series.str().context(series.name().as_str())?;
    Ok(BooleanColumn::new(
        values.into_iter().map(|v| v.map(str::to_string)).collect(),
    ))
}

fn extract_numeric(series: &Series) -> Result<NumericColumn> {
    let float_series = series
        .cast(&DataType::Float64)
        .context(format!("Failed to read '{}' as numbers", series.name()))?;
    let values = float_series.f64()?;

    Ok(NumericColumn::new(
        values
            .into_iter()
            .map(|v| v.filter(|v| !v.is_nan()))
            .collect(),
    ))
}

fn extract_date(series: &Series) -> Result<DateColumn> {
    let date_series = series
        .cast(&DataType::Date)
        .context(format!("Failed to read '{}' as dates", series.name()))?;
    let day_series = date_series.cast(&DataType::Int32)?;
    let days = day_series.i32()?;

    Ok(DateColumn::new(
        days.into_iter()
            .map(|d| {
                d.and_then(|d| {
                    NaiveDate::from_num_days_from_ce_opt(d.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?)
                })
            })
            .collect(),
    ))
}

fn extract_text(series: &Series) -> Result<TextColumn> {
    let text_series = series
        .cast(&DataType::String)
        .context(format!("Failed to read '{}' as text", series.name()))?;
    let values = text_series.str()?;

    Ok(TextColumn::new(
        values.into_iter().map(|v| v.map(str::to_string)).collect(),
    ))
}
