//! Time Series Module
//! Named numeric sequence with an optional index, convertible to and from Polars.

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Index has {index} entries but series has {values} values")]
    IndexLengthMismatch { index: usize, values: usize },
    #[error("Series '{name}' has non-numeric dtype {dtype}")]
    NonNumeric { name: String, dtype: String },
}

/// Ordered sequence of values plotted against its index.
///
/// Without an explicit index the values are positioned at `0, 1, 2, ...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    name: String,
    index: Option<Vec<f64>>,
    values: Vec<f64>,
}

impl TimeSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            index: None,
            values,
        }
    }

    /// Attach explicit x positions (e.g. timestamps) to the values.
    pub fn with_index(mut self, index: Vec<f64>) -> Result<Self, SeriesError> {
        if index.len() != self.values.len() {
            return Err(SeriesError::IndexLengthMismatch {
                index: index.len(),
                values: self.values.len(),
            });
        }
        self.index = Some(index);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// X position of the i-th value.
    pub fn index_at(&self, i: usize) -> f64 {
        match &self.index {
            Some(index) => index[i],
            None => i as f64,
        }
    }

    /// (x, y) pairs in index order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (self.index_at(i), v))
    }

    /// Convert to a Float64 Polars series carrying the same name.
    pub fn to_series(&self) -> Series {
        Series::new(self.name.as_str().into(), self.values.clone())
    }

    /// Two-column frame: ["index", name]
    pub fn to_frame(&self) -> Result<DataFrame, SeriesError> {
        let index: Vec<f64> = (0..self.len()).map(|i| self.index_at(i)).collect();
        let df = DataFrame::new(vec![
            Column::new("index".into(), index),
            Column::new(self.name.as_str().into(), self.values.clone()),
        ])?;
        Ok(df)
    }
}

impl TryFrom<&Series> for TimeSeries {
    type Error = SeriesError;

    /// Numeric dtypes are cast to f64; nulls become NaN.
    fn try_from(series: &Series) -> Result<Self, Self::Error> {
        let is_numeric = matches!(
            series.dtype(),
            DataType::Float32
                | DataType::Float64
                | DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
        );
        if !is_numeric {
            return Err(SeriesError::NonNumeric {
                name: series.name().to_string(),
                dtype: series.dtype().to_string(),
            });
        }

        let values_f64 = series.cast(&DataType::Float64)?;
        let values: Vec<f64> = values_f64
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect();

        Ok(Self::new(series.name().to_string(), values))
    }
}
