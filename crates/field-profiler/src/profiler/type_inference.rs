//! Coarse type inference from the storage type chosen by the CSV layer.
//!
//! Text content is only inspected for boolean tokens. A numeric-looking text
//! column (zip codes mixed with `INVALID`, say) stays `string`, because the
//! statistics and rules picked downstream depend on that classification.

use polars::prelude::*;

use crate::types::CoarseType;
use crate::utils::{is_boolean_token, is_date_dtype, is_numeric_dtype};

/// Infer the coarse type of a column.
///
/// Precedence: boolean, numeric, date, string.
pub fn infer_coarse_type(series: &Series) -> CoarseType {
    let dtype = series.dtype();

    if dtype == &DataType::Boolean || is_boolean_text_column(series) {
        CoarseType::Boolean
    } else if is_numeric_dtype(dtype) {
        CoarseType::Numeric
    } else if is_date_dtype(dtype) {
        CoarseType::Date
    } else {
        CoarseType::String
    }
}

/// A text column where every non-missing value is a boolean token.
///
/// Columns with no values at all are not boolean.
fn is_boolean_text_column(series: &Series) -> bool {
    let Ok(values) = series.str() else {
        return false;
    };

    let mut seen_any = false;
    for value in values.into_iter().flatten() {
        if !is_boolean_token(value) {
            return false;
        }
        seen_any = true;
    }
    seen_any
}
