use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// A numeric spreadsheet cell after normalization.
///
/// Cells that could not be parsed stay in the table as `Unknown` instead of
/// failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NumericCell {
    Known(f64),
    #[default]
    Unknown,
}

impl NumericCell {
    pub fn value(&self) -> Option<f64> {
        match self {
            NumericCell::Known(value) => Some(*value),
            NumericCell::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, NumericCell::Known(_))
    }
}

impl From<Option<f64>> for NumericCell {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => NumericCell::Known(v),
            _ => NumericCell::Unknown,
        }
    }
}

impl From<NumericCell> for Option<f64> {
    fn from(cell: NumericCell) -> Self {
        cell.value()
    }
}

/// Target serving weight in grams, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, ToSchema)]
#[serde(transparent)]
pub struct Weight(u32);

impl Weight {
    pub const MIN: u32 = 1;

    /// Parses user input such as `"200"` or `" +250 "`.
    ///
    /// Decimals, negatives, zero and empty input are rejected.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidWeight(input.to_string()));
        }

        let grams = digits
            .parse::<u32>()
            .map_err(|_| CoreError::InvalidWeight(input.to_string()))?;

        Self::try_from(u64::from(grams)).map_err(|_| CoreError::InvalidWeight(input.to_string()))
    }

    pub fn grams(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u64> for Weight {
    type Error = CoreError;

    fn try_from(grams: u64) -> Result<Self, Self::Error> {
        match u32::try_from(grams) {
            Ok(g) if g >= Self::MIN => Ok(Weight(g)),
            _ => Err(CoreError::InvalidWeight(grams.to_string())),
        }
    }
}

impl FromStr for Weight {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weight::parse(s)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How an ingredient whose percentage is `Unknown` takes part in scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPercentagePolicy {
    /// Keep the ingredient with an unknown mass, listed after known masses.
    #[default]
    Retain,
    /// Leave the ingredient out of the result.
    Exclude,
    /// Scale the ingredient as if its percentage were 0.
    TreatAsZero,
    /// Fail the whole query.
    Reject,
}

impl FromStr for UnknownPercentagePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(Self::Retain),
            "exclude" => Ok(Self::Exclude),
            "treat_as_zero" | "zero" => Ok(Self::TreatAsZero),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown policy '{other}', expected one of: retain, exclude, treat_as_zero, reject"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScaleDishInput {
    pub dish_name: String,
    pub weight: Weight,
}
