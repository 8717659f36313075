use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::format::format_amount;
use crate::FIELD_SEPARATOR;

/// A vehicle on the lot.
///
/// Contracts hold their own copy, so a vehicle referenced by a contract can
/// never change underneath it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vin: u64,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub vehicle_type: String,
    pub color: String,
    pub odometer: u32,
    pub price: f64,
}

/// Vehicle record parsing errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum VehicleParseError {
    #[error("Expected at least {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("Invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

impl Vehicle {
    /// Number of columns a vehicle occupies in a record.
    pub const FIELD_COUNT: usize = 8;

    /// `vin|year|make|model|type|color|odometer|price`
    pub fn to_record(&self) -> String {
        let sep = FIELD_SEPARATOR;
        format!(
            "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.vin,
            self.year,
            self.make,
            self.model,
            self.vehicle_type,
            self.color,
            self.odometer,
            format_amount(self.price),
        )
    }

    /// Builds a vehicle from already split columns.
    ///
    /// Only the first [`Vehicle::FIELD_COUNT`] columns are read; anything after
    /// them belongs to the caller.
    pub fn from_fields(fields: &[&str]) -> Result<Self, VehicleParseError> {
        if fields.len() < Self::FIELD_COUNT {
            return Err(VehicleParseError::FieldCount {
                expected: Self::FIELD_COUNT,
                found: fields.len(),
            });
        }

        Ok(Self {
            vin: parse_field("vin", fields[0])?,
            year: parse_field("year", fields[1])?,
            make: fields[2].to_string(),
            model: fields[3].to_string(),
            vehicle_type: fields[4].to_string(),
            color: fields[5].to_string(),
            odometer: parse_field("odometer", fields[6])?,
            price: parse_field("price", fields[7])?,
        })
    }
}

impl FromStr for Vehicle {
    type Err = VehicleParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        Self::from_fields(&fields)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} ({}, {} mi) ${:.2}",
            self.year, self.color, self.make, self.model, self.vehicle_type, self.odometer, self.price
        )
    }
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, VehicleParseError> {
    value.trim().parse().map_err(|_| VehicleParseError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
