//! Pipe-delimited contract records.
//!
//! ```text
//! SALE|date|name|email|<vehicle>|tax|recording fee|processing fee|total|YES/NO|monthly payment
//! LEASE|date|name|email|<vehicle>|ending value|lease fee|total|monthly payment
//! ```
//!
//! `<vehicle>` is the eight-column vehicle record. Derived columns are written
//! for readers of the file; loading recomputes them from the vehicle price.

use std::fmt;

use dealership_shared::{format_amount, Vehicle, VehicleParseError, FIELD_SEPARATOR};

use crate::models::{Contract, ContractKind, ContractTerms};

const SALE_TAG: &str = "SALE";
const LEASE_TAG: &str = "LEASE";

/// Shared columns before the vehicle: tag, date, name, email
const HEADER_FIELDS: usize = 4;
const SALE_FIELDS: usize = HEADER_FIELDS + Vehicle::FIELD_COUNT + 6;
const LEASE_FIELDS: usize = HEADER_FIELDS + Vehicle::FIELD_COUNT + 4;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecordError {
    #[error("Unknown contract type: {0:?}")]
    UnknownKind(String),

    #[error("{kind} record needs {expected} fields, found {found}")]
    FieldCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid vehicle columns: {0}")]
    Vehicle(#[from] VehicleParseError),

    #[error("Invalid financed flag: {0:?}")]
    FinancedFlag(String),

    #[error("Invalid amount in column {column}: {value:?}")]
    Amount { column: usize, value: String },
}

impl Contract {
    /// Renders the contract as one line of the contracts file
    pub fn to_record(&self) -> String {
        let mut fields = vec![
            self.kind.tag().to_string(),
            self.date.clone(),
            self.customer_name.clone(),
            self.customer_email.expose().clone(),
            self.vehicle.to_record(),
        ];

        let price = self.vehicle.price;
        match &self.kind {
            ContractKind::Sale(sale) => {
                fields.push(format_amount(sale.sales_tax_amount(price)));
                fields.push(format_amount(sale.recording_fee()));
                fields.push(format_amount(sale.processing_fee(price)));
                fields.push(format_amount(sale.total_price(price)));
                fields.push(if sale.financed { "YES" } else { "NO" }.to_string());
                fields.push(format_amount(sale.monthly_payment(price)));
            }
            ContractKind::Lease(lease) => {
                fields.push(format_amount(lease.expected_ending_value(price)));
                fields.push(format_amount(lease.lease_fee(price)));
                fields.push(format_amount(lease.total_price(price)));
                fields.push(format_amount(lease.monthly_payment(price)));
            }
        }

        fields.join(FIELD_SEPARATOR.to_string().as_str())
    }

    /// Parses one line of the contracts file, pricing it under `terms`.
    pub fn from_record(line: &str, terms: &ContractTerms) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(FIELD_SEPARATOR).collect();

        let (kind_tag, expected) = match fields[0] {
            SALE_TAG => (SALE_TAG, SALE_FIELDS),
            LEASE_TAG => (LEASE_TAG, LEASE_FIELDS),
            other => return Err(RecordError::UnknownKind(other.to_string())),
        };
        if fields.len() != expected {
            return Err(RecordError::FieldCount { kind: kind_tag, expected, found: fields.len() });
        }

        let vehicle_end = HEADER_FIELDS + Vehicle::FIELD_COUNT;
        let vehicle = Vehicle::from_fields(&fields[HEADER_FIELDS..vehicle_end])?;
        let derived = &fields[vehicle_end..];

        let kind = if kind_tag == SALE_TAG {
            let flag_column = 4;
            check_amounts(derived, vehicle_end, &[flag_column])?;
            let financed = match derived[flag_column] {
                "YES" => true,
                "NO" => false,
                other => return Err(RecordError::FinancedFlag(other.to_string())),
            };
            terms.sale(financed)
        } else {
            check_amounts(derived, vehicle_end, &[])?;
            terms.lease()
        };

        Ok(Contract::new(fields[1], fields[2], fields[3], vehicle, kind))
    }
}

/// Stored amounts are not trusted but must at least be numbers.
fn check_amounts(derived: &[&str], offset: usize, skip: &[usize]) -> Result<(), RecordError> {
    for (i, value) in derived.iter().enumerate() {
        if skip.contains(&i) {
            continue;
        }
        if value.trim().parse::<f64>().is_err() {
            return Err(RecordError::Amount { column: offset + i, value: value.to_string() });
        }
    }
    Ok(())
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_record())
    }
}
