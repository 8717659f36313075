pub mod models;
pub mod pii;
pub mod format;

pub use models::vehicle::{Vehicle, VehicleParseError};
pub use pii::Masked;
pub use format::format_amount;

/// Field separator shared by every flat-file record.
pub const FIELD_SEPARATOR: char = '|';
