pub mod inventory;
pub mod search;

pub use inventory::{Dealership, InventoryError};
pub use search::VehicleQuery;
