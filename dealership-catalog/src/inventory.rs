use dealership_shared::Vehicle;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::search::VehicleQuery;

/// A dealership and the vehicles currently on its lot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealership {
    pub name: String,
    pub address: String,
    pub phone: String,
    inventory: Vec<Vehicle>,
}

impl Dealership {
    pub fn new(name: impl Into<String>, address: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            inventory: Vec::new(),
        }
    }

    /// Add a vehicle to the lot. VINs are unique.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), InventoryError> {
        if self.vehicle_by_vin(vehicle.vin).is_some() {
            return Err(InventoryError::DuplicateVin(vehicle.vin));
        }

        debug!("Adding vehicle {} to {}", vehicle.vin, self.name);
        self.inventory.push(vehicle);
        Ok(())
    }

    /// Take a vehicle off the lot (sold, leased or scrapped)
    pub fn remove_vehicle(&mut self, vin: u64) -> Result<Vehicle, InventoryError> {
        let index = self.inventory.iter()
            .position(|v| v.vin == vin)
            .ok_or(InventoryError::NotFound(vin))?;

        debug!("Removing vehicle {} from {}", vin, self.name);
        Ok(self.inventory.remove(index))
    }

    pub fn vehicle_by_vin(&self, vin: u64) -> Option<&Vehicle> {
        self.inventory.iter().find(|v| v.vin == vin)
    }

    /// Vehicles in the order they were added
    pub fn all_vehicles(&self) -> &[Vehicle] {
        &self.inventory
    }

    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    pub fn vehicles_by_price(&self, min: f64, max: f64) -> Vec<&Vehicle> {
        self.search(&VehicleQuery { min_price: Some(min), max_price: Some(max), ..Default::default() })
    }

    pub fn vehicles_by_make_model(&self, make: &str, model: &str) -> Vec<&Vehicle> {
        self.search(&VehicleQuery {
            make: Some(make.to_string()),
            model: Some(model.to_string()),
            ..Default::default()
        })
    }

    pub fn vehicles_by_year(&self, min: i32, max: i32) -> Vec<&Vehicle> {
        self.search(&VehicleQuery { min_year: Some(min), max_year: Some(max), ..Default::default() })
    }

    pub fn vehicles_by_color(&self, color: &str) -> Vec<&Vehicle> {
        self.search(&VehicleQuery { color: Some(color.to_string()), ..Default::default() })
    }

    pub fn vehicles_by_mileage(&self, min: u32, max: u32) -> Vec<&Vehicle> {
        self.search(&VehicleQuery { min_mileage: Some(min), max_mileage: Some(max), ..Default::default() })
    }

    pub fn vehicles_by_type(&self, vehicle_type: &str) -> Vec<&Vehicle> {
        self.search(&VehicleQuery { vehicle_type: Some(vehicle_type.to_string()), ..Default::default() })
    }

    /// All vehicles matching every filter set on `query`
    pub fn search(&self, query: &VehicleQuery) -> Vec<&Vehicle> {
        self.inventory.iter().filter(|v| query.matches(v)).collect()
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InventoryError {
    #[error("Vehicle not found: {0}")]
    NotFound(u64),

    #[error("Vehicle already in inventory: {0}")]
    DuplicateVin(u64),
}
