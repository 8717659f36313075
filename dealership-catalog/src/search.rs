use dealership_shared::Vehicle;
use serde::{Deserialize, Serialize};

/// Inventory filter. Unset fields match everything; ranges are inclusive and
/// text matches ignore case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleQuery {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub color: Option<String>,
    pub min_mileage: Option<u32>,
    pub max_mileage: Option<u32>,
    pub vehicle_type: Option<String>,
}

impl VehicleQuery {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        in_range(vehicle.price, self.min_price, self.max_price)
            && in_range(vehicle.year, self.min_year, self.max_year)
            && in_range(vehicle.odometer, self.min_mileage, self.max_mileage)
            && text_matches(&vehicle.make, self.make.as_deref())
            && text_matches(&vehicle.model, self.model.as_deref())
            && text_matches(&vehicle.color, self.color.as_deref())
            && text_matches(&vehicle.vehicle_type, self.vehicle_type.as_deref())
    }
}

fn in_range<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}

fn text_matches(value: &str, wanted: Option<&str>) -> bool {
    wanted.map_or(true, |wanted| value.eq_ignore_ascii_case(wanted.trim()))
}
