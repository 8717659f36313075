use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use dealership_catalog::VehicleQuery;
use dealership_shared::Vehicle;
use serde::Serialize;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;
use crate::validation::{require_amount, require_text};

#[derive(Debug, Serialize)]
pub struct DealershipResponse {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub vehicle_count: usize,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/dealership", get(get_dealership))
        .route("/v1/vehicles", get(search_vehicles).post(add_vehicle))
        .route("/v1/vehicles/{vin}", get(get_vehicle).delete(remove_vehicle))
}

/// GET /v1/dealership
async fn get_dealership(State(state): State<AppState>) -> Json<DealershipResponse> {
    let dealership = state.dealership.lock().await;
    Json(DealershipResponse {
        name: dealership.name.clone(),
        address: dealership.address.clone(),
        phone: dealership.phone.clone(),
        vehicle_count: dealership.len(),
    })
}

/// GET /v1/vehicles?make=Ford&max_price=5000
async fn search_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleQuery>,
) -> Json<Vec<Vehicle>> {
    let dealership = state.dealership.lock().await;
    Json(dealership.search(&query).into_iter().cloned().collect())
}

/// GET /v1/vehicles/{vin}
async fn get_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<u64>,
) -> Result<Json<Vehicle>, AppError> {
    let dealership = state.dealership.lock().await;
    dealership
        .vehicle_by_vin(vin)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Vehicle not found: {}", vin)))
}

/// POST /v1/vehicles
async fn add_vehicle(
    State(state): State<AppState>,
    Json(vehicle): Json<Vehicle>,
) -> Result<(StatusCode, Json<Vehicle>), AppError> {
    require_text("make", &vehicle.make)?;
    require_text("model", &vehicle.model)?;
    require_text("vehicle_type", &vehicle.vehicle_type)?;
    require_text("color", &vehicle.color)?;
    require_amount("price", vehicle.price)?;

    let mut dealership = state.dealership.lock().await;
    dealership.add_vehicle(vehicle.clone()).map_err(AppError::inventory)?;

    if let Err(e) = state.save_dealership(&dealership).await {
        // Keep memory in step with the file
        let _ = dealership.remove_vehicle(vehicle.vin);
        return Err(e);
    }

    info!("Vehicle {} added to inventory", vehicle.vin);
    Ok((StatusCode::CREATED, Json(vehicle)))
}

/// DELETE /v1/vehicles/{vin}
async fn remove_vehicle(
    State(state): State<AppState>,
    Path(vin): Path<u64>,
) -> Result<Json<Vehicle>, AppError> {
    let mut dealership = state.dealership.lock().await;
    let removed = dealership.remove_vehicle(vin).map_err(AppError::inventory)?;

    if let Err(e) = state.save_dealership(&dealership).await {
        let _ = dealership.add_vehicle(removed);
        return Err(e);
    }

    info!("Vehicle {} removed from inventory", vin);
    Ok(Json(removed))
}
