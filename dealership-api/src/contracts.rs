use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use dealership_catalog::Dealership;
use dealership_contract::{Contract, PriceBreakdown};
use dealership_shared::Masked;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::AppError;
use crate::state::AppState;
use crate::validation::require_text;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    Sale,
    Lease,
}

#[derive(Debug, Deserialize)]
pub struct ContractRequest {
    pub kind: ContractType,
    pub vin: u64,
    pub customer_name: String,
    pub customer_email: Masked<String>,
    /// `YYYYMMDD`; today when omitted
    pub date: Option<String>,
    /// Sales only. Leases are always financed.
    pub financed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ContractResponse {
    pub contract: Contract,
    pub pricing: PriceBreakdown,
    pub record: String,
}

impl From<Contract> for ContractResponse {
    fn from(contract: Contract) -> Self {
        Self {
            pricing: contract.breakdown(),
            record: contract.to_record(),
            contract,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/contracts", get(list_contracts).post(create_contract))
        .route("/v1/contracts/quote", post(quote_contract))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/contracts/quote
///
/// Prices a deal without touching inventory or the contracts file.
async fn quote_contract(
    State(state): State<AppState>,
    Json(req): Json<ContractRequest>,
) -> Result<Json<ContractResponse>, AppError> {
    let dealership = state.dealership.lock().await;
    let contract = build_contract(&state, &dealership, req)?;
    Ok(Json(contract.into()))
}

/// POST /v1/contracts
///
/// Signs the deal: the vehicle leaves the lot and the contract is appended to
/// the contracts file. Inventory is saved first so a failed write never leaves
/// a signed contract for a vehicle still listed on the lot.
async fn create_contract(
    State(state): State<AppState>,
    Json(req): Json<ContractRequest>,
) -> Result<(StatusCode, Json<ContractResponse>), AppError> {
    let mut dealership = state.dealership.lock().await;
    let contract = build_contract(&state, &dealership, req)?;

    let vin = contract.vehicle.vin;
    let removed = dealership.remove_vehicle(vin).map_err(AppError::inventory)?;

    if let Err(e) = state.save_dealership(&dealership).await {
        let _ = dealership.add_vehicle(removed);
        return Err(e);
    }

    if let Err(e) = state.append_contract(&contract).await {
        let _ = dealership.add_vehicle(removed);
        if let Err(restore) = state.save_dealership(&dealership).await {
            error!("Vehicle {} is back in memory but not in the inventory file: {:?}", vin, restore);
        }
        return Err(e);
    }

    info!(
        "{} contract signed for vehicle {}: total {:.2}, monthly {:.2}",
        contract.kind.tag(),
        vin,
        contract.total_price(),
        contract.monthly_payment()
    );

    Ok((StatusCode::CREATED, Json(contract.into())))
}

/// GET /v1/contracts
async fn list_contracts(State(state): State<AppState>) -> Result<Json<Vec<ContractResponse>>, AppError> {
    // Held so a concurrent signing cannot append mid-read
    let _dealership = state.dealership.lock().await;
    let contracts = state.load_contracts().await?;
    Ok(Json(contracts.into_iter().map(ContractResponse::from).collect()))
}

fn build_contract(state: &AppState, dealership: &Dealership, req: ContractRequest) -> Result<Contract, AppError> {
    require_text("customer_name", &req.customer_name)?;
    require_text("customer_email", req.customer_email.expose())?;

    let date = match req.date {
        Some(date) => {
            require_text("date", &date)?;
            date
        }
        None => chrono::Local::now().format("%Y%m%d").to_string(),
    };

    let kind = match (req.kind, req.financed) {
        (ContractType::Sale, financed) => state.contract_terms.sale(financed.unwrap_or(false)),
        (ContractType::Lease, Some(false)) => {
            return Err(AppError::ValidationError("Leases are always financed".to_string()));
        }
        (ContractType::Lease, _) => state.contract_terms.lease(),
    };

    let vehicle = dealership
        .vehicle_by_vin(req.vin)
        .cloned()
        .ok_or_else(|| AppError::NotFoundError(format!("Vehicle not found: {}", req.vin)))?;

    Ok(Contract::new(date, req.customer_name, req.customer_email.into_inner(), vehicle, kind))
}
