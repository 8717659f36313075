use std::sync::Arc;
use tokio::sync::Mutex;
use dealership_catalog::Dealership;
use dealership_contract::{Contract, ContractTerms};
use dealership_store::{ContractFileManager, DealershipFileManager};

use crate::error::AppError;

/// Shared handler state. The dealership lock also serializes writes to both files.
#[derive(Clone)]
pub struct AppState {
    pub dealership: Arc<Mutex<Dealership>>,
    pub dealership_files: Arc<DealershipFileManager>,
    pub contract_files: Arc<ContractFileManager>,
    pub contract_terms: ContractTerms,
}

impl AppState {
    pub fn new(
        dealership: Dealership,
        dealership_files: DealershipFileManager,
        contract_files: ContractFileManager,
        contract_terms: ContractTerms,
    ) -> Self {
        Self {
            dealership: Arc::new(Mutex::new(dealership)),
            dealership_files: Arc::new(dealership_files),
            contract_files: Arc::new(contract_files),
            contract_terms,
        }
    }

    // File I/O runs on the blocking pool; callers hold the dealership lock.

    pub async fn save_dealership(&self, dealership: &Dealership) -> Result<(), AppError> {
        let files = self.dealership_files.clone();
        let snapshot = dealership.clone();
        tokio::task::spawn_blocking(move || files.save_dealership(&snapshot)).await??;
        Ok(())
    }

    pub async fn append_contract(&self, contract: &Contract) -> Result<(), AppError> {
        let files = self.contract_files.clone();
        let contract = contract.clone();
        tokio::task::spawn_blocking(move || files.save_contract(&contract)).await??;
        Ok(())
    }

    pub async fn load_contracts(&self) -> Result<Vec<Contract>, AppError> {
        let files = self.contract_files.clone();
        let terms = self.contract_terms;
        let contracts = tokio::task::spawn_blocking(move || files.load_contracts(&terms)).await??;
        Ok(contracts)
    }
}
