use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dealership_contract::{Contract, ContractTerms};
use tracing::{error, info, warn};

use crate::error::{StoreError, StoreResult};

/// Append-only log of signed contracts, one record per line
pub struct ContractFileManager {
    path: PathBuf,
}

impl ContractFileManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `contract`, creating the file on first use
    pub fn save_contract(&self, contract: &Contract) -> StoreResult<()> {
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", contract.to_record()));

        result.map_err(|e| {
            error!("Error saving contract to {}: {}", self.path.display(), e);
            StoreError::io(&self.path, e)
        })?;

        info!(
            "Saved {} contract for vehicle {} ({:?})",
            contract.kind.tag(),
            contract.vehicle.vin,
            contract.customer_email
        );
        Ok(())
    }

    /// Every stored contract, priced under `terms`. Unreadable lines are
    /// logged and skipped; no file yet means no contracts.
    pub fn load_contracts(&self, terms: &ContractTerms) -> StoreResult<Vec<Contract>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                error!("Error loading contracts from {}: {}", self.path.display(), e);
                return Err(StoreError::io(&self.path, e));
            }
        };

        let mut contracts = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Contract::from_record(line, terms) {
                Ok(contract) => contracts.push(contract),
                Err(e) => warn!("Skipping contract on line {} of {}: {}", index + 1, self.path.display(), e),
            }
        }

        Ok(contracts)
    }
}
