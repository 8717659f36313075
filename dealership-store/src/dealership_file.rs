use std::fs;
use std::path::{Path, PathBuf};

use dealership_catalog::Dealership;
use dealership_shared::{Vehicle, FIELD_SEPARATOR};
use tracing::{debug, error, info, warn};

use crate::error::{StoreError, StoreResult};

/// Reads and rewrites the dealership inventory file.
///
/// Line 1 is `name|address|phone`, every following line one vehicle.
pub struct DealershipFileManager {
    path: PathBuf,
}

impl DealershipFileManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the dealership. Vehicle lines that fail to parse are logged and skipped.
    pub fn load_dealership(&self) -> StoreResult<Dealership> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            error!("Error loading dealership data from {}: {}", self.path.display(), e);
            StoreError::io(&self.path, e)
        })?;

        let mut lines = contents.lines();
        let header = lines.next().ok_or_else(|| StoreError::Empty(self.path.clone()))?;
        let details: Vec<&str> = header.split(FIELD_SEPARATOR).collect();
        if details.len() < 3 {
            return Err(StoreError::MalformedHeader { path: self.path.clone(), line: header.to_string() });
        }

        let mut dealership = Dealership::new(details[0], details[1], details[2]);

        for (index, line) in lines.enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_no = index + 2;

            let vehicle = match line.parse::<Vehicle>() {
                Ok(vehicle) => vehicle,
                Err(e) => {
                    warn!("Skipping vehicle on line {} of {}: {}", line_no, self.path.display(), e);
                    continue;
                }
            };

            if let Err(e) = dealership.add_vehicle(vehicle) {
                warn!("Skipping vehicle on line {} of {}: {}", line_no, self.path.display(), e);
            }
        }

        info!("Loaded {} with {} vehicles", dealership.name, dealership.len());
        Ok(dealership)
    }

    /// Rewrite the whole file from `dealership`
    pub fn save_dealership(&self, dealership: &Dealership) -> StoreResult<()> {
        let sep = FIELD_SEPARATOR;
        let mut contents = format!("{}{sep}{}{sep}{}\n", dealership.name, dealership.address, dealership.phone);
        for vehicle in dealership.all_vehicles() {
            contents.push_str(&vehicle.to_record());
            contents.push('\n');
        }

        fs::write(&self.path, contents).map_err(|e| {
            error!("Error saving dealership data to {}: {}", self.path.display(), e);
            StoreError::io(&self.path, e)
        })?;

        debug!("Saved {} vehicles to {}", dealership.len(), self.path.display());
        Ok(())
    }
}
