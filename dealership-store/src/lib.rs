pub mod app_config;
pub mod error;
pub mod dealership_file;
pub mod contract_file;

pub use error::StoreError;
pub use dealership_file::DealershipFileManager;
pub use contract_file::ContractFileManager;
