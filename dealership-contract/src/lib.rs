pub mod models;
pub mod finance;
pub mod sales;
pub mod lease;
pub mod record;

pub use models::{Contract, ContractKind, ContractTerms, PriceBreakdown};
pub use finance::FinancingTerms;
pub use sales::{SalesContract, SalesSchedule, SalesTier};
pub use lease::{LeaseContract, LeaseSchedule};
pub use record::RecordError;
