//! Response-shaping logic behind the console endpoints.

pub mod address;
pub mod config;
pub mod ledger;
pub mod pagination;
pub mod rates;
pub mod stats;

pub use address::{validate_address, AddressCheck, Chain};
pub use config::{ConfigKind, ConfigRoute};
pub use ledger::{LedgerProvider, LedgerQuery, SyntheticLedger};
pub use pagination::PageRequest;
pub use rates::{RateProvider, SyntheticRates};
pub use stats::{StatsProvider, SyntheticStats};
