pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ServerConfig;

pub use core::{
    batch::{BatchProcessor, BatchSummary, OutputFormat},
    engine::NumerologyEngine,
    interpretation::{interpret, UNKNOWN_INTERPRETATION},
    reduction::reduce_to_single_digit,
};
pub use domain::model::{CalculationRecord, DestinyNumber, Domain, Identity, Reading};
pub use utils::error::{NumerologyError, Result};
pub use utils::validation::ValidationRules;
