pub mod batch;
pub mod calculators;
pub mod engine;
pub mod interpretation;
pub mod reduction;

pub use crate::domain::model::{DestinyNumber, Domain, Reading};
pub use crate::domain::ports::{CalculationRecorder, Calculator, CallerVerifier};
pub use crate::utils::error::Result;
