//! Pressure vessel weight module.
//!
//! Computes the approximate steel weight of a cylindrical shell with two
//! dished heads and serves the result page.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod routes;

// Re-export commonly used items
pub use calculators::{calculate, format_weight, round_weight};
pub use models::{CalculationInput, CalculationResult, ValidationError};
pub use routes::router;
