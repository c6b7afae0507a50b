//! Value objects for a single weight calculation.
//!
//! Nothing here outlives the request that built it.

/// Parsed vessel dimensions (mm).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    pub diameter_mm: f64,
    pub height_mm: f64,
}

/// Outcome of the weight formula, with the echoed inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    pub diameter_mm: f64,
    pub height_mm: f64,
    /// Cylindrical shell volume (mm³), negative when H < D
    pub shell_volume_mm3: f64,
    /// Volume of both heads (mm³)
    pub heads_volume_mm3: f64,
    pub total_volume_m3: f64,
    pub weight_kg: f64,
}

/// Input validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid input. Please enter numeric values for Diameter and Height.")]
    NonNumericInput,
}
