//! Core vessel weight calculation functions.
//!
//! Pure functions for the weight formula - no I/O, no shared state.
//! All dimensions are millimeters, volumes mm³ unless suffixed `_m3`.

use std::f64::consts::PI;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::vessel::models::{CalculationInput, CalculationResult, ValidationError};

/// Shell wall thickness (mm).
pub const SHELL_THICKNESS_MM: f64 = 10.0;

/// Empirical factor for two dished heads at 12 mm: `V_heads = factor * D²`.
pub const HEAD_VOLUME_FACTOR: f64 = 83.8;

/// Mild steel density (kg/m³).
pub const MILD_STEEL_DENSITY_KG_M3: f64 = 7860.0;

/// Cubic millimeters in one cubic meter.
pub const MM3_PER_M3: f64 = 1e9;

/// Decimal places shown for the weight.
pub const WEIGHT_DISPLAY_PLACES: u32 = 2;

/// Parse a submitted dimension.
///
/// Surrounding whitespace is ignored. Anything that is not a finite number
/// (including `NaN` and `inf`) yields `None`.
pub fn parse_dimension(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Volume of the cylindrical shell between the heads (mm³).
///
/// Negative when `height < diameter`; callers get the raw value.
pub fn shell_volume_mm3(diameter: f64, height: f64) -> f64 {
    PI * diameter * (height - diameter) * SHELL_THICKNESS_MM
}

/// Volume of both heads (mm³).
pub fn heads_volume_mm3(diameter: f64) -> f64 {
    HEAD_VOLUME_FACTOR * diameter.powi(2)
}

/// Total steel volume converted to m³.
pub fn total_volume_m3(shell_mm3: f64, heads_mm3: f64) -> f64 {
    (shell_mm3 + heads_mm3) / MM3_PER_M3
}

/// Mass of the given steel volume (kg).
pub fn steel_weight_kg(volume_m3: f64) -> f64 {
    MILD_STEEL_DENSITY_KG_M3 * volume_m3
}

/// Apply the weight formula to already parsed dimensions.
pub fn compute(input: CalculationInput) -> CalculationResult {
    let shell = shell_volume_mm3(input.diameter_mm, input.height_mm);
    let heads = heads_volume_mm3(input.diameter_mm);
    let volume = total_volume_m3(shell, heads);

    CalculationResult {
        diameter_mm: input.diameter_mm,
        height_mm: input.height_mm,
        shell_volume_mm3: shell,
        heads_volume_mm3: heads,
        total_volume_m3: volume,
        weight_kg: steel_weight_kg(volume),
    }
}

/// Validate both raw form values and compute the vessel weight.
///
/// Both fields are checked together and the error does not say which one
/// failed. No range checks: zero, negative and `H < D` inputs go straight
/// into the formula.
pub fn calculate(d_raw: &str, h_raw: &str) -> Result<CalculationResult, ValidationError> {
    match (parse_dimension(d_raw), parse_dimension(h_raw)) {
        (Some(diameter_mm), Some(height_mm)) => Ok(compute(CalculationInput {
            diameter_mm,
            height_mm,
        })),
        _ => Err(ValidationError::NonNumericInput),
    }
}

/// Round a weight to `places` decimals, midpoints away from zero.
///
/// Rounds the exact binary value, so `1.005` (stored as 1.00499999...)
/// becomes `1.00`. Returns `None` when the value does not fit a `Decimal`.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use vessel_weight::vessel::round_weight;
///
/// assert_eq!(round_weight(1152.5263651443154, 2), Some(dec!(1152.53)));
/// assert_eq!(round_weight(-20.5298869291183, 2), Some(dec!(-20.53)));
/// ```
pub fn round_weight(weight_kg: f64, places: u32) -> Option<Decimal> {
    Decimal::from_f64_retain(weight_kg)
        .map(|w| w.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
}

/// Weight as shown on the result page, always with two decimals.
pub fn format_weight(weight_kg: f64) -> String {
    let places = WEIGHT_DISPLAY_PLACES as usize;
    match round_weight(weight_kg, WEIGHT_DISPLAY_PLACES) {
        Some(rounded) => format!("{:.*}", places, rounded),
        None => format!("{:.*}", places, weight_kg),
    }
}
