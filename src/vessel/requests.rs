//! Request DTOs for vessel endpoints.

use serde::Deserialize;

/// Form body of `POST /calculate`.
///
/// Fields stay raw strings so validation happens in the calculator; a missing
/// field is treated the same as a non-numeric one.
#[derive(Debug, Default, Deserialize)]
pub struct CalculateForm {
    #[serde(rename = "D", default)]
    pub diameter: Option<String>,
    #[serde(rename = "H", default)]
    pub height: Option<String>,
}

impl CalculateForm {
    pub fn diameter_raw(&self) -> &str {
        self.diameter.as_deref().unwrap_or_default()
    }

    pub fn height_raw(&self) -> &str {
        self.height.as_deref().unwrap_or_default()
    }
}
