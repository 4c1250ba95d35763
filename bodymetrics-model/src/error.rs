/// Raised when a measurement field lies outside its physiological range.
///
/// Every variant carries the rejected value together with the bound(s) it
/// was checked against, so callers can report the problem without having to
/// know the ranges themselves.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("height out of range: {value} cm (valid range: {min}-{max})")]
    Height { value: f64, min: f64, max: f64 },
    #[error("weight out of range: {value} kg (valid range: {min}-{max})")]
    Weight { value: f64, min: f64, max: f64 },
    #[error("age out of range: {value} years (valid range: {min}-{max})")]
    Age { value: u32, min: u32, max: u32 },
    #[error("impedance too high: {value} ohm (max: {max})")]
    Impedance { value: u32, max: u32 },
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Height { .. } => "height",
            ValidationError::Weight { .. } => "weight",
            ValidationError::Age { .. } => "age",
            ValidationError::Impedance { .. } => "impedance",
        }
    }
}
