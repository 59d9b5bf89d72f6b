use thiserror::Error;

/// Error type shared by every Serene component.
///
/// Scoring itself never fails on well-formed data; these variants cover
/// construction-time validation and caller-supplied values outside their
/// documented range.
#[derive(Error, Debug)]
pub enum SereneError {
    /// A caller-supplied value is outside its documented range.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration could not be turned into a working component.
    #[error("config error: {0}")]
    Config(String),

    /// A cognitive-bias pattern failed to compile or matches the empty string.
    #[error("invalid bias pattern '{bias_type}': {reason}")]
    Pattern { bias_type: String, reason: String },
}

pub type SereneResult<T> = Result<T, SereneError>;

/// Reject NaN and infinities for a named numeric input.
pub fn ensure_finite(name: &str, value: f32) -> SereneResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SereneError::Validation(format!(
            "{} must be a finite number, got {}",
            name, value
        )))
    }
}
