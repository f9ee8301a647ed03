use thiserror::Error;

/// Everything that can go wrong while generating or summarizing samples.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplerError {
    /// A parameter violated the preconditions of the function.
    /// For example, 0 degrees of freedom or a histogram with 0 bins.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },
    /// A value was outside the bounds allowed for interactive use
    /// (see [crate::configuration::bounds]).
    #[error("`{name}` = {value} is out of range. It must be in [{min}, {max}]. ")]
    OutOfRange {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    /// There were not enough samples to do the operation.
    #[error("There were not enough samples to do the operation. ")]
    NotEnoughSamples,
    /// A NaN (Not a Number) or `+-inf` was found in the input data.
    #[error("A NaN (Not a Number) or an infinity was found in the data. ")]
    NonFiniteData,
    /// A computation produced a NaN or an infinity.
    /// Overflow/underflow/division by 0
    #[error("A numerical computation produced a non-finite value ({context}). ")]
    NumericalError { context: &'static str },
}

impl SamplerError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> SamplerError {
        return SamplerError::InvalidParameter {
            name,
            reason: reason.into(),
        };
    }
}
