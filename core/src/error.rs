use thiserror::Error;

/// Rejected bounds for the checked integer samplers.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RangeError {
    /// `[0, 0)` has no values to draw from.
    #[error("empty range: upper bound must be greater than zero")]
    EmptyRange,

    /// Inclusive bounds given high-to-low.
    #[error("inverted range: [{low}, {high}]")]
    Inverted { low: i32, high: i32 },

    /// Float bounds given high-to-low, or not finite.
    #[error("invalid float range: [{low}, {high}]")]
    InvalidFloatRange { low: f32, high: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            RangeError::EmptyRange.to_string(),
            "empty range: upper bound must be greater than zero"
        );
        assert_eq!(
            RangeError::Inverted { low: 3, high: -2 }.to_string(),
            "inverted range: [3, -2]"
        );
        assert_eq!(
            RangeError::InvalidFloatRange { low: 1.5, high: 0.5 }.to_string(),
            "invalid float range: [1.5, 0.5]"
        );
    }
}
