//! The domain of a pdf (the points where it can be evaluated).

/// A domain composed of the real numbers or an interval of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContinuousDomain {
    /// All real numbers
    #[default]
    Reals,
    /// Only positive numbers. The bool indicates if 0 is included.
    Positive(bool),
    /// All the numbers in the range [.0, .1] (**both** inclusive).
    Range(f64, f64),
}

impl ContinuousDomain {
    /// Determines if `x` is inside the domain. A NaN is never contained.
    pub fn contains(&self, x: f64) -> bool {
        if x.is_nan() {
            return false;
        }

        return match self {
            ContinuousDomain::Reals => true,
            ContinuousDomain::Positive(true) => 0.0 <= x,
            ContinuousDomain::Positive(false) => 0.0 < x,
            ContinuousDomain::Range(min, max) => *min <= x && x <= *max,
        };
    }

    /// Returns the lowest and highest values of the domain (that may be infinite).
    pub fn get_bounds(&self) -> (f64, f64) {
        return match self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::Positive(_) => (0.0, f64::INFINITY),
            ContinuousDomain::Range(min, max) => (*min, *max),
        };
    }
}
