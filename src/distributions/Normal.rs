//! # Standard Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! ia a very important continuous probability distribution.
//!
//! We only need the [StdNormal], wich has fixed `mean = 0.0` and `std_dev = 1.0`.
//! It is the numerator of the construction of the [StudentT](crate::distributions::StudentT)
//! distribution and also the limit of that distribution when the degrees of
//! freedom grow to infinity.
//!

use rand::Rng;
use rand_distr::StandardNormal;

use crate::{distribution_trait::Distribution, domain::ContinuousDomain, euclid};

pub const STD_NORMAL_DOMAIN: ContinuousDomain = ContinuousDomain::Reals;

/// A [StdNormal] holds no information. You can also use [STD_NORMAL].
pub const STD_NORMAL: StdNormal = StdNormal::new();

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StdNormal {}

impl StdNormal {
    /// Create a Standard normal distribution. Has a mean of `0.0` and a standard
    /// deviation of `1.0`.
    pub const fn new() -> StdNormal {
        return StdNormal {};
    }
}

impl Distribution for StdNormal {
    fn pdf(&self, x: f64) -> f64 {
        return euclid::INV_SQRT_2_PI * (-x * x * 0.5).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &STD_NORMAL_DOMAIN;
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // Ziggurat method
        return rand_distr::Distribution::<f64>::sample(&StandardNormal, rng);
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(0.0);
    }

    fn variance(&self) -> Option<f64> {
        return Some(1.0);
    }
}
