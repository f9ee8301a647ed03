//! # Student T
//!
//! The [Student T distribution](https://en.wikipedia.org/wiki/Student%27s_t-distribution#Probability_density_function)
//! is a continuous probability distribution.
//!
//! ### Parameters
//!
//! It has a single parameter, the degrees of freedom (usually denoted by the greek
//! letter `nu`).
//!  - The degrees of freedom is a stricly positive number (usually an integer).
//!  - If `nu = 1` then the distribution is a [Cauchy distribution](https://en.wikipedia.org/wiki/Cauchy_distribution).
//!  - If `nu` diverges to infinity, the distribution becomes a [standard normal distribution](crate::distributions::Normal::StdNormal).
//!
//! ### Sampling
//!
//! If `Z` is a standard normal and `V` is an independent chi squared with `nu`
//! degrees of freedom, then `T = Z / sqrt(V / nu)` is a [StudentT] with `nu`
//! degrees of freedom. This is how samples are generated.
//!

use std::f64;

use rand::Rng;

use crate::{
    distribution_trait::Distribution, domain::ContinuousDomain, errors::SamplerError,
    euclid::ln_gamma,
};

use super::{ChiSquared::ChiSquared, Normal::StdNormal};

pub const STUDENT_T_DOMAIN: ContinuousDomain = ContinuousDomain::Reals;

#[derive(Debug, Clone)]
pub struct StudentT {
    degrees_of_freedom: f64,
    normalitzation_constant: f64,
    numerator: StdNormal,
    denominator: ChiSquared,
}

impl StudentT {
    /// Create a [StudentT] distribution.
    ///
    /// `degrees_of_freedom` determines how *normal* does the distribution look.
    ///  - Must be finite (no `+-inf` nor NaN)
    ///  - Must be stricly positive (`0.0 < degrees_of_freedom`)
    ///  - Altough we accept a float, `degrees_of_freedom` almost always is an integer.
    ///
    /// Otherwise returns [SamplerError::InvalidParameter].
    pub fn new(degrees_of_freedom: f64) -> Result<StudentT, SamplerError> {
        // ChiSquared::new already checks the same preconditions
        let denominator: ChiSquared = ChiSquared::new(degrees_of_freedom)?;

        return Ok(StudentT {
            degrees_of_freedom,
            normalitzation_constant: Self::compute_normalitzation_constant(degrees_of_freedom),
            numerator: StdNormal::new(),
            denominator,
        });
    }

    pub fn compute_normalitzation_constant(degrees_of_freedom: f64) -> f64 {
        /*
            c = gamma((nu+1)/2) / (sqrt(pi*nu) * gamma(nu/2))
            ln(c) = ln_gamma((nu+1)/2) - 0.5*ln(pi*nu) - ln_gamma(nu/2)
        */

        let ln_c: f64 = ln_gamma((degrees_of_freedom + 1.0) * 0.5)
            - ln_gamma(degrees_of_freedom * 0.5)
            - 0.5 * (f64::consts::PI * degrees_of_freedom).ln();

        return ln_c.exp();
    }

    /// Returns the degrees_of_freedom.
    pub const fn get_degrees_of_freedom(&self) -> f64 {
        return self.degrees_of_freedom;
    }

    /// Combines a standard normal value and a chi squared value
    /// (with `degrees_of_freedom`) into a t value.
    #[inline]
    pub fn combine(normal: f64, chi_squared: f64, degrees_of_freedom: f64) -> f64 {
        return normal / (chi_squared / degrees_of_freedom).sqrt();
    }
}

impl Distribution for StudentT {
    fn pdf(&self, x: f64) -> f64 {
        // pdf(x | nu) = norm(nu) * (1 + x^2 / nu) ^ (-(nu+1)/2)

        let base: f64 = 1.0 + x * x / self.degrees_of_freedom;
        let exponent: f64 = -(self.degrees_of_freedom + 1.0) * 0.5;
        return base.powf(exponent) * self.normalitzation_constant;
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &STUDENT_T_DOMAIN;
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = self.numerator.sample(rng);
        let v: f64 = self.denominator.sample(rng);
        return Self::combine(z, v, self.degrees_of_freedom);
    }

    fn sample_multiple<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        // draw all the numerators first and then all the denominators,
        // the same order as crate::generator::generate
        let normal_samples: Vec<f64> = self.numerator.sample_multiple(rng, n);
        let chi_sq_samples: Vec<f64> = self.denominator.sample_multiple(rng, n);

        let d: f64 = self.degrees_of_freedom;

        return normal_samples
            .iter()
            .zip(chi_sq_samples.iter())
            .map(|(&z, &c)| Self::combine(z, c, d))
            .collect::<Vec<f64>>();
    }

    fn expected_value(&self) -> Option<f64> {
        if self.degrees_of_freedom <= 1.0 {
            return None;
        }
        return Some(0.0);
    }

    fn variance(&self) -> Option<f64> {
        // infinite for 1 < nu <= 2, undefined otherwise
        if self.degrees_of_freedom <= 2.0 {
            return None;
        }
        let nu: f64 = self.degrees_of_freedom;
        return Some(nu / (nu - 2.0));
    }
}
