//! # Chi-Squared distribution
//!
//! The [Chi Squared distribution](https://en.wikipedia.org/wiki/Chi-squared_distribution)
//! is a continuous distribution. It has 1 parameter: the degrees fo freedom (`k`). It
//! represents the distribution of the sum of the squares of k iid standard normal
//! random variables.
//!
//! The Chi Squared distribution is a special case of the Gamma distribution:
//!
//!  > ChiSquared(k) ~ Gamma(a = k/2, theta = 2)
//!
//! It is the denominator of the construction of the [StudentT](crate::distributions::StudentT::StudentT)
//! distribution.
//!

use std::f64;

use rand::Rng;

use crate::{
    distribution_trait::Distribution, domain::ContinuousDomain, errors::SamplerError,
    euclid::ln_gamma,
};

pub const CHI_SQUARED_DOMAIN: ContinuousDomain = ContinuousDomain::Positive(true);

#[derive(Debug, Clone)]
pub struct ChiSquared {
    degrees_of_freedom: f64,
    normalitzation_constant: f64,
    sampler: rand_distr::ChiSquared<f64>,
}

impl ChiSquared {
    /// Creates a new [ChiSquared] distribution with parameter
    /// `k` = `degrees_of_freedom`.
    ///
    ///  - Must be finite (no `+-inf` nor NaN)
    ///  - Must be stricly positive (`0.0 < degrees_of_freedom`)
    ///
    /// Otherwise returns [SamplerError::InvalidParameter].
    pub fn new(degrees_of_freedom: f64) -> Result<ChiSquared, SamplerError> {
        if !degrees_of_freedom.is_finite() {
            return Err(SamplerError::invalid(
                "degrees_of_freedom",
                "must be finite",
            ));
        }

        if degrees_of_freedom <= 0.0 {
            return Err(SamplerError::invalid(
                "degrees_of_freedom",
                std::format!("must be stricly positive, got {degrees_of_freedom}"),
            ));
        }

        let sampler: rand_distr::ChiSquared<f64> = rand_distr::ChiSquared::new(degrees_of_freedom)
            .map_err(|e| SamplerError::invalid("degrees_of_freedom", e.to_string()))?;

        return Ok(ChiSquared {
            degrees_of_freedom,
            normalitzation_constant: Self::compute_normalitzation_constant(degrees_of_freedom),
            sampler,
        });
    }

    pub fn compute_normalitzation_constant(k: f64) -> f64 {
        /*
            c = 1/(2^(k*0.5) * gamma(k*0.5))
            ln(c) = -(k*0.5)*ln(2) - ln_gamma(k*0.5)
        */
        let d: f64 = k * 0.5;
        let ln_c: f64 = -d * f64::consts::LN_2 - ln_gamma(d);
        return ln_c.exp();
    }

    /// Returns the degrees of freedom (`k`).
    pub const fn get_degrees_of_freedom(&self) -> f64 {
        return self.degrees_of_freedom;
    }
}

impl Distribution for ChiSquared {
    fn pdf(&self, x: f64) -> f64 {
        // pdf(x | k) = c * x^(k/2 - 1) * exp(-x/2)
        if !CHI_SQUARED_DOMAIN.contains(x) {
            return 0.0;
        }

        if x == 0.0 {
            return match self.degrees_of_freedom {
                k if k < 2.0 => f64::INFINITY,
                k if k == 2.0 => 0.5,
                _ => 0.0,
            };
        }

        let exponent: f64 = self.degrees_of_freedom * 0.5 - 1.0;
        let ln_pdf: f64 = exponent * x.ln() - 0.5 * x;
        return self.normalitzation_constant * ln_pdf.exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &CHI_SQUARED_DOMAIN;
    }

    /// Never returns `0.0`.
    ///
    /// With very few degrees of freedom a draw can underflow to `0.0`.
    /// Dividing by it would give an infinite t value, so it is drawn again.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        loop {
            let r: f64 = rand_distr::Distribution::<f64>::sample(&self.sampler, rng);
            if 0.0 < r {
                return r;
            }
        }
    }

    fn expected_value(&self) -> Option<f64> {
        return Some(self.degrees_of_freedom);
    }

    fn variance(&self) -> Option<f64> {
        return Some(2.0 * self.degrees_of_freedom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn rejects_invalid_degrees_of_freedom() {
        assert!(ChiSquared::new(0.0).is_err());
        assert!(ChiSquared::new(-3.0).is_err());
        assert!(ChiSquared::new(f64::NAN).is_err());
        assert!(ChiSquared::new(f64::INFINITY).is_err());
        assert!(ChiSquared::new(0.5).is_ok());
    }

    #[test]
    fn pdf_known_values() {
        // k = 2 is an exponential with rate 1/2
        let chi: ChiSquared = ChiSquared::new(2.0).expect("Parameters are valid. ");
        assert_approx_eq!(chi.pdf(0.0), 0.5, 1e-12);
        assert_approx_eq!(chi.pdf(1.0), 0.5 * (-0.5_f64).exp(), 1e-12);
        assert_eq!(chi.pdf(-1.0), 0.0);

        // k = 4: pdf(x) = x * exp(-x/2) / 4
        let chi: ChiSquared = ChiSquared::new(4.0).expect("Parameters are valid. ");
        assert_approx_eq!(chi.pdf(3.0), 0.75 * (-1.5_f64).exp(), 1e-10);
    }

    #[test]
    fn samples_are_positive_with_matching_mean() {
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let chi: ChiSquared = ChiSquared::new(5.0).expect("Parameters are valid. ");
        let samples: Vec<f64> = chi.sample_multiple(&mut rng, 20_000);

        assert!(samples.iter().all(|&x| 0.0 < x && x.is_finite()));
        let mean: f64 = samples.iter().sum::<f64>() / samples.len() as f64;
        assert!((mean - 5.0).abs() < 0.15, "mean: {mean}");
    }
}
