//! # Sample generator
//!
//! Generates paired samples of a standard normal distribution and of a
//! [Student's t distribution](crate::distributions::StudentT::StudentT).
//!
//! Each t value is built from the normal value in the same position and an
//! independent chi squared value:
//!
//!  > `t[i] = normal[i] / sqrt(chi_squared[i] / degrees_of_freedom)`
//!
//! The chi squared values are only an intermediate step and are discarded.
//!
//! The random source is always given by the caller. Using a seeded generator
//! (for example [rand::rngs::StdRng::seed_from_u64](rand::SeedableRng::seed_from_u64))
//! with the same parameters gives exactly the same [SampleSet].
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use TDistributionGenerator::generator::{generate, SampleSet};
//!
//! let mut rng: StdRng = StdRng::seed_from_u64(42);
//! let set: SampleSet = generate(&mut rng, 10, 1000).unwrap();
//! assert_eq!(set.normal_samples().len(), 1000);
//! assert_eq!(set.t_samples().len(), 1000);
//! ```

use rand::Rng;
use tracing::{debug, warn};

use crate::{
    configuration::{bounds, defaults},
    distribution_trait::Distribution,
    distributions::{ChiSquared::ChiSquared, Normal::StdNormal, StudentT::StudentT},
    errors::SamplerError,
};

/// The output of [generate]: two sequences of the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    degrees_of_freedom: u32,
    normal_samples: Vec<f64>,
    t_samples: Vec<f64>,
}

impl SampleSet {
    /// The independent standard normal draws.
    pub fn normal_samples(&self) -> &[f64] {
        return &self.normal_samples;
    }

    /// The derived t distributed values. `t_samples()[i]` was computed
    /// from `normal_samples()[i]`.
    pub fn t_samples(&self) -> &[f64] {
        return &self.t_samples;
    }

    /// The degrees of freedom used to generate the t values.
    pub const fn degrees_of_freedom(&self) -> u32 {
        return self.degrees_of_freedom;
    }

    /// Number of samples in each sequence.
    pub fn len(&self) -> usize {
        return self.t_samples.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.t_samples.is_empty();
    }

    /// Returns `(normal_samples, t_samples)` and drops self.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        return (self.normal_samples, self.t_samples);
    }
}

/// Generates `sample_count` standard normal values and the same number of
/// t values with `degrees_of_freedom` degrees of freedom.
///
///  - `degrees_of_freedom` must be stricly positive. If it is 0, returns
///     [SamplerError::InvalidParameter].
///  - `sample_count` can be anything, `0` returns 2 empty sequences.
///     The bounds of [crate::configuration::bounds] are **not** enforced here,
///     see [SampleParameters] for that.
///
/// The normal values are drawn first and then the chi squared values, both from `rng`.
///
/// If a non-finite value is produced, returns [SamplerError::NumericalError]
/// instead of giving it back.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    degrees_of_freedom: u32,
    sample_count: usize,
) -> Result<SampleSet, SamplerError> {
    if degrees_of_freedom == 0 {
        warn!(degrees_of_freedom, sample_count, "rejected generation request");
        return Err(SamplerError::invalid(
            "degrees_of_freedom",
            "must be a positive integer, got 0",
        ));
    }

    debug!(degrees_of_freedom, sample_count, "generating samples");

    let dof: f64 = f64::from(degrees_of_freedom);
    let std_normal: StdNormal = StdNormal::new();
    let chi_squared: ChiSquared = ChiSquared::new(dof)?;

    let normal_samples: Vec<f64> = std_normal.sample_multiple(rng, sample_count);
    let chi_squared_samples: Vec<f64> = chi_squared.sample_multiple(rng, sample_count);

    let t_samples: Vec<f64> = normal_samples
        .iter()
        .zip(chi_squared_samples.iter())
        .map(|(&z, &v)| StudentT::combine(z, v, dof))
        .collect::<Vec<f64>>();

    if t_samples.iter().any(|t: &f64| !t.is_finite()) {
        return Err(SamplerError::NumericalError {
            context: "t sample",
        });
    }

    return Ok(SampleSet {
        degrees_of_freedom,
        normal_samples,
        t_samples,
    });
}

/// Same as [generate], but with a builder interface where every parameter
/// except the random source is optional.
///
///  - `degrees_of_freedom`: defaults to [defaults::DEFAULT_DEGREES_OF_FREEDOM]
///  - `sample_count`: defaults to [defaults::DEFAULT_SAMPLE_COUNT]
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use TDistributionGenerator::generator::generate_samples;
///
/// let mut rng: StdRng = StdRng::seed_from_u64(1);
/// let set = generate_samples().rng(&mut rng).degrees_of_freedom(5).call().unwrap();
/// assert_eq!(set.len(), 1000);
/// ```
#[bon::builder]
pub fn generate_samples<R: Rng + ?Sized>(
    rng: &mut R,
    degrees_of_freedom: Option<u32>,
    sample_count: Option<usize>,
) -> Result<SampleSet, SamplerError> {
    return generate(
        rng,
        degrees_of_freedom.unwrap_or(defaults::DEFAULT_DEGREES_OF_FREEDOM),
        sample_count.unwrap_or(defaults::DEFAULT_SAMPLE_COUNT),
    );
}

/// A pair of parameters that respects the bounds of [crate::configuration::bounds].
///
/// This is what an interactive front end should hold: it can only be built
/// with values the user is allowed to pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleParameters {
    degrees_of_freedom: u32,
    sample_count: usize,
}

impl SampleParameters {
    /// Creates a new [SampleParameters].
    ///
    /// Returns [SamplerError::OutOfRange] if any of the values is outside
    /// its bounds, and [SamplerError::InvalidParameter] if `sample_count` is
    /// not a multiple of [bounds::SAMPLE_COUNT_STEP].
    pub fn new(
        degrees_of_freedom: u32,
        sample_count: usize,
    ) -> Result<SampleParameters, SamplerError> {
        Self::check_degrees_of_freedom(degrees_of_freedom)?;
        Self::check_sample_count(sample_count)?;

        return Ok(SampleParameters {
            degrees_of_freedom,
            sample_count,
        });
    }

    pub const fn degrees_of_freedom(&self) -> u32 {
        return self.degrees_of_freedom;
    }

    pub const fn sample_count(&self) -> usize {
        return self.sample_count;
    }

    /// Returns a copy with the new `degrees_of_freedom` or
    /// [SamplerError::OutOfRange].
    pub fn with_degrees_of_freedom(
        self,
        degrees_of_freedom: u32,
    ) -> Result<SampleParameters, SamplerError> {
        return SampleParameters::new(degrees_of_freedom, self.sample_count);
    }

    /// Returns a copy with the new `sample_count` or [SamplerError::OutOfRange].
    pub fn with_sample_count(self, sample_count: usize) -> Result<SampleParameters, SamplerError> {
        return SampleParameters::new(self.degrees_of_freedom, sample_count);
    }

    /// Calls [generate] with the stored parameters.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SampleSet, SamplerError> {
        return generate(rng, self.degrees_of_freedom, self.sample_count);
    }

    fn check_degrees_of_freedom(degrees_of_freedom: u32) -> Result<(), SamplerError> {
        let min: u32 = bounds::MIN_DEGREES_OF_FREEDOM;
        let max: u32 = bounds::MAX_DEGREES_OF_FREEDOM;
        if degrees_of_freedom < min || max < degrees_of_freedom {
            warn!(degrees_of_freedom, "degrees of freedom out of range");
            return Err(SamplerError::OutOfRange {
                name: "degrees_of_freedom",
                value: degrees_of_freedom as usize,
                min: min as usize,
                max: max as usize,
            });
        }
        return Ok(());
    }

    fn check_sample_count(sample_count: usize) -> Result<(), SamplerError> {
        let min: usize = bounds::MIN_SAMPLE_COUNT;
        let max: usize = bounds::MAX_SAMPLE_COUNT;
        if sample_count < min || max < sample_count {
            warn!(sample_count, "sample count out of range");
            return Err(SamplerError::OutOfRange {
                name: "sample_count",
                value: sample_count,
                min,
                max,
            });
        }
        let step: usize = bounds::SAMPLE_COUNT_STEP;
        if sample_count % step != 0 {
            warn!(sample_count, step, "sample count is not a multiple of the step");
            return Err(SamplerError::invalid(
                "sample_count",
                std::format!("{sample_count} is not a multiple of {step}"),
            ));
        }
        return Ok(());
    }
}

impl Default for SampleParameters {
    fn default() -> Self {
        return SampleParameters {
            degrees_of_freedom: defaults::DEFAULT_DEGREES_OF_FREEDOM,
            sample_count: defaults::DEFAULT_SAMPLE_COUNT,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn zero_samples_gives_empty_sequences() {
        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let set: SampleSet = generate(&mut rng, 4, 0).expect("Parameters are valid. ");
        assert!(set.is_empty());
        assert!(set.normal_samples().is_empty());
    }

    #[test]
    fn t_values_are_built_from_the_normal_values() {
        // With a huge dof the chi squared term is ~1 so
        // t[i] has the same sign as normal[i]
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let set: SampleSet = generate(&mut rng, 1_000_000, 500).expect("Parameters are valid. ");
        for (z, t) in set.normal_samples().iter().zip(set.t_samples()) {
            assert_eq!(z.signum(), t.signum());
            assert!((z - t).abs() < 0.05 * (1.0 + z.abs()));
        }
    }

    #[test]
    fn builder_uses_defaults() {
        let mut rng: StdRng = StdRng::seed_from_u64(8);
        let set: SampleSet = generate_samples()
            .rng(&mut rng)
            .call()
            .expect("Parameters are valid. ");
        assert_eq!(set.len(), defaults::DEFAULT_SAMPLE_COUNT);
        assert_eq!(set.degrees_of_freedom(), defaults::DEFAULT_DEGREES_OF_FREEDOM);
    }

    #[test]
    fn parameters_enforce_bounds() {
        assert!(SampleParameters::new(10, 1000).is_ok());
        assert!(matches!(
            SampleParameters::new(0, 1000),
            Err(SamplerError::OutOfRange { name: "degrees_of_freedom", .. })
        ));
        assert!(matches!(
            SampleParameters::new(51, 1000),
            Err(SamplerError::OutOfRange { .. })
        ));
        assert!(matches!(
            SampleParameters::new(10, 99),
            Err(SamplerError::OutOfRange { name: "sample_count", .. })
        ));
        assert!(SampleParameters::new(10, 10_001).is_err());
        assert!(SampleParameters::new(50, 10_000).is_ok());
        assert!(SampleParameters::new(1, 100).is_ok());

        // only multiples of the input step
        assert!(matches!(
            SampleParameters::new(10, 150),
            Err(SamplerError::InvalidParameter { name: "sample_count", .. })
        ));
        assert!(SampleParameters::new(10, 9_999).is_err());
        assert!(SampleParameters::new(10, 2_300).is_ok());
    }

    #[test]
    fn parameter_updates_keep_the_other_value() {
        let params: SampleParameters = SampleParameters::default();
        let updated: SampleParameters = params
            .with_degrees_of_freedom(3)
            .expect("Parameters are valid. ");
        assert_eq!(updated.degrees_of_freedom(), 3);
        assert_eq!(updated.sample_count(), params.sample_count());
        assert!(params.with_sample_count(50).is_err());
    }
}
