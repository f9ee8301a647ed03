//! # Interactive session
//!
//! A [SamplerSession] models what an interactive front end does with the
//! [generator](crate::generator): it keeps the current parameters, only
//! accepts values inside [crate::configuration::bounds] and decides *when*
//! new samples are generated.
//!
//! When to regenerate is an explicit choice ([RegenerationPolicy]):
//!  - [RegenerationPolicy::OnTrigger] (default): changing a parameter never
//!     generates anything. New samples only appear after [SamplerSession::trigger].
//!  - [RegenerationPolicy::OnChange]: every accepted parameter change
//!     generates a new [Report] immediately.
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use TDistributionGenerator::session::{RegenerationPolicy, SamplerSession};
//!
//! let mut session = SamplerSession::builder()
//!     .rng(StdRng::seed_from_u64(0))
//!     .policy(RegenerationPolicy::OnTrigger)
//!     .build();
//!
//! assert!(session.set_degrees_of_freedom(5).unwrap().is_none());
//! let report = session.trigger().unwrap();
//! assert_eq!(report.sample_set().degrees_of_freedom(), 5);
//! ```

use rand::Rng;
use tracing::info;

use crate::{
    configuration::plotting,
    density::Histogram,
    errors::SamplerError,
    generator::{SampleParameters, SampleSet},
    samples::{Samples, Summary},
};

/// Decides when a [SamplerSession] generates new samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegenerationPolicy {
    /// Only on an explicit [SamplerSession::trigger].
    #[default]
    OnTrigger,
    /// On every accepted parameter change (and on [SamplerSession::trigger]).
    OnChange,
}

/// Everything the rendering side needs after a generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    sample_set: SampleSet,
    normal_summary: Summary,
    t_summary: Summary,
    histogram: Histogram,
}

impl Report {
    /// Computes the summaries and the histogram (of the t values) of `sample_set`.
    ///
    /// Fails with [SamplerError::NotEnoughSamples] if the set is empty.
    pub fn new(sample_set: SampleSet, bins: usize) -> Result<Report, SamplerError> {
        let normal_summary: Summary = Samples::new(sample_set.normal_samples())?.summary()?;
        let t_summary: Summary = Samples::new(sample_set.t_samples())?.summary()?;
        let histogram: Histogram = Histogram::new(sample_set.t_samples(), bins)?;

        return Ok(Report {
            sample_set,
            normal_summary,
            t_summary,
            histogram,
        });
    }

    pub fn sample_set(&self) -> &SampleSet {
        return &self.sample_set;
    }

    pub fn normal_summary(&self) -> &Summary {
        return &self.normal_summary;
    }

    pub fn t_summary(&self) -> &Summary {
        return &self.t_summary;
    }

    /// Histogram of the t values.
    pub fn histogram(&self) -> &Histogram {
        return &self.histogram;
    }

    /// The text shown under the plot:
    ///
    /// ```text
    /// Generated 1000 samples with 10 degrees of freedom.
    /// Mean: 0.0123
    /// Standard Deviation: 1.1102
    /// ```
    pub fn describe(&self) -> Vec<String> {
        let mut lines: Vec<String> = std::vec![std::format!(
            "Generated {} samples with {} degrees of freedom.",
            self.sample_set.len(),
            self.sample_set.degrees_of_freedom()
        )];
        lines.extend(self.t_summary.to_string().lines().map(String::from));
        return lines;
    }
}

/// Holds the parameters, the random source and the last [Report].
pub struct SamplerSession<R: Rng> {
    rng: R,
    parameters: SampleParameters,
    policy: RegenerationPolicy,
    bins: usize,
    latest: Option<Report>,
}

#[bon::bon]
impl<R: Rng> SamplerSession<R> {
    /// Creates a new session. Nothing is generated until the first trigger
    /// (or change, with [RegenerationPolicy::OnChange]).
    ///
    ///  - `rng`: the random source, owned by the session.
    ///  - `parameters`: (optional) defaults to [SampleParameters::default].
    ///  - `policy`: (optional) defaults to [RegenerationPolicy::OnTrigger].
    ///  - `bins`: (optional) histogram bins, defaults to [plotting::DEFAULT_HISTOGRAM_BINS].
    ///     A value of 0 makes every generation fail.
    #[builder]
    pub fn new(
        rng: R,
        #[builder(default)] parameters: SampleParameters,
        #[builder(default)] policy: RegenerationPolicy,
        #[builder(default = plotting::DEFAULT_HISTOGRAM_BINS)] bins: usize,
    ) -> Self {
        return SamplerSession {
            rng,
            parameters,
            policy,
            bins,
            latest: None,
        };
    }

    pub const fn parameters(&self) -> SampleParameters {
        return self.parameters;
    }

    pub const fn policy(&self) -> RegenerationPolicy {
        return self.policy;
    }

    pub fn set_policy(&mut self, policy: RegenerationPolicy) {
        self.policy = policy;
    }

    /// The last generated report, if any.
    pub fn latest(&self) -> Option<&Report> {
        return self.latest.as_ref();
    }

    /// Changes the degrees of freedom.
    ///
    /// Returns an error (and keeps the old value) if it is not allowed
    /// (see [SampleParameters::new]). With [RegenerationPolicy::OnChange] it also
    /// generates and returns a new report, otherwise returns `Ok(None)`.
    /// Setting the value it already has does not count as a change.
    pub fn set_degrees_of_freedom(
        &mut self,
        degrees_of_freedom: u32,
    ) -> Result<Option<&Report>, SamplerError> {
        let parameters: SampleParameters =
            self.parameters.with_degrees_of_freedom(degrees_of_freedom)?;
        return self.apply(parameters);
    }

    /// Changes the number of samples. Same behaviour as
    /// [SamplerSession::set_degrees_of_freedom].
    pub fn set_sample_count(&mut self, sample_count: usize) -> Result<Option<&Report>, SamplerError> {
        let parameters: SampleParameters = self.parameters.with_sample_count(sample_count)?;
        return self.apply(parameters);
    }

    /// Generates new samples with the current parameters, regardless of the policy.
    ///
    /// If it fails, the previous report is kept.
    pub fn trigger(&mut self) -> Result<&Report, SamplerError> {
        let sample_set: SampleSet = self.parameters.generate(&mut self.rng)?;
        let report: Report = Report::new(sample_set, self.bins)?;

        info!(
            degrees_of_freedom = self.parameters.degrees_of_freedom(),
            sample_count = self.parameters.sample_count(),
            mean = report.t_summary().mean,
            standard_deviation = report.t_summary().standard_deviation,
            "generated t distribution samples"
        );

        return Ok(self.latest.insert(report));
    }

    fn apply(&mut self, parameters: SampleParameters) -> Result<Option<&Report>, SamplerError> {
        if parameters == self.parameters {
            // nothing changed
            return Ok(None);
        }
        self.parameters = parameters;

        return match self.policy {
            RegenerationPolicy::OnTrigger => Ok(None),
            RegenerationPolicy::OnChange => self.trigger().map(Some),
        };
    }
}
