#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
// ^Disable warning "crate `TDistributionGenerator` should have a snake case name convert the identifier to snake case: `t_distribution_generator`"
// The rest of the names will follow the snake_case convention.

//! # T Distribution Generator
//!
//! This library generates samples of a [Student's t distribution](https://en.wikipedia.org/wiki/Student%27s_t-distribution)
//! with the classic construction: a standard normal value divided by the square root
//! of an independent chi squared value over its degrees of freedom.
//!
//! It provides:
//!
//! - [x] Paired normal / t samples ([generator::generate])
//! - [x] Reproducible results with an injected random source (any [rand::Rng])
//! - [x] The underlying [distributions] (standard normal, chi squared, t)
//! - [x] Summary statistics ([samples::Samples])
//! - [x] Histograms and kernel density estimates ([density])
//! - [x] An interactive session with explicit regeneration policy ([session])
//!
//! ## Generating samples
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use TDistributionGenerator::generator::generate;
//!
//! let mut rng: StdRng = StdRng::seed_from_u64(2024);
//! let set = generate(&mut rng, 10, 1000).unwrap();
//! assert!(set.t_samples().iter().all(|t| t.is_finite()));
//!
//! // 0 degrees of freedom is rejected instead of producing NaNs
//! assert!(generate(&mut rng, 0, 100).is_err());
//! ```
//!
//! ## Logging
//!
//! The library emits [tracing] events (generation parameters at `debug`,
//! completed session generations at `info`, rejected parameters at `warn`).
//! Install any subscriber to see them.
//!
//! ***
//!

pub mod configuration;
pub mod density;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;
pub mod generator;
pub mod samples;
pub mod session;

pub use errors::SamplerError;
pub use generator::{SampleSet, generate};
