//! This file contains the deafult values and the bounds used trough the library.
//!
//! The core generator ([crate::generator::generate]) only rejects values that
//! make the computation undefined. The bounds in here are the ones an
//! interactive front end enforces (see [crate::session::SamplerSession] and
//! [crate::generator::SampleParameters]).

/// Limits for the values a user can pick.
pub mod bounds {

    /// Smallest number of degrees of freedom that can be selected.
    pub static MIN_DEGREES_OF_FREEDOM: u32 = 1;
    /// Largest number of degrees of freedom that can be selected.
    pub static MAX_DEGREES_OF_FREEDOM: u32 = 50;

    /// Smallest number of samples that can be requested.
    pub static MIN_SAMPLE_COUNT: usize = 100;
    /// Largest number of samples that can be requested.
    pub static MAX_SAMPLE_COUNT: usize = 10_000;
    /// Increment used by the sample count input.
    pub static SAMPLE_COUNT_STEP: usize = 100;
}

/// Values used when the caller does not specify anything.
pub mod defaults {

    /// `10`
    pub static DEFAULT_DEGREES_OF_FREEDOM: u32 = 10;
    /// `1000`
    pub static DEFAULT_SAMPLE_COUNT: usize = 1000;
}

/// Settings for the density estimations handed to the rendering side.
pub mod plotting {

    /// Number of bins of the histogram. `30`
    pub static DEFAULT_HISTOGRAM_BINS: usize = 30;

    /// Number of points where the kernel density estimate is evaluated
    /// by [crate::density::KernelDensity::default_grid].
    pub static DEFAULT_KDE_GRID_POINTS: usize = 200;

    /// How many bandwidths the kde grid extends past the extreme values.
    pub static KDE_CUT: f64 = 3.0;
}
