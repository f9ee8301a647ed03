//! # Density estimation
//!
//! The data products needed to draw the distribution of a sample:
//!
//!  - [Histogram]: equally spaced bins normalized as a density
//!     (the total area of the bars is `1.0`).
//!  - [KernelDensity]: a [gaussian kernel density estimate](https://en.wikipedia.org/wiki/Kernel_density_estimation)
//!     with [Scott's rule](https://en.wikipedia.org/wiki/Histogram#Scott's_normal_reference_rule)
//!     for the bandwidth.
//!
//! Neither of them draws anything, they only compute the values to plot.

use crate::{
    configuration::plotting,
    errors::SamplerError,
    euclid::{self, gaussian_kernel},
    samples::Samples,
};

/// A density normalized histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` edges in ascending order.
    edges: Vec<f64>,
    /// Number of samples in each bin.
    counts: Vec<usize>,
    /// `counts[i] / (total * width)`
    densities: Vec<f64>,
}

impl Histogram {
    /// Builds a histogram of `data` with `bins` equally spaced bins covering
    /// `[min(data), max(data)]`.
    ///
    /// Each bin is `[edges[i], edges[i + 1])` except the last one, that also
    /// includes its right edge (the maximum). If all values are equal, the
    /// covered range is `[x - 0.5, x + 0.5]`.
    ///
    /// Errors:
    ///  - `bins == 0`: [SamplerError::InvalidParameter]
    ///  - empty `data`: [SamplerError::NotEnoughSamples]
    ///  - NaN or infinite values: [SamplerError::NonFiniteData]
    ///  - a range too wide to be represented (`max - min` overflows):
    ///     [SamplerError::NumericalError]
    pub fn new(data: &[f64], bins: usize) -> Result<Histogram, SamplerError> {
        if bins == 0 {
            return Err(SamplerError::invalid("bins", "a histogram needs at least 1 bin"));
        }
        if data.is_empty() {
            return Err(SamplerError::NotEnoughSamples);
        }
        if data.iter().any(|x: &f64| !x.is_finite()) {
            return Err(SamplerError::NonFiniteData);
        }

        let (mut low, mut high): (f64, f64) = data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });

        if low == high {
            low = low - 0.5;
            high = high + 0.5;
        }

        let width: f64 = (high - low) / bins as f64;
        if !width.is_finite() || width <= 0.0 {
            return Err(SamplerError::NumericalError {
                context: "histogram range",
            });
        }

        let edges: Vec<f64> = euclid::linspace(low, high, bins + 1);
        if edges.iter().any(|e: &f64| !e.is_finite()) {
            return Err(SamplerError::NumericalError {
                context: "histogram range",
            });
        }

        let mut counts: Vec<usize> = std::vec![0; bins];
        for &x in data {
            let mut index: usize = ((x - low) / width).floor() as usize;
            // the maximum goes in the last bin
            if bins <= index {
                index = bins - 1;
            }
            // rounding may leave x just outside the computed bin
            while 0 < index && x < edges[index] {
                index -= 1;
            }
            while index + 1 < bins && edges[index + 1] <= x {
                index += 1;
            }
            counts[index] += 1;
        }

        let total: f64 = data.len() as f64;
        let densities: Vec<f64> = counts
            .iter()
            .zip(edges.windows(2))
            .map(|(&c, e)| c as f64 / (total * (e[1] - e[0])))
            .collect::<Vec<f64>>();

        return Ok(Histogram {
            edges,
            counts,
            densities,
        });
    }

    /// Same as [Histogram::new] with [plotting::DEFAULT_HISTOGRAM_BINS] bins.
    pub fn with_default_bins(data: &[f64]) -> Result<Histogram, SamplerError> {
        return Histogram::new(data, plotting::DEFAULT_HISTOGRAM_BINS);
    }

    pub fn edges(&self) -> &[f64] {
        return &self.edges;
    }

    pub fn counts(&self) -> &[usize] {
        return &self.counts;
    }

    pub fn densities(&self) -> &[f64] {
        return &self.densities;
    }

    pub fn bins(&self) -> usize {
        return self.counts.len();
    }

    /// The middle point of each bin.
    pub fn centers(&self) -> Vec<f64> {
        return self
            .edges
            .windows(2)
            .map(|e| 0.5 * (e[0] + e[1]))
            .collect::<Vec<f64>>();
    }

    /// Total area of the bars. It is `1.0` up to rounding errors.
    pub fn area(&self) -> f64 {
        return self
            .densities
            .iter()
            .zip(self.edges.windows(2))
            .map(|(d, e)| d * (e[1] - e[0]))
            .sum::<f64>();
    }
}

/// A gaussian kernel density estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelDensity {
    data: Vec<f64>,
    bandwidth: f64,
    minimum: f64,
    maximum: f64,
}

impl KernelDensity {
    /// Creates a [KernelDensity] of `data`.
    ///
    /// The bandwidth follows Scott's rule: `h = s * n^(-1/5)` where `s` is
    /// the sample standard deviation.
    ///
    /// Errors:
    ///  - less than 2 values, or all of them equal: [SamplerError::NotEnoughSamples]
    ///  - NaN or infinite values: [SamplerError::NonFiniteData]
    pub fn new(data: &[f64]) -> Result<KernelDensity, SamplerError> {
        let mut samples: Samples = Samples::new(data)?;
        let std_dev: f64 = samples
            .standard_deviation()
            .ok_or(SamplerError::NotEnoughSamples)?;
        if std_dev <= 0.0 {
            return Err(SamplerError::NotEnoughSamples);
        }

        let n: f64 = samples.count() as f64;
        let bandwidth: f64 = std_dev * n.powf(-0.2);

        // both exist since there are at least 2 values
        let minimum: f64 = samples.minimum().ok_or(SamplerError::NotEnoughSamples)?;
        let maximum: f64 = samples.maximum().ok_or(SamplerError::NotEnoughSamples)?;

        return Ok(KernelDensity {
            data: samples.get_data(),
            bandwidth,
            minimum,
            maximum,
        });
    }

    pub const fn bandwidth(&self) -> f64 {
        return self.bandwidth;
    }

    /// Evaluates the estimated density at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let inv_h: f64 = 1.0 / self.bandwidth;
        let sum: f64 = self
            .data
            .iter()
            .map(|&xi| gaussian_kernel((x - xi) * inv_h))
            .sum::<f64>();
        return sum * inv_h / self.data.len() as f64;
    }

    /// Evaluates the estimated density at every point in `points`.
    pub fn evaluate_multiple(&self, points: &[f64]) -> Vec<f64> {
        return points.iter().map(|&x| self.evaluate(x)).collect::<Vec<f64>>();
    }

    /// Evaluates the density on `points` equally spaced values that go from
    /// [plotting::KDE_CUT] bandwidths below the minimum to the same distance
    /// above the maximum.
    ///
    /// Returns `(xs, densities)`.
    pub fn grid(&self, points: usize) -> (Vec<f64>, Vec<f64>) {
        let margin: f64 = plotting::KDE_CUT * self.bandwidth;
        let xs: Vec<f64> = euclid::linspace(self.minimum - margin, self.maximum + margin, points);
        let ys: Vec<f64> = self.evaluate_multiple(&xs);
        return (xs, ys);
    }

    /// [KernelDensity::grid] with [plotting::DEFAULT_KDE_GRID_POINTS] points.
    pub fn default_grid(&self) -> (Vec<f64>, Vec<f64>) {
        return self.grid(plotting::DEFAULT_KDE_GRID_POINTS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn histogram_counts_and_edges() {
        let data: [f64; 6] = [0.0, 0.5, 1.0, 1.5, 2.0, 4.0];
        let h: Histogram = Histogram::new(&data, 4).unwrap();

        assert_eq!(h.edges(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
        // [0,1) [1,2) [2,3) [3,4]
        assert_eq!(h.counts(), &[2, 2, 1, 1]);
        assert_approx_eq!(h.densities()[0], 2.0 / 6.0, 1e-15);
        assert_approx_eq!(h.area(), 1.0, 1e-12);
        assert_eq!(h.centers(), vec![0.5, 1.5, 2.5, 3.5]);
    }

    #[test]
    fn histogram_of_constant_data() {
        let h: Histogram = Histogram::new(&[2.0, 2.0, 2.0], 2).unwrap();
        assert_eq!(h.edges(), &[1.5, 2.0, 2.5]);
        assert_eq!(h.counts(), &[0, 3]);
        assert_approx_eq!(h.area(), 1.0, 1e-12);
    }

    #[test]
    fn histogram_errors() {
        assert!(matches!(
            Histogram::new(&[1.0], 0),
            Err(SamplerError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Histogram::new(&[], 10),
            Err(SamplerError::NotEnoughSamples)
        ));
        assert!(matches!(
            Histogram::new(&[1.0, f64::NAN], 10),
            Err(SamplerError::NonFiniteData)
        ));
    }

    #[test]
    fn histogram_of_a_range_too_wide() {
        // every value is finite, but max - min overflows
        assert!(matches!(
            Histogram::new(&[-1.0e308, 0.0, 1.0e308], 3),
            Err(SamplerError::NumericalError { context: "histogram range" })
        ));
        // half of that range is fine
        let h: Histogram = Histogram::new(&[-0.5e308, 0.0, 0.5e308], 2).unwrap();
        assert!(h.edges().iter().all(|e| e.is_finite()));
        assert_eq!(h.counts(), &[1, 2]);
    }

    #[test]
    fn histogram_default_bins() {
        let data: Vec<f64> = euclid::linspace(-3.0, 3.0, 301);
        let h: Histogram = Histogram::with_default_bins(&data).unwrap();
        assert_eq!(h.bins(), plotting::DEFAULT_HISTOGRAM_BINS);
        assert_eq!(h.counts().iter().sum::<usize>(), 301);
        assert_approx_eq!(h.area(), 1.0, 1e-12);
    }

    #[test]
    fn kde_default_grid() {
        let kde: KernelDensity = KernelDensity::new(&[-1.0, 0.0, 2.0]).unwrap();
        let (xs, ys): (Vec<f64>, Vec<f64>) = kde.default_grid();
        assert_eq!(xs.len(), plotting::DEFAULT_KDE_GRID_POINTS);
        assert_eq!(ys.len(), plotting::DEFAULT_KDE_GRID_POINTS);
        assert_approx_eq!(xs[0], -1.0 - plotting::KDE_CUT * kde.bandwidth(), 1e-12);
        assert_approx_eq!(
            xs[xs.len() - 1],
            2.0 + plotting::KDE_CUT * kde.bandwidth(),
            1e-12
        );
        assert!(ys.iter().all(|&y| 0.0 < y));
    }

    #[test]
    fn kde_of_two_points() {
        let kde: KernelDensity = KernelDensity::new(&[-1.0, 1.0]).unwrap();
        // s = sqrt(2), n = 2
        assert_approx_eq!(kde.bandwidth(), 2.0_f64.sqrt() * 2.0_f64.powf(-0.2), 1e-12);
        assert_approx_eq!(kde.evaluate(0.5), kde.evaluate(-0.5), 1e-15);

        let (xs, ys): (Vec<f64>, Vec<f64>) = kde.grid(2001);
        assert_eq!(xs.len(), 2001);
        assert_approx_eq!(xs[0], -1.0 - 3.0 * kde.bandwidth(), 1e-12);
        // most of the mass is inside the grid
        let area: f64 = euclid::trapezoid(&xs, &ys);
        assert!(0.98 < area && area < 1.0 + 1e-9, "area: {area}");
    }

    #[test]
    fn kde_errors() {
        assert!(KernelDensity::new(&[1.0]).is_err());
        assert!(KernelDensity::new(&[1.0, 1.0, 1.0]).is_err());
        assert!(matches!(
            KernelDensity::new(&[1.0, f64::INFINITY]),
            Err(SamplerError::NonFiniteData)
        ));
    }
}
