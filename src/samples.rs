use std::fmt;

use crate::errors::SamplerError;

/// A collection of finite values with lazily computed statistics.
pub struct Samples {
    data: Vec<f64>,
    properties: SampleProperties,
}

/// Stores the sample properties of the data if they have been computed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleProperties {
    /// the average of the sample
    ///
    /// Or None if `data.len() == 0`
    pub mean: Option<f64>,
    /// the (unbiased) variance of the sample
    ///
    /// Or None if `data.len() <= 1`
    pub variance: Option<f64>,
    /// the skewness of the sample
    pub skewness: Option<f64>,
    /// the excess kurtosis of the sample
    pub excess_kurtosis: Option<f64>,
    /// The maximum value of the sample
    pub maximum: Option<f64>,
    /// The minimum value of the sample
    pub minimum: Option<f64>,
    /// Determines if the data is sorted
    pub is_sorted: bool,
}

/// The statistics shown next to a plot of the samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation (divides by `n`).
    pub standard_deviation: f64,
    /// Sample standard deviation (divides by `n - 1`).
    /// `None` for a single value.
    pub sample_standard_deviation: Option<f64>,
    pub minimum: f64,
    pub maximum: f64,
}

impl Samples {
    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs or infinities (`+-inf`), otherwise
    /// returns [SamplerError::NonFiniteData].
    ///
    /// If you want to just move the data without copying it,
    /// use [Samples::new_move].
    pub fn new(data: &[f64]) -> Result<Samples, SamplerError> {
        return Samples::new_move(Vec::from(data));
    }

    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs or infinities (`+-inf`), otherwise
    /// returns [SamplerError::NonFiniteData].
    pub fn new_move(data: Vec<f64>) -> Result<Samples, SamplerError> {
        let invalid_contained: bool = data.iter().any(|f: &f64| !f.is_finite());
        if invalid_contained {
            return Err(SamplerError::NonFiniteData);
        }

        return Ok(Samples {
            data,
            properties: SampleProperties::default(),
        });
    }

    /// Gives a reference to the contained data.
    ///
    /// Note that the data may be sorted or not (depending on
    /// calls to other methods).
    pub fn peek_data(&self) -> &[f64] {
        return &self.data;
    }

    /// Returns the contained data and drops self.
    pub fn get_data(self) -> Vec<f64> {
        return self.data;
    }

    /// The number of samples.
    pub fn count(&self) -> usize {
        return self.data.len();
    }

    /// Returns a reference to the internal field that contains
    /// all computed statistics ([SampleProperties]).
    pub fn peek_properties(&self) -> &SampleProperties {
        return &self.properties;
    }

    /// Computes the sample [mean](https://en.wikipedia.org/wiki/Mean) and returns it.
    ///
    /// Returns [None] if there are no samples.
    pub fn mean(&mut self) -> Option<f64> {
        if self.properties.mean.is_some() {
            return self.properties.mean;
        }

        let n: usize = self.data.len();
        if n == 0 {
            return None;
        }

        let mean: f64 = self.data.iter().sum::<f64>() / n as f64;

        self.properties.mean = Some(mean);
        return Some(mean);
    }

    /// Computes the unbiased sample [variance](https://en.wikipedia.org/wiki/Variance)
    /// (divides by `n - 1`) and returns it.
    ///
    /// Returns [None] if there is not enough samples (0 or 1 samples only).
    pub fn variance(&mut self) -> Option<f64> {
        if self.properties.variance.is_some() {
            return self.properties.variance;
        }

        let n: usize = self.data.len();
        if n < 2 {
            return None;
        }

        let mean: f64 = self.mean()?;
        let sum_sq: f64 = self.sum_centered_powers(mean, 2);
        let variance: f64 = sum_sq / (n as f64 - 1.0);

        self.properties.variance = Some(variance);
        return Some(variance);
    }

    /// The population variance (divides by `n`).
    ///
    /// Returns [None] if there are no samples.
    pub fn population_variance(&mut self) -> Option<f64> {
        let n: usize = self.data.len();
        if n == 0 {
            return None;
        }
        if n == 1 {
            return Some(0.0);
        }

        let n: f64 = n as f64;
        return self.variance().map(|v: f64| v * (n - 1.0) / n);
    }

    /// Square root of [Samples::variance].
    pub fn standard_deviation(&mut self) -> Option<f64> {
        return self.variance().map(f64::sqrt);
    }

    /// Square root of [Samples::population_variance].
    pub fn population_standard_deviation(&mut self) -> Option<f64> {
        return self.population_variance().map(f64::sqrt);
    }

    /// Computes the sample [skewness](https://en.wikipedia.org/wiki/Skewness#Sample_skewness)
    /// and returns it.
    ///
    /// Returns [None] if there are less than 3 samples or they are all equal.
    pub fn skewness(&mut self) -> Option<f64> {
        if self.properties.skewness.is_some() {
            return self.properties.skewness;
        }

        let n: usize = self.data.len();
        if n < 3 {
            return None;
        }

        let mean: f64 = self.mean()?;
        let std_dev: f64 = self.standard_deviation()?;
        if std_dev == 0.0 {
            return None;
        }

        let n: f64 = n as f64;

        // `Sk = n / ((n - 1) * (n - 2) * s^3) * sumatory[ (x_i - m)^3 ] `
        let std_dev_cubed: f64 = std_dev * std_dev * std_dev;
        let skewness: f64 =
            self.sum_centered_powers(mean, 3) * (n / ((n - 1.0) * (n - 2.0) * std_dev_cubed));

        self.properties.skewness = Some(skewness);
        return Some(skewness);
    }

    /// Computes the sample [excess kurtosis](https://en.wikipedia.org/wiki/Kurtosis#Standard_unbiased_estimator)
    /// and returns it.
    ///
    /// Returns [None] if there are less than 4 samples or they are all equal.
    pub fn excess_kurtosis(&mut self) -> Option<f64> {
        /*
           Ex_k = (n+1)*n / ((n-1)*(n-2)*(n-3)) * sumatory[ (x_i - m)^4 ] / var^2 - 3*(n-1)^2 / ((n-2)*(n-3))
        */

        if self.properties.excess_kurtosis.is_some() {
            return self.properties.excess_kurtosis;
        }

        let n: usize = self.data.len();
        if n < 4 {
            return None;
        }

        let mean: f64 = self.mean()?;
        let variance: f64 = self.variance()?;
        if variance == 0.0 {
            return None;
        }

        let n: f64 = n as f64;
        let coef_1: f64 = ((n + 1.0) * n) / ((n - 1.0) * (n - 2.0) * (n - 3.0));
        let coef_2: f64 = -3.0 * (n - 1.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0));

        let kurtosis: f64 = coef_1 * self.sum_centered_powers(mean, 4) / (variance * variance);
        let excess_kurtosis: f64 = kurtosis + coef_2;

        self.properties.excess_kurtosis = Some(excess_kurtosis);
        return Some(excess_kurtosis);
    }

    /// Returns the minimum among the data.
    ///
    /// Returns `None` if there are 0 samples. If the data is already sorted,
    /// returns in constant time. Otherwise it's `O(n)` (does not sort the data).
    pub fn minimum(&mut self) -> Option<f64> {
        if self.properties.minimum.is_some() {
            return self.properties.minimum;
        }

        let min: Option<f64> = if self.properties.is_sorted {
            self.data.first().copied()
        } else {
            self.data.iter().copied().reduce(f64::min)
        };

        self.properties.minimum = min;
        return min;
    }

    /// Returns the maximum among the data.
    ///
    /// Returns `None` if there are 0 samples. If the data is already sorted,
    /// returns in constant time. Otherwise it's `O(n)` (does not sort the data).
    pub fn maximum(&mut self) -> Option<f64> {
        if self.properties.maximum.is_some() {
            return self.properties.maximum;
        }

        let max: Option<f64> = if self.properties.is_sorted {
            self.data.last().copied()
        } else {
            self.data.iter().copied().reduce(f64::max)
        };

        self.properties.maximum = max;
        return max;
    }

    /// Forces to sort the internal data if it is not sorted already.
    #[inline]
    pub fn sort_data(&mut self) {
        if self.properties.is_sorted {
            return;
        }

        // all values are finite, total_cmp is the same as partial_cmp
        self.data.sort_unstable_by(f64::total_cmp);

        self.properties.is_sorted = true;
    }

    /// Returns the quantile.
    ///
    /// Sorts the data if it is not sorted already. Returns `None` if data
    /// is empty. If `q <= 0.0` returns a the smallest value in data.
    /// If `1.0 <= q` returns a the greatest value in data. A NaN `q` returns `None`.
    pub fn quantile(&mut self, q: f64) -> Option<f64> {
        if q.is_nan() {
            return None;
        }

        self.sort_data();

        let n: usize = self.data.len();
        if n == 0 {
            return None;
        }

        let q: f64 = q.clamp(0.0, 1.0);

        // [nearest rank method](https://en.wikipedia.org/wiki/Percentile#The_nearest-rank_method)
        // adapted to work with quantiles: rank = ceil(q * n), 1 based.
        let rank: usize = ((n as f64) * q).ceil() as usize;
        let index: usize = rank.saturating_sub(1).min(n - 1);

        return self.data.get(index).copied();
    }

    /// Builds a [Summary] of the data.
    ///
    /// Returns [SamplerError::NotEnoughSamples] if there are no samples.
    pub fn summary(&mut self) -> Result<Summary, SamplerError> {
        let mean: f64 = self.mean().ok_or(SamplerError::NotEnoughSamples)?;
        let standard_deviation: f64 = self
            .population_standard_deviation()
            .ok_or(SamplerError::NotEnoughSamples)?;
        let sample_standard_deviation: Option<f64> = self.standard_deviation();
        let minimum: f64 = self.minimum().ok_or(SamplerError::NotEnoughSamples)?;
        let maximum: f64 = self.maximum().ok_or(SamplerError::NotEnoughSamples)?;

        return Ok(Summary {
            count: self.data.len(),
            mean,
            standard_deviation,
            sample_standard_deviation,
            minimum,
            maximum,
        });
    }

    fn sum_centered_powers(&self, mean: f64, power: i32) -> f64 {
        return self.data.iter().map(|&s| (s - mean).powi(power)).sum::<f64>();
    }
}

impl fmt::Display for Summary {
    /// Mean and standard deviation with 4 decimals, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mean: {:.4}", self.mean)?;
        write!(f, "Standard Deviation: {:.4}", self.standard_deviation)
    }
}

/// Computes the two-sample [Kolmogorov-Smirnov statistic](https://en.wikipedia.org/wiki/Kolmogorov%E2%80%93Smirnov_test#Two-sample_Kolmogorov%E2%80%93Smirnov_test):
/// the largest absolute difference between the empirical cdfs of `a` and `b`.
///
/// The result is in `[0.0, 1.0]`; values close to 0 mean that both samples look
/// like they come from the same distribution.
///
/// Returns [SamplerError::NotEnoughSamples] if any of them is empty.
pub fn ks_statistic(a: &mut Samples, b: &mut Samples) -> Result<f64, SamplerError> {
    let n_a: usize = a.count();
    let n_b: usize = b.count();
    if n_a == 0 || n_b == 0 {
        return Err(SamplerError::NotEnoughSamples);
    }

    a.sort_data();
    b.sort_data();

    let data_a: &[f64] = a.peek_data();
    let data_b: &[f64] = b.peek_data();
    let inv_n_a: f64 = 1.0 / n_a as f64;
    let inv_n_b: f64 = 1.0 / n_b as f64;

    let (mut i, mut j): (usize, usize) = (0, 0);
    let mut max_distance: f64 = 0.0;

    while i < n_a && j < n_b {
        let x: f64 = data_a[i].min(data_b[j]);
        // advance trough all the values equal to x (ties) in both samples
        while i < n_a && data_a[i] <= x {
            i += 1;
        }
        while j < n_b && data_b[j] <= x {
            j += 1;
        }

        let distance: f64 = (i as f64 * inv_n_a - j as f64 * inv_n_b).abs();
        if max_distance < distance {
            max_distance = distance;
        }
    }

    return Ok(max_distance);
}
