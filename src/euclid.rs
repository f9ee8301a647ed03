//! Euclid contains uscefull math functions

use std::f64::consts::PI;

/// `1 / sqrt(2 * pi)`
pub const INV_SQRT_2_PI: f64 = 0.398942280401432677939946059934381868;

/// Lanczos approximation coeficients (`g = 7`, `n = 9`).
#[allow(clippy::excessive_precision)]
const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

const LANCZOS_G: f64 = 7.0;

/// The natural logarithm of the [gamma function](https://en.wikipedia.org/wiki/Gamma_function)
/// for `0.0 < x`.
///
/// Uses the [Lanczos approximation](https://en.wikipedia.org/wiki/Lanczos_approximation)
/// and the reflection formula for `x < 0.5`. Relative error is around `1e-15`.
pub fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection formula: gamma(x) * gamma(1 - x) = pi / sin(pi * x)
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x: f64 = x - 1.0;
    let mut sum: f64 = LANCZOS_COEFFICIENTS[0];
    for (i, &c) in LANCZOS_COEFFICIENTS[1..].iter().enumerate() {
        sum += c / (x + i as f64 + 1.0);
    }

    let t: f64 = x + LANCZOS_G + 0.5;
    return 0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + sum.ln();
}

/// The standard normal density at `x`. Used as the kernel of the kde.
#[inline]
pub fn gaussian_kernel(x: f64) -> f64 {
    return INV_SQRT_2_PI * (-0.5 * x * x).exp();
}

/// Integrates numerically the values `ys`, evaluated at the equally spaced
/// points `xs`, with the [trapezoidal rule](https://en.wikipedia.org/wiki/Trapezoidal_rule).
///
/// Returns `0.0` if there are less than 2 points.
pub fn trapezoid(xs: &[f64], ys: &[f64]) -> f64 {
    assert!(xs.len() == ys.len());

    return xs
        .windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| (x[1] - x[0]) * (y[0] + y[1]) * 0.5)
        .sum::<f64>();
}

/// Returns `n` equally spaced points from `start` to `end` (both inclusive).
///
/// If `n == 1` only `start` is returned.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }

    let step: f64 = (end - start) / (n - 1) as f64;
    let mut ret: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect::<Vec<f64>>();
    // avoid rounding errors on the last value
    ret[n - 1] = end;
    return ret;
}
