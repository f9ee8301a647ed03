//! This script contains the interface used to comunicate with the distributions.

use rand::Rng;

use crate::domain::ContinuousDomain;

/// The trait for the continuous distributions of this crate.
///
/// Unlike a global random generator, every sampling method receives the
/// random source explicitly. This way a seeded generator
/// (such as [rand::rngs::StdRng]) gives reproducible results.
///
/// None of the provided methods are guaranteed to work if the implemented [Distribution::pdf]
/// is NOT a [valid pdf](https://en.wikipedia.org/wiki/Probability_density_function).
/// So, it needs to fullfill:
///  - The function must be stricly non-negative
///  - The function must be real valued
///  - The function must have a total area of 1 under the curve.
pub trait Distribution {
    //Requiered methods:

    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density function) of the distribution at point `x`.
    ///
    /// Returns `0.0` outside of [Distribution::get_domain].
    fn pdf(&self, x: f64) -> f64;

    /// Returns a reference to the pdf [ContinuousDomain], wich indicates at wich points
    /// the pdf can be evaluated. The returned domain should be constant and not change.
    fn get_domain(&self) -> &ContinuousDomain;

    /// Draws a single random value of the distribution using `rng`.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;

    // Provided methods:

    /// Draws `n` independent values of the distribution.
    ///
    /// The deafult implementation just calls [Distribution::sample] `n` times.
    fn sample_multiple<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            ret.push(self.sample(rng));
        }
        return ret;
    }

    /// Evaluates the pdf at multiple points.
    fn pdf_multiple(&self, points: &[f64]) -> Vec<f64> {
        return points.iter().map(|&x| self.pdf(x)).collect::<Vec<f64>>();
    }

    /// The [expected value](https://en.wikipedia.org/wiki/Expected_value)
    /// (mean) of the distribution, or [None] if it is not defined.
    fn expected_value(&self) -> Option<f64>;

    /// The [variance](https://en.wikipedia.org/wiki/Variance) of the
    /// distribution, or [None] if it is not defined (or infinite).
    fn variance(&self) -> Option<f64>;

    /// The standard deviation (square root of [Distribution::variance]).
    fn standard_deviation(&self) -> Option<f64> {
        return self.variance().map(f64::sqrt);
    }
}
