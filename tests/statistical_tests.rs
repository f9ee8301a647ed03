//! Checks that the generated values follow the expected distributions.
//!
//! ***
//!
//! Note that all of these tests are **probabilistic**. A fixed seed is used so
//! they are reproducible, and the tolerances are several standard errors wide.
//!

use TDistributionGenerator::{
    density::KernelDensity,
    distribution_trait::Distribution,
    distributions::{Normal::STD_NORMAL, StudentT::StudentT},
    generator::{SampleSet, generate},
    samples::{Samples, ks_statistic},
};
use assert_approx_eq::assert_approx_eq;
use rand::{SeedableRng, rngs::StdRng};

fn t_samples(seed: u64, degrees_of_freedom: u32, n: usize) -> Samples {
    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    let set: SampleSet = generate(&mut rng, degrees_of_freedom, n).expect("Parameters are valid. ");
    let (_, t): (Vec<f64>, Vec<f64>) = set.into_parts();
    return Samples::new_move(t).expect("Values are finite. ");
}

#[test]
fn mean_is_close_to_zero() {
    for (seed, dof) in [(1_u64, 3_u32), (2, 5), (3, 10), (4, 30)] {
        let mut samples: Samples = t_samples(seed, dof, 20_000);
        let mean: f64 = samples.mean().unwrap();
        assert!(mean.abs() < 0.06, "dof: {dof}, mean: {mean}");
    }
}

#[test]
fn variance_is_close_to_theoretical() {
    // (seed, degrees of freedom, relative tolerance)
    for (seed, dof, tolerance) in [(10_u64, 5_u32, 0.15), (11, 10, 0.1), (12, 30, 0.08)] {
        let mut samples: Samples = t_samples(seed, dof, 50_000);
        let variance: f64 = samples.variance().unwrap();

        let theoretical: f64 = StudentT::new(f64::from(dof)).unwrap().variance().unwrap();
        assert_approx_eq!(theoretical, f64::from(dof) / (f64::from(dof) - 2.0), 1e-12);

        let relative_error: f64 = (variance - theoretical).abs() / theoretical;
        assert!(
            relative_error < tolerance,
            "dof: {dof}, variance: {variance}, expected: {theoretical}"
        );
    }
}

#[test]
fn normal_samples_are_standard() {
    let mut rng: StdRng = StdRng::seed_from_u64(21);
    let set: SampleSet = generate(&mut rng, 4, 20_000).expect("Parameters are valid. ");
    let mut normal: Samples = Samples::new(set.normal_samples()).unwrap();

    assert!(normal.mean().unwrap().abs() < 0.05);
    assert!((normal.variance().unwrap() - 1.0).abs() < 0.05);
    assert!(normal.skewness().unwrap().abs() < 0.1);
    assert!(normal.excess_kurtosis().unwrap().abs() < 0.2);
}

#[test]
fn many_degrees_of_freedom_look_normal() {
    let mut rng: StdRng = StdRng::seed_from_u64(200);
    let set: SampleSet = generate(&mut rng, 200, 5000).expect("Parameters are valid. ");
    let mut t: Samples = Samples::new(set.t_samples()).unwrap();
    let mut paired_normal: Samples = Samples::new(set.normal_samples()).unwrap();

    // against its own normal values
    let d: f64 = ks_statistic(&mut t, &mut paired_normal).unwrap();
    assert!(d < 0.03, "KS distance: {d}");

    // against independent normal values
    let mut independent: Samples =
        Samples::new_move(STD_NORMAL.sample_multiple(&mut rng, 5000)).unwrap();
    let d: f64 = ks_statistic(&mut t, &mut independent).unwrap();
    assert!(d < 0.05, "KS distance: {d}");
}

#[test]
fn one_degree_of_freedom_does_not_look_normal() {
    let mut rng: StdRng = StdRng::seed_from_u64(1);
    let set: SampleSet = generate(&mut rng, 1, 5000).expect("Parameters are valid. ");
    let mut t: Samples = Samples::new(set.t_samples()).unwrap();
    let mut independent: Samples =
        Samples::new_move(STD_NORMAL.sample_multiple(&mut rng, 5000)).unwrap();

    // sup |Cauchy cdf - normal cdf| is about 0.09
    let d: f64 = ks_statistic(&mut t, &mut independent).unwrap();
    assert!(0.05 < d, "KS distance: {d}");
}

#[test]
fn quantiles_match_t_table() {
    // 0.975 quantile of a t with 10 degrees of freedom: 2.228
    let mut samples: Samples = t_samples(31, 10, 50_000);
    let q: f64 = samples.quantile(0.975).unwrap();
    assert!((q - 2.228).abs() < 0.08, "quantile: {q}");

    let q: f64 = samples.quantile(0.025).unwrap();
    assert!((q + 2.228).abs() < 0.08, "quantile: {q}");
}

#[test]
fn kde_follows_the_pdf() {
    let mut rng: StdRng = StdRng::seed_from_u64(40);
    let set: SampleSet = generate(&mut rng, 10, 50_000).expect("Parameters are valid. ");
    let kde: KernelDensity = KernelDensity::new(set.t_samples()).unwrap();
    let t: StudentT = StudentT::new(10.0).unwrap();

    for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
        let estimated: f64 = kde.evaluate(x);
        let expected: f64 = t.pdf(x);
        assert!(
            (estimated - expected).abs() < 0.03,
            "x: {x}, kde: {estimated}, pdf: {expected}"
        );
    }
}

#[test]
fn student_t_sampler_matches_generator() {
    // StudentT::sample_multiple draws in the same order as `generate`
    let mut rng_a: StdRng = StdRng::seed_from_u64(55);
    let mut rng_b: StdRng = StdRng::seed_from_u64(55);

    let set: SampleSet = generate(&mut rng_a, 6, 300).expect("Parameters are valid. ");
    let from_distribution: Vec<f64> = StudentT::new(6.0).unwrap().sample_multiple(&mut rng_b, 300);

    assert_eq!(set.t_samples(), from_distribution.as_slice());
}
