//! Console version of the "T-Distribution Generator" tool.
//!
//! Generates the samples, prints a histogram of the t values next to the
//! theoretical density and shows the summary statistics.
//!
//! Run with `cargo run --example t_distribution`. Set `RUST_LOG=debug` to see
//! the library events.

use TDistributionGenerator::{
    density::{Histogram, KernelDensity},
    distribution_trait::Distribution,
    distributions::StudentT::StudentT,
    errors::SamplerError,
    session::{RegenerationPolicy, Report, SamplerSession},
};
use rand::{SeedableRng, rngs::StdRng};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Width (in characters) of the longest bar.
const BAR_WIDTH: f64 = 60.0;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn print_histogram(histogram: &Histogram, theoretical: &StudentT) {
    let max_density: f64 = histogram
        .densities()
        .iter()
        .copied()
        .fold(0.0, f64::max)
        .max(f64::MIN_POSITIVE);

    let centers: Vec<f64> = histogram.centers();
    let pdf_values: Vec<f64> = theoretical.pdf_multiple(&centers);

    println!("{:>8}  {:>7}  {:>7}", "center", "density", "pdf");
    for ((center, density), pdf) in centers.iter().zip(histogram.densities()).zip(&pdf_values) {
        let bar: usize = (density / max_density * BAR_WIDTH).round() as usize;
        println!(
            "{:>8.3}  {:>7.4}  {:>7.4}  {}",
            center,
            density,
            pdf,
            "#".repeat(bar)
        );
    }
}

fn print_report(report: &Report) -> Result<(), SamplerError> {
    println!("***********************************************************");
    println!("T-Distribution Histogram");

    let dof: f64 = f64::from(report.sample_set().degrees_of_freedom());
    let theoretical: StudentT = StudentT::new(dof)?;
    print_histogram(report.histogram(), &theoretical);

    // coarser view of the normal values
    let normal: Histogram = Histogram::with_default_bins(report.sample_set().normal_samples())?;
    println!(
        "Normal histogram: {} bins over [{:.3}, {:.3}]",
        normal.bins(),
        normal.edges()[0],
        normal.edges()[normal.bins()]
    );

    let kde: KernelDensity = KernelDensity::new(report.sample_set().t_samples())?;
    println!("KDE bandwidth: {:.4}", kde.bandwidth());
    println!("KDE at 0: {:.4} \t (pdf: {:.4})", kde.evaluate(0.0), theoretical.pdf(0.0));

    let (xs, ys): (Vec<f64>, Vec<f64>) = kde.default_grid();
    let (peak_x, peak_y): (f64, f64) = xs
        .iter()
        .copied()
        .zip(ys.iter().copied())
        .fold((0.0, f64::NEG_INFINITY), |best, p| if best.1 < p.1 { p } else { best });
    println!("KDE peak: {:.4} at x = {:.3}", peak_y, peak_x);

    for line in report.describe() {
        println!("{line}");
    }

    match theoretical.standard_deviation() {
        Some(s) => println!("Theoretical Standard Deviation: {:.4}", s),
        None => println!("Theoretical Standard Deviation: undefined"),
    }

    return Ok(());
}

fn main() -> Result<(), SamplerError> {
    init_tracing();

    println!("T-Distribution Generator\n");

    let mut session: SamplerSession<StdRng> = SamplerSession::builder()
        .rng(StdRng::seed_from_u64(2024))
        .policy(RegenerationPolicy::OnTrigger)
        .build();

    // Same as pressing "Generate" with the default inputs.
    let report: Report = session.trigger()?.clone();
    print_report(&report)?;

    // Heavier tails with fewer degrees of freedom.
    session.set_degrees_of_freedom(3)?;
    session.set_sample_count(5000)?;
    let report: Report = session.trigger()?.clone();
    print_report(&report)?;

    return Ok(());
}
