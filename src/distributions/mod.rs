// Continuous
pub mod ChiSquared;
pub mod Normal;
pub mod StudentT;
