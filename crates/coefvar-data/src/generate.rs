//! Synthetic population generation
//!
//! Produces datasets shaped like a real anthropometric survey, so the analyzer
//! can be exercised without a hand-made data file. Each variable is drawn from
//! a normal distribution, clamped to a plausible range and rounded to two
//! decimals (the precision the data file stores).
//!
//! # Examples
//!
//! ```
//! use coefvar_data::generate::PopulationModel;
//!
//! let model = PopulationModel::default();
//! let a = model.generate_seeded(1000, 42).unwrap();
//! let b = model.generate_seeded(1000, 42).unwrap();
//!
//! assert_eq!(a.len(), 1000);
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng as _};
use rand_distr::{Distribution as _, Normal, NormalError};
use rand_pcg::Pcg64;

use crate::dataset::Dataset;

/// Normal distribution of one variable, clamped to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariableModel {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl VariableModel {
    fn sampler(&self, variable: &'static str) -> Result<Normal<f64>, GenerateError> {
        Normal::new(self.mean, self.std_dev).map_err(|source| GenerateError { variable, source })
    }

    fn clamp(&self, value: f64) -> f64 {
        (value.clamp(self.min, self.max) * 100.0).round() / 100.0
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("invalid {variable} distribution: {source}")]
pub struct GenerateError {
    variable: &'static str,
    source: NormalError,
}

/// Distributions the heights (cm) and weights (kg) are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationModel {
    pub height: VariableModel,
    pub weight: VariableModel,
}

impl Default for PopulationModel {
    fn default() -> Self {
        Self {
            height: VariableModel {
                mean: 170.0,
                std_dev: 10.0,
                min: 120.0,
                max: 220.0,
            },
            weight: VariableModel {
                mean: 70.0,
                std_dev: 12.0,
                min: 35.0,
                max: 180.0,
            },
        }
    }
}

impl PopulationModel {
    /// Draws `records` individuals from `rng`.
    pub fn generate<R>(&self, records: usize, rng: &mut R) -> Result<Dataset, GenerateError>
    where
        R: Rng + ?Sized,
    {
        let height = self.height.sampler("height")?;
        let weight = self.weight.sampler("weight")?;

        let mut dataset = Dataset::default();
        for _ in 0..records {
            dataset.heights.push(self.height.clamp(height.sample(rng)));
            dataset.weights.push(self.weight.clamp(weight.sample(rng)));
        }
        Ok(dataset)
    }

    /// Draws `records` individuals from a PCG generator seeded with `seed`.
    ///
    /// The same seed always produces the same dataset.
    pub fn generate_seeded(&self, records: usize, seed: u64) -> Result<Dataset, GenerateError> {
        let mut rng = Pcg64::seed_from_u64(seed);
        self.generate(records, &mut rng)
    }
}
