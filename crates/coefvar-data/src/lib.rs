//! Population data for the coefvar analyzer
//!
//! - [`dataset`]: Load and write two-column (height, weight) data files
//! - [`generate`]: Draw synthetic populations from a seeded generator
//!
//! # Examples
//!
//! ```no_run
//! use coefvar_data::dataset::Dataset;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let dataset = Dataset::load("dados_intervalados.txt", 1000)?;
//! println!("Loaded {} records", dataset.len());
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod generate;
