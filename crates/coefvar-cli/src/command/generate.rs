use std::path::PathBuf;

use coefvar_data::generate::PopulationModel;
use rand::Rng as _;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Number of records to generate
    #[arg(long, default_value_t = 1000)]
    records: usize,
    /// Seed for the random generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg {
        records,
        seed,
        output,
    } = arg;
    let seed = seed.unwrap_or_else(|| rand::rng().random());

    eprintln!("Generating {records} records (seed {seed})...");
    let dataset = PopulationModel::default().generate_seeded(*records, seed)?;

    let output = Output::create(output.as_deref())?;
    let destination = output.destination();
    output.emit("dataset", |writer| dataset.write_to(writer))?;

    eprintln!("Wrote {records} records to {destination}");
    Ok(())
}
