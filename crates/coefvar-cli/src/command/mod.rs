use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, generate::GenerateArg};

mod analyze;
mod generate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to do (defaults to `analyze` with default settings)
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compute grouped mean, standard deviation and coefficient of variation
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Write a synthetic population data file
    Generate(#[clap(flatten)] GenerateArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Analyze(AnalyzeArg::default())) {
        Mode::Analyze(arg) => analyze::run(&arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
    }
    Ok(())
}
