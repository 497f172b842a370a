//! Grouped statistics report
//!
//! Loads a population data file and reports the grouped mean, standard
//! deviation and coefficient of variation of its heights and weights.

mod config;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use coefvar_data::dataset::Dataset;
use coefvar_stats::grouped::GroupedStats;

use crate::util::Output;

use self::{
    config::{AnalysisConfig, VariableConfig},
    report::{AnalysisReport, VariableReport},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    /// Data file with one "height weight" record per line [default: dados_intervalados.txt]
    pub input: Option<PathBuf>,
    /// Number of records to read [default: 1000]
    #[arg(long)]
    pub population: Option<usize>,
    /// Class interval width for heights [default: 8]
    #[arg(long)]
    pub height_width: Option<f64>,
    /// Class interval width for weights [default: 4]
    #[arg(long)]
    pub weight_width: Option<f64>,
    /// Report title for heights [default: "ESTATURA (cm)"]
    #[arg(long)]
    pub height_label: Option<String>,
    /// Report title for weights [default: "PESO (kg)"]
    #[arg(long)]
    pub weight_label: Option<String>,
    /// JSON file with analysis settings; command-line options take precedence
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of worker threads [default: one per CPU]
    #[arg(long)]
    pub threads: Option<usize>,
    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Also print the frequency table of each variable (text format only)
    #[arg(long)]
    pub show_classes: bool,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let config = AnalysisConfig::resolve(arg)?;

    if let Some(threads) = arg.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
        eprintln!("Using {threads} worker threads");
    }

    let dataset = Dataset::load(&config.input, config.population).with_context(|| {
        format!(
            "Failed to load {} records from {}",
            config.population,
            config.input.display()
        )
    })?;

    let variables = [
        (&config.height, dataset.heights.as_slice()),
        (&config.weight, dataset.weights.as_slice()),
    ]
    .into_iter()
    .map(|(variable, values)| analyze_variable(variable, values))
    .collect::<anyhow::Result<Vec<_>>>()?;

    let report = AnalysisReport {
        records: dataset.len(),
        variables,
    };

    let output = Output::create(arg.output.as_deref())?;
    match arg.format {
        OutputFormat::Text => output.emit("report", |writer| {
            report.write_text(writer, arg.show_classes)
        }),
        OutputFormat::Json => output.emit_json("report", &report),
    }
}

fn analyze_variable(variable: &VariableConfig, values: &[f64]) -> anyhow::Result<VariableReport> {
    let stats = GroupedStats::compute(values, variable.width).with_context(|| {
        format!(
            "Failed to compute statistics for {} (class width {})",
            variable.label, variable.width
        )
    })?;
    Ok(VariableReport {
        label: variable.label.clone(),
        width: variable.width,
        stats,
    })
}
