use std::io::{self, Write};

use coefvar_stats::grouped::GroupedStats;

const MAX_BAR_WIDTH: u64 = 50;

/// Statistics of every analyzed variable, ready to be printed.
#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct AnalysisReport {
    pub records: usize,
    pub variables: Vec<VariableReport>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct VariableReport {
    pub label: String,
    pub width: f64,
    #[serde(flatten)]
    pub stats: GroupedStats,
}

impl AnalysisReport {
    pub(crate) fn write_text<W>(&self, writer: &mut W, show_classes: bool) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        writeln!(writer, "Processando {} registros...", self.records)?;
        for variable in &self.variables {
            variable.write_text(writer)?;
            if show_classes {
                variable.write_classes(writer)?;
            }
        }
        Ok(())
    }
}

impl VariableReport {
    fn write_text<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        let summary = &self.stats.summary;
        writeln!(writer)?;
        writeln!(writer, "===== {} =====", self.label)?;
        writeln!(writer, "Média: {:.2}", summary.mean)?;
        writeln!(writer, "Desvio Padrão: {:.2}", summary.std_dev)?;
        writeln!(writer, "Coeficiente de Variação: {:.2}%", summary.cv)?;
        writeln!(writer, "Número de classes: {}", summary.num_classes)?;
        Ok(())
    }

    fn write_classes<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        let max_count = self
            .stats
            .classes
            .iter()
            .map(|class| class.frequency)
            .max()
            .unwrap_or(1)
            .max(1);

        writeln!(writer)?;
        for class in &self.stats.classes {
            let bar_width = usize::try_from(class.frequency * MAX_BAR_WIDTH / max_count)
                .unwrap_or_default();
            let range = format!("[{:.2}, {:.2})", class.lower, class.upper);
            writeln!(
                writer,
                "{range:>20} | {:<5} {}",
                class.frequency,
                "#".repeat(bar_width)
            )?;
        }
        Ok(())
    }
}
