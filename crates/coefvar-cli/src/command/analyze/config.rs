use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    schema::analysis_config::{AnalysisConfigFile, VariableConfigFile},
    util,
};

use super::AnalyzeArg;

const DEFAULT_INPUT: &str = "dados_intervalados.txt";
const DEFAULT_POPULATION: usize = 1000;
const DEFAULT_HEIGHT: VariableDefaults = VariableDefaults {
    label: "ESTATURA (cm)",
    width: 8.0,
};
const DEFAULT_WEIGHT: VariableDefaults = VariableDefaults {
    label: "PESO (kg)",
    width: 4.0,
};

#[derive(Debug, Clone, Copy)]
struct VariableDefaults {
    label: &'static str,
    width: f64,
}

/// Fully resolved analysis settings.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AnalysisConfig {
    pub input: PathBuf,
    pub population: usize,
    pub height: VariableConfig,
    pub weight: VariableConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VariableConfig {
    pub label: String,
    pub width: f64,
}

impl AnalysisConfig {
    /// Resolves settings from the command line, the optional config file and
    /// the built-in defaults, in that order of precedence.
    pub(crate) fn resolve(arg: &AnalyzeArg) -> anyhow::Result<Self> {
        let (file, base_dir) = match &arg.config {
            Some(path) => {
                let file = util::read_json::<AnalysisConfigFile>(path)
                    .context("Failed to load analysis config")?;
                eprintln!("Using analysis config from {}", path.display());
                (file, path.parent().map(Path::to_path_buf))
            }
            None => (AnalysisConfigFile::default(), None),
        };
        Ok(Self::merge(arg, file, base_dir.as_deref()))
    }

    fn merge(arg: &AnalyzeArg, file: AnalysisConfigFile, base_dir: Option<&Path>) -> Self {
        let input = match (&arg.input, file.input) {
            (Some(input), _) => input.clone(),
            (None, Some(input)) => match base_dir {
                Some(dir) => dir.join(input),
                None => input,
            },
            (None, None) => PathBuf::from(DEFAULT_INPUT),
        };
        let population = arg
            .population
            .or(file.population)
            .unwrap_or(DEFAULT_POPULATION);

        Self {
            input,
            population,
            height: VariableConfig::merge(
                arg.height_label.as_deref(),
                arg.height_width,
                file.height,
                DEFAULT_HEIGHT,
            ),
            weight: VariableConfig::merge(
                arg.weight_label.as_deref(),
                arg.weight_width,
                file.weight,
                DEFAULT_WEIGHT,
            ),
        }
    }
}

impl VariableConfig {
    fn merge(
        label: Option<&str>,
        width: Option<f64>,
        file: VariableConfigFile,
        defaults: VariableDefaults,
    ) -> Self {
        Self {
            label: label
                .map(str::to_owned)
                .or(file.label)
                .unwrap_or_else(|| defaults.label.to_owned()),
            width: width.or(file.width).unwrap_or(defaults.width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::merge(
            &AnalyzeArg::default(),
            AnalysisConfigFile::default(),
            None,
        );
        assert_eq!(
            config,
            AnalysisConfig {
                input: PathBuf::from("dados_intervalados.txt"),
                population: 1000,
                height: VariableConfig {
                    label: "ESTATURA (cm)".to_owned(),
                    width: 8.0,
                },
                weight: VariableConfig {
                    label: "PESO (kg)".to_owned(),
                    width: 4.0,
                },
            }
        );
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = AnalysisConfigFile {
            input: Some(PathBuf::from("survey.txt")),
            population: Some(20),
            height: VariableConfigFile {
                label: Some("HEIGHT".to_owned()),
                width: None,
            },
            weight: VariableConfigFile {
                label: None,
                width: Some(2.5),
            },
        };
        let config = AnalysisConfig::merge(&AnalyzeArg::default(), file, Some(Path::new("conf")));

        assert_eq!(config.input, Path::new("conf").join("survey.txt"));
        assert_eq!(config.population, 20);
        assert_eq!(config.height.label, "HEIGHT");
        assert_eq!(config.height.width, 8.0);
        assert_eq!(config.weight.label, "PESO (kg)");
        assert_eq!(config.weight.width, 2.5);
    }

    #[test]
    fn test_command_line_overrides_file() {
        let arg = AnalyzeArg {
            input: Some(PathBuf::from("cli.txt")),
            population: Some(8),
            height_width: Some(4.0),
            weight_label: Some("MASS".to_owned()),
            ..AnalyzeArg::default()
        };
        let file = AnalysisConfigFile {
            input: Some(PathBuf::from("file.txt")),
            population: Some(20),
            height: VariableConfigFile {
                label: None,
                width: Some(5.0),
            },
            weight: VariableConfigFile {
                label: Some("WEIGHT".to_owned()),
                width: Some(3.0),
            },
        };
        let config = AnalysisConfig::merge(&arg, file, Some(Path::new("conf")));

        assert_eq!(config.input, PathBuf::from("cli.txt"));
        assert_eq!(config.population, 8);
        assert_eq!(config.height.width, 4.0);
        assert_eq!(config.weight.label, "MASS");
        assert_eq!(config.weight.width, 3.0);
    }

    #[test]
    fn test_config_file_rejects_unknown_fields() {
        let result = serde_json::from_str::<AnalysisConfigFile>(r#"{ "populaton": 10 }"#);
        assert!(result.is_err());
    }
}
