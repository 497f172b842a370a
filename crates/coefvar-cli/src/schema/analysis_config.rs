use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Analysis settings read from a `--config` JSON file.
///
/// Every field is optional; missing fields fall back to the built-in defaults.
///
/// ```json
/// {
///   "input": "survey.txt",
///   "population": 2500,
///   "height": { "label": "HEIGHT (cm)", "width": 5.0 },
///   "weight": { "width": 2.5 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfigFile {
    /// Data file, relative to the config file's directory.
    pub input: Option<PathBuf>,
    pub population: Option<usize>,
    #[serde(default)]
    pub height: VariableConfigFile,
    #[serde(default)]
    pub weight: VariableConfigFile,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VariableConfigFile {
    pub label: Option<String>,
    pub width: Option<f64>,
}
