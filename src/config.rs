//! Analysis configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default results file name
pub const DEFAULT_FILE_NAME: &str = "output.json";

/// Default unit keyword stripped from every cell
pub const DEFAULT_UNIT: &str = "seconds";

/// Where to find the benchmark results and how to read their cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Directory holding the results file; empty means the current directory
    pub path_to_file: PathBuf,

    /// Name of the results file
    pub file_name: String,

    /// Unit keyword that follows every number
    pub unit: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            path_to_file: PathBuf::new(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Create a config with the default file name and unit
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory holding the results file
    pub fn with_path_to_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.path_to_file = path.into();
        self
    }

    /// Set the results file name
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Set the unit keyword
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Full path of the results file
    pub fn benchmark_file(&self) -> PathBuf {
        if self.path_to_file.as_os_str().is_empty() {
            Path::new(&self.file_name).to_path_buf()
        } else {
            self.path_to_file.join(&self.file_name)
        }
    }
}
