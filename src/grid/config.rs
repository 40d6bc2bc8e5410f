//! Configuration types for the maze model.

use serde::{Deserialize, Serialize};

/// Maze configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Grid height in cells
    pub rows: usize,

    /// Grid width in cells
    pub columns: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 16,    // Classic competition maze
            columns: 16,
        }
    }
}

impl MazeConfig {
    /// Create a configuration for a square maze
    pub fn square(size: usize) -> Self {
        Self {
            rows: size,
            columns: size,
        }
    }

    /// Can every cell be addressed with the packed single-byte encoding?
    ///
    /// The packed coordinate carries one nibble per axis, so anything
    /// beyond 16x16 must use `CellCoord` slices instead of packed bytes.
    pub fn supports_packed_coords(&self) -> bool {
        self.rows <= 16 && self.columns <= 16
    }

    /// Number of horizontal edges the grid will allocate
    pub fn horizontal_edge_count(&self) -> usize {
        (self.rows + 1) * self.columns
    }

    /// Number of vertical edges the grid will allocate
    pub fn vertical_edge_count(&self) -> usize {
        self.rows * (self.columns + 1)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration error type
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(String),
    /// YAML parsing error
    #[error("Parse error: {0}")]
    Parse(String),
}
