//! Configuration system
//!
//! Every numeric threshold used by the eigen solver and the bounds selector
//! lives in [`FittingConfig`], so tools can tune fitting without touching code.

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        Self::from_str_with_format(&contents, path)
    }

    /// Parse configuration text, picking the format from the file extension in `path`
    fn from_str_with_format(contents: &str, path: &str) -> Result<Self, ConfigError> {
        if path.ends_with(".toml") {
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Serialize configuration text in the format implied by `path`
    fn to_string_with_format(&self, path: &str) -> Result<String, ConfigError> {
        if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = self.to_string_with_format(path)?;
        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is outside its valid range
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// # Fitting Configuration
///
/// Thresholds for the Jacobi eigen solver and for choosing between
/// candidate bounding volumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FittingConfig {
    /// Off-diagonal magnitude below which the Jacobi iteration has converged
    pub eigen_epsilon: f32,
    /// Maximum number of Jacobi sweeps
    pub eigen_max_sweeps: u32,
    /// Special shapes are only fitted when the smallest extent exceeds this
    pub flat_epsilon: f32,
    /// A special shape must have less than this fraction of the best volume
    pub special_volume_ratio: f32,
    /// A special shape must also beat the best volume by more than this
    pub special_volume_epsilon: f32,
    /// Largest/second-largest extent ratio at which the box is tested as a line segment
    pub line_segment_ratio: f32,
    /// The AABB is preferred when `ratio * volume(AABB) <= volume(box)`
    pub aabb_volume_ratio: f32,
}

impl Default for FittingConfig {
    fn default() -> Self {
        Self {
            eigen_epsilon: 1.0e-10,
            eigen_max_sweeps: 32,
            flat_epsilon: 1.0e-5,
            special_volume_ratio: 0.99,
            special_volume_epsilon: 1.0e-4,
            line_segment_ratio: 4.0,
            aabb_volume_ratio: 0.99,
        }
    }
}

impl Config for FittingConfig {}

impl FittingConfig {
    /// Check that every threshold is in its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.eigen_max_sweeps == 0 {
            return Err(ConfigError::InvalidValue {
                field: "eigen_max_sweeps",
                reason: "must be at least 1".to_string(),
            });
        }
        let non_negative = [
            ("eigen_epsilon", self.eigen_epsilon),
            ("flat_epsilon", self.flat_epsilon),
            ("special_volume_epsilon", self.special_volume_epsilon),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be non-negative, got {value}"),
                });
            }
        }
        let positive = [
            ("special_volume_ratio", self.special_volume_ratio),
            ("line_segment_ratio", self.line_segment_ratio),
            ("aabb_volume_ratio", self.aabb_volume_ratio),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be positive, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Load a configuration file and validate it
    pub fn load_validated(path: &str) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }
}
