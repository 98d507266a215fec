//! Configuration for k-d tree construction and search.
use serde::de::Error;

use crate::error::{KdTreeError, Result};

/// Order in which nearest-neighbor search visits the two children of a node.
///
/// Both orders return a correct nearest point; they differ only in how early
/// the champion tightens and therefore how much gets pruned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchOrder {
    /// Visit the child on the same side of the split as the query point first.
    #[default]
    QuerySideFirst,
    /// Always visit the lower (left/bottom) child first.
    LowerFirst,
}

/// Index configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub nearest_order: SearchOrder,

    /// Tree height above which a degenerate insertion order is reported.
    /// `None` disables the warning.
    #[serde(default = "Config::default_depth_warning")]
    pub depth_warning: Option<usize>,
}

impl Config {
    const fn default_depth_warning() -> Option<usize> {
        Some(64)
    }

    pub fn with_nearest_order(mut self, order: SearchOrder) -> Self {
        self.nearest_order = order;
        self
    }

    pub fn with_depth_warning(mut self, height: usize) -> Self {
        assert!(height > 0, "Depth warning threshold must be greater than zero");

        if height > 100_000 {
            log::warn!(
                "Depth warning threshold of {} is larger than recursion can comfortably reach",
                height
            );
        }

        self.depth_warning = Some(height);
        self
    }

    pub fn without_depth_warning(mut self) -> Self {
        self.depth_warning = None;
        self
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(height) = self.depth_warning
            && height == 0
        {
            return Err("Depth warning threshold must be greater than zero".to_string());
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(toml_str).map_err(|e| KdTreeError::Toml(e.to_string()))?;
        config.validate().map_err(KdTreeError::InvalidConfig)?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| KdTreeError::Toml(e.to_string()))
    }

    /// Validate and convert into the crate error type.
    pub(crate) fn checked(self) -> Result<Self> {
        self.validate().map_err(KdTreeError::InvalidConfig)?;
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nearest_order: SearchOrder::default(),
            depth_warning: Self::default_depth_warning(),
        }
    }
}
