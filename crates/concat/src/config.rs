//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Policy knobs for a [`ConcatEngine`](crate::ConcatEngine).
///
/// Every field has a default, so partial TOML or JSON documents load:
///
/// ```
/// use typed_concat::ConcatConfig;
///
/// let config: ConcatConfig = serde_json::from_str(r#"{"coalesce": false}"#).unwrap();
/// assert!(!config.coalesce);
/// assert_eq!(config.max_byte_length, ConcatConfig::default().max_byte_length);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConcatConfig {
    /// Largest destination, in bytes, the engine will plan for.
    pub max_byte_length: usize,
    /// Allow zero-copy results when inputs are adjacent slices of one backing.
    pub coalesce: bool,
    /// Defer the copy for results of at least this many bytes.
    pub lazy_threshold: Option<usize>,
}

impl Default for ConcatConfig {
    fn default() -> Self {
        Self {
            max_byte_length: isize::MAX as usize,
            coalesce: true,
            lazy_threshold: None,
        }
    }
}

impl ConcatConfig {
    /// Always copies eagerly into fresh storage.
    pub fn eager() -> Self {
        Self {
            coalesce: false,
            lazy_threshold: None,
            ..Self::default()
        }
    }

    pub fn with_max_byte_length(mut self, max_byte_length: usize) -> Self {
        self.max_byte_length = max_byte_length;
        self
    }

    pub fn with_coalesce(mut self, coalesce: bool) -> Self {
        self.coalesce = coalesce;
        self
    }

    pub fn with_lazy_threshold(mut self, lazy_threshold: Option<usize>) -> Self {
        self.lazy_threshold = lazy_threshold;
        self
    }
}
