//! Site configuration.
//!
//! Loaded from an optional JSON file; every field has a default so an empty
//! object (or no file at all) gives the stock birthday page.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TripError, TripResult};
use crate::game::DEFAULT_ANSWER;
use crate::markers;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Destination the guess game accepts
    pub answer: String,
    /// Number of decorative diamonds in the background
    pub marker_count: i64,
    pub marker_min_size: f64,
    pub marker_max_size: f64,
    /// Fixed RNG seed for the background layout (random when absent)
    pub seed: Option<u64>,
    /// Directory bundled images are served from
    pub asset_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            answer: DEFAULT_ANSWER.to_string(),
            marker_count: 18,
            marker_min_size: 12.0,
            marker_max_size: 28.0,
            seed: None,
            asset_dir: "assets".to_string(),
        }
    }
}

impl SiteConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> TripResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "Loaded site config");
        Ok(config)
    }

    /// Negative marker counts fail with [`TripError::InvalidArgument`],
    /// everything else with [`TripError::Config`].
    pub fn validate(&self) -> TripResult<()> {
        markers::checked_count(self.marker_count)?;
        if self.answer.trim().is_empty() {
            return Err(TripError::Config("answer must not be empty".into()));
        }
        let sizes_ok = self.marker_min_size.is_finite()
            && self.marker_max_size.is_finite()
            && self.marker_min_size > 0.0
            && self.marker_min_size <= self.marker_max_size;
        if !sizes_ok {
            return Err(TripError::Config(format!(
                "invalid marker size range {}..{}",
                self.marker_min_size, self.marker_max_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.answer, "高雄");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"marker_count": 4, "seed": 9}}"#).unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.marker_count, 4);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.answer, "高雄");
    }

    #[test]
    fn test_load_rejects_empty_answer() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"answer": ""}}"#).unwrap();

        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, TripError::Config(_)));
    }

    #[test]
    fn test_load_rejects_negative_marker_count() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"marker_count": -1}}"#).unwrap();

        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, TripError::InvalidArgument(_)));
    }

    #[test]
    fn test_load_rejects_bad_sizes() {
        let config = SiteConfig {
            marker_min_size: 40.0,
            marker_max_size: 10.0,
            ..SiteConfig::default()
        };
        assert!(matches!(config.validate(), Err(TripError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, TripError::Io(_)));
    }

    #[test]
    fn test_load_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(SiteConfig::load(file.path()), Err(TripError::Json(_))));
    }
}
