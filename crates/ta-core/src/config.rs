//! Study configuration.

use crate::{CoreError, CoreResult, Metric};

/// Parameters of one attribution run.
///
/// Typically loaded from a TOML/JSON file by the application crate (with the
/// `serde` feature) and handed to `ta_batch::BatchRunner`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StudyConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Number of (start, end) crossing pairs drawn per trip when searching
    /// for the median path.  Must be at least 1; 3 or more gives a real
    /// median.
    pub sample_size: usize,

    /// Routing weight and attributed quantity.
    pub metric: Metric,

    /// Only the first `max_trips` trips are processed.  `None` processes all.
    pub max_trips: Option<usize>,

    /// Worker thread count passed to Rayon (feature `parallel` of
    /// `ta-batch`).  `None` uses all logical cores.
    pub num_threads: Option<usize>,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            seed:        0,
            sample_size: 3,
            metric:      Metric::TravelTime,
            max_trips:   None,
            num_threads: None,
        }
    }
}

impl StudyConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.sample_size == 0 {
            return Err(CoreError::Config("sample_size must be at least 1".into()));
        }
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be at least 1 when set".into()));
        }
        Ok(())
    }
}
