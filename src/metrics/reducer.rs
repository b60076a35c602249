use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{WearError, WearResult};
use crate::metrics::stats::{ExtremaPolicy, ReductionState};
use crate::types::{ResultRecord, SampleRecord};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReducerConfig {
    #[serde(default)]
    pub extrema: ExtremaPolicy,
}

/// Single-pass fold of disk activity samples into wear metrics.
///
/// Samples are observed in input order and never retained; only the running
/// extrema in [`ReductionState`] survive between calls. A [`ResultRecord`] is
/// produced once, by consuming the reducer in [`MetricsReducer::finish`].
#[derive(Clone, Debug, Default)]
pub struct MetricsReducer {
    cfg: ReducerConfig,
    state: ReductionState,
    samples: u64,
}

impl MetricsReducer {
    pub fn new(cfg: ReducerConfig) -> Self {
        Self {
            cfg,
            state: ReductionState::default(),
            samples: 0,
        }
    }

    pub fn state(&self) -> &ReductionState {
        &self.state
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn observe(&mut self, sample: &SampleRecord) {
        self.samples += 1;
        self.state.fold(sample, self.cfg.extrema);
        debug!(
            row = self.samples,
            seconds_elapsed = sample.seconds_elapsed,
            size_logged = sample.size_logged,
            sectors_written = sample.sectors_written,
            "sample folded"
        );
    }

    pub fn finish(self) -> WearResult<ResultRecord> {
        let Some(sectors_written) = self.state.sectors_written() else {
            return Err(WearError::EmptyInput);
        };
        let seconds_elapsed = self.state.seconds_elapsed_max;
        if seconds_elapsed == 0.0 {
            return Err(WearError::ZeroElapsedTime);
        }
        let result = ResultRecord::derive(
            self.samples,
            seconds_elapsed,
            self.state.size_logged_max,
            sectors_written,
        );
        if result.log_rate() == 0.0 {
            return Err(WearError::ZeroLogRate);
        }
        info!(
            samples = result.samples(),
            extrema = ?self.cfg.extrema,
            log_rate = result.log_rate(),
            wear_rate = result.wear_rate(),
            savings = result.savings(),
            "wear metrics computed"
        );
        Ok(result)
    }
}

/// Fold every sample and finish, stopping at the first failed sample.
pub fn reduce<I>(samples: I, cfg: ReducerConfig) -> WearResult<ResultRecord>
where
    I: IntoIterator<Item = WearResult<SampleRecord>>,
{
    let mut reducer = MetricsReducer::new(cfg);
    for sample in samples {
        reducer.observe(&sample?);
    }
    reducer.finish()
}
