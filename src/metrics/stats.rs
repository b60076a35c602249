use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::SampleRecord;

/// How the sector-counter extrema are tracked across samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExtremaPolicy {
    /// Running minimum, with the maximum recomputed every sample as
    /// `max(sample, min)` against the minimum just updated. Equals the true
    /// column maximum only while the counter never goes backwards.
    #[default]
    Reference,
    /// Two independent running extrema.
    Independent,
}

/// Running extrema for one pass over the samples.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReductionState {
    pub seconds_elapsed_max: f64,
    pub size_logged_max: f64,
    /// Unset until the first sample.
    pub sectors_written_min: Option<f64>,
    /// Unset until the first sample.
    pub sectors_written_max: Option<f64>,
}

impl ReductionState {
    pub fn fold(&mut self, sample: &SampleRecord, policy: ExtremaPolicy) {
        self.seconds_elapsed_max = self.seconds_elapsed_max.max(sample.seconds_elapsed);
        self.size_logged_max = self.size_logged_max.max(sample.size_logged);

        let sectors = sample.sectors_written;
        let min = match self.sectors_written_min {
            Some(prev) => sectors.min(prev),
            None => sectors,
        };
        self.sectors_written_min = Some(min);

        self.sectors_written_max = Some(match policy {
            ExtremaPolicy::Reference => {
                if let Some(prev) = self.sectors_written_max {
                    if sectors < prev {
                        warn!(
                            previous = prev,
                            current = sectors,
                            "sectors_written went backwards; wear reflects the last sample only"
                        );
                    }
                }
                sectors.max(min)
            }
            ExtremaPolicy::Independent => match self.sectors_written_max {
                Some(prev) => sectors.max(prev),
                None => sectors,
            },
        });
    }

    /// Sectors written over the run, `None` before the first sample.
    pub fn sectors_written(&self) -> Option<f64> {
        Some(self.sectors_written_max? - self.sectors_written_min?)
    }
}
