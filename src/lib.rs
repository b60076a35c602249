//! Storage-wear efficiency metrics.
//!
//! This crate reduces a time-series log of disk activity (elapsed seconds,
//! cumulative logical bytes logged, cumulative physical sectors written) into
//! three figures: the logical log rate, the physical wear rate, and the
//! fraction of wear saved by whatever write-reduction mechanism is under test.

pub mod error;
pub mod input;
pub mod metrics;
pub mod report;
pub mod types;

use std::path::Path;

pub use crate::error::{WearError, WearResult};
pub use crate::input::SampleReader;
pub use crate::metrics::reducer::{reduce, MetricsReducer, ReducerConfig};
pub use crate::metrics::stats::{ExtremaPolicy, ReductionState};
pub use crate::report::OutputFormat;
pub use crate::types::{ResultRecord, SampleRecord, SECTOR_SIZE_BYTES};

/// Read the sample log at `path` and reduce it in one pass.
pub fn analyze_file(path: impl AsRef<Path>, cfg: ReducerConfig) -> WearResult<ResultRecord> {
    reduce(SampleReader::open(path)?, cfg)
}
