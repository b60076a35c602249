use serde::{Deserialize, Serialize};

/// Bytes per physical sector. The device counter is always interpreted in
/// 512-byte units.
pub const SECTOR_SIZE_BYTES: f64 = 512.0;

/// One row of the disk activity log.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    /// Offset of this sample from the start of the measurement, in seconds.
    pub seconds_elapsed: f64,
    /// Cumulative logical bytes logged so far.
    pub size_logged: f64,
    /// Cumulative physical sectors written, as reported by the device.
    pub sectors_written: f64,
}

impl SampleRecord {
    pub fn new(seconds_elapsed: f64, size_logged: f64, sectors_written: f64) -> Self {
        Self {
            seconds_elapsed,
            size_logged,
            sectors_written,
        }
    }

    /// Same sample with the byte and sector counters multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            seconds_elapsed: self.seconds_elapsed,
            size_logged: self.size_logged * factor,
            sectors_written: self.sectors_written * factor,
        }
    }
}

/// Final metrics of one reduction pass.
///
/// Only [`MetricsReducer::finish`](crate::metrics::reducer::MetricsReducer::finish)
/// builds one, after every sample has been folded in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ResultRecord {
    samples: u64,
    seconds_elapsed: f64,
    size_logged: f64,
    sectors_written: f64,
    bytes_written: f64,
    log_rate: f64,
    wear_rate: f64,
    savings: f64,
}

impl ResultRecord {
    pub(crate) fn derive(
        samples: u64,
        seconds_elapsed: f64,
        size_logged: f64,
        sectors_written: f64,
    ) -> Self {
        let bytes_written = sectors_written * SECTOR_SIZE_BYTES;
        let log_rate = size_logged / seconds_elapsed;
        let wear_rate = bytes_written / seconds_elapsed;
        Self {
            samples,
            seconds_elapsed,
            size_logged,
            sectors_written,
            bytes_written,
            log_rate,
            wear_rate,
            savings: (log_rate - wear_rate) / log_rate,
        }
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }

    pub fn seconds_elapsed(&self) -> f64 {
        self.seconds_elapsed
    }

    pub fn size_logged(&self) -> f64 {
        self.size_logged
    }

    pub fn sectors_written(&self) -> f64 {
        self.sectors_written
    }

    pub fn bytes_written(&self) -> f64 {
        self.bytes_written
    }

    /// Logical bytes logged per second.
    pub fn log_rate(&self) -> f64 {
        self.log_rate
    }

    /// Physical bytes written per second.
    pub fn wear_rate(&self) -> f64 {
        self.wear_rate
    }

    /// Fraction of the logical volume that never reached the device.
    /// Negative when the device wrote more than was logged.
    pub fn savings(&self) -> f64 {
        self.savings
    }

    pub fn savings_percent(&self) -> f64 {
        self.savings * 100.0
    }
}
