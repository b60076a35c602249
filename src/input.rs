//! CSV ingestion of disk activity samples.
//!
//! The first record is a header. The three required columns are located by
//! name, so their order is free and any other columns are ignored. When a
//! name appears more than once the last occurrence wins.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};
use tracing::debug;

use crate::error::{WearError, WearResult};
use crate::types::SampleRecord;

pub const SECONDS_ELAPSED: &str = "seconds_elapsed";
pub const SIZE_LOGGED: &str = "size_logged";
pub const SECTORS_WRITTEN: &str = "sectors_written";

const IN_MEMORY: &str = "<reader>";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Columns {
    seconds_elapsed: Option<usize>,
    size_logged: Option<usize>,
    sectors_written: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name)
                .map(|(i, _)| i)
                .last()
        };
        Self {
            seconds_elapsed: find(SECONDS_ELAPSED),
            size_logged: find(SIZE_LOGGED),
            sectors_written: find(SECTORS_WRITTEN),
        }
    }
}

/// Lazy iterator over the data rows of a sample log.
///
/// Yields at most one error; iteration stops after it.
pub struct SampleReader<R> {
    path: PathBuf,
    columns: Columns,
    records: StringRecordsIntoIter<R>,
    row: u64,
    failed: bool,
}

impl SampleReader<File> {
    pub fn open(path: impl AsRef<Path>) -> WearResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => WearError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => WearError::InputUnreadable {
                path: path.to_path_buf(),
                source,
            },
        })?;
        debug!(path = %path.display(), "opened sample log");
        Self::with_path(file, path.to_path_buf())
    }
}

impl<R: Read> SampleReader<R> {
    pub fn from_reader(reader: R) -> WearResult<Self> {
        Self::with_path(reader, PathBuf::from(IN_MEMORY))
    }

    fn with_path(reader: R, path: PathBuf) -> WearResult<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Fields)
            .from_reader(reader);
        let headers = rdr
            .headers()
            .map_err(|err| csv_error(&path, 0, err))?
            .clone();
        let columns = Columns::locate(&headers);
        debug!(?columns, header = ?headers, "located sample columns");
        Ok(Self {
            path,
            columns,
            records: rdr.into_records(),
            row: 0,
            failed: false,
        })
    }

    fn parse(&self, record: &StringRecord) -> WearResult<SampleRecord> {
        Ok(SampleRecord {
            seconds_elapsed: self.field(record, SECONDS_ELAPSED, self.columns.seconds_elapsed)?,
            size_logged: self.field(record, SIZE_LOGGED, self.columns.size_logged)?,
            sectors_written: self.field(record, SECTORS_WRITTEN, self.columns.sectors_written)?,
        })
    }

    fn field(&self, record: &StringRecord, name: &str, index: Option<usize>) -> WearResult<f64> {
        let index =
            index.ok_or_else(|| WearError::malformed(self.row, name, "column missing from header"))?;
        let raw = record
            .get(index)
            .ok_or_else(|| WearError::malformed(self.row, name, "missing value"))?;
        raw.parse::<f64>()
            .map_err(|_| WearError::malformed(self.row, name, format!("not a number: {raw:?}")))
    }
}

impl<R: Read> Iterator for SampleReader<R> {
    type Item = WearResult<SampleRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = match self.records.next()? {
            Ok(record) => {
                self.row += 1;
                self.parse(&record)
            }
            Err(err) => Err(csv_error(&self.path, self.row + 1, err)),
        };
        self.failed = item.is_err();
        Some(item)
    }
}

fn csv_error(path: &Path, row: u64, err: csv::Error) -> WearError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => WearError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        },
        _ => WearError::MalformedRecord {
            row,
            field: None,
            reason,
        },
    }
}
