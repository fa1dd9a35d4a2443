use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use csv::{ReaderBuilder, WriterBuilder};

/// Column stamped onto every record at append time.
pub const TIMESTAMP_COLUMN: &str = "Timestamp";
/// Local-clock format used for the timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One flattened record destined for an append-only log.
///
/// Field order is significant: the first record written to a log fixes
/// the column layout, and later records' novel fields become trailing
/// columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerRecord {
    fields: Vec<(String, String)>,
}

impl LedgerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append; overwrites the value if the name is already
    /// present.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: String, value: String) {
        match self
            .fields
            .iter_mut()
            .find(|(existing, _)| *existing == name)
        {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Storage contract for append-only intake logs.
///
/// Implementations stamp the timestamp column before the record becomes
/// durable; a successful return means the row is readable by the next
/// loader. There is no update or delete path.
pub trait RecordLedger: Send + Sync {
    fn append(&self, log: &str, record: LedgerRecord) -> Result<(), LedgerError>;
}

/// Error enumeration for ledger failures.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("failed to read intake log {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("intake log {path} is malformed: {source}")]
    Malformed { path: PathBuf, source: csv::Error },
    #[error("failed to write intake log {path}: {source}")]
    Write { path: PathBuf, source: csv::Error },
}

/// Rows currently stored in one log, column layout included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Outcome of loading a log. A missing file is the normal first-write
/// condition; every other failure surfaces to the caller.
enum StoredLog {
    Absent,
    Present(LedgerSnapshot),
}

/// CSV-backed ledger keeping one `<log>.csv` file per record category.
///
/// Appends on one ledger are serialized by an internal mutex, so the
/// read-union-rewrite cycle is not a lost-update race within a single
/// process. The rewritten file replaces the log via a rename, so readers
/// never observe a partially written state.
#[derive(Debug)]
pub struct CsvLedger {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvLedger {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read back the current contents of a log; `None` if never written.
    pub fn snapshot(&self, log: &str) -> Result<Option<LedgerSnapshot>, LedgerError> {
        match load(&self.log_path(log))? {
            StoredLog::Absent => Ok(None),
            StoredLog::Present(snapshot) => Ok(Some(snapshot)),
        }
    }

    fn log_path(&self, log: &str) -> PathBuf {
        self.root.join(format!("{log}.csv"))
    }
}

impl RecordLedger for CsvLedger {
    fn append(&self, log: &str, record: LedgerRecord) -> Result<(), LedgerError> {
        let _serialized = self.write_lock.lock().expect("ledger mutex poisoned");

        let path = self.log_path(log);
        let mut snapshot = match load(&path)? {
            StoredLog::Absent => LedgerSnapshot::default(),
            StoredLog::Present(snapshot) => snapshot,
        };

        let mut record = record;
        record.set(
            TIMESTAMP_COLUMN.to_string(),
            Local::now().format(TIMESTAMP_FORMAT).to_string(),
        );

        for (name, _) in record.fields() {
            if !snapshot.columns.iter().any(|column| column == name) {
                snapshot.columns.push(name.clone());
            }
        }

        let row = snapshot
            .columns
            .iter()
            .map(|column| record.value(column).unwrap_or_default().to_string())
            .collect();
        snapshot.rows.push(row);

        persist(&self.root, &path, &snapshot)
    }
}

fn load(path: &Path) -> Result<StoredLog, LedgerError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) if source.kind() == ErrorKind::NotFound => return Ok(StoredLog::Absent),
        Err(source) => {
            return Err(LedgerError::Open {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let malformed = |source: csv::Error| LedgerError::Malformed {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new().from_reader(file);
    let columns = reader
        .headers()
        .map_err(malformed)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let row = result.map_err(malformed)?;
        rows.push(row.iter().map(str::to_string).collect());
    }

    Ok(StoredLog::Present(LedgerSnapshot { columns, rows }))
}

fn persist(root: &Path, path: &Path, snapshot: &LedgerSnapshot) -> Result<(), LedgerError> {
    let write_failed = |source: csv::Error| LedgerError::Write {
        path: path.to_path_buf(),
        source,
    };

    fs::create_dir_all(root).map_err(|source| write_failed(source.into()))?;

    let staging = path.with_extension("csv.tmp");
    let mut writer = WriterBuilder::new()
        .from_path(&staging)
        .map_err(write_failed)?;

    writer.write_record(&snapshot.columns).map_err(write_failed)?;
    for row in &snapshot.rows {
        // rows written before a column was introduced are padded out
        let mut padded = row.clone();
        padded.resize(snapshot.columns.len(), String::new());
        writer.write_record(&padded).map_err(write_failed)?;
    }
    writer
        .flush()
        .map_err(|source| write_failed(source.into()))?;
    drop(writer);

    fs::rename(&staging, path).map_err(|source| write_failed(source.into()))
}
