//! Data sources that supply raw record batches.
//!
//! The engine only depends on [`DataSource`]; transport and retry policy live behind it.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::core::{Record, Sale};
use crate::error::{Error, Result};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Supplies up to `max_size` records per call.
///
/// The returned order is unspecified. Failures surface as [`Error::DataUnavailable`].
pub trait DataSource
where
    Self: Send + Sync,
{
    fn fetch_batch(&self, max_size: usize) -> BoxFuture<'_, Result<Vec<Record>>>;
}

impl<S: DataSource + ?Sized> DataSource for Arc<S> {
    fn fetch_batch(&self, max_size: usize) -> BoxFuture<'_, Result<Vec<Record>>> {
        (**self).fetch_batch(max_size)
    }
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn fetch_batch(&self, max_size: usize) -> BoxFuture<'_, Result<Vec<Record>>> {
        (**self).fetch_batch(max_size)
    }
}

/// In-memory source that hands out the leading `max_size` records.
///
/// Counts every call, and can be switched to fail, so it doubles as a test stub.
#[derive(Debug, Default)]
pub struct StaticSource {
    records: Vec<Record>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl StaticSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn from_sales(sales: impl IntoIterator<Item = Sale>) -> Self {
        Self::new(sales.into_iter().map(Record::from).collect())
    }

    /// Number of `fetch_batch` calls observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl DataSource for StaticSource {
    fn fetch_batch(&self, max_size: usize) -> BoxFuture<'_, Result<Vec<Record>>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(Error::data_unavailable("static source is offline"));
            }

            Ok(self.records.iter().take(max_size).cloned().collect())
        })
    }
}

/// Reads a JSON array of sales from disk on every fetch.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonFileSource {
    fn fetch_batch(&self, max_size: usize) -> BoxFuture<'_, Result<Vec<Record>>> {
        Box::pin(async move {
            let raw = tokio::fs::read(&self.path).await.map_err(|err| {
                Error::data_unavailable(format!("failed to read {:?}: {err}", self.path))
            })?;
            let sales: Vec<Sale> = serde_json::from_slice(&raw).map_err(|err| {
                Error::data_unavailable(format!("failed to parse {:?}: {err}", self.path))
            })?;

            Ok(sales
                .into_iter()
                .take(max_size)
                .map(Record::from)
                .collect())
        })
    }
}
