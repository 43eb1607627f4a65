//! Ranking controller: fetch or reuse a batch, sort, truncate, time, and search.
//!
//! A [`RankingController`] owns the request cache, the current [`RankedView`], and the
//! performance ledger. Each `rank` call walks the loading stages
//! `idle -> fetching -> generating -> idle`, skipping `fetching` on a cache hit.
//! A failed call leaves every piece of state as it was.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, broadcast, watch};

use crate::algo;
use crate::cache::{Batch, RequestCache};
use crate::config::Selection;
use crate::core::{Algorithm, Direction, Record};
use crate::error::{Error, Result};
use crate::ledger::{PerformanceEntry, PerformanceLedger};
use crate::search::{find_first, normalize};
use crate::source::DataSource;

/// Loading stage of the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Idle,
    Fetching,
    Generating,
}

/// The sorted, truncated result of the most recent ranking.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedView {
    pub records: Arc<[Arc<Record>]>,
    pub algorithm: Algorithm,
    pub direction: Direction,
    pub size: usize,
}

impl RankedView {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> Vec<u64> {
        self.records.iter().map(|record| record.id).collect()
    }
}

/// What a completed `rank` call produced.
#[derive(Clone, Debug)]
pub struct RankOutcome {
    pub view: RankedView,
    pub algorithm_duration: Duration,
    /// Zero when the batch came from the cache.
    pub fetch_duration: Duration,
    pub cache_hit: bool,
}

/// A search match within the full current view.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    pub record: Arc<Record>,
    pub position: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Visible {
    Full,
    Match(usize),
    NoMatch,
}

/// Buffered stage transitions per subscriber before the oldest are dropped.
const STAGE_TRANSITION_CAPACITY: usize = 16;

/// Publishes the current stage and every transition into it.
struct StageTracker {
    current: watch::Sender<Stage>,
    transitions: broadcast::Sender<Stage>,
}

impl StageTracker {
    fn new() -> Self {
        let (current, _) = watch::channel(Stage::Idle);
        let (transitions, _) = broadcast::channel(STAGE_TRANSITION_CAPACITY);

        Self {
            current,
            transitions,
        }
    }

    fn set(&self, stage: Stage) {
        if *self.current.borrow() == stage {
            return;
        }

        self.current.send_replace(stage);
        // No subscribers is fine.
        let _ = self.transitions.send(stage);
    }
}

/// Resets the stage to idle when dropped, including when a `rank` future is abandoned.
struct StageGuard<'a>(&'a StageTracker);

impl<'a> StageGuard<'a> {
    fn enter(tracker: &'a StageTracker, stage: Stage) -> Self {
        tracker.set(stage);
        Self(tracker)
    }

    fn advance(&self, stage: Stage) {
        self.0.set(stage);
    }
}

impl Drop for StageGuard<'_> {
    fn drop(&mut self) {
        self.0.set(Stage::Idle);
    }
}

/// Orchestrates cache, sort strategies, search, and timing history for one session.
pub struct RankingController<S> {
    source: S,
    cache: RequestCache,
    ledger: PerformanceLedger,
    view: Option<RankedView>,
    visible: Visible,
    search: Option<SearchResult>,
    algorithm_duration: Option<Duration>,
    fetch_duration: Option<Duration>,
    stage: StageTracker,
}

impl<S: DataSource> RankingController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RequestCache::new(),
            ledger: PerformanceLedger::new(),
            view: None,
            visible: Visible::Full,
            search: None,
            algorithm_duration: None,
            fetch_duration: None,
            stage: StageTracker::new(),
        }
    }

    /// Ranks the batch for `size` and replaces the current view.
    ///
    /// The batch comes from the cache when `size` was requested before, otherwise from the
    /// data source. Only the sort and truncate step is timed as the algorithm duration.
    /// Any active search filter is cleared.
    pub async fn rank(
        &mut self,
        size: usize,
        algorithm: Algorithm,
        direction: Direction,
    ) -> Result<RankOutcome> {
        if size == 0 {
            return Err(Error::InvalidSize { size });
        }

        let cached = self.cache.get(size);
        let stage = StageGuard::enter(
            &self.stage,
            if cached.is_some() {
                Stage::Generating
            } else {
                Stage::Fetching
            },
        );

        let (batch, fetch_duration, cache_hit) = match cached {
            Some(batch) => {
                tracing::debug!(size, len = batch.len(), "Ranking batch served from cache.");
                (batch, Duration::ZERO, true)
            }
            None => {
                let started = Instant::now();
                let records = self.source.fetch_batch(size).await?;
                let fetch_duration = started.elapsed();

                if records.len() > size {
                    tracing::warn!(
                        size,
                        len = records.len(),
                        "Data source returned more records than requested."
                    );
                }
                tracing::debug!(
                    size,
                    len = records.len(),
                    fetch_ms = fetch_duration.as_secs_f64() * 1000.0,
                    "Fetched ranking batch."
                );

                let batch: Batch = records.into_iter().map(Arc::new).collect();
                (self.cache.put(size, batch), fetch_duration, false)
            }
        };

        stage.advance(Stage::Generating);
        let started = Instant::now();
        let mut sorted = algo::sort(algorithm, &batch[..], direction);
        sorted.truncate(size);
        let algorithm_duration = started.elapsed();
        drop(stage);

        let view = RankedView {
            records: sorted.into(),
            algorithm,
            direction,
            size,
        };

        tracing::info!(
            %algorithm,
            %direction,
            size,
            len = view.len(),
            cache_hit,
            duration_ms = algorithm_duration.as_secs_f64() * 1000.0,
            "Generated ranking."
        );

        self.ledger.record(PerformanceEntry::new(
            algorithm,
            direction,
            size,
            algorithm_duration,
        ));
        self.algorithm_duration = Some(algorithm_duration);
        self.fetch_duration = Some(fetch_duration);
        self.view = Some(view.clone());
        self.visible = Visible::Full;
        self.search = None;

        Ok(RankOutcome {
            view,
            algorithm_duration,
            fetch_duration,
            cache_hit,
        })
    }

    /// Same as [`rank`](Self::rank), resolving the algorithm from a caller-supplied identifier.
    ///
    /// Unknown identifiers fall back to quicksort.
    pub async fn rank_by_id(
        &mut self,
        size: usize,
        algorithm: &str,
        direction: Direction,
    ) -> Result<RankOutcome> {
        self.rank(size, Algorithm::resolve(algorithm), direction).await
    }

    pub async fn rank_selection(&mut self, selection: Selection) -> Result<RankOutcome> {
        self.rank(selection.size, selection.algorithm, selection.direction).await
    }

    /// Finds the first record of the full current view whose name contains `query`.
    ///
    /// A blank query restores the full view and returns `None`. Otherwise the visible
    /// sequence narrows to the match, or to nothing when there is none.
    pub fn search(&mut self, query: &str) -> Option<SearchResult> {
        if normalize(query).is_none() {
            self.visible = Visible::Full;
            self.search = None;
            return None;
        }

        let found = self.view.as_ref().and_then(|view| {
            find_first(&view.records[..], query).map(|position| SearchResult {
                record: view.records[position].clone(),
                position,
            })
        });

        self.visible = match &found {
            Some(result) => Visible::Match(result.position),
            None => Visible::NoMatch,
        };
        self.search = found.clone();

        tracing::debug!(
            query,
            position = found.as_ref().map(|r| r.position),
            "Searched ranking."
        );

        found
    }

    /// The full view from the most recent successful `rank`, ignoring any search filter.
    pub fn current_view(&self) -> Option<&RankedView> {
        self.view.as_ref()
    }

    /// The records currently on display: the full view, the single match, or nothing.
    pub fn visible(&self) -> &[Arc<Record>] {
        let Some(view) = &self.view else {
            return &[];
        };

        match self.visible {
            Visible::Full => &view.records[..],
            Visible::Match(position) => &view.records[position..=position],
            Visible::NoMatch => &[],
        }
    }

    pub fn search_result(&self) -> Option<&SearchResult> {
        self.search.as_ref()
    }

    pub fn algorithm_duration(&self) -> Option<Duration> {
        self.algorithm_duration
    }

    pub fn fetch_duration(&self) -> Option<Duration> {
        self.fetch_duration
    }

    /// Ledger contents, newest first, at most three entries.
    pub fn history(&self) -> Vec<PerformanceEntry> {
        self.ledger.list()
    }

    pub fn stage(&self) -> Stage {
        *self.stage.current.borrow()
    }

    /// Latest stage only; intermediate stages may be coalesced.
    pub fn subscribe_stage(&self) -> watch::Receiver<Stage> {
        self.stage.current.subscribe()
    }

    /// Every stage transition in order, starting from the next one.
    pub fn stage_transitions(&self) -> broadcast::Receiver<Stage> {
        self.stage.transitions.subscribe()
    }

    pub fn cache(&self) -> &RequestCache {
        &self.cache
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

/// A controller shared between tasks, serializing every operation behind one lock.
pub struct SharedController<S> {
    inner: Arc<Mutex<RankingController<S>>>,
}

impl<S> Clone for SharedController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: DataSource> SharedController<S> {
    pub fn new(controller: RankingController<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Queues behind any ranking already in flight.
    pub async fn rank(
        &self,
        size: usize,
        algorithm: Algorithm,
        direction: Direction,
    ) -> Result<RankOutcome> {
        self.inner.lock().await.rank(size, algorithm, direction).await
    }

    /// Rejects with [`Error::Busy`] while another task holds the controller.
    pub async fn try_rank(
        &self,
        size: usize,
        algorithm: Algorithm,
        direction: Direction,
    ) -> Result<RankOutcome> {
        let mut controller = self.inner.try_lock().map_err(|_| Error::Busy)?;
        controller.rank(size, algorithm, direction).await
    }

    pub async fn search(&self, query: &str) -> Option<SearchResult> {
        self.inner.lock().await.search(query)
    }

    pub async fn history(&self) -> Vec<PerformanceEntry> {
        self.inner.lock().await.history()
    }

    /// Runs `f` with read access to the controller.
    pub async fn read<R>(&self, f: impl FnOnce(&RankingController<S>) -> R) -> R {
        f(&*self.inner.lock().await)
    }
}
