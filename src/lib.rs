//! # Salerank
//!
//! `salerank` ranks batches of sale records by their `total`, under a selectable sort algorithm
//! and direction, and lets callers locate a record by name within the ranked result.
//!
//! ## Key Features
//!
//! - **Interchangeable strategies**: QuickSort, BubbleSort, and MergeSort share one contract:
//!   copy the input, order it by `total`, never touch the caller's slice. See [`algo`].
//! - **Request cache**: A batch is fetched from the [`DataSource`] once per requested size and
//!   reused for every later ranking of that size.
//! - **Timing history**: Each ranking records how long the sort and truncate step took. The three
//!   most recent entries are kept, newest first.
//! - **Search**: Case-insensitive substring lookup over the names of the current ranking.
//!
//! ## Usage
//!
//! ### Sorting
//!
//! The strategies work on anything implementing [`Ranked`].
//!
//! ```rust
//! use salerank::prelude::*;
//!
//! let totals = vec![100.0, 500.0, 250.0];
//!
//! assert_eq!(bubble_sort(&totals, Direction::Ascending), vec![100.0, 250.0, 500.0]);
//! assert_eq!(merge_sort(&totals, Direction::Descending), vec![500.0, 250.0, 100.0]);
//! ```
//!
//! ### Ranking
//!
//! ```rust
//! use salerank::prelude::*;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let source = StaticSource::new(vec![
//!     Record::new(1, 100.0, "Loja Alfa"),
//!     Record::new(2, 500.0, "Master Gama SS"),
//!     Record::new(3, 250.0, "Comercial Beta"),
//! ]);
//! let mut controller = RankingController::new(source);
//!
//! let outcome = controller
//!     .rank(10, Algorithm::QuickSort, Direction::Descending)
//!     .await
//!     .unwrap();
//! assert_eq!(outcome.view.ids(), vec![2, 3, 1]);
//!
//! let hit = controller.search("gama").unwrap();
//! assert_eq!(hit.position, 0);
//! # });
//! ```
//!
//! ## Performance Characteristics
//!
//! - **QuickSort**: O(N log N) on average, O(N²) worst case. Not stable.
//! - **BubbleSort**: O(N²) always. Stable. Kept as the baseline to compare against.
//! - **MergeSort**: O(N log N) worst case with O(N) scratch space. Stable.
//!
//! Sorting runs synchronously on the calling task. Batches are meant to stay within a few
//! thousand records.

pub mod algo;
pub mod cache;
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod ledger;
pub mod search;
pub mod source;

pub use crate::algo::{bubble_sort, merge_sort, quick_sort, sort};
pub use crate::controller::{
    RankOutcome, RankedView, RankingController, SearchResult, SharedController, Stage,
};
pub use crate::core::{Algorithm, Direction, Ranked, Record, Sale};
pub use crate::error::{Error, Result};
pub use crate::source::DataSource;

pub mod prelude {
    pub use crate::algo::{bubble_sort, merge_sort, quick_sort, sort};
    pub use crate::controller::{RankOutcome, RankedView, RankingController, SearchResult, Stage};
    pub use crate::core::{Algorithm, Direction, Ranked, Record, Sale};
    pub use crate::source::{DataSource, JsonFileSource, StaticSource};
}
