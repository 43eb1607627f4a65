//! Core traits and types for the ranking engine.
//!
//! This module defines:
//! - [`Ranked`]: The key trait the sort strategies order by.
//! - [`Record`]: The unit being ranked, and [`Sale`], the shape a data source delivers.
//! - [`Direction`] and [`Algorithm`]: The caller-facing selectors.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Batch sizes offered to callers.
pub const STANDARD_SIZES: [usize; 5] = [10, 50, 100, 500, 1000];

/// A trait for reading the numeric sort key of an item.
///
/// The sort strategies only ever read `total`, so any keyed item can be ranked.
/// Shared and boxed pointers forward to their pointee, which lets callers sort
/// `Vec<Arc<Record>>` and reorder references instead of records.
///
/// # Examples
///
/// ```
/// use salerank::core::{Direction, Ranked};
/// use salerank::algo::merge_sort;
///
/// #[derive(Clone)]
/// struct Invoice {
///     amount: f64,
/// }
///
/// impl Ranked for Invoice {
///     fn total(&self) -> f64 {
///         self.amount
///     }
/// }
///
/// let invoices = vec![Invoice { amount: 3.0 }, Invoice { amount: 9.5 }];
/// let sorted = merge_sort(&invoices, Direction::Descending);
///
/// assert_eq!(sorted[0].amount, 9.5);
/// ```
pub trait Ranked {
    /// Returns the value items are ordered by.
    fn total(&self) -> f64;
}

impl Ranked for f64 {
    fn total(&self) -> f64 {
        *self
    }
}

impl<T: Ranked + ?Sized> Ranked for &T {
    fn total(&self) -> f64 {
        (**self).total()
    }
}

impl<T: Ranked + ?Sized> Ranked for Box<T> {
    fn total(&self) -> f64 {
        (**self).total()
    }
}

impl<T: Ranked + ?Sized> Ranked for Arc<T> {
    fn total(&self) -> f64 {
        (**self).total()
    }
}

impl<T: Ranked + ?Sized> Ranked for Rc<T> {
    fn total(&self) -> f64 {
        (**self).total()
    }
}

/// Sort order, applied uniformly across strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "asc", alias = "Ascending", alias = "ASC", alias = "ASCENDING")]
    Ascending,
    #[default]
    #[serde(alias = "desc", alias = "Descending", alias = "DESC", alias = "DESCENDING")]
    Descending,
}

impl Direction {
    /// `true` when `a` must be placed strictly before `b`.
    #[inline(always)]
    pub fn precedes(self, a: f64, b: f64) -> bool {
        match self {
            Direction::Ascending => a < b,
            Direction::Descending => a > b,
        }
    }

    /// `true` when `a` may stay before `b`, ties included.
    #[inline(always)]
    pub fn admits(self, a: f64, b: f64) -> bool {
        match self {
            Direction::Ascending => a <= b,
            Direction::Descending => a >= b,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(Direction::Ascending),
            "descending" | "desc" => Ok(Direction::Descending),
            _ => Err(UnknownSelector(s.to_string())),
        }
    }
}

/// The interchangeable sort strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    #[serde(alias = "QuickSort", alias = "Quicksort", alias = "QUICKSORT")]
    QuickSort,
    #[serde(alias = "BubbleSort", alias = "Bubblesort", alias = "BUBBLESORT")]
    BubbleSort,
    #[serde(alias = "MergeSort", alias = "Mergesort", alias = "MERGESORT")]
    MergeSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::QuickSort,
        Algorithm::BubbleSort,
        Algorithm::MergeSort,
    ];

    /// Resolves a caller-supplied identifier.
    ///
    /// Unknown identifiers select [`Algorithm::QuickSort`] instead of failing.
    pub fn resolve(id: &str) -> Algorithm {
        id.parse().unwrap_or_else(|_| {
            tracing::warn!(algorithm = id, "Unknown algorithm, falling back to quicksort.");
            Algorithm::QuickSort
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::QuickSort => "quicksort",
            Algorithm::BubbleSort => "bubblesort",
            Algorithm::MergeSort => "mergesort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quicksort" => Ok(Algorithm::QuickSort),
            "bubblesort" => Ok(Algorithm::BubbleSort),
            "mergesort" => Ok(Algorithm::MergeSort),
            _ => Err(UnknownSelector(s.to_string())),
        }
    }
}

/// An identifier that names no known algorithm or direction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown selector {0:?}.")]
pub struct UnknownSelector(pub String);

/// A product listed on a sale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub price: f64,
}

/// A sale as delivered by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: u64,
    #[serde(default)]
    pub seller_id: Option<u64>,
    #[serde(default)]
    pub seller_name: Option<String>,
    #[serde(default)]
    pub client_id: Option<u64>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub items: Vec<SaleItem>,
    pub total: f64,
}

/// A sale entry ranked by its `total`.
///
/// Records are never mutated by the engine; rankings reorder shared references.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub total: f64,
    pub name: String,
    pub seller_id: Option<u64>,
    pub client_id: Option<u64>,
    pub date: Option<String>,
}

impl Record {
    pub fn new(id: u64, total: f64, name: impl Into<String>) -> Self {
        Self {
            id,
            total,
            name: name.into(),
            seller_id: None,
            client_id: None,
            date: None,
        }
    }

    /// Name used when a sale carries neither a client nor a seller name.
    pub fn fallback_name(id: u64) -> String {
        format!("Sale #{id}")
    }
}

impl Ranked for Record {
    fn total(&self) -> f64 {
        self.total
    }
}

impl AsRef<Record> for Record {
    fn as_ref(&self) -> &Record {
        self
    }
}

impl From<Sale> for Record {
    fn from(sale: Sale) -> Self {
        let name = [sale.client_name, sale.seller_name]
            .into_iter()
            .flatten()
            .find(|name| !name.trim().is_empty())
            .unwrap_or_else(|| Record::fallback_name(sale.id));

        Self {
            id: sale.id,
            total: sale.total,
            name,
            seller_id: sale.seller_id,
            client_id: sale.client_id,
            date: sale.date,
        }
    }
}
