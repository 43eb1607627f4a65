//! Sort strategies over [`Ranked`] items.
//!
//! Three interchangeable algorithms order items by `total`:
//! - **QuickSort**: Hoare partitioning around the middle element's value. Not stable.
//! - **BubbleSort**: Adjacent exchange passes. Stable and always quadratic, kept as the slow baseline.
//! - **MergeSort**: Top-down split at the midpoint, stable merge.
//!
//! Every strategy copies its input and sorts the copy; the caller's slice is never touched.
//! The main entry point is [`sort`], which dispatches on an [`Algorithm`].

use crate::core::{Algorithm, Direction, Ranked};

/// Sorts a copy of `items` with the selected algorithm.
///
/// # Examples
///
/// ```
/// use salerank::algo::sort;
/// use salerank::core::{Algorithm, Direction};
///
/// let totals = vec![100.0, 500.0, 250.0];
/// let sorted = sort(Algorithm::QuickSort, &totals, Direction::Descending);
///
/// assert_eq!(sorted, vec![500.0, 250.0, 100.0]);
/// ```
pub fn sort<T: Ranked + Clone>(algorithm: Algorithm, items: &[T], direction: Direction) -> Vec<T> {
    match algorithm {
        Algorithm::QuickSort => quick_sort(items, direction),
        Algorithm::BubbleSort => bubble_sort(items, direction),
        Algorithm::MergeSort => merge_sort(items, direction),
    }
}

/// Sorts a copy of `items` by `total` using Hoare-partition quicksort.
///
/// The pivot is the value of the element at the midpoint of the current range,
/// read once per partition. Ties may be reordered.
pub fn quick_sort<T: Ranked + Clone>(items: &[T], direction: Direction) -> Vec<T> {
    let mut arr = items.to_vec();
    if arr.len() <= 1 {
        return arr;
    }

    let high = arr.len() as isize - 1;
    quick_partition(&mut arr, 0, high, direction);
    arr
}

fn quick_partition<T: Ranked>(arr: &mut [T], low: isize, high: isize, direction: Direction) {
    if low >= high {
        return;
    }

    let pivot = arr[((low + high) / 2) as usize].total();
    let mut i = low;
    let mut j = high;

    while i <= j {
        while direction.precedes(arr[i as usize].total(), pivot) {
            i += 1;
        }
        while direction.precedes(pivot, arr[j as usize].total()) {
            j -= 1;
        }

        if i <= j {
            arr.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }

    if low < j {
        quick_partition(arr, low, j, direction);
    }
    if i < high {
        quick_partition(arr, i, high, direction);
    }
}

/// Sorts a copy of `items` by `total` using bubble sort.
///
/// Only swaps when the later element strictly precedes the earlier one, so ties keep
/// their input order.
pub fn bubble_sort<T: Ranked + Clone>(items: &[T], direction: Direction) -> Vec<T> {
    let mut arr = items.to_vec();
    let n = arr.len();
    if n <= 1 {
        return arr;
    }

    for pass in 0..n - 1 {
        for j in 0..n - 1 - pass {
            if direction.precedes(arr[j + 1].total(), arr[j].total()) {
                arr.swap(j, j + 1);
            }
        }
    }

    arr
}

/// Sorts a copy of `items` by `total` using top-down merge sort.
///
/// The left run wins ties, which keeps the sort stable.
pub fn merge_sort<T: Ranked + Clone>(items: &[T], direction: Direction) -> Vec<T> {
    let mut arr = items.to_vec();
    if arr.len() <= 1 {
        return arr;
    }

    merge_split(&mut arr, direction);
    arr
}

fn merge_split<T: Ranked + Clone>(arr: &mut [T], direction: Direction) {
    let len = arr.len();
    if len <= 1 {
        return;
    }

    // Left half takes the midpoint element, as in `[left, mid] / [mid + 1, right]`.
    let mid = len.div_ceil(2);
    merge_split(&mut arr[..mid], direction);
    merge_split(&mut arr[mid..], direction);
    merge_runs(arr, mid, direction);
}

fn merge_runs<T: Ranked + Clone>(arr: &mut [T], mid: usize, direction: Direction) {
    let left = arr[..mid].to_vec();
    let right = arr[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if direction.admits(left[i].total(), right[j].total()) {
            arr[k] = left[i].clone();
            i += 1;
        } else {
            arr[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    for item in left[i..].iter().chain(&right[j..]) {
        arr[k] = item.clone();
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single_are_copied() {
        let empty: Vec<f64> = vec![];
        for algorithm in Algorithm::ALL {
            assert!(sort(algorithm, &empty, Direction::Ascending).is_empty());
            assert_eq!(sort(algorithm, &[4.0], Direction::Descending), vec![4.0]);
        }
    }

    #[test]
    fn input_is_left_untouched() {
        let input = vec![3.0, 1.0, 2.0];
        for algorithm in Algorithm::ALL {
            let sorted = sort(algorithm, &input, Direction::Ascending);
            assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
        }
        assert_eq!(input, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn quick_sort_handles_duplicates_and_negatives() {
        let input = vec![5.0, -1.0, 5.0, 0.0, -1.0, 5.0, 2.5];
        assert_eq!(
            quick_sort(&input, Direction::Descending),
            vec![5.0, 5.0, 5.0, 2.5, 0.0, -1.0, -1.0]
        );
        assert_eq!(
            quick_sort(&input, Direction::Ascending),
            vec![-1.0, -1.0, 0.0, 2.5, 5.0, 5.0, 5.0]
        );
    }

    #[test]
    fn merge_sort_odd_lengths() {
        let input = vec![9.0, 3.0, 7.0, 1.0, 5.0];
        assert_eq!(
            merge_sort(&input, Direction::Ascending),
            vec![1.0, 3.0, 5.0, 7.0, 9.0]
        );
    }
}
