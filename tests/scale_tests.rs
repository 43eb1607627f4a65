use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use salerank::core::STANDARD_SIZES;
use salerank::prelude::*;
use std::time::Instant;

fn random_totals(rng: &mut StdRng, count: usize) -> Vec<f64> {
    (0..count)
        .map(|_| (rng.random_range(0..10_000_000) as f64) / 100.0)
        .collect()
}

#[test]
fn test_standard_sizes_all_algorithms() {
    let mut rng = StdRng::seed_from_u64(42);

    for size in STANDARD_SIZES {
        let input = random_totals(&mut rng, size);

        let mut expected = input.clone();
        expected.sort_by(|a, b| b.total_cmp(a));

        for algorithm in Algorithm::ALL {
            let start = Instant::now();
            let sorted = sort(algorithm, &input, Direction::Descending);
            println!("{algorithm} sorted {size} totals in {:?}", start.elapsed());

            assert_eq!(sorted, expected, "{algorithm} failed at size {size}");
        }
    }
}

#[test]
fn test_quick_and_merge_100k() {
    let count = 100_000;
    let mut rng = StdRng::seed_from_u64(7);
    let input = random_totals(&mut rng, count);

    for algorithm in [Algorithm::QuickSort, Algorithm::MergeSort] {
        let start = Instant::now();
        let sorted = sort(algorithm, &input, Direction::Ascending);
        println!("{algorithm} sorted 100k totals in {:?}", start.elapsed());

        assert_eq!(sorted.len(), count);
        for i in 0..count - 1 {
            assert!(sorted[i] <= sorted[i + 1], "Sort failed at index {}", i);
        }
    }
}

#[test]
fn test_quicksort_presorted_and_constant_input() {
    let count = 50_000;

    // Middle pivot keeps presorted input and long runs of ties shallow.
    let ascending: Vec<f64> = (0..count).map(|i| i as f64).collect();
    let sorted = quick_sort(&ascending, Direction::Descending);
    assert_eq!(sorted.first(), Some(&((count - 1) as f64)));
    assert_eq!(sorted.last(), Some(&0.0));

    let constant = vec![42.0; count];
    assert_eq!(quick_sort(&constant, Direction::Ascending), constant);
}

#[test]
#[ignore]
fn test_bubblesort_10k() {
    // Quadratic: roughly 50M comparisons.
    let count = 10_000;
    let mut rng = StdRng::seed_from_u64(1);
    let input = random_totals(&mut rng, count);

    let start = Instant::now();
    let sorted = bubble_sort(&input, Direction::Descending);
    println!("bubblesort sorted 10k totals in {:?}", start.elapsed());

    for i in 0..count - 1 {
        assert!(sorted[i] >= sorted[i + 1], "Sort failed at index {}", i);
    }
}
