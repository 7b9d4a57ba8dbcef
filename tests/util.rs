use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

/// Check that `sampler` only returns values from `expected` and that each of them is returned about equally often.
/// An empty `expected` means the sampler should never return anything.
pub fn test_sampler_uniform<T: Eq + Hash + Debug + Copy>(
    expected: &[T],
    print: bool,
    mut sampler: impl FnMut() -> Option<T>,
) {
    assert!(expected.iter().all_unique(), "duplicate expected value in {:?}", expected);

    if expected.is_empty() {
        for _ in 0..100 {
            assert_eq!(None, sampler());
        }
        return;
    }

    let samples_per_value = 1000;
    let mut counts: HashMap<T, u64> = expected.iter().map(|&value| (value, 0)).collect();

    for _ in 0..samples_per_value * expected.len() {
        let sample = sampler().expect("sampler must return a value when values are expected");
        match counts.get_mut(&sample) {
            Some(count) => *count += 1,
            None => panic!("sampled unexpected value {:?}", sample),
        }
    }

    for value in expected {
        let relative = counts[value] as f32 / samples_per_value as f32;
        if print {
            println!("  {:?} sampled {} times, relative {}", value, counts[value], relative);
        }

        assert!(counts[value] > 0, "never sampled {:?}", value);
        assert!(
            (0.8..1.2).contains(&relative),
            "{:?} was over/under sampled, relative {}",
            value,
            relative
        );
    }
}
