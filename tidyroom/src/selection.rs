//! Seeded choices made before placement: which template, which items and in what order.

use itertools::Itertools;
use log::debug;

use crate::entities::ItemDescriptor;
use crate::random::RandomSource;
use crate::seed::Seed;

/// Index of the template of the day: `floor(r(seed) * n_templates)`.
pub fn choose_template_index(source: &impl RandomSource, seed: Seed, n_templates: usize) -> usize {
    source.index(seed.value(), n_templates)
}

/// In-place Fisher–Yates shuffle driven by `source`.
///
/// For `i` from the last index down to 1, swaps `i` with `j = floor(r(seed + i) * (i + 1))`.
pub fn seeded_shuffle<T>(elements: &mut [T], source: &impl RandomSource, seed: Seed) {
    for i in (1..elements.len()).rev() {
        let j = source.index(seed.offset(i as i64), i + 1);
        elements.swap(i, j);
    }
}

/// Shuffles a copy of `pool` and keeps the first `min(max_items, pool.len())` items, in shuffled order.
pub fn select_items(
    pool: &[ItemDescriptor],
    source: &impl RandomSource,
    seed: Seed,
    max_items: usize,
) -> Vec<ItemDescriptor> {
    let mut shuffled = pool.to_vec();
    seeded_shuffle(&mut shuffled, source, seed);
    shuffled.truncate(max_items);

    debug!(
        "[SELECT] selected {}/{} items: [{}]",
        shuffled.len(),
        pool.len(),
        shuffled.iter().map(|i| i.name.as_str()).join(", ")
    );
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ItemCategory, SizeClass};
    use crate::random::SineHash;
    use crate::seed::derive_seed;
    use std::cell::RefCell;

    fn pool(n: usize) -> Vec<ItemDescriptor> {
        (0..n)
            .map(|i| {
                ItemDescriptor::new(ItemCategory::General, &format!("item_{i}"), "#000000", SizeClass::Small)
            })
            .collect()
    }

    fn names(items: &[ItemDescriptor]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn shuffle_with_zero_source_rotates_left() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        seeded_shuffle(&mut v, &|_n: i64| 0.0, Seed(0));
        assert_eq!(v, ['b', 'c', 'd', 'a']);
    }

    #[test]
    fn shuffle_with_maximal_source_is_identity() {
        let mut v = vec![1, 2, 3, 4, 5];
        seeded_shuffle(&mut v, &|_n: i64| 0.999_999, Seed(0));
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn shuffle_draws_from_seed_plus_index() {
        let drawn = RefCell::new(vec![]);
        let source = |n: i64| {
            drawn.borrow_mut().push(n);
            0.0
        };
        let mut v = [0u8; 6];
        seeded_shuffle(&mut v, &source, Seed(1000));
        assert_eq!(*drawn.borrow(), [1005, 1004, 1003, 1002, 1001]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let seed = derive_seed(2024, 7, 4);
        let original = pool(23);
        let selected = select_items(&original, &SineHash, seed, 25);
        assert_eq!(selected.len(), 23);
        let mut sorted = names(&selected);
        sorted.sort();
        let mut expected = names(&original);
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn selection_is_capped_and_deterministic() {
        let seed = derive_seed(2024, 3, 15);
        let original = pool(40);
        let a = select_items(&original, &SineHash, seed, 25);
        let b = select_items(&original, &SineHash, seed, 25);
        assert_eq!(a.len(), 25);
        assert_eq!(a, b);
        assert_ne!(names(&a), names(&original[..25]));
    }

    #[test]
    fn template_index_follows_first_draw() {
        let seed = derive_seed(2024, 1, 1);
        let expected = (SineHash.sample(seed.value()) * 3.0).floor() as usize;
        assert_eq!(choose_template_index(&SineHash, seed, 3), expected);
        assert_eq!(choose_template_index(&SineHash, seed, 1), 0);
    }
}
