//! Uniform sampling without replacement.
//!
//! Randomness is an injected capability: anything implementing
//! [`IndexSource`] can drive quiz assembly. Every `rand::Rng` is one, so
//! callers normally pass `rand::rng()` or a seeded `StdRng`;
//! [`SequenceSource`] replays a fixed script of draws.

use std::collections::HashMap;
use std::collections::VecDeque;

use rand::Rng;

/// A source of uniformly distributed positions.
pub trait IndexSource {
    /// A position in `0..upper`. `upper` is always at least 1.
    fn next_index(&mut self, upper: usize) -> usize;
}

impl<R: Rng> IndexSource for R {
    fn next_index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// Replays a fixed sequence of draws, then yields 0 forever.
///
/// Each draw is reduced modulo the requested bound.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    draws: VecDeque<usize>,
}

impl SequenceSource {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }
}

impl IndexSource for SequenceSource {
    fn next_index(&mut self, upper: usize) -> usize {
        self.draws.pop_front().unwrap_or(0) % upper
    }
}

/// Pick `amount` distinct positions from `0..len`, in draw order.
///
/// A sparse partial Fisher–Yates shuffle: round `i` draws uniformly from the
/// `len - i` positions not yet taken, so the result is a uniformly random
/// ordered selection. Runs in O(amount) time and memory with exactly one
/// draw per pick. `amount` is clamped to `len`.
pub fn sample_distinct<S: IndexSource + ?Sized>(
    len: usize,
    amount: usize,
    source: &mut S,
) -> Vec<usize> {
    let amount = amount.min(len);
    // Virtual array of positions; only entries that moved are stored.
    let mut moved: HashMap<usize, usize> = HashMap::with_capacity(amount);
    let mut picked = Vec::with_capacity(amount);

    for i in 0..amount {
        let remaining = len - i;
        let j = i + source.next_index(remaining) % remaining;
        let at_j = moved.get(&j).copied().unwrap_or(j);
        let at_i = moved.get(&i).copied().unwrap_or(i);
        moved.insert(j, at_i);
        picked.push(at_j);
    }

    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn scripted_draws_are_exact() {
        let mut source = SequenceSource::new([4, 0, 0]);
        assert_eq!(sample_distinct(5, 3, &mut source), vec![4, 1, 2]);

        // The second pick lands on a slot vacated by the first.
        let mut source = SequenceSource::new([0, 3, 2]);
        assert_eq!(sample_distinct(5, 3, &mut source), vec![0, 4, 1]);
    }

    #[test]
    fn full_draw_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut picked = sample_distinct(50, 50, &mut rng);
        picked.sort_unstable();
        assert_eq!(picked, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn amount_is_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_distinct(3, 10, &mut rng).len(), 3);
        assert!(sample_distinct(0, 4, &mut rng).is_empty());
        assert!(sample_distinct(4, 0, &mut rng).is_empty());
    }

    #[test]
    fn picks_are_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in 1..30 {
            for amount in 0..=len {
                let picked = sample_distinct(len, amount, &mut rng);
                assert_eq!(picked.len(), amount);
                let unique: HashSet<_> = picked.iter().copied().collect();
                assert_eq!(unique.len(), amount);
                assert!(picked.iter().all(|&p| p < len));
            }
        }
    }

    #[test]
    fn first_pick_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts = [0usize; 4];
        for _ in 0..10_000 {
            counts[sample_distinct(4, 2, &mut rng)[0]] += 1;
        }
        for count in counts {
            assert!((2200..=2800).contains(&count), "skewed counts: {counts:?}");
        }
    }

    #[test]
    fn out_of_range_draws_are_reduced() {
        let mut source = SequenceSource::new([17]);
        assert_eq!(sample_distinct(5, 1, &mut source), vec![2]);
    }
}
