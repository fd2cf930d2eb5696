use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers for problem generation.
///
/// Injected into the generator so tests can substitute a deterministic source.
pub trait RandomSource {
    /// Returns an integer in `min..=max`. When `max < min`, returns `min`.
    fn next_int(&mut self, min: i64, max: i64) -> i64;

    /// Picks one element of a non-empty slice uniformly.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T
    where
        Self: Sized,
    {
        let last = i64::try_from(items.len()).unwrap_or(i64::MAX) - 1;
        let idx = usize::try_from(self.next_int(0, last)).unwrap_or(0);
        &items[idx.min(items.len() - 1)]
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        (**self).next_int(min, max)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        (**self).next_int(min, max)
    }
}

/// Non-deterministic source backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        rand::rng().random_range(min..=max)
    }
}

/// Reproducible source seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// Replays a fixed script of values.
///
/// Each scripted value is clamped into the requested range; once the script
/// runs out every draw yields the lower bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: Vec<i64>,
    cursor: usize,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new(script: Vec<i64>) -> Self {
        Self {
            script,
            cursor: 0,
        }
    }

    /// A source that always returns the lower bound.
    #[must_use]
    pub fn lowest() -> Self {
        Self::default()
    }

    /// Number of scripted values consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor.min(self.script.len())
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let value = self.script.get(self.cursor).copied().unwrap_or(min);
        self.cursor += 1;
        if max <= min {
            return min;
        }
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_values_are_clamped_then_exhausted_to_min() {
        let mut rng = ScriptedRandom::new(vec![5, 50, -3]);
        assert_eq!(rng.next_int(1, 10), 5);
        assert_eq!(rng.next_int(1, 10), 10);
        assert_eq!(rng.next_int(1, 10), 1);
        assert_eq!(rng.next_int(4, 9), 4);
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn seeded_source_is_reproducible_and_in_range() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..200 {
            let x = a.next_int(-5, 5);
            assert_eq!(x, b.next_int(-5, 5));
            assert!((-5..=5).contains(&x));
        }
    }

    #[test]
    fn degenerate_range_returns_min() {
        assert_eq!(ThreadRandom.next_int(7, 7), 7);
        assert_eq!(ThreadRandom.next_int(7, 3), 7);
        assert_eq!(SeededRandom::new(1).next_int(2, 2), 2);
    }

    #[test]
    fn pick_uses_index_draw() {
        let mut rng = ScriptedRandom::new(vec![2]);
        assert_eq!(*rng.pick(&['a', 'b', 'c']), 'c');
        assert_eq!(*rng.pick(&['a', 'b', 'c']), 'a');
    }
}
