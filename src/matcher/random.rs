// Injectable randomness for response selection and typing delays

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::time::Duration;

/// Source of the uniform choices the companion makes.
///
/// Production code uses [`RngSource`]; tests supply a [`ScriptedSource`]
/// (or a seeded `RngSource`) to get exact, repeatable output.
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform duration in `[min, max]`. Returns `min` when `max <= min`.
    fn delay_between(&mut self, min: Duration, max: Duration) -> Duration;
}

/// Pick one element uniformly, or `None` for an empty slice.
pub fn choose<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.pick_index(items.len()).min(items.len() - 1);
    items.get(index)
}

/// `rand`-backed random source
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Seeded from OS entropy; not reproducible
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }

    fn delay_between(&mut self, min: Duration, max: Duration) -> Duration {
        if max <= min {
            return min;
        }
        let low = min.as_millis() as u64;
        let high = max.as_millis() as u64;
        Duration::from_millis(self.rng.gen_range(low..=high))
    }
}

/// Deterministic source that replays a fixed list of picks.
///
/// Once the script runs out every pick is `0`. Indices are reduced modulo
/// the collection length so a script can be reused across tables.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
    delay: Duration,
}

impl ScriptedSource {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
            delay: Duration::ZERO,
        }
    }

    /// Always answer `delay_between` with `delay`, clamped into range
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Picks not consumed yet
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks.pop_front().unwrap_or(0);
        if len == 0 {
            0
        } else {
            pick % len
        }
    }

    fn delay_between(&mut self, min: Duration, max: Duration) -> Duration {
        if max <= min {
            return min;
        }
        self.delay.max(min).min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        let picks_a: Vec<usize> = (0..20).map(|_| a.pick_index(5)).collect();
        let picks_b: Vec<usize> = (0..20).map(|_| b.pick_index(5)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|&i| i < 5));
    }

    #[test]
    fn test_delay_stays_in_bounds() {
        let mut rng = RngSource::seeded(7);
        let min = Duration::from_millis(1000);
        let max = Duration::from_millis(3000);
        for _ in 0..100 {
            let delay = rng.delay_between(min, max);
            assert!(delay >= min && delay <= max);
        }
    }

    #[test]
    fn test_inverted_delay_range_returns_min() {
        let mut rng = RngSource::seeded(7);
        let min = Duration::from_millis(50);
        assert_eq!(rng.delay_between(min, Duration::from_millis(10)), min);
    }

    #[test]
    fn test_scripted_source_replays_then_defaults() {
        let mut rng = ScriptedSource::new([2, 7]);
        assert_eq!(rng.pick_index(5), 2);
        assert_eq!(rng.pick_index(5), 2); // 7 % 5
        assert_eq!(rng.remaining(), 0);
        assert_eq!(rng.pick_index(5), 0);
    }

    #[test]
    fn test_scripted_delay_is_clamped() {
        let mut rng = ScriptedSource::default().with_delay(Duration::from_secs(10));
        let delay = rng.delay_between(Duration::from_secs(1), Duration::from_secs(3));
        assert_eq!(delay, Duration::from_secs(3));
    }

    #[test]
    fn test_choose_empty_and_single() {
        let mut rng = ScriptedSource::new([3]);
        let empty: [&str; 0] = [];
        assert_eq!(choose(&mut rng, &empty), None);
        assert_eq!(choose(&mut rng, &["only"]), Some(&"only"));
    }
}
