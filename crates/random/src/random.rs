use crate::seed::{entropy_seed, stream_from_seed};
use crate::words::{PartOfSpeech, WordSource};
use crate::RandomError;
use math::TAU;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::ops::{Deref, DerefMut};

/// One named, independently seeded slice of a generator's lifetime.
#[derive(Clone, Debug)]
pub struct RandomContext {
    label: String,
    count: u64,
    seed: String,
    stream: ChaCha8Rng,
}

impl RandomContext {
    fn new(label: impl Into<String>, seed: String) -> Self {
        Self {
            label: label.into(),
            count: 0,
            stream: stream_from_seed(&seed),
            seed,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of values drawn from this context since it was created.
    ///
    /// [`Random::reset`] rewinds the stream but never lowers the count.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

/// A seedable random generator with a stack of contexts.
///
/// The last pushed context is active; every draw comes from it and only
/// its count advances. The root context is created with the generator and
/// can never be popped, so the stack is never empty.
#[derive(Clone, Debug)]
pub struct Random {
    contexts: Vec<RandomContext>,
}

impl Random {
    /// Create a generator whose root context is `label`.
    ///
    /// With no seed, one is taken from OS entropy and the generator's output
    /// is not reproducible.
    pub fn new(label: impl Into<String>, seed: Option<&str>) -> Self {
        let seed = match seed {
            Some(seed) => seed.to_string(),
            None => {
                let seed = entropy_seed();
                log::debug!("random: root context seeded from entropy ({seed})");
                seed
            }
        };
        Self {
            contexts: vec![RandomContext::new(label, seed)],
        }
    }

    // === Context management ===

    /// The active (innermost) context.
    pub fn context(&self) -> &RandomContext {
        // The root is never popped.
        &self.contexts[self.contexts.len() - 1]
    }

    fn context_mut(&mut self) -> &mut RandomContext {
        let last = self.contexts.len() - 1;
        &mut self.contexts[last]
    }

    pub fn label(&self) -> &str {
        self.context().label()
    }

    pub fn count(&self) -> u64 {
        self.context().count()
    }

    pub fn seed(&self) -> &str {
        self.context().seed()
    }

    /// Number of contexts on the stack, including the root.
    pub fn depth(&self) -> usize {
        self.contexts.len()
    }

    /// All contexts, root first.
    pub fn contexts(&self) -> &[RandomContext] {
        &self.contexts
    }

    /// First context with this label, searching from the root.
    pub fn context_by_label(&self, label: &str) -> Option<&RandomContext> {
        self.contexts.iter().find(|context| context.label == label)
    }

    pub fn count_by_label(&self, label: &str) -> Option<u64> {
        self.context_by_label(label).map(RandomContext::count)
    }

    pub fn seed_by_label(&self, label: &str) -> Option<&str> {
        self.context_by_label(label).map(RandomContext::seed)
    }

    /// Create and activate a child context.
    ///
    /// Without an explicit seed, one value is drawn from the current context
    /// and its decimal form becomes the child's seed, so nested contexts stay
    /// reproducible from the root seed.
    pub fn push(&mut self, label: impl Into<String>, seed: Option<&str>) {
        let seed = match seed {
            Some(seed) => seed.to_string(),
            None => self.next().to_string(),
        };
        let context = RandomContext::new(label, seed);
        log::debug!(
            "random: push context {:?} (seed {:?}, depth {})",
            context.label,
            context.seed,
            self.contexts.len() + 1
        );
        self.contexts.push(context);
    }

    /// Discard the active context and expose its parent.
    ///
    /// The root context is never removed; popping it returns `None`.
    pub fn pop(&mut self) -> Option<RandomContext> {
        if self.contexts.len() == 1 {
            log::warn!(
                "random: ignoring pop of root context {:?}",
                self.contexts[0].label
            );
            return None;
        }
        let context = self.contexts.pop();
        if let Some(context) = &context {
            log::debug!(
                "random: pop context {:?} after {} draws",
                context.label,
                context.count
            );
        }
        context
    }

    /// Push a context that is popped again when the returned guard drops.
    pub fn scoped(&mut self, label: impl Into<String>, seed: Option<&str>) -> ContextGuard<'_> {
        self.push(label, seed);
        let depth = self.contexts.len();
        let label = self.label().to_string();
        ContextGuard {
            random: self,
            depth,
            label,
        }
    }

    /// Run `f` inside a child context, popping it afterwards.
    pub fn with_context<R>(
        &mut self,
        label: impl Into<String>,
        seed: Option<&str>,
        f: impl FnOnce(&mut Random) -> R,
    ) -> R {
        let mut guard = self.scoped(label, seed);
        f(&mut guard)
    }

    /// Rewind the active context to the start of its seed's stream.
    ///
    /// The draw count keeps running; replayed values still count as draws.
    pub fn reset(&mut self) {
        let context = self.context_mut();
        context.stream = stream_from_seed(&context.seed);
        log::debug!(
            "random: reset context {:?} after {} draws",
            context.label,
            context.count
        );
    }

    /// Pop back to just below the guarded context at `depth`.
    ///
    /// Does nothing when the context at `depth` is no longer the one the
    /// guard pushed, since then the scope's own context was already popped.
    fn close_scope(&mut self, depth: usize, label: &str) {
        let owned = self
            .contexts
            .get(depth - 1)
            .is_some_and(|context| context.label == label);
        if !owned {
            log::warn!("random: scope {label:?} was popped before its guard dropped");
            return;
        }
        while self.contexts.len() >= depth.max(2) {
            self.pop();
        }
    }

    // === Draws ===

    /// One value in `[0, 1)` from the active context.
    pub fn next(&mut self) -> f64 {
        let context = self.context_mut();
        context.count += 1;
        context.stream.random::<f64>()
    }

    /// True with probability `chance`: `next() <= chance`. One draw.
    pub fn bool(&mut self, chance: f64) -> bool {
        self.next() <= chance
    }

    /// `floor(next() * (max - min + 1) + min)`. One draw.
    ///
    /// Both bounds are meant to be inclusive. The formula is kept exactly,
    /// so extreme float rounding can in principle land on `max + 1`.
    pub fn int(&mut self, min: i64, max: i64) -> i64 {
        let span = max as f64 - min as f64 + 1.0;
        (self.next() * span + min as f64).floor() as i64
    }

    /// `next() * (max - min + 1) + min`, mirroring [`Random::int`]. One draw.
    ///
    /// The result ranges over `[min, max + 1)`.
    pub fn float(&mut self, min: f64, max: f64) -> f64 {
        self.next() * (max - min + 1.0) + min
    }

    /// An angle in `[0, TAU)` radians. One draw.
    pub fn angle(&mut self) -> f64 {
        self.next() * TAU
    }

    /// Values scattered around `base`. Each call on the result is one draw.
    pub fn fuzzy(&mut self, base: f64) -> Fuzzy<'_> {
        Fuzzy { random: self, base }
    }

    /// One item, uniformly. One draw; none when `items` is empty.
    pub fn choose_one<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, RandomError> {
        if items.is_empty() {
            return Err(RandomError::EmptyChoice);
        }
        let last = items.len() - 1;
        let index = self.int(0, last as i64);
        Ok(&items[clamp_index(index, last)])
    }

    /// `count` items.
    ///
    /// With duplicates this is `count` independent [`Random::choose_one`]
    /// draws. Without, items are drawn and removed, one draw each, and a
    /// `count` larger than `items` is clamped to `items.len()`.
    pub fn choose<T: Clone>(
        &mut self,
        items: &[T],
        count: usize,
        allow_duplicates: bool,
    ) -> Result<Vec<T>, RandomError> {
        if allow_duplicates {
            return (0..count)
                .map(|_| self.choose_one(items).cloned())
                .collect();
        }

        let count = count.min(items.len());
        let mut options: Vec<usize> = (0..items.len()).collect();
        let mut output = Vec::with_capacity(count);
        for _ in 0..count {
            let last = options.len() - 1;
            let selection = clamp_index(self.int(0, last as i64), last);
            output.push(items[options.remove(selection)].clone());
        }
        Ok(output)
    }

    /// A shuffled copy of `items`; the input is untouched.
    ///
    /// Fisher–Yates with `int(i, len - 1)` for each position, so exactly
    /// `items.len()` draws.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut output = items.to_vec();
        if output.is_empty() {
            return output;
        }
        let last = output.len() - 1;
        for i in 0..output.len() {
            let swap = clamp_index(self.int(i as i64, last as i64), last);
            output.swap(i, swap);
        }
        output
    }

    /// A word from `source` at a random position, optionally restricted to
    /// one part of speech. One draw.
    pub fn word<'w, W: WordSource + ?Sized>(
        &mut self,
        source: &'w W,
        kind: Option<PartOfSpeech>,
    ) -> Option<&'w str> {
        let ratio = self.next();
        match kind {
            Some(kind) => source.word_of_kind(ratio, kind),
            None => source.word_at(ratio),
        }
    }
}

fn clamp_index(index: i64, last: usize) -> usize {
    if index as usize > last || index < 0 {
        log::warn!("random: index {index} outside 0..={last}, clamping");
    }
    index.clamp(0, last as i64) as usize
}

/// Fuzzed values around a base, see [`Random::fuzzy`].
pub struct Fuzzy<'a> {
    random: &'a mut Random,
    base: f64,
}

impl Fuzzy<'_> {
    /// `round(int(-range, range) + base)`.
    ///
    /// A zero range still consumes one draw and returns `base` rounded.
    pub fn int(&mut self, range: i64) -> i64 {
        if range == 0 {
            self.random.next();
            return self.base.round() as i64;
        }
        (self.random.int(-range, range) as f64 + self.base).round() as i64
    }

    /// `float(-range, range) + base`.
    ///
    /// A zero range still consumes one draw and returns `base` exactly.
    pub fn float(&mut self, range: f64) -> f64 {
        if range == 0.0 {
            self.random.next();
            return self.base;
        }
        self.random.float(-range, range) + self.base
    }
}

/// A pushed context that pops itself when dropped.
///
/// Derefs to the generator, so draws go to the scoped context. Contexts
/// pushed inside the scope and left on the stack are popped as well. If
/// the scope's own context was popped by hand, dropping the guard leaves
/// the stack alone.
pub struct ContextGuard<'a> {
    random: &'a mut Random,
    depth: usize,
    label: String,
}

impl Deref for ContextGuard<'_> {
    type Target = Random;

    fn deref(&self) -> &Self::Target {
        self.random
    }
}

impl DerefMut for ContextGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.random
    }
}

impl Drop for ContextGuard<'_> {
    fn drop(&mut self) {
        self.random.close_scope(self.depth, &self.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn draws(rng: &mut Random, n: usize) -> Vec<f64> {
        (0..n).map(|_| rng.next()).collect()
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Random::new("root", Some("seed"));
        let mut b = Random::new("root", Some("seed"));
        assert_eq!(draws(&mut a, 50), draws(&mut b, 50));
    }

    #[test]
    fn test_next_is_unit_interval_and_counts() {
        let mut rng = Random::new("root", Some("unit"));
        for _ in 0..1000 {
            let value = rng.next();
            assert!((0.0..1.0).contains(&value));
        }
        assert_eq!(rng.count(), 1000);
    }

    #[test]
    fn test_reset_replays_and_keeps_counting() {
        let mut rng = Random::new("root", Some("replay"));
        let first = draws(&mut rng, 10);
        rng.reset();
        assert_eq!(rng.count(), 10);
        assert_eq!(draws(&mut rng, 10), first);
        assert_eq!(rng.count(), 20);
    }

    #[test]
    fn test_clamp_index_pins_out_of_range() {
        let last = 4;
        assert_eq!(clamp_index(last as i64 + 1, last), last);
        assert_eq!(clamp_index(-1, last), 0);
        assert_eq!(clamp_index(2, last), 2);
    }

    #[test]
    fn test_int_extreme_bounds_do_not_overflow() {
        let mut rng = Random::new("root", Some("wide"));
        for _ in 0..100 {
            rng.int(i64::MIN, i64::MAX);
        }
        assert_eq!(rng.count(), 100);
        let value = rng.int(i64::MAX - 1, i64::MAX);
        assert!(value >= i64::MAX - 1);
    }

    #[test]
    fn test_guard_leaves_contexts_it_does_not_own() {
        let mut rng = Random::new("root", Some("scope"));
        rng.push("outer", Some("o"));
        {
            let mut scoped = rng.scoped("inner", Some("i"));
            scoped.pop();
            scoped.pop();
            scoped.push("replacement", Some("r"));
            assert_eq!(scoped.depth(), 2);
        }
        assert_eq!(rng.depth(), 2);
        assert_eq!(rng.label(), "replacement");
    }

    #[test]
    fn test_push_without_seed_chains_from_parent() {
        let mut a = Random::new("root", Some("chain"));
        a.push("child", None);
        assert_eq!(a.count_by_label("root"), Some(1));
        assert_eq!(a.count(), 0);
        let child_draws = draws(&mut a, 5);

        let mut b = Random::new("root", Some("chain"));
        let expected_seed = b.next().to_string();
        assert_eq!(a.seed(), expected_seed);

        let mut c = Random::new("root", Some("chain"));
        c.push("child", None);
        assert_eq!(draws(&mut c, 5), child_draws);
    }

    #[test]
    fn test_draws_only_count_on_active_context() {
        let mut rng = Random::new("root", Some("counts"));
        rng.push("inner", Some("fixed"));
        draws(&mut rng, 3);
        assert_eq!(rng.count(), 3);
        assert_eq!(rng.count_by_label("root"), Some(0));
        rng.pop();
        assert_eq!(rng.label(), "root");
        assert_eq!(rng.count(), 0);
    }

    #[test]
    fn test_pop_root_is_noop() {
        let mut rng = Random::new("root", Some("x"));
        assert!(rng.pop().is_none());
        assert_eq!(rng.depth(), 1);
        assert_eq!(rng.label(), "root");
    }

    #[test]
    fn test_scoped_guard_pops_everything_it_pushed() {
        let mut rng = Random::new("root", Some("scope"));
        {
            let mut scoped = rng.scoped("outer", None);
            scoped.push("nested", Some("n"));
            assert_eq!(scoped.depth(), 3);
        }
        assert_eq!(rng.depth(), 1);
        assert_eq!(rng.label(), "root");

        let value = rng.with_context("closure", Some("c"), |inner| {
            assert_eq!(inner.label(), "closure");
            inner.next()
        });
        assert!((0.0..1.0).contains(&value));
        assert_eq!(rng.depth(), 1);
    }

    #[test]
    fn test_lookup_by_label() {
        let mut rng = Random::new("root", Some("r"));
        rng.push("a", Some("seed-a"));
        rng.push("b", Some("seed-b"));
        assert_eq!(rng.seed_by_label("a"), Some("seed-a"));
        assert_eq!(rng.seed_by_label("missing"), None);
        assert_eq!(rng.contexts().len(), 3);
    }

    #[test]
    fn test_int_stays_inclusive() {
        let mut rng = Random::new("root", Some("ints"));
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let value = rng.int(0, 9);
            assert!((0..=9).contains(&value), "int overshot: {value}");
            seen.insert(value);
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_float_range_mirrors_int() {
        let mut rng = Random::new("root", Some("floats"));
        for _ in 0..1000 {
            let value = rng.float(2.0, 4.0);
            assert!((2.0..5.0).contains(&value));
        }
    }

    #[test]
    fn test_bool_extremes() {
        let mut rng = Random::new("root", Some("bools"));
        assert!((0..100).all(|_| rng.bool(1.0)));
        assert!((0..100).all(|_| !rng.bool(-0.1)));
    }

    #[test]
    fn test_fuzzy_zero_range_still_draws() {
        let mut rng = Random::new("root", Some("fuzzy"));
        assert_eq!(rng.fuzzy(5.5).float(0.0), 5.5);
        assert_eq!(rng.fuzzy(5.4).int(0), 5);
        assert_eq!(rng.count(), 2);

        let value = rng.fuzzy(100.0).int(3);
        assert!((97..=104).contains(&value));
        assert_eq!(rng.count(), 3);
    }

    #[test]
    fn test_choose_one_empty_fails_without_drawing() {
        let mut rng = Random::new("root", Some("empty"));
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose_one(&empty), Err(RandomError::EmptyChoice));
        assert_eq!(rng.count(), 0);
    }

    #[test]
    fn test_choose_without_duplicates_is_distinct() {
        let mut rng = Random::new("root", Some("distinct"));
        let items = ["a", "b", "c", "d", "e", "f"];
        let chosen = rng.choose(&items, 4, false).unwrap();
        assert_eq!(chosen.len(), 4);
        let unique: HashSet<_> = chosen.iter().collect();
        assert_eq!(unique.len(), 4);
        assert_eq!(rng.count(), 4);

        let all = rng.choose(&items, 10, false).unwrap();
        assert_eq!(all.len(), items.len());
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), items.len());
    }

    #[test]
    fn test_choose_with_duplicates_draws_count_times() {
        let mut rng = Random::new("root", Some("dupes"));
        let chosen = rng.choose(&[1, 2], 7, true).unwrap();
        assert_eq!(chosen.len(), 7);
        assert_eq!(rng.count(), 7);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = Random::new("root", Some("shuffle"));
        let items = vec![1, 2, 3, 4, 5];
        let shuffled = rng.shuffle(&items);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(shuffled.len(), items.len());
        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, items);
        assert_eq!(rng.count(), 5);
    }
}
