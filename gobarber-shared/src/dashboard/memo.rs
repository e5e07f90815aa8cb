/// Single-entry cache that recomputes its value only when the key changes.
///
/// The key is the full set of inputs the value is derived from, so a cached
/// value is never stale and never recomputed for unrelated reasons.
#[derive(Debug)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    computations: usize,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            computations: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value cached for `key`, computing it first when the cache
    /// is empty or holds another key.
    pub fn get_or_compute<F>(&mut self, key: K, compute: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        if self
            .entry
            .as_ref()
            .is_some_and(|(cached, _)| *cached != key)
        {
            self.entry = None;
        }

        let computations = &mut self.computations;
        let (_, value) = self.entry.get_or_insert_with(|| {
            *computations += 1;
            let value = compute(&key);
            (key, value)
        });
        value
    }

    /// How many times a value has been computed.
    pub fn computations(&self) -> usize {
        self.computations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computes_once_per_key() {
        let mut memo = Memo::new();

        assert_eq!(*memo.get_or_compute(1, |key| key * 10), 10);
        assert_eq!(*memo.get_or_compute(1, |_| unreachable!()), 10);
        assert_eq!(memo.computations(), 1);

        assert_eq!(*memo.get_or_compute(2, |key| key * 10), 20);
        assert_eq!(memo.computations(), 2);

        // Going back to an older key recomputes, only one entry is kept.
        assert_eq!(*memo.get_or_compute(1, |key| key * 10), 10);
        assert_eq!(memo.computations(), 3);
    }

    #[test]
    fn test_tuple_key_recomputes_on_any_part() {
        let mut memo = Memo::new();
        memo.get_or_compute(("a", 1), |(text, n)| text.len() + n);
        memo.get_or_compute(("a", 1), |_| unreachable!());
        memo.get_or_compute(("a", 2), |(text, n)| text.len() + n);
        memo.get_or_compute(("b", 2), |(text, n)| text.len() + n);
        assert_eq!(memo.computations(), 3);
    }
}
