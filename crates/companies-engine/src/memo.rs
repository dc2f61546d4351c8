//! Single-slot memoization for derivation stages.

/// Remembers the last computed value and the input it was computed from.
///
/// A lookup with an equal key returns the cached value; any other key
/// recomputes and replaces it.
#[derive(Debug)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    runs: u64,
}

impl<K: PartialEq + Clone, V> Memo<K, V> {
    /// Create an empty memo.
    pub fn new() -> Self {
        Self {
            entry: None,
            runs: 0,
        }
    }

    /// Get the value for `key`, computing it if the cached entry is stale.
    pub fn get_or_compute<F>(&mut self, key: &K, compute: F) -> &V
    where
        F: FnOnce() -> V,
    {
        let fresh = matches!(&self.entry, Some((cached, _)) if cached == key);
        if !fresh {
            self.runs += 1;
            self.entry = None;
        }
        &self.entry.get_or_insert_with(|| (key.clone(), compute())).1
    }

    /// Drop the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// How many times the value has been computed.
    pub fn runs(&self) -> u64 {
        self.runs
    }
}

impl<K: PartialEq + Clone, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
