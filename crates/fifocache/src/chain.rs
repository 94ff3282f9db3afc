//! Insertion-ordered chain with a hash index
//!
//! Entries live in a slot arena and link to each other by slot index, so the
//! chain can be detached at the oldest end and appended at the newest end in
//! O(1) without any shared ownership between entries.

use std::collections::HashMap;
use ahash::RandomState;

/// One cached association and its position in the chain
struct Entry {
    key: String,
    value: i64,
    older: Option<usize>,
    newer: Option<usize>,
}

/// Bounded FIFO chain, oldest to newest
///
/// Not synchronized; [`crate::FifoCache`] wraps it in a mutex.
pub(crate) struct Chain {
    index: HashMap<String, usize, RandomState>,
    slots: Vec<Option<Entry>>,
    oldest: Option<usize>,
    newest: Option<usize>,
    free_list: Vec<usize>,
    len: usize,
    capacity: usize,
}

impl Chain {
    /// Create an empty chain holding at most `capacity` entries
    pub(crate) fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than 0");

        Self {
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            slots: Vec::with_capacity(capacity),
            oldest: None,
            newest: None,
            free_list: Vec::new(),
            len: 0,
            capacity,
        }
    }

    /// Append an entry at the newest end
    ///
    /// When the chain is full the oldest entry is detached first and returned.
    /// A key that is already present is not collapsed: the new entry is
    /// appended alongside the old one and the index is re-pointed at it.
    pub(crate) fn push(&mut self, key: String, value: i64) -> Option<(String, i64)> {
        let evicted = if self.len == self.capacity {
            self.pop_oldest()
        } else {
            None
        };

        let idx = self.alloc_slot();
        self.slots[idx] = Some(Entry {
            key: key.clone(),
            value,
            older: self.newest,
            newer: None,
        });

        match self.newest {
            Some(newest_idx) => {
                if let Some(newest) = &mut self.slots[newest_idx] {
                    newest.newer = Some(idx);
                }
            }
            None => {
                self.oldest = Some(idx);
            }
        }

        self.newest = Some(idx);
        self.len += 1;
        self.index.insert(key, idx);

        evicted
    }

    /// Look up the value currently indexed under `key`
    pub(crate) fn get(&self, key: &str) -> Option<i64> {
        let idx = *self.index.get(key)?;
        self.slots[idx].as_ref().map(|entry| entry.value)
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of entries in the chain, shadowed duplicates included
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Walk the chain from oldest to newest
    pub(crate) fn iter(&self) -> Iter<'_> {
        Iter {
            chain: self,
            cursor: self.oldest,
        }
    }

    fn pop_oldest(&mut self) -> Option<(String, i64)> {
        let idx = self.oldest?;
        let entry = self.slots[idx].take()?;

        self.oldest = entry.newer;
        match entry.newer {
            Some(newer_idx) => {
                if let Some(newer) = &mut self.slots[newer_idx] {
                    newer.older = None;
                }
            }
            None => {
                self.newest = None;
            }
        }

        // A newer duplicate owns the index entry now; leave it alone.
        if self.index.get(&entry.key) == Some(&idx) {
            self.index.remove(&entry.key);
        }

        self.free_list.push(idx);
        self.len -= 1;

        Some((entry.key, entry.value))
    }

    fn alloc_slot(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.slots.len();
            self.slots.push(None);
            idx
        }
    }
}

/// Oldest-first iterator over `(key, value)` pairs
pub(crate) struct Iter<'a> {
    chain: &'a Chain,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, i64);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.chain.slots[self.cursor?].as_ref()?;
        self.cursor = entry.newer;
        Some((entry.key.as_str(), entry.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk both directions and check they agree with `len` and each other.
    fn assert_linked(chain: &Chain) {
        let mut forward = Vec::new();
        let mut cursor = chain.oldest;
        while let Some(idx) = cursor {
            forward.push(idx);
            cursor = chain.slots[idx].as_ref().unwrap().newer;
        }

        let mut backward = Vec::new();
        let mut cursor = chain.newest;
        while let Some(idx) = cursor {
            backward.push(idx);
            cursor = chain.slots[idx].as_ref().unwrap().older;
        }
        backward.reverse();

        assert_eq!(forward.len(), chain.len());
        assert_eq!(forward, backward);
        assert!(chain.len() <= chain.capacity());

        for (key, &idx) in &chain.index {
            assert!(forward.contains(&idx), "index points outside the chain");
            assert_eq!(&chain.slots[idx].as_ref().unwrap().key, key);
        }
    }

    fn keys(chain: &Chain) -> Vec<&str> {
        chain.iter().map(|(key, _)| key).collect()
    }

    #[test]
    fn test_chain_basic() {
        let mut chain = Chain::new(2);

        assert!(chain.push("a".into(), 1).is_none());
        assert!(chain.push("b".into(), 2).is_none());

        assert_eq!(chain.get("a"), Some(1));
        assert_eq!(chain.get("b"), Some(2));
        assert_eq!(chain.len(), 2);
        assert_linked(&chain);
    }

    #[test]
    fn test_chain_single_entry() {
        let mut chain = Chain::new(1);

        chain.push("a".into(), 1);
        assert_eq!(chain.oldest, chain.newest);
        assert_linked(&chain);

        assert_eq!(chain.push("b".into(), 2), Some(("a".to_string(), 1)));
        assert_eq!(keys(&chain), ["b"]);
        assert_eq!(chain.get("a"), None);
        assert_linked(&chain);
    }

    #[test]
    fn test_chain_evicts_oldest() {
        let mut chain = Chain::new(2);

        chain.push("a".into(), 1);
        chain.push("b".into(), 2);
        let evicted = chain.push("c".into(), 3);

        assert_eq!(evicted, Some(("a".to_string(), 1)));
        assert_eq!(chain.get("a"), None);
        assert_eq!(chain.get("b"), Some(2));
        assert_eq!(chain.get("c"), Some(3));
        assert_eq!(keys(&chain), ["b", "c"]);
        assert_linked(&chain);
    }

    #[test]
    fn test_chain_get_does_not_reorder() {
        let mut chain = Chain::new(2);

        chain.push("a".into(), 1);
        chain.push("b".into(), 2);
        chain.get("a");
        chain.push("c".into(), 3); // Still evicts a

        assert_eq!(chain.get("a"), None);
        assert_eq!(keys(&chain), ["b", "c"]);
    }

    #[test]
    fn test_chain_duplicate_key_shadows() {
        let mut chain = Chain::new(3);

        chain.push("a".into(), 1);
        chain.push("a".into(), 2);

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.get("a"), Some(2));
        assert_eq!(keys(&chain), ["a", "a"]);
        assert_linked(&chain);

        // Evicting the shadowed entry keeps the newer mapping
        chain.push("b".into(), 3);
        chain.push("c".into(), 4);

        assert_eq!(chain.get("a"), Some(2));
        assert_eq!(keys(&chain), ["a", "b", "c"]);
        assert_linked(&chain);

        // Evicting the live one drops it
        chain.push("d".into(), 5);
        assert_eq!(chain.get("a"), None);
        assert!(!chain.contains("a"));
        assert_linked(&chain);
    }

    #[test]
    fn test_chain_reuses_slots() {
        let mut chain = Chain::new(4);

        for i in 0..100 {
            chain.push(format!("key{}", i), i);
            assert_linked(&chain);
        }

        assert_eq!(chain.slots.len(), 4);
        assert_eq!(keys(&chain), ["key96", "key97", "key98", "key99"]);
    }

    #[test]
    #[should_panic(expected = "Capacity must be greater than 0")]
    fn test_chain_zero_capacity() {
        Chain::new(0);
    }
}
