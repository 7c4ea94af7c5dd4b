//! LRU (Least Recently Used) cache implementation
//!
//! Entries live in a slot arena threaded with a doubly-linked recency list:
//! `head` is the most recently used entry, `tail` the eviction candidate.
//! Freed slots are recycled through a free list.

use std::collections::HashMap;
use std::hash::Hash;
use ahash::RandomState;

use crate::error::{Error, Result};

/// Slot in the recency list
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// LRU cache with fixed capacity
pub struct LruCache<K, V> {
    map: HashMap<K, usize, RandomState>,
    nodes: Vec<Option<Node<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new LRU cache holding at most `capacity` entries
    ///
    /// # Errors
    /// * `Error::ZeroCapacity` - `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        Ok(Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_list: Vec::new(),
            capacity,
        })
    }

    /// Get a value from the cache, marking it most recently used
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.move_to_front(idx);
        self.nodes[idx].as_ref().map(|node| &node.value)
    }

    /// Get a value without touching recency
    pub fn peek(&self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.nodes[idx].as_ref().map(|node| &node.value)
    }

    /// Check whether `key` is cached, without touching recency
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Insert a key-value pair into the cache
    ///
    /// Overwrites and promotes an existing key. Inserting a new key into a
    /// full cache evicts the least recently used entry.
    pub fn put(&mut self, key: K, value: V) {
        self.push(key, value);
    }

    /// Insert like [`put`](Self::put), returning the evicted entry if any
    pub fn push(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            if let Some(node) = &mut self.nodes[idx] {
                node.value = value;
            }
            self.move_to_front(idx);
            return None;
        }

        let evicted = if self.map.len() >= self.capacity {
            self.evict()
        } else {
            None
        };

        let idx = self.alloc_node();
        self.nodes[idx] = Some(Node {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        });
        self.attach_front(idx);

        self.map.insert(key, idx);
        evicted
    }

    /// Remove a key from the cache
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.map.remove(key)?;
        self.unlink(idx);
        self.free_node(idx);
        self.nodes[idx].take().map(|node| node.value)
    }

    /// Remove every entry whose key satisfies `predicate`
    ///
    /// Visits all keys. Returns the number of entries removed.
    pub fn remove_matching<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&K) -> bool,
    {
        let doomed: Vec<K> = self
            .map
            .keys()
            .filter(|&key| predicate(key))
            .cloned()
            .collect();

        for key in &doomed {
            self.remove(key);
        }
        doomed.len()
    }

    /// The least recently used entry, without touching recency
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let idx = self.tail?;
        self.nodes[idx].as_ref().map(|node| (&node.key, &node.value))
    }

    /// Iterate keys from most to least recently used
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.map.len(),
        }
    }

    /// Get the current size of the cache
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clear the cache
    pub fn clear(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head != Some(idx) {
            self.unlink(idx);
            self.attach_front(idx);
        }
    }

    /// Link a populated, detached slot in as the new head
    fn attach_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = old_head;
        }

        match old_head.and_then(|h| self.nodes[h].as_mut()) {
            Some(head) => head.prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match &self.nodes[idx] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let tail_idx = self.tail?;
        // Unlink while the slot is still populated so neighbours get patched.
        self.unlink(tail_idx);
        let node = self.nodes[tail_idx].take()?;
        self.map.remove(&node.key);
        self.free_node(tail_idx);
        Some((node.key, node.value))
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }

    fn free_node(&mut self, idx: usize) {
        self.free_list.push(idx);
    }
}

/// Keys of an [`LruCache`] from most to least recently used
pub struct Keys<'a, K, V> {
    nodes: &'a [Option<Node<K, V>>],
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes[self.cursor?].as_ref()?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
