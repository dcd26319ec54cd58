//! `IndexedPriorityQueue` — min-heap keyed by an identifier.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::trace;

/// Below this raw heap length compaction is never attempted; skipping a few
/// tombstones is cheaper than a rebuild.
const MIN_COMPACTION_LEN: usize = 64;

// ── Heap entry ────────────────────────────────────────────────────────────────

/// One physical heap slot.  Whether it is live is decided by the index: an
/// entry is live iff `live[key].seq == entry.seq`.
#[derive(Debug, Clone)]
struct HeapEntry<K> {
    priority: f64,
    seq:      u64,
    key:      K,
}

impl<K> PartialEq for HeapEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K> Eq for HeapEntry<K> {}

impl<K> PartialOrd for HeapEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for HeapEntry<K> {
    /// Priority first (IEEE total order), then insertion sequence so that
    /// equal priorities pop first-inserted first.
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Index record for the single live entry of a key.
#[derive(Debug, Clone, Copy)]
struct LiveSlot {
    seq:      u64,
    priority: f64,
}

// ── IndexedPriorityQueue ──────────────────────────────────────────────────────

/// A min-priority queue with at most one live entry per key.
///
/// - [`upsert`](Self::upsert) inserts or re-prioritises a key in O(log n).
/// - [`invalidate`](Self::invalidate) tombstones a key in O(1).
/// - [`extract_min`](Self::extract_min) pops the lowest-priority live entry,
///   discarding any tombstones it meets on the way (amortised O(log n)).
///
/// Ties between equal priorities are broken by a monotonically increasing
/// sequence counter: the entry inserted first wins.
///
/// # Example
///
/// ```
/// use rd_queue::IndexedPriorityQueue;
///
/// let mut pq = IndexedPriorityQueue::new();
/// pq.upsert("car_101", 12.0);
/// pq.upsert("car_205", 7.0);
/// assert_eq!(pq.extract_min(), Some(("car_205", 7.0)));
/// pq.invalidate(&"car_101");
/// assert_eq!(pq.extract_min(), None);
/// ```
#[derive(Debug, Clone)]
pub struct IndexedPriorityQueue<K> {
    heap:             BinaryHeap<Reverse<HeapEntry<K>>>,
    live:             FxHashMap<K, LiveSlot>,
    next_seq:         u64,
    /// Dead entries still physically present in `heap`.
    tombstones:       usize,
    compaction_ratio: f64,
}

impl<K: Hash + Eq + Clone> IndexedPriorityQueue<K> {
    /// Empty queue that compacts once half of the heap is tombstones.
    pub fn new() -> Self {
        Self::with_compaction_ratio(0.5)
    }

    /// Empty queue that rebuilds its heap once `tombstones / heap_len`
    /// exceeds `ratio`.
    pub fn with_compaction_ratio(ratio: f64) -> Self {
        Self {
            heap:             BinaryHeap::new(),
            live:             FxHashMap::default(),
            next_seq:         0,
            tombstones:       0,
            compaction_ratio: ratio,
        }
    }

    /// Insert `key` with `priority`, tombstoning any existing live entry.
    /// Callers pass finite priorities; `NaN` sorts by IEEE total order.
    ///
    /// Returns the previous priority of `key` if it was live.
    pub fn upsert(&mut self, key: K, priority: f64) -> Option<f64> {
        let seq = self.next_seq;
        self.next_seq += 1;

        let previous = self.live.insert(key.clone(), LiveSlot { seq, priority });
        if previous.is_some() {
            self.tombstones += 1;
        }
        self.heap.push(Reverse(HeapEntry { priority, seq, key }));
        self.maybe_compact();
        previous.map(|slot| slot.priority)
    }

    /// Tombstone the live entry for `key`.
    ///
    /// Returns `false` (and does nothing) if `key` has no live entry, so
    /// repeated calls are harmless.
    pub fn invalidate(&mut self, key: &K) -> bool {
        if self.live.remove(key).is_none() {
            return false;
        }
        self.tombstones += 1;
        self.maybe_compact();
        true
    }

    /// Remove and return the live entry with the lowest priority.
    ///
    /// Returns `None` once no live entries remain.
    pub fn extract_min(&mut self) -> Option<(K, f64)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.is_live(&entry) {
                self.live.remove(&entry.key);
                return Some((entry.key, entry.priority));
            }
            self.tombstones -= 1;
        }
        None
    }

    /// The live entry `extract_min` would return next, without removing it.
    ///
    /// Takes `&mut self` because tombstones sitting on top of the heap are
    /// discarded while looking.
    pub fn peek_min(&mut self) -> Option<(&K, f64)> {
        loop {
            let top_is_live = match self.heap.peek() {
                None => return None,
                Some(Reverse(entry)) => self.is_live(entry),
            };
            if top_is_live {
                break;
            }
            self.heap.pop();
            self.tombstones -= 1;
        }
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.key, entry.priority))
    }

    /// Current priority of `key`, if it has a live entry.
    pub fn priority(&self, key: &K) -> Option<f64> {
        self.live.get(key).map(|slot| slot.priority)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.live.contains_key(key)
    }

    /// Number of live entries (not the raw heap length).
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Physical heap length, live entries plus tombstones.
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    /// Number of tombstoned entries awaiting removal.
    pub fn tombstone_count(&self) -> usize {
        self.tombstones
    }

    /// Drop every entry.  The sequence counter keeps counting.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.live.clear();
        self.tombstones = 0;
    }

    /// Rebuild the heap from live entries only.
    pub fn compact(&mut self) {
        let live = &self.live;
        self.heap
            .retain(|Reverse(e)| live.get(&e.key).is_some_and(|slot| slot.seq == e.seq));
        trace!(heap_len = self.heap.len(), purged = self.tombstones, "priority queue compacted");
        self.tombstones = 0;
    }

    // ── Internals ─────────────────────────────────────────────────────────

    #[inline]
    fn is_live(&self, entry: &HeapEntry<K>) -> bool {
        self.live
            .get(&entry.key)
            .is_some_and(|slot| slot.seq == entry.seq)
    }

    fn maybe_compact(&mut self) {
        let len = self.heap.len();
        if len >= MIN_COMPACTION_LEN
            && self.tombstones as f64 > self.compaction_ratio * len as f64
        {
            self.compact();
        }
    }
}

impl<K: Hash + Eq + Clone> Default for IndexedPriorityQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone> Extend<(K, f64)> for IndexedPriorityQueue<K> {
    fn extend<I: IntoIterator<Item = (K, f64)>>(&mut self, iter: I) {
        for (key, priority) in iter {
            self.upsert(key, priority);
        }
    }
}

impl<K: Hash + Eq + Clone> FromIterator<(K, f64)> for IndexedPriorityQueue<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut pq = Self::new();
        pq.extend(iter);
        pq
    }
}
