//! `rd-queue` — keyed min-priority queue with lazy deletion.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`indexed`]  | `IndexedPriorityQueue<K>` — upsert / invalidate / extract |
//!
//! # Lazy deletion
//!
//! A `BinaryHeap` cannot remove an arbitrary element cheaply.  Instead of
//! searching the heap, a priority change or removal *tombstones* the old
//! entry: the key's live sequence number moves on, and the stale entry is
//! skipped when it eventually surfaces at the root.  Tombstones are purged in
//! bulk when they outnumber live entries by the configured ratio.

pub mod indexed;

#[cfg(test)]
mod tests;

pub use indexed::IndexedPriorityQueue;
