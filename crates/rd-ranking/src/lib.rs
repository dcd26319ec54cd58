//! `rd-ranking` — leaderboard ordering for users and drivers.
//!
//! | Module   | Contents                                         |
//! |----------|--------------------------------------------------|
//! | [`tree`] | `RankingTree<K, V>` (AVL), in-order `Iter`       |
//!
//! The tree answers "all users sorted by rating / ride count" with a single
//! in-order walk.  It is insert-only; the dispatcher rebuilds it when the
//! underlying statistics change.

pub mod tree;

#[cfg(test)]
mod tests;

pub use tree::{Iter, RankingTree};
