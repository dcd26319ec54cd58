//! `RankingTree` — AVL tree keyed by a sortable rank criterion.

// ── Node ──────────────────────────────────────────────────────────────────────

type Link<K, V> = Option<Box<RankingNode<K, V>>>;

/// One tree node.  Children are exclusively owned.
#[derive(Debug, Clone)]
struct RankingNode<K, V> {
    key:    K,
    value:  V,
    /// `1 + max(height(left), height(right))`; a leaf has height 1.
    height: u32,
    left:   Link<K, V>,
    right:  Link<K, V>,
}

impl<K, V> RankingNode<K, V> {
    fn leaf(key: K, value: V) -> Self {
        Self { key, value, height: 1, left: None, right: None }
    }

    #[inline]
    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(left) - height(right)`.
    #[inline]
    fn balance_factor(&self) -> i64 {
        height(&self.left) as i64 - height(&self.right) as i64
    }
}

#[inline]
fn height<K, V>(link: &Link<K, V>) -> u32 {
    link.as_ref().map_or(0, |n| n.height)
}

// ── Rotations ─────────────────────────────────────────────────────────────────

/// ```text
///       z              y
///      / \            / \
///     y   T4   →     x   z
///    / \                / \
///   x   T3             T3  T4
/// ```
fn rotate_right<K, V>(mut z: Box<RankingNode<K, V>>) -> Box<RankingNode<K, V>> {
    let Some(mut y) = z.left.take() else {
        return z;
    };
    z.left = y.right.take();
    z.update_height();
    y.right = Some(z);
    y.update_height();
    y
}

/// Mirror image of [`rotate_right`].
fn rotate_left<K, V>(mut z: Box<RankingNode<K, V>>) -> Box<RankingNode<K, V>> {
    let Some(mut y) = z.right.take() else {
        return z;
    };
    z.right = y.left.take();
    z.update_height();
    y.left = Some(z);
    y.update_height();
    y
}

/// Restore `|balance| <= 1` at `node`, assuming both subtrees are AVL.
///
/// The rotation case is chosen from the heavy child's balance factor rather
/// than by comparing the inserted key, which keeps runs of equal keys
/// balanced.
fn rebalance<K, V>(mut node: Box<RankingNode<K, V>>) -> Box<RankingNode<K, V>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        if node.left.as_ref().is_some_and(|l| l.balance_factor() < 0) {
            // Left-right.
            node.left = node.left.take().map(rotate_left);
        }
        // Left-left.
        return rotate_right(node);
    }

    if balance < -1 {
        if node.right.as_ref().is_some_and(|r| r.balance_factor() > 0) {
            // Right-left.
            node.right = node.right.take().map(rotate_right);
        }
        // Right-right.
        return rotate_left(node);
    }

    node
}

fn insert_at<K: PartialOrd, V>(link: Link<K, V>, key: K, value: V) -> Box<RankingNode<K, V>> {
    let Some(mut node) = link else {
        return Box::new(RankingNode::leaf(key, value));
    };
    // Ties go right so equal keys keep insertion order in traversal.
    if key < node.key {
        node.left = Some(insert_at(node.left.take(), key, value));
    } else {
        node.right = Some(insert_at(node.right.take(), key, value));
    }
    rebalance(node)
}

// ── RankingTree ───────────────────────────────────────────────────────────────

/// Self-balancing ordered multimap from a rank key to a value.
///
/// Duplicate keys are allowed and traverse in insertion order.  Keys must be
/// totally ordered in practice (no `NaN`).
///
/// There is no removal: a value whose key changes must be re-ranked by
/// rebuilding the tree (see [`FromIterator`]).
///
/// # Example
///
/// ```
/// use rd_ranking::RankingTree;
///
/// let mut tree = RankingTree::new();
/// tree.insert(50, "Ali");
/// tree.insert(12, "Sara");
/// tree.insert(31, "Fatma");
/// assert_eq!(tree.ascending(), [&"Sara", &"Fatma", &"Ali"]);
/// assert!(tree.is_balanced());
/// ```
#[derive(Debug, Clone)]
pub struct RankingTree<K, V> {
    root: Link<K, V>,
    len:  usize,
}

impl<K: PartialOrd, V> RankingTree<K, V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert `value` under `key` in O(log n), rebalancing on the way up.
    pub fn insert(&mut self, key: K, value: V) {
        self.root = Some(insert_at(self.root.take(), key, value));
        self.len += 1;
    }

    /// Values in ascending key order.  Each call performs a fresh traversal.
    pub fn ascending(&self) -> Vec<&V> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// Values in descending key order (highest rank first).  Values under
    /// equal keys keep the order they have in [`ascending`](Self::ascending).
    pub fn descending(&self) -> Vec<&V> {
        let ranked: Vec<(&K, &V)> = self.iter().collect();
        ranked
            .chunk_by(|a, b| a.0 == b.0)
            .rev()
            .flat_map(|run| run.iter().map(|&(_, v)| v))
            .collect()
    }

    /// In-order iterator over `(key, value)` pairs.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(&self.root);
        iter
    }

    /// Height of the tree; 0 when empty.
    pub fn height(&self) -> u32 {
        height(&self.root)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Audit the AVL invariants: every cached height equals
    /// `1 + max(children)`, every balance factor is in `{-1, 0, 1}`, and keys
    /// are non-decreasing in traversal order.
    pub fn is_balanced(&self) -> bool {
        fn check<K, V>(link: &Link<K, V>) -> Option<u32> {
            let Some(node) = link else {
                return Some(0);
            };
            let l = check(&node.left)?;
            let r = check(&node.right)?;
            let consistent = node.height == 1 + l.max(r) && l.abs_diff(r) <= 1;
            consistent.then_some(node.height)
        }

        let ordered = self
            .iter()
            .zip(self.iter().skip(1))
            .all(|((a, _), (b, _))| !(b < a));
        check(&self.root).is_some() && ordered
    }
}

impl<K: PartialOrd, V> Default for RankingTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialOrd, V> FromIterator<(K, V)> for RankingTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        for (key, value) in iter {
            tree.insert(key, value);
        }
        tree
    }
}

impl<'a, K: PartialOrd, V> IntoIterator for &'a RankingTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ── Iter ──────────────────────────────────────────────────────────────────────

/// In-order traversal with an explicit stack (no recursion).
pub struct Iter<'a, K, V> {
    stack: Vec<&'a RankingNode<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left(&mut self, mut link: &'a Link<K, V>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        Some((&node.key, &node.value))
    }
}
