//! Unit and property tests for rd-ranking.

#[cfg(test)]
mod basics {
    use crate::RankingTree;

    #[test]
    fn empty_tree() {
        let tree: RankingTree<u32, &str> = RankingTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert!(tree.ascending().is_empty());
        assert!(tree.is_balanced());
    }

    #[test]
    fn ascending_and_descending() {
        let tree: RankingTree<f64, &str> =
            [(4.5, "Ali"), (3.9, "Sara"), (4.9, "Fatma"), (4.1, "Yousef")]
                .into_iter()
                .collect();
        assert_eq!(tree.ascending(), [&"Sara", &"Yousef", &"Ali", &"Fatma"]);
        assert_eq!(tree.descending(), [&"Fatma", &"Ali", &"Yousef", &"Sara"]);
    }

    #[test]
    fn descending_keeps_ties_in_insertion_order() {
        let tree: RankingTree<u32, &str> =
            [(3, "a"), (5, "b"), (3, "c"), (5, "d"), (1, "e"), (5, "f")]
                .into_iter()
                .collect();
        assert_eq!(tree.ascending(), [&"e", &"a", &"c", &"b", &"d", &"f"]);
        assert_eq!(tree.descending(), [&"b", &"d", &"f", &"a", &"c", &"e"]);
    }

    #[test]
    fn sorted_inserts_stay_logarithmic() {
        // Monotonic input degenerates a plain BST into a list.
        let mut tree = RankingTree::new();
        for i in 0..1023u32 {
            tree.insert(i, i);
            assert!(tree.is_balanced(), "unbalanced after inserting {i}");
        }
        assert_eq!(tree.height(), 10);
        assert_eq!(tree.len(), 1023);
    }

    #[test]
    fn descending_inserts_stay_balanced() {
        let mut tree = RankingTree::new();
        for i in (0..500u32).rev() {
            tree.insert(i, ());
        }
        assert!(tree.is_balanced());
        assert!(tree.height() <= 13);
    }

    #[test]
    fn left_right_and_right_left_cases() {
        // 30, 10, 20 → left-right at the root.
        let lr: RankingTree<u32, u32> = [(30, 30), (10, 10), (20, 20)].into_iter().collect();
        assert!(lr.is_balanced());
        assert_eq!(lr.height(), 2);
        assert_eq!(lr.ascending(), [&10, &20, &30]);

        // 10, 30, 20 → right-left at the root.
        let rl: RankingTree<u32, u32> = [(10, 10), (30, 30), (20, 20)].into_iter().collect();
        assert!(rl.is_balanced());
        assert_eq!(rl.height(), 2);
        assert_eq!(rl.ascending(), [&10, &20, &30]);
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let mut tree = RankingTree::new();
        for (i, name) in ["a", "b", "c", "d", "e", "f", "g"].into_iter().enumerate() {
            tree.insert(if i == 3 { 1 } else { 5 }, name);
        }
        assert!(tree.is_balanced());
        assert_eq!(tree.ascending(), [&"d", &"a", &"b", &"c", &"e", &"f", &"g"]);
    }

    #[test]
    fn many_equal_keys_stay_balanced() {
        let mut tree = RankingTree::new();
        for i in 0..200u32 {
            tree.insert(0u8, i);
        }
        assert!(tree.is_balanced());
        let values: Vec<u32> = tree.ascending().into_iter().copied().collect();
        assert_eq!(values, (0..200).collect::<Vec<_>>());
    }

    #[test]
    fn traversal_is_restartable() {
        let tree: RankingTree<u32, u32> = (0..10).map(|i| (i, i)).collect();
        assert_eq!(tree.ascending(), tree.ascending());
        assert_eq!(tree.iter().count(), 10);
        assert_eq!((&tree).into_iter().count(), 10);
    }

    #[test]
    fn clear_resets() {
        let mut tree: RankingTree<u32, u32> = (0..10).map(|i| (i, i)).collect();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use crate::RankingTree;

    proptest! {
        #[test]
        fn avl_invariants_hold(keys in prop::collection::vec(-50i32..50, 0..300)) {
            let mut tree = RankingTree::new();
            for (i, &k) in keys.iter().enumerate() {
                tree.insert(k, i);
                prop_assert!(tree.is_balanced());
            }

            let walked: Vec<(i32, usize)> = tree.iter().map(|(k, v)| (*k, *v)).collect();
            prop_assert_eq!(walked.len(), keys.len());
            prop_assert!(walked.windows(2).all(|w| w[0].0 <= w[1].0));

            // Stable: equal keys keep insertion order.
            let mut expected: Vec<(i32, usize)> =
                keys.iter().copied().enumerate().map(|(i, k)| (k, i)).collect();
            expected.sort_by_key(|&(k, _)| k);
            prop_assert_eq!(walked, expected);

            let descending: Vec<usize> = tree.descending().into_iter().copied().collect();
            let mut by_key_desc: Vec<(i32, usize)> =
                keys.iter().copied().enumerate().map(|(i, k)| (k, i)).collect();
            by_key_desc.sort_by_key(|&(k, _)| std::cmp::Reverse(k));
            let by_key_desc: Vec<usize> = by_key_desc.into_iter().map(|(_, i)| i).collect();
            prop_assert_eq!(descending, by_key_desc);

            // AVL height bound: h < 1.45 log2(n + 2).
            let bound = 1.45 * ((keys.len() + 2) as f64).log2();
            prop_assert!((tree.height() as f64) < bound + 1.0);
        }
    }
}
