//! Unit and property tests for rd-queue.

#[cfg(test)]
mod basics {
    use crate::IndexedPriorityQueue;

    #[test]
    fn empty_extract_is_none() {
        let mut pq: IndexedPriorityQueue<u32> = IndexedPriorityQueue::new();
        assert_eq!(pq.extract_min(), None);
        assert_eq!(pq.peek_min(), None);
        assert!(pq.is_empty());
    }

    #[test]
    fn extracts_in_priority_order() {
        let mut pq = IndexedPriorityQueue::new();
        pq.upsert("a", 3.0);
        pq.upsert("b", 1.0);
        pq.upsert("c", 2.0);
        assert_eq!(pq.extract_min(), Some(("b", 1.0)));
        assert_eq!(pq.extract_min(), Some(("c", 2.0)));
        assert_eq!(pq.extract_min(), Some(("a", 3.0)));
        assert_eq!(pq.extract_min(), None);
    }

    #[test]
    fn negative_priorities_sort_first() {
        let mut pq = IndexedPriorityQueue::new();
        pq.upsert(1u32, 0.5);
        pq.upsert(2u32, -3.25);
        assert_eq!(pq.extract_min(), Some((2, -3.25)));
    }

    #[test]
    fn equal_priorities_first_inserted_wins() {
        let mut pq = IndexedPriorityQueue::new();
        pq.upsert("first", 5.0);
        pq.upsert("second", 5.0);
        pq.upsert("third", 5.0);
        assert_eq!(pq.extract_min().map(|(k, _)| k), Some("first"));
        assert_eq!(pq.extract_min().map(|(k, _)| k), Some("second"));
        assert_eq!(pq.extract_min().map(|(k, _)| k), Some("third"));
    }

    #[test]
    fn upsert_twice_keeps_latest_priority_only() {
        let mut pq = IndexedPriorityQueue::new();
        assert_eq!(pq.upsert("v1", 10.0), None);
        assert_eq!(pq.upsert("v1", 2.0), Some(10.0));
        assert_eq!(pq.len(), 1);
        assert_eq!(pq.heap_len(), 2);
        assert_eq!(pq.tombstone_count(), 1);
        assert_eq!(pq.priority(&"v1"), Some(2.0));

        assert_eq!(pq.extract_min(), Some(("v1", 2.0)));
        assert_eq!(pq.extract_min(), None);
        assert_eq!(pq.tombstone_count(), 0);
    }

    #[test]
    fn raising_priority_moves_entry_back() {
        let mut pq = IndexedPriorityQueue::new();
        pq.upsert("a", 1.0);
        pq.upsert("b", 2.0);
        pq.upsert("a", 9.0);
        assert_eq!(pq.extract_min(), Some(("b", 2.0)));
        assert_eq!(pq.extract_min(), Some(("a", 9.0)));
    }

    #[test]
    fn invalidate_is_idempotent() {
        let mut pq = IndexedPriorityQueue::new();
        pq.upsert("a", 1.0);
        pq.upsert("b", 2.0);
        assert!(pq.invalidate(&"a"));
        assert!(!pq.invalidate(&"a"));
        assert!(!pq.invalidate(&"never-inserted"));
        assert_eq!(pq.len(), 1);
        assert_eq!(pq.extract_min(), Some(("b", 2.0)));
        assert_eq!(pq.extract_min(), None);
    }

    #[test]
    fn extracted_key_is_gone() {
        let mut pq = IndexedPriorityQueue::new();
        pq.upsert("a", 1.0);
        pq.upsert("b", 2.0);
        pq.extract_min();
        assert!(!pq.contains(&"a"));
        assert!(!pq.invalidate(&"a"));
        assert_eq!(pq.extract_min(), Some(("b", 2.0)));
    }

    #[test]
    fn reinsert_after_invalidate() {
        let mut pq = IndexedPriorityQueue::new();
        pq.upsert("a", 1.0);
        pq.invalidate(&"a");
        pq.upsert("a", 4.0);
        assert_eq!(pq.len(), 1);
        assert_eq!(pq.extract_min(), Some(("a", 4.0)));
    }

    #[test]
    fn peek_skips_tombstones_without_removing_live() {
        let mut pq = IndexedPriorityQueue::new();
        pq.upsert("a", 1.0);
        pq.upsert("b", 2.0);
        pq.invalidate(&"a");
        assert_eq!(pq.peek_min(), Some((&"b", 2.0)));
        assert_eq!(pq.len(), 1);
        assert_eq!(pq.extract_min(), Some(("b", 2.0)));
    }

    #[test]
    fn compaction_purges_tombstones() {
        let mut pq = IndexedPriorityQueue::with_compaction_ratio(0.5);
        for round in 0..10 {
            for k in 0..20u32 {
                pq.upsert(k, (round * 20 + k) as f64);
            }
        }
        assert_eq!(pq.len(), 20);
        assert!(pq.heap_len() < 200, "heap never compacted: {}", pq.heap_len());
        assert!(pq.tombstone_count() <= pq.heap_len());

        let drained: Vec<u32> = std::iter::from_fn(|| pq.extract_min().map(|(k, _)| k)).collect();
        assert_eq!(drained, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn clear_empties_everything() {
        let mut pq: IndexedPriorityQueue<u32> = [(1, 1.0), (2, 2.0)].into_iter().collect();
        pq.invalidate(&1);
        pq.clear();
        assert!(pq.is_empty());
        assert_eq!(pq.heap_len(), 0);
        assert_eq!(pq.tombstone_count(), 0);
        assert_eq!(pq.extract_min(), None);
    }
}

#[cfg(test)]
mod proptests {
    use std::collections::HashMap;

    use proptest::prelude::*;

    use crate::IndexedPriorityQueue;

    #[derive(Debug, Clone)]
    enum Op {
        Upsert(u8, i32),
        Invalidate(u8),
        Extract,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0u8..16, -1000i32..1000).prop_map(|(k, p)| Op::Upsert(k, p)),
            1 => (0u8..16).prop_map(Op::Invalidate),
            2 => Just(Op::Extract),
        ]
    }

    proptest! {
        #[test]
        fn extract_matches_naive_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
            let mut pq = IndexedPriorityQueue::with_compaction_ratio(0.25);
            // key -> (priority, seq)
            let mut model: HashMap<u8, (f64, u64)> = HashMap::new();
            let mut seq = 0u64;

            for op in ops {
                match op {
                    Op::Upsert(k, p) => {
                        pq.upsert(k, p as f64);
                        model.insert(k, (p as f64, seq));
                        seq += 1;
                    }
                    Op::Invalidate(k) => {
                        let was_live = model.remove(&k).is_some();
                        prop_assert_eq!(pq.invalidate(&k), was_live);
                    }
                    Op::Extract => {
                        let expected = model
                            .iter()
                            .min_by(|a, b| a.1.0.total_cmp(&b.1.0).then(a.1.1.cmp(&b.1.1)))
                            .map(|(k, (p, _))| (*k, *p));
                        if let Some((k, _)) = expected {
                            model.remove(&k);
                        }
                        prop_assert_eq!(pq.extract_min(), expected);
                    }
                }
                prop_assert_eq!(pq.len(), model.len());
                prop_assert!(pq.heap_len() >= pq.len());
            }
        }
    }
}
