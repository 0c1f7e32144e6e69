//! 分块规划测试：线程数阈值、单调性、区间划分。

use proptest::prelude::*;

use crate::config::DEFAULT_MIN_CHUNK_SIZE;
use crate::tests::MIB;
use crate::transfer::{ChunkPlanner, ChunkRange};

/// 区间从 0 开始、首尾相接、覆盖到 total - 1，且每个区间非空。
fn assert_partition(plan: &[ChunkRange], total: u64) {
    assert!(!plan.is_empty());
    assert_eq!(plan[0].start, 0);
    assert_eq!(plan.last().map(|r| r.end), Some(total - 1));
    for (i, range) in plan.iter().enumerate() {
        assert_eq!(range.index, i);
        assert!(range.start <= range.end, "区间 {i} 为空: {range:?}");
    }
    for pair in plan.windows(2) {
        assert_eq!(pair[1].start, pair[0].end + 1);
    }
    assert_eq!(plan.iter().map(ChunkRange::len).sum::<u64>(), total);
}

#[test]
fn files_up_to_twice_min_chunk_use_two_workers() {
    let planner = ChunkPlanner::default();
    for total in [2, 1024, MIB, DEFAULT_MIN_CHUNK_SIZE, 2 * DEFAULT_MIN_CHUNK_SIZE] {
        assert_eq!(planner.worker_count(total), 2, "total = {total}");
    }
    assert_eq!(planner.worker_count(3 * DEFAULT_MIN_CHUNK_SIZE), 3);
}

#[test]
fn large_files_are_capped_at_eight_workers() {
    let planner = ChunkPlanner::default();
    assert_eq!(planner.worker_count(8 * DEFAULT_MIN_CHUNK_SIZE), 8);
    assert_eq!(planner.worker_count(9 * DEFAULT_MIN_CHUNK_SIZE), 8);
    assert_eq!(planner.worker_count(1024 * DEFAULT_MIN_CHUNK_SIZE), 8);
}

#[test]
fn worker_count_never_exceeds_total_bytes() {
    let planner = ChunkPlanner::default();
    assert_eq!(planner.worker_count(0), 0);
    assert_eq!(planner.worker_count(1), 1);
    assert!(planner.plan(0).is_empty());

    let plan = planner.plan(1);
    assert_eq!(plan, vec![ChunkRange::new(0, 0, 0)]);
}

#[test]
fn last_chunk_absorbs_remainder() {
    let planner = ChunkPlanner::default();
    let total = 20 * MIB + 3;
    let plan = planner.plan(total);
    assert_eq!(plan.len(), 2);
    assert_eq!(plan[0], ChunkRange::new(0, 0, total / 2 - 1));
    assert_eq!(plan[1].end, total - 1);
    assert_eq!(plan[1].len(), total - total / 2);
    assert_partition(&plan, total);
}

#[test]
fn range_header_uses_inclusive_end() {
    assert_eq!(ChunkRange::new(0, 0, 1023).header_value(), "bytes=0-1023");
    assert_eq!(ChunkRange::new(3, 4096, 4096).len(), 1);
}

#[test]
fn invalid_parameters_are_normalized() {
    let planner = ChunkPlanner::new(0, 0, 0);
    assert_eq!(planner.worker_count(10), 1);
    assert_partition(&planner.plan(10), 10);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn plan_partitions_any_size(total in 1u64..(1u64 << 40)) {
        let planner = ChunkPlanner::default();
        let plan = planner.plan(total);
        prop_assert_eq!(plan.len(), planner.worker_count(total));
        assert_partition(&plan, total);
    }

    #[test]
    fn worker_count_is_monotonic(a in 0u64..(1u64 << 36), b in 0u64..(1u64 << 36)) {
        let planner = ChunkPlanner::default();
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(planner.worker_count(small) <= planner.worker_count(large));
    }

    #[test]
    fn worker_count_stays_in_bounds(total in 2u64..(1u64 << 40)) {
        let count = ChunkPlanner::default().worker_count(total);
        prop_assert!((2..=8).contains(&count));
    }
}
