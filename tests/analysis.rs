use array_cost_core::analysis::{
    build_ordered_circular_queue, circular_dequeue_cost_at_size, naive_dequeue_cost_at_size,
    simulate_circular_enqueues, simulate_enqueues, simulate_pushes,
};
use array_cost_core::OpCost;

#[test]
fn test_simulate_zero_pushes() {
    let s = simulate_pushes(0).unwrap();
    assert_eq!(s.operations, 0);
    assert_eq!(s.final_size, 0);
    assert_eq!(s.final_capacity, 1);
    assert_eq!(s.total_copies, 0);
    assert_eq!(s.total_actual_cost, 0);
    assert_eq!(s.max_copied_in_one_op, 0);
}

#[test]
fn test_simulate_pushes_doubling_milestones() {
    // For m = 2^j >= 2: capacity m, copies m - 1, actual cost 2m - 1
    for m in [2usize, 4, 8, 16, 32] {
        let s = simulate_pushes(m).unwrap();
        assert_eq!(s.final_size, m);
        assert_eq!(s.final_capacity, m);
        assert_eq!(s.total_copies, m - 1);
        assert_eq!(s.total_actual_cost, 2 * m - 1);
        assert_eq!(s.max_copied_in_one_op, m / 2);
    }
}

#[test]
fn test_simulate_pushes_amortized_average_is_bounded() {
    // Total actual cost stays below 3 per operation under doubling
    for m in [1usize, 3, 5, 17, 100] {
        let s = simulate_pushes(m).unwrap();
        assert!(s.total_actual_cost < 3 * m);
    }
}

#[test]
fn test_enqueue_simulations_match_push_simulation() {
    // Pure insertion workloads grow identically across all three
    // containers; layout only matters once removals appear
    for m in [0usize, 1, 5, 9, 33] {
        let pushes = simulate_pushes(m).unwrap();
        assert_eq!(simulate_enqueues(m).unwrap(), pushes);
        assert_eq!(simulate_circular_enqueues(m).unwrap(), pushes);
    }
}

#[test]
fn test_naive_dequeue_cost_scales_with_size() {
    for n in [1usize, 2, 4, 8, 16] {
        assert_eq!(
            naive_dequeue_cost_at_size(n).unwrap(),
            OpCost { copied: 0, moved: n - 1 }
        );
    }
}

#[test]
fn test_circular_dequeue_cost_is_constant() {
    for n in [1usize, 2, 4, 8, 16] {
        assert_eq!(
            circular_dequeue_cost_at_size(n).unwrap(),
            OpCost { copied: 0, moved: 0 }
        );
    }
}

#[test]
fn test_build_ordered_circular_queue() {
    let queue = build_ordered_circular_queue(6).unwrap();
    assert_eq!(queue.size(), 6);
    assert_eq!(queue.to_vec(), vec![0, 1, 2, 3, 4, 5]);
}
