//! Wraparound scenarios: behavior once the head index has left slot 0.

use array_cost_core::containers::CircularQueueCore;
use array_cost_core::OpCost;

#[test]
fn test_wraparound_enqueue_after_dequeue() {
    let mut queue = CircularQueueCore::new();

    // Fill to capacity 4
    for v in 0..4 {
        queue.enqueue(v).unwrap();
    }
    assert_eq!(queue.capacity(), 4);

    // Remove 0 and 1; head is now at physical index 2
    assert_eq!(queue.dequeue().unwrap().0, 0);
    assert_eq!(queue.dequeue().unwrap().0, 1);

    // These writes must wrap to physical indices 0 and 1
    assert_eq!(queue.enqueue(4), Ok(OpCost { copied: 0, moved: 0 }));
    assert_eq!(queue.enqueue(5), Ok(OpCost { copied: 0, moved: 0 }));

    // Logical order survives the wrap
    assert_eq!(queue.to_vec(), vec![2, 3, 4, 5]);
    assert_eq!(queue.peek(), Ok(2));
    assert_eq!(queue.capacity(), 4);
}

#[test]
fn test_resize_while_head_is_offset() {
    let mut queue = CircularQueueCore::new();
    for v in 0..4 {
        queue.enqueue(v).unwrap();
    }
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    queue.enqueue(4).unwrap();
    queue.enqueue(5).unwrap();

    // Full with head != 0: this enqueue must linearize the wrapped
    // elements, copying exactly the current size
    assert_eq!(queue.enqueue(6), Ok(OpCost { copied: 4, moved: 0 }));
    assert_eq!(queue.to_vec(), vec![2, 3, 4, 5, 6]);
    assert_eq!(queue.capacity(), 8);

    // Linearization reset the head: dequeues keep coming out in order
    assert_eq!(queue.dequeue().unwrap().0, 2);
    assert_eq!(queue.dequeue().unwrap().0, 3);
    assert_eq!(queue.dequeue().unwrap().0, 4);
    assert_eq!(queue.dequeue().unwrap().0, 5);
    assert_eq!(queue.dequeue().unwrap().0, 6);
}

#[test]
fn test_resize_copy_accumulates_after_wrap() {
    let mut queue = CircularQueueCore::new();
    for v in 0..4 {
        queue.enqueue(v).unwrap();
    }
    // total_copies so far: 1 + 2 = 3
    assert_eq!(queue.total_copies(), 3);

    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    queue.enqueue(4).unwrap();
    queue.enqueue(5).unwrap();
    queue.enqueue(6).unwrap(); // resize under offset copies 4

    assert_eq!(queue.total_copies(), 7);
}

#[test]
fn test_sustained_wraparound_keeps_fifo_order() {
    let mut queue = CircularQueueCore::new();

    // Keep the queue at a steady size while the head laps the buffer
    // many times; order must never break and nothing may ever move
    for v in 0..4 {
        queue.enqueue(v).unwrap();
    }
    let mut expected_front = 0;
    for v in 4..64 {
        let (front, cost) = queue.dequeue().unwrap();
        assert_eq!(front, expected_front);
        assert_eq!(cost, OpCost { copied: 0, moved: 0 });
        expected_front += 1;

        let cost = queue.enqueue(v).unwrap();
        assert_eq!(cost.moved, 0);
    }

    // Steady size 4 never triggered further growth
    assert_eq!(queue.capacity(), 4);
    assert_eq!(queue.to_vec(), vec![60, 61, 62, 63]);
}

#[test]
fn test_drain_to_empty_then_reuse() {
    let mut queue = CircularQueueCore::new();
    for v in 0..4 {
        queue.enqueue(v).unwrap();
    }
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();
    assert!(queue.is_empty());

    // Head normalizes on empty; a fresh round behaves like a fresh queue
    // at the surviving capacity
    for v in 10..14 {
        assert_eq!(queue.enqueue(v), Ok(OpCost { copied: 0, moved: 0 }));
    }
    assert_eq!(queue.to_vec(), vec![10, 11, 12, 13]);
}

#[test]
fn test_to_vec_under_wrap_does_not_mutate() {
    let mut queue = CircularQueueCore::new();
    for v in 0..4 {
        queue.enqueue(v).unwrap();
    }
    queue.dequeue().unwrap();
    queue.enqueue(4).unwrap(); // wrapped write

    // Repeated reads re-linearize without touching the head
    assert_eq!(queue.to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(queue.to_vec(), vec![1, 2, 3, 4]);
    assert_eq!(queue.peek(), Ok(1));
    assert_eq!(queue.size(), 4);
}

#[test]
fn test_wrap_cycles_through_multiple_resizes() {
    let mut queue = CircularQueueCore::new();
    let mut next = 0;
    let mut expected_front = 0;

    // Alternate bursts of enqueues and dequeues so resizes keep landing
    // while the head is offset
    for _ in 0..5 {
        for _ in 0..6 {
            queue.enqueue(next).unwrap();
            next += 1;
        }
        for _ in 0..3 {
            let (front, cost) = queue.dequeue().unwrap();
            assert_eq!(front, expected_front);
            assert_eq!(cost.moved, 0);
            expected_front += 1;
        }
    }

    // 30 enqueued, 15 dequeued: the logical window is 15..30
    let expected: Vec<_> = (15..30).collect();
    assert_eq!(queue.to_vec(), expected);
    assert_eq!(queue.size(), 15);
}
