use twoway_core::ClosedPlus;
use twoway_core::pathfinding::queue::MutableQueue;

fn drain(queue: &mut MutableQueue<u32, ClosedPlus>) -> Vec<(usize, u32)> {
    std::iter::from_fn(|| queue.pop()).collect()
}

#[test]
fn test_pops_in_cost_order() {
    let mut queue = MutableQueue::new(8, ClosedPlus);
    queue.push(3, 5);
    queue.push(0, 9);
    queue.push(6, 1);
    queue.push(2, 4);

    assert_eq!(drain(&mut queue), vec![(6, 1), (2, 4), (3, 5), (0, 9)]);
}

#[test]
fn test_equal_costs_pop_in_insertion_order() {
    let mut queue = MutableQueue::new(8, ClosedPlus);
    for slot in [5, 1, 7, 2, 0] {
        queue.push(slot, 3);
    }

    let order: Vec<usize> = drain(&mut queue).into_iter().map(|(slot, _)| slot).collect();
    assert_eq!(order, vec![5, 1, 7, 2, 0]);
}

#[test]
fn test_decrease_key_moves_slot_forward() {
    let mut queue = MutableQueue::new(4, ClosedPlus);
    queue.push(0, 10);
    queue.push(1, 20);
    queue.push(2, 30);

    assert!(queue.update(2, 5));
    assert_eq!(queue.peek(), Some((2, 5)));
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_update_of_missing_slot_is_rejected() {
    let mut queue: MutableQueue<u32, ClosedPlus> = MutableQueue::new(4, ClosedPlus);
    queue.push(0, 10);

    assert!(!queue.update(3, 1));
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_push_or_update_reports_insertion() {
    let mut queue = MutableQueue::new(4, ClosedPlus);

    assert!(queue.push_or_update(1, 8));
    assert!(!queue.push_or_update(1, 2));
    assert!(queue.push_or_update(3, 4));

    assert_eq!(drain(&mut queue), vec![(1, 2), (3, 4)]);
}

#[test]
fn test_contains_tracks_membership() {
    let mut queue = MutableQueue::new(4, ClosedPlus);
    queue.push(2, 1);

    assert!(queue.contains(2));
    assert!(!queue.contains(1));
    assert!(!queue.contains(99));

    queue.pop();
    assert!(!queue.contains(2));
    assert!(queue.is_empty());
}

#[test]
fn test_clear_forgets_every_slot() {
    let mut queue = MutableQueue::new(4, ClosedPlus);
    queue.push(0, 1);
    queue.push(1, 2);

    queue.clear();

    assert!(queue.is_empty());
    assert!(!queue.contains(0));
    queue.push(0, 7);
    assert_eq!(queue.pop(), Some((0, 7)));
}
