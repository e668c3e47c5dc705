use crate::cost::CostDomain;

#[derive(Debug, Clone, Copy)]
struct QueueEntry<C> {
    slot: usize,
    cost: C,
    sequence: u64,
}

/// Binary min-heap over search slots with decrease-key.
///
/// `positions` maps every slot to its heap index so membership checks are
/// O(1). Equal costs pop in insertion order.
#[derive(Debug, Clone)]
pub struct MutableQueue<C, D> {
    heap: Vec<QueueEntry<C>>,
    positions: Vec<Option<usize>>,
    domain: D,
    next_sequence: u64,
}

impl<C, D> MutableQueue<C, D>
where
    C: Copy,
    D: CostDomain<C>,
{
    pub fn new(num_slots: usize, domain: D) -> Self {
        Self {
            heap: Vec::new(),
            positions: vec![None; num_slots],
            domain,
            next_sequence: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, slot: usize) -> bool {
        self.positions.get(slot).is_some_and(Option::is_some)
    }

    pub fn peek(&self) -> Option<(usize, C)> {
        self.heap.first().map(|entry| (entry.slot, entry.cost))
    }

    pub fn push(&mut self, slot: usize, cost: C) {
        debug_assert!(!self.contains(slot), "slot {slot} is already queued");

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let index = self.heap.len();
        self.heap.push(QueueEntry {
            slot,
            cost,
            sequence,
        });
        self.positions[slot] = Some(index);
        self.sift_up(index);
    }

    /// Queues the slot, or re-prioritizes it when it is already queued.
    /// Returns true when a new entry was inserted.
    pub fn push_or_update(&mut self, slot: usize, cost: C) -> bool {
        if self.update(slot, cost) {
            return false;
        }
        self.push(slot, cost);
        true
    }

    pub fn pop(&mut self) -> Option<(usize, C)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.positions[entry.slot] = None;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }

        Some((entry.slot, entry.cost))
    }

    /// Changes the cost of a queued slot. Returns false when the slot is not
    /// queued.
    pub fn update(&mut self, slot: usize, cost: C) -> bool {
        let Some(index) = self.positions.get(slot).copied().flatten() else {
            return false;
        };

        let previous = self.heap[index].cost;
        self.heap[index].cost = cost;

        if self.domain.less(cost, previous) {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        true
    }

    pub fn clear(&mut self) {
        for entry in self.heap.drain(..) {
            self.positions[entry.slot] = None;
        }
        self.next_sequence = 0;
    }

    fn precedes(&self, a: usize, b: usize) -> bool {
        let (left, right) = (&self.heap[a], &self.heap[b]);
        if self.domain.less(left.cost, right.cost) {
            return true;
        }
        if self.domain.less(right.cost, left.cost) {
            return false;
        }
        left.sequence < right.sequence
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.precedes(index, parent) {
                break;
            }
            self.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut best = index;

            if left < len && self.precedes(left, best) {
                best = left;
            }
            if right < len && self.precedes(right, best) {
                best = right;
            }
            if best == index {
                break;
            }

            self.swap(index, best);
            index = best;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].slot] = Some(a);
        self.positions[self.heap[b].slot] = Some(b);
    }
}
