//! State table and subset enumeration for the Held–Karp recurrence.
//!
//! States are keyed by `(mask, node)`. Node `k >= 1` owns bit `k - 1` of the
//! mask; the anchor at index 0 never appears in a mask.

use tourplan_core::Cost;

/// Largest instance whose subsets fit in a `u32` mask.
pub(crate) const MASK_CEILING: usize = u32::BITS as usize;

/// Cheapest known arrival at a node for a given visited set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) cost: Cost,
    pub(crate) predecessor: usize,
}

impl Entry {
    const UNREACHED: Self = Self {
        cost: Cost::MAX,
        predecessor: 0,
    };

    /// Whether `self` beats `incumbent`, comparing cost then predecessor.
    pub(crate) const fn improves_on(self, incumbent: Option<Self>) -> bool {
        match incumbent {
            None => true,
            Some(best) => {
                self.cost < best.cost
                    || (self.cost == best.cost && self.predecessor < best.predecessor)
            }
        }
    }
}

/// Flat `(mask, node)` table stored as parallel cost and predecessor arrays.
#[derive(Debug)]
pub(crate) struct Memo {
    size: usize,
    costs: Vec<Cost>,
    predecessors: Vec<u8>,
}

impl Memo {
    /// Allocate a table for `size` locations, `2 <= size <= MASK_CEILING`.
    pub(crate) fn new(size: usize) -> Self {
        let slots = mask_count(size).saturating_mul(size);
        Self {
            size,
            costs: vec![Cost::MAX; slots],
            predecessors: vec![0; slots],
        }
    }

    /// Number of `(mask, node)` slots held.
    pub(crate) const fn states(&self) -> usize {
        self.costs.len()
    }

    pub(crate) fn entry(&self, mask: u32, node: usize) -> Entry {
        let slot = self.slot(mask, node);
        match (self.costs.get(slot), self.predecessors.get(slot)) {
            (Some(&cost), Some(&predecessor)) => Entry {
                cost,
                predecessor: usize::from(predecessor),
            },
            _ => Entry::UNREACHED,
        }
    }

    pub(crate) fn record(&mut self, mask: u32, node: usize, entry: Entry) {
        let slot = self.slot(mask, node);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "node indices are bounded by MASK_CEILING"
        )]
        let predecessor = entry.predecessor as u8;
        if let (Some(cost), Some(pred)) = (self.costs.get_mut(slot), self.predecessors.get_mut(slot))
        {
            *cost = entry.cost;
            *pred = predecessor;
        }
    }

    const fn slot(&self, mask: u32, node: usize) -> usize {
        (mask as usize) * self.size + node
    }
}

/// Mask bit owned by `node`.
pub(crate) const fn bit(node: usize) -> u32 {
    1 << (node - 1)
}

/// Mask with every non-anchor node of a `size`-location instance set.
pub(crate) const fn full_mask(size: usize) -> u32 {
    (1 << (size - 1)) - 1
}

const fn mask_count(size: usize) -> usize {
    1 << (size - 1)
}

/// Nodes present in `mask`, in ascending index order.
pub(crate) fn members(mask: u32) -> impl Iterator<Item = usize> {
    let mut rest = mask;
    std::iter::from_fn(move || {
        if rest == 0 {
            return None;
        }
        let node = rest.trailing_zeros() as usize + 1;
        rest &= rest - 1;
        Some(node)
    })
}

/// Masks over `width` bits with exactly `ones` bits set, in ascending order.
///
/// Uses Gosper's hack to step from one mask to the next.
#[derive(Debug, Clone)]
pub(crate) struct SubsetsOfSize {
    next: Option<u32>,
    limit: u64,
}

impl SubsetsOfSize {
    pub(crate) const fn new(ones: u32, width: u32) -> Self {
        let limit = 1_u64 << width;
        let first = if ones == 0 || ones > width {
            None
        } else {
            Some(u32::MAX >> (u32::BITS - ones))
        };
        Self { next: first, limit }
    }
}

impl Iterator for SubsetsOfSize {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let current = self.next?;
        let lowest = current & current.wrapping_neg();
        let ripple = u64::from(current) + u64::from(lowest);
        let spread = (ripple ^ u64::from(current)) >> (lowest.trailing_zeros() + 2);
        let successor = ripple | spread;
        self.next = u32::try_from(successor)
            .ok()
            .filter(|&mask| u64::from(mask) < self.limit);
        Some(current)
    }
}
