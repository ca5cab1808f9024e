//! Observation-only statistics, compiled with the `stats` feature.

use crate::heap::FixedHeap;

impl FixedHeap {
    /// Fraction of free space a single allocation cannot reach:
    /// `1 - largest/total` over free-block payloads, `0.0` when nothing is
    /// free. Pure observation, no state mutation.
    pub fn fragmentation(&self) -> f32 {
        let mut total = 0usize;
        let mut largest = 0usize;
        for block in self.free_blocks() {
            total += block.size;
            if block.size > largest {
                largest = block.size;
            }
        }
        if total == 0 {
            0.0
        } else {
            1.0 - largest as f32 / total as f32
        }
    }

    /// Free-list candidates examined by the most recent
    /// [`allocate`](Self::allocate) call. The best-fit walk is O(free-block
    /// count); this exposes that count so callers can watch their latency
    /// budget.
    pub fn search_iterations(&self) -> usize {
        self.search_iterations
    }
}
