//! Shared fixtures and invariant checks for the integration tests.
#![allow(dead_code)]

use std::collections::BTreeSet;
use std::ptr::NonNull;

use fitmalloc::block::{BlockHeader, ALLOCATED, HEADER_SIZE};
use fitmalloc::util::{align_up, MAX_ALIGN};
use fitmalloc::FixedHeap;

/// A MAX_ALIGN-aligned backing buffer, so expected block sizes come out the
/// same on every run.
#[repr(align(16))]
pub struct Region<const N: usize>(pub [u8; N]);

impl<const N: usize> Region<N> {
    pub fn new() -> Self {
        Region([0u8; N])
    }
}

/// Build a heap over raw memory, panicking on init failure.
#[cfg(feature = "logging")]
pub fn heap_over_raw(base: *mut u8, len: usize) -> FixedHeap {
    unsafe { FixedHeap::new(base, len, fitmalloc::Logger::noop()) }.expect("heap init failed")
}

/// Build a heap over raw memory, panicking on init failure.
#[cfg(not(feature = "logging"))]
pub fn heap_over_raw(base: *mut u8, len: usize) -> FixedHeap {
    unsafe { FixedHeap::new(base, len) }.expect("heap init failed")
}

/// Build a heap over `buf`, panicking on init failure.
pub fn heap_over(buf: &mut [u8]) -> FixedHeap {
    heap_over_raw(buf.as_mut_ptr(), buf.len())
}

/// Footprint (header included) of an `n`-byte allocation whose block starts
/// on a MAX_ALIGN boundary, matching the split arithmetic.
pub fn block_footprint(n: usize) -> usize {
    let user = align_up(HEADER_SIZE + 1, MAX_ALIGN);
    align_up(user + n, MAX_ALIGN)
}

/// Allocate whatever is left of a heap whose free space is a single tail
/// block, emptying the free list. Returns the filler allocation.
pub fn fill_remaining(heap: &mut FixedHeap) -> NonNull<u8> {
    let n = heap.available() - MAX_ALIGN;
    let p = heap.allocate(n).expect("filler allocation failed");
    assert_eq!(
        heap.free_blocks().count(),
        0,
        "filler did not consume the tail block"
    );
    p
}

/// Assert every structural invariant the heap promises between operations:
/// `available` equals the free payload sum, blocks tile the region exactly,
/// no two free blocks are physically adjacent, and `is_free` agrees with
/// free-list membership.
pub fn check_invariants(heap: &FixedHeap) {
    unsafe {
        let mut sum = 0usize;
        let mut free_addrs = BTreeSet::new();
        let mut current = heap.free_list_head();
        while !current.is_null() {
            assert!(
                (*current).is_free,
                "free-list member {current:p} not marked free"
            );
            assert_ne!(
                (*current).next,
                ALLOCATED,
                "free-list member {current:p} carries the allocated marker"
            );
            sum += (*current).size;
            assert!(
                free_addrs.insert(current as usize),
                "free list cycles through {current:p}"
            );
            current = (*current).next;
        }
        assert_eq!(heap.available(), sum, "available out of sync with free list");

        let base = heap.base_ptr() as usize;
        let end = base + heap.capacity();
        let mut addr = base;
        let mut prev_free = false;
        while addr < end {
            let header = addr as *mut BlockHeader;
            let in_list = free_addrs.contains(&addr);
            assert_eq!(
                (*header).is_free,
                in_list,
                "block {header:p}: is_free disagrees with free-list membership"
            );
            if in_list {
                assert!(!prev_free, "adjacent free blocks at {header:p}");
            }
            prev_free = in_list;
            let next_addr = addr + HEADER_SIZE + (*header).size;
            assert!(
                next_addr <= end,
                "block {header:p} overruns the region end"
            );
            addr = next_addr;
        }
        assert_eq!(addr, end, "blocks do not tile the region exactly");
    }
}
