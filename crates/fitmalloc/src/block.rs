//! Block header layout and the physical arithmetic around it.
//!
//! Every block in the region, free or allocated, starts with a [`BlockHeader`].
//! Free-list links live inside the managed buffer itself; the header fields are
//! public so tests can inspect the structure without extra plumbing.

/// Bookkeeping record at the start of every block.
#[repr(C)]
#[derive(Debug)]
pub struct BlockHeader {
    /// Next free block, null as the end-of-list terminator, or [`ALLOCATED`].
    pub next: *mut BlockHeader,
    /// Payload bytes, excluding this header. For an allocated block this
    /// covers alignment padding, the reverse-offset byte and the user payload
    /// as one opaque unit.
    pub size: usize,
    /// Redundant status flag, used for double-free detection.
    pub is_free: bool,
}

/// `next` value marking a block as allocated (not a free-list member).
///
/// All-bits-one can never address a block inside the region, so the field
/// doubles as a cheap "is this pointer one of ours?" probe in `free`.
pub const ALLOCATED: *mut BlockHeader = usize::MAX as *mut BlockHeader;

/// Bytes of bookkeeping in front of every payload.
pub const HEADER_SIZE: usize = core::mem::size_of::<BlockHeader>();

impl BlockHeader {
    /// First payload byte of `block`.
    ///
    /// # Safety
    /// `block` must point to a live header inside the managed region.
    #[inline(always)]
    pub unsafe fn data_start(block: *mut BlockHeader) -> *mut u8 {
        (block as *mut u8).add(HEADER_SIZE)
    }

    /// One past the last payload byte of `block`; when another block follows
    /// physically, this is its header address.
    ///
    /// # Safety
    /// `block` must point to a live header inside the managed region.
    #[inline(always)]
    pub unsafe fn phys_end(block: *mut BlockHeader) -> *mut u8 {
        Self::data_start(block).add((*block).size)
    }
}
