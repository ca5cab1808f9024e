//! Error type for `free`.

use thiserror::Error;

/// Why a `free` call was rejected. Every rejection leaves the heap unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FreeError {
    /// The pointer was null.
    #[error("null pointer")]
    NullPointer,

    /// The pointer lies outside the managed region.
    #[error("pointer outside the heap region")]
    OutOfRange,

    /// No live allocation header could be reconstructed behind the pointer:
    /// either the pointer never came from this heap, or the header was
    /// tampered with.
    #[error("pointer does not address a live allocation")]
    NotAllocated,

    /// The block behind the pointer is already free.
    #[error("double free")]
    DoubleFree,
}
