#![no_main]

use libfuzzer_sys::fuzz_target;

/// Fuzz target that interprets a byte slice as a sequence of heap operations.
///
/// Each operation is encoded as:
///   byte 0: opcode (even = allocate, odd = free)
///   byte 1-2: size (little-endian u16)
///   byte 3: slot index (which tracked pointer to operate on)
///
/// We track up to 64 live pointers and re-check the accounting invariant
/// after every operation.
const MAX_SLOTS: usize = 64;
const REGION_SIZE: usize = 64 * 1024;

fn new_heap(buffer: &mut [u8]) -> fitmalloc::FixedHeap {
    #[cfg(feature = "logging")]
    return unsafe {
        fitmalloc::FixedHeap::new(buffer.as_mut_ptr(), buffer.len(), fitmalloc::Logger::noop())
    }
    .expect("heap init failed");
    #[cfg(not(feature = "logging"))]
    return unsafe { fitmalloc::FixedHeap::new(buffer.as_mut_ptr(), buffer.len()) }
        .expect("heap init failed");
}

/// The pattern written at allocation time must survive until the free.
fn check_pattern(ptr: std::ptr::NonNull<u8>, size: usize) {
    let checked = size.min(256);
    let slice = unsafe { std::slice::from_raw_parts(ptr.as_ptr(), checked) };
    assert!(slice.iter().all(|&b| b == 0xAA), "payload corrupted");
}

fuzz_target!(|data: &[u8]| {
    let mut region = vec![0u8; REGION_SIZE];
    let mut heap = new_heap(&mut region);

    let mut slots: [Option<std::ptr::NonNull<u8>>; MAX_SLOTS] = [None; MAX_SLOTS];
    let mut sizes = [0usize; MAX_SLOTS];

    let mut i = 0;
    while i + 4 <= data.len() {
        let opcode = data[i];
        let size = u16::from_le_bytes([data[i + 1], data[i + 2]]) as usize;
        let slot = (data[i + 3] as usize) % MAX_SLOTS;
        i += 4;

        if opcode % 2 == 0 {
            if let Some(old) = slots[slot].take() {
                check_pattern(old, sizes[slot]);
                unsafe { heap.free(old.as_ptr()).unwrap() };
            }
            if let Some(ptr) = heap.allocate(size) {
                assert_eq!(ptr.as_ptr() as usize % 16, 0);
                unsafe {
                    std::ptr::write_bytes(ptr.as_ptr(), 0xAA, size.min(256));
                }
                slots[slot] = Some(ptr);
                sizes[slot] = size;
            }
        } else if let Some(old) = slots[slot].take() {
            check_pattern(old, sizes[slot]);
            unsafe { heap.free(old.as_ptr()).unwrap() };
        }

        // available must always equal the free payload sum.
        let free_sum: usize = heap.free_blocks().map(|b| b.size).sum();
        assert_eq!(heap.available(), free_sum);
    }

    for slot in slots.iter_mut() {
        if let Some(ptr) = slot.take() {
            unsafe { heap.free(ptr.as_ptr()).unwrap() };
        }
    }
    // Everything freed: the region must collapse back to one block.
    assert_eq!(heap.free_blocks().count(), 1);
});
