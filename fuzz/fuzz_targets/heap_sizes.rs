#![no_main]

use libfuzzer_sys::fuzz_target;

/// Fuzz target that reads the input as a run of request sizes, allocates them
/// all, then frees in input order. Whatever the size mix, the region must
/// collapse back to a single free block with its original capacity.
const REGION_SIZE: usize = 32 * 1024;

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

fuzz_target!(|data: &[u8]| {
    let mut region = vec![0u8; REGION_SIZE];
    let mut heap = new_heap(&mut region);
    let initial = heap.available();

    let mut live = Vec::new();
    for chunk in data.chunks_exact(2) {
        let size = u16::from_le_bytes([chunk[0], chunk[1]]) as usize;
        if let Some(ptr) = heap.allocate(size) {
            live.push(ptr);
        }
    }

    for ptr in live {
        unsafe { heap.free(ptr.as_ptr()).unwrap() };
    }

    assert_eq!(heap.available(), initial);
    assert_eq!(heap.free_blocks().count(), 1);
});
