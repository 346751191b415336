#![no_main]
use libfuzzer_sys::fuzz_target;
use monobmp::{BitCanvas, BmpImage, Limits, MemorySource, draw_with_limits};

fuzz_target!(|data: &[u8]| {
    // Header parse on arbitrary bytes — must never panic
    let _ = BmpImage::parse(&mut MemorySource::new(data));

    // Full pipeline with display-sized limits — must never panic or read
    // out of bounds, whatever the header claims
    let limits = Limits {
        max_width: Some(4096),
        max_height: Some(4096),
        max_pixels: Some(1 << 22),
        max_alloc_bytes: Some(1 << 20),
    };
    let mut screen = BitCanvas::new(128, 64);
    let _ = draw_with_limits(
        &mut MemorySource::new(data),
        &mut screen,
        0,
        0,
        Some(&limits),
    );
});
