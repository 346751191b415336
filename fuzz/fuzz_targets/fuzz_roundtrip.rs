#![no_main]
use libfuzzer_sys::fuzz_target;
use monobmp::{BitCanvas, MemorySource, draw, encode};

fuzz_target!(|data: &[u8]| {
    // Interpret the input as (width seed, bit pattern); encoding the
    // pattern and decoding it back must reproduce every bit.
    let Some((&seed, bits)) = data.split_first() else {
        return;
    };
    let width = u32::from(seed % 64) + 1;
    let height = ((bits.len() * 8) as u32 / width).min(64);
    if height == 0 {
        return;
    }

    let mut canvas = BitCanvas::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let i = (y * width + x) as usize;
            let on = bits[i / 8] >> (7 - i % 8) & 1 == 1;
            canvas.set(x, y, on);
        }
    }

    let file = encode(&canvas).expect("display-sized canvas must encode");
    let mut screen = BitCanvas::new(width, height);
    draw(&mut MemorySource::new(&file), &mut screen, 0, 0)
        .expect("freshly encoded file must decode");
    assert_eq!(canvas, screen, "roundtrip bit mismatch");
});
