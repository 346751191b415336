//! Encode → decode → blit round trips with patterns and sizes chosen to
//! stress row padding and the bottom-up row order.

use monobmp::*;

fn checkerboard(width: u32, height: u32) -> BitCanvas {
    let mut canvas = BitCanvas::new(width, height);
    for y in 0..height {
        for x in 0..width {
            canvas.set(x, y, (x + y) % 2 == 0);
        }
    }
    canvas
}

fn noise(width: u32, height: u32) -> BitCanvas {
    let mut canvas = BitCanvas::new(width, height);
    let mut state: u32 = 0xDEAD_BEEF;
    for y in 0..height {
        for x in 0..width {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            canvas.set(x, y, state & 1 == 1);
        }
    }
    canvas
}

fn roundtrip(canvas: &BitCanvas) -> BitCanvas {
    let file = encode(canvas).unwrap();
    let mut screen = BitCanvas::new(canvas.width(), canvas.height());
    draw(&mut MemorySource::new(&file), &mut screen, 0, 0).unwrap();
    screen
}

#[test]
fn all_on_pattern_survives() {
    for (width, height) in [(1, 1), (3, 2), (8, 8), (21, 5), (32, 3)] {
        let mut canvas = BitCanvas::new(width, height);
        for y in 0..height {
            for x in 0..width {
                canvas.set(x, y, true);
            }
        }
        let screen = roundtrip(&canvas);
        for y in 0..height {
            for x in 0..width {
                assert!(screen.get(x, y), "pixel ({x}, {y}) off in {width}x{height}");
            }
        }
    }
}

#[test]
fn checkerboards_across_padding_boundaries() {
    // Widths straddling both the byte boundary (multiples of 8) and the
    // 4-byte row padding boundary (multiples of 32 pixels)
    for width in [1, 3, 7, 8, 9, 15, 16, 17, 24, 25, 31, 32, 33, 40] {
        for height in [1, 2, 5, 8] {
            let canvas = checkerboard(width, height);
            assert_eq!(roundtrip(&canvas), canvas, "{width}x{height} checkerboard");
        }
    }
}

#[test]
fn noise_pattern_survives() {
    let canvas = noise(37, 23);
    assert_eq!(roundtrip(&canvas), canvas);
}

#[test]
fn single_corner_pixels_survive() {
    let (width, height) = (13, 7);
    for (x, y) in [(0, 0), (12, 0), (0, 6), (12, 6)] {
        let mut canvas = BitCanvas::new(width, height);
        canvas.set(x, y, true);
        let screen = roundtrip(&canvas);
        for cy in 0..height {
            for cx in 0..width {
                assert_eq!(screen.get(cx, cy), (cx, cy) == (x, y));
            }
        }
    }
}

#[test]
fn blit_offset_translates_the_image() {
    let canvas = checkerboard(9, 4);
    let file = encode(&canvas).unwrap();

    let mut screen = BitCanvas::new(32, 16);
    draw(&mut MemorySource::new(&file), &mut screen, 5, 3).unwrap();

    for y in 0..16 {
        for x in 0..32 {
            let inside = (5..14).contains(&x) && (3..7).contains(&y);
            let expected = inside && canvas.get(x - 5, y - 3);
            assert_eq!(screen.get(x, y), expected, "screen pixel ({x}, {y})");
        }
    }
}

#[test]
fn reusing_a_loaded_image_blits_identically() {
    let canvas = noise(17, 9);
    let file = encode(&canvas).unwrap();

    let mut source = MemorySource::new(&file);
    let mut image = BmpImage::parse(&mut source).unwrap();
    image.load(&mut source).unwrap();
    drop(source); // the byte source is not needed past load

    let mut first = BitCanvas::new(17, 9);
    let mut second = BitCanvas::new(17, 9);
    image.blit(&mut first, 0, 0).unwrap();
    image.blit(&mut second, 0, 0).unwrap();
    assert_eq!(first, canvas);
    assert_eq!(second, canvas);
}

#[test]
fn encoded_header_matches_the_wire_format() {
    let file = encode(&checkerboard(9, 4)).unwrap();
    // 9 pixels → 2 line bytes → 4-byte stride; 4 rows of pixel data
    assert_eq!(&file[0..2], b"BM");
    assert_eq!(file.len(), 62 + 16);
    assert_eq!(u32::from_le_bytes(file[2..6].try_into().unwrap()), 78);
    assert_eq!(u32::from_le_bytes(file[10..14].try_into().unwrap()), 62);
    assert_eq!(u32::from_le_bytes(file[18..22].try_into().unwrap()), 9);
    assert_eq!(u32::from_le_bytes(file[22..26].try_into().unwrap()), 4);
    assert_eq!(u16::from_le_bytes(file[28..30].try_into().unwrap()), 1);
    assert_eq!(u32::from_le_bytes(file[34..38].try_into().unwrap()), 16);
}
