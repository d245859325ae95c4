#![no_main]
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use terse::Terse;

fuzz_target!(|data: &[u8]| {
    let values: Vec<i16> = data
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    if values.is_empty() {
        // a stack of zero-length frames has no payload bytes for its frames
        // to live in, and the reader rejects it as implausible
        return;
    }

    let mut stack = Terse::from_slice(&values);
    stack.push_frame(&values).expect("same shape, same signedness");

    let mut bytes = Vec::new();
    stack.write(&mut bytes).expect("writing to a vec cannot fail");
    let mut back = Terse::read(Cursor::new(&bytes)).expect("we just wrote that");

    let mut out = vec![0i16; values.len()];
    back.decode_frame(1, &mut out).expect("frame 1 exists");
    assert_eq!(out, values);
    back.decode_frame(0, &mut out).expect("frame 0 exists");
    assert_eq!(out, values);
});
