#![no_main]
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use terse::Terse;

fuzz_target!(|data: &[u8]| {
    let mut stack = match Terse::read(Cursor::new(data)) {
        Ok(stack) => stack,
        Err(_) => return,
    };

    // don't let a hostile header talk us into allocating the moon
    if stack.values_per_frame() > 1 << 16 || stack.frame_count() > 64 {
        return;
    }

    let mut out = vec![0i64; stack.values_per_frame()];
    for frame in 0..stack.frame_count() {
        let _ = stack.decode_frame(frame, &mut out);
    }
});
