use crate::raw::bits::BitReader;
use crate::sample::FromSample;

/// Read the width prefix of one block.
///
/// Mirrors the encoder exactly: a set bit keeps the previous width, a clear
/// bit is followed by the 3, then 5, then 11 bit absolute forms, each
/// all-ones field escaping into the next longer one.
fn read_block_header(reader: &mut BitReader<'_>, previous_width: &mut u32) -> u32 {
    if reader.read_bit() {
        return *previous_width;
    }
    let mut width = reader.read_bits(3) as u32;
    if width == 7 {
        width += reader.read_bits(2) as u32;
        if width == 10 {
            width += reader.read_bits(6) as u32;
        }
    }
    // the encoder never produces widths above 64; clamping keeps a corrupt
    // stream from asking the bit reader for impossible field sizes
    let width = width.min(64);
    *previous_width = width;
    width
}

/// Decode one frame from the start of `payload` into `out`.
///
/// `signed_source` must match what the frame was encoded from. Returns the
/// number of bytes the frame occupies, padding included, which is exactly
/// where the next frame of a stack begins.
pub fn decode_frame<T: FromSample>(
    payload: &[u8],
    block: usize,
    signed_source: bool,
    out: &mut [T],
) -> usize {
    assert!(block > 0, "a block must hold at least one value");
    let mut reader = BitReader::new(payload);
    let mut previous_width = 0u32;
    for chunk in out.chunks_mut(block) {
        let width = read_block_header(&mut reader, &mut previous_width);
        if width == 0 {
            for slot in chunk.iter_mut() {
                *slot = T::default();
            }
        } else {
            for slot in chunk.iter_mut() {
                *slot = T::from_field(reader.read_bits(width), width, signed_source);
            }
        }
    }
    reader.align_to_byte();
    reader.position_bits() / 8
}

/// Walk one frame without materializing any values.
///
/// Only the block headers are decoded; each payload is skipped in one jump
/// of `width * values_in_block` bits. The final block may hold fewer than
/// `block` values and is skipped by its true size. Returns the frame's byte
/// length, the same number [`decode_frame`] would have produced.
pub fn scan_frame(payload: &[u8], frame_len: usize, block: usize) -> usize {
    assert!(block > 0, "a block must hold at least one value");
    let mut reader = BitReader::new(payload);
    let mut previous_width = 0u32;
    let mut remaining = frame_len;
    while remaining > 0 {
        let width = read_block_header(&mut reader, &mut previous_width);
        let in_block = remaining.min(block);
        reader.skip_bits(width as usize * in_block);
        remaining -= in_block;
    }
    reader.align_to_byte();
    reader.position_bits() / 8
}
