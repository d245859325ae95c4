//! The raw Terse bit format.
//!
//! Using this directly saves you the container bookkeeping and the textual
//! header, but you have to remember the frame length, block size and
//! signedness yourself; none of it is recorded in the raw bit-stream.
//!
//! A frame is a sequence of blocks. Each block packs up to `block` values
//! into fields of a single width, preceded by a header that either reuses
//! the previous block's width or spells out a new one:
//!
//! | bits (first bit first)  | meaning                      |
//! |-------------------------|------------------------------|
//! | `1`                     | same width as previous block |
//! | `0` + 3-bit `a`, a < 7  | width `a`                    |
//! | `0 111` + 2-bit `b` < 3 | width `7 + b`                |
//! | `0 111 11` + 6-bit `c`  | width `10 + c`               |
//!
//! All fields go into the stream low bit first, continuing into the more
//! significant bits of following bytes, which is what makes the format
//! independent of host byte order. A frame is padded with zero bits to the
//! next byte boundary so that every frame starts on a whole byte.

pub(crate) mod bits;
mod compress;
mod decompress;

pub use bits::{BitReader, BitWriter};
pub use compress::*;
pub use decompress::*;
