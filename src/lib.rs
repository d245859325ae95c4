//! Lossless compression of integer raster data.
//!
//! The Terse format is aimed at scientific detector output, like diffraction
//! frames and greyscale image stacks, where most pixels are small numbers and
//! a few are large. It packs runs of integers into blocks that only spend as
//! many bits per value as the largest value in the block actually needs, with
//! a tiny self-describing block header that shrinks to a single bit whenever
//! consecutive blocks need the same width.
//!
//! Multiple equally-shaped frames can be stacked into one [`Terse`] container
//! and extracted again by index. A container serializes to any byte stream as
//! a small textual header followed by the packed payload. The payload is
//! written bit-by-bit in little-endian-within-byte order, so big- and
//! little-endian machines produce identical files.
//!
//! Signed data is packed as two's complement with the sign bit on top of each
//! field, which costs one bit per value. If your data is never negative,
//! encode it as unsigned.
//!
//! ```
//! use terse::Terse;
//!
//! let numbers: Vec<i32> = (-500..500).collect();
//! let stack = Terse::from_slice(&numbers);
//! assert!(stack.compressed_size() < numbers.len() * 4 * 3 / 10);
//!
//! let mut file = Vec::new();
//! stack.write(&mut file).unwrap();
//!
//! let mut back = Terse::read(&file[..]).unwrap();
//! let mut decoded = vec![0i32; 1000];
//! back.decode_frame(0, &mut decoded).unwrap();
//! assert_eq!(decoded, numbers);
//! ```
//!
//! The [`framed`] module holds the container and the textual header, the
//! [`raw`] module the bit-level codec underneath it. [`Sample`] and
//! [`FromSample`] are the seams through which integer (and, for decoding,
//! float) element types plug into the codec.

#![forbid(unsafe_code)]

pub mod framed;
pub mod raw;
mod sample;

pub use framed::{ParseError, Terse, TerseError, TerseHeader, DEFAULT_BLOCK};
pub use sample::{FromSample, Sample};
