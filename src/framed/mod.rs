//! The Terse container format.
//!
//! A container stacks one or more equally-shaped frames into a single
//! payload and serializes as a textual element followed by the raw bytes:
//!
//! ```text
//! <Terse prolix_bits="12" signed="0" block="12" memory_size="91388"
//!        number_of_values="262144" dimensions="512 512" number_of_frames="2"/>
//! ```
//!
//! The element carries everything needed to decode: the widest value seen
//! (`prolix_bits`), signedness, the block size, the payload byte count, the
//! number of values per frame, optional frame dimensions, and the frame
//! count. Containers are self-terminating on the stream, so several can be
//! written back to back and read again one after the other.

mod header;
mod stack;

/// How many values share one encoded bit width unless configured otherwise.
pub const DEFAULT_BLOCK: usize = 12;

pub use header::{ParseError, TerseHeader};
pub use stack::{Terse, TerseError};
