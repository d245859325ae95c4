use byteorder::ReadBytesExt;
use fehler::{throw, throws};
use std::io::{self, Read, Write};
use std::str::FromStr;
use thiserror::Error;

/// Errors when parsing the textual header.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("stream ended before a <Terse .../> element turned up")]
    MissingElement,
    #[error("the <Terse element never closes")]
    Unterminated,
    #[error("header is missing the {0} attribute")]
    MissingAttribute(&'static str),
    #[error("header attribute {name} is not a number: {value:?}")]
    BadNumber { name: &'static str, value: String },
    #[error("a block size of zero cannot hold any values")]
    ZeroBlockSize,
    #[error("error reading from the input you gave me")]
    Io(#[from] io::Error),
}
type Error = ParseError; // do it this way for better docs

/// Attribute text longer than this is nobody's header.
const MAX_ELEMENT_LEN: usize = 1 << 16;

/// The parsed form of the `<Terse .../>` element that precedes the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerseHeader {
    /// Widest value in the payload, in bits.
    pub prolix_bits: u32,
    /// Whether the payload was encoded from signed data.
    pub signed: bool,
    /// Values per encoded block.
    pub block: usize,
    /// Payload length in bytes, all frames together.
    pub memory_size: usize,
    /// Values per frame.
    pub number_of_values: usize,
    /// Frame dimensions; empty when never set.
    pub dimensions: Vec<usize>,
    /// Frames in the stack.
    pub number_of_frames: usize,
}

impl TerseHeader {
    /// Scan `reader` for the element and parse it.
    ///
    /// Bytes are taken one at a time, so when this returns the stream
    /// position is exactly on the first payload byte. Anything before the
    /// element is skipped; some writers put whitespace or other elements
    /// in front of it.
    #[throws]
    pub fn parse<R: Read>(mut reader: R) -> Self {
        const OPEN: &[u8] = b"<Terse";
        let mut matched = 0;
        loop {
            let byte = match reader.read_u8() {
                Ok(byte) => byte,
                Err(ref e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    throw!(Error::MissingElement)
                }
                Err(e) => throw!(Error::Io(e)),
            };
            if byte == OPEN[matched] {
                matched += 1;
                if matched == OPEN.len() {
                    break;
                }
            } else {
                matched = if byte == b'<' { 1 } else { 0 };
            }
        }

        let mut text = Vec::new();
        loop {
            let byte = match reader.read_u8() {
                Ok(byte) => byte,
                Err(ref e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    throw!(Error::Unterminated)
                }
                Err(e) => throw!(Error::Io(e)),
            };
            text.push(byte);
            if text.ends_with(b"/>") {
                text.truncate(text.len() - 2);
                break;
            }
            if text.len() > MAX_ELEMENT_LEN {
                throw!(Error::Unterminated);
            }
        }
        let text = String::from_utf8_lossy(&text).into_owned();

        let mut dimensions = Vec::new();
        if let Some(list) = attribute(&text, "dimensions") {
            for token in list.split_whitespace() {
                let dim = token.parse().map_err(|_| Error::BadNumber {
                    name: "dimensions",
                    value: token.to_owned(),
                })?;
                dimensions.push(dim);
            }
        }
        let number_of_frames = match attribute(&text, "number_of_frames") {
            Some(count) => count.trim().parse().map_err(|_| Error::BadNumber {
                name: "number_of_frames",
                value: count.to_owned(),
            })?,
            // a header without a frame count is a single-frame file
            None => 1,
        };

        let header = TerseHeader {
            prolix_bits: required(&text, "prolix_bits")?,
            signed: required::<u64>(&text, "signed")? != 0,
            block: required(&text, "block")?,
            memory_size: required(&text, "memory_size")?,
            number_of_values: required(&text, "number_of_values")?,
            dimensions,
            number_of_frames,
        };
        if header.block == 0 {
            throw!(Error::ZeroBlockSize);
        }
        header
    }

    /// Write the element, attributes in canonical order, no trailing byte
    /// beyond the closing `/>`.
    #[throws(io::Error)]
    pub fn emit<W: Write>(&self, mut writer: W) {
        write!(
            writer,
            "<Terse prolix_bits=\"{}\" signed=\"{}\" block=\"{}\" memory_size=\"{}\" number_of_values=\"{}\"",
            self.prolix_bits,
            self.signed as u8,
            self.block,
            self.memory_size,
            self.number_of_values,
        )?;
        if !self.dimensions.is_empty() {
            write!(writer, " dimensions=\"")?;
            for (i, dim) in self.dimensions.iter().enumerate() {
                if i > 0 {
                    write!(writer, " ")?;
                }
                write!(writer, "{}", dim)?;
            }
            write!(writer, "\"")?;
        }
        write!(writer, " number_of_frames=\"{}\"/>", self.number_of_frames)?;
    }
}

/// Look up one `name="value"` attribute in the element text.
fn attribute<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let mut rest = text;
    while let Some(eq) = rest.find('=') {
        let key = rest[..eq].trim();
        let tail = rest[eq + 1..].trim_start();
        if !tail.starts_with('"') {
            return None;
        }
        let tail = &tail[1..];
        let close = tail.find('"')?;
        if key == name {
            return Some(&tail[..close]);
        }
        rest = &tail[close + 1..];
    }
    None
}

#[throws]
fn required<T: FromStr>(text: &str, name: &'static str) -> T {
    let value = attribute(text, name).ok_or(Error::MissingAttribute(name))?;
    value.trim().parse().map_err(|_| Error::BadNumber {
        name,
        value: value.to_owned(),
    })?
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TerseHeader {
        TerseHeader {
            prolix_bits: 12,
            signed: false,
            block: 12,
            memory_size: 91388,
            number_of_values: 262144,
            dimensions: vec![512, 512],
            number_of_frames: 2,
        }
    }

    #[test]
    fn emits_the_canonical_element() {
        let mut out = Vec::new();
        sample().emit(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<Terse prolix_bits=\"12\" signed=\"0\" block=\"12\" memory_size=\"91388\" \
             number_of_values=\"262144\" dimensions=\"512 512\" number_of_frames=\"2\"/>"
        );
    }

    #[test]
    fn parses_what_it_emits() {
        let mut out = Vec::new();
        sample().emit(&mut out).unwrap();
        let parsed = TerseHeader::parse(&out[..]).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn skips_leading_junk_and_stops_on_the_terminator() {
        let bytes = b"noise < more noise <Terse prolix_bits=\"3\" signed=\"1\" block=\"12\" \
                      memory_size=\"5\" number_of_values=\"12\"/>PAYLOAD";
        let mut reader = &bytes[..];
        let parsed = TerseHeader::parse(&mut reader).unwrap();
        assert_eq!(parsed.prolix_bits, 3);
        assert!(parsed.signed);
        assert!(parsed.dimensions.is_empty());
        assert_eq!(parsed.number_of_frames, 1);
        // the stream is left exactly on the payload
        assert_eq!(reader, b"PAYLOAD");
    }

    #[test]
    fn missing_attribute_is_reported_by_name() {
        let bytes = b"<Terse signed=\"0\" block=\"12\" memory_size=\"0\" number_of_values=\"0\"/>";
        match TerseHeader::parse(&bytes[..]) {
            Err(ParseError::MissingAttribute("prolix_bits")) => {}
            other => panic!("expected a missing attribute, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_attribute_is_rejected() {
        let bytes = b"<Terse prolix_bits=\"lots\" signed=\"0\" block=\"12\" \
                      memory_size=\"0\" number_of_values=\"0\"/>";
        match TerseHeader::parse(&bytes[..]) {
            Err(ParseError::BadNumber { name: "prolix_bits", .. }) => {}
            other => panic!("expected a bad number, got {:?}", other),
        }
    }

    #[test]
    fn truncated_streams_fail_cleanly() {
        assert!(matches!(
            TerseHeader::parse(&b"nothing here"[..]),
            Err(ParseError::MissingElement)
        ));
        assert!(matches!(
            TerseHeader::parse(&b"<Terse prolix_bits=\"1\""[..]),
            Err(ParseError::Unterminated)
        ));
    }

    #[test]
    fn zero_block_is_rejected() {
        let bytes = b"<Terse prolix_bits=\"0\" signed=\"0\" block=\"0\" \
                      memory_size=\"0\" number_of_values=\"0\"/>";
        assert!(matches!(
            TerseHeader::parse(&bytes[..]),
            Err(ParseError::ZeroBlockSize)
        ));
    }
}
