//! Bencode reader and writer.
//!
//! Grammar:
//!
//! ```text
//! value  := int | string | list | dict
//! int    := 'i' '-'? digits 'e'
//! string := digits ':' bytes
//! list   := 'l' value* 'e'
//! dict   := 'd' (string value)* 'e'
//! ```

use crate::error::{BencError, Result};
use crate::value::{BencDict, BencValue};

/// Maximum container nesting accepted by the decoder.
pub const MAX_DEPTH: usize = 64;

// =============================================================================
// ENCODING
// =============================================================================

/// Encode a tree to bytes.
pub fn encode(value: &BencValue) -> Vec<u8> {
    let mut out = Vec::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut Vec<u8>, value: &BencValue) {
    match value {
        BencValue::Int(n) => {
            out.push(b'i');
            out.extend_from_slice(n.to_string().as_bytes());
            out.push(b'e');
        }
        BencValue::Str(bytes) => write_bytes(out, bytes),
        BencValue::Array(items) => {
            out.push(b'l');
            for item in items {
                write_value(out, item);
            }
            out.push(b'e');
        }
        BencValue::Dict(dict) => write_dict(out, dict),
    }
}

fn write_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(bytes.len().to_string().as_bytes());
    out.push(b':');
    out.extend_from_slice(bytes);
}

fn write_dict(out: &mut Vec<u8>, dict: &BencDict) {
    out.push(b'd');
    for (key, value) in dict.iter() {
        write_bytes(out, key.as_bytes());
        write_value(out, value);
    }
    out.push(b'e');
}

impl BencValue {
    /// Encode this tree to bytes.
    pub fn encode(&self) -> Vec<u8> {
        encode(self)
    }

    /// Decode a complete tree from bytes.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        decode(bytes)
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Decode a complete tree from bytes.
///
/// The whole input must be consumed by a single root value.
pub fn decode(bytes: &[u8]) -> Result<BencValue> {
    let mut decoder = Decoder { bytes, pos: 0 };
    let value = decoder.read_value(0)?;
    if decoder.pos != bytes.len() {
        return Err(BencError::TrailingData { offset: decoder.pos });
    }
    Ok(value)
}

struct Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Decoder<'_> {
    fn peek(&self) -> Result<u8> {
        self.bytes
            .get(self.pos)
            .copied()
            .ok_or(BencError::UnexpectedEof { offset: self.pos })
    }

    fn read_value(&mut self, depth: usize) -> Result<BencValue> {
        match self.peek()? {
            b'i' => self.read_int().map(BencValue::Int),
            b'0'..=b'9' => self.read_bytes().map(|bytes| BencValue::Str(bytes.to_vec())),
            b'l' => self.read_list(depth + 1).map(BencValue::Array),
            b'd' => self.read_dict(depth + 1).map(BencValue::Dict),
            byte => Err(BencError::UnexpectedByte {
                byte,
                offset: self.pos,
            }),
        }
    }

    fn read_int(&mut self) -> Result<i64> {
        let start = self.pos;
        self.pos += 1;
        let end = self.bytes[self.pos..]
            .iter()
            .position(|&b| b == b'e')
            .map(|i| self.pos + i)
            .ok_or(BencError::UnexpectedEof {
                offset: self.bytes.len(),
            })?;
        let digits = &self.bytes[self.pos..end];
        let invalid = BencError::InvalidInteger { offset: start };

        // Reject "", "-", "-0" and leading zeros; the grammar has one spelling per number.
        let unsigned = digits.strip_prefix(b"-").unwrap_or(digits);
        if unsigned.is_empty()
            || !unsigned.iter().all(u8::is_ascii_digit)
            || (unsigned[0] == b'0' && (unsigned.len() > 1 || digits.len() > 1))
        {
            return Err(invalid);
        }
        let value = std::str::from_utf8(digits)
            .ok()
            .and_then(|text| text.parse::<i64>().ok())
            .ok_or(invalid)?;

        self.pos = end + 1;
        Ok(value)
    }

    fn read_bytes(&mut self) -> Result<&[u8]> {
        let start = self.pos;
        let colon = self.bytes[self.pos..]
            .iter()
            .position(|&b| b == b':')
            .map(|i| self.pos + i)
            .ok_or(BencError::UnexpectedEof {
                offset: self.bytes.len(),
            })?;
        let digits = &self.bytes[self.pos..colon];
        if digits.is_empty()
            || !digits.iter().all(u8::is_ascii_digit)
            || (digits[0] == b'0' && digits.len() > 1)
        {
            return Err(BencError::InvalidLength { offset: start });
        }
        let len = std::str::from_utf8(digits)
            .ok()
            .and_then(|text| text.parse::<usize>().ok())
            .ok_or(BencError::InvalidLength { offset: start })?;

        let data_start = colon + 1;
        let data_end = data_start
            .checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(BencError::UnexpectedEof {
                offset: self.bytes.len(),
            })?;
        self.pos = data_end;
        Ok(&self.bytes[data_start..data_end])
    }

    fn enter(&self, depth: usize) -> Result<()> {
        if depth > MAX_DEPTH {
            return Err(BencError::NestingTooDeep {
                max: MAX_DEPTH,
                offset: self.pos,
            });
        }
        Ok(())
    }

    fn read_list(&mut self, depth: usize) -> Result<Vec<BencValue>> {
        self.enter(depth)?;
        self.pos += 1;
        let mut items = Vec::new();
        while self.peek()? != b'e' {
            items.push(self.read_value(depth)?);
        }
        self.pos += 1;
        Ok(items)
    }

    fn read_dict(&mut self, depth: usize) -> Result<BencDict> {
        self.enter(depth)?;
        self.pos += 1;
        let mut dict = BencDict::new();
        loop {
            let next = self.peek()?;
            if next == b'e' {
                break;
            }
            let key_offset = self.pos;
            if !next.is_ascii_digit() {
                return Err(BencError::NonStringKey { offset: key_offset });
            }
            let key = std::str::from_utf8(self.read_bytes()?)
                .map_err(|_| BencError::NonStringKey { offset: key_offset })?
                .to_owned();
            let value = self.read_value(depth)?;
            // Older writers did not always sort keys; accept any order, last one wins.
            dict.insert(key, value);
        }
        self.pos += 1;
        Ok(dict)
    }
}
