//! Codepoint-pair string decoding.
//!
//! The format stores strings as a sequence of 32-bit slots: an all-zero slot
//! terminates the string, any other slot carries a single ASCII character in
//! its first byte. Slots are consumed two at a time, in 8-byte blocks.

use byteorder::{ByteOrder, LittleEndian};
use super::error::{PltError, Result};

/// One decoded 4-byte character slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSlot {
    /// Nonzero slot: the first byte holds the character.
    Char(char),
    /// All-zero slot: end of string.
    Terminator,
}

/// A decoded string together with the number of bytes consumed, terminator
/// slot included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedString {
    pub text: String,
    pub consumed: usize,
}

/// Decode a single 4-byte character slot.
///
/// Defined only for exactly 4 input bytes; any other length fails with
/// [`PltError::TruncatedInput`].
pub fn decode_char_block(bytes: &[u8]) -> Result<CharSlot> {
    if bytes.len() != 4 {
        return Err(PltError::TruncatedInput {
            context: "character slot",
            offset: 0,
        });
    }
    if LittleEndian::read_u32(bytes) == 0 {
        Ok(CharSlot::Terminator)
    } else {
        Ok(CharSlot::Char(bytes[0] as char))
    }
}

/// Decode a zero-terminated string starting at `offset`.
///
/// Reads 8-byte blocks of two slots each. A terminator in the first slot
/// counts 4 bytes of the final block as consumed, a terminator in the second
/// slot counts 8. Fails with [`PltError::UnterminatedString`] if the buffer
/// runs out before a terminator appears.
pub fn decode_string(buffer: &[u8], offset: usize) -> Result<DecodedString> {
    let mut text = String::new();
    let mut block = offset;
    loop {
        match decode_slot(buffer, block, offset)? {
            CharSlot::Terminator => {
                return Ok(DecodedString {
                    text,
                    consumed: block + 4 - offset,
                });
            }
            CharSlot::Char(c) => text.push(c),
        }
        match decode_slot(buffer, block + 4, offset)? {
            CharSlot::Terminator => {
                return Ok(DecodedString {
                    text,
                    consumed: block + 8 - offset,
                });
            }
            CharSlot::Char(c) => text.push(c),
        }
        block += 8;
    }
}

fn decode_slot(buffer: &[u8], at: usize, string_start: usize) -> Result<CharSlot> {
    let end = at
        .checked_add(4)
        .filter(|&end| end <= buffer.len())
        .ok_or(PltError::UnterminatedString {
            offset: string_start,
        })?;
    decode_char_block(&buffer[at..end])
}
