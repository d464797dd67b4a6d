//! Sentinel scanning for section and zone boundaries.
//!
//! The format delimits sections with fixed little-endian f32 values written at
//! 4-byte-aligned offsets: 357.0 terminates the header, 299.0 opens each zone
//! record, both in the header and in the data section.

use byteorder::{ByteOrder, LittleEndian};
use log::trace;
use super::error::{PltError, Result};

/// End-of-header sentinel.
pub const END_OF_HEADER: f32 = 357.0;
/// Zone record sentinel.
pub const ZONE_MARKER: f32 = 299.0;

/// Walk 4-byte-aligned offsets in `bytes[..bound]` and collect the offsets
/// where the f32 value matches `sentinel` bit-for-bit, stopping early once
/// `limit` matches are found.
fn scan(bytes: &[u8], bound: usize, sentinel: f32, limit: Option<usize>) -> Vec<usize> {
    let bound = bound.min(bytes.len());
    let needle = sentinel.to_bits();
    let mut hits = Vec::new();
    let mut at = 0;
    while at + 4 <= bound {
        if LittleEndian::read_u32(&bytes[at..at + 4]) == needle {
            trace!("Sentinel {} at offset {}", sentinel, at);
            hits.push(at);
            if limit.is_some_and(|n| hits.len() == n) {
                break;
            }
        }
        at += 4;
    }
    hits
}

/// Bounded scan for the first `sentinel` match in `bytes[..bound]`, returning
/// the offset immediately past the match.
pub fn find_first(bytes: &[u8], bound: usize, sentinel: f32) -> Result<usize> {
    match scan(bytes, bound, sentinel, Some(1)).first() {
        Some(&at) => Ok(at + 4),
        None => Err(PltError::MarkerNotFound {
            sentinel,
            expected: 1,
            found: 0,
        }),
    }
}

/// Bounded scan collecting every `sentinel` match offset in `bytes[..bound]`.
pub fn find_all(bytes: &[u8], bound: usize, sentinel: f32) -> Vec<usize> {
    scan(bytes, bound, sentinel, None)
}

/// Counted scan for exactly `count` matches anywhere in `bytes`, returning
/// absolute offsets with `base` added. Reaching the end of the buffer short of
/// `count` matches fails with [`PltError::MarkerNotFound`].
pub fn find_count(bytes: &[u8], sentinel: f32, count: usize, base: usize) -> Result<Vec<usize>> {
    let hits = scan(bytes, bytes.len(), sentinel, Some(count));
    if hits.len() != count {
        return Err(PltError::MarkerNotFound {
            sentinel,
            expected: count,
            found: hits.len(),
        });
    }
    Ok(hits.into_iter().map(|at| at + base).collect())
}
