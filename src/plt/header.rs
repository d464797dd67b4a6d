//! PLT file header parsing.
//!
//! Header structure (all fields little-endian):
//! ```text
//! [8 bytes] Magic tag, e.g. "#!TDV112"
//! [4 bytes] Byte order (i16 in the low half)
//! [4 bytes] File type (i16 in the low half): 0=FULL, 1=GRID, 2=SOLUTION
//! [var]     Title (codepoint-pair string)
//! [4 bytes] Variable count (i32)
//! [var]     Variable names, one string each
//! [var]     Zone metadata records, each opened by a 299.0 marker
//! [4 bytes] End-of-header sentinel 357.0
//! ```

use log::{debug, info};
use super::cursor::Cursor;
use super::error::{PltError, Result};
use super::markers::{self, END_OF_HEADER, ZONE_MARKER};
use super::models::{FileType, Header};
use super::strings;
use super::zone;

const MAGIC_LEN: usize = 8;

/// Parse the file header from the beginning of `buffer`.
pub fn parse(buffer: &[u8]) -> Result<Header> {
    info!("Parsing PLT header");

    if buffer.len() < MAGIC_LEN {
        return Err(PltError::TruncatedInput {
            context: "magic number",
            offset: 0,
        });
    }
    let mut magic = [0u8; MAGIC_LEN];
    magic.copy_from_slice(&buffer[..MAGIC_LEN]);

    // Byte order and file type are 2-byte values, each stored in a 4-byte slot.
    let mut cursor = Cursor::new(buffer, MAGIC_LEN);
    let byte_order = cursor.read_i16("byte order")?;
    cursor.skip(2, "byte order padding")?;
    let file_type_code = cursor.read_i16("file type")?;
    cursor.skip(2, "file type padding")?;
    let file_type = FileType::try_from(file_type_code)?;

    let title = strings::decode_string(buffer, cursor.position())?;
    let mut cursor = Cursor::new(buffer, cursor.position() + title.consumed);
    let num_vars = cursor.read_i32("variable count")?.max(0) as usize;
    debug!(
        "Dataset '{}' ({}): {} variable(s)",
        title.text, file_type, num_vars
    );

    let mut var_names = Vec::with_capacity(num_vars);
    let mut at = cursor.position();
    for _ in 0..num_vars {
        let name = strings::decode_string(buffer, at)?;
        at += name.consumed;
        var_names.push(name.text);
    }

    // Everything between the variable names and the 357.0 sentinel belongs to
    // the header's zone records.
    let section = &buffer[at..];
    let end_rel = markers::find_first(section, section.len(), END_OF_HEADER)?;
    let end_of_header = at + end_rel;

    let zone_markers: Vec<usize> = markers::find_all(section, end_rel, ZONE_MARKER)
        .into_iter()
        .map(|marker| at + marker)
        .collect();
    debug!(
        "{} zone marker(s) in header, end of header at offset {}",
        zone_markers.len(),
        end_of_header
    );

    let mut zones = Vec::with_capacity(zone_markers.len());
    for &marker in &zone_markers {
        zones.push(zone::parse(buffer, marker + 4, num_vars)?);
    }

    info!(
        "Header parsed: title='{}', {} variable(s), {} zone(s)",
        title.text,
        var_names.len(),
        zones.len()
    );

    Ok(Header {
        magic,
        byte_order,
        file_type,
        title: title.text,
        var_names,
        end_of_header,
        zone_markers,
        zones,
    })
}
