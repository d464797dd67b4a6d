//! Zone data section decoding.
//!
//! Each zone's record in the data section, opened by a 299.0 marker:
//! ```text
//! [4 bytes]   Zone marker 299.0
//! [4N bytes]  Per-variable format codes
//! [4 bytes]   Passive flag; if nonzero, one u32 passive code per variable
//! [4 bytes]   Sharing flag; if nonzero, one u32 share code per variable
//! [4 bytes]   Connectivity sharing
//! [8 bytes]   Reserved
//! [16 bytes]  (min, max) f64 pair per active variable
//! [var]       Imax*Jmax*Kmax f32 values per variable
//! ```

use log::{debug, info, trace};
use super::cursor::Cursor;
use super::error::{PltError, Result};
use super::markers::{self, ZONE_MARKER};
use super::models::{Dataset, Header, ZoneData};

/// Decode the data section described by `header` into a [`Dataset`].
///
/// The returned dataset owns a copy of the header; on failure the caller
/// keeps its header, and no partially decoded zone is returned.
pub fn parse(buffer: &[u8], header: &Header) -> Result<Dataset> {
    info!("Parsing data section: {} zone(s) expected", header.num_zones());

    let section = buffer
        .get(header.end_of_header..)
        .ok_or(PltError::TruncatedInput {
            context: "data section",
            offset: header.end_of_header,
        })?;

    // The data section must hold exactly one zone record per header zone.
    let zone_markers = match markers::find_count(
        section,
        ZONE_MARKER,
        header.num_zones(),
        header.end_of_header,
    ) {
        Ok(found) => found,
        Err(PltError::MarkerNotFound { found, .. }) => {
            return Err(PltError::InconsistentZoneCount {
                header: header.num_zones(),
                data: found,
            });
        }
        Err(e) => return Err(e),
    };

    let mut zones = Vec::with_capacity(zone_markers.len());
    for (index, &marker) in zone_markers.iter().enumerate() {
        zones.push(parse_zone(buffer, marker, index, header)?);
    }

    info!("Data section parsed: {} zone(s)", zones.len());

    Ok(Dataset {
        header: header.clone(),
        zone_markers,
        zones,
    })
}

/// Decode one zone's data record at `marker`.
fn parse_zone(buffer: &[u8], marker: usize, index: usize, header: &Header) -> Result<ZoneData> {
    let num_vars = header.num_vars();
    let mut cursor = Cursor::new(buffer, marker + 4);

    let var_formats = cursor.read_u32_array(num_vars, "variable format codes")?;

    let passive_flag = cursor.read_u32("passive variable flag")?;
    let passive = if passive_flag != 0 {
        Some(cursor.read_u32_array(num_vars, "passive variable codes")?)
    } else {
        None
    };

    let sharing_flag = cursor.read_u32("variable sharing flag")?;
    let shared = if sharing_flag != 0 {
        Some(cursor.read_u32_array(num_vars, "variable share codes")?)
    } else {
        None
    };

    let conn_sharing = cursor.read_u32("connectivity sharing")?;
    cursor.skip(8, "reserved zone data bytes")?;

    // Active set: not passive, and not shared when sharing is in effect.
    let mut min_max = vec![None; num_vars];
    for var in 0..num_vars {
        let is_passive = passive.as_ref().is_some_and(|codes| codes[var] != 0);
        let is_shared = shared.as_ref().is_some_and(|codes| codes[var] != 0);
        if is_passive || is_shared {
            continue;
        }
        let min = cursor.read_f64("variable minimum")?;
        let max = cursor.read_f64("variable maximum")?;
        min_max[var] = Some((min, max));
    }

    let num_values = header.zones[index].extent.num_values();
    trace!(
        "Zone {}: bulk values start at offset {}, {} per variable",
        index,
        cursor.position(),
        num_values
    );

    // Every variable occupies a full block, passive and shared ones included.
    let mut values = Vec::with_capacity(num_vars);
    for _ in 0..num_vars {
        values.push(cursor.read_f32_array(num_values, "variable values")?);
    }

    debug!(
        "Zone {} data parsed: {} variable(s) x {} value(s)",
        index, num_vars, num_values
    );

    Ok(ZoneData {
        var_formats,
        passive,
        shared,
        conn_sharing,
        min_max,
        values,
    })
}
