//! Zone metadata record decoding.

use log::debug;
use super::cursor::Cursor;
use super::error::Result;
use super::models::{VarLocation, ZoneExtent, ZoneMetadata};
use super::strings;

/// Decode one zone metadata record starting at `offset`, which sits 4 bytes
/// past the zone's 299.0 marker.
///
/// Record layout:
/// ```text
/// [var]     Zone name (codepoint-pair string)
/// [4 bytes] Parent zone
/// [4 bytes] Strand ID
/// [8 bytes] Solution time (f64)
/// [4 bytes] Unused
/// [4 bytes] Zone type (0 = ORDERED, >0 = finite element)
/// [4 bytes] Var location flag; if 1, one u32 location code per variable
/// [4 bytes] Raw face neighbors
/// [4 bytes] User defined face neighbors
/// [12|4 b]  Imax, Jmax, Kmax (ORDERED) or connectivity count (FE)
/// [4 bytes] Aux data name pair flag
/// ```
pub fn parse(buffer: &[u8], offset: usize, num_vars: usize) -> Result<ZoneMetadata> {
    let name = strings::decode_string(buffer, offset)?;
    let mut cursor = Cursor::new(buffer, offset + name.consumed);

    let parent_zone = cursor.read_u32("parent zone")?;
    let strand_id = cursor.read_u32("strand id")?;
    let solution_time = cursor.read_f64("solution time")?;
    cursor.skip(4, "unused zone field")?;
    let zone_type = cursor.read_u32("zone type")?;

    let var_location = if cursor.read_u32("var location flag")? == 1 {
        VarLocation::PerVariable(cursor.read_u32_array(num_vars, "var location codes")?)
    } else {
        VarLocation::NodeCentered
    };

    let raw_face_neighbors = cursor.read_u32("raw face neighbors")?;
    let user_defined_face_neighbors = cursor.read_u32("user defined face neighbors")?;

    let extent = if zone_type > 0 {
        ZoneExtent::FiniteElement {
            connectivity_count: cursor.read_u32("connectivity count")?,
        }
    } else {
        ZoneExtent::Ordered {
            imax: cursor.read_u32("imax")?,
            jmax: cursor.read_u32("jmax")?,
            kmax: cursor.read_u32("kmax")?,
        }
    };

    let aux_data_name_pair = cursor.read_u32("aux data name pair flag")?;

    debug!(
        "Zone '{}' parsed: type={}, strand={}, t={}, extent={:?}",
        name.text, zone_type, strand_id, solution_time, extent
    );

    Ok(ZoneMetadata {
        name: name.text,
        parent_zone,
        strand_id,
        solution_time,
        zone_type,
        var_location,
        raw_face_neighbors,
        user_defined_face_neighbors,
        extent,
        aux_data_name_pair,
    })
}
