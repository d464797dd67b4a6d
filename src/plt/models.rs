//! Data structures representing decoded PLT file components.

use std::fmt;
use super::error::{PltError, Result};

/// Dataset role declared in the file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Full,
    Grid,
    Solution,
}

impl TryFrom<i16> for FileType {
    type Error = PltError;
    fn try_from(value: i16) -> Result<Self> {
        match value {
            0 => Ok(Self::Full),
            1 => Ok(Self::Grid),
            2 => Ok(Self::Solution),
            other => Err(PltError::UnknownFileType(other)),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileType::Full => "FULL",
            FileType::Grid => "GRID",
            FileType::Solution => "SOLUTION",
        };
        write!(f, "{}", name)
    }
}

/// Where a zone's variable values live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarLocation {
    /// Location code 0: every variable is node centered.
    NodeCentered,
    /// Location code 1: one location code per variable, in variable order.
    PerVariable(Vec<u32>),
}

/// Grid extent of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneExtent {
    /// Structured zone with an explicit Imax x Jmax x Kmax grid.
    Ordered { imax: u32, jmax: u32, kmax: u32 },
    /// Finite-element zone. Only the connectivity count is consumed; the
    /// element topology itself is not decoded.
    FiniteElement { connectivity_count: u32 },
}

impl ZoneExtent {
    /// Number of values stored per variable in the data section.
    pub fn num_values(&self) -> usize {
        match *self {
            ZoneExtent::Ordered { imax, jmax, kmax } => (imax as usize)
                .saturating_mul(jmax as usize)
                .saturating_mul(kmax as usize),
            ZoneExtent::FiniteElement { .. } => 0,
        }
    }
}

/// Metadata for a single zone, decoded from the header section.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneMetadata {
    pub name: String,
    pub parent_zone: u32,
    pub strand_id: u32,
    pub solution_time: f64,
    /// 0 = ORDERED; anything else is a finite-element variant, not further
    /// distinguished.
    pub zone_type: u32,
    pub var_location: VarLocation,
    pub raw_face_neighbors: u32,
    pub user_defined_face_neighbors: u32,
    pub extent: ZoneExtent,
    pub aux_data_name_pair: u32,
}

/// Parsed file header: global metadata plus one [`ZoneMetadata`] per zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// 8-byte ASCII version tag, e.g. `#!TDV112`.
    pub magic: [u8; 8],
    pub byte_order: i16,
    pub file_type: FileType,
    pub title: String,
    pub var_names: Vec<String>,
    /// Absolute offset just past the 357.0 end-of-header sentinel.
    pub end_of_header: usize,
    /// Absolute offsets of the 299.0 markers inside the header section,
    /// index-aligned with `zones`.
    pub zone_markers: Vec<usize>,
    pub zones: Vec<ZoneMetadata>,
}

impl Header {
    pub fn num_vars(&self) -> usize {
        self.var_names.len()
    }

    pub fn num_zones(&self) -> usize {
        self.zones.len()
    }

    /// The magic tag as text.
    pub fn magic_str(&self) -> String {
        self.magic.iter().map(|&b| b as char).collect()
    }

    /// The magic tag as a big-endian ordered 64-bit integer.
    pub fn magic_value(&self) -> u64 {
        u64::from_be_bytes(self.magic)
    }
}

/// Per-zone data record. All per-variable vectors are parallel to
/// [`Header::var_names`].
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneData {
    /// Raw per-variable format codes, stored verbatim.
    pub var_formats: Vec<u32>,
    /// Per-variable passive codes; present when the passive flag is nonzero.
    pub passive: Option<Vec<u32>>,
    /// Per-variable share codes; present when the sharing flag is nonzero.
    pub shared: Option<Vec<u32>>,
    pub conn_sharing: u32,
    /// (min, max) per active variable; `None` for passive and shared variables.
    pub min_max: Vec<Option<(f64, f64)>>,
    /// Dense values per variable, [`ZoneExtent::num_values`] long each.
    pub values: Vec<Vec<f32>>,
}

impl ZoneData {
    /// Whether the variable at `index` is in the active set, i.e. neither
    /// passive nor shared.
    pub fn is_active(&self, index: usize) -> bool {
        let passive = self.passive.as_ref().is_some_and(|p| p[index] != 0);
        let shared = self.shared.as_ref().is_some_and(|s| s[index] != 0);
        !passive && !shared
    }
}

/// Fully decoded file: the header plus one [`ZoneData`] per zone,
/// index-aligned with [`Header::zones`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub header: Header,
    /// Absolute offsets of the 299.0 markers in the data section.
    pub zone_markers: Vec<usize>,
    pub zones: Vec<ZoneData>,
}
