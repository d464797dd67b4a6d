//! Core PLT decoding module.
//!
//! Layered decoder for Tecplot-style binary datasets. The caller supplies a
//! fully buffered byte slice; parsing performs no I/O of its own.
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌──────────────────┐
//! │  Header          │ ← header::parse()
//! │  (magic, title,  │   uses strings (codepoint pairs), markers
//! │   vars, zones)   │   (sentinel scan) and zone (metadata records)
//! ├──────────────────┤
//! │  Data Section    │ ← data::parse()
//! │  (per-zone flags,│
//! │   min/max, bulk  │
//! │   f32 arrays)    │
//! └──────────────────┘
//! ```

pub mod data;
pub mod error;
pub mod header;
pub mod markers;
pub mod models;
pub mod strings;
pub mod zone;

mod cursor;

pub use error::{PltError, Result};
pub use models::{
    Dataset, FileType, Header, VarLocation, ZoneData, ZoneExtent, ZoneMetadata,
};

/// Parse the header and every zone's data in one call.
pub fn read_dataset(buffer: &[u8]) -> Result<Dataset> {
    let header = header::parse(buffer)?;
    data::parse(buffer, &header)
}
