//! # plt-reader
//!
//! A reader for Tecplot binary (.plt) CFD datasets.
//! Decodes the `#!TDV112`-style container from a fully buffered byte slice
//! into header metadata (title, variable names, zone dimensions, solution
//! times) and dense per-variable f32 arrays per zone.
pub mod plt;

// Re-export the main types for convenience
pub use plt::{
    read_dataset, Dataset, FileType, Header, PltError, Result, VarLocation, ZoneData, ZoneExtent,
    ZoneMetadata,
};
