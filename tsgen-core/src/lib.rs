//! Core types for tsgen.
//!
//! This crate owns every filesystem write performed on behalf of a
//! generator. Construct trees never touch the disk themselves; they hand
//! finished strings to a [`File`].

mod file;

pub use file::{File, FileRules, Overwrite, WriteResult, write_file};
