//! Shared rendering primitives for tsgen.
//!
//! Construct trees describe their output as [`CodeFragment`]s and let a
//! [`CodeBuilder`] apply indentation. The indent width lives only in the
//! builder, so constructs never need to know it.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, Indent)

pub mod builder;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
