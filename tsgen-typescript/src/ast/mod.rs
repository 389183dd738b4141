//! TypeScript syntax builders for interfaces, classes and their members.
//!
//! Inline pieces ([`Param`], [`ParamList`], [`Assignment`]) implement
//! `Display`. Everything that occupies whole lines implements
//! [`Renderable`](tsgen_codegen::Renderable), except [`Class`], which can fail
//! and only implements [`Construct`](crate::Construct).

mod class;
mod constructor;
mod interface;
mod method;
mod params;

pub use class::{Class, ClassProperty};
pub use constructor::{Assignment, Constructor};
pub use interface::{Interface, Property};
pub use method::ClassMethod;
pub use params::{Param, ParamList};

/// Treat an empty modifier string as "not set".
pub(crate) fn modifier(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|s| !s.is_empty())
}

/// Render an optional leading modifier followed by a space.
pub(crate) fn prefix(value: Option<&str>) -> String {
    value.map(|v| format!("{} ", v)).unwrap_or_default()
}
