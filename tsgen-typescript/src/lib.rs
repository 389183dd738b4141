//! TypeScript source builder.
//!
//! Build a tree of interfaces and classes through an imperative API, then
//! render it to text. Every construct renders through
//! [`CodeFragment`](tsgen_codegen::CodeFragment)s, so the indent width is
//! supplied once at render time instead of being stored in the tree.
//!
//! ```
//! use tsgen_typescript::{Generator, GeneratorOptions};
//!
//! let mut generator = Generator::new("out", GeneratorOptions { indent: 2 });
//! generator
//!     .add_source_file("point.ts")
//!     .add_interface("Point", true, |i| {
//!         i.add_property("x", "number").add_property("y", "number");
//!     });
//!
//! let code = generator.render().unwrap();
//! assert_eq!(
//!     code,
//!     "\n// point.ts\nexport interface Point {\n  x: number;\n  y: number;\n}\n\n"
//! );
//! ```
//!
//! # Generated Output
//!
//! - Interfaces render before classes within a file, whatever the call order.
//! - Class methods render as empty arrow-function stubs.
//! - A class must be given a constructor before it can be rendered;
//!   otherwise rendering fails with [`Error::MissingConstructor`].

mod construct;
mod error;
mod generator;
mod source_file;

pub mod ast;

pub use ast::{
    Assignment, Class, ClassMethod, ClassProperty, Constructor, Interface, Param, ParamList,
    Property,
};
pub use construct::Construct;
pub use error::{Error, Result};
pub use generator::{Generator, GeneratorOptions};
pub use source_file::SourceFile;
pub use tsgen_codegen::Indent;
pub use tsgen_core::{FileRules, Overwrite, WriteResult};
