//! Declarative TOML blueprints for tsgen.
//!
//! A blueprint describes the same tree the builder API constructs:
//! files, their interfaces and classes, and class members. Declaration
//! order in the TOML is the order things are rendered in.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod lower;
mod parse;

use serde::Deserialize;
use toml::Spanned;
use tsgen_typescript::GeneratorOptions;

pub use error::{Error, Result, SourceContext};
pub use parse::parse_blueprint;

/// Root of a blueprint file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Blueprint {
    /// Generator options such as the indent width
    #[serde(default)]
    pub options: GeneratorOptions,

    /// Source files, in output order
    #[serde(default)]
    pub files: Vec<FileSpec>,
}

/// One `[[files]]` entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSpec {
    pub path: Spanned<String>,
    #[serde(default)]
    pub interfaces: Vec<InterfaceSpec>,
    #[serde(default)]
    pub classes: Vec<ClassSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InterfaceSpec {
    pub name: String,
    #[serde(default)]
    pub export: bool,
    #[serde(default)]
    pub properties: Vec<TypedSpec>,
}

/// A `name` / `type` pair, used for interface properties and parameters.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypedSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassSpec {
    pub name: Spanned<String>,
    #[serde(default)]
    pub export: bool,
    /// Inheritance clause, copied verbatim (e.g. `extends Base`)
    #[serde(default)]
    pub extends: String,
    #[serde(default)]
    pub members: Vec<MemberSpec>,
    pub constructor: Option<ConstructorSpec>,
    #[serde(default)]
    pub methods: Vec<MethodSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub scope: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorSpec {
    #[serde(default)]
    pub parameters: Vec<TypedSpec>,
    #[serde(default)]
    pub assignments: Vec<AssignmentSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssignmentSpec {
    pub lhs: String,
    pub rhs: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodSpec {
    pub name: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub returns: String,
    #[serde(default)]
    pub parameters: Vec<TypedSpec>,
}

/// A parsed blueprint together with the source it came from.
#[derive(Debug)]
pub struct BlueprintFile {
    blueprint: Blueprint,
    source: SourceContext,
}

impl BlueprintFile {
    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    pub fn source(&self) -> &SourceContext {
        &self.source
    }
}
