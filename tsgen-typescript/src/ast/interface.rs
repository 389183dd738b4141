//! TypeScript interface builder.

use tsgen_codegen::{CodeFragment, Renderable};

use crate::{Construct, Result};

/// A typed property of an interface, rendered as `name: type;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub ty: String,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl Renderable for Property {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!("{}: {};", self.name, self.ty))]
    }
}

impl Construct for Property {
    fn fragments(&self) -> Result<Vec<CodeFragment>> {
        Ok(self.to_fragments())
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    exported: bool,
    properties: Vec<Property>,
}

impl Interface {
    pub fn new(name: impl Into<String>, exported: bool) -> Self {
        Self {
            name: name.into(),
            exported,
            properties: Vec::new(),
        }
    }

    /// Append a typed property.
    pub fn add_property(&mut self, name: impl Into<String>, ty: impl Into<String>) -> &mut Self {
        self.properties.push(Property::new(name, ty));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        vec![CodeFragment::braced(
            format!("{}interface {} {{", export, self.name),
            self.properties.iter().flat_map(Property::to_fragments).collect(),
        )]
    }
}

impl Construct for Interface {
    fn fragments(&self) -> Result<Vec<CodeFragment>> {
        Ok(self.to_fragments())
    }
}
