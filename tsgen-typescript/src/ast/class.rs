//! TypeScript class builder.

use tsgen_codegen::{CodeFragment, Renderable};

use super::{ClassMethod, Constructor, modifier, prefix};
use crate::{Construct, Error, Result};

/// A class field, rendered as `[scope ]name : type;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassProperty {
    pub name: String,
    pub ty: String,
    pub scope: Option<String>,
}

impl ClassProperty {
    /// Create a field. An empty `scope` means no visibility modifier.
    pub fn new(name: impl Into<String>, ty: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            scope: modifier(scope),
        }
    }
}

impl Renderable for ClassProperty {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "{}{} : {};",
            prefix(self.scope.as_deref()),
            self.name,
            self.ty
        ))]
    }
}

impl Construct for ClassProperty {
    fn fragments(&self) -> Result<Vec<CodeFragment>> {
        Ok(self.to_fragments())
    }
}

/// Builder for TypeScript classes.
///
/// The body renders fields, then the constructor, then methods (each
/// followed by a blank line). A class cannot be rendered until a
/// constructor has been added.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    exported: bool,
    extends: Option<String>,
    members: Vec<ClassProperty>,
    constructor: Option<Constructor>,
    methods: Vec<ClassMethod>,
}

impl Class {
    pub fn new(name: impl Into<String>, exported: bool) -> Self {
        Self {
            name: name.into(),
            exported,
            extends: None,
            members: Vec::new(),
            constructor: None,
            methods: Vec::new(),
        }
    }

    /// Append a field.
    pub fn add_member(
        &mut self,
        name: impl Into<String>,
        ty: impl Into<String>,
        scope: impl Into<String>,
    ) -> &mut Self {
        self.members.push(ClassProperty::new(name, ty, scope));
        self
    }

    /// Set the inheritance clause, used verbatim (e.g. `extends Base`).
    /// An empty string removes it.
    pub fn set_extends(&mut self, clause: impl Into<String>) -> &mut Self {
        self.extends = modifier(clause);
        self
    }

    /// Build the constructor. A second call replaces the first one.
    pub fn add_constructor(&mut self, build: impl FnOnce(&mut Constructor)) -> &mut Self {
        let mut constructor = Constructor::new();
        build(&mut constructor);
        if self.constructor.replace(constructor).is_some() {
            tracing::debug!(class = %self.name, "replaced existing constructor");
        }
        self
    }

    /// Append a method configured by `build`.
    pub fn add_class_method(
        &mut self,
        name: impl Into<String>,
        build: impl FnOnce(&mut ClassMethod),
    ) -> &mut Self {
        let mut method = ClassMethod::new(name);
        build(&mut method);
        self.methods.push(method);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_exported(&self) -> bool {
        self.exported
    }

    pub fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }

    pub fn members(&self) -> &[ClassProperty] {
        &self.members
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.constructor.as_ref()
    }

    pub fn methods(&self) -> &[ClassMethod] {
        &self.methods
    }

    fn header(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let extends = self
            .extends
            .as_deref()
            .map(|clause| format!(" {}", clause))
            .unwrap_or_default();
        format!("{}class {}{} {{", export, self.name, extends)
    }
}

impl Construct for Class {
    fn fragments(&self) -> Result<Vec<CodeFragment>> {
        let constructor = self
            .constructor
            .as_ref()
            .ok_or_else(|| Error::MissingConstructor {
                class: self.name.clone(),
            })?;

        let mut body: Vec<CodeFragment> = self
            .members
            .iter()
            .flat_map(ClassProperty::to_fragments)
            .collect();
        body.extend(constructor.to_fragments());
        for method in &self.methods {
            body.extend(method.to_fragments());
            body.push(CodeFragment::Blank);
        }

        Ok(vec![CodeFragment::braced(self.header(), body)])
    }
}
