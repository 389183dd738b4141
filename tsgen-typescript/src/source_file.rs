//! A single output file holding interfaces and classes.

use tsgen_codegen::{CodeFragment, Renderable};

use crate::{
    Construct, Result,
    ast::{Class, Interface},
};

/// One generated file.
///
/// Interfaces always render before classes, each followed by a blank line.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: String,
    interfaces: Vec<Interface>,
    classes: Vec<Class>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            interfaces: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Path relative to the generator's output directory.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Append an interface configured by `build`.
    pub fn add_interface(
        &mut self,
        name: impl Into<String>,
        export: bool,
        build: impl FnOnce(&mut Interface),
    ) -> &mut Self {
        let mut interface = Interface::new(name, export);
        build(&mut interface);
        self.interfaces.push(interface);
        self
    }

    /// Append a class configured by `build`.
    pub fn add_class(
        &mut self,
        name: impl Into<String>,
        export: bool,
        build: impl FnOnce(&mut Class),
    ) -> &mut Self {
        let mut class = Class::new(name, export);
        build(&mut class);
        self.classes.push(class);
        self
    }

    pub fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }
}

impl Construct for SourceFile {
    fn fragments(&self) -> Result<Vec<CodeFragment>> {
        let mut fragments = Vec::new();

        for interface in &self.interfaces {
            fragments.extend(interface.to_fragments());
            fragments.push(CodeFragment::Blank);
        }

        for class in &self.classes {
            fragments.extend(class.fragments()?);
            fragments.push(CodeFragment::Blank);
        }

        Ok(fragments)
    }
}

#[cfg(test)]
mod tests {
    use tsgen_codegen::Indent;

    use super::*;
    use crate::Error;

    #[test]
    fn test_empty_file() {
        let file = SourceFile::new("empty.ts");
        assert_eq!(file.render_with_indent(Indent::TYPESCRIPT).unwrap(), "");
    }

    #[test]
    fn test_interfaces_render_before_classes() {
        let mut file = SourceFile::new("models.ts");
        file.add_class("A", false, |c| {
            c.add_constructor(|_| {});
        })
        .add_interface("B", false, |_| {});

        let code = file.render_with_indent(Indent::TYPESCRIPT).unwrap();
        assert_eq!(
            code,
            "interface B {\n}\n\nclass A {\n  constructor() {\n  }\n}\n\n"
        );
    }

    #[test]
    fn test_missing_constructor_propagates() {
        let mut file = SourceFile::new("models.ts");
        file.add_class("NoCtor", true, |c| {
            c.add_member("x", "number", "");
        });

        let err = file.render_with_indent(Indent::TYPESCRIPT).unwrap_err();
        assert_eq!(
            err,
            Error::MissingConstructor {
                class: "NoCtor".to_string()
            }
        );
    }
}
