//! Lowering blueprints into construct trees.

use std::path::PathBuf;

use miette::SourceSpan;
use tsgen_typescript::{Class, Generator, GeneratorOptions};

use crate::{BlueprintFile, ClassSpec, Result};

impl BlueprintFile {
    /// Build the construct tree described by this blueprint.
    ///
    /// `indent` overrides `[options] indent` when set.
    pub fn to_generator(&self, out_dir: impl Into<PathBuf>, indent: Option<usize>) -> Generator {
        let mut options: GeneratorOptions = self.blueprint.options;
        if let Some(indent) = indent {
            options.indent = indent;
        }

        let mut generator = Generator::new(out_dir, options);
        for spec in &self.blueprint.files {
            let file = generator.add_source_file(spec.path.get_ref());
            for interface in &spec.interfaces {
                file.add_interface(&interface.name, interface.export, |i| {
                    for prop in &interface.properties {
                        i.add_property(&prop.name, &prop.ty);
                    }
                });
            }
            for class in &spec.classes {
                file.add_class(class.name.get_ref(), class.export, |c| lower_class(class, c));
            }
        }
        generator
    }

    /// Render the blueprint, attaching source locations to render failures.
    pub fn render(&self, indent: Option<usize>) -> Result<String> {
        self.to_generator(".", indent)
            .render()
            .map_err(|e| {
                let span = self.span_for(&e);
                self.source.render_error(e, span)
            })
    }

    fn span_for(&self, error: &tsgen_typescript::Error) -> Option<SourceSpan> {
        match error {
            tsgen_typescript::Error::MissingConstructor { class } => self
                .blueprint
                .files
                .iter()
                .flat_map(|file| &file.classes)
                .find(|spec| spec.name.get_ref() == class && spec.constructor.is_none())
                .map(|spec| spec.name.span().into()),
            tsgen_typescript::Error::PathOutsideOutDir { path } => self
                .blueprint
                .files
                .iter()
                .find(|file| file.path.get_ref() == path)
                .map(|file| file.path.span().into()),
            tsgen_typescript::Error::IndentTooWide { .. } => None,
        }
    }
}

fn lower_class(spec: &ClassSpec, class: &mut Class) {
    class.set_extends(&spec.extends);
    for member in &spec.members {
        class.add_member(&member.name, &member.ty, &member.scope);
    }
    if let Some(ctor) = &spec.constructor {
        class.add_constructor(|c| {
            for param in &ctor.parameters {
                c.add_parameter(&param.name, &param.ty);
            }
            for assignment in &ctor.assignments {
                c.add_assignment(&assignment.lhs, &assignment.rhs);
            }
        });
    }
    for method in &spec.methods {
        class.add_class_method(&method.name, |m| {
            m.set_scope(&method.scope).set_return_type(&method.returns);
            for param in &method.parameters {
                m.add_parameter(&param.name, &param.ty);
            }
        });
    }
}
