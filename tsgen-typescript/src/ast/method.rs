//! Class method builder.

use tsgen_codegen::{CodeFragment, Renderable};

use super::{Param, ParamList, modifier, prefix};
use crate::{Construct, Result};

/// A class method rendered as an arrow-function property with an empty body:
///
/// ```text
/// private doSomething = (input: string) : string => {
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ClassMethod {
    name: String,
    return_type: Option<String>,
    scope: Option<String>,
    params: ParamList,
}

impl ClassMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            scope: None,
            params: ParamList::new(),
        }
    }

    /// Set the return type. An empty string removes it.
    pub fn set_return_type(&mut self, ty: impl Into<String>) -> &mut Self {
        self.return_type = modifier(ty);
        self
    }

    /// Set the visibility scope. An empty string removes it.
    pub fn set_scope(&mut self, scope: impl Into<String>) -> &mut Self {
        self.scope = modifier(scope);
        self
    }

    pub fn add_parameter(&mut self, name: impl Into<String>, ty: impl Into<String>) -> &mut Self {
        self.params.push(Param::new(name, ty));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn params(&self) -> &ParamList {
        &self.params
    }

    fn signature(&self) -> String {
        let returns = self
            .return_type
            .as_deref()
            .map(|ty| format!(" : {}", ty))
            .unwrap_or_default();
        format!(
            "{}{} = ({}){} => {{",
            prefix(self.scope.as_deref()),
            self.name,
            self.params,
            returns
        )
    }
}

impl Renderable for ClassMethod {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(self.signature(), Vec::new())]
    }
}

impl Construct for ClassMethod {
    fn fragments(&self) -> Result<Vec<CodeFragment>> {
        Ok(self.to_fragments())
    }
}

#[cfg(test)]
mod tests {
    use tsgen_codegen::Indent;

    use super::*;

    fn build(method: &ClassMethod) -> String {
        method.render_with_indent(Indent::TYPESCRIPT).unwrap()
    }

    #[test]
    fn test_full_signature() {
        let mut m = ClassMethod::new("doSomething");
        m.set_return_type("string")
            .set_scope("private")
            .add_parameter("input", "string")
            .add_parameter("anotherInput", "number");
        assert_eq!(
            build(&m),
            "private doSomething = (input: string, anotherInput: number) : string => {\n}\n"
        );
    }

    #[test]
    fn test_bare_method_has_no_modifiers() {
        let m = ClassMethod::new("run");
        assert_eq!(build(&m), "run = () => {\n}\n");
    }

    #[test]
    fn test_last_write_wins() {
        let mut m = ClassMethod::new("load");
        m.set_scope("public")
            .set_scope("protected")
            .set_return_type("void")
            .set_return_type("Promise<void>");
        assert_eq!(m.scope(), Some("protected"));
        assert_eq!(m.return_type(), Some("Promise<void>"));
    }

    #[test]
    fn test_empty_scope_clears() {
        let mut m = ClassMethod::new("load");
        m.set_scope("private").set_scope("");
        assert_eq!(m.scope(), None);
        assert!(build(&m).starts_with("load = "));
    }
}
