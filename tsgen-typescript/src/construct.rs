//! The render capability shared by every block-level construct.

use tsgen_codegen::{CodeBuilder, CodeFragment, Indent};

use crate::{Error, Result};

/// A node of the construct tree that can be rendered to source text.
///
/// Rendering is a pure traversal: it never mutates the construct, so calling
/// it repeatedly on an unchanged tree yields identical text.
pub trait Construct {
    /// Convert this construct and its children to code fragments.
    fn fragments(&self) -> Result<Vec<CodeFragment>>;

    /// Render with the given indentation.
    ///
    /// Widths above [`Indent::MAX_WIDTH`] are rejected.
    fn render_with_indent(&self, indent: Indent) -> Result<String> {
        if indent.width() > Indent::MAX_WIDTH {
            return Err(Error::IndentTooWide {
                width: indent.width(),
                max: Indent::MAX_WIDTH,
            });
        }
        let mut builder = CodeBuilder::new(indent);
        builder.extend(self.fragments()?);
        Ok(builder.build())
    }
}
