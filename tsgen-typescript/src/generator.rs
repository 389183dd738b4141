//! Root of the construct tree.

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use tsgen_codegen::{CodeFragment, Indent};
use tsgen_core::{File, FileRules, WriteResult};

use crate::{Construct, Error, Result, SourceFile};

/// Options fixed for the lifetime of a [`Generator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorOptions {
    /// Spaces per nesting level.
    pub indent: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            indent: Indent::TYPESCRIPT.width(),
        }
    }
}

/// Owns every source file of a generation run.
#[derive(Debug, Clone)]
pub struct Generator {
    out_dir: PathBuf,
    indent: Indent,
    files: Vec<SourceFile>,
}

impl Generator {
    pub fn new(out_dir: impl Into<PathBuf>, options: GeneratorOptions) -> Self {
        Self {
            out_dir: out_dir.into(),
            indent: Indent::spaces(options.indent),
            files: Vec::new(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    pub fn source_files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Append a new source file and return it for building.
    ///
    /// Paths are not deduplicated.
    pub fn add_source_file(&mut self, path: impl Into<String>) -> &mut SourceFile {
        let index = self.files.len();
        self.files.push(SourceFile::new(path));
        tracing::trace!(path = %self.files[index].path(), "added source file");
        &mut self.files[index]
    }

    /// Render every file, each preceded by a `// path` comment.
    pub fn render(&self) -> Result<String> {
        self.render_with_indent(self.indent)
    }

    /// Render each file body on its own, keyed by its output path.
    ///
    /// Fails before producing anything if any class lacks a constructor or
    /// any path would land outside the output directory.
    pub fn files(&self) -> Result<Vec<File>> {
        self.files
            .iter()
            .map(|file| -> Result<File> {
                let path = confine(file.path())?;
                let content = file.render_with_indent(self.indent)?;
                Ok(File::new(self.out_dir.join(path), content))
            })
            .collect()
    }

    /// Write every file under the output directory.
    pub fn generate(&self) -> eyre::Result<Vec<WriteResult>> {
        self.generate_with_rules(FileRules::default())
    }

    /// Write every file under the output directory using `rules`.
    pub fn generate_with_rules(&self, rules: FileRules) -> eyre::Result<Vec<WriteResult>> {
        let files = self.files()?;
        let mut results = Vec::with_capacity(files.len());
        for file in files {
            results.push(file.with_rules(rules).write()?);
        }
        tracing::debug!(
            out_dir = %self.out_dir.display(),
            count = results.len(),
            "generated source files"
        );
        Ok(results)
    }
}

/// Only plain relative paths stay under the output directory.
fn confine(path: &str) -> Result<&Path> {
    let relative = Path::new(path);
    let escapes = relative.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(Error::PathOutsideOutDir {
            path: path.to_string(),
        });
    }
    Ok(relative)
}

impl Construct for Generator {
    fn fragments(&self) -> Result<Vec<CodeFragment>> {
        let mut fragments = Vec::new();
        for file in &self.files {
            fragments.push(CodeFragment::Blank);
            fragments.push(CodeFragment::line(format!("// {}", file.path())));
            fragments.extend(file.fragments()?);
        }
        Ok(fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        assert_eq!(GeneratorOptions::default().indent, 2);
    }

    #[test]
    fn test_empty_generator() {
        let generator = Generator::new("out", GeneratorOptions::default());
        assert_eq!(generator.render().unwrap(), "");
    }

    #[test]
    fn test_duplicate_paths_render_independently() {
        let mut generator = Generator::new("out", GeneratorOptions::default());
        generator.add_source_file("a.ts");
        generator.add_source_file("a.ts");

        assert_eq!(generator.render().unwrap(), "\n// a.ts\n\n// a.ts\n");
        assert_eq!(generator.files().unwrap().len(), 2);
    }

    #[test]
    fn test_absolute_path_is_rejected() {
        let mut generator = Generator::new("out", GeneratorOptions::default());
        generator.add_source_file("/etc/escaped.ts");

        assert_eq!(
            generator.files().unwrap_err(),
            Error::PathOutsideOutDir {
                path: "/etc/escaped.ts".to_string()
            }
        );
    }

    #[test]
    fn test_parent_dir_path_is_rejected() {
        let mut generator = Generator::new("out", GeneratorOptions::default());
        generator.add_source_file("models/../../sibling.ts");

        assert_eq!(
            generator.files().unwrap_err(),
            Error::PathOutsideOutDir {
                path: "models/../../sibling.ts".to_string()
            }
        );
    }

    #[test]
    fn test_current_dir_components_are_allowed() {
        let mut generator = Generator::new("out", GeneratorOptions::default());
        generator.add_source_file("./src/a.ts");

        assert_eq!(
            generator.files().unwrap()[0].path(),
            Path::new("out/src/a.ts")
        );
    }

    #[test]
    fn test_indent_too_wide() {
        let width = usize::MAX / 2 + 1;
        let mut generator = Generator::new("out", GeneratorOptions { indent: width });
        generator
            .add_source_file("a.ts")
            .add_interface("A", false, |i| {
                i.add_property("x", "number");
            });

        assert_eq!(
            generator.render().unwrap_err(),
            Error::IndentTooWide {
                width,
                max: Indent::MAX_WIDTH
            }
        );
        assert!(generator.files().is_err());
    }

    #[test]
    fn test_files_are_joined_to_out_dir() {
        let mut generator = Generator::new("out", GeneratorOptions { indent: 4 });
        generator
            .add_source_file("src/point.ts")
            .add_interface("Point", true, |i| {
                i.add_property("x", "number");
            });

        let files = generator.files().unwrap();
        assert_eq!(files[0].path(), Path::new("out/src/point.ts"));
        assert_eq!(
            files[0].content(),
            "export interface Point {\n    x: number;\n}\n\n"
        );
    }
}
