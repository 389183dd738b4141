//! Blueprint parsing from files and strings.

use std::{
    path::{Component, Path},
    str::FromStr,
};

use tsgen_typescript::Indent;

use crate::{Blueprint, BlueprintFile, Error, Result, SourceContext};

impl FromStr for BlueprintFile {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_blueprint(s, "tsgen.toml")
    }
}

impl BlueprintFile {
    /// Parse a blueprint from the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_blueprint(&content, &path.display().to_string())
    }
}

/// Parse a blueprint from content with the given filename for error reporting.
pub fn parse_blueprint(content: &str, filename: &str) -> Result<BlueprintFile> {
    let source = SourceContext::new(content, filename);
    let blueprint: Blueprint = toml::from_str(content).map_err(|e| source.parse_error(e))?;
    validate(&blueprint, &source)?;
    tracing::debug!(filename, files = blueprint.files.len(), "parsed blueprint");
    Ok(BlueprintFile { blueprint, source })
}

fn validate(blueprint: &Blueprint, source: &SourceContext) -> Result<()> {
    if blueprint.options.indent > Indent::MAX_WIDTH {
        return Err(source.validation_error(format!(
            "indent must be at most {} spaces",
            Indent::MAX_WIDTH
        )));
    }

    for file in &blueprint.files {
        let path = file.path.get_ref();
        if path.trim().is_empty() {
            return Err(
                source.validation_error_at("file path must not be empty", file.path.span())
            );
        }
        if escapes_out_dir(path) {
            return Err(source.validation_error_at(
                "file path must be relative and must not contain '..'",
                file.path.span(),
            ));
        }
    }
    Ok(())
}

fn escapes_out_dir(path: &str) -> bool {
    Path::new(path).components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}
