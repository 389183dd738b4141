use thiserror::Error;

/// Result type for rendering construct trees.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A class was rendered before `add_constructor` was called on it.
    #[error("class '{class}' has no constructor")]
    MissingConstructor { class: String },

    /// A source file path is absolute or climbs out with `..`.
    #[error("source file path '{path}' is outside the output directory")]
    PathOutsideOutDir { path: String },

    #[error("indent width {width} exceeds the maximum of {max}")]
    IndentTooWide { width: usize, max: usize },
}
