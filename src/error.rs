//! Error types for mesh loading and scene construction.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::obj::FaceStyle;

/// Errors that abort a mesh load. No partial mesh is ever returned.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("could not read mesh file {}: {source}", path.display())]
    File { path: PathBuf, source: io::Error },

    /// Reading from an in-memory or already opened source failed.
    #[error("could not read mesh data: {0}")]
    Io(#[from] io::Error),

    /// The content is not a valid mesh.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Malformed mesh content. Line numbers are 1-based.
#[derive(Error, Debug, PartialEq)]
pub enum FormatError {
    #[error("line {line}: `{directive}` expects {expected} values, found {found}")]
    MissingValues {
        line: usize,
        directive: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: geometry line is not valid UTF-8")]
    Encoding { line: usize },

    #[error("line {line}: `{token}` is not a number")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: a face needs exactly 3 index groups, found {found}")]
    FaceArity { line: usize, found: usize },

    #[error("line {line}: index group `{group}` does not match face style {style:?}")]
    FaceGroup {
        line: usize,
        group: String,
        style: FaceStyle,
    },

    #[error("line {line}: {table} index {index} is out of range 1..={len}")]
    IndexOutOfRange {
        line: usize,
        table: &'static str,
        index: i64,
        len: usize,
    },
}

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("could not read scene {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid scene description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("primitive {primitive} refers to unknown material {material}")]
    UnknownMaterial { primitive: usize, material: usize },

    #[error(transparent)]
    Mesh(#[from] LoadError),
}
