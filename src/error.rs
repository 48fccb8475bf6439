// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for encoding and writing

use std::path::PathBuf;

/// Result type for polyscad operations
pub type Result<T> = std::result::Result<T, ScadError>;

#[derive(Debug, thiserror::Error)]
pub enum ScadError {
    #[error("scad: attempted to encode absent value to Function")]
    InvalidInput,

    #[error("scad: attempted to encode type ({type_name}) with multiple function name fields")]
    AmbiguousName { type_name: &'static str },

    #[error("scad: attempted to encode type ({type_name}) with empty name")]
    MissingName { type_name: &'static str },

    #[error("scad: attempted to encode type ({type_name}) with multiple parameter fields with the same name: {key}")]
    ParameterCollision { type_name: &'static str, key: String },

    #[error("scad: attempted to encode type ({type_name}) with multiple children fields")]
    MultipleChildSequences { type_name: &'static str },

    #[error("scad: type ({type_name}) failed to provide its replacement: {reason}")]
    Substitution { type_name: &'static str, reason: String },

    #[error("conflicting module name: {0}")]
    ModuleNameConflict(String),

    #[error("attempted Write on non-Module ({0})")]
    NotAModule(String),

    #[error("module name is not usable as a path component: {0:?}")]
    InvalidModuleName(String),

    #[error("file extension is not usable in a file name: {0:?}")]
    InvalidExtension(String),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScadError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScadError::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a substitution failure for a collaborator type
    pub fn substitution(type_name: &'static str, reason: impl Into<String>) -> Self {
        ScadError::Substitution {
            type_name,
            reason: reason.into(),
        }
    }
}
