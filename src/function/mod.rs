// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Function call trees and their rendering to OpenSCAD files

mod render;
mod tree;
mod writer;

pub use tree::Function;
pub use writer::{is_extension_safe, is_path_safe, Writer};

/// File extension of generated module files
pub const DEFAULT_EXTENSION: &str = "scad";
