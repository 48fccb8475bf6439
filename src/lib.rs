// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyscad
//!
//! Encodes trees of typed Rust shapes into OpenSCAD source. Shapes become a
//! [`Function`] call tree, which is rendered as text or written as a set of
//! module files that `use` each other by relative path.

pub mod config;
pub mod dice;
pub mod encode;
pub mod error;
pub mod function;
pub mod shapes;
pub mod value;

pub use config::OutputConfig;
pub use encode::{encode, encode_optional, Child, Field, Node};
pub use error::{Result, ScadError};
pub use function::{Function, Writer};

use std::path::Path;

/// Render a node as the content of a single OpenSCAD file
pub fn function_content<N: Node + ?Sized>(node: &N) -> Result<String> {
    encode(node)?.content()
}

/// Encode a node and write it, and its nested modules, into `dir`.
/// The node must encode to a module.
pub fn write<N: Node + ?Sized>(dir: impl AsRef<Path>, node: &N) -> Result<()> {
    encode(node)?.write(dir)
}

/// Write each node into its own directory, stopping at the first failure
pub fn write_all<'a, P, I>(samples: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (P, &'a dyn Node)>,
{
    for (dir, node) in samples {
        write(dir, node)?;
    }

    Ok(())
}
