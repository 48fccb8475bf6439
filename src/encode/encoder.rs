// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Node to Function encoder

use super::Node;
use crate::error::{Result, ScadError};
use crate::function::Function;
use tracing::{debug, trace};

/// Encode an optional node, rejecting an absent one
pub fn encode_optional(node: Option<&dyn Node>) -> Result<Function> {
    match node {
        Some(node) => encode(node),
        None => Err(ScadError::InvalidInput),
    }
}

/// Encode a node into a [`Function`].
///
/// Fields are classified in declaration order:
///
/// - module name fields set the module name (the runtime value wins when
///   non-empty and the field is not private)
/// - function name fields set the call name; a second one is an error
/// - parameter fields set a parameter when their value is set; two set
///   values for the same key are an error
/// - a children field encodes each child in order; a second one is an error
///
/// If the node then provides a replacement via [`Node::encode_instead`], the
/// replacement is encoded and given this node's module name. Otherwise a node
/// without a call name falls back to its lowercased type name.
pub fn encode<N: Node + ?Sized>(node: &N) -> Result<Function> {
    let type_name = node.type_name();
    let mut function = Function::default();
    let mut has_name = false;
    let mut has_children = false;

    for field in node.fields() {
        let scad_name = field.scad_name();
        trace!(type_name, ?field, scad_name = %scad_name, "classifying field");

        if let Some(provider) = field.module_name_provider() {
            let mut module_name = scad_name.clone();
            if !field.is_private() {
                let runtime = provider.module_name();
                if !runtime.is_empty() {
                    module_name = runtime.to_string();
                }
            }
            function.module_name = Some(module_name);
        }

        if let Some(provider) = field.function_name_provider() {
            if has_name {
                return Err(ScadError::AmbiguousName { type_name });
            }
            has_name = true;

            let mut name = scad_name.clone();
            if !field.is_private() {
                let runtime = provider.function_name();
                if !runtime.is_empty() {
                    name = runtime.to_string();
                }
            }
            function.name = name;
        }

        // private parameters and children are invisible to the encoder
        if field.is_private() {
            continue;
        }

        if let Some(provider) = field.parameter_provider() {
            let (value, set) = provider.parameter_value();
            if set && function.set_parameter(scad_name.clone(), value) {
                return Err(ScadError::ParameterCollision {
                    type_name,
                    key: scad_name,
                });
            }
        }

        if let Some(children) = field.child_sequence() {
            if has_children {
                return Err(ScadError::MultipleChildSequences { type_name });
            }
            has_children = true;

            function.children = children
                .iter()
                .map(|child| encode(child.node()))
                .collect::<Result<Vec<_>>>()?;
        }
    }

    if let Some(replacement) = node.encode_instead()? {
        let mut replaced = encode(replacement.node())?;
        replaced.module_name = function.module_name;
        debug!(
            type_name,
            name = %replaced.name,
            module = ?replaced.module_name,
            "encoded node through replacement"
        );
        return Ok(replaced);
    }

    if function.name.is_empty() {
        function.name = type_name.to_lowercase();
    }
    if function.name.is_empty() {
        return Err(ScadError::MissingName { type_name });
    }

    debug!(
        type_name,
        name = %function.name,
        module = ?function.module_name,
        parameters = function.parameters.len(),
        children = function.children.len(),
        "encoded node"
    );

    Ok(function)
}
