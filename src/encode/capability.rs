// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Capabilities a field value may provide to the encoder

use serde::{Deserialize, Serialize};

/// Provides the call name of the enclosing node
pub trait FunctionNameProvider {
    /// The call name, or an empty string to use the field's name instead
    fn function_name(&self) -> &str;
}

/// Marks the enclosing node as a standalone module
pub trait ModuleNameProvider {
    /// The module name, or an empty string to use the field's name instead
    fn module_name(&self) -> &str;
}

/// Provides the rendered value of one named parameter
pub trait ParameterProvider {
    /// Rendered text, and whether the value was explicitly set
    fn parameter_value(&self) -> (String, bool);
}

/// Zero-sized marker that names a node after the field holding it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoName;

impl FunctionNameProvider for AutoName {
    fn function_name(&self) -> &str {
        ""
    }
}

/// Name of the module a node is split into
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ModuleNameProvider for ModuleName {
    fn module_name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModuleName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ModuleName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
