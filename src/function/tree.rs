// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Function call tree

use crate::error::{Result, ScadError};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single OpenSCAD call, such as `cube(size=10);`, with its nested children
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    /// When set, this Function is split into its own module file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,

    /// Call name, such as "cube", "cylinder", "translate"
    pub name: String,

    /// Rendered parameter values, keyed by parameter name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, String>,

    /// Nested calls, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Function>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = Some(module_name.into());
        self
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_parameter(key, value);
        self
    }

    pub fn with_child(mut self, child: Function) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_module(&self) -> bool {
        self.module_name.is_some()
    }

    /// Set a parameter, returning whether a previous value was replaced
    pub fn set_parameter(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        self.parameters.insert(key.into(), value.into()).is_some()
    }

    /// Modules directly below this Function.
    ///
    /// A module hides its own descendants, so modules nested under another
    /// module are not returned.
    pub fn find_modules(&self) -> Vec<&Function> {
        let mut modules = Vec::new();
        self.collect_modules(&mut modules);
        modules
    }

    fn collect_modules<'a>(&'a self, modules: &mut Vec<&'a Function>) {
        for child in &self.children {
            if child.is_module() {
                modules.push(child);
            } else {
                child.collect_modules(modules);
            }
        }
    }

    /// One module per distinct name, sorted by name.
    ///
    /// Fails if two modules share a name but differ in content.
    pub fn deduplicate_modules(&self) -> Result<Vec<&Function>> {
        let mut seen: AHashMap<&str, &Function> = AHashMap::new();

        for module in self.find_modules() {
            let name = module.module_name.as_deref().unwrap_or_default();
            match seen.get(name) {
                Some(existing) if *existing != module => {
                    return Err(ScadError::ModuleNameConflict(name.to_string()));
                }
                Some(_) => {}
                None => {
                    seen.insert(name, module);
                }
            }
        }

        let mut modules: Vec<(&str, &Function)> = seen.into_iter().collect();
        modules.sort_by(|a, b| a.0.cmp(b.0));

        Ok(modules.into_iter().map(|(_, module)| module).collect())
    }
}
