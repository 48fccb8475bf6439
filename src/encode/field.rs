// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Per-field configuration records

use super::{Child, FunctionNameProvider, ModuleNameProvider, ParameterProvider};
use std::fmt;

/// One declared field of a [`Node`](super::Node) and the capabilities its value provides
///
/// The external name of a field is its tag when one is given, otherwise the
/// lowercased identifier. A field may register more than one capability.
pub struct Field<'a> {
    ident: &'static str,
    tag: Option<&'static str>,
    private: bool,
    module_name: Option<&'a dyn ModuleNameProvider>,
    function_name: Option<&'a dyn FunctionNameProvider>,
    parameter: Option<&'a dyn ParameterProvider>,
    children: Option<&'a [Child]>,
}

impl<'a> Field<'a> {
    pub fn new(ident: &'static str) -> Self {
        Self {
            ident,
            tag: None,
            private: false,
            module_name: None,
            function_name: None,
            parameter: None,
            children: None,
        }
    }

    /// Explicit external name, overriding the identifier
    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Hide the field's runtime value from the encoder.
    ///
    /// Private module and function names always use the field's external
    /// name; private parameters and children are skipped entirely.
    pub fn private(mut self) -> Self {
        self.private = true;
        self
    }

    pub fn module_name(mut self, provider: &'a dyn ModuleNameProvider) -> Self {
        self.module_name = Some(provider);
        self
    }

    pub fn function_name(mut self, provider: &'a dyn FunctionNameProvider) -> Self {
        self.function_name = Some(provider);
        self
    }

    pub fn parameter(mut self, provider: &'a dyn ParameterProvider) -> Self {
        self.parameter = Some(provider);
        self
    }

    pub fn children(mut self, children: &'a [Child]) -> Self {
        self.children = Some(children);
        self
    }

    pub fn ident(&self) -> &'static str {
        self.ident
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    /// The name used for this field in generated code
    pub fn scad_name(&self) -> String {
        match self.tag {
            Some(tag) if !tag.is_empty() => tag.to_string(),
            _ => self.ident.to_lowercase(),
        }
    }

    pub fn module_name_provider(&self) -> Option<&'a dyn ModuleNameProvider> {
        self.module_name
    }

    pub fn function_name_provider(&self) -> Option<&'a dyn FunctionNameProvider> {
        self.function_name
    }

    pub fn parameter_provider(&self) -> Option<&'a dyn ParameterProvider> {
        self.parameter
    }

    pub fn child_sequence(&self) -> Option<&'a [Child]> {
        self.children
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("ident", &self.ident)
            .field("tag", &self.tag)
            .field("private", &self.private)
            .field("module_name", &self.module_name.is_some())
            .field("function_name", &self.function_name.is_some())
            .field("parameter", &self.parameter.is_some())
            .field("children", &self.children.map(<[Child]>::len))
            .finish()
    }
}
