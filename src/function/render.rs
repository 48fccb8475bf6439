// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! OpenSCAD text rendering

use super::{Function, DEFAULT_EXTENSION};
use crate::error::Result;

const INDENT: &str = "  ";

fn indented(lines: Vec<String>) -> impl Iterator<Item = String> {
    lines.into_iter().map(|line| format!("{}{}", INDENT, line))
}

impl Function {
    fn module_name_str(&self) -> &str {
        self.module_name.as_deref().unwrap_or_default()
    }

    /// `k=v` pairs sorted by key, joined by `", "`
    pub fn parameters_string(&self) -> String {
        self.parameters
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The call with its children expanded.
    ///
    /// Children that are modules are rendered as references to the module.
    pub fn render_call(&self) -> Vec<String> {
        let open = format!("{}({})", self.name, self.parameters_string());

        if self.children.is_empty() {
            return vec![format!("{};", open)];
        }

        let mut lines = vec![format!("{} {{", open)];
        for child in &self.children {
            lines.extend(indented(child.render_call_or_reference()));
        }
        lines.push("}".to_string());
        lines
    }

    /// `name();` for a module, `None` for a plain call
    pub fn render_reference(&self) -> Option<String> {
        self.module_name.as_ref().map(|name| format!("{}();", name))
    }

    /// How this Function appears inside its parent
    pub fn render_call_or_reference(&self) -> Vec<String> {
        match self.render_reference() {
            Some(reference) => vec![reference],
            None => self.render_call(),
        }
    }

    /// The `module name() { ... }` definition followed by a call to it, so a
    /// module file renders on its own when opened directly.
    pub fn render_module(&self) -> Vec<String> {
        let module_name = self.module_name_str();

        let mut lines = vec![format!("module {}() {{", module_name)];
        lines.extend(indented(self.render_call()));
        lines.push("}".to_string());
        lines.push(format!("{}();", module_name));
        lines
    }

    /// Relative path of this module's file from its parent's directory
    pub fn module_path(&self, extension: &str) -> String {
        let module_name = self.module_name_str();
        format!("{}/{}.{}", module_name, module_name, extension)
    }

    /// `use <...>` directives for every distinct module below this Function
    pub fn use_directives(&self, extension: &str) -> Result<Vec<String>> {
        Ok(self
            .deduplicate_modules()?
            .into_iter()
            .map(|module| format!("use <{}>", module.module_path(extension)))
            .collect())
    }

    /// All lines of the file for this Function, ending with an empty line
    pub fn render_file_with_extension(&self, extension: &str) -> Result<Vec<String>> {
        let mut lines = self.use_directives(extension)?;

        if self.is_module() {
            lines.extend(self.render_module());
        } else {
            lines.extend(self.render_call());
        }

        lines.push(String::new());
        Ok(lines)
    }

    pub fn render_file(&self) -> Result<Vec<String>> {
        self.render_file_with_extension(DEFAULT_EXTENSION)
    }

    /// File content as a single string
    pub fn content_with_extension(&self, extension: &str) -> Result<String> {
        Ok(self.render_file_with_extension(extension)?.join("\n"))
    }

    pub fn content(&self) -> Result<String> {
        self.content_with_extension(DEFAULT_EXTENSION)
    }
}
