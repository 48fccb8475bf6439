// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Writing module trees to disk
//!
//! Each module is written to `<dir>/<module>.<ext>` and each distinct child
//! module to `<dir>/<child>/<child>.<ext>`, so `use` directives resolve
//! relative to the including file.

use super::{Function, DEFAULT_EXTENSION};
use crate::config::OutputConfig;
use crate::error::{Result, ScadError};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Whether a module name can be used as a single path component
pub fn is_path_safe(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}

/// Whether an extension can follow the final `.` of a file name
pub fn is_extension_safe(extension: &str) -> bool {
    !extension.is_empty() && !extension.contains(['.', '/', '\\', '\0'])
}

/// Writes a module and its nested modules as a directory tree
#[derive(Debug, Clone)]
pub struct Writer {
    extension: String,
    parallel: bool,
}

impl Writer {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            extension: config.extension.clone(),
            parallel: config.parallel,
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Write `function`, which must be a module, into `dir`
    pub fn write(&self, function: &Function, dir: impl AsRef<Path>) -> Result<()> {
        if !function.is_module() {
            return Err(ScadError::NotAModule(function.name.clone()));
        }

        if !is_extension_safe(&self.extension) {
            return Err(ScadError::InvalidExtension(self.extension.clone()));
        }

        Self::validate_module_names(function, &mut Vec::new())?;
        self.write_module(function, dir.as_ref())
    }

    /// Check every module name in the tree before anything touches the disk.
    ///
    /// A module may not reuse the name of a module it is nested in.
    fn validate_module_names<'a>(
        function: &'a Function,
        ancestors: &mut Vec<&'a str>,
    ) -> Result<()> {
        let name = function.module_name.as_deref();
        if let Some(name) = name {
            if !is_path_safe(name) {
                return Err(ScadError::InvalidModuleName(name.to_string()));
            }
            if ancestors.contains(&name) {
                return Err(ScadError::ModuleNameConflict(name.to_string()));
            }
            ancestors.push(name);
        }

        for child in &function.children {
            Self::validate_module_names(child, ancestors)?;
        }

        if name.is_some() {
            ancestors.pop();
        }
        Ok(())
    }

    fn write_module(&self, function: &Function, dir: &Path) -> Result<()> {
        let module_name = function.module_name.as_deref().unwrap_or_default();
        let content = function.content_with_extension(&self.extension)?;

        fs::create_dir_all(dir).map_err(|e| ScadError::io(dir, e))?;

        let file = dir.join(format!("{}.{}", module_name, self.extension));
        fs::write(&file, content).map_err(|e| ScadError::io(&file, e))?;
        debug!(module = module_name, path = %file.display(), "wrote module");

        let children = function.deduplicate_modules()?;
        let write_child = |child: &&Function| {
            let child_dir = dir.join(child.module_name.as_deref().unwrap_or_default());
            self.write_module(child, &child_dir)
        };

        if self.parallel {
            children.par_iter().try_for_each(write_child)
        } else {
            children.iter().try_for_each(write_child)
        }
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            parallel: false,
        }
    }
}

impl Function {
    /// Write this module and its nested modules into `dir`
    pub fn write(&self, dir: impl AsRef<Path>) -> Result<()> {
        Writer::default().write(self, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Function {
        let part = Function::new("cube")
            .with_parameter("size", "10")
            .with_module_name("part");
        Function::new("union")
            .with_module_name("assembly")
            .with_child(part.clone())
            .with_child(Function::new("translate").with_child(part))
    }

    #[test]
    fn test_is_path_safe() {
        assert!(is_path_safe("dimples_3"));
        assert!(!is_path_safe(""));
        assert!(!is_path_safe(".."));
        assert!(!is_path_safe("a/b"));
        assert!(!is_path_safe("a\\b"));
    }

    #[test]
    fn test_write_requires_module() {
        let dir = TempDir::new().unwrap();
        let err = Function::new("cube").write(dir.path()).unwrap_err();
        assert!(matches!(err, ScadError::NotAModule(name) if name == "cube"));
    }

    #[test]
    fn test_write_layout() {
        let dir = TempDir::new().unwrap();
        sample().write(dir.path()).unwrap();

        let top = fs::read_to_string(dir.path().join("assembly.scad")).unwrap();
        assert!(top.starts_with("use <part/part.scad>\n"));

        let part = fs::read_to_string(dir.path().join("part").join("part.scad")).unwrap();
        assert_eq!(part, "module part() {\n  cube(size=10);\n}\npart();\n");
    }

    #[test]
    fn test_parallel_write_matches_sequential() {
        let sequential = TempDir::new().unwrap();
        let parallel = TempDir::new().unwrap();

        Writer::default().write(&sample(), sequential.path()).unwrap();
        let config = OutputConfig {
            parallel: true,
            ..Default::default()
        };
        Writer::new(&config).write(&sample(), parallel.path()).unwrap();

        for file in ["assembly.scad", "part/part.scad"] {
            assert_eq!(
                fs::read_to_string(sequential.path().join(file)).unwrap(),
                fs::read_to_string(parallel.path().join(file)).unwrap()
            );
        }
    }

    #[test]
    fn test_custom_extension() {
        let dir = TempDir::new().unwrap();
        let config = OutputConfig {
            extension: "txt".to_string(),
            ..Default::default()
        };
        Writer::new(&config).write(&sample(), dir.path()).unwrap();

        let top = fs::read_to_string(dir.path().join("assembly.txt")).unwrap();
        assert!(top.starts_with("use <part/part.txt>\n"));
        assert!(dir.path().join("part/part.txt").exists());
    }

    #[test]
    fn test_unsafe_module_name_rejected_before_writing() {
        let dir = TempDir::new().unwrap();
        let tree = Function::new("union")
            .with_module_name("top")
            .with_child(Function::new("cube").with_module_name("../escape"));

        let err = tree.write(dir.path()).unwrap_err();
        assert!(matches!(err, ScadError::InvalidModuleName(_)));
        assert!(!dir.path().join("top.scad").exists());
    }

    #[test]
    fn test_is_extension_safe() {
        assert!(is_extension_safe("scad"));
        assert!(!is_extension_safe(""));
        assert!(!is_extension_safe("tar.gz"));
        assert!(!is_extension_safe("a/b"));
    }

    #[test]
    fn test_empty_extension_rejected_before_writing() {
        let dir = TempDir::new().unwrap();
        let config = OutputConfig {
            extension: String::new(),
            ..Default::default()
        };

        let err = Writer::new(&config).write(&sample(), dir.path()).unwrap_err();
        assert!(matches!(err, ScadError::InvalidExtension(ext) if ext.is_empty()));
        assert!(!dir.path().join("assembly.").exists());
    }

    #[test]
    fn test_module_reusing_ancestor_name_fails() {
        let dir = TempDir::new().unwrap();
        let tree = Function::new("union")
            .with_module_name("part")
            .with_child(
                Function::new("translate")
                    .with_child(Function::new("cube").with_module_name("part")),
            );

        assert!(matches!(
            tree.write(dir.path()),
            Err(ScadError::ModuleNameConflict(name)) if name == "part"
        ));
        assert!(!dir.path().join("part.scad").exists());
    }

    #[test]
    fn test_same_name_in_separate_branches_is_allowed() {
        let dir = TempDir::new().unwrap();
        let leaf = Function::new("cube").with_module_name("leaf");
        let tree = Function::new("union")
            .with_module_name("top")
            .with_child(Function::new("union").with_module_name("a").with_child(leaf.clone()))
            .with_child(Function::new("union").with_module_name("b").with_child(leaf));

        tree.write(dir.path()).unwrap();
        assert!(dir.path().join("a/leaf/leaf.scad").exists());
        assert!(dir.path().join("b/leaf/leaf.scad").exists());
    }

    #[test]
    fn test_io_failure_reports_path() {
        let dir = TempDir::new().unwrap();
        let occupied = dir.path().join("occupied");
        fs::write(&occupied, "not a directory").unwrap();

        match sample().write(&occupied) {
            Err(ScadError::Io { path, .. }) => assert_eq!(path, occupied),
            other => panic!("expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_conflict_fails_write() {
        let dir = TempDir::new().unwrap();
        let tree = Function::new("union")
            .with_module_name("top")
            .with_child(Function::new("cube").with_module_name("part"))
            .with_child(Function::new("sphere").with_module_name("part"));

        assert!(matches!(
            tree.write(dir.path()),
            Err(ScadError::ModuleNameConflict(name)) if name == "part"
        ));
    }
}
