// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

use super::Field;
use crate::error::Result;
use std::fmt;

/// A composite value that can be encoded into a [`Function`](crate::Function)
pub trait Node {
    /// Declared fields, in declaration order
    fn fields(&self) -> Vec<Field<'_>>;

    /// Another object to encode in place of this one.
    ///
    /// When this returns a replacement, everything derived from [`fields`](Node::fields)
    /// except the module name is discarded.
    fn encode_instead(&self) -> Result<Option<Child>> {
        Ok(None)
    }

    /// Short type name, used for the fallback call name and in errors
    fn type_name(&self) -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl<N: Node + ?Sized> Node for Box<N> {
    fn fields(&self) -> Vec<Field<'_>> {
        (**self).fields()
    }

    fn encode_instead(&self) -> Result<Option<Child>> {
        (**self).encode_instead()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }
}

/// Strip the module path and generic arguments from a full type name
pub fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// An owned child of any [`Node`] type
pub struct Child(Box<dyn Node>);

impl Child {
    pub fn new<N: Node + 'static>(node: N) -> Self {
        Self(Box::new(node))
    }

    pub fn node(&self) -> &dyn Node {
        self.0.as_ref()
    }
}

impl<N: Node + 'static> From<N> for Child {
    fn from(node: N) -> Self {
        Self::new(node)
    }
}

impl fmt::Debug for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Child").field(&self.0.type_name()).finish()
    }
}
