// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Wrapping children in transforms and boolean operations

use super::Child;

/// A node that can take a child and become its parent
pub trait Wrapper {
    fn wrap(self, child: Child) -> Child;
}

impl<F> Wrapper for F
where
    F: FnOnce(Child) -> Child,
{
    fn wrap(self, child: Child) -> Child {
        self(child)
    }
}

impl Child {
    /// Wrap this child, returning the new parent
    pub fn apply<W: Wrapper>(self, wrapper: W) -> Child {
        wrapper.wrap(self)
    }

    /// Wrap this child with each wrapper in turn, innermost first
    pub fn apply_all<W, I>(self, wrappers: I) -> Child
    where
        W: Wrapper,
        I: IntoIterator<Item = W>,
    {
        wrappers
            .into_iter()
            .fold(self, |child, wrapper| wrapper.wrap(child))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{encode, Field, Node};

    struct Leaf;

    impl Node for Leaf {
        fn fields(&self) -> Vec<Field<'_>> {
            Vec::new()
        }
    }

    struct Group {
        children: Vec<Child>,
    }

    impl Node for Group {
        fn fields(&self) -> Vec<Field<'_>> {
            vec![Field::new("children").children(&self.children)]
        }
    }

    fn grouped(child: Child) -> Child {
        Child::new(Group {
            children: vec![child],
        })
    }

    #[test]
    fn test_apply_nests_outward() {
        let wrapped = Child::new(Leaf).apply_all([grouped, grouped]);
        let function = encode(wrapped.node()).unwrap();

        assert_eq!(function.name, "group");
        assert_eq!(function.children[0].name, "group");
        assert_eq!(function.children[0].children[0].name, "leaf");
    }

    #[test]
    fn test_closure_wrapper() {
        let wrapped = Child::new(Leaf).apply(|child: Child| {
            Child::new(Group {
                children: vec![child, Child::new(Leaf)],
            })
        });
        assert_eq!(encode(wrapped.node()).unwrap().children.len(), 2);
    }
}
